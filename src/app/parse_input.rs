use crate::color::{hex_to_rgb, rgb_to_hex};

/// Valida o texto digitado no campo de cor e o normaliza para a forma
/// `#RRGGBB`. Em caso de sucesso o campo recebe a forma normalizada e a
/// função a devolve; caso contrário o campo recebe a mensagem de erro.
pub fn parse_hex_input(string: &mut String) -> Option<String> {
    if let Some([r, g, b]) = hex_to_rgb(string.trim()) {
        let normalized = rgb_to_hex(r, g, b);
        *string = normalized.clone();
        Some(normalized)
    } else {
        *string = "Inválido!".to_string();
        None
    }
}
