use eframe::egui::color_picker::{color_picker_color32, Alpha};
use eframe::egui::{Color32, TextEdit, Ui};
use crate::app::parse_input::*;
use crate::color::{hex_to_rgb, rgb_to_hex};
use crate::constants::*;
use crate::types::CellColor;

pub struct ColorInputData {
    pub picker: Color32,
    pub text: String,
}

impl Default for ColorInputData {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR_HEX)
    }
}

impl ColorInputData {
    /// Monta o estado do seletor a partir de um código `#RRGGBB`. Códigos
    /// que não podem ser convertidos caem no branco.
    pub fn new(hex: &str) -> Self {
        let color = CellColor::from_hex(hex).unwrap_or(CellColor::WHITE);
        Self {
            picker: color.to_color32(),
            text: hex.to_string(),
        }
    }
}

/// Seletor da cor ativa: roda de cores mais campo de texto hexadecimal com
/// botão de aplicar. Devolve a cor escolhida neste quadro, já normalizada
/// para `#RRGGBB`, quando o usuário mexe na roda ou aplica o campo.
pub fn color_input(ui: &mut Ui, data: &mut ColorInputData) -> Option<String> {
    let mut selected = None;

    if color_picker_color32(ui, &mut data.picker, Alpha::Opaque) {
        let hex = rgb_to_hex(data.picker.r(), data.picker.g(), data.picker.b());
        data.text = hex.clone();
        selected = Some(hex);
    }

    ui.horizontal(|ui| {
        ui.add(TextEdit::singleline(&mut data.text)
            .desired_width(GUI_HEX_INPUT_WIDTH));

        if ui.button("Aplicar").clicked() {
            if let Some(hex) = parse_hex_input(&mut data.text) {
                if let Some([r, g, b]) = hex_to_rgb(&hex) {
                    data.picker = Color32::from_rgb(r, g, b);
                }
                selected = Some(hex);
            }
        }
    });

    selected
}
