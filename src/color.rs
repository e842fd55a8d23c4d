/// Converte um código hexadecimal para os três canais RGB.
///
/// Aceita a forma curta de 3 dígitos ("#abc") ou a completa de 6
/// ("#aabbcc"), com ou sem o '#' inicial, maiúsculas ou minúsculas.
/// Qualquer string fora desses formatos devolve None.
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

    let expanded: [u8; 6] = match digits.len() {
        // forma curta: cada dígito é duplicado ("#abc" vira "#aabbcc")
        3 => [
            digits[0], digits[0],
            digits[1], digits[1],
            digits[2], digits[2],
        ],
        6 => [
            digits[0], digits[1],
            digits[2], digits[3],
            digits[4], digits[5],
        ],
        _ => return None,
    };

    let mut channels = [0u8; 3];
    for (i, pair) in expanded.chunks_exact(2).enumerate() {
        let high = hex_digit(pair[0])?;
        let low = hex_digit(pair[1])?;
        channels[i] = high * 16 + low;
    }
    Some(channels)
}

/// Formata os três canais como "#RRGGBB".
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

fn hex_digit(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
