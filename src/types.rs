use eframe::egui::Color32;
use crate::color::hex_to_rgb;

/// Cor de uma célula da grade (canais de 8 bits).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl CellColor {
    pub const WHITE: CellColor = CellColor::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Constrói a cor a partir de um código hexadecimal ("#RGB" ou "#RRGGBB").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let [r, g, b] = hex_to_rgb(hex)?;
        Some(Self::rgb(r, g, b))
    }

    #[inline(always)]
    pub fn to_color32(self) -> Color32 {
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }

    #[inline(always)]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
