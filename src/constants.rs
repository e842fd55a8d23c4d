// Dimensões da grade (fixas durante toda a vida do widget)
pub const GRID_ROWS: usize = 35;
pub const GRID_COLS: usize = 60;

// Lado de cada célula na tela, em pixels
pub const CELL_SIZE: usize = 14;

pub const GUI_CANVAS_WIDTH: f32 = (GRID_COLS * CELL_SIZE) as f32;
pub const GUI_CANVAS_HEIGHT: f32 = (GRID_ROWS * CELL_SIZE) as f32;
pub const GUI_CANVAS_PADDING: f32 = 8.0;
pub const GUI_SIDEBAR_WIDTH: f32 = 260.0;
pub const GUI_HEX_INPUT_WIDTH: f32 = 120.0;

// Cor ativa inicial
pub const DEFAULT_COLOR_HEX: &str = "#FFB1FF";

// Alfa aplicado às células vizinhas de uma pintura (opacidade total)
pub const TINT_ALPHA: u8 = 255;

// Linhas de separação entre as células
pub const GRID_LINE_COLOR: [u8; 4] = [210, 225, 255, 255];
