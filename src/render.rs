use rayon::prelude::*;

use crate::constants::*;
use crate::grid::Grid;

pub struct Render {
    pub buffer: Vec<u8>,
    pub buffer_width: usize,
    pub buffer_height: usize,
}

impl Default for Render {
    fn default() -> Self {
        Self::new(GRID_ROWS, GRID_COLS)
    }
}

impl Render {
    /// Cria um buffer de imagem RGBA com `CELL_SIZE` pixels por célula.
    pub fn new(rows: usize, cols: usize) -> Self {
        let buffer_width = cols * CELL_SIZE;
        let buffer_height = rows * CELL_SIZE;
        let buffer = vec![0; buffer_width * buffer_height * 4];

        Self {
            buffer,
            buffer_width,
            buffer_height,
        }
    }

    /// Rasteriza a grade inteira no buffer de imagem, uma linha de varredura
    /// por vez. O primeiro pixel de cada célula, na horizontal e na
    /// vertical, recebe a cor das linhas da grade. A grade passada deve ter
    /// as dimensões usadas na construção do buffer.
    pub fn render(&mut self, grid: &Grid) {
        let buffer_width = self.buffer_width;

        self.buffer
            .par_chunks_mut(buffer_width * 4)
            .enumerate()
            .for_each(|(y, scanline)| {
                let row = y / CELL_SIZE;
                let on_row_line = y % CELL_SIZE == 0;

                for x in 0..buffer_width {
                    let rgba = if on_row_line || x % CELL_SIZE == 0 {
                        GRID_LINE_COLOR
                    } else {
                        grid.cell(row, x / CELL_SIZE).to_rgba()
                    };

                    let index = x * 4;
                    scanline[index..index + 4].copy_from_slice(&rgba);
                }
            });
    }
}

/// Converte uma posição sobre o canvas, em pixels a partir do canto superior
/// esquerdo, para as coordenadas da célula sob o ponteiro. Posições fora do
/// canvas são recortadas para a célula mais próxima.
pub fn canvas_pos_to_cell(x: f32, y: f32) -> (usize, usize) {
    let row = (y as usize / CELL_SIZE).min(GRID_ROWS - 1);
    let col = (x as usize / CELL_SIZE).min(GRID_COLS - 1);
    (row, col)
}
