use crate::color::hex_to_rgb;
use crate::constants::{GRID_COLS, GRID_ROWS, TINT_ALPHA};
use crate::types::CellColor;

/// Matriz de células do canvas. As operações de pintura e de reinício
/// devolvem uma grade nova; quem chama substitui o valor guardado.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<CellColor>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_ROWS, GRID_COLS)
    }
}

impl Grid {
    /// Cria a grade com todas as células brancas.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![CellColor::WHITE; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cor guardada na célula (row, col). Os índices vêm da enumeração da
    /// própria grade e portanto estão sempre dentro dos limites.
    pub fn cell(&self, row: usize, col: usize) -> CellColor {
        self.cells[row][col]
    }

    /// Pinta a célula (row, col) com a cor dada e aplica a variante com o
    /// alfa de vizinhança às até quatro células ortogonais, recortadas nas
    /// bordas da grade. Se o código hexadecimal não puder ser convertido,
    /// nenhuma célula muda.
    pub fn paint_cell(&self, row: usize, col: usize, color: &str) -> Grid {
        let mut grid = self.clone();
        if let Some([r, g, b]) = hex_to_rgb(color) {
            grid.cells[row][col] = CellColor::rgb(r, g, b);
            for (i, j) in self.neighbors(row, col) {
                grid.cells[i][j] = CellColor::rgba(r, g, b, TINT_ALPHA);
            }
        }
        grid
    }

    /// Devolve uma grade nova das dimensões originais, toda branca.
    pub fn reset(&self) -> Grid {
        Grid::new(self.rows, self.cols)
    }

    /// Vizinhas ortogonais de (row, col): acima, abaixo, à esquerda e à
    /// direita, dentro dos limites da grade.
    fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let mut neighbors = Vec::with_capacity(4);
        if row > 0 {
            neighbors.push((row - 1, col));
        }
        if row + 1 < self.rows {
            neighbors.push((row + 1, col));
        }
        if col > 0 {
            neighbors.push((row, col - 1));
        }
        if col + 1 < self.cols {
            neighbors.push((row, col + 1));
        }
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_hex;
    use rand::Rng;

    fn count_non_white(grid: &Grid) -> usize {
        let mut count = 0;
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if grid.cell(row, col) != CellColor::WHITE {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn new_grid_is_all_white() {
        let grid = Grid::default();
        assert_eq!(grid.rows(), GRID_ROWS);
        assert_eq!(grid.cols(), GRID_COLS);
        assert_eq!(count_non_white(&grid), 0);
    }

    #[test]
    fn paint_sets_target_and_orthogonal_neighbors_only() {
        let grid = Grid::default().paint_cell(10, 20, "#FFB1FF");

        assert_eq!(grid.rows(), GRID_ROWS);
        assert_eq!(grid.cols(), GRID_COLS);
        assert_eq!(grid.cell(10, 20), CellColor::rgb(255, 177, 255));
        for (row, col) in [(9, 20), (11, 20), (10, 19), (10, 21)] {
            assert_eq!(grid.cell(row, col), CellColor::rgba(255, 177, 255, TINT_ALPHA));
        }
        // centro + quatro vizinhas, nada além
        assert_eq!(count_non_white(&grid), 5);
        assert_eq!(grid.cell(9, 19), CellColor::WHITE);
        assert_eq!(grid.cell(11, 21), CellColor::WHITE);
    }

    #[test]
    fn tint_keeps_full_opacity() {
        let grid = Grid::default().paint_cell(5, 5, "#336699");
        let tint = grid.cell(4, 5);
        assert_eq!(tint.a, 255);
        assert_eq!((tint.r, tint.g, tint.b), (0x33, 0x66, 0x99));
    }

    #[test]
    fn corner_paint_is_clipped_at_the_boundary() {
        let grid = Grid::default().paint_cell(0, 0, "#ff0000");
        assert_eq!(grid.cell(0, 0), CellColor::rgb(255, 0, 0));
        assert_eq!(grid.cell(0, 1), CellColor::rgba(255, 0, 0, TINT_ALPHA));
        assert_eq!(grid.cell(1, 0), CellColor::rgba(255, 0, 0, TINT_ALPHA));
        assert_eq!(count_non_white(&grid), 3);
    }

    #[test]
    fn opposite_corner_paint_is_clipped_at_the_boundary() {
        let grid = Grid::default().paint_cell(GRID_ROWS - 1, GRID_COLS - 1, "#00ff00");
        assert_eq!(count_non_white(&grid), 3);
        assert_eq!(
            grid.cell(GRID_ROWS - 2, GRID_COLS - 1),
            CellColor::rgba(0, 255, 0, TINT_ALPHA)
        );
        assert_eq!(
            grid.cell(GRID_ROWS - 1, GRID_COLS - 2),
            CellColor::rgba(0, 255, 0, TINT_ALPHA)
        );
    }

    #[test]
    fn corner_paint_on_two_by_two_grid() {
        let grid = Grid::new(2, 2).paint_cell(0, 0, "#abc");
        assert_eq!(grid.cell(0, 0), CellColor::rgb(170, 187, 204));
        assert_eq!(grid.cell(0, 1), CellColor::rgba(170, 187, 204, TINT_ALPHA));
        assert_eq!(grid.cell(1, 0), CellColor::rgba(170, 187, 204, TINT_ALPHA));
        assert_eq!(grid.cell(1, 1), CellColor::WHITE);
    }

    #[test]
    fn repaint_overwrites_previous_tint() {
        let grid = Grid::default()
            .paint_cell(10, 20, "#ff0000")
            .paint_cell(10, 21, "#0000ff");
        // a vizinhança da segunda pintura cobre o centro da primeira
        assert_eq!(grid.cell(10, 20), CellColor::rgba(0, 0, 255, TINT_ALPHA));
        assert_eq!(grid.cell(10, 21), CellColor::rgb(0, 0, 255));
    }

    #[test]
    fn unparseable_color_changes_nothing() {
        let before = Grid::default().paint_cell(3, 3, "#123456");
        let after = before.paint_cell(7, 7, "not-a-color");
        assert_eq!(after, before);
    }

    #[test]
    fn reset_restores_the_all_white_grid() {
        let painted = Grid::default()
            .paint_cell(0, 0, "#ff0000")
            .paint_cell(17, 30, "#00ff00")
            .paint_cell(GRID_ROWS - 1, GRID_COLS - 1, "#0000ff");

        let reset = painted.reset();
        assert_eq!(reset.rows(), GRID_ROWS);
        assert_eq!(reset.cols(), GRID_COLS);
        assert_eq!(count_non_white(&reset), 0);
        assert_eq!(reset, Grid::default());

        // reiniciar de novo não muda nada
        assert_eq!(reset.reset(), reset);
    }

    #[test]
    fn random_paints_stay_inside_center_and_neighbors() {
        let mut rng = rand::thread_rng();
        let mut grid = Grid::default();
        let mut touched = vec![vec![false; GRID_COLS]; GRID_ROWS];

        for _ in 0..200 {
            let row = rng.gen_range(0..GRID_ROWS);
            let col = rng.gen_range(0..GRID_COLS);
            let color = rgb_to_hex(rng.gen(), rng.gen(), rng.gen());

            grid = grid.paint_cell(row, col, &color);
            assert_eq!(grid.rows(), GRID_ROWS);
            assert_eq!(grid.cols(), GRID_COLS);
            assert_eq!(grid.cell(row, col), CellColor::from_hex(&color).unwrap());

            touched[row][col] = true;
            if row > 0 {
                touched[row - 1][col] = true;
            }
            if row + 1 < GRID_ROWS {
                touched[row + 1][col] = true;
            }
            if col > 0 {
                touched[row][col - 1] = true;
            }
            if col + 1 < GRID_COLS {
                touched[row][col + 1] = true;
            }
        }

        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                if !touched[row][col] {
                    assert_eq!(grid.cell(row, col), CellColor::WHITE);
                }
            }
        }
    }
}
