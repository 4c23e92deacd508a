use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use rand::Rng;

use crate::box_glyph::BoxGlyph;
use crate::cell::{Cell, Role};
use crate::error::{LabyrinthError, Result};
use crate::wall::{SharedWall, Wall};
use crate::wall_position::WallPosition;

/// Plateau rectangulaire de cases séparées par des murs partagés.
///
/// La grille possède le treillis de murs : `vertical_walls[r][c]` est le mur
/// à gauche de la case `(r, c)`, `horizontal_walls[r][c]` celui au-dessus.
/// Les cases ne tiennent que des références vers ces segments.
#[derive(Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
    vertical_walls: Vec<Vec<SharedWall>>,
    horizontal_walls: Vec<Vec<SharedWall>>,
    start: (usize, usize),
    finish: (usize, usize),
}

/// Nombre de points du treillis, `None` si le calcul déborde.
fn lattice_points(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_add(1)?.checked_mul(cols.checked_add(1)?)
}

fn wall_lattice(rows: usize, cols: usize) -> Vec<Vec<SharedWall>> {
    (0..rows)
        .map(|_| (0..cols).map(|_| Wall::shared()).collect())
        .collect()
}

impl Grid {
    /// Crée une grille `rows x cols` entourée d'une bordure fermée, avec le
    /// départ en haut à gauche et l'arrivée en bas à droite.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let too_small = rows.checked_mul(cols).map_or(true, |n| n <= 1);
        if too_small || lattice_points(rows, cols).is_none() {
            warn!("Refusing to build a {}x{} labyrinth", rows, cols);
            return Err(LabyrinthError::InvalidDimensions { rows, cols });
        }

        let vertical_walls = wall_lattice(rows, cols + 1);
        let horizontal_walls = wall_lattice(rows + 1, cols);

        let cells = (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| {
                        Cell::new(
                            Rc::clone(&vertical_walls[r][c]),
                            Rc::clone(&horizontal_walls[r][c]),
                            Rc::clone(&vertical_walls[r][c + 1]),
                            Rc::clone(&horizontal_walls[r + 1][c]),
                        )
                    })
                    .collect()
            })
            .collect();

        let mut grid = Self {
            rows,
            cols,
            cells,
            vertical_walls,
            horizontal_walls,
            start: (0, 0),
            finish: (rows - 1, cols - 1),
        };
        grid.close_border();
        grid.cells[0][0].set_role(Role::Start);
        grid.cells[rows - 1][cols - 1].set_role(Role::Finish);

        debug!("Built a {}x{} labyrinth", rows, cols);
        Ok(grid)
    }

    fn close_border(&self) {
        for wall in self.horizontal_walls[0].iter().chain(&self.horizontal_walls[self.rows]) {
            wall.activate();
        }
        for row in &self.vertical_walls {
            row[0].activate();
            row[self.cols].activate();
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn finish(&self) -> (usize, usize) {
        self.finish
    }

    fn check_square(&self, row: usize, col: usize) -> Result<()> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            warn!("Square ({}, {}) is outside the {}x{} labyrinth", row, col, self.rows, self.cols);
            Err(LabyrinthError::InvalidSquare {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Récupère une case en lecture seule.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        self.check_square(row, col)?;
        Ok(&self.cells[row][col])
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell> {
        self.check_square(row, col)?;
        Ok(&mut self.cells[row][col])
    }

    pub fn role(&self, row: usize, col: usize) -> Result<Role> {
        Ok(self.cell(row, col)?.role())
    }

    pub fn has_wall(&self, row: usize, col: usize, pos: WallPosition) -> Result<bool> {
        Ok(self.cell(row, col)?.has_wall(pos))
    }

    /// Case qui partage le mur `pos` de `(row, col)`, ou `None` si ce mur
    /// appartient à la bordure.
    pub fn neighbor(&self, row: usize, col: usize, pos: WallPosition) -> Option<(usize, usize)> {
        let (dr, dc) = pos.offset();
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < self.rows && c < self.cols).then_some((r, c))
    }

    pub fn set_trap(&mut self, row: usize, col: usize) -> Result<()> {
        self.cell_mut(row, col)?.set_trap().inspect_err(|e| {
            warn!("Cannot put a trap on ({}, {}): {}", row, col, e);
        })?;
        debug!("Trap set on ({}, {})", row, col);
        Ok(())
    }

    pub fn count_traps(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_trap()).count()
    }

    /// Déplace le départ. L'ancien départ redevient une case normale.
    pub fn set_start(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_square(row, col)?;
        if (row, col) == self.finish {
            return Err(self.reject_role_swap(Role::Finish, Role::Start));
        }
        let previous = std::mem::replace(&mut self.start, (row, col));
        self.move_role(previous, (row, col), Role::Start);
        Ok(())
    }

    /// Déplace l'arrivée. L'ancienne arrivée redevient une case normale.
    pub fn set_finish(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_square(row, col)?;
        if (row, col) == self.start {
            return Err(self.reject_role_swap(Role::Start, Role::Finish));
        }
        let previous = std::mem::replace(&mut self.finish, (row, col));
        self.move_role(previous, (row, col), Role::Finish);
        Ok(())
    }

    fn reject_role_swap(&self, from: Role, to: Role) -> LabyrinthError {
        warn!("The {} square cannot also be the {}", from, to);
        LabyrinthError::InvalidTransition { from, to }
    }

    fn move_role(&mut self, previous: (usize, usize), target: (usize, usize), role: Role) {
        let (row, col) = target;
        self.cells[row][col].set_role(role);
        if previous != target {
            self.cells[previous.0][previous.1].set_role(Role::Plain);
        }
        debug!("{} moved from {:?} to {:?}", role, previous, target);
    }

    pub fn set_wall(&mut self, row: usize, col: usize, pos: WallPosition) -> Result<()> {
        self.cell(row, col)?.set_wall(pos);
        debug!("Wall set on the {} side of ({}, {})", pos, row, col);
        Ok(())
    }

    /// Ouvre un mur intérieur. Les murs de la bordure ne s'enlèvent pas.
    pub fn remove_wall(&mut self, row: usize, col: usize, pos: WallPosition) -> Result<()> {
        self.check_square(row, col)?;
        if self.neighbor(row, col, pos).is_none() {
            warn!("Refusing to open the border on the {} side of ({}, {})", pos, row, col);
            return Err(LabyrinthError::BorderWall { row, col, side: pos });
        }
        self.cells[row][col].remove_wall(pos);
        debug!("Wall removed on the {} side of ({}, {})", pos, row, col);
        Ok(())
    }

    pub fn add_all_walls(&mut self) {
        for wall in self.vertical_walls.iter().chain(&self.horizontal_walls).flatten() {
            wall.activate();
        }
    }

    /// Ajoute des murs au hasard. Rien ne garantit que l'arrivée reste
    /// accessible depuis le départ.
    pub fn add_random_walls(&mut self) {
        self.add_random_walls_with(&mut rand::rng());
    }

    pub fn add_random_walls_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let max_walls = (self.rows + 1) * (self.cols + 1);
        let count = rng.random_range(0..max_walls);
        for _ in 0..count {
            let pos = WallPosition::random(rng);
            let row = rng.random_range(0..self.rows);
            let col = rng.random_range(0..self.cols);
            self.cells[row][col].set_wall(pos);
        }
        debug!("Placed {} random walls", count);
    }

    /// Glyphe de chaque point du treillis, `(rows + 1) x (cols + 1)`.
    ///
    /// Le point `(i, j)` fusionne les coins des (au plus) quatre cases qui le
    /// touchent : `(i-1, j-1)`, `(i-1, j)`, `(i, j-1)` et `(i, j)`.
    pub fn corner_lattice(&self) -> Vec<Vec<BoxGlyph>> {
        (0..=self.rows)
            .map(|i| (0..=self.cols).map(|j| self.lattice_point(i, j)).collect())
            .collect()
    }

    fn lattice_point(&self, i: usize, j: usize) -> BoxGlyph {
        let mut glyph = BoxGlyph::None;
        if i > 0 && j > 0 {
            glyph |= self.cells[i - 1][j - 1].bottom_right_corner();
        }
        if i > 0 && j < self.cols {
            glyph |= self.cells[i - 1][j].bottom_left_corner();
        }
        if i < self.rows && j > 0 {
            glyph |= self.cells[i][j - 1].top_right_corner();
        }
        if i < self.rows && j < self.cols {
            glyph |= self.cells[i][j].top_left_corner();
        }
        glyph
    }

    /// Dessine la grille, une ligne de texte terminée par `\n` à chaque fois :
    /// `2 * rows + 1` lignes au total.
    pub fn render(&self) -> String {
        let corners = self.corner_lattice();
        let mut out = String::new();

        for (i, row) in self.cells.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                out.push(corners[i][j].symbol());
                out.push_str(&cell.render_top_wall());
            }
            out.push(corners[i][self.cols].symbol());
            out.push('\n');

            out.push(row[0].render_left_wall());
            for cell in row {
                out.push_str(cell.render());
                out.push(cell.render_right_wall());
            }
            out.push('\n');
        }

        let last = &self.cells[self.rows - 1];
        for (j, cell) in last.iter().enumerate() {
            out.push(corners[self.rows][j].symbol());
            out.push_str(&cell.render_bottom_wall());
        }
        out.push(corners[self.rows][self.cols].symbol());
        out.push('\n');

        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
