pub mod ascii_utils;
pub mod box_glyph;
pub mod cell;
pub mod error;
pub mod grid;
pub mod layout;
pub mod wall;
pub mod wall_position;

pub use box_glyph::BoxGlyph;
pub use cell::{Cell, Role};
pub use error::{LabyrinthError, Result};
pub use grid::Grid;
pub use layout::{Fill, LabyrinthLayout};
pub use wall_position::WallPosition;

/// Dimensions du labyrinthe de démonstration.
pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;

/// Labyrinthe de démonstration : murs aléatoires, départ en (0,1), arrivée en
/// (4,3) et deux pièges.
pub fn demo_layout() -> LabyrinthLayout {
    LabyrinthLayout {
        fill: Fill::Random,
        start: Some((0, 1)),
        finish: Some((4, 3)),
        traps: vec![(0, 0), (1, 4)],
        ..LabyrinthLayout::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

// -----------------------------------------------------------------------------
// TEST
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scenario() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert_eq!(grid.start(), (0, 0));
        assert_eq!(grid.finish(), (4, 4));

        grid.add_random_walls();
        grid.set_start(0, 1).unwrap();
        grid.set_finish(4, 3).unwrap();
        grid.set_trap(0, 0).unwrap();
        grid.set_trap(1, 4).unwrap();

        assert_eq!(grid.count_traps(), 2);
        assert_eq!(grid.role(0, 1).unwrap(), Role::Start);
        assert_eq!(grid.role(4, 3).unwrap(), Role::Finish);
        assert_eq!(grid.role(0, 0).unwrap(), Role::Trap);
        assert_eq!(grid.role(4, 4).unwrap(), Role::Plain);

        let drawing = grid.render();
        let lines: Vec<Vec<char>> = drawing.lines().map(|l| l.chars().collect()).collect();
        assert_eq!(lines.len(), 11);
        assert!(lines.iter().all(|l| l.len() == 21));

        // Bordure fermée : chaque glyphe du contour contient le trait attendu.
        let top = &lines[0];
        let bottom = &lines[10];
        for col in 0..21 {
            let (t, b) = (top[col], bottom[col]);
            if col % 4 == 0 {
                assert!(matches!(t, '┌' | '┬' | '┐' | '─'), "top {:?}", t);
                assert!(matches!(b, '└' | '┴' | '┘' | '─'), "bottom {:?}", b);
            } else {
                assert_eq!(t, '─');
                assert_eq!(b, '─');
            }
        }
        for line in &lines[1..10] {
            assert!(matches!(line[0], '│' | '├'), "left {:?}", line[0]);
            assert!(matches!(line[20], '│' | '┤'), "right {:?}", line[20]);
        }
        assert_eq!(top[0], '┌');
        assert_eq!(top[20], '┐');
        assert_eq!(bottom[0], '└');
        assert_eq!(bottom[20], '┘');
        assert!(lines[1].iter().collect::<String>().contains(" T "));
        assert!(lines[1].iter().collect::<String>().contains(" S "));
        assert!(lines[9].iter().collect::<String>().contains(" F "));
    }

    #[test]
    fn test_demo_layout_builds() {
        let grid = demo_layout().build().unwrap();
        assert_eq!(grid.count_traps(), 2);
        assert_eq!(grid.start(), (0, 1));
        assert_eq!(grid.finish(), (4, 3));
    }

    #[test]
    fn test_smallest_grid() {
        let grid = Grid::new(1, 2).unwrap();
        assert_eq!(grid.render().lines().count(), 3);
        assert!(!grid.has_wall(0, 0, WallPosition::Right).unwrap());
        assert!(matches!(Grid::new(1, 1), Err(LabyrinthError::InvalidDimensions { rows: 1, cols: 1 })));
    }
}
