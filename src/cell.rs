use std::fmt;

use crate::ascii_utils::{horizontal_segment, vertical_segment};
use crate::box_glyph::BoxGlyph;
use crate::error::{LabyrinthError, Result};
use crate::wall::SharedWall;
use crate::wall_position::WallPosition;

/// Rôle d'une case dans le labyrinthe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Plain,
    Start,
    Finish,
    Trap,
}

impl Role {
    /// Étiquette de 3 caractères affichée au centre de la case.
    pub fn label(self) -> &'static str {
        match self {
            Role::Plain => "   ",
            Role::Start => " S ",
            Role::Finish => " F ",
            Role::Trap => " T ",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Plain => "plain",
            Role::Start => "start",
            Role::Finish => "finish",
            Role::Trap => "trap",
        };
        f.write_str(name)
    }
}

/// Représente une case de la grille.
///
/// La case ne possède pas ses murs : elle tient des références partagées vers
/// les segments de la grille, ceux-là même que tiennent ses voisines.
#[derive(Debug)]
pub struct Cell {
    role: Role,
    left: SharedWall,
    top: SharedWall,
    right: SharedWall,
    bottom: SharedWall,
}

impl Cell {
    pub fn new(left: SharedWall, top: SharedWall, right: SharedWall, bottom: SharedWall) -> Self {
        Self {
            role: Role::Plain,
            left,
            top,
            right,
            bottom,
        }
    }

    fn wall_at(&self, pos: WallPosition) -> &SharedWall {
        match pos {
            WallPosition::Left => &self.left,
            WallPosition::Top => &self.top,
            WallPosition::Right => &self.right,
            WallPosition::Bottom => &self.bottom,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_trap(&self) -> bool {
        self.role == Role::Trap
    }

    pub fn is_plain(&self) -> bool {
        self.role == Role::Plain
    }

    pub fn has_wall(&self, pos: WallPosition) -> bool {
        self.wall_at(pos).is_active()
    }

    /// Active le mur du côté donné (visible aussi depuis la case voisine).
    pub fn set_wall(&self, pos: WallPosition) {
        self.wall_at(pos).activate();
    }

    pub fn remove_wall(&self, pos: WallPosition) {
        self.wall_at(pos).deactivate();
    }

    pub fn set_all_walls(&self) {
        for pos in WallPosition::ALL {
            self.set_wall(pos);
        }
    }

    /// Change le rôle sans condition. Réservé à la grille, qui garantit
    /// l'unicité du départ et de l'arrivée.
    pub(crate) fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Transforme la case en piège. Échoue si c'est le départ ou l'arrivée,
    /// sans toucher au rôle actuel.
    pub fn set_trap(&mut self) -> Result<()> {
        match self.role {
            Role::Plain | Role::Trap => {
                self.role = Role::Trap;
                Ok(())
            }
            from => Err(LabyrinthError::InvalidTransition {
                from,
                to: Role::Trap,
            }),
        }
    }

    // Contributions de la case aux quatre points du treillis qui l'entourent.

    fn corner(&self, horizontal: (WallPosition, BoxGlyph), vertical: (WallPosition, BoxGlyph)) -> BoxGlyph {
        let stubs = [horizontal, vertical]
            .into_iter()
            .filter(|(pos, _)| self.has_wall(*pos))
            .map(|(_, glyph)| glyph);
        BoxGlyph::merge_all(stubs)
    }

    pub fn top_left_corner(&self) -> BoxGlyph {
        self.corner(
            (WallPosition::Top, BoxGlyph::HalfDashRight),
            (WallPosition::Left, BoxGlyph::HalfPipeDown),
        )
    }

    pub fn top_right_corner(&self) -> BoxGlyph {
        self.corner(
            (WallPosition::Top, BoxGlyph::HalfDashLeft),
            (WallPosition::Right, BoxGlyph::HalfPipeDown),
        )
    }

    pub fn bottom_right_corner(&self) -> BoxGlyph {
        self.corner(
            (WallPosition::Bottom, BoxGlyph::HalfDashLeft),
            (WallPosition::Right, BoxGlyph::HalfPipeUp),
        )
    }

    pub fn bottom_left_corner(&self) -> BoxGlyph {
        self.corner(
            (WallPosition::Bottom, BoxGlyph::HalfDashRight),
            (WallPosition::Left, BoxGlyph::HalfPipeUp),
        )
    }

    /// Étiquette du rôle, toujours 3 caractères.
    pub fn render(&self) -> &'static str {
        self.role.label()
    }

    pub fn render_left_wall(&self) -> char {
        vertical_segment(self.has_wall(WallPosition::Left))
    }

    pub fn render_right_wall(&self) -> char {
        vertical_segment(self.has_wall(WallPosition::Right))
    }

    pub fn render_top_wall(&self) -> String {
        horizontal_segment(self.has_wall(WallPosition::Top))
    }

    pub fn render_bottom_wall(&self) -> String {
        horizontal_segment(self.has_wall(WallPosition::Bottom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wall::Wall;
    use std::rc::Rc;

    fn lone_cell() -> Cell {
        Cell::new(Wall::shared(), Wall::shared(), Wall::shared(), Wall::shared())
    }

    #[test]
    fn test_new_cell_is_open_and_plain() {
        let cell = lone_cell();
        assert!(cell.is_plain());
        for pos in WallPosition::ALL {
            assert!(!cell.has_wall(pos));
        }
        assert_eq!(cell.render(), "   ");
    }

    #[test]
    fn test_neighbours_share_the_wall_between_them() {
        let between = Wall::shared();
        let west = Cell::new(Wall::shared(), Wall::shared(), Rc::clone(&between), Wall::shared());
        let east = Cell::new(between, Wall::shared(), Wall::shared(), Wall::shared());

        west.set_wall(WallPosition::Right);
        assert!(east.has_wall(WallPosition::Left));

        east.remove_wall(WallPosition::Left);
        assert!(!west.has_wall(WallPosition::Right));
    }

    #[test]
    fn test_set_trap_transitions() {
        let mut cell = lone_cell();
        cell.set_trap().unwrap();
        assert!(cell.is_trap());
        cell.set_trap().unwrap();
        assert!(cell.is_trap());

        for guarded in [Role::Start, Role::Finish] {
            cell.set_role(guarded);
            let err = cell.set_trap().unwrap_err();
            assert!(matches!(
                err,
                LabyrinthError::InvalidTransition { from, to: Role::Trap } if from == guarded
            ));
            assert_eq!(cell.role(), guarded);
        }
    }

    #[test]
    fn test_corners_follow_walls() {
        let cell = lone_cell();
        assert_eq!(cell.top_left_corner(), BoxGlyph::None);

        cell.set_wall(WallPosition::Top);
        assert_eq!(cell.top_left_corner(), BoxGlyph::HalfDashRight);
        assert_eq!(cell.top_right_corner(), BoxGlyph::HalfDashLeft);
        assert_eq!(cell.bottom_left_corner(), BoxGlyph::None);

        cell.set_wall(WallPosition::Left);
        assert_eq!(cell.top_left_corner(), BoxGlyph::TopLeftCorner);
        assert_eq!(cell.bottom_left_corner(), BoxGlyph::HalfPipeUp);

        cell.set_all_walls();
        assert_eq!(cell.top_right_corner(), BoxGlyph::TopRightCorner);
        assert_eq!(cell.bottom_right_corner(), BoxGlyph::BottomRightCorner);
        assert_eq!(cell.bottom_left_corner(), BoxGlyph::BottomLeftCorner);
    }

    #[test]
    fn test_wall_rendering() {
        let mut cell = lone_cell();
        cell.set_wall(WallPosition::Left);
        cell.set_wall(WallPosition::Bottom);
        cell.set_role(Role::Finish);

        assert_eq!(cell.render(), " F ");
        assert_eq!(cell.render_left_wall(), '│');
        assert_eq!(cell.render_right_wall(), ' ');
        assert_eq!(cell.render_top_wall(), "   ");
        assert_eq!(cell.render_bottom_wall(), "───");
    }
}
