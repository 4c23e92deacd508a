/*!
 * # Caractères de dessin de boîtes
 *
 * Chaque glyphe est identifié par les demi-segments qu'il couvre autour d'un
 * point : haut, droite, bas, gauche. Ces quatre directions forment un masque
 * de 4 bits, et les 16 masques possibles ont tous un glyphe, donc la fusion
 * (OU binaire puis recherche dans la table) est toujours définie.
 */

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

const UP: u8 = 0x1;
const RIGHT: u8 = 0x2;
const DOWN: u8 = 0x4;
const LEFT: u8 = 0x8;

/// Un caractère de dessin de boîte, indexé par son masque de directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BoxGlyph {
    #[default]
    None = 0,
    HalfPipeUp = UP,
    HalfDashRight = RIGHT,
    BottomLeftCorner = UP | RIGHT,
    HalfPipeDown = DOWN,
    Pipe = UP | DOWN,
    TopLeftCorner = RIGHT | DOWN,
    LeftT = UP | RIGHT | DOWN,
    HalfDashLeft = LEFT,
    BottomRightCorner = UP | LEFT,
    Dash = RIGHT | LEFT,
    BottomT = UP | RIGHT | LEFT,
    TopRightCorner = DOWN | LEFT,
    RightT = UP | DOWN | LEFT,
    TopT = RIGHT | DOWN | LEFT,
    Intersection = UP | RIGHT | DOWN | LEFT,
}

/// Table indexée par le masque : `GLYPHS[g.mask()] == g`.
const GLYPHS: [BoxGlyph; 16] = [
    BoxGlyph::None,
    BoxGlyph::HalfPipeUp,
    BoxGlyph::HalfDashRight,
    BoxGlyph::BottomLeftCorner,
    BoxGlyph::HalfPipeDown,
    BoxGlyph::Pipe,
    BoxGlyph::TopLeftCorner,
    BoxGlyph::LeftT,
    BoxGlyph::HalfDashLeft,
    BoxGlyph::BottomRightCorner,
    BoxGlyph::Dash,
    BoxGlyph::BottomT,
    BoxGlyph::TopRightCorner,
    BoxGlyph::RightT,
    BoxGlyph::TopT,
    BoxGlyph::Intersection,
];

const SYMBOLS: [char; 16] = [
    ' ', '╵', '╶', '└', '╷', '│', '┌', '├', '╴', '┘', '─', '┴', '┐', '┤', '┬', '┼',
];

impl BoxGlyph {
    /// Retrouve le glyphe correspondant à un masque. Seuls les 4 bits de poids
    /// faible sont pris en compte.
    pub fn from_mask(mask: u8) -> Self {
        GLYPHS[(mask & 0xF) as usize]
    }

    pub fn mask(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        SYMBOLS[self.mask() as usize]
    }

    /// Fusionne deux glyphes : union des demi-segments couverts.
    pub fn merge(self, other: BoxGlyph) -> BoxGlyph {
        Self::from_mask(self.mask() | other.mask())
    }

    /// Fusionne un nombre quelconque de glyphes. L'ordre n'a pas d'importance.
    pub fn merge_all<I>(glyphs: I) -> BoxGlyph
    where
        I: IntoIterator<Item = BoxGlyph>,
    {
        glyphs.into_iter().fold(BoxGlyph::None, BoxGlyph::merge)
    }

    pub fn covers_up(self) -> bool {
        self.mask() & UP != 0
    }

    pub fn covers_right(self) -> bool {
        self.mask() & RIGHT != 0
    }

    pub fn covers_down(self) -> bool {
        self.mask() & DOWN != 0
    }

    pub fn covers_left(self) -> bool {
        self.mask() & LEFT != 0
    }
}

impl BitOr for BoxGlyph {
    type Output = BoxGlyph;

    fn bitor(self, rhs: BoxGlyph) -> BoxGlyph {
        self.merge(rhs)
    }
}

impl BitOrAssign for BoxGlyph {
    fn bitor_assign(&mut self, rhs: BoxGlyph) {
        *self = self.merge(rhs);
    }
}

impl fmt::Display for BoxGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
