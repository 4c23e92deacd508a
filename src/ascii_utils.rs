/*!
 * # Segments de texte du rendu
 *
 * Largeurs fixes utilisées par le rendu de la grille : un mur horizontal
 * occupe `SEGMENT_WIDTH` caractères, un mur vertical un seul.
 */

use crate::box_glyph::BoxGlyph;

/// Largeur d'une case (et donc d'un mur horizontal) en caractères.
pub const SEGMENT_WIDTH: usize = 3;

/// Mur horizontal : `───` s'il est présent, des espaces sinon.
pub fn horizontal_segment(active: bool) -> String {
    let glyph = if active { BoxGlyph::Dash } else { BoxGlyph::None };
    std::iter::repeat(glyph.symbol()).take(SEGMENT_WIDTH).collect()
}

/// Mur vertical : `│` s'il est présent, un espace sinon.
pub fn vertical_segment(active: bool) -> char {
    if active {
        BoxGlyph::Pipe.symbol()
    } else {
        BoxGlyph::None.symbol()
    }
}
