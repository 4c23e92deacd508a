//! Erreurs du labyrinthe.
//!
//! Toutes les opérations valident leurs arguments avant de modifier quoi que ce
//! soit : une erreur laisse la grille dans l'état où elle était.

use thiserror::Error;

use crate::cell::Role;
use crate::wall_position::WallPosition;

#[derive(Debug, Error)]
pub enum LabyrinthError {
    /// La grille doit contenir au moins deux cases.
    #[error("invalid dimensions {rows}x{cols}: the labyrinth needs more than one square")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Coordonnées hors de `[0, rows) x [0, cols)`.
    #[error("square ({row}, {col}) does not exist in a {rows}x{cols} labyrinth")]
    InvalidSquare {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Changement de rôle interdit (une case départ ou arrivée ne devient pas un piège).
    #[error("square is already {from}, it cannot become {to}")]
    InvalidTransition { from: Role, to: Role },

    /// La bordure extérieure reste toujours fermée.
    #[error("the {side} wall of square ({row}, {col}) belongs to the outer border")]
    BorderWall {
        row: usize,
        col: usize,
        side: WallPosition,
    },

    #[error("invalid layout: {0}")]
    Layout(String),

    #[error("layout is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LabyrinthError>;
