/*!
 * # Description JSON d'un labyrinthe
 *
 * Permet de construire une `Grid` à partir d'un objet JSON :
 *
 * ```json
 * {
 *   "rows": 5, "cols": 5,
 *   "fill": "random",
 *   "start": [0, 1], "finish": [4, 3],
 *   "traps": [[0, 0], [1, 4]],
 *   "walls": [{"row": 2, "col": 2, "side": "Left"}]
 * }
 * ```
 *
 * Seuls `rows` et `cols` sont obligatoires. Les étapes sont appliquées dans
 * cet ordre : remplissage, murs, départ, arrivée, pièges.
 */

use std::path::Path;

use log::info;
use serde_json::Value;

use crate::error::{LabyrinthError, Result};
use crate::grid::Grid;
use crate::wall_position::WallPosition;

/// Murs ajoutés d'un coup, avant les murs individuels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    #[default]
    None,
    All,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallSpec {
    pub row: usize,
    pub col: usize,
    pub side: WallPosition,
}

/// Description complète d'un labyrinthe à construire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabyrinthLayout {
    pub rows: usize,
    pub cols: usize,
    pub fill: Fill,
    pub start: Option<(usize, usize)>,
    pub finish: Option<(usize, usize)>,
    pub traps: Vec<(usize, usize)>,
    pub walls: Vec<WallSpec>,
}

fn layout_error(msg: impl Into<String>) -> LabyrinthError {
    LabyrinthError::Layout(msg.into())
}

fn parse_index(value: &Value, what: &str) -> Result<usize> {
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| layout_error(format!("'{}' must be a non-negative integer, got {}", what, value)))
}

/// Lit une coordonnée de la forme `[row, col]`.
fn parse_square(value: &Value, what: &str) -> Result<(usize, usize)> {
    match value.as_array().map(Vec::as_slice) {
        Some([row, col]) => Ok((parse_index(row, what)?, parse_index(col, what)?)),
        _ => Err(layout_error(format!("'{}' must be a [row, col] pair, got {}", what, value))),
    }
}

fn parse_fill(value: &Value) -> Result<Fill> {
    match value.as_str() {
        Some("none") => Ok(Fill::None),
        Some("all") => Ok(Fill::All),
        Some("random") => Ok(Fill::Random),
        _ => Err(layout_error(format!(
            "'fill' must be one of \"none\", \"all\", \"random\", got {}",
            value
        ))),
    }
}

fn parse_wall(value: &Value) -> Result<WallSpec> {
    let field = |name: &str| {
        value
            .get(name)
            .ok_or_else(|| layout_error(format!("wall entry {} has no '{}'", value, name)))
    };
    let side = field("side")?
        .as_str()
        .ok_or_else(|| layout_error("wall 'side' must be a string"))?
        .parse::<WallPosition>()
        .map_err(layout_error)?;
    Ok(WallSpec {
        row: parse_index(field("row")?, "row")?,
        col: parse_index(field("col")?, "col")?,
        side,
    })
}

fn parse_list<T>(json: &Value, key: &str, parse: impl Fn(&Value) -> Result<T>) -> Result<Vec<T>> {
    match json.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(parse).collect(),
        Some(other) => Err(layout_error(format!("'{}' must be an array, got {}", key, other))),
    }
}

impl LabyrinthLayout {
    /// Grille vide `rows x cols`, sans murs intérieurs.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            fill: Fill::None,
            start: None,
            finish: None,
            traps: Vec::new(),
            walls: Vec::new(),
        }
    }

    pub fn from_value(json: &Value) -> Result<Self> {
        if !json.is_object() {
            return Err(layout_error("a layout must be a JSON object"));
        }
        let dimension = |key: &str| {
            json.get(key)
                .ok_or_else(|| layout_error(format!("missing '{}'", key)))
                .and_then(|v| parse_index(v, key))
        };

        let optional_square = |key: &str| match json.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => parse_square(v, key).map(Some),
        };

        Ok(Self {
            rows: dimension("rows")?,
            cols: dimension("cols")?,
            fill: json.get("fill").map(parse_fill).transpose()?.unwrap_or_default(),
            start: optional_square("start")?,
            finish: optional_square("finish")?,
            traps: parse_list(json, "traps", |v| parse_square(v, "traps"))?,
            walls: parse_list(json, "walls", parse_wall)?,
        })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_value(&json)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        info!("Loaded layout from {}", path.display());
        Self::from_json(&text)
    }

    /// Construit la grille décrite. La première opération refusée interrompt
    /// la construction.
    pub fn build(&self) -> Result<Grid> {
        let mut grid = Grid::new(self.rows, self.cols)?;

        match self.fill {
            Fill::None => {}
            Fill::All => grid.add_all_walls(),
            Fill::Random => grid.add_random_walls(),
        }
        for wall in &self.walls {
            grid.set_wall(wall.row, wall.col, wall.side)?;
        }
        if let Some((row, col)) = self.start {
            grid.set_start(row, col)?;
        }
        if let Some((row, col)) = self.finish {
            grid.set_finish(row, col)?;
        }
        for &(row, col) in &self.traps {
            grid.set_trap(row, col)?;
        }

        info!(
            "Built a {}x{} labyrinth with {} trap(s)",
            self.rows,
            self.cols,
            grid.count_traps()
        );
        Ok(grid)
    }
}
