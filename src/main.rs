use std::path::PathBuf;
use std::process::ExitCode;

use boxed_laby::{demo_layout, Fill, LabyrinthLayout, DEFAULT_COLS, DEFAULT_ROWS};
use clap::Parser;
use log::{error, info};

/// Dessine un labyrinthe avec des caractères de dessin de boîtes.
#[derive(Debug, Parser)]
#[command(name = "boxed-laby", version)]
struct Args {
    /// Fichier JSON décrivant le labyrinthe
    #[arg(long)]
    layout: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Place tous les murs possibles
    #[arg(long, conflicts_with = "random_walls")]
    all_walls: bool,

    /// Place des murs au hasard (le labyrinthe peut devenir insoluble)
    #[arg(long)]
    random_walls: bool,

    /// Case de départ, sous la forme `ligne,colonne`
    #[arg(long, value_parser = parse_square)]
    start: Option<(usize, usize)>,

    #[arg(long, value_parser = parse_square)]
    finish: Option<(usize, usize)>,

    /// Piège, sous la forme `ligne,colonne` (répétable)
    #[arg(long = "trap", value_parser = parse_square)]
    traps: Vec<(usize, usize)>,
}

fn parse_square(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid coordinate '{}': {}", part, e))
    };
    Ok((parse(row)?, parse(col)?))
}

impl Args {
    fn is_bare(&self) -> bool {
        self.layout.is_none()
            && self.rows == DEFAULT_ROWS
            && self.cols == DEFAULT_COLS
            && !self.all_walls
            && !self.random_walls
            && self.start.is_none()
            && self.finish.is_none()
            && self.traps.is_empty()
    }

    /// Les options de la ligne de commande complètent (ou remplacent) le fichier.
    fn into_layout(self) -> boxed_laby::Result<LabyrinthLayout> {
        if self.is_bare() {
            info!("No options given, drawing the demo labyrinth");
            return Ok(demo_layout());
        }

        let mut layout = match &self.layout {
            Some(path) => LabyrinthLayout::from_file(path)?,
            None => LabyrinthLayout::new(self.rows, self.cols),
        };
        if self.all_walls {
            layout.fill = Fill::All;
        } else if self.random_walls {
            layout.fill = Fill::Random;
        }
        layout.start = self.start.or(layout.start);
        layout.finish = self.finish.or(layout.finish);
        layout.traps.extend(self.traps);
        Ok(layout)
    }
}

fn run(args: Args) -> boxed_laby::Result<()> {
    let grid = args.into_layout()?.build()?;
    print!("{}", grid);
    info!("Traps: {}", grid.count_traps());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
