use std::fmt;
use std::str::FromStr;

use rand::Rng;

/// Côté d'une cellule sur lequel un mur peut se trouver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallPosition {
    Left,
    Top,
    Right,
    Bottom,
}

impl WallPosition {
    pub const ALL: [WallPosition; 4] = [
        WallPosition::Left,
        WallPosition::Top,
        WallPosition::Right,
        WallPosition::Bottom,
    ];

    /// Côté opposé (par ex. Left -> Right), vu depuis la cellule voisine.
    pub fn opposite(self) -> Self {
        match self {
            WallPosition::Left => WallPosition::Right,
            WallPosition::Top => WallPosition::Bottom,
            WallPosition::Right => WallPosition::Left,
            WallPosition::Bottom => WallPosition::Top,
        }
    }

    /// Décalage (ligne, colonne) vers la cellule qui partage ce mur.
    pub fn offset(self) -> (isize, isize) {
        match self {
            WallPosition::Left => (0, -1),
            WallPosition::Top => (-1, 0),
            WallPosition::Right => (0, 1),
            WallPosition::Bottom => (1, 0),
        }
    }

    /// Tire un côté au hasard, de façon uniforme.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for WallPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WallPosition::Left => "Left",
            WallPosition::Top => "Top",
            WallPosition::Right => "Right",
            WallPosition::Bottom => "Bottom",
        };
        f.write_str(name)
    }
}

impl FromStr for WallPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(WallPosition::Left),
            "top" => Ok(WallPosition::Top),
            "right" => Ok(WallPosition::Right),
            "bottom" => Ok(WallPosition::Bottom),
            other => Err(format!("unknown wall side '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_opposite_is_involution() {
        for pos in WallPosition::ALL {
            assert_ne!(pos.opposite(), pos);
            assert_eq!(pos.opposite().opposite(), pos);
        }
    }

    #[test]
    fn test_offsets_cancel_out() {
        for pos in WallPosition::ALL {
            let (dr, dc) = pos.offset();
            let (odr, odc) = pos.opposite().offset();
            assert_eq!((dr + odr, dc + odc), (0, 0));
        }
    }

    #[test]
    fn test_parse_side_names() {
        assert_eq!("Left".parse::<WallPosition>(), Ok(WallPosition::Left));
        assert_eq!("BOTTOM".parse::<WallPosition>(), Ok(WallPosition::Bottom));
        assert!("diagonal".parse::<WallPosition>().is_err());
    }

    #[test]
    fn test_random_covers_every_side() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(WallPosition::random(&mut rng));
        }
        assert_eq!(seen.len(), 4);
    }
}
