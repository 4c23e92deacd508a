use std::cell::Cell as Flag;
use std::rc::Rc;

/// Un segment de mur du labyrinthe.
///
/// Un même segment est partagé (via `Rc`) par les deux cellules qu'il sépare,
/// ou par une cellule et la bordure. L'activer depuis une cellule le rend donc
/// visible depuis sa voisine.
#[derive(Debug, Default)]
pub struct Wall {
    active: Flag<bool>,
}

/// Référence partagée vers un segment de mur.
pub type SharedWall = Rc<Wall>;

impl Wall {
    /// Crée un segment inactif, prêt à être partagé.
    pub fn shared() -> SharedWall {
        Rc::new(Self::default())
    }

    pub fn activate(&self) {
        self.active.set(true);
    }

    pub fn deactivate(&self) {
        self.active.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}
