use glam::DVec3;

use crate::models::torpedo::{Torpedo, TorpedoKind};

/// Owns every live torpedo in the current sector.
#[derive(Debug, Default, Clone)]
pub struct TorpedoPool {
    torpedoes: Vec<Torpedo>,
    next_id: u32,
}

impl TorpedoPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch a player torpedo. Returns its id.
    pub fn fire_zylon(&mut self, position: DVec3, velocity: DVec3) -> u32 {
        self.push(TorpedoKind::Zylon, position, velocity)
    }

    /// Launch an enemy torpedo from an enemy position. Homing is applied by
    /// the torpedo itself, so no velocity is kept.
    pub fn fire_humon(&mut self, position: DVec3) -> u32 {
        self.push(TorpedoKind::Humon, position, DVec3::ZERO)
    }

    fn push(&mut self, kind: TorpedoKind, position: DVec3, velocity: DVec3) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.torpedoes.push(Torpedo::new(id, kind, position, velocity));
        id
    }

    pub fn active(&self) -> &[Torpedo] {
        &self.torpedoes
    }

    pub fn len(&self) -> usize {
        self.torpedoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.torpedoes.is_empty()
    }

    pub fn count(&self, kind: TorpedoKind) -> usize {
        self.torpedoes.iter().filter(|t| t.kind == kind).count()
    }

    pub fn zylon_count(&self) -> usize {
        self.count(TorpedoKind::Zylon)
    }

    pub fn humon_count(&self) -> usize {
        self.count(TorpedoKind::Humon)
    }

    /// Advance every torpedo one frame and drop the expired ones.
    /// Returns the torpedoes that were removed.
    pub fn update(&mut self) -> Vec<Torpedo> {
        let mut expired = Vec::new();
        self.torpedoes.retain_mut(|t| {
            if t.update() {
                true
            } else {
                expired.push(t.clone());
                false
            }
        });
        expired
    }

    /// Remove a torpedo by id. Removing an absent torpedo is a no-op.
    pub fn remove(&mut self, id: u32) -> bool {
        match self.torpedoes.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.torpedoes.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear_all(&mut self) {
        self.torpedoes.clear();
    }

    /// Apply a function to every live torpedo, e.g. steering rotation.
    pub fn for_each_mut(&mut self, f: impl FnMut(&mut Torpedo)) {
        self.torpedoes.iter_mut().for_each(f);
    }
}
