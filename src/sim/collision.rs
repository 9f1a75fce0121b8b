//! Collision detection between the player and hazards
//!
//! Everything is an axis-aligned box anchored at its top-left corner. Max
//! edges are exclusive, so boxes that only touch do not overlap.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HAZARD_SIZE, PLAYER_SIZE};

/// Axis-aligned box with exclusive max edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: IVec2,
    pub size: IVec2,
}

impl Aabb {
    pub fn new(min: IVec2, size: IVec2) -> Self {
        Self { min, size }
    }

    pub fn player(pos: IVec2) -> Self {
        Self::new(pos, IVec2::splat(PLAYER_SIZE))
    }

    pub fn hazard(pos: IVec2) -> Self {
        Self::new(pos, IVec2::splat(HAZARD_SIZE))
    }

    #[inline]
    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    /// Strict intersection test
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }
}

/// Indices of hazards overlapping the player, oldest first
///
/// Works on a borrowed snapshot of the hazard list; callers remove the hits
/// afterwards in one batch so removal can never skip or repeat a hazard.
pub fn colliding_hazards(player_pos: IVec2, hazards: &[IVec2]) -> Vec<usize> {
    let player = Aabb::player(player_pos);
    hazards
        .iter()
        .enumerate()
        .filter(|(_, pos)| player.overlaps(&Aabb::hazard(**pos)))
        .map(|(i, _)| i)
        .collect()
}

/// Remove the hazards at `indices` (ascending), keeping the rest in order
pub fn remove_indices(hazards: &mut Vec<IVec2>, indices: &[usize]) {
    if indices.is_empty() {
        return;
    }
    let mut next = indices.iter().peekable();
    let mut i = 0;
    hazards.retain(|_| {
        let hit = next.peek().is_some_and(|&&idx| idx == i);
        if hit {
            next.next();
        }
        i += 1;
        !hit
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let player = Aabb::player(IVec2::new(100, 100));
        assert!(player.overlaps(&Aabb::hazard(IVec2::new(80, 80))));
        assert!(player.overlaps(&Aabb::hazard(IVec2::new(139, 139))));
        assert!(!player.overlaps(&Aabb::hazard(IVec2::new(300, 100))));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let player = Aabb::player(IVec2::new(100, 100));
        // hazard right edge at x=100
        assert!(!player.overlaps(&Aabb::hazard(IVec2::new(40, 100))));
        // hazard left edge at player right edge (140)
        assert!(!player.overlaps(&Aabb::hazard(IVec2::new(140, 100))));
        // hazard bottom edge at y=100
        assert!(!player.overlaps(&Aabb::hazard(IVec2::new(100, 40))));
        // one pixel in
        assert!(player.overlaps(&Aabb::hazard(IVec2::new(100, 41))));
    }

    #[test]
    fn test_colliding_in_spawn_order() {
        let hazards = vec![
            IVec2::new(90, 90),
            IVec2::new(500, 0),
            IVec2::new(110, 70),
            IVec2::new(90, 90),
        ];
        assert_eq!(colliding_hazards(IVec2::new(100, 100), &hazards), vec![0, 2, 3]);
    }

    #[test]
    fn test_remove_indices_handles_duplicates() {
        let mut hazards = vec![
            IVec2::new(1, 1),
            IVec2::new(2, 2),
            IVec2::new(1, 1),
            IVec2::new(3, 3),
        ];
        remove_indices(&mut hazards, &[0, 2]);
        assert_eq!(hazards, vec![IVec2::new(2, 2), IVec2::new(3, 3)]);

        remove_indices(&mut hazards, &[]);
        assert_eq!(hazards.len(), 2);
    }
}
