use crate::components::{PelletKind, Rect};
use crate::constants::{LATTICE_STEP, PELLET_SIZE, TILE_SIZE};
use crate::level::Maze;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pellet {
    pub x: i32,
    pub y: i32,
    pub kind: PelletKind,
}

impl Pellet {
    pub fn rect(&self) -> Rect {
        Rect::square(self.x, self.y, PELLET_SIZE)
    }
}

/// Outcome of eating one pellet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eaten {
    pub kind: PelletKind,
    /// The field ran dry and was restocked from the lattice.
    pub refilled: bool,
}

/// Pellets still on the board plus the lattice they are restocked from.
#[derive(Debug, Clone)]
pub struct PelletField {
    lattice: Vec<Pellet>,
    active: Vec<Pellet>,
}

impl PelletField {
    /// Lays pellets on a `LATTICE_STEP` grid one tile in from the arena
    /// edge, skipping spots that touch a wall. The first and last lattice
    /// points are power pellets.
    pub fn new(maze: &Maze) -> Self {
        let xs: Vec<i32> = (TILE_SIZE..maze.width() - TILE_SIZE)
            .step_by(LATTICE_STEP as usize)
            .collect();
        let ys: Vec<i32> = (TILE_SIZE..maze.height() - TILE_SIZE)
            .step_by(LATTICE_STEP as usize)
            .collect();
        let corners = [
            (xs.first().copied(), ys.first().copied()),
            (xs.last().copied(), ys.last().copied()),
        ];

        let mut lattice = Vec::with_capacity(xs.len() * ys.len());
        for &y in &ys {
            for &x in &xs {
                if maze.collides(&Rect::square(x, y, PELLET_SIZE)) {
                    continue;
                }
                let kind = if corners.contains(&(Some(x), Some(y))) {
                    PelletKind::Power
                } else {
                    PelletKind::Normal
                };
                lattice.push(Pellet { x, y, kind });
            }
        }

        Self {
            active: lattice.clone(),
            lattice,
        }
    }

    pub fn active(&self) -> &[Pellet] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn lattice_len(&self) -> usize {
        self.lattice.len()
    }

    /// Positions of every pellet overlapping `rect`.
    pub fn touching(&self, rect: &Rect) -> Vec<(i32, i32)> {
        self.active
            .iter()
            .filter(|p| p.rect().intersects(rect))
            .map(|p| (p.x, p.y))
            .collect()
    }

    /// Removes the pellet at `pos`. Emptying the field restocks it at once.
    pub fn consume(&mut self, pos: (i32, i32)) -> Option<Eaten> {
        let idx = self.active.iter().position(|p| (p.x, p.y) == pos)?;
        let pellet = self.active.swap_remove(idx);
        let refilled = self.active.is_empty();
        if refilled {
            self.active = self.lattice.clone();
        }
        Some(Eaten {
            kind: pellet.kind,
            refilled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_field_avoids_walls() {
        let maze = Maze::classic();
        let field = PelletField::new(&maze);
        assert!(field.len() > 100);
        assert!(field.active().iter().all(|p| !maze.collides(&p.rect())));
    }

    #[test]
    fn test_two_power_pellets_in_corners() {
        let field = PelletField::new(&Maze::classic());
        let power: Vec<_> = field
            .active()
            .iter()
            .filter(|p| p.kind == PelletKind::Power)
            .map(|p| (p.x, p.y))
            .collect();
        assert_eq!(power.len(), 2);
        assert!(power.contains(&(40, 40)));
        assert!(power.contains(&(740, 540)));
    }

    #[test]
    fn test_consume_returns_kind() {
        let mut field = PelletField::new(&Maze::classic());
        let before = field.len();
        let eaten = field.consume((40, 40));
        assert_eq!(
            eaten,
            Some(Eaten {
                kind: PelletKind::Power,
                refilled: false
            })
        );
        assert_eq!(field.len(), before - 1);
        assert_eq!(field.consume((40, 40)), None);
    }

    #[test]
    fn test_emptied_field_refills_to_lattice() {
        let maze = Maze::new(120, 120, Vec::new());
        let mut field = PelletField::new(&maze);
        let full = field.lattice_len();
        assert_eq!(full, 4);
        let spots: Vec<_> = field.active().iter().map(|p| (p.x, p.y)).collect();
        let mut refills = 0;
        for pos in spots {
            if field.consume(pos).map(|e| e.refilled).unwrap_or(false) {
                refills += 1;
            }
        }
        assert_eq!(refills, 1);
        assert_eq!(field.len(), full);
    }

    #[test]
    fn test_touching_uses_hit_box() {
        let field = PelletField::new(&Maze::new(120, 120, Vec::new()));
        assert_eq!(field.touching(&Rect::square(40, 40, 20)), vec![(40, 40)]);
        assert_eq!(field.touching(&Rect::square(45, 45, 20)).len(), 4);
        assert!(field.touching(&Rect::square(0, 0, 20)).is_empty());
    }
}
