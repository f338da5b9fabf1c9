//! Static maze geometry.

use crate::components::Rect;
use crate::constants::{ARENA_H, ARENA_W, TILE_SIZE, TUNNEL_H, TUNNEL_Y, WALL_THICKNESS};

/// Immutable set of wall rectangles inside a bounded arena.
///
/// The maze is the only authority on where an entity may stand: every
/// movement attempt is checked against [`Maze::collides`] and
/// [`Maze::contains`].
#[derive(Debug, Clone)]
pub struct Maze {
    width: i32,
    height: i32,
    walls: Vec<Rect>,
}

impl Maze {
    pub fn new(width: i32, height: i32, walls: Vec<Rect>) -> Self {
        Self {
            width,
            height,
            walls,
        }
    }

    /// The shipped layout: outer frame with side tunnels, corridor
    /// walls and the ghost house in the middle.
    pub fn classic() -> Self {
        let t = TILE_SIZE;
        let wt = WALL_THICKNESS;
        let below_tunnel = TUNNEL_Y + TUNNEL_H;

        let mut walls = vec![
            Rect::new(0, 0, ARENA_W, wt),
            Rect::new(0, ARENA_H - wt, ARENA_W, wt),
            Rect::new(0, 0, wt, TUNNEL_Y),
            Rect::new(0, below_tunnel, wt, ARENA_H - below_tunnel),
            Rect::new(ARENA_W - wt, 0, wt, TUNNEL_Y),
            Rect::new(ARENA_W - wt, below_tunnel, wt, ARENA_H - below_tunnel),
        ];

        for row in [1, 4, 8] {
            for col in [2, 6, 10, 14] {
                walls.push(Rect::new(t * col, t * row, t * 2, wt));
            }
        }
        for row in [2, 6] {
            for col in [1, 4, 8, 12, 16] {
                walls.push(Rect::new(t * col, t * row, wt, t * 2));
            }
        }

        // ghost house
        walls.push(Rect::new(t * 7, t * 5, t * 2, wt));
        walls.push(Rect::new(t * 9, t * 5, t * 2, wt));
        walls.push(Rect::new(t * 7, t * 7, t * 2, wt));
        walls.push(Rect::new(t * 9, t * 7, t * 2, wt));

        Self::new(ARENA_W, ARENA_H, walls)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn collides(&self, rect: &Rect) -> bool {
        self.walls.iter().any(|wall| wall.intersects(rect))
    }

    /// True when `rect` lies fully inside the arena.
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x >= 0
            && rect.y >= 0
            && rect.x + rect.w <= self.width
            && rect.y + rect.h <= self.height
    }

    /// A position is open when it is inside the arena and touches no wall.
    pub fn is_open(&self, rect: &Rect) -> bool {
        self.contains(rect) && !self.collides(rect)
    }
}
