/// Axis-aligned rectangle in arena pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn square(x: i32, y: i32, size: i32) -> Self {
        Self::new(x, y, size, size)
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PelletKind {
    Normal,
    Power,
}

/// Facing used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn step(self) -> Step {
        match self {
            Direction::Up => Step::new(0, -1),
            Direction::Down => Step::new(0, 1),
            Direction::Left => Step::new(-1, 0),
            Direction::Right => Step::new(1, 0),
        }
    }
}

/// Unit movement delta; each axis is -1, 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Step {
    pub dx: i32,
    pub dy: i32,
}

impl Step {
    pub const ZERO: Step = Step { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Per-axis sign of `to - from`.
    pub fn toward(from: (i32, i32), to: (i32, i32)) -> Self {
        Self::new((to.0 - from.0).signum(), (to.1 - from.1).signum())
    }

    pub fn opposite(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Facing implied by this step; horizontal wins over vertical.
    pub fn facing(self) -> Option<Direction> {
        if self.dx > 0 {
            Some(Direction::Right)
        } else if self.dx < 0 {
            Some(Direction::Left)
        } else if self.dy < 0 {
            Some(Direction::Up)
        } else if self.dy > 0 {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::square(0, 0, 20);
        assert!(!a.intersects(&Rect::square(20, 0, 20)));
        assert!(!a.intersects(&Rect::square(0, 20, 20)));
        assert!(a.intersects(&Rect::square(19, 19, 20)));
    }

    #[test]
    fn test_step_toward_is_signed_per_axis() {
        assert_eq!(Step::toward((10, 10), (50, 10)), Step::new(1, 0));
        assert_eq!(Step::toward((10, 10), (0, 30)), Step::new(-1, 1));
        assert!(Step::toward((5, 5), (5, 5)).is_zero());
    }

    #[test]
    fn test_facing_prefers_horizontal() {
        assert_eq!(Step::new(1, -1).facing(), Some(Direction::Right));
        assert_eq!(Step::new(0, -1).facing(), Some(Direction::Up));
        assert_eq!(Step::ZERO.facing(), None);
    }
}
