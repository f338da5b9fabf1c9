use crate::components::{Direction, Rect, Step};
use crate::constants::{ENTITY_SIZE, PLAYER_SPEED, PLAYER_START};
use crate::level::Maze;

/// Square movable hit box shared by the player and the ghosts.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub facing: Direction,
}

impl Body {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            size: ENTITY_SIZE,
            facing: Direction::Right,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.x, self.y, self.size)
    }

    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn overlaps(&self, other: &Body) -> bool {
        self.rect().intersects(&other.rect())
    }

    /// Moves by `step * speed` if the target is open. Rejected moves leave
    /// the body untouched; there is no sliding along walls.
    pub fn try_move(&mut self, step: Step, speed: i32, maze: &Maze) -> bool {
        let target = Rect::square(self.x + step.dx * speed, self.y + step.dy * speed, self.size);
        if !maze.is_open(&target) {
            return false;
        }
        self.x = target.x;
        self.y = target.y;
        if let Some(facing) = step.facing() {
            self.facing = facing;
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub speed: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_START.0, PLAYER_START.1)
    }
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            body: Body::new(x, y),
            speed: PLAYER_SPEED,
        }
    }

    /// Applies one tick of movement intent.
    ///
    /// Leaving the arena past the left or right edge wraps to the
    /// opposite edge regardless of walls; any other move must land on an
    /// open position or is dropped.
    pub fn steer(&mut self, step: Step, maze: &Maze) -> bool {
        let body = &mut self.body;
        let nx = body.x + step.dx * self.speed;
        let max_x = maze.width() - body.size;
        if nx < 0 || nx > max_x {
            body.x = if nx < 0 { max_x } else { 0 };
            if let Some(facing) = Step::new(step.dx, 0).facing() {
                body.facing = facing;
            }
            return true;
        }
        body.try_move(step, self.speed, maze)
    }
}
