//! Ghost movement.
//!
//! Ghosts do not path-find. Each one follows a short buffered run of
//! identical steps, re-planned when the run is used up or on a random
//! refresh, and falls back through a fixed list of alternatives when a
//! step is blocked. Ghosts can stall in dead ends for a few ticks.

use std::collections::VecDeque;

use rand::Rng;

use crate::components::{Direction, Rect, Step};
use crate::constants::{GHOST_SPEED, PATH_MAX, PATH_MIN, PATH_REFRESH_CHANCE, PURSUIT_BIAS};
use crate::level::Maze;
use crate::player::Body;

/// Random source consulted by ghost decisions.
pub trait Dice {
    /// Uniform roll in `[0, 1)`.
    fn roll(&mut self) -> f64;
    /// One of the four axis directions, uniformly.
    fn axis(&mut self) -> Direction;
    /// Length of a freshly planned run, in `PATH_MIN..=PATH_MAX`.
    fn run_length(&mut self) -> usize;
}

impl<R: Rng> Dice for R {
    fn roll(&mut self) -> f64 {
        self.gen()
    }

    fn axis(&mut self) -> Direction {
        Direction::ALL[self.gen_range(0..Direction::ALL.len())]
    }

    fn run_length(&mut self) -> usize {
        self.gen_range(PATH_MIN..=PATH_MAX)
    }
}

/// Picks the step for a new run: toward `target` with probability
/// `PURSUIT_BIAS`, otherwise a uniform axis direction.
pub fn choose_step(from: (i32, i32), target: (i32, i32), dice: &mut impl Dice) -> Step {
    if dice.roll() < PURSUIT_BIAS {
        Step::toward(from, target)
    } else {
        dice.axis().step()
    }
}

#[derive(Debug, Clone)]
pub struct Ghost {
    pub body: Body,
    pub path: VecDeque<Step>,
    pub vulnerable: bool,
    pub speed: i32,
}

impl Ghost {
    pub fn new(x: i32, y: i32, vulnerable: bool) -> Self {
        Self {
            body: Body::new(x, y),
            path: VecDeque::new(),
            vulnerable,
            speed: GHOST_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    fn plan(&mut self, target: (i32, i32), dice: &mut impl Dice) {
        let step = choose_step(self.body.pos(), target, dice);
        let len = dice.run_length();
        self.path = std::iter::repeat(step).take(len).collect();
    }

    /// Advances one tick toward (loosely) `target`.
    pub fn advance(&mut self, maze: &Maze, target: (i32, i32), dice: &mut impl Dice) {
        if self.path.is_empty() || dice.roll() < PATH_REFRESH_CHANCE {
            self.plan(target, dice);
        }
        let Some(step) = self.path.pop_front() else {
            return;
        };

        if self.body.try_move(step, self.speed, maze) {
            return;
        }
        if self.body.try_move(step.opposite(), self.speed, maze) {
            return;
        }
        let fallback = dice.axis().step();
        if self.body.try_move(fallback, self.speed, maze) {
            return;
        }
        self.path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Replays fixed rolls and axes, repeating the last value once exhausted.
    struct Scripted {
        rolls: VecDeque<f64>,
        axes: VecDeque<Direction>,
        run: usize,
    }

    impl Scripted {
        fn new(rolls: &[f64], axes: &[Direction], run: usize) -> Self {
            Self {
                rolls: rolls.iter().copied().collect(),
                axes: axes.iter().copied().collect(),
                run,
            }
        }
    }

    impl Dice for Scripted {
        fn roll(&mut self) -> f64 {
            if self.rolls.len() > 1 {
                self.rolls.pop_front().unwrap_or(0.99)
            } else {
                self.rolls.front().copied().unwrap_or(0.99)
            }
        }

        fn axis(&mut self) -> Direction {
            if self.axes.len() > 1 {
                self.axes.pop_front().unwrap_or(Direction::Up)
            } else {
                self.axes.front().copied().unwrap_or(Direction::Up)
            }
        }

        fn run_length(&mut self) -> usize {
            self.run
        }
    }

    fn open_field() -> Maze {
        Maze::new(400, 400, Vec::new())
    }

    #[test]
    fn test_low_roll_chases_target() {
        let mut dice = Scripted::new(&[0.1], &[Direction::Up], 3);
        assert_eq!(choose_step((100, 100), (20, 300), &mut dice), Step::new(-1, 1));
    }

    #[test]
    fn test_high_roll_takes_random_axis() {
        let mut dice = Scripted::new(&[0.5], &[Direction::Left], 3);
        assert_eq!(choose_step((100, 100), (300, 300), &mut dice), Direction::Left.step());
    }

    #[test]
    fn test_aligned_chase_holds_still() {
        let mut dice = Scripted::new(&[0.0], &[Direction::Up], 3);
        assert!(choose_step((50, 50), (50, 50), &mut dice).is_zero());
    }

    #[test]
    fn test_run_is_buffered_and_consumed() {
        let maze = open_field();
        // first plan: chase roll 0.5 -> axis Right; later refresh rolls stay high
        let mut dice = Scripted::new(&[0.5, 0.9], &[Direction::Right], 4);
        let mut ghost = Ghost::new(100, 100, false);
        ghost.advance(&maze, (0, 0), &mut dice);
        assert_eq!(ghost.body.pos(), (103, 100));
        assert_eq!(ghost.path.len(), 3);
        ghost.advance(&maze, (0, 0), &mut dice);
        assert_eq!(ghost.body.pos(), (106, 100));
        assert_eq!(ghost.path.len(), 2);
    }

    #[test]
    fn test_blocked_step_reverses() {
        let maze = Maze::new(400, 400, vec![Rect::new(121, 0, 10, 400)]);
        let mut dice = Scripted::new(&[0.5, 0.9], &[Direction::Right], 3);
        let mut ghost = Ghost::new(100, 100, false);
        ghost.advance(&maze, (0, 0), &mut dice);
        assert_eq!(ghost.body.pos(), (97, 100));
        assert_eq!(ghost.body.facing, Direction::Left);
    }

    #[test]
    fn test_both_ways_blocked_takes_fresh_axis() {
        let walls = vec![Rect::new(0, 0, 10, 100), Rect::new(30, 0, 10, 100)];
        let maze = Maze::new(100, 100, walls);
        let mut dice = Scripted::new(&[0.5, 0.9], &[Direction::Right, Direction::Up], 4);
        let mut ghost = Ghost::new(10, 60, false);
        ghost.advance(&maze, (80, 80), &mut dice);
        assert_eq!(ghost.body.pos(), (10, 57));
        assert_eq!(ghost.body.facing, Direction::Up);
        assert_eq!(ghost.path.len(), 3);
    }

    #[test]
    fn test_boxed_in_ghost_clears_path() {
        let walls = vec![
            Rect::new(0, 0, 100, 10),
            Rect::new(0, 30, 100, 10),
            Rect::new(0, 0, 10, 40),
            Rect::new(30, 0, 10, 40),
        ];
        let maze = Maze::new(100, 100, walls);
        let mut dice = Scripted::new(&[0.5, 0.9], &[Direction::Up, Direction::Down], 5);
        let mut ghost = Ghost::new(10, 10, false);
        ghost.advance(&maze, (80, 80), &mut dice);
        assert_eq!(ghost.body.pos(), (10, 10));
        assert!(ghost.path.is_empty());
    }

    #[test]
    fn test_refresh_replans_non_empty_path() {
        let maze = open_field();
        let mut dice = Scripted::new(&[0.5, 0.05, 0.5], &[Direction::Right, Direction::Down], 6);
        let mut ghost = Ghost::new(100, 100, false);
        ghost.advance(&maze, (0, 0), &mut dice);
        assert_eq!(ghost.body.pos(), (103, 100));
        ghost.advance(&maze, (0, 0), &mut dice);
        assert_eq!(ghost.body.pos(), (103, 103));
        assert_eq!(ghost.path.len(), 5);
    }

    #[test]
    fn test_random_walk_never_enters_walls() {
        let maze = Maze::classic();
        let mut rng = StdRng::seed_from_u64(7);
        let (x, y) = crate::constants::GHOST_HOUSE;
        let mut ghost = Ghost::new(x, y, false);
        for _ in 0..5_000 {
            ghost.advance(&maze, (40, 40), &mut rng);
            assert!(maze.is_open(&ghost.rect()));
        }
    }

    #[test]
    fn test_rng_dice_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let len = rng.run_length();
            assert!((PATH_MIN..=PATH_MAX).contains(&len));
            let roll = Dice::roll(&mut rng);
            assert!((0.0..1.0).contains(&roll));
        }
    }
}
