//! The simulation behind a level: scrolling, the obstacle, jump physics and answer grading.
//!
//! Nothing in here draws or reads input. [`PlaySession`] is advanced by the level handler
//! once per frame and fed the answers the player submits.

use glam::UVec2;
use rand::Rng;
use tracing::{debug, trace};

use crate::arithmetic::{self, Difficulty, Problem};
use crate::constants::{BASE_SPEED, INFINITE_TIME_LIMIT, LEVEL_LENGTH, PAUSE_SETTLE_VELOCITY, SPEED_INCREMENT};
use crate::state::RunOutcome;

mod character;
mod obstacle;
mod scroll;

pub use self::character::Character;
pub use self::obstacle::Obstacle;
pub use self::scroll::{ScrollingBackground, Tile};

/// What became of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The input was not a number; nothing changed.
    Ignored,
    Correct,
    /// The answer was wrong. `ended` is set if the run is over because of it.
    Wrong { ended: bool },
}

/// The state of one run, from the first frame until it ends.
#[derive(Debug, Clone)]
pub struct PlaySession {
    difficulty: Difficulty,
    viewport: UVec2,
    /// Pixels per frame.
    speed: f32,
    background: ScrollingBackground,
    character: Character,
    obstacle: Obstacle,
    problem: Problem,
    score: u32,
    /// Seconds since the run started, excluding time spent paused.
    elapsed: f32,
    /// Seconds left on the infinite tier's countdown.
    remaining: Option<f32>,
    /// Total scroll distance, in pixels.
    distance: f32,
    outcome: Option<RunOutcome>,
}

impl PlaySession {
    pub fn new<R: Rng>(difficulty: Difficulty, viewport: UVec2, rng: &mut R) -> Self {
        let width = viewport.x as f32;
        debug!(%difficulty, "Starting a new run");

        Self {
            difficulty,
            viewport,
            speed: BASE_SPEED,
            background: ScrollingBackground::new(width),
            character: Character::new(width),
            obstacle: Obstacle::default(),
            problem: arithmetic::generate(rng, difficulty.problem_tier(0)),
            score: 0,
            elapsed: 0.0,
            remaining: difficulty.is_infinite().then_some(INFINITE_TIME_LIMIT),
            distance: 0.0,
            outcome: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn viewport(&self) -> UVec2 {
        self.viewport
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn background(&self) -> &ScrollingBackground {
        &self.background
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Replaces the current problem, e.g. for scripted play.
    pub fn set_problem(&mut self, problem: Problem) {
        self.problem = problem;
    }

    /// Replaces the obstacle, e.g. to script a run without one in the way.
    pub fn set_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacle = obstacle;
    }

    /// Points scored so far: one per correct answer plus one per cleared obstacle.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn remaining(&self) -> Option<f32> {
        self.remaining
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// How the run ended, once it has.
    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Advances the world by one frame.
    ///
    /// Scrolling and the obstacle move a fixed `speed` pixels per frame; the jump
    /// physics and the clocks use `dt` seconds.
    pub fn tick<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        if self.is_over() {
            return;
        }

        self.background.advance(self.speed);
        if self.obstacle.advance(self.speed, rng) {
            trace!(x = self.obstacle.x(), "Obstacle resurfaced");
        }
        self.character.update(dt);

        self.distance += self.speed;
        self.elapsed += dt;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = (*remaining - dt).max(0.0);
        }
    }

    /// Grades a submitted answer.
    ///
    /// A correct answer scores a point, speeds the run up, makes the character jump and
    /// asks the next problem. A wrong answer ends a fixed-tier run; on the infinite tier
    /// it only drops the speed back to the base speed.
    pub fn submit<R: Rng>(&mut self, input: &str, rng: &mut R) -> Submission {
        if self.is_over() {
            return Submission::Ignored;
        }

        let Some(value) = Problem::parse_answer(input) else {
            trace!(input, "Ignoring non-numeric answer");
            return Submission::Ignored;
        };

        if self.problem.is_correct(value) {
            self.score += 1;
            self.speed += SPEED_INCREMENT;
            self.character.jump();
            self.next_problem(rng);
            debug!(score = self.score, speed = self.speed, "Correct answer");
            return Submission::Correct;
        }

        debug!(problem = %self.problem, value, "Wrong answer");
        if self.difficulty.is_infinite() {
            self.speed = BASE_SPEED;
            Submission::Wrong { ended: false }
        } else {
            self.outcome = Some(RunOutcome::Lost);
            Submission::Wrong { ended: true }
        }
    }

    /// Checks the end conditions and credits a cleared obstacle.
    ///
    /// Returns the outcome once the run is over. A collision takes precedence over the
    /// distance and time limits.
    pub fn resolve(&mut self) -> Option<RunOutcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        let character = self.character.rect();
        let obstacle = self.obstacle.rect();

        if character.intersects(&obstacle) {
            debug!(score = self.score, "Collided with the obstacle");
            self.outcome = Some(if self.difficulty.is_infinite() {
                RunOutcome::Finished
            } else {
                RunOutcome::Lost
            });
        } else if !self.obstacle.is_scored() && obstacle.right() < character.left() {
            self.obstacle.mark_scored();
            self.score += 1;
            trace!(score = self.score, "Cleared the obstacle");
        }

        if self.outcome.is_none() {
            if self.remaining.is_some_and(|remaining| remaining <= 0.0) {
                self.outcome = Some(RunOutcome::Finished);
            } else if !self.difficulty.is_infinite() && self.distance >= LEVEL_LENGTH {
                self.outcome = Some(RunOutcome::Won);
            }
        }

        self.outcome
    }

    /// Freezes the run for a pause. The character keeps a small upward velocity so a
    /// mid-air pause lands softly on resume.
    pub fn pause(&mut self) {
        self.character.set_velocity(PAUSE_SETTLE_VELOCITY);
    }

    fn next_problem<R: Rng>(&mut self, rng: &mut R) {
        let tier = self.difficulty.problem_tier(self.score);
        self.problem = arithmetic::generate(rng, tier);
    }
}
