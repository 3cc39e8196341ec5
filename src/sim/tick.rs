//! Fixed-step simulation tick
//!
//! A tick moves every body first and then resolves collisions against the
//! moved positions, so contact is seen one step after the overlap begins.

use super::rng::Lcg;
use super::scoring;
use super::state::{Body, GameState};
use crate::consts::*;
use crate::{Vector, check_bounds};

/// Player paddle intent. Its velocity is the only paddle "mode" there is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleDirection {
    #[default]
    Idle,
    Up,
    Down,
}

impl PaddleDirection {
    /// `(0, 0)`, `(0, +3)` or `(0, -3)`; positive y moves the paddle up the screen
    pub fn velocity(self) -> Vector {
        match self {
            PaddleDirection::Idle => Vector::ZERO,
            PaddleDirection::Up => Vector::new(0.0, PLAYER_PADDLE_SPEED),
            PaddleDirection::Down => Vector::new(0.0, -PLAYER_PADDLE_SPEED),
        }
    }
}

/// One step of the merged input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Override the player paddle's velocity
    Translate(PaddleDirection),
    /// Timer fired; carries the elapsed tick count
    Tick(u64),
}

/// Move a paddle by its velocity, kept inside the canvas
pub fn move_paddle(body: Body) -> Body {
    body.with_pos(check_bounds(body.pos() - body.vel(), body.h()))
        .with_vel(body.vel() + body.acc())
}

/// Move the ball by its velocity; it may leave the canvas
pub fn move_ball(body: Body) -> Body {
    body.with_pos(body.pos() - body.vel())
        .with_vel(body.vel() + body.acc())
}

/// Advance the game by one timer tick
pub fn tick(state: GameState, elapsed: u64, rng: &mut Lcg) -> GameState {
    let moved = GameState {
        paddle_player: move_paddle(state.paddle_player),
        paddle_pc: move_paddle(state.paddle_pc),
        ball: move_ball(state.ball),
        time: elapsed,
        ..state
    };
    scoring::resolve(moved, &GameState::initial(), rng)
}

/// Apply one command to the state
pub fn reduce(state: GameState, command: Command, rng: &mut Lcg) -> GameState {
    match command {
        Command::Translate(direction) => GameState {
            paddle_player: state.paddle_player.with_vel(direction.velocity()),
            ..state
        },
        Command::Tick(elapsed) => tick(state, elapsed, rng),
    }
}
