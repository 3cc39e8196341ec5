//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per timer tick
//! - Seeded RNG only, passed in explicitly
//! - Every transition returns a new state
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod scoring;
pub mod state;
pub mod tick;

pub use collision::{Contact, ball_velocity, deflect_y, overlaps, paddle_contact};
pub use rng::Lcg;
pub use scoring::{Point, point_scored, resolve, respawn_ball};
pub use state::{Body, BodyKind, GameState, Winner};
pub use tick::{Command, PaddleDirection, move_ball, move_paddle, reduce, tick};
