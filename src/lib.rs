//! FRP Pong - keyboard and timer commands folded over an immutable game state
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, scoring, tick reduction)
//! - `input`: Key model and the single-consumer command stream
//! - `view`: Render sink derived from each state (DOM glue on wasm32)
//! - `settings`: Runtime configuration

pub mod error;
pub mod input;
pub mod settings;
pub mod sim;
pub mod view;

pub use error::PongError;
pub use settings::Settings;

/// 2D vector used for every position, velocity and acceleration.
///
/// Doubles keep the exact-equality contact test behaving the same as on the web.
pub type Vector = glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Square play field side, in pixels
    pub const CANVAS_SIZE: f64 = 600.0;

    /// Ball spawn coordinate (both axes)
    pub const BALL_XY: f64 = 300.0;
    pub const BALL_WIDTH: f64 = 10.0;
    pub const BALL_HEIGHT: f64 = 10.0;
    /// Initial/respawn horizontal speed, pixels per tick
    pub const BALL_X_VELOCITY: f64 = 1.0;
    /// Initial/maximum respawn vertical speed, pixels per tick
    pub const BALL_Y_VELOCITY: f64 = 1.25;

    pub const PADDLE_WIDTH: f64 = 20.0;
    pub const PADDLE_HEIGHT: f64 = 70.0;
    pub const PADDLE_PLAYER_X: f64 = 20.0;
    pub const PADDLE_PC_X: f64 = 550.0;
    pub const PADDLE_Y: f64 = 265.0;
    /// Vertical speed of the player paddle while a key is held
    pub const PLAYER_PADDLE_SPEED: f64 = 3.0;

    /// Divisor of the impact-angle deflection
    pub const DEFLECTION_SCALE: f64 = 20.0;

    pub const START_TIME: u64 = 0;
    /// Score that ends a game
    pub const WIN_SCORE: u32 = 7;

    /// Timer period driving ticks, in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 10;
    /// Seed of the respawn generator
    pub const RNG_SEED: u32 = 20;
}

/// Rotate a vector by 90 degrees: `(x, y) -> (y, -x)`
#[inline]
pub fn ortho(v: Vector) -> Vector {
    Vector::new(v.y, -v.x)
}

/// Clamp each coordinate of `pos` into `[0, CANVAS_SIZE - extent]`
#[inline]
pub fn check_bounds(pos: Vector, extent: f64) -> Vector {
    let bound = |v: f64| {
        if v < 0.0 {
            0.0
        } else if v + extent > consts::CANVAS_SIZE {
            consts::CANVAS_SIZE - extent
        } else {
            v
        }
    };
    Vector::new(bound(pos.x), bound(pos.y))
}
