//! Collision detection and response for the ball
//!
//! Paddle contact needs two things: the rectangles overlap, and the ball's
//! left edge sits exactly on the paddle's left edge. The second condition
//! makes contact a single-tick event; with the ±1 horizontal speeds used in
//! play the ball always lands on integer x positions, so it does fire.

use super::state::{Body, GameState};
use crate::Vector;
use crate::consts::*;

/// What the ball touched this tick, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    PlayerPaddle,
    PcPaddle,
    Wall,
    None,
}

/// Axis-aligned overlap of ball `b` with paddle `p` (touching edges count)
pub fn overlaps(p: &Body, b: &Body) -> bool {
    !(b.bottom() < p.top() || b.top() > p.bottom() || b.right() < p.left() || b.left() > p.right())
}

/// Overlap plus exact left-edge alignment
pub fn paddle_contact(p: &Body, b: &Body) -> bool {
    p.left() == b.left() && overlaps(p, b)
}

/// Ball's vertical extent is past the top or bottom edge
pub fn hits_wall(b: &Body) -> bool {
    b.bottom() > CANVAS_SIZE || b.top() < 0.0
}

/// Vertical velocity after the ball strikes paddle `p`.
///
/// The multiplier is `0.5 + (|Δ| - h/8) / DEFLECTION_SCALE` where `Δ` is the
/// distance between the two vertical centres: hits near the middle come off
/// flatter, hits near the ends steeper.
pub fn deflect_y(p: &Body, b: &Body) -> f64 {
    let offset = (p.center_y() - b.center_y()).abs();
    let scale = 0.5 + (offset - p.h() / 8.0) / DEFLECTION_SCALE;
    b.vel().y * scale
}

/// Classify the ball's contact in `s`
pub fn detect(s: &GameState) -> Contact {
    if paddle_contact(&s.paddle_player, &s.ball) {
        Contact::PlayerPaddle
    } else if paddle_contact(&s.paddle_pc, &s.ball) {
        Contact::PcPaddle
    } else if hits_wall(&s.ball) {
        Contact::Wall
    } else {
        Contact::None
    }
}

/// Ball velocity after resolving its contact in `s`
pub fn ball_velocity(s: &GameState) -> Vector {
    let vel = s.ball.vel();
    match detect(s) {
        Contact::PlayerPaddle => Vector::new(-vel.x, deflect_y(&s.paddle_player, &s.ball)),
        Contact::PcPaddle => Vector::new(-vel.x, deflect_y(&s.paddle_pc, &s.ball)),
        Contact::Wall => Vector::new(vel.x, -vel.y),
        Contact::None => vel,
    }
}
