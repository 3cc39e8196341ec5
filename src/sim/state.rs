//! Game state and core simulation types
//!
//! Every value here is replaced rather than mutated: updates go through the
//! `with_*` constructors and return a new record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Vector;
use crate::consts::*;

/// Role tag of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Ball,
    Paddle,
}

impl BodyKind {
    /// Fixed `(w, h)` of every body of this kind
    pub fn extent(self) -> (f64, f64) {
        match self {
            BodyKind::Ball => (BALL_WIDTH, BALL_HEIGHT),
            BodyKind::Paddle => (PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }
}

/// A moving rectangle (ball or paddle)
///
/// Serialized without its extent, which always comes from `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodyRecord", into = "BodyRecord")]
pub struct Body {
    kind: BodyKind,
    w: f64,
    h: f64,
    /// Top-left corner
    pos: Vector,
    /// Per-tick velocity, subtracted from `pos` on each move
    vel: Vector,
    /// Per-tick acceleration, zero for every body in play
    acc: Vector,
    create_time: u64,
}

/// Wire form of a `Body`
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BodyRecord {
    kind: BodyKind,
    pos: Vector,
    vel: Vector,
    acc: Vector,
    create_time: u64,
}

impl From<Body> for BodyRecord {
    fn from(body: Body) -> Self {
        Self {
            kind: body.kind,
            pos: body.pos,
            vel: body.vel,
            acc: body.acc,
            create_time: body.create_time,
        }
    }
}

impl TryFrom<BodyRecord> for Body {
    type Error = String;

    fn try_from(record: BodyRecord) -> Result<Self, Self::Error> {
        if !(record.pos.is_finite() && record.vel.is_finite() && record.acc.is_finite()) {
            return Err(format!("{:?} has a non-finite position or velocity", record.kind));
        }
        Ok(Self {
            acc: record.acc,
            ..Self::new(record.kind, record.pos, record.vel, record.create_time)
        })
    }
}

impl Body {
    fn new(kind: BodyKind, pos: Vector, vel: Vector, create_time: u64) -> Self {
        let (w, h) = kind.extent();
        let body = Self {
            kind,
            w,
            h,
            pos,
            vel,
            acc: Vector::ZERO,
            create_time,
        };
        body.assert_finite();
        body
    }

    pub fn ball(pos: Vector, vel: Vector, create_time: u64) -> Self {
        Self::new(BodyKind::Ball, pos, vel, create_time)
    }

    pub fn paddle(pos: Vector, vel: Vector, create_time: u64) -> Self {
        Self::new(BodyKind::Paddle, pos, vel, create_time)
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn pos(&self) -> Vector {
        self.pos
    }

    pub fn vel(&self) -> Vector {
        self.vel
    }

    pub fn acc(&self) -> Vector {
        self.acc
    }

    pub fn create_time(&self) -> u64 {
        self.create_time
    }

    pub fn with_pos(self, pos: Vector) -> Self {
        let body = Self { pos, ..self };
        body.assert_finite();
        body
    }

    pub fn with_vel(self, vel: Vector) -> Self {
        let body = Self { vel, ..self };
        body.assert_finite();
        body
    }

    pub fn top(&self) -> f64 {
        self.pos.y
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y + self.h
    }

    pub fn left(&self) -> f64 {
        self.pos.x
    }

    pub fn right(&self) -> f64 {
        self.pos.x + self.w
    }

    /// Vertical midpoint
    pub fn center_y(&self) -> f64 {
        self.pos.y + self.h / 2.0
    }

    fn assert_finite(&self) {
        assert!(
            self.pos.is_finite() && self.vel.is_finite(),
            "{:?} left the reals: pos {:?} vel {:?}",
            self.kind,
            self.pos,
            self.vel
        );
    }
}

/// Outcome of the last finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Winner {
    #[default]
    Undecided,
    User,
    Pc,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Winner::Undecided => "winner:",
            Winner::User => "winner: user",
            Winner::Pc => "winner: PC",
        })
    }
}

/// Complete game snapshot at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Keyboard-controlled paddle (left)
    pub paddle_player: Body,
    /// Ball-following paddle (right)
    pub paddle_pc: Body,
    pub ball: Body,
    pub player_score: u32,
    pub pc_score: u32,
    pub winner: Winner,
    /// Elapsed ticks of the driving timer
    pub time: u64,
}

impl GameState {
    /// The fixed starting template; the game returns to it after every win
    pub fn initial() -> Self {
        Self {
            paddle_player: Body::paddle(
                Vector::new(PADDLE_PLAYER_X, PADDLE_Y),
                Vector::ZERO,
                START_TIME,
            ),
            paddle_pc: Body::paddle(Vector::new(PADDLE_PC_X, PADDLE_Y), Vector::ZERO, START_TIME),
            ball: Body::ball(
                Vector::new(BALL_XY, BALL_XY),
                Vector::new(BALL_X_VELOCITY, BALL_Y_VELOCITY),
                START_TIME,
            ),
            player_score: 0,
            pc_score: 0,
            winner: Winner::Undecided,
            time: START_TIME,
        }
    }

    /// True exactly when either side has reached the win score
    pub fn game_over(&self) -> bool {
        self.player_score == WIN_SCORE || self.pc_score == WIN_SCORE
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
