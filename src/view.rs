//! Render sink
//!
//! Each state becomes a `Frame`: three SVG transforms and three text values.
//! How a frame is displayed is up to the `View` it is handed to.

use crate::Vector;
use crate::sim::GameState;

/// Element ids the page must provide
pub mod ids {
    pub const PADDLE_PLAYER: &str = "rectPlayer";
    pub const PADDLE_PC: &str = "rectPC";
    pub const BALL: &str = "ball";
    pub const PLAYER_SCORE: &str = "playerScore";
    pub const PC_SCORE: &str = "PCScore";
    pub const WINNER: &str = "winTracker";
}

/// Everything the presentation layer needs for one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub paddle_player: String,
    pub paddle_pc: String,
    pub ball: String,
    pub player_score: String,
    pub pc_score: String,
    pub winner: String,
}

impl Frame {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            paddle_player: translate(state.paddle_player.pos()),
            paddle_pc: translate(state.paddle_pc.pos()),
            ball: translate(state.ball.pos()),
            player_score: state.player_score.to_string(),
            pc_score: state.pc_score.to_string(),
            winner: state.winner.to_string(),
        }
    }
}

/// SVG transform placing an element's origin at `pos`
pub fn translate(pos: Vector) -> String {
    format!("translate({}, {})", pos.x, pos.y)
}

/// Consumer of frames
pub trait View {
    fn render(&mut self, frame: &Frame);
}

/// Logs the scoreboard whenever it changes; used by the headless runner
#[derive(Debug, Default)]
pub struct ScoreboardLog {
    last: Option<(String, String, String)>,
    changes: usize,
}

impl ScoreboardLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scoreboard changes seen, the first frame included
    pub fn changes(&self) -> usize {
        self.changes
    }
}

impl View for ScoreboardLog {
    fn render(&mut self, frame: &Frame) {
        let board = (
            frame.player_score.clone(),
            frame.pc_score.clone(),
            frame.winner.clone(),
        );
        if self.last.as_ref() != Some(&board) {
            log::info!("Score {} - {} ({})", board.0, board.1, board.2);
            self.last = Some(board);
            self.changes += 1;
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomView;

#[cfg(target_arch = "wasm32")]
mod dom {
    use web_sys::{Document, Element};

    use super::{Frame, View, ids};
    use crate::PongError;

    /// Writes frames into the page's SVG elements
    pub struct DomView {
        paddle_player: Element,
        paddle_pc: Element,
        ball: Element,
        player_score: Element,
        pc_score: Element,
        winner: Element,
    }

    impl DomView {
        /// Look every element up once
        pub fn from_document(document: &Document) -> Result<Self, PongError> {
            let get = |id: &str| {
                document
                    .get_element_by_id(id)
                    .ok_or_else(|| PongError::MissingElement(id.to_string()))
            };
            Ok(Self {
                paddle_player: get(ids::PADDLE_PLAYER)?,
                paddle_pc: get(ids::PADDLE_PC)?,
                ball: get(ids::BALL)?,
                player_score: get(ids::PLAYER_SCORE)?,
                pc_score: get(ids::PC_SCORE)?,
                winner: get(ids::WINNER)?,
            })
        }
    }

    impl View for DomView {
        fn render(&mut self, frame: &Frame) {
            for (el, transform) in [
                (&self.paddle_player, &frame.paddle_player),
                (&self.paddle_pc, &frame.paddle_pc),
                (&self.ball, &frame.ball),
            ] {
                if let Err(e) = el.set_attribute("transform", transform) {
                    log::warn!("Could not set transform on #{}: {:?}", el.id(), e);
                }
            }
            self.player_score.set_text_content(Some(&frame.player_score));
            self.pc_score.set_text_content(Some(&frame.pc_score));
            self.winner.set_text_content(Some(&frame.winner));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Body, Lcg, Winner, tick};

    #[test]
    fn test_initial_frame() {
        let frame = Frame::from_state(&GameState::initial());
        assert_eq!(frame.paddle_player, "translate(20, 265)");
        assert_eq!(frame.paddle_pc, "translate(550, 265)");
        assert_eq!(frame.ball, "translate(300, 300)");
        assert_eq!(frame.player_score, "0");
        assert_eq!(frame.pc_score, "0");
        assert_eq!(frame.winner, "winner:");
    }

    #[test]
    fn test_fractional_positions() {
        let mut rng = Lcg::default();
        let frame = Frame::from_state(&tick(GameState::initial(), 1, &mut rng));
        assert_eq!(frame.ball, "translate(299, 298.75)");
        assert_eq!(frame.paddle_pc, "translate(530, 265)");
    }

    #[test]
    fn test_final_scoreboard_frame() {
        let state = GameState {
            ball: Body::ball(Vector::new(300.0, 300.0), Vector::ZERO, 0),
            player_score: 3,
            pc_score: 7,
            winner: Winner::Pc,
            ..GameState::initial()
        };
        let frame = Frame::from_state(&state);
        assert_eq!(frame.pc_score, "7");
        assert_eq!(frame.winner, "winner: PC");
    }

    #[test]
    fn test_scoreboard_log_counts_changes() {
        let mut view = ScoreboardLog::new();
        let mut state = GameState::initial();
        view.render(&Frame::from_state(&state));
        view.render(&Frame::from_state(&state));
        state.pc_score = 1;
        view.render(&Frame::from_state(&state));
        assert_eq!(view.changes(), 2);
    }
}
