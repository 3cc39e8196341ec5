//! Scoring, respawn, PC paddle tracking and end-of-game resolution

use super::collision;
use super::rng::Lcg;
use super::state::{Body, GameState, Winner};
use crate::Vector;
use crate::consts::*;

/// Side that won a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Point {
    Player,
    Pc,
}

/// Which side, if any, scored with the ball where it is in `s`.
///
/// Leaving on the left is a point for the PC, on the right for the player.
pub fn point_scored(s: &GameState) -> Option<Point> {
    if s.ball.left() < 0.0 {
        Some(Point::Pc)
    } else if s.ball.left() > CANVAS_SIZE {
        Some(Point::Player)
    } else {
        None
    }
}

/// Fresh ball at the canvas centre. Draws exactly two values from `rng`:
/// the horizontal direction, then the vertical speed.
pub fn respawn_ball(rng: &mut Lcg, time: u64) -> Body {
    let dir_x = if rng.next_signed() > 0.5 { 1.0 } else { -1.0 };
    let vel_y = BALL_Y_VELOCITY * rng.next_signed();
    Body::ball(
        Vector::new(BALL_XY, BALL_XY),
        Vector::new(BALL_X_VELOCITY * dir_x, vel_y),
        time,
    )
}

/// Resolve collisions, scoring and game end for an already-moved state.
///
/// `template` is the state every finished game returns to.
pub fn resolve(s: GameState, template: &GameState, rng: &mut Lcg) -> GameState {
    if s.game_over() {
        // Final scoreboard has been shown for one tick; start over
        return GameState {
            winner: s.winner,
            time: s.time,
            ..template.clone()
        };
    }

    let point = point_scored(&s);

    let (ball, paddle_pc) = match point {
        Some(_) => (
            respawn_ball(rng, s.time),
            Body::paddle(
                Vector::new(PADDLE_PC_X, PADDLE_Y),
                Vector::ZERO,
                s.paddle_pc.create_time(),
            ),
        ),
        None => (
            s.ball.with_vel(collision::ball_velocity(&s)),
            // Follow the ball's vertical velocity as it was before any bounce
            s.paddle_pc
                .with_vel(Vector::new(s.paddle_pc.vel().x, s.ball.vel().y)),
        ),
    };

    let player_score = s.player_score + u32::from(point == Some(Point::Player));
    let pc_score = s.pc_score + u32::from(point == Some(Point::Pc));

    if let Some(point) = point {
        log::debug!(
            "Point to {:?} at tick {} ({} - {})",
            point,
            s.time,
            player_score,
            pc_score
        );
    }

    let winner = if player_score == WIN_SCORE {
        Some(Winner::User)
    } else if pc_score == WIN_SCORE {
        Some(Winner::Pc)
    } else {
        None
    };

    match winner {
        Some(winner) => {
            log::info!("Game over, {} ({} - {})", winner, player_score, pc_score);
            GameState {
                player_score,
                pc_score,
                winner,
                time: s.time,
                ..template.clone()
            }
        }
        None => GameState {
            paddle_pc,
            ball,
            player_score,
            pc_score,
            ..s
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_ball(pos: Vector, vel: Vector) -> GameState {
        GameState {
            ball: Body::ball(pos, vel, 0),
            ..GameState::initial()
        }
    }

    #[test]
    fn test_right_exit_scores_for_player() {
        let mut rng = Lcg::default();
        let s = with_ball(Vector::new(601.0, 200.0), Vector::new(-1.0, 0.0));
        let next = resolve(s, &GameState::initial(), &mut rng);
        assert_eq!(next.player_score, 1);
        assert_eq!(next.pc_score, 0);
        assert_eq!(next.ball.pos(), Vector::new(BALL_XY, BALL_XY));
    }

    #[test]
    fn test_left_exit_scores_for_pc_and_resets_pc_paddle() {
        let mut rng = Lcg::default();
        let mut s = with_ball(Vector::new(-1.0, 200.0), Vector::new(1.0, 0.0));
        s.paddle_pc = Body::paddle(Vector::new(530.0, 12.0), Vector::new(0.0, 1.25), 0);
        let next = resolve(s, &GameState::initial(), &mut rng);
        assert_eq!(next.pc_score, 1);
        assert_eq!(next.player_score, 0);
        assert_eq!(next.paddle_pc.pos(), Vector::new(PADDLE_PC_X, PADDLE_Y));
        assert_eq!(next.paddle_pc.vel(), Vector::ZERO);
    }

    #[test]
    fn test_ball_on_edge_is_not_a_point() {
        let mut rng = Lcg::default();
        let s = with_ball(Vector::new(600.0, 200.0), Vector::new(-1.0, 0.0));
        assert_eq!(point_scored(&s), None);
        let s = with_ball(Vector::new(0.0, 200.0), Vector::new(1.0, 0.0));
        let next = resolve(s, &GameState::initial(), &mut rng);
        assert_eq!((next.player_score, next.pc_score), (0, 0));
    }

    #[test]
    fn test_respawn_draws_two_values() {
        let mut rng = Lcg::new(20);
        let ball = respawn_ball(&mut rng, 9);
        // First draw is -0.445 (not > 0.5), second is -0.866
        assert_eq!(ball.vel().x, -BALL_X_VELOCITY);
        assert!((ball.vel().y - BALL_Y_VELOCITY * -0.866_201_711_756_271_1).abs() < 1e-12);
        assert_eq!(ball.create_time(), 9);

        let mut expected = Lcg::new(20);
        expected.next_int();
        expected.next_int();
        assert_eq!(rng, expected);
    }

    #[test]
    fn test_respawn_velocity_bounds() {
        let mut rng = Lcg::new(3);
        for _ in 0..1000 {
            let ball = respawn_ball(&mut rng, 0);
            assert_eq!(ball.vel().x.abs(), BALL_X_VELOCITY);
            assert!(ball.vel().y.abs() <= BALL_Y_VELOCITY);
        }
    }

    #[test]
    fn test_pc_paddle_follows_ball() {
        let mut rng = Lcg::default();
        let s = with_ball(Vector::new(300.0, 300.0), Vector::new(1.0, -0.75));
        let next = resolve(s, &GameState::initial(), &mut rng);
        assert_eq!(next.paddle_pc.vel(), Vector::new(0.0, -0.75));
        assert_eq!(rng, Lcg::default());
    }

    #[test]
    fn test_winning_point_shows_final_score() {
        let mut rng = Lcg::default();
        let mut s = with_ball(Vector::new(601.0, 150.0), Vector::new(-1.0, 0.3));
        s.player_score = 6;
        s.pc_score = 4;
        s.time = 1234;
        let next = resolve(s, &GameState::initial(), &mut rng);

        assert_eq!(next.player_score, 7);
        assert!(next.game_over());
        assert_eq!(next.winner, Winner::User);
        assert_eq!(next.winner.to_string(), "winner: user");
        let expected = GameState {
            player_score: 7,
            pc_score: 4,
            winner: Winner::User,
            time: 1234,
            ..GameState::initial()
        };
        assert_eq!(next, expected);
    }

    #[test]
    fn test_pc_win() {
        let mut rng = Lcg::default();
        let mut s = with_ball(Vector::new(-2.0, 150.0), Vector::new(1.0, 0.3));
        s.pc_score = 6;
        let next = resolve(s, &GameState::initial(), &mut rng);
        assert_eq!(next.winner, Winner::Pc);
        assert_eq!(next.pc_score, 7);
    }

    #[test]
    fn test_after_game_over_returns_to_template() {
        let mut rng = Lcg::default();
        let over = GameState {
            player_score: 7,
            pc_score: 2,
            winner: Winner::User,
            time: 50,
            ..GameState::initial()
        };
        let next = resolve(over, &GameState::initial(), &mut rng);
        assert_eq!(
            next,
            GameState {
                winner: Winner::User,
                time: 50,
                ..GameState::initial()
            }
        );
        assert!(!next.game_over());
    }
}
