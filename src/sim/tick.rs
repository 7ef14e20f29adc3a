//! Per-frame simulation step.
//!
//! One handler per phase, dispatched over `GamePhase`. Within the gameplay
//! handler the order is load-bearing: paddles are clamped before the
//! collision test so the ball always reflects off the clamped rectangle.

use super::collision::circle_rect_overlap;
use super::state::{GamePhase, GameState, PaddleSide};
use crate::consts::*;
use rand::Rng;

/// Logical key flags for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Keys {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Serve on the title screen, restart on the game-over screen
    pub primary: bool,
}

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Keys currently held
    pub held: Keys,
    /// Keys that went down this frame
    pub pressed: Keys,
}

/// Observable things that happened during a tick.
///
/// Wall bounces are deliberately absent: they make no sound and nothing
/// outside the simulation reacts to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PaddleHit { side: PaddleSide },
    PointScored { scorer: PaddleSide },
    MatchOver { winner: PaddleSide },
}

/// Advance the match by one frame and report what happened
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    match state.phase {
        GamePhase::TitleScreen => title_tick(state, input, dt),
        GamePhase::Gameplay => gameplay_tick(state, input, dt, &mut events),
        GamePhase::GameOver => game_over_tick(state, input),
    }
    events
}

fn title_tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let (w, h) = (state.screen_w, state.screen_h);
    state.menu_ball.advance(dt, w, h);

    // The movement keys double as color pickers here
    if input.pressed.left_up {
        state.left_paddle.color = state.left_paddle.color.prev();
    }
    if input.pressed.left_down {
        state.left_paddle.color = state.left_paddle.color.next();
    }
    if input.pressed.right_up {
        state.right_paddle.color = state.right_paddle.color.prev();
    }
    if input.pressed.right_down {
        state.right_paddle.color = state.right_paddle.color.next();
    }

    if input.pressed.primary {
        state.left_score = 0;
        state.right_score = 0;
        state.left_paddle.recenter(h);
        state.right_paddle.recenter(h);
        state.game_over_message.clear();
        let serve_left = state.rng.random_bool(0.5);
        state.reset_ball(serve_left);
        state.phase = GamePhase::Gameplay;
        log::info!(
            "Match started, serving {}",
            if serve_left { "leftward" } else { "rightward" }
        );
    }
}

fn gameplay_tick(state: &mut GameState, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    let (w, h) = (state.screen_w, state.screen_h);

    // 1. Paddle movement, then clamp
    if input.held.left_up {
        state.left_paddle.y -= PADDLE_SPEED * dt;
    }
    if input.held.left_down {
        state.left_paddle.y += PADDLE_SPEED * dt;
    }
    if input.held.right_up {
        state.right_paddle.y -= PADDLE_SPEED * dt;
    }
    if input.held.right_down {
        state.right_paddle.y += PADDLE_SPEED * dt;
    }
    state.left_paddle.clamp_to_screen(h);
    state.right_paddle.clamp_to_screen(h);

    // 2. Integrate the ball
    state.ball.pos += state.ball.vel * dt;

    // 3. Paddle collisions, gated on approach direction so a ball already
    // receding from an overlap is never reflected twice
    if state.ball.vel.x < 0.0
        && circle_rect_overlap(state.ball.pos, BALL_RADIUS, &state.left_paddle.rect())
    {
        bounce_off_paddle(state, PaddleSide::Left);
        events.push(GameEvent::PaddleHit {
            side: PaddleSide::Left,
        });
    }
    if state.ball.vel.x > 0.0
        && circle_rect_overlap(state.ball.pos, BALL_RADIUS, &state.right_paddle.rect())
    {
        bounce_off_paddle(state, PaddleSide::Right);
        events.push(GameEvent::PaddleHit {
            side: PaddleSide::Right,
        });
    }

    // 4. Top/bottom walls: clamp to tangent and reflect. Silent.
    if state.ball.pos.y - BALL_RADIUS <= 0.0 && state.ball.vel.y < 0.0 {
        state.ball.pos.y = BALL_RADIUS;
        state.ball.vel.y = -state.ball.vel.y;
    }
    if state.ball.pos.y + BALL_RADIUS >= h && state.ball.vel.y > 0.0 {
        state.ball.pos.y = h - BALL_RADIUS;
        state.ball.vel.y = -state.ball.vel.y;
    }

    // 5. Scoring bounds: conceding a side scores the opposite player
    if state.ball.pos.x - BALL_RADIUS <= 0.0 && state.ball.vel.x < 0.0 {
        award_point(state, PaddleSide::Right, events);
    }
    if state.ball.pos.x + BALL_RADIUS >= w && state.ball.vel.x > 0.0 {
        award_point(state, PaddleSide::Left, events);
    }
}

fn game_over_tick(state: &mut GameState, input: &TickInput) {
    // Scores and message stay stale until the title screen's serve trigger
    if input.pressed.primary {
        state.phase = GamePhase::TitleScreen;
    }
}

/// Reflect the ball off a paddle face with angle deflection and rally boost.
///
/// The caller has already verified overlap and approach direction.
fn bounce_off_paddle(state: &mut GameState, side: PaddleSide) {
    let paddle = match side {
        PaddleSide::Left => &state.left_paddle,
        PaddleSide::Right => &state.right_paddle,
    };
    let ball = &mut state.ball;

    ball.vel.x = -ball.vel.x;

    // Normalized impact offset from paddle center: -1 at the top edge,
    // +1 at the bottom, clamped for grazing hits past the edges
    let impact = (ball.pos.y - paddle.center_y()) / (PADDLE_HEIGHT / 2.0);
    ball.vel.y = impact.clamp(-1.0, 1.0) * ball.vel.x.abs() * BALL_BOUNCE_FACTOR_MAX;
    ball.vel *= BALL_SPEED_MULTIPLIER;

    ball.color = paddle.color.color();

    // Reposition tangent to the struck face so the overlap cannot re-trigger
    ball.pos.x = match side {
        PaddleSide::Left => paddle.rect().right() + BALL_RADIUS,
        PaddleSide::Right => paddle.x - BALL_RADIUS,
    };
}

fn award_point(state: &mut GameState, scorer: PaddleSide, events: &mut Vec<GameEvent>) {
    let tally = match scorer {
        PaddleSide::Left => {
            state.left_score += 1;
            state.left_score
        }
        PaddleSide::Right => {
            state.right_score += 1;
            state.right_score
        }
    };
    log::info!(
        "{} player scores ({}-{})",
        scorer.label(),
        state.left_score,
        state.right_score
    );

    if tally >= WINNING_SCORE {
        state.phase = GamePhase::GameOver;
        state.game_over_message = format!("{} Player Wins!", scorer.label());
        events.push(GameEvent::MatchOver { winner: scorer });
    } else {
        events.push(GameEvent::PointScored { scorer });
        // Left scoring serves leftward, right scoring serves rightward
        state.reset_ball(matches!(scorer, PaddleSide::Left));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use glam::Vec2;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 120.0;

    fn serve_press() -> TickInput {
        TickInput {
            pressed: Keys {
                primary: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn gameplay_state(seed: u64) -> GameState {
        let mut state = GameState::new(1920.0, 1080.0, seed);
        tick(&mut state, &serve_press(), DT);
        assert_eq!(state.phase, GamePhase::Gameplay);
        state
    }

    #[test]
    fn test_serve_key_starts_match() {
        let mut state = GameState::new(1920.0, 1080.0, 42);
        state.left_score = 3;
        state.right_score = 2;
        state.game_over_message = "Left Player Wins!".to_string();
        state.left_paddle.y = 0.0;

        let events = tick(&mut state, &serve_press(), DT);

        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::Gameplay);
        assert_eq!((state.left_score, state.right_score), (0, 0));
        assert!(state.game_over_message.is_empty());
        assert_eq!(state.left_paddle.y, 540.0 - PADDLE_HEIGHT / 2.0);
        assert!((state.ball.vel.length() - BALL_START_SPEED).abs() < 1e-2);
        assert_eq!(state.ball.color, color::WHITE);
    }

    #[test]
    fn test_title_color_keys_cycle_both_ways() {
        let mut state = GameState::new(1920.0, 1080.0, 1);
        assert_eq!(state.left_paddle.color.index(), 1);

        let up = TickInput {
            pressed: Keys {
                left_up: true,
                ..Default::default()
            },
            ..Default::default()
        };
        tick(&mut state, &up, DT);
        assert_eq!(state.left_paddle.color.index(), 0);
        tick(&mut state, &up, DT);
        assert_eq!(
            state.left_paddle.color.index(),
            color::PADDLE_PALETTE.len() - 1
        );

        let down = TickInput {
            pressed: Keys {
                right_down: true,
                ..Default::default()
            },
            ..Default::default()
        };
        for _ in 0..color::PADDLE_PALETTE.len() {
            tick(&mut state, &down, DT);
        }
        assert_eq!(state.right_paddle.color.index(), 2);
    }

    #[test]
    fn test_title_menu_ball_bounces() {
        let mut state = GameState::new(1920.0, 1080.0, 1);
        state.menu_ball.pos = Vec2::new(1910.0, 500.0);
        state.menu_ball.vel = Vec2::new(600.0, 0.0);

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.menu_ball.pos.x, 1920.0 - MENU_BALL_RADIUS);
        assert!(state.menu_ball.vel.x < 0.0);
        assert_eq!(state.phase, GamePhase::TitleScreen);
    }

    #[test]
    fn test_paddle_hit_reflects_boosts_and_repositions() {
        let mut state = gameplay_state(9);
        let face = state.left_paddle.rect().right();
        state.ball.pos = Vec2::new(face + BALL_RADIUS - 5.0, state.left_paddle.center_y());
        state.ball.vel = Vec2::new(-750.0, 0.0);

        let events = tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(
            events,
            vec![GameEvent::PaddleHit {
                side: PaddleSide::Left
            }]
        );
        // Center hit: no deflection, magnitude scales by exactly the multiplier
        assert!((state.ball.vel.x - 750.0 * BALL_SPEED_MULTIPLIER).abs() < 1e-3);
        assert!(state.ball.vel.y.abs() < 1e-3);
        assert_eq!(state.ball.pos.x, face + BALL_RADIUS);
        assert_eq!(state.ball.color, state.left_paddle.color.color());
    }

    #[test]
    fn test_paddle_hit_deflects_toward_impact_side() {
        let mut state = gameplay_state(9);
        let paddle = state.right_paddle.clone();
        // Strike the lower half of the right paddle
        state.ball.pos = Vec2::new(paddle.x - BALL_RADIUS + 5.0, paddle.center_y() + 80.0);
        state.ball.vel = Vec2::new(400.0, 0.0);

        tick(&mut state, &TickInput::default(), 0.0);

        assert!(state.ball.vel.x < 0.0);
        assert!(state.ball.vel.y > 0.0);
        assert_eq!(state.ball.pos.x, paddle.x - BALL_RADIUS);
        assert_eq!(state.ball.color, paddle.color.color());
    }

    #[test]
    fn test_receding_ball_is_not_reflected() {
        let mut state = gameplay_state(9);
        let face = state.left_paddle.rect().right();
        // Overlapping the left paddle but already moving away from it
        state.ball.pos = Vec2::new(face + BALL_RADIUS - 5.0, state.left_paddle.center_y());
        state.ball.vel = Vec2::new(300.0, 0.0);

        let events = tick(&mut state, &TickInput::default(), 0.0);

        assert!(events.is_empty());
        assert_eq!(state.ball.vel, Vec2::new(300.0, 0.0));
    }

    #[test]
    fn test_wall_bounce_is_tangent_and_silent() {
        let mut state = gameplay_state(9);
        state.ball.pos = Vec2::new(960.0, 10.0);
        state.ball.vel = Vec2::new(100.0, -200.0);

        let events = tick(&mut state, &TickInput::default(), 0.0);

        assert!(events.is_empty());
        assert_eq!(state.ball.pos.y, BALL_RADIUS);
        assert_eq!(state.ball.vel.y, 200.0);
    }

    #[test]
    fn test_right_player_scores_and_next_serve_moves_rightward() {
        let mut state = gameplay_state(9);
        state.right_score = 3;
        state.ball.pos = Vec2::new(10.0, 500.0);
        state.ball.vel = Vec2::new(-100.0, 0.0);
        state.ball.color = color::LIME;

        let events = tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(
            events,
            vec![GameEvent::PointScored {
                scorer: PaddleSide::Right
            }]
        );
        assert_eq!(state.right_score, 4);
        assert_eq!(state.phase, GamePhase::Gameplay);
        // Ball reset to center, serving rightward, back to neutral color
        assert_eq!(state.ball.pos, Vec2::new(960.0, 540.0));
        assert!(state.ball.vel.x > 0.0);
        assert_eq!(state.ball.color, color::WHITE);
    }

    #[test]
    fn test_left_player_scores_and_next_serve_moves_leftward() {
        let mut state = gameplay_state(9);
        state.ball.pos = Vec2::new(1915.0, 500.0);
        state.ball.vel = Vec2::new(100.0, 0.0);

        tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(state.left_score, 1);
        assert!(state.ball.vel.x < 0.0);
    }

    #[test]
    fn test_reaching_winning_score_ends_match_without_reset() {
        let mut state = gameplay_state(9);
        state.right_score = WINNING_SCORE - 1;
        state.ball.pos = Vec2::new(10.0, 500.0);
        state.ball.vel = Vec2::new(-100.0, 0.0);

        let events = tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(
            events,
            vec![GameEvent::MatchOver {
                winner: PaddleSide::Right
            }]
        );
        assert_eq!(state.right_score, WINNING_SCORE);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.game_over_message, "Right Player Wins!");
        // The ball stays where the point ended
        assert_eq!(state.ball.pos, Vec2::new(10.0, 500.0));
    }

    #[test]
    fn test_game_over_restart_returns_to_title() {
        let mut state = gameplay_state(9);
        state.right_score = WINNING_SCORE - 1;
        state.ball.pos = Vec2::new(10.0, 500.0);
        state.ball.vel = Vec2::new(-100.0, 0.0);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Movement keys do nothing here
        let held = TickInput {
            held: Keys {
                left_up: true,
                right_down: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let before_y = state.left_paddle.y;
        tick(&mut state, &held, DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.left_paddle.y, before_y);

        tick(&mut state, &serve_press(), DT);
        assert_eq!(state.phase, GamePhase::TitleScreen);
        // Stale until the next serve trigger
        assert_eq!(state.right_score, WINNING_SCORE);
        assert_eq!(state.game_over_message, "Right Player Wins!");
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = GameState::new(1920.0, 1080.0, 99999);
        let mut b = GameState::new(1920.0, 1080.0, 99999);

        let held = TickInput {
            held: Keys {
                left_up: true,
                right_down: true,
                ..Default::default()
            },
            ..Default::default()
        };
        tick(&mut a, &serve_press(), DT);
        tick(&mut b, &serve_press(), DT);
        for _ in 0..600 {
            tick(&mut a, &held, DT);
            tick(&mut b, &held, DT);
        }

        assert_eq!(a.phase, b.phase);
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
        assert_eq!((a.left_score, a.right_score), (b.left_score, b.right_score));
    }

    proptest! {
        #[test]
        fn prop_paddle_never_leaves_screen(
            y0 in -500.0f32..1600.0,
            up in any::<bool>(),
            down in any::<bool>(),
            dt in 0.0f32..0.1,
        ) {
            let mut state = gameplay_state(3);
            state.left_paddle.y = y0;
            // Park the ball mid-court so only paddles move
            state.ball.pos = Vec2::new(960.0, 540.0);
            state.ball.vel = Vec2::ZERO;

            let input = TickInput {
                held: Keys { left_up: up, left_down: down, ..Default::default() },
                ..Default::default()
            };
            tick(&mut state, &input, dt);

            prop_assert!(state.left_paddle.y >= 0.0);
            prop_assert!(state.left_paddle.y <= 1080.0 - PADDLE_HEIGHT);
        }

        #[test]
        fn prop_paddle_hit_flips_sign_and_scales_horizontal_speed(
            vx in 50.0f32..2000.0,
            vy in -1500.0f32..1500.0,
            offset in -0.9f32..0.9,
        ) {
            let mut state = gameplay_state(3);
            let face = state.left_paddle.rect().right();
            state.ball.pos = Vec2::new(
                face + BALL_RADIUS - 5.0,
                state.left_paddle.center_y() + offset * (PADDLE_HEIGHT / 2.0),
            );
            state.ball.vel = Vec2::new(-vx, vy);

            let events = tick(&mut state, &TickInput::default(), 0.0);

            prop_assert_eq!(events, vec![GameEvent::PaddleHit { side: PaddleSide::Left }]);
            prop_assert!(state.ball.vel.x > 0.0);
            let expected_vx = vx * BALL_SPEED_MULTIPLIER;
            prop_assert!((state.ball.vel.x - expected_vx).abs() / expected_vx < 1e-4);
            // Deflection is bounded by the bounce factor
            let max_vy = vx * BALL_BOUNCE_FACTOR_MAX * BALL_SPEED_MULTIPLIER;
            prop_assert!(state.ball.vel.y.abs() <= max_vy + 1e-3);
            prop_assert_eq!(state.ball.pos.x, face + BALL_RADIUS);
        }

        #[test]
        fn prop_zero_dt_without_input_is_a_noop(
            x in 200.0f32..1700.0,
            y in 40.0f32..1040.0,
            vx in -3000.0f32..3000.0,
            vy in -3000.0f32..3000.0,
            left_y in 0.0f32..830.0,
            right_y in 0.0f32..830.0,
        ) {
            let mut state = gameplay_state(3);
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(vx, vy);
            state.left_paddle.y = left_y;
            state.right_paddle.y = right_y;
            let before = state.clone();

            let events = tick(&mut state, &TickInput::default(), 0.0);

            prop_assert!(events.is_empty());
            prop_assert_eq!(state.phase, before.phase);
            prop_assert_eq!(state.ball.pos, before.ball.pos);
            prop_assert_eq!(state.ball.vel, before.ball.vel);
            prop_assert_eq!(state.ball.color, before.ball.color);
            prop_assert_eq!(state.left_paddle.y, before.left_paddle.y);
            prop_assert_eq!(state.right_paddle.y, before.right_paddle.y);
            prop_assert_eq!(state.left_score, before.left_score);
            prop_assert_eq!(state.right_score, before.right_score);
        }
    }
}
