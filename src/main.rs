//! Native entry point.
//!
//! Runs a headless exhibition match: both paddles are driven by a simple
//! ball-tracking script and frames go to a logging presenter. Useful for
//! watching the simulation behave end to end without a window.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use chaos_pong::Settings;
use chaos_pong::audio::{AudioMixer, SoundEffect};
use chaos_pong::color::Color;
use chaos_pong::render::{Presenter, draw_frame};
use chaos_pong::sim::{GamePhase, GameState, Keys, TickInput, tick};

/// Presenter that counts frames and logs sounds instead of drawing
#[derive(Default)]
struct LogPresenter {
    frames: u64,
}

impl Presenter for LogPresenter {
    fn clear(&mut self, _color: Color) {
        self.frames += 1;
    }
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {}
    fn rect_lines(&mut self, _x: i32, _y: i32, _w: i32, _h: i32, _color: Color) {}
    fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, _color: Color) {}
    fn text(&mut self, _text: &str, _x: i32, _y: i32, _size: i32, _color: Color) {}
    fn measure_text(&self, text: &str, size: i32) -> i32 {
        text.len() as i32 * size / 2
    }
    fn draw_fps(&mut self, _x: i32, _y: i32) {}
    fn play_sound(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sound {effect:?} at volume {volume:.2}");
    }
}

/// Script the frame's input: serve from the title screen, then have both
/// sides chase the ball with a small deadband so they do not jitter
fn exhibition_input(state: &GameState, frame: u64) -> TickInput {
    let mut input = TickInput::default();
    match state.phase {
        GamePhase::TitleScreen => {
            if frame > 0 {
                input.pressed.primary = true;
            }
        }
        GamePhase::Gameplay => {
            let deadband = 20.0;
            let target = state.ball.pos.y;
            input.held = Keys {
                left_up: target < state.left_paddle.center_y() - deadband,
                left_down: target > state.left_paddle.center_y() + deadband,
                right_up: target < state.right_paddle.center_y() - deadband,
                right_down: target > state.right_paddle.center_y() + deadband,
                primary: false,
            };
        }
        GamePhase::GameOver => {}
    }
    input
}

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new("settings.json"));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    log::info!("Starting {} with seed {seed}", settings.window_title);

    let mut state = GameState::new(1920.0, 1080.0, seed);
    let mixer = AudioMixer::from_settings(&settings);
    let mut presenter = LogPresenter::default();
    let dt = 1.0 / settings.target_fps as f32;

    // Two minutes of simulated play at the target frame rate
    let max_frames = settings.target_fps as u64 * 120;
    for frame in 0..max_frames {
        let input = exhibition_input(&state, frame);
        let events = tick(&mut state, &input, dt);
        for event in &events {
            log::debug!("event {event:?}");
            if let Some((effect, volume)) = mixer.cue(event) {
                presenter.play_sound(effect, volume);
            }
        }
        draw_frame(&state, &mut presenter, settings.show_fps);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    if state.phase == GamePhase::GameOver {
        println!(
            "{} ({} - {}) after {} frames",
            state.game_over_message, state.left_score, state.right_score, presenter.frames
        );
    } else {
        println!(
            "Exhibition ended at {} - {} after {} frames",
            state.left_score, state.right_score, presenter.frames
        );
    }
}
