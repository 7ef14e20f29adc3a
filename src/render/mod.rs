//! Frame presentation.
//!
//! The simulation never draws. Each frame the caller hands the current
//! `GameState` to [`draw_frame`], which translates it into calls on a
//! [`Presenter`] backend. Backends range from a real window to the logging
//! presenter used in headless runs and the recording presenter in tests.

use crate::audio::SoundEffect;
use crate::color::{self, Color};
use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Drawing backend for one frame.
///
/// Coordinates are screen pixels, top-left origin. Text positions are the
/// top-left corner of the rendered string.
pub trait Presenter {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn rect_lines(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    fn text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color);
    fn measure_text(&self, text: &str, size: i32) -> i32;
    fn draw_fps(&mut self, x: i32, y: i32);
    fn play_sound(&mut self, effect: SoundEffect, volume: f32);
}

/// Draw one frame for the current phase
pub fn draw_frame(state: &GameState, presenter: &mut dyn Presenter, show_fps: bool) {
    presenter.clear(color::BLACK);
    match state.phase {
        GamePhase::TitleScreen => draw_title(state, presenter),
        GamePhase::Gameplay => draw_gameplay(state, presenter, show_fps),
        GamePhase::GameOver => draw_game_over(state, presenter),
    }
}

fn draw_title(state: &GameState, presenter: &mut dyn Presenter) {
    let w = state.screen_w as i32;
    let h = state.screen_h as i32;

    presenter.fill_circle(
        state.menu_ball.pos.x,
        state.menu_ball.pos.y,
        MENU_BALL_RADIUS,
        color::LIGHTGRAY,
    );

    let title = "Chaos Pong";
    let title_w = presenter.measure_text(title, 70);
    presenter.text(title, w / 2 - title_w / 2, h / 5, 70, color::WHITE);

    // Color picker boxes, one per paddle, flanking the center
    let box_w = 180;
    let box_h = 90;
    let box_y = h * 2 / 4 + 20;
    let pad = 60;
    let left_box_x = w / 2 - box_w - pad;
    let right_box_x = w / 2 + pad;

    draw_color_picker(
        presenter,
        "Left Color",
        "W/S",
        left_box_x,
        box_y,
        box_w,
        box_h,
        state.left_paddle.color.color(),
    );
    draw_color_picker(
        presenter,
        "Right Color",
        "Up/Down",
        right_box_x,
        box_y,
        box_w,
        box_h,
        state.right_paddle.color.color(),
    );

    let prompt = "Press ENTER to Play";
    let prompt_w = presenter.measure_text(prompt, 25);
    presenter.text(prompt, w / 2 - prompt_w / 2, h * 4 / 5, 25, color::GRAY);
}

#[allow(clippy::too_many_arguments)]
fn draw_color_picker(
    presenter: &mut dyn Presenter,
    label: &str,
    hint: &str,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    swatch: Color,
) {
    presenter.rect_lines(x, y, w, h, color::LIGHTGRAY);

    let label_w = presenter.measure_text(label, 18);
    presenter.text(label, x + w / 2 - label_w / 2, y + 10, 18, color::WHITE);

    presenter.fill_rect(
        (x + w / 4) as f32,
        (y + 35) as f32,
        (w / 2) as f32,
        30.0,
        swatch,
    );

    let hint_w = presenter.measure_text(hint, 18);
    presenter.text(hint, x + w / 2 - hint_w / 2, y + h + 10, 18, color::GRAY);
}

fn draw_gameplay(state: &GameState, presenter: &mut dyn Presenter, show_fps: bool) {
    let w = state.screen_w as i32;

    let left = state.left_paddle.rect();
    presenter.fill_rect(
        left.x,
        left.y,
        left.w,
        left.h,
        state.left_paddle.color.color(),
    );
    let right = state.right_paddle.rect();
    presenter.fill_rect(
        right.x,
        right.y,
        right.w,
        right.h,
        state.right_paddle.color.color(),
    );

    presenter.fill_circle(
        state.ball.pos.x,
        state.ball.pos.y,
        BALL_RADIUS,
        state.ball.color,
    );

    let left_score = state.left_score.to_string();
    let left_w = presenter.measure_text(&left_score, 50);
    presenter.text(&left_score, w / 4 - left_w / 2, 15, 50, color::LIGHTGRAY);

    let right_score = state.right_score.to_string();
    let right_w = presenter.measure_text(&right_score, 50);
    presenter.text(
        &right_score,
        w * 3 / 4 - right_w / 2,
        15,
        50,
        color::LIGHTGRAY,
    );

    if show_fps {
        presenter.draw_fps(10, 10);
    }
}

fn draw_game_over(state: &GameState, presenter: &mut dyn Presenter) {
    let w = state.screen_w as i32;
    let h = state.screen_h as i32;

    let message = state.game_over_message.as_str();
    let message_w = presenter.measure_text(message, 60);
    presenter.text(message, w / 2 - message_w / 2, h / 4, 60, color::GOLD);

    let score_line = format!("{} - {}", state.left_score, state.right_score);
    let score_w = presenter.measure_text(&score_line, 40);
    presenter.text(
        &score_line,
        w / 2 - score_w / 2,
        h / 2,
        40,
        color::LIGHTGRAY,
    );

    let prompt = "Press ENTER for Title Screen";
    let prompt_w = presenter.measure_text(prompt, 25);
    presenter.text(prompt, w / 2 - prompt_w / 2, h * 3 / 4, 25, color::GRAY);
}
