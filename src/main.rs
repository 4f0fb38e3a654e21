// src/main.rs
use nannou::prelude::*;

use takvis::{
    animation::FramePlayback,
    config::Config,
    draw::{draw_frame, CanvasTransform, DisplayList},
    logging,
    models::{Player, TakBoard},
    views::{BoardStyle, ViewBoard},
};

struct Model {
    // Board view
    view_board: ViewBoard<TakBoard>,
    board_size: usize,

    // Rendering components:
    surface: DisplayList,
    playback: FramePlayback,
    canvas: CanvasTransform,

    // Demo sequence
    demo_moves: Vec<String>,
    next_move: usize,
    to_play: Player,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    logging::init(&config.logging.level);

    // Create window
    let (width, height) = config.window_size();
    app.new_window()
        .title("takvis 0.1.0")
        .size(width, height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let board_size = config.layout.board_size;
    let mut view_board = ViewBoard::new(
        TakBoard::new(board_size),
        &config.layout,
        BoardStyle::from(&config.style),
    );

    // Draw the empty board once
    let mut surface = DisplayList::new();
    view_board.render(&mut surface);
    let mut playback = FramePlayback::new(config.animation.frame_duration);
    playback.enqueue(surface.take_frames());

    log::info!(
        "{}x{} board, {} demo moves (space: next, r: restart)",
        board_size,
        board_size,
        config.demo.moves.len()
    );

    Model {
        view_board,
        board_size,
        surface,
        playback,
        canvas: CanvasTransform::new(width as f32, height as f32),
        demo_moves: config.demo.moves.clone(),
        next_move: 0,
        to_play: Player::White,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // play the next demo move
        Key::Space => play_next_move(model),
        Key::R => {
            model.view_board.reset(TakBoard::new(model.board_size));
            model.next_move = 0;
            model.to_play = Player::White;
            refresh(model);
        }
        _ => (),
    }
}

fn play_next_move(model: &mut Model) {
    if !model.playback.is_complete() {
        // still animating the previous move
        return;
    }
    let Some(notation) = model.demo_moves.get(model.next_move).cloned() else {
        log::info!("demo finished, press r to restart");
        return;
    };
    model.next_move += 1;

    let old_board = model.view_board.board().clone();
    match model.view_board.apply_move(&notation, model.to_play, &old_board) {
        Ok(()) => {
            model.to_play = model.to_play.other();
            refresh(model);
        }
        Err(err) => log::warn!("skipping {}: {}", notation, err),
    }
}

fn refresh(model: &mut Model) {
    let animated = model.view_board.render(&mut model.surface);
    let frames = model.surface.take_frames();
    log::debug!("queued {} frames ({} animated)", frames.len(), animated);
    model.playback.enqueue(frames);
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.playback.tick(update.since_last.as_secs_f32());
}

// Draw the current frame of the board
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    if let Some(current) = model.playback.current() {
        draw_frame(&draw, current, &model.canvas);
    }

    draw.to_frame(app, &frame).unwrap();
}
