//! Terminal mark-match runner (default binary).
//!
//! Wires keyboard input, the puzzle engine, and the framebuffer renderer
//! together. The engine resolves matches synchronously; this loop drains
//! its event log into a timed animation queue so batches flash one at a
//! time, and mirrors the input gate visually while the queue drains.

mod animation;
mod cli;

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use mark_match::core::Grid;
use mark_match::engine::{default_patterns, load_pattern_set, Engine, EventLog};
use mark_match::input::{handle_key_event, should_quit};
use mark_match::term::{FrameBuffer, GridScene, GridView, TerminalRenderer, Viewport};
use mark_match::types::{UiAction, MAX_GRID_SIZE, MIN_GRID_SIZE, TICK_MS};

use animation::MatchAnimation;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = cli::parse_args(&args)?;

    let patterns = match &config.pattern_file {
        Some(path) => load_pattern_set(path)?,
        None => default_patterns(),
    };
    let grid = Grid::new(config.size)?;
    let mut engine = Engine::new(grid, patterns, EventLog::default());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine<EventLog>) -> Result<()> {
    let view = GridView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut anim = MatchAnimation::new();
    let mut cursor = (0i32, 0i32);
    let mut status = String::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let scene = GridScene {
            grid: engine.grid(),
            cursor,
            score: anim.score_override().unwrap_or_else(|| engine.score()),
            pattern_count: engine.pattern_count(),
            highlight: anim.highlight(),
            resolving: anim.busy(),
            status: &status,
        };
        view.render_into(&scene, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(engine, &mut anim, &mut cursor, &mut status, action);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            anim.update(TICK_MS);
        }
    }
}

fn apply_action(
    engine: &mut Engine<EventLog>,
    anim: &mut MatchAnimation,
    cursor: &mut (i32, i32),
    status: &mut String,
    action: UiAction,
) {
    status.clear();
    let size = engine.grid().size();

    match action {
        UiAction::CursorUp => cursor.1 = (cursor.1 - 1).max(0),
        UiAction::CursorDown => cursor.1 = (cursor.1 + 1).min(size - 1),
        UiAction::CursorLeft => cursor.0 = (cursor.0 - 1).max(0),
        UiAction::CursorRight => cursor.0 = (cursor.0 + 1).min(size - 1),

        UiAction::ToggleMark => {
            // The engine gate has already released by the time batches
            // replay; mirror it while the animation drains.
            if anim.busy() {
                status.push_str("wait for matches");
                return;
            }
            if let Err(err) = engine.toggle_cell(cursor.0, cursor.1) {
                status.push_str(&err.to_string());
            }
        }

        UiAction::GrowGrid => resize_to(engine, anim, cursor, status, size + 1),
        UiAction::ShrinkGrid => resize_to(engine, anim, cursor, status, size - 1),
        UiAction::Rebuild => resize_to(engine, anim, cursor, status, size),
    }

    for event in engine.sink_mut().drain() {
        anim.absorb(event);
    }
}

fn resize_to(
    engine: &mut Engine<EventLog>,
    anim: &mut MatchAnimation,
    cursor: &mut (i32, i32),
    status: &mut String,
    size: i32,
) {
    if anim.busy() {
        status.push_str("wait for matches");
        return;
    }
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        status.push_str("grid size limit");
        return;
    }
    match engine.resize(size) {
        Ok(()) => {
            cursor.0 = cursor.0.min(size - 1);
            cursor.1 = cursor.1.min(size - 1);
        }
        Err(err) => status.push_str(&err.to_string()),
    }
}
