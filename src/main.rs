//! calc-rush terminal runner.
//!
//! Raw-mode crossterm event loop: render, wait for input until the next
//! one-second countdown tick, dispatch clicks and keys into the round
//! controller, and rebuild the button layout whenever the controller asks.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use calc_rush::core::{generate, Game, Layout, SimpleRng};
use calc_rush::input::{handle_key_event, should_quit};
use calc_rush::term::{GameView, TerminalRenderer, Viewport};
use calc_rush::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut rng = SimpleRng::from_time();
    let mut game = Game::new(rng.next_u32());
    game.start();
    game.take_layout_request();

    let view = GameView::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut layout = regenerate(&view, viewport, &mut rng);

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let fb = view.render(&game, &layout, viewport);
        term.draw(&fb)?;

        // Input with timeout until the next countdown tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        if let Some(button) = view.hit_test(&layout, mouse.column, mouse.row) {
                            game.apply_action(button.action());
                        }
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    layout = regenerate(&view, viewport, &mut rng);
                    game.take_layout_request();
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick once per wall second; the controller no-ops while inactive.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
        }

        // Scramble the buttons after any state-affecting event.
        if game.take_layout_request() {
            layout = regenerate(&view, viewport, &mut rng);
        }
    }
}

fn regenerate(view: &GameView, viewport: Viewport, rng: &mut SimpleRng) -> Layout {
    let canvas = view.canvas_for(viewport);
    generate(canvas, &view.layout_params(), rng)
}
