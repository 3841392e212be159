//! View tests: pure rendering of game state + layout into a framebuffer.

use calc_rush::core::{generate, ButtonSlot, Game, Layout, SimpleRng};
use calc_rush::term::{GameView, Viewport, HEADER_ROWS};
use calc_rush::types::{Button, GameAction, BUTTON_COUNT};

fn screen_text(fb: &calc_rush::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn generated_layout(view: &GameView, vp: Viewport, seed: u32) -> Layout {
    let mut rng = SimpleRng::new(seed);
    generate(view.canvas_for(vp), &view.layout_params(), &mut rng)
}

#[test]
fn view_renders_canvas_border_corners() {
    let mut game = Game::new(1);
    game.start();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&game, &generated_layout(&view, vp, 1), vp);

    assert_eq!(fb.get(0, HEADER_ROWS).unwrap().ch, '┌');
    assert_eq!(fb.get(79, HEADER_ROWS).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 23).unwrap().ch, '└');
    assert_eq!(fb.get(79, 23).unwrap().ch, '┘');
}

#[test]
fn view_shows_expression_message_and_score() {
    let mut game = Game::new(1);
    game.start();
    game.apply_action(GameAction::Digit(4));
    game.apply_action(GameAction::Digit(2));

    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&game, &generated_layout(&view, vp, 1), vp);
    let text = screen_text(&fb);

    assert!(text.contains("42"));
    assert!(text.contains("Get to "));
    assert!(text.contains("Score: 0"));
}

#[test]
fn view_draws_every_button_label() {
    let mut game = Game::new(1);
    game.start();
    let view = GameView::default();
    let vp = Viewport::new(100, 32);
    let fb = view.render(&game, &generated_layout(&view, vp, 7), vp);
    let text = screen_text(&fb);

    for i in 0..BUTTON_COUNT {
        let label = Button::from_index(i).unwrap().label();
        assert!(text.contains(label), "label '{}' missing", label);
    }
}

#[test]
fn clicking_a_rendered_button_resolves_its_identity() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let layout = generated_layout(&view, vp, 3);

    for (i, slot) in layout.iter().enumerate() {
        // Click the slot's top-left logical cell in terminal coordinates.
        let col = 1 + slot.x * 2;
        let row = HEADER_ROWS + 1 + slot.y;
        assert_eq!(
            view.hit_test(&layout, col, row),
            Button::from_index(i),
            "slot {} at {:?}",
            i,
            slot
        );
    }
}

#[test]
fn clicking_empty_space_hits_nothing() {
    let view = GameView::default();
    // A single far-away slot; everything else defaults to size 0.
    let mut layout = vec![ButtonSlot { x: 0, y: 0, size: 0 }; BUTTON_COUNT];
    layout[0] = ButtonSlot { x: 30, y: 10, size: 3 };

    assert_eq!(view.hit_test(&layout, 3, HEADER_ROWS + 2), None);
    assert_eq!(view.hit_test(&layout, 1 + 30 * 2, HEADER_ROWS + 1 + 10), Some(Button::Digit(1)));
}

#[test]
fn tiny_viewport_renders_without_panicking() {
    let mut game = Game::new(1);
    game.start();
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (5, 3), (10, HEADER_ROWS)] {
        let vp = Viewport::new(w, h);
        let fb = view.render(&game, &generated_layout(&view, vp, 1), vp);
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}
