use criterion::{black_box, criterion_group, criterion_main, Criterion};

use calc_rush::core::{generate, Canvas, Game, LayoutParams, SimpleRng};
use calc_rush::types::{GameAction, BUTTON_COUNT};

fn bench_generate_cell_scale(c: &mut Criterion) {
    let params = LayoutParams {
        count: BUTTON_COUNT,
        min_size: 3,
        max_size: 5,
        margin: 1,
        max_attempts_per_slot: 100,
    };
    let canvas = Canvas::new(60, 30);
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_layout_cell_scale", |b| {
        b.iter(|| generate(black_box(canvas), &params, &mut rng))
    });
}

fn bench_generate_pixel_scale(c: &mut Criterion) {
    let params = LayoutParams::default();
    let canvas = Canvas::new(448, 500);
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_layout_pixel_scale", |b| {
        b.iter(|| generate(black_box(canvas), &params, &mut rng))
    });
}

fn bench_submit_round_trip(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();

    c.bench_function("digit_op_digit_submit", |b| {
        b.iter(|| {
            game.apply_action(GameAction::Digit(7));
            game.apply_action(GameAction::Op(calc_rush::types::Operator::Add));
            game.apply_action(GameAction::Digit(3));
            game.apply_action(GameAction::Submit);
            black_box(game.score())
        })
    });
}

criterion_group!(
    benches,
    bench_generate_cell_scale,
    bench_generate_pixel_scale,
    bench_submit_round_trip
);
criterion_main!(benches);
