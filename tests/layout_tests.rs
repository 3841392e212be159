//! Layout engine integration tests: placement invariants across many seeds
//! and canvas scales, plus termination on hostile canvases.

use calc_rush::core::{generate, in_bounds, slots_overlap, Canvas, LayoutParams, SimpleRng};
use calc_rush::types::BUTTON_COUNT;

fn assert_invariants(canvas: Canvas, params: &LayoutParams, seed: u32) {
    let mut rng = SimpleRng::new(seed);
    let layout = generate(canvas, params, &mut rng);

    assert_eq!(layout.len(), params.count);
    for (i, a) in layout.iter().enumerate() {
        assert!(
            in_bounds(a, canvas, params.margin),
            "seed {}: slot {:?} out of bounds on {:?}",
            seed,
            a,
            canvas
        );
        assert!(a.size >= 1, "seed {}: degenerate slot {:?}", seed, a);
        for b in layout.iter().skip(i + 1) {
            assert!(
                !slots_overlap(a, b, params.margin),
                "seed {}: {:?} overlaps {:?}",
                seed,
                a,
                b
            );
        }
    }
}

#[test]
fn cell_scale_invariants_hold_across_seeds() {
    let params = LayoutParams {
        count: BUTTON_COUNT,
        min_size: 3,
        max_size: 5,
        margin: 1,
        max_attempts_per_slot: 100,
    };
    for seed in 1..200 {
        assert_invariants(Canvas::new(60, 30), &params, seed);
    }
}

#[test]
fn pixel_scale_invariants_hold_in_large_container() {
    // 16 buttons of 50..80px with a 10px margin inside a roughly 448x500
    // container.
    let params = LayoutParams::default();
    for seed in 1..30 {
        assert_invariants(Canvas::new(448, 500), &params, seed);
    }
}

#[test]
fn wide_and_tall_canvases_both_work() {
    let params = LayoutParams {
        count: BUTTON_COUNT,
        min_size: 3,
        max_size: 4,
        margin: 1,
        max_attempts_per_slot: 100,
    };
    for seed in 1..50 {
        assert_invariants(Canvas::new(120, 20), &params, seed);
        assert_invariants(Canvas::new(30, 60), &params, seed);
    }
}

#[test]
fn hostile_canvas_terminates_with_full_slot_count() {
    // Too small for 16 non-overlapping squares: the generator must still
    // return (grid fallback), not spin forever.
    let params = LayoutParams {
        count: BUTTON_COUNT,
        min_size: 3,
        max_size: 5,
        margin: 1,
        max_attempts_per_slot: 100,
    };
    let mut rng = SimpleRng::new(1);
    let layout = generate(Canvas::new(10, 10), &params, &mut rng);
    assert_eq!(layout.len(), BUTTON_COUNT);
}

#[test]
fn zero_sized_canvas_does_not_panic() {
    let params = LayoutParams::default();
    let mut rng = SimpleRng::new(1);
    let layout = generate(Canvas::new(0, 0), &params, &mut rng);
    assert_eq!(layout.len(), params.count);
}

#[test]
fn layouts_differ_between_regenerations() {
    let params = LayoutParams {
        count: BUTTON_COUNT,
        min_size: 3,
        max_size: 5,
        margin: 1,
        max_attempts_per_slot: 100,
    };
    let canvas = Canvas::new(60, 30);
    let mut rng = SimpleRng::new(11);

    let first = generate(canvas, &params, &mut rng);
    let second = generate(canvas, &params, &mut rng);
    // Same RNG stream, successive draws: the buttons actually jump.
    assert_ne!(first, second);
}
