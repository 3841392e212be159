//! Layout engine - non-overlapping random button placement.
//!
//! Given a canvas and a button count, place one square per button so that
//! every square sits fully inside the canvas minus a margin and no two
//! margin-expanded squares intersect. Placement is rejection sampling per
//! slot; when a slot exhausts its attempt budget the whole placement is
//! thrown away and started over, which avoids ever getting wedged on a
//! partial arrangement. Full restarts are capped, and past the cap (or on a
//! canvas too small to fit even one minimum square) a plain row-major grid
//! is returned so the caller always gets something drawable.
//!
//! This module is pure (RNG passed in, no I/O) and deterministic per seed.

use crate::core::rng::SimpleRng;
use crate::types::BUTTON_COUNT;

/// Drawable area supplied by the hosting view. Never mutated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u16,
    pub height: u16,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Absolute square assigned to one button for the current layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSlot {
    pub x: u16,
    pub y: u16,
    /// Side length; slots are square.
    pub size: u16,
}

impl ButtonSlot {
    /// Hit test a point against this slot.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.size && y >= self.y && y < self.y + self.size
    }
}

/// Ordered slots, one per button index. Regenerated wholesale, never patched.
pub type Layout = Vec<ButtonSlot>;

/// Placement tuning. Defaults are pixel-scale; the terminal view passes
/// cell-scale values derived from its viewport.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    pub count: usize,
    pub min_size: u16,
    pub max_size: u16,
    pub margin: u16,
    pub max_attempts_per_slot: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            count: BUTTON_COUNT,
            min_size: 50,
            max_size: 80,
            margin: 10,
            max_attempts_per_slot: 100,
        }
    }
}

/// Cap on whole-placement restarts before falling back to a grid.
pub const MAX_RESTARTS: u32 = 256;

/// True when the margin-expanded bounding boxes of `a` and `b` intersect.
pub fn slots_overlap(a: &ButtonSlot, b: &ButtonSlot, margin: u16) -> bool {
    let (ax, ay, asz) = (a.x as u32, a.y as u32, a.size as u32);
    let (bx, by, bsz) = (b.x as u32, b.y as u32, b.size as u32);
    let m = margin as u32;

    let horizontal = ax + asz + m > bx && bx + bsz + m > ax;
    let vertical = ay + asz + m > by && by + bsz + m > ay;
    horizontal && vertical
}

/// True when the slot lies fully inside the canvas minus the margin.
pub fn in_bounds(slot: &ButtonSlot, canvas: Canvas, margin: u16) -> bool {
    slot.x >= margin
        && slot.y >= margin
        && slot.x as u32 + slot.size as u32 <= (canvas.width as u32).saturating_sub(margin as u32)
        && slot.y as u32 + slot.size as u32 <= (canvas.height as u32).saturating_sub(margin as u32)
}

fn can_fit_one(canvas: Canvas, params: &LayoutParams) -> bool {
    let need = params.min_size as u32 + 2 * params.margin as u32;
    canvas.width as u32 >= need && canvas.height as u32 >= need
}

/// Generate a fresh layout of `params.count` slots.
///
/// Always returns exactly `count` slots. The in-bounds and non-overlap
/// invariants hold for every randomly placed layout; the grid fallback keeps
/// them too unless the canvas is simply too small, in which case slots are
/// clamped to the canvas edge.
pub fn generate(canvas: Canvas, params: &LayoutParams, rng: &mut SimpleRng) -> Layout {
    if !can_fit_one(canvas, params) {
        return grid_fallback(canvas, params);
    }

    for _ in 0..MAX_RESTARTS {
        if let Some(slots) = try_place(canvas, params, rng) {
            return slots;
        }
    }

    grid_fallback(canvas, params)
}

/// One full placement pass. Returns None when any slot exhausts its attempt
/// budget, discarding all previously accepted slots.
fn try_place(canvas: Canvas, params: &LayoutParams, rng: &mut SimpleRng) -> Option<Layout> {
    let mut accepted: Layout = Vec::with_capacity(params.count);

    for _ in 0..params.count {
        let mut placed = false;

        for _ in 0..params.max_attempts_per_slot {
            let candidate = sample_slot(canvas, params, rng);
            if accepted
                .iter()
                .all(|s| !slots_overlap(&candidate, s, params.margin))
            {
                accepted.push(candidate);
                placed = true;
                break;
            }
        }

        if !placed {
            return None;
        }
    }

    Some(accepted)
}

/// Sample a candidate square that fits inside canvas minus margin.
fn sample_slot(canvas: Canvas, params: &LayoutParams, rng: &mut SimpleRng) -> ButtonSlot {
    // Clamp the side so the position range below is never empty.
    let max_side = params
        .max_size
        .min(canvas.width - 2 * params.margin)
        .min(canvas.height - 2 * params.margin);
    let min_side = params.min_size.min(max_side);

    let size = rng.next_between(min_side as u32, max_side as u32) as u16;
    let x = rng.next_between(
        params.margin as u32,
        (canvas.width - size - params.margin) as u32,
    ) as u16;
    let y = rng.next_between(
        params.margin as u32,
        (canvas.height - size - params.margin) as u32,
    ) as u16;

    ButtonSlot { x, y, size }
}

/// Deterministic row-major grid of minimum-size squares. Used when random
/// placement cannot terminate or the canvas is below the feasible minimum.
fn grid_fallback(canvas: Canvas, params: &LayoutParams) -> Layout {
    let size = params.min_size;
    let pitch = (size + params.margin) as u32;
    let usable = (canvas.width as u32).saturating_sub(params.margin as u32);
    let cols = (usable / pitch).max(1);

    (0..params.count)
        .map(|i| {
            let col = i as u32 % cols;
            let row = i as u32 / cols;
            let x = params.margin as u32 + col * pitch;
            let y = params.margin as u32 + row * pitch;

            // Clamp to the canvas so slots stay drawable even when the grid
            // does not fit; overlap is the accepted degradation here.
            let max_x = (canvas.width as u32).saturating_sub(size as u32 + params.margin as u32);
            let max_y = (canvas.height as u32).saturating_sub(size as u32 + params.margin as u32);
            ButtonSlot {
                x: x.min(max_x) as u16,
                y: y.min(max_y) as u16,
                size,
            }
        })
        .collect()
}
