//! Shared constants for the box canvas.

// ── Geometry ────────────────────────────────────────────────────

/// Default side length of every box, in canvas pixels.
pub const DEFAULT_SIDE: i32 = 80;

/// Default distance a box travels per key press. Half the default side.
pub const DEFAULT_MOVE_SPEED: i32 = 40;

/// Fallback canvas width when no element is attached.
pub const DEFAULT_CANVAS_WIDTH: i32 = 400;

/// Fallback canvas height when no element is attached.
pub const DEFAULT_CANVAS_HEIGHT: i32 = 400;

// ── Render loop ─────────────────────────────────────────────────

/// Redraw period in milliseconds.
pub const DEFAULT_TICK_MS: u32 = 20;

// ── Colors ──────────────────────────────────────────────────────

pub const DEFAULT_COLOR: &str = "black";
pub const HIGHLIGHT_COLOR: &str = "red";
pub const LABEL_COLOR: &str = "white";

// ── Z-index ─────────────────────────────────────────────────────

/// Smallest label the random-probe policy can draw.
pub const RANDOM_Z_MIN: i64 = 1;

/// Largest label the random-probe policy can draw.
pub const RANDOM_Z_MAX: i64 = 99;

// ── Status ──────────────────────────────────────────────────────

/// Status text shown when move/delete runs without a selection.
pub const NO_SELECTION_MSG: &str = "Please select a box first!";
