//! Canvas-local coordinates, the fence that bounds every box, and the
//! page-to-canvas translation used by pointer input.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

/// A point in canvas pixels (or page pixels, before translation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The bounded drawing surface. Box positions are clamped so the whole
/// square stays inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    pub width: i32,
    pub height: i32,
}

impl Fence {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Largest legal x for a box of the given side.
    #[must_use]
    pub fn max_x(&self, side: i32) -> i32 {
        (self.width - side).max(0)
    }

    /// Largest legal y for a box of the given side.
    #[must_use]
    pub fn max_y(&self, side: i32) -> i32 {
        (self.height - side).max(0)
    }

    /// Clamp a top-left position into the fence.
    #[must_use]
    pub fn clamp(&self, pos: Point, side: i32) -> Point {
        Point {
            x: pos.x.clamp(0, self.max_x(side)),
            y: pos.y.clamp(0, self.max_y(side)),
        }
    }
}

/// Page-space offset of the canvas content box: element offset plus the
/// computed left/top padding and border widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasOffset {
    pub offset_left: i32,
    pub offset_top: i32,
    pub padding_left: i32,
    pub padding_top: i32,
    pub border_left: i32,
    pub border_top: i32,
}

impl CanvasOffset {
    /// Total horizontal distance from the page origin to canvas x = 0.
    #[must_use]
    pub fn total_x(&self) -> i32 {
        self.offset_left + self.padding_left + self.border_left
    }

    /// Total vertical distance from the page origin to canvas y = 0.
    #[must_use]
    pub fn total_y(&self) -> i32 {
        self.offset_top + self.padding_top + self.border_top
    }

    /// Convert a page-relative pointer position to canvas-local pixels.
    #[must_use]
    pub fn page_to_canvas(&self, page: Point) -> Point {
        Point {
            x: page.x - self.total_x(),
            y: page.y - self.total_y(),
        }
    }
}

/// Parse a computed CSS length such as `"12px"` or `"3.5px"` into whole
/// pixels. Mirrors `parseInt(value, 10) || 0`: leading whitespace and sign
/// are accepted, parsing stops at the first non-digit, and anything
/// unparsable yields 0.
#[must_use]
pub fn parse_css_px(value: &str) -> i32 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut acc: i32 = 0;
    for ch in digits.chars() {
        let Some(d) = ch.to_digit(10) else {
            break;
        };
        // Lengths past i32 range are not meaningful pixel offsets.
        let Some(next) = acc.checked_mul(10).and_then(|v| v.checked_add_unsigned(d)) else {
            return 0;
        };
        acc = next;
    }

    if negative { -acc } else { acc }
}
