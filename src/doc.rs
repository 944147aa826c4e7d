//! Document model: boxes, their colors, and the in-memory registry.
//!
//! This module defines what lives on the canvas (`BoxObject`, `BoxColor`),
//! the recoverable error raised by registry operations (`BoxError`), and the
//! ordered store that owns every live box (`BoxStore`).
//!
//! Insertion order is significant: hit-testing scans in collection order and
//! the last match wins. The render loop calls [`BoxStore::sort_by_z`] before
//! every redraw so that collection order and paint order agree.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use crate::coords::{Fence, Point};
use crate::zindex::ZIndexAllocator;

/// Registry-assigned identifier. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(pub u64);

/// Recoverable conditions surfaced to the user as a status line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoxError {
    /// Move or delete was requested while nothing is selected.
    #[error("Please select a box first!")]
    NoSelection,
    /// The z-index generator has no unused values left.
    #[error("No z-index left for a new box!")]
    ZIndexExhausted,
}

/// The two mutually exclusive box colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxColor {
    #[default]
    Default,
    Highlighted,
}

/// A single square on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxObject {
    /// Stable identifier used by the selection.
    pub id: BoxId,
    /// Left edge in canvas pixels.
    pub x: i32,
    /// Top edge in canvas pixels.
    pub y: i32,
    /// Side length in canvas pixels.
    pub side: i32,
    pub color: BoxColor,
    /// Paint order and on-box label.
    pub z_index: i64,
}

impl BoxObject {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.color == BoxColor::Highlighted
    }
}

/// Ordered collection of live boxes.
#[derive(Debug, Clone)]
pub struct BoxStore {
    boxes: Vec<BoxObject>,
    side: i32,
    next_id: u64,
    z_alloc: ZIndexAllocator,
}

impl BoxStore {
    /// Create an empty store whose boxes all share `side`.
    #[must_use]
    pub fn new(side: i32, z_alloc: ZIndexAllocator) -> Self {
        Self { boxes: Vec::new(), side, next_id: 1, z_alloc }
    }

    /// Append a new box at the origin with the default color.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::ZIndexExhausted`] if the z-index policy cannot
    /// produce another unique value. The store is unchanged in that case.
    pub fn add(&mut self) -> Result<&BoxObject, BoxError> {
        let z_index = self.z_alloc.allocate()?;
        let id = BoxId(self.next_id);
        self.next_id += 1;
        let index = self.boxes.len();
        self.boxes.push(BoxObject { id, x: 0, y: 0, side: self.side, color: BoxColor::Default, z_index });
        Ok(&self.boxes[index])
    }

    /// Look up a box by id.
    #[must_use]
    pub fn get(&self, id: BoxId) -> Option<&BoxObject> {
        self.boxes.iter().find(|b| b.id == id)
    }

    /// Iterate in current collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoxObject> {
        self.boxes.iter()
    }

    /// Highlight exactly `id` and reset every other box to the default color.
    /// Returns false (and changes nothing) if `id` is not live.
    pub fn highlight_only(&mut self, id: BoxId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        for b in &mut self.boxes {
            b.color = if b.id == id { BoxColor::Highlighted } else { BoxColor::Default };
        }
        true
    }

    /// Ids of all highlighted boxes, in collection order.
    #[must_use]
    pub fn highlighted(&self) -> Vec<BoxId> {
        self.boxes.iter().filter(|b| b.is_highlighted()).map(|b| b.id).collect()
    }

    /// Remove every highlighted box and return them. Their z-indices are
    /// released back to the allocator.
    pub fn remove_highlighted(&mut self) -> Vec<BoxObject> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.boxes)
            .into_iter()
            .partition(BoxObject::is_highlighted);
        self.boxes = kept;
        for b in &removed {
            self.z_alloc.release(b.z_index);
        }
        removed
    }

    /// Shift a box by `(dx, dy)`, clamped into `fence`. Returns the new
    /// position, or `None` if `id` is not live.
    pub fn move_by(&mut self, id: BoxId, dx: i32, dy: i32, fence: Fence) -> Option<Point> {
        let b = self.boxes.iter_mut().find(|b| b.id == id)?;
        let target = Point::new(b.x.saturating_add(dx), b.y.saturating_add(dy));
        let clamped = fence.clamp(target, b.side);
        b.x = clamped.x;
        b.y = clamped.y;
        Some(clamped)
    }

    /// Pull every box back inside `fence`, e.g. after the canvas shrank.
    pub fn clamp_all(&mut self, fence: Fence) {
        for b in &mut self.boxes {
            let clamped = fence.clamp(b.position(), b.side);
            b.x = clamped.x;
            b.y = clamped.y;
        }
    }

    /// Stable sort of the collection by ascending z-index.
    pub fn sort_by_z(&mut self) {
        self.boxes.sort_by_key(|b| b.z_index);
    }

    /// All live z-indices in collection order.
    #[must_use]
    pub fn z_indices(&self) -> Vec<i64> {
        self.boxes.iter().map(|b| b.z_index).collect()
    }

    #[must_use]
    pub fn side(&self) -> i32 {
        self.side
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl<'a> IntoIterator for &'a BoxStore {
    type Item = &'a BoxObject;
    type IntoIter = std::slice::Iter<'a, BoxObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}
