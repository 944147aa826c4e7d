#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::coords::Point;
use crate::doc::{BoxId, BoxObject, BoxStore};

/// Edge rule for the box bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitMode {
    /// `diff ∈ [0, side]`. Adjacent boxes share their boundary pixel.
    #[default]
    Inclusive,
    /// `diff ∈ [0, side)`.
    HalfOpen,
}

impl HitMode {
    fn within(self, diff: i32, side: i32) -> bool {
        match self {
            Self::Inclusive => (0..=side).contains(&diff),
            Self::HalfOpen => (0..side).contains(&diff),
        }
    }
}

/// Whether `pt` falls on `obj`.
#[must_use]
pub fn contains(obj: &BoxObject, pt: Point, mode: HitMode) -> bool {
    mode.within(pt.x - obj.x, obj.side) && mode.within(pt.y - obj.y, obj.side)
}

/// Scan `doc` in collection order and return the last box under `pt`.
#[must_use]
pub fn hit_test(doc: &BoxStore, pt: Point, mode: HitMode) -> Option<BoxId> {
    doc.iter().rev().find(|b| contains(b, pt, mode)).map(|b| b.id)
}
