#![allow(clippy::float_cmp)]

use std::cell::RefCell;

use super::*;
use crate::coords::Fence;
use crate::doc::{BoxColor, BoxId};
use crate::zindex::{ZIndexAllocator, ZIndexPolicy};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(f64, f64, f64, f64),
    Rect(String, f64, f64, f64, f64),
    Text(String, String, String, f64, f64),
}

#[derive(Default)]
struct Recorder {
    ops: RefCell<Vec<Op>>,
    fail_text: bool,
}

impl Surface for Recorder {
    type Error = String;

    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.borrow_mut().push(Op::Clear(x, y, w, h));
    }

    fn fill_rect(&self, color: &str, x: f64, y: f64, w: f64, h: f64) {
        self.ops.borrow_mut().push(Op::Rect(color.to_owned(), x, y, w, h));
    }

    fn fill_text(&self, text: &str, color: &str, font: &str, x: f64, y: f64) -> Result<(), String> {
        if self.fail_text {
            return Err("text rejected".to_owned());
        }
        self.ops
            .borrow_mut()
            .push(Op::Text(text.to_owned(), color.to_owned(), font.to_owned(), x, y));
        Ok(())
    }
}

fn store() -> BoxStore {
    BoxStore::new(80, ZIndexAllocator::new(ZIndexPolicy::Monotonic, 0))
}

// =============================================================
// draw
// =============================================================

#[test]
fn draw_empty_store_only_clears() {
    let surface = Recorder::default();
    draw(&surface, &store(), &Config::default()).unwrap();
    assert_eq!(*surface.ops.borrow(), vec![Op::Clear(0.0, 0.0, 400.0, 400.0)]);
}

#[test]
fn draw_box_paints_square_then_label() {
    let mut doc = store();
    let id = doc.add().unwrap().id;
    doc.move_by(id, 40, 80, Fence::new(400, 400));

    let surface = Recorder::default();
    draw(&surface, &doc, &Config::default()).unwrap();

    let ops = surface.ops.borrow();
    assert_eq!(ops.len(), 3);
    assert_eq!(ops[1], Op::Rect("black".to_owned(), 40.0, 80.0, 80.0, 80.0));
    assert_eq!(
        ops[2],
        Op::Text("1".to_owned(), "white".to_owned(), "20pt sans-serif".to_owned(), 40.0 + 80.0 / 3.5, 80.0 + 80.0 / 1.7)
    );
}

#[test]
fn draw_uses_highlight_color_for_selected() {
    let mut doc = store();
    let a = doc.add().unwrap().id;
    doc.add().unwrap();
    doc.highlight_only(a);

    let surface = Recorder::default();
    draw(&surface, &doc, &Config::default()).unwrap();

    let colors: Vec<String> = surface
        .ops
        .borrow()
        .iter()
        .filter_map(|op| match op {
            Op::Rect(c, ..) => Some(c.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(colors, vec!["red".to_owned(), "black".to_owned()]);
}

#[test]
fn draw_follows_collection_order() {
    let mut doc = BoxStore::new(80, ZIndexAllocator::new(ZIndexPolicy::RandomProbe { reclaim_on_delete: false }, 5));
    for _ in 0..5 {
        doc.add().unwrap();
    }
    doc.sort_by_z();

    let surface = Recorder::default();
    draw(&surface, &doc, &Config::default()).unwrap();

    let labels: Vec<i64> = surface
        .ops
        .borrow()
        .iter()
        .filter_map(|op| match op {
            Op::Text(t, ..) => t.parse().ok(),
            _ => None,
        })
        .collect();
    assert_eq!(labels, doc.z_indices());
    let mut sorted = labels.clone();
    sorted.sort_unstable();
    assert_eq!(labels, sorted);
}

#[test]
fn draw_clears_with_configured_canvas_size() {
    let config = Config { canvas_width: 640, canvas_height: 480, ..Config::default() };
    let surface = Recorder::default();
    draw(&surface, &store(), &config).unwrap();
    assert_eq!(surface.ops.borrow()[0], Op::Clear(0.0, 0.0, 640.0, 480.0));
}

#[test]
fn draw_propagates_surface_error() {
    let mut doc = store();
    doc.add().unwrap();
    doc.add().unwrap();

    let surface = Recorder { fail_text: true, ..Default::default() };
    let err = draw(&surface, &doc, &Config::default()).unwrap_err();
    assert_eq!(err, "text rejected");
    // Clear plus the first rect; the failing label stops the frame.
    assert_eq!(surface.ops.borrow().len(), 2);
}

// =============================================================
// Label helpers
// =============================================================

#[test]
fn label_font_scales_with_side() {
    assert_eq!(label_font(80), "20pt sans-serif");
    assert_eq!(label_font(50), "12.5pt sans-serif");
}

#[test]
fn label_origin_offsets_from_top_left() {
    let obj = BoxObject { id: BoxId(1), x: 10, y: 20, side: 70, color: BoxColor::Default, z_index: 3 };
    let (x, y) = label_origin(&obj);
    assert_eq!(x, 10.0 + 70.0 / 3.5);
    assert_eq!(y, 20.0 + 70.0 / 1.7);
}
