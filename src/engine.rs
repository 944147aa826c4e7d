use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use crate::config::Config;
use crate::coords::{CanvasOffset, Point};
use crate::doc::{BoxError, BoxId, BoxObject, BoxStore};
use crate::dom::{self, DomSubscription};
use crate::hit;
use crate::input::{Command, Direction, Key, UiState};
use crate::listener::{ListenerStatus, ListenerToggle};
use crate::render::{self, Surface};
use crate::zindex::ZIndexAllocator;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from commands and input handlers for the host to observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    BoxAdded { id: BoxId, z_index: i64 },
    BoxMoved { id: BoxId, x: i32, y: i32 },
    BoxDeleted { id: BoxId },
    SelectionChanged(Option<BoxId>),
    StatusChanged(String),
    RenderNeeded,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub config: Config,
    pub doc: BoxStore,
    pub ui: UiState,
}

impl EngineCore {
    /// Build a session from a validated config. `seed` feeds the random-probe
    /// z-index policy when the config does not pin one.
    #[must_use]
    pub fn new(config: Config, seed: u64) -> Self {
        let z_alloc = ZIndexAllocator::new(config.z_policy, config.seed.unwrap_or(seed));
        let doc = BoxStore::new(config.side, z_alloc);
        Self { config, doc, ui: UiState::default() }
    }

    // --- Commands ---

    /// Append a box at the origin.
    pub fn add_box(&mut self) -> Vec<Action> {
        match self.doc.add() {
            Ok(obj) => {
                log::debug!("added box {:?} with z-index {}", obj.id, obj.z_index);
                vec![Action::BoxAdded { id: obj.id, z_index: obj.z_index }, Action::RenderNeeded]
            }
            Err(err) => self.report(&err),
        }
    }

    /// Select the last box under the canvas-local point `pt`.
    ///
    /// A miss leaves colors and the current selection untouched.
    pub fn select_at(&mut self, pt: Point) -> Vec<Action> {
        let Some(id) = hit::hit_test(&self.doc, pt, self.config.hit_mode) else {
            return Vec::new();
        };
        self.doc.highlight_only(id);
        self.ui.selected_id = Some(id);
        vec![Action::SelectionChanged(Some(id)), Action::RenderNeeded]
    }

    /// Move the selected box one step, clamped to the canvas.
    pub fn move_selected(&mut self, direction: Direction) -> Vec<Action> {
        let Some(id) = self.live_selection() else {
            return self.report(&BoxError::NoSelection);
        };
        let (dx, dy) = direction.delta(self.config.move_speed);
        let fence = self.config.fence();
        let Some(pos) = self.doc.move_by(id, dx, dy, fence) else {
            return self.report(&BoxError::NoSelection);
        };

        let mut actions = self.clear_status();
        actions.push(Action::BoxMoved { id, x: pos.x, y: pos.y });
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Remove the highlighted box and clear the selection.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        if self.live_selection().is_none() {
            return self.report(&BoxError::NoSelection);
        }
        let removed = self.doc.remove_highlighted();
        self.ui.selected_id = None;

        let mut actions = self.clear_status();
        for obj in &removed {
            log::debug!("deleted box {:?} (z-index {})", obj.id, obj.z_index);
            actions.push(Action::BoxDeleted { id: obj.id });
        }
        actions.push(Action::SelectionChanged(None));
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Input events ---

    /// Translate a keydown into a command. Unmapped keys do nothing.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match Command::from_key(key) {
            Some(Command::Move(direction)) => self.move_selected(direction),
            Some(Command::DeleteSelected) => self.delete_selected(),
            None => Vec::new(),
        }
    }

    /// Translate a page-relative pointer press into a selection.
    pub fn on_pointer_down(&mut self, page_pt: Point, offset: CanvasOffset) -> Vec<Action> {
        self.select_at(offset.page_to_canvas(page_pt))
    }

    // --- Render ---

    /// One render-loop frame: optional z-order sort, clear, redraw.
    ///
    /// # Errors
    ///
    /// Returns the surface error that interrupted the frame.
    pub fn tick<S: Surface>(&mut self, surface: &S) -> Result<(), S::Error> {
        if self.config.sort_each_tick {
            self.doc.sort_by_z();
        }
        render::draw(surface, &self.doc, &self.config)
    }

    // --- Viewport ---

    /// Adopt new canvas dimensions and pull every box back inside them.
    /// Unchanged dimensions do nothing.
    pub fn set_canvas_size(&mut self, width: i32, height: i32) -> Vec<Action> {
        if (width, height) == (self.config.canvas_width, self.config.canvas_height) {
            return Vec::new();
        }
        log::debug!("canvas resized to {width}x{height}");
        self.config.canvas_width = width;
        self.config.canvas_height = height;
        self.doc.clamp_all(self.config.fence());
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// The currently selected box, if any.
    #[must_use]
    pub fn selection(&self) -> Option<BoxId> {
        self.ui.selected_id
    }

    /// Status line for the user; empty when there is nothing to report.
    #[must_use]
    pub fn error_msg(&self) -> &str {
        &self.ui.error_msg
    }

    /// Look up a box by id.
    #[must_use]
    pub fn object(&self, id: BoxId) -> Option<&BoxObject> {
        self.doc.get(id)
    }

    // --- Internals ---

    /// The selection, dropped if it no longer resolves to a live box.
    fn live_selection(&mut self) -> Option<BoxId> {
        let id = self.ui.selected_id?;
        if self.doc.get(id).is_none() {
            self.ui.selected_id = None;
            return None;
        }
        Some(id)
    }

    fn report(&mut self, err: &BoxError) -> Vec<Action> {
        log::info!("{err}");
        self.ui.error_msg = err.to_string();
        vec![Action::StatusChanged(self.ui.error_msg.clone())]
    }

    fn clear_status(&mut self) -> Vec<Action> {
        if self.ui.error_msg.is_empty() {
            return Vec::new();
        }
        self.ui.error_msg.clear();
        vec![Action::StatusChanged(String::new())]
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas
/// element, the render timer, and the input listeners.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    core: Rc<RefCell<EngineCore>>,
    timer: Option<Interval>,
    listeners: Option<ListenerToggle<DomSubscription>>,
}

impl Engine {
    /// Create an engine bound to `canvas`. The canvas element's size
    /// replaces the configured dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or the resulting
    /// config does not validate.
    pub fn new(canvas: HtmlCanvasElement, mut config: Config, seed: u64) -> Result<Self, JsValue> {
        config.canvas_width = dom::dimension(canvas.width());
        config.canvas_height = dom::dimension(canvas.height());
        config.validate().map_err(|err| JsValue::from_str(&err.to_string()))?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            canvas,
            ctx,
            core: Rc::new(RefCell::new(EngineCore::new(config, seed))),
            timer: None,
            listeners: None,
        })
    }

    /// Attach the input listeners and start the render timer.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no `document` to listen on.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.listeners.is_none() {
            let mut listeners = self.build_listeners()?;
            listeners.listen();
            self.listeners = Some(listeners);
        }
        if self.timer.is_none() {
            self.timer = Some(self.build_timer());
        }
        Ok(())
    }

    /// Stop the render timer and detach both listeners. No further mutation
    /// can come from the browser after this returns.
    pub fn stop(&mut self) {
        // Dropping the interval clears it.
        self.timer = None;
        if let Some(mut listeners) = self.listeners.take() {
            listeners.stop();
        }
    }

    /// Flip the input listeners between listening and idle.
    pub fn toggle_listeners(&mut self) -> ListenerStatus {
        match self.listeners.as_mut() {
            Some(listeners) => listeners.toggle(),
            None => ListenerStatus::Idle,
        }
    }

    #[must_use]
    pub fn listener_status(&self) -> ListenerStatus {
        self.listeners.as_ref().map_or(ListenerStatus::Idle, ListenerToggle::status)
    }

    // --- Delegated commands ---

    pub fn add_box(&self) -> Vec<Action> {
        self.core.borrow_mut().add_box()
    }

    pub fn delete_selected(&self) -> Vec<Action> {
        self.core.borrow_mut().delete_selected()
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn error_msg(&self) -> String {
        self.core.borrow().error_msg().to_owned()
    }

    #[must_use]
    pub fn box_count(&self) -> usize {
        self.core.borrow().doc.len()
    }

    // --- Wiring ---

    /// Each tick re-reads the element size before drawing, so a resized
    /// canvas re-fences the boxes on the next frame.
    fn build_timer(&self) -> Interval {
        let core = Rc::clone(&self.core);
        let canvas = self.canvas.clone();
        let ctx = self.ctx.clone();
        let tick_ms = core.borrow().config.tick_ms;
        Interval::new(tick_ms, move || {
            let mut core = core.borrow_mut();
            let resized = core.set_canvas_size(dom::dimension(canvas.width()), dom::dimension(canvas.height()));
            log_actions(&resized);
            if let Err(err) = core.tick(&ctx) {
                log::warn!("render tick failed: {err:?}");
            }
        })
    }

    fn build_listeners(&self) -> Result<ListenerToggle<DomSubscription>, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document to attach listeners to"))?;

        let core = Rc::clone(&self.core);
        let keyboard = DomSubscription::new(document.clone().into(), "keydown", move |event: Event| {
            let Some(ev) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let actions = core.borrow_mut().on_key_down(&Key(ev.key()));
            log_actions(&actions);
        });

        let core = Rc::clone(&self.core);
        let canvas = self.canvas.clone();
        let pointer = DomSubscription::new(document.into(), "mousedown", move |event: Event| {
            let Some(ev) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let offset = dom::canvas_offset(&canvas);
            let actions = core.borrow_mut().on_pointer_down(Point::new(ev.page_x(), ev.page_y()), offset);
            log_actions(&actions);
        });

        Ok(ListenerToggle::new(keyboard, pointer))
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
    }
}

pub(crate) fn log_actions(actions: &[Action]) {
    for action in actions {
        log::debug!("{action:?}");
    }
}
