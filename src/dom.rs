//! Browser glue: DOM event subscriptions and canvas offset measurement.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, HtmlCanvasElement, HtmlElement};

use crate::coords::{CanvasOffset, parse_css_px};
use crate::listener::Subscription;

/// One DOM event handler that can be attached and detached repeatedly.
///
/// The closure is owned here for the subscription's whole lifetime, so the
/// same function reference is used for both registration calls.
pub struct DomSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    attached: bool,
}

impl DomSubscription {
    pub fn new(target: EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Self {
        Self {
            target,
            event,
            callback: Closure::new(handler),
            attached: false,
        }
    }
}

impl Subscription for DomSubscription {
    fn attach(&mut self) {
        if self.attached {
            return;
        }
        match self
            .target
            .add_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => self.attached = true,
            Err(err) => log::warn!("failed to attach {} listener: {err:?}", self.event),
        }
    }

    fn detach(&mut self) {
        if !self.attached {
            return;
        }
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach {} listener: {err:?}", self.event);
        }
        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Drop for DomSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Measure where the canvas content box sits on the page: the summed
/// `offsetLeft`/`offsetTop` of the element and its offset parents, plus the
/// computed left/top padding and border widths.
#[must_use]
pub fn canvas_offset(canvas: &HtmlCanvasElement) -> CanvasOffset {
    let mut offset = CanvasOffset::default();

    let mut element: Option<HtmlElement> = Some(canvas.clone().into());
    while let Some(el) = element {
        offset.offset_left += el.offset_left();
        offset.offset_top += el.offset_top();
        element = el.offset_parent().and_then(|p| p.dyn_ref::<HtmlElement>().cloned());
    }

    let style = web_sys::window().and_then(|w| w.get_computed_style(canvas).unwrap_or(None));
    if let Some(style) = style {
        let px = |name: &str| style.get_property_value(name).map_or(0, |v| parse_css_px(&v));
        offset.padding_left = px("padding-left");
        offset.padding_top = px("padding-top");
        offset.border_left = px("border-left-width");
        offset.border_top = px("border-top-width");
    }

    offset
}

/// Canvas element dimensions arrive as `u32`; boxes use `i32`.
#[must_use]
pub fn dimension(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
