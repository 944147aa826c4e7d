//! Interactive box canvas for the browser.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It renders
//! fixed-size squares on a bounded canvas. The user adds boxes, selects one
//! by clicking, moves it with the arrow or WASD keys, and deletes it. All
//! state lives in a browser-free [`engine::EngineCore`]. The
//! [`engine::Engine`] wrapper owns the canvas element, the 20 ms render
//! timer, and the DOM listeners. The host page talks to [`app::BoxApp`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | `wasm-bindgen` controls exposed to the host page |
//! | [`engine`] | Browser engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Box types and the ordered registry |
//! | [`zindex`] | Monotonic and random-probe z-index policies |
//! | [`hit`] | Point-in-box hit-testing |
//! | [`input`] | Key mapping, directions, UI state |
//! | [`listener`] | Listener subscription handles and on/off state machine |
//! | [`render`] | Frame drawing against a [`render::Surface`] |
//! | [`dom`] | DOM event subscriptions and canvas offset measurement |
//! | [`coords`] | Points, the fence, page-to-canvas translation |
//! | [`config`] | Session configuration |
//! | [`consts`] | Shared defaults |

pub mod app;
pub mod config;
pub mod consts;
pub mod coords;
pub mod doc;
pub mod dom;
pub mod engine;
pub mod hit;
pub mod input;
pub mod listener;
pub mod render;
pub mod zindex;
