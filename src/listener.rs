//! Keyboard/pointer listener lifecycle.
//!
//! A [`Subscription`] is an explicit attach/detach handle for one DOM event
//! handler. [`ListenerToggle`] pairs the keyboard and pointer subscriptions
//! and drives them through a two-state machine:
//!
//! ```text
//!   Idle ──toggle──▶ Listening
//!     ▲                 │
//!     └─────toggle──────┘
//! ```
//!
//! Dropping the toggle detaches both handlers, so teardown never leaves a
//! handler registered.

#[cfg(test)]
#[path = "listener_test.rs"]
mod listener_test;

use std::fmt;

/// An event handler that can be registered and deregistered repeatedly.
///
/// Implementations must make `attach` a no-op while attached and `detach` a
/// no-op while detached.
pub trait Subscription {
    fn attach(&mut self);
    fn detach(&mut self);
    fn is_attached(&self) -> bool;
}

/// Whether input handlers are currently registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListenerStatus {
    Listening,
    #[default]
    Idle,
}

impl ListenerStatus {
    /// Label shown to the user.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Listening => "ON",
            Self::Idle => "OFF",
        }
    }
}

impl fmt::Display for ListenerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The keyboard + pointer handler pair and its state machine.
pub struct ListenerToggle<S: Subscription> {
    keyboard: S,
    pointer: S,
}

impl<S: Subscription> ListenerToggle<S> {
    /// Wrap two detached subscriptions.
    pub fn new(keyboard: S, pointer: S) -> Self {
        Self { keyboard, pointer }
    }

    /// [`ListenerStatus::Listening`] only while both handlers are attached.
    #[must_use]
    pub fn status(&self) -> ListenerStatus {
        if self.keyboard.is_attached() && self.pointer.is_attached() {
            ListenerStatus::Listening
        } else {
            ListenerStatus::Idle
        }
    }

    /// Flip between listening and idle. Returns the new status.
    pub fn toggle(&mut self) -> ListenerStatus {
        match self.status() {
            ListenerStatus::Idle => self.listen(),
            ListenerStatus::Listening => self.stop(),
        }
        let status = self.status();
        log::info!("input listeners {status}");
        status
    }

    /// Attach both handlers. Already-attached handlers are left alone.
    pub fn listen(&mut self) {
        self.keyboard.attach();
        self.pointer.attach();
        if self.status() == ListenerStatus::Idle {
            log::warn!("input listeners failed to attach");
        }
    }

    /// Detach both handlers. No-op when already idle.
    pub fn stop(&mut self) {
        self.keyboard.detach();
        self.pointer.detach();
    }

    #[cfg(test)]
    fn keyboard(&self) -> &S {
        &self.keyboard
    }

    #[cfg(test)]
    fn pointer(&self) -> &S {
        &self.pointer
    }
}

impl<S: Subscription> Drop for ListenerToggle<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
