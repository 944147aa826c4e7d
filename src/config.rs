//! Session configuration.
//!
//! Every field has a default, so a host may pass a partial JSON object (or
//! nothing at all). In the browser the canvas dimensions are overwritten
//! from the element before validation.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_COLOR, DEFAULT_MOVE_SPEED, DEFAULT_SIDE, DEFAULT_TICK_MS,
    HIGHLIGHT_COLOR, LABEL_COLOR,
};
use crate::coords::Fence;
use crate::doc::BoxColor;
use crate::hit::HitMode;
use crate::zindex::ZIndexPolicy;

/// Error returned by [`Config::from_json`] and [`Config::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not a valid config object.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("box side must be positive, got {0}")]
    NonPositiveSide(i32),
    #[error("move speed must be positive, got {0}")]
    NonPositiveMoveSpeed(i32),
    #[error("render tick must be at least 1 ms")]
    ZeroTick,
    /// The box would not fit inside the canvas on at least one axis.
    #[error("box side {side} does not fit a {width}x{height} canvas")]
    SideExceedsCanvas { side: i32, width: i32, height: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: i32,
    pub canvas_height: i32,
    /// Side length shared by every box.
    pub side: i32,
    /// Pixels moved per key press.
    pub move_speed: i32,
    /// Redraw period in milliseconds.
    pub tick_ms: u32,
    pub z_policy: ZIndexPolicy,
    pub hit_mode: HitMode,
    /// Re-sort the collection by z-index before each redraw.
    pub sort_each_tick: bool,
    pub default_color: String,
    pub highlight_color: String,
    pub label_color: String,
    /// Seed for the random-probe generator. The browser picks one when unset.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            side: DEFAULT_SIDE,
            move_speed: DEFAULT_MOVE_SPEED,
            tick_ms: DEFAULT_TICK_MS,
            z_policy: ZIndexPolicy::default(),
            hit_mode: HitMode::default(),
            sort_each_tick: true,
            default_color: DEFAULT_COLOR.to_owned(),
            highlight_color: HIGHLIGHT_COLOR.to_owned(),
            label_color: LABEL_COLOR.to_owned(),
            seed: None,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON object without validating it. Run
    /// [`Config::validate`] once the canvas dimensions are known.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Check the numeric fields for a usable session.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side <= 0 {
            return Err(ConfigError::NonPositiveSide(self.side));
        }
        if self.move_speed <= 0 {
            return Err(ConfigError::NonPositiveMoveSpeed(self.move_speed));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.side > self.canvas_width || self.side > self.canvas_height {
            return Err(ConfigError::SideExceedsCanvas {
                side: self.side,
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn fence(&self) -> Fence {
        Fence::new(self.canvas_width, self.canvas_height)
    }

    /// CSS color string for a box color.
    #[must_use]
    pub fn css_color(&self, color: BoxColor) -> &str {
        match color {
            BoxColor::Default => &self.default_color,
            BoxColor::Highlighted => &self.highlight_color,
        }
    }
}
