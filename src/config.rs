//! Per-modal configuration.

use thiserror::Error;

use crate::constants::MIN_SIZE;
use crate::geometry::PanelGeometry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum size must be positive, got {0}")]
    NonPositiveMinSize(i32),
    #[error("initial {axis} {value} is below the minimum size {min_size}")]
    BelowMinimum {
        axis: &'static str,
        value: i32,
        min_size: i32,
    },
}

/// Size limits and mount-time geometry for a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalConfig {
    min_size: i32,
    initial: PanelGeometry,
}

impl ModalConfig {
    /// Config whose modals mount at the viewport origin with the given size.
    pub fn new(min_size: i32, width: i32, height: i32) -> Result<Self, ConfigError> {
        Self::with_initial(min_size, PanelGeometry::new(0, 0, width, height))
    }

    pub fn with_initial(min_size: i32, initial: PanelGeometry) -> Result<Self, ConfigError> {
        if min_size <= 0 {
            return Err(ConfigError::NonPositiveMinSize(min_size));
        }
        for (axis, value) in [("width", initial.width), ("height", initial.height)] {
            if value < min_size {
                return Err(ConfigError::BelowMinimum {
                    axis,
                    value,
                    min_size,
                });
            }
        }
        Ok(Self { min_size, initial })
    }

    pub const fn min_size(&self) -> i32 {
        self.min_size
    }

    pub const fn initial(&self) -> PanelGeometry {
        self.initial
    }

    /// Same limits, mounting at `(left, top)` instead.
    pub const fn at(mut self, left: i32, top: i32) -> Self {
        self.initial.left = left;
        self.initial.top = top;
        self
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_SIZE,
            initial: PanelGeometry::default(),
        }
    }
}
