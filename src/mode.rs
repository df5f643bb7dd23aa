//! Field mode selector.

use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which configuration the particles are chasing.
///
/// Owned by the UI; the stepper reads it once per frame. Switching is
/// instantaneous at the input level, the visible transition comes from the
/// smoothing lag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Disperse into the orbiting cloud.
    Scatter,
    /// Coalesce into the emblem sphere.
    #[default]
    Form,
}

impl Mode {
    /// Wire name, as accepted by [`Mode::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Mode::Scatter => "scatter",
            Mode::Form => "form",
        }
    }

    /// Button label shown for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Scatter => "Disperse",
            Mode::Form => "Coalesce",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Scatter => Mode::Form,
            Mode::Form => Mode::Scatter,
        }
    }

    #[inline]
    pub fn is_forming(self) -> bool {
        self == Mode::Form
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = FieldError;

    /// Parses exactly `scatter` or `form`; anything else is an error rather
    /// than a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scatter" => Ok(Mode::Scatter),
            "form" => Ok(Mode::Form),
            other => Err(FieldError::InvalidMode(other.to_string())),
        }
    }
}
