#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The only value a controller persists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerState {
    pub on: bool,
}

impl ControllerState {
    pub const fn new(on: bool) -> Self {
        Self { on }
    }

    pub const fn flipped(self) -> Self {
        Self { on: !self.on }
    }
}

impl From<bool> for ControllerState {
    fn from(on: bool) -> Self {
        Self { on }
    }
}
