use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ControllerState;

pub const TOGGLE: &str = "toggle";
pub const RESET: &str = "reset";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Action {
    Toggle,
    /// `initial_state` is the value captured when the controller was built.
    Reset { initial_state: ControllerState },
    /// Extension point for replacement reducers. `ToggleReducer` rejects it.
    Custom { kind: Cow<'static, str> },
}

impl Action {
    pub fn custom(kind: impl Into<Cow<'static, str>>) -> Self {
        Action::Custom { kind: kind.into() }
    }

    pub fn kind(&self) -> &str {
        match self {
            Action::Toggle => TOGGLE,
            Action::Reset { .. } => RESET,
            Action::Custom { kind } => kind,
        }
    }

    /// Map a routed event name onto an action. Unknown names are kept as
    /// `Custom` so the reducer gets to decide whether they are supported.
    pub fn from_kind(kind: &str, initial_state: ControllerState) -> Self {
        match kind {
            TOGGLE => Action::Toggle,
            RESET => Action::Reset { initial_state },
            other => Action::custom(other.to_owned()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}
