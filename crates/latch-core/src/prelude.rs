pub use crate::action::Action;
pub use crate::config::{ControllerConfig, SnapshotPolicy, ToggleOptions};
pub use crate::controller::{Mode, ToggleController};
pub use crate::diagnostics::{ControlNames, ModeWarning, WarningLog};
pub use crate::error::ControlError;
pub use crate::reducer::{Reducer, ToggleReducer};
pub use crate::state::ControllerState;
pub use crate::store::{ExternalStore, store};
