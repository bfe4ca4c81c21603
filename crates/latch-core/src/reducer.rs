use crate::{Action, ControlError, ControllerState};

/// Pure state transition. Implementations must not have side effects: the
/// controller may call `reduce` for notification purposes without storing
/// the result.
pub trait Reducer: 'static {
    fn reduce(
        &self,
        state: &ControllerState,
        action: &Action,
    ) -> Result<ControllerState, ControlError>;
}

impl<F> Reducer for F
where
    F: Fn(&ControllerState, &Action) -> Result<ControllerState, ControlError> + 'static,
{
    fn reduce(
        &self,
        state: &ControllerState,
        action: &Action,
    ) -> Result<ControllerState, ControlError> {
        self(state, action)
    }
}

/// Default reducer: `Toggle` flips, `Reset` restores verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToggleReducer;

impl Reducer for ToggleReducer {
    fn reduce(
        &self,
        state: &ControllerState,
        action: &Action,
    ) -> Result<ControllerState, ControlError> {
        match action {
            Action::Toggle => Ok(state.flipped()),
            Action::Reset { initial_state } => Ok(*initial_state),
            Action::Custom { kind } => Err(ControlError::unsupported(kind.to_string())),
        }
    }
}

/// Free-function form of `ToggleReducer`, handy when a custom reducer wants
/// to fall through to the default behaviour.
pub fn toggle_reducer(
    state: &ControllerState,
    action: &Action,
) -> Result<ControllerState, ControlError> {
    ToggleReducer.reduce(state, action)
}
