use std::cell::Cell;

use crate::diagnostics::emit;
use crate::{
    Action, ControlError, ControlNames, ControllerConfig, ControllerState, ModeWarning,
    SnapshotPolicy,
};

/// Derived from the external value on every call, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Controlled,
    Uncontrolled,
}

impl Mode {
    pub fn of(external_on: Option<bool>) -> Self {
        if external_on.is_some() {
            Mode::Controlled
        } else {
            Mode::Uncontrolled
        }
    }

    pub fn is_controlled(self) -> bool {
        self == Mode::Controlled
    }
}

/// A toggle that is either self-managed or driven by the caller.
///
/// Not reentrant: `on_change` and diagnostics sinks must not call back into
/// the same controller. One controller per widget, owned by whoever routes
/// its events.
pub struct ToggleController {
    config: ControllerConfig,
    initial_state: ControllerState,
    state: ControllerState,
    /// Controlled-ness at the first observation. Only `begin_session` under
    /// `SnapshotPolicy::PerSession` may clear it.
    was_controlled: Cell<Option<bool>>,
    /// Mode the diagnostics last ran for; warnings fire once per transition.
    checked: Cell<Option<Mode>>,
}

impl ToggleController {
    pub fn new(config: ControllerConfig) -> Self {
        let initial_state = ControllerState::new(config.initial_on);
        // The construction config is the first observation.
        let external_on = config.external_on;
        log::trace!("{}: created with {:?}", config.names.component, initial_state);
        Self {
            config,
            initial_state,
            state: initial_state,
            was_controlled: Cell::new(Some(external_on.is_some())),
            checked: Cell::new(None),
        }
    }

    /// Mode for the external value as currently supplied.
    pub fn mode(&self) -> Mode {
        Mode::of(self.config.external_on)
    }

    pub fn is_controlled(&self) -> bool {
        self.mode().is_controlled()
    }

    /// `None` only between `begin_session` (under `SnapshotPolicy::PerSession`)
    /// and the next observation.
    pub fn was_controlled(&self) -> Option<bool> {
        self.was_controlled.get()
    }

    pub fn initial_state(&self) -> ControllerState {
        self.initial_state
    }

    /// The self-managed state. Inert while controlled.
    pub fn internal_state(&self) -> ControllerState {
        self.state
    }

    pub fn names(&self) -> &ControlNames {
        &self.config.names
    }

    /// The externally visible value: the supplied external value when
    /// controlled, the internal state otherwise.
    pub fn current_value(&self) -> bool {
        let mode = self.observe();
        self.check_mode(mode);
        self.visible(mode)
    }

    /// Supply the controlled value for this observation cycle. `None` means
    /// the caller is not controlling the value.
    pub fn set_external_on(&mut self, on: Option<bool>) {
        self.config.external_on = on;
        let mode = self.observe();
        self.check_mode(mode);
    }

    pub fn toggle(&mut self) -> Result<ControllerState, ControlError> {
        self.dispatch(Action::Toggle)
    }

    pub fn reset(&mut self) -> Result<ControllerState, ControlError> {
        self.dispatch(Action::Reset {
            initial_state: self.initial_state,
        })
    }

    /// Dispatch by event name (`"toggle"`, `"reset"`, or anything a custom
    /// reducer understands).
    pub fn dispatch_kind(&mut self, kind: &str) -> Result<ControllerState, ControlError> {
        self.dispatch(Action::from_kind(kind, self.initial_state))
    }

    /// Apply `action` and return the state `on_change` was given.
    ///
    /// Internal state moves only when uncontrolled. `on_change` runs in both
    /// modes with the reducer applied to the visible value. A rejected action
    /// changes nothing and notifies nobody.
    pub fn dispatch(&mut self, action: Action) -> Result<ControllerState, ControlError> {
        let mode = self.mode();
        let before = ControllerState::new(self.visible(mode));
        let next = self.config.reducer.reduce(&before, &action)?;
        self.observe();

        if !mode.is_controlled() {
            self.state = next;
        }
        log::debug!(
            "{}: {} ({:?}) {} -> {}",
            self.config.names.component,
            action,
            mode,
            before.on,
            next.on
        );

        if let Some(on_change) = &self.config.on_change {
            on_change(&next, &action);
        }
        self.check_mode(mode);
        Ok(next)
    }

    /// Start a new logical session on the same instance. Under
    /// `SnapshotPolicy::Lifetime` this changes nothing.
    pub fn begin_session(&mut self) {
        match self.config.snapshot_policy {
            SnapshotPolicy::Lifetime => {}
            SnapshotPolicy::PerSession => {
                self.was_controlled.set(None);
                self.checked.set(None);
            }
        }
    }

    fn visible(&self, mode: Mode) -> bool {
        match (mode, self.config.external_on) {
            (Mode::Controlled, Some(on)) => on,
            _ => self.state.on,
        }
    }

    fn observe(&self) -> Mode {
        let mode = self.mode();
        if self.was_controlled.get().is_none() {
            self.was_controlled.set(Some(mode.is_controlled()));
        }
        mode
    }

    fn check_mode(&self, mode: Mode) {
        if self.checked.get() == Some(mode) {
            return;
        }
        self.checked.set(Some(mode));

        let is_controlled = mode.is_controlled();
        let was_controlled = self.was_controlled.get().unwrap_or(is_controlled);
        let names = &self.config.names;
        let sink = self.config.diagnostics.as_ref();

        if is_controlled && !was_controlled {
            emit(
                sink,
                ModeWarning::UncontrolledToControlled {
                    names: names.clone(),
                },
            );
        }
        if !is_controlled && was_controlled {
            emit(
                sink,
                ModeWarning::ControlledToUncontrolled {
                    names: names.clone(),
                },
            );
        }
        if is_controlled && self.config.on_change.is_none() && !self.config.read_only {
            emit(
                sink,
                ModeWarning::ReadOnlyWithoutOnChange {
                    names: names.clone(),
                },
            );
        }
    }
}

impl std::fmt::Debug for ToggleController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleController")
            .field("mode", &self.mode())
            .field("state", &self.state)
            .field("initial_state", &self.initial_state)
            .field("was_controlled", &self.was_controlled.get())
            .field("config", &self.config)
            .finish()
    }
}
