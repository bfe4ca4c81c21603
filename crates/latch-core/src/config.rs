use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Action, ControlNames, ControllerState, DiagnosticsSink, ModeWarning, Reducer, ToggleReducer,
};

pub type OnChange = Rc<dyn Fn(&ControllerState, &Action)>;

/// When the "was controlled at first observation" snapshot may be retaken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SnapshotPolicy {
    /// Captured once, kept for the controller's lifetime.
    #[default]
    Lifetime,
    /// Cleared by `ToggleController::begin_session`.
    PerSession,
}

#[derive(Clone)]
pub struct ControllerConfig {
    pub initial_on: bool,
    pub reducer: Rc<dyn Reducer>,
    pub on_change: Option<OnChange>,
    pub external_on: Option<bool>,
    pub read_only: bool,
    pub names: ControlNames,
    pub diagnostics: Option<DiagnosticsSink>,
    pub snapshot_policy: SnapshotPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            initial_on: false,
            reducer: Rc::new(ToggleReducer),
            on_change: None,
            external_on: None,
            read_only: false,
            names: ControlNames::default(),
            diagnostics: None,
            snapshot_policy: SnapshotPolicy::Lifetime,
        }
    }
}

impl fmt::Debug for ControllerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerConfig")
            .field("initial_on", &self.initial_on)
            .field("on_change", &self.on_change.is_some())
            .field("external_on", &self.external_on)
            .field("read_only", &self.read_only)
            .field("names", &self.names)
            .field("diagnostics", &self.diagnostics.is_some())
            .field("snapshot_policy", &self.snapshot_policy)
            .finish()
    }
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_on(mut self, on: bool) -> Self {
        self.initial_on = on;
        self
    }
    pub fn reducer(mut self, reducer: impl Reducer) -> Self {
        self.reducer = Rc::new(reducer);
        self
    }
    pub fn on_change(mut self, f: impl Fn(&ControllerState, &Action) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }
    pub fn external_on(mut self, on: Option<bool>) -> Self {
        self.external_on = on;
        self
    }
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
    pub fn names(mut self, names: ControlNames) -> Self {
        self.names = names;
        self
    }
    pub fn diagnostics(mut self, sink: impl Fn(&ModeWarning) + 'static) -> Self {
        self.diagnostics = Some(Rc::new(sink));
        self
    }
    pub fn diagnostics_sink(mut self, sink: DiagnosticsSink) -> Self {
        self.diagnostics = Some(sink);
        self
    }
    pub fn snapshot_policy(mut self, policy: SnapshotPolicy) -> Self {
        self.snapshot_policy = policy;
        self
    }
}

/// Data-only subset of `ControllerConfig`; callbacks are attached afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ToggleOptions {
    pub initial_on: bool,
    pub external_on: Option<bool>,
    pub read_only: bool,
    pub snapshot_policy: SnapshotPolicy,
}

impl ToggleOptions {
    pub fn into_config(self) -> ControllerConfig {
        ControllerConfig::new()
            .initial_on(self.initial_on)
            .external_on(self.external_on)
            .read_only(self.read_only)
            .snapshot_policy(self.snapshot_policy)
    }
}

impl From<ToggleOptions> for ControllerConfig {
    fn from(opts: ToggleOptions) -> Self {
        opts.into_config()
    }
}
