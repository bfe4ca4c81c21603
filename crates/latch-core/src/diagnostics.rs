use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Names used when rendering warnings, so a wrapper component can report
/// itself and its own prop names rather than the controller's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlNames {
    pub component: String,
    pub control_prop: String,
    pub initial_prop: String,
    pub on_change_prop: String,
    pub read_only_prop: String,
}

impl Default for ControlNames {
    fn default() -> Self {
        Self {
            component: "useToggle".into(),
            control_prop: "on".into(),
            initial_prop: "initialOn".into(),
            on_change_prop: "onChange".into(),
            read_only_prop: "readOnly".into(),
        }
    }
}

impl ControlNames {
    pub fn component(mut self, name: impl Into<String>) -> Self {
        self.component = name.into();
        self
    }
    pub fn control_prop(mut self, name: impl Into<String>) -> Self {
        self.control_prop = name.into();
        self
    }
}

/// Non-fatal developer warning. Never interrupts a dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModeWarning {
    UncontrolledToControlled { names: ControlNames },
    ControlledToUncontrolled { names: ControlNames },
    /// Controlled, but nothing can ever change the value.
    ReadOnlyWithoutOnChange { names: ControlNames },
}

impl ModeWarning {
    pub fn names(&self) -> &ControlNames {
        match self {
            ModeWarning::UncontrolledToControlled { names }
            | ModeWarning::ControlledToUncontrolled { names }
            | ModeWarning::ReadOnlyWithoutOnChange { names } => names,
        }
    }

    pub fn is_mode_switch(&self) -> bool {
        !matches!(self, ModeWarning::ReadOnlyWithoutOnChange { .. })
    }
}

impl fmt::Display for ModeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = match self {
            ModeWarning::UncontrolledToControlled { .. } => ("uncontrolled", "controlled"),
            ModeWarning::ControlledToUncontrolled { .. } => ("controlled", "uncontrolled"),
            ModeWarning::ReadOnlyWithoutOnChange { names: n } => {
                return write!(
                    f,
                    "You provided an `{ctl}` prop to {comp} without an `{chg}` handler. \
                     This will render a read-only `{ctl}` value. If you want it to be mutable, \
                     use `{init}`. Otherwise, set either `{chg}` or `{ro}`.",
                    ctl = n.control_prop,
                    comp = n.component,
                    chg = n.on_change_prop,
                    init = n.initial_prop,
                    ro = n.read_only_prop,
                );
            }
        };
        let n = self.names();
        write!(
            f,
            "{comp} is changing from {from} to be {to}. Components should not switch from \
             uncontrolled to be controlled (or vice versa). Decide between using a controlled \
             or uncontrolled {comp} for the lifetime of the component. Check the `{ctl}` prop.",
            comp = n.component,
            ctl = n.control_prop,
        )
    }
}

pub type DiagnosticsSink = Rc<dyn Fn(&ModeWarning)>;

/// Capturing sink. Clones share the same list.
#[derive(Clone, Default)]
pub struct WarningLog(Rc<RefCell<Vec<ModeWarning>>>);

impl WarningLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sink(&self) -> DiagnosticsSink {
        let log = self.0.clone();
        Rc::new(move |w: &ModeWarning| log.borrow_mut().push(w.clone()))
    }

    pub fn warnings(&self) -> Vec<ModeWarning> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn mode_switches(&self) -> usize {
        self.0.borrow().iter().filter(|w| w.is_mode_switch()).count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub(crate) fn emit(sink: Option<&DiagnosticsSink>, warning: ModeWarning) {
    match sink {
        Some(sink) => sink(&warning),
        // No logger installed means the facade drops it, which is what we want.
        None => log::warn!("{warning}"),
    }
}
