//! # Dual-mode toggle controller
//!
//! Latch owns a single piece of boolean state that can either be managed by
//! the controller itself (uncontrolled) or dictated by the caller on every
//! observation (controlled). The pieces:
//!
//! - `ControllerState` / `Action` — the value and the two things you can do to it.
//! - `Reducer` — pure `(state, action) -> state`, replaceable.
//! - `ToggleController` — routes actions, notifies `on_change`, and reports
//!   mode inconsistencies through a diagnostics sink.
//!
//! ## Uncontrolled
//!
//! ```rust
//! use latch_core::*;
//!
//! let mut toggle = ToggleController::new(ControllerConfig::new());
//! toggle.toggle().unwrap();
//! assert!(toggle.current_value());
//! toggle.reset().unwrap();
//! assert!(!toggle.current_value());
//! ```
//!
//! ## Controlled
//!
//! The caller keeps the value in its own store and feeds it back in before
//! each observation. The controller never writes its own state in this mode;
//! it only tells `on_change` what the next state would be.
//!
//! ```rust
//! use latch_core::*;
//!
//! let store = ExternalStore::new(false);
//! let mut toggle = ToggleController::new(
//!     ControllerConfig::new()
//!         .external_on(Some(store.get()))
//!         .on_change({
//!             let store = store.clone();
//!             move |next: &ControllerState, _: &Action| store.set(next.on)
//!         }),
//! );
//!
//! toggle.toggle().unwrap();
//! assert!(store.get());
//!
//! toggle.set_external_on(Some(store.get()));
//! assert!(toggle.current_value());
//! ```
//!
//! ## Diagnostics
//!
//! Switching between controlled and uncontrolled during the lifetime of one
//! controller is a usage error. It is reported as a `ModeWarning`, never as an
//! `Err`; dispatch carries on. Without a configured sink the warnings go to
//! `log::warn!`.

pub mod action;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod prelude;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::*;
pub use config::*;
pub use controller::*;
pub use diagnostics::*;
pub use error::*;
pub use reducer::*;
pub use state::*;
pub use store::*;
