//! Application state, split by concern.
//!
//! - [`session`] - current file identity and dirty status
//! - [`output`] - the three result panels
//! - [`browser`] - file listing and open dialog
//! - [`toast`] - single-slot notifications
//! - [`ops`] - in-flight request tracking and sequencing

pub mod browser;
pub mod ops;
pub mod output;
pub mod session;
pub mod toast;

pub use browser::{FileBrowser, OpenDialog};
pub use ops::{OpKind, OpTracker};
pub use output::{OutputState, Panel};
pub use session::FileSession;
pub use toast::{Severity, ToastPhase, ToastSlot};
