//! codebench - a terminal workbench for a remote Python execution
//! backend.
//!
//! The backend owns execution, formatting, linting, and file storage;
//! this crate is the client: an editor, the result panels, a file
//! browser, and the request orchestration that keeps them consistent
//! while requests are in flight.

pub mod app;
pub mod backend;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod state;
pub mod storage;
pub mod ui;
pub mod widgets;
