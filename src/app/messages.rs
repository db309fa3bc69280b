//! AppMessage enum for async completion events.
//!
//! Every backend request task reports back through one of these,
//! carrying the sequence number it was issued with so the handler can
//! discard superseded completions.

use crate::backend::{
    BackendError, FormatResponse, LintResponse, ListResponse, LoadResponse, RunResponse,
    SaveResponse,
};

/// Why a file listing was requested; decides where the result goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPurpose {
    /// Refresh the sidebar listing.
    Sidebar,
    /// Populate the open-file dialog.
    OpenDialog,
}

/// Messages received from spawned request tasks.
#[derive(Debug)]
pub enum AppMessage {
    /// A run request completed (either way).
    RunFinished {
        seq: u64,
        result: Result<RunResponse, BackendError>,
    },
    /// A format request completed.
    FormatFinished {
        seq: u64,
        result: Result<FormatResponse, BackendError>,
    },
    /// A lint request completed.
    LintFinished {
        seq: u64,
        result: Result<LintResponse, BackendError>,
    },
    /// A save request completed.
    SaveFinished {
        seq: u64,
        filename: String,
        result: Result<SaveResponse, BackendError>,
    },
    /// A load request completed.
    LoadFinished {
        seq: u64,
        filename: String,
        result: Result<LoadResponse, BackendError>,
    },
    /// A file-listing request completed.
    ListFinished {
        seq: u64,
        purpose: ListPurpose,
        result: Result<ListResponse, BackendError>,
    },
}
