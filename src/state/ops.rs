//! In-flight request tracking.
//!
//! Every backend operation kind gets a monotonically increasing
//! sequence number. A completion is only applied when its sequence
//! number is the latest issued for that kind ("last request wins"),
//! which keeps the UI consistent when the same operation is triggered
//! again while a previous request is still in flight, and resolves the
//! stale-save-vs-newer-load race: the superseded completion is dropped
//! wholesale.

use tokio::task::JoinHandle;

/// The kinds of backend operation the orchestrator can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Run,
    Format,
    Lint,
    Save,
    Load,
    List,
}

impl OpKind {
    pub const COUNT: usize = 6;

    fn index(self) -> usize {
        match self {
            OpKind::Run => 0,
            OpKind::Format => 1,
            OpKind::Lint => 2,
            OpKind::Save => 3,
            OpKind::Load => 4,
            OpKind::List => 5,
        }
    }

    /// Short label for the status line.
    pub fn label(self) -> &'static str {
        match self {
            OpKind::Run => "run",
            OpKind::Format => "format",
            OpKind::Lint => "lint",
            OpKind::Save => "save",
            OpKind::Load => "load",
            OpKind::List => "list",
        }
    }
}

/// Per-kind sequence numbers, busy flags, and task handles.
pub struct OpTracker {
    seqs: [u64; OpKind::COUNT],
    inflight: [Option<u64>; OpKind::COUNT],
    handles: [Option<JoinHandle<()>>; OpKind::COUNT],
}

impl Default for OpTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl OpTracker {
    pub fn new() -> Self {
        Self {
            seqs: [0; OpKind::COUNT],
            inflight: [None; OpKind::COUNT],
            handles: std::array::from_fn(|_| None),
        }
    }

    /// Issue a new request of `kind`: supersede (and abort) any
    /// in-flight request of the same kind and return the new sequence
    /// number.
    pub fn begin(&mut self, kind: OpKind) -> u64 {
        let i = kind.index();
        if let Some(handle) = self.handles[i].take() {
            handle.abort();
            tracing::debug!("Aborted superseded {} request", kind.label());
        }
        self.seqs[i] += 1;
        self.inflight[i] = Some(self.seqs[i]);
        self.seqs[i]
    }

    /// Attach the task handle for the most recently issued request.
    pub fn attach(&mut self, kind: OpKind, handle: JoinHandle<()>) {
        self.handles[kind.index()] = Some(handle);
    }

    /// Record a completion. Returns `true` when `seq` is the latest
    /// issued for `kind` (the completion should be applied, and the
    /// kind returns to ready); `false` when the completion was
    /// superseded and must be discarded.
    pub fn finish(&mut self, kind: OpKind, seq: u64) -> bool {
        let i = kind.index();
        if seq != self.seqs[i] {
            return false;
        }
        self.inflight[i] = None;
        self.handles[i] = None;
        true
    }

    /// Whether a request of `kind` is currently in flight.
    pub fn is_busy(&self, kind: OpKind) -> bool {
        self.inflight[kind.index()].is_some()
    }

    /// Whether any request is in flight (drives the global spinner).
    pub fn any_busy(&self) -> bool {
        self.inflight.iter().any(Option::is_some)
    }

    /// Kinds currently in flight, for the status line.
    pub fn busy_kinds(&self) -> Vec<OpKind> {
        [
            OpKind::Run,
            OpKind::Format,
            OpKind::Lint,
            OpKind::Save,
            OpKind::Load,
            OpKind::List,
        ]
        .into_iter()
        .filter(|kind| self.is_busy(*kind))
        .collect()
    }

    /// Abort everything still in flight (shutdown path).
    pub fn abort_all(&mut self) {
        for handle in self.handles.iter_mut() {
            if let Some(handle) = handle.take() {
                handle.abort();
            }
        }
    }
}
