//! Single-slot toast notifications.
//!
//! At most one toast is visible at any instant; a new one evicts the
//! previous. Expiry is driven by the event-loop tick rather than by
//! per-toast timers, so the state stays a plain value.

use std::time::{Duration, Instant};

/// How long a toast stays fully visible.
pub const TOAST_VISIBLE: Duration = Duration::from_secs(3);
/// Exit transition: the toast lingers dimmed before disappearing.
pub const TOAST_LINGER: Duration = Duration::from_millis(500);

/// Severity of a toast, mapped to icon and color when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Error => "✖",
            Severity::Warning => "▲",
            Severity::Info => "ℹ",
        }
    }
}

/// A single transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
}

/// Where a toast is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Leaving,
}

/// The one slot toasts live in.
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, evicting whatever was there.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        tracing::debug!("toast [{:?}]: {}", severity, message);
        self.current = Some(Toast {
            message,
            severity,
            created_at: Instant::now(),
        });
    }

    /// Drop the toast once its lifetime (visible + linger) has passed.
    /// Called from the event-loop tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = &self.current {
            if now.duration_since(toast.created_at) >= TOAST_VISIBLE + TOAST_LINGER {
                self.current = None;
            }
        }
    }

    /// The toast to render, if any, with its phase.
    pub fn current(&self, now: Instant) -> Option<(&Toast, ToastPhase)> {
        let toast = self.current.as_ref()?;
        let age = now.duration_since(toast.created_at);
        if age < TOAST_VISIBLE {
            Some((toast, ToastPhase::Visible))
        } else if age < TOAST_VISIBLE + TOAST_LINGER {
            Some((toast, ToastPhase::Leaving))
        } else {
            None
        }
    }

    /// The message currently held, regardless of phase. Test helper
    /// and status-line convenience.
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|t| t.message.as_str())
    }

    pub fn severity(&self) -> Option<Severity> {
        self.current.as_ref().map(|t| t.severity)
    }
}
