//! Transient alert banners.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request outcome the user should hear about lands here as a success
//! or error alert. The banner component renders the queue and schedules each
//! alert's dismissal.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use crate::config::MAX_ALERTS;

/// Whether an alert reports success or failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertStatus {
    Success,
    Error,
}

impl AlertStatus {
    /// CSS modifier for the banner.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "alert--success",
            Self::Error => "alert--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
    pub status: AlertStatus,
}

/// Queue of visible alerts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct AlertState {
    pub items: Vec<Alert>,
    next_id: u64,
}

impl AlertState {
    /// Append an alert and return its id. The oldest alert is dropped once
    /// the queue is full.
    pub fn push(&mut self, message: impl Into<String>, status: AlertStatus) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Alert { id, message: message.into(), status });
        if self.items.len() > MAX_ALERTS {
            let overflow = self.items.len() - MAX_ALERTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|a| a.id != id);
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&Alert> {
        self.items.last()
    }
}
