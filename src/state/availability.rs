//! Per-field availability state for registration inputs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The register page keeps one `RwSignal<Availability>` per uniqueness-checked
//! field (username, email). Typing schedules a debounced probe through
//! `util::debounce`; the probe's result lands here only when its generation
//! ticket is still current, so a stale answer can never overwrite a newer
//! one.

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_test;

use crate::net::error::ApiError;

/// Quiet period before a typed value is probed, in milliseconds.
pub const AVAILABILITY_QUIET_MS: u64 = 500;

/// Availability of one uniqueness-checked field value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Availability {
    /// Nothing probed yet, or the value changed into an unprobeable shape.
    #[default]
    Unknown,
    /// A probe for the current value is in flight (or waiting out the quiet
    /// period). Blocks submission.
    Checking,
    /// The backend confirmed the current value is free.
    Available,
    /// The backend reported the current value is taken. Blocks submission.
    Taken,
    /// The probe failed (network, server). Blocks submission until a retry
    /// succeeds.
    Failed,
}

impl Availability {
    /// Map a finished probe onto the field state.
    #[must_use]
    pub fn from_result(result: &Result<bool, ApiError>) -> Self {
        match result {
            Ok(true) => Self::Available,
            Ok(false) => Self::Taken,
            Err(_) => Self::Failed,
        }
    }

    /// Only a confirmed-free value lets the form submit. In-flight and
    /// failed probes block.
    #[must_use]
    pub fn allows_submit(self) -> bool {
        matches!(self, Self::Available)
    }
}
