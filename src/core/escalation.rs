//! Panic and fatal escalation
//!
//! `dpanic`, `panic` and `fatal` disrupt control flow on purpose. How that
//! disruption is carried out is decided by a [`TerminationPolicy`]:
//!
//! - [`TerminationPolicy::Process`] unwinds with `panic!` or ends the process
//!   with exit status 1. Both affect the whole program, so tests exercising
//!   them belong in a subprocess or behind `#[should_panic]`.
//! - [`TerminationPolicy::Propagate`] hands the escalation back as an
//!   `Err(Escalation)` so a harness can observe it and carry on.

use serde::{Deserialize, Serialize};

/// Exit status used for fatal escalation
pub const FATAL_EXIT_CODE: i32 = 1;

/// A requested escalation that was not executed in-process
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Escalation {
    #[error("panic: {message}")]
    Panic { message: String },

    #[error("fatal: {message}")]
    Fatal { message: String },
}

impl Escalation {
    pub fn panic(message: impl Into<String>) -> Self {
        Escalation::Panic {
            message: message.into(),
        }
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Escalation::Fatal {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Escalation::Panic { message } | Escalation::Fatal { message } => message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TerminationPolicy {
    /// Panic on panic escalation, `exit(1)` on fatal escalation
    #[default]
    Process,
    /// Return the escalation to the caller instead
    Propagate,
}

impl TerminationPolicy {
    /// Carry out `escalation` according to the policy.
    ///
    /// Under [`TerminationPolicy::Process`] this never returns.
    pub fn escalate(self, escalation: Escalation) -> Result<(), Escalation> {
        match self {
            TerminationPolicy::Propagate => Err(escalation),
            TerminationPolicy::Process => match escalation {
                Escalation::Panic { message } => std::panic::panic_any(message),
                Escalation::Fatal { .. } => std::process::exit(FATAL_EXIT_CODE),
            },
        }
    }
}
