//! One-shot deadline for the copy feedback flag
//!
//! Owned by a single playground. Arming replaces the previous deadline,
//! so a stale expiry can never clear feedback set by a later copy.

use std::time::Duration;
use tokio::time::Instant;

/// Default time the "Copied" label stays up
pub const DEFAULT_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct FeedbackTimer {
    duration: Duration,
    deadline: Option<Instant>,
}

impl FeedbackTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    /// Schedule expiry `duration` from now, superseding any pending deadline
    pub fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.duration);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[cfg(test)]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Resolve once the current deadline passes; never resolves when unarmed
    ///
    /// Cancel-safe: dropping the future leaves the deadline untouched.
    pub async fn fired(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}

impl Default for FeedbackTimer {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_DURATION)
    }
}
