//! Workout stopwatch state machine.
//!
//! DESIGN
//! ======
//! Wall-clock time is passed in by the caller (milliseconds since the epoch)
//! so transitions stay deterministic under test. Elapsed time is derived as
//! `now - anchor`, with the anchor moved back by the accumulated elapsed time
//! on every resume, so pausing never resets the count.
//!
//! ```text
//! Idle --start--> Running --pause--> Paused --start--> Running
//!                    |                  |
//!                    +-----finish-------+--> Finished
//! ```

#[cfg(test)]
#[path = "stopwatch_test.rs"]
mod stopwatch_test;

use std::fmt;

use crate::error::ClientError;
use crate::util::duration::format_hms;

/// Lifecycle of one workout session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StopwatchStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

impl fmt::Display for StopwatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Finished => "finished",
        })
    }
}

/// Elapsed-time tracker for a single page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stopwatch {
    status: StopwatchStatus,
    elapsed_ms: u64,
    anchor_ms: u64,
}

impl Stopwatch {
    pub fn status(&self) -> StopwatchStatus {
        self.status
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Formatted elapsed time as shown on the display.
    pub fn display(&self) -> String {
        format_hms(self.elapsed_ms)
    }

    /// Whether leaving the page should be confirmed first.
    ///
    /// Armed only while running; a paused workout can be left without a prompt.
    pub fn unsaved_work(&self) -> bool {
        self.status == StopwatchStatus::Running
    }

    /// Whether the finish action is currently offered.
    pub fn can_finish(&self) -> bool {
        matches!(self.status, StopwatchStatus::Running | StopwatchStatus::Paused)
    }

    /// Label for the start control: "resume" once a session has been paused.
    pub fn start_label<'a>(&self, start: &'a str, resume: &'a str) -> &'a str {
        if self.status == StopwatchStatus::Paused { resume } else { start }
    }

    /// Start from idle, or resume from paused.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` when already running or finished.
    pub fn start(&mut self, now_ms: u64) -> Result<(), ClientError> {
        match self.status {
            StopwatchStatus::Idle | StopwatchStatus::Paused => {
                self.anchor_ms = now_ms.saturating_sub(self.elapsed_ms);
                self.status = StopwatchStatus::Running;
                Ok(())
            }
            from => Err(ClientError::InvalidTransition { action: "start", from }),
        }
    }

    /// Recompute elapsed time while running. Returns whether the value changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.status != StopwatchStatus::Running {
            return false;
        }
        let measured = now_ms.saturating_sub(self.anchor_ms);
        if measured <= self.elapsed_ms {
            return false;
        }
        self.elapsed_ms = measured;
        true
    }

    /// Freeze elapsed time at its last ticked value.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` unless running.
    pub fn pause(&mut self) -> Result<(), ClientError> {
        match self.status {
            StopwatchStatus::Running => {
                self.status = StopwatchStatus::Paused;
                Ok(())
            }
            from => Err(ClientError::InvalidTransition { action: "pause", from }),
        }
    }

    /// End the session once the user has answered the finish prompt.
    ///
    /// Returns the displayed duration to record.
    ///
    /// # Errors
    ///
    /// `UserDeclined` (state untouched) when `confirmed` is false, or
    /// `InvalidTransition` unless running or paused.
    pub fn finish(&mut self, confirmed: bool) -> Result<String, ClientError> {
        if !self.can_finish() {
            return Err(ClientError::InvalidTransition { action: "finish", from: self.status });
        }
        if !confirmed {
            return Err(ClientError::UserDeclined);
        }
        self.status = StopwatchStatus::Finished;
        Ok(self.display())
    }
}
