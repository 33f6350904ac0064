//! Non-blocking confirmation prompts.
//!
//! A caller asks a question and awaits the answer on a oneshot channel while
//! the page keeps running; the dialog component resolves it. A prompt that is
//! replaced or dropped without an answer reads as "declined".

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use futures::channel::oneshot;

#[derive(Debug)]
struct PendingConfirm {
    message: String,
    reply: oneshot::Sender<bool>,
}

/// At most one open confirmation prompt.
#[derive(Debug, Default)]
pub struct ConfirmState {
    pending: Option<PendingConfirm>,
}

impl ConfirmState {
    /// Open a prompt and return the channel its answer will arrive on.
    pub fn request(&mut self, message: impl Into<String>) -> oneshot::Receiver<bool> {
        let (reply, answer) = oneshot::channel();
        // Replacing drops the previous sender, which its receiver sees as declined.
        self.pending = Some(PendingConfirm { message: message.into(), reply });
        answer
    }

    /// Answer the open prompt. Returns `false` if nothing was pending.
    pub fn resolve(&mut self, accepted: bool) -> bool {
        match self.pending.take() {
            Some(pending) => {
                let _ = pending.reply.send(accepted);
                true
            }
            None => false,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.message.as_str())
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }
}

/// Await an answer; a cancelled prompt counts as declined.
pub async fn answered(answer: oneshot::Receiver<bool>) -> bool {
    answer.await.unwrap_or(false)
}
