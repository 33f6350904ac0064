//! Check-in modal visibility.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// The modal is open exactly when it has a form action to submit to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    action: Option<String>,
}

impl ModalState {
    pub fn open(&mut self, action: impl Into<String>) {
        self.action = Some(action.into());
    }

    pub fn close(&mut self) {
        self.action = None;
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.action.is_some()
    }
}
