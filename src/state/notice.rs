//! User-visible notices replacing blocking `alert()` calls.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

/// Dismissible notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeState {
    /// Queue a notice and return its id. Blank text is ignored.
    pub fn push(&mut self, text: impl Into<String>) -> Option<u64> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        self.next_id += 1;
        self.notices.push(Notice { id: self.next_id, text });
        Some(self.next_id)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
