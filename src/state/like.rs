//! Like-control bookkeeping.
//!
//! DESIGN
//! ======
//! Controls are keyed by their target URL, which the server renders once per
//! post and never changes. Each activation takes a ticket with a per-control
//! sequence number; a success response is applied only when its ticket is
//! newer than the last one applied, so an old response arriving late cannot
//! overwrite a newer server answer. Display state is never guessed locally.

#[cfg(test)]
#[path = "like_test.rs"]
mod like_test;

use std::collections::HashMap;

use crate::net::types::LikeResponse;

/// What a like control should show, taken verbatim from the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeView {
    pub liked: bool,
    pub count: u64,
}

impl LikeView {
    /// Pick between the two mutually exclusive glyphs.
    pub fn glyph<'a>(&self, liked: &'a str, unliked: &'a str) -> &'a str {
        if self.liked { liked } else { unliked }
    }
}

impl From<LikeResponse> for LikeView {
    fn from(resp: LikeResponse) -> Self {
        Self { liked: resp.liked, count: resp.count }
    }
}

/// Handle for one in-flight like request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    control: String,
    seq: u64,
}

impl RequestTicket {
    pub fn control(&self) -> &str {
        &self.control
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct ControlSeq {
    issued: u64,
    applied: u64,
}

/// Registration map of every like control seen on the page.
#[derive(Clone, Debug, Default)]
pub struct LikeTracker {
    controls: HashMap<String, ControlSeq>,
}

impl LikeTracker {
    /// Register an activation of the control bound to `url`.
    pub fn begin(&mut self, url: &str) -> RequestTicket {
        let entry = self.controls.entry(url.to_owned()).or_default();
        entry.issued += 1;
        RequestTicket { control: url.to_owned(), seq: entry.issued }
    }

    /// Decide whether a success response for `ticket` may update the display.
    ///
    /// Returns `false` for responses older than one already applied.
    pub fn accept(&mut self, ticket: &RequestTicket) -> bool {
        let Some(entry) = self.controls.get_mut(&ticket.control) else {
            return false;
        };
        if ticket.seq <= entry.applied {
            return false;
        }
        entry.applied = ticket.seq;
        true
    }

    /// Number of requests for `url` issued but not yet superseded by an applied response.
    pub fn pending(&self, url: &str) -> u64 {
        self.controls.get(url).map_or(0, |c| c.issued - c.applied)
    }
}
