use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Generation number of one actor selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionToken(u64);

/// Hands out increasing tokens so that only the latest selection may update
/// the detail panels. Responses carrying an older token are dropped.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    latest: Arc<AtomicU64>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> SelectionToken {
        SelectionToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: SelectionToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}
