//! Cross-thread control between the render loop and the input poller
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Cooperative cancellation flag, checked by the render loop once per tick
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Single-slot mailbox holding the most recent key press
///
/// Posting overwrites any key not yet taken.
#[derive(Debug, Clone, Default)]
pub struct KeyInbox {
    slot: Arc<Mutex<Option<char>>>,
}

impl KeyInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&self, key: char) {
        // A poisoned slot still holds a plain char, so keep using it
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(key);
    }

    /// Drain the slot
    pub fn take(&self) -> Option<char> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_stop_token_is_shared() {
        let token = StopToken::new();
        let other = token.clone();
        assert!(!token.is_cancelled());
        other.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_inbox_keeps_latest() {
        let inbox = KeyInbox::new();
        assert_eq!(inbox.take(), None);
        inbox.post('a');
        inbox.post('b');
        assert_eq!(inbox.take(), Some('b'));
        assert_eq!(inbox.take(), None);
    }

    #[test]
    fn test_inbox_across_threads() {
        let inbox = KeyInbox::new();
        let sender = inbox.clone();
        thread::spawn(move || sender.post('q')).join().unwrap();
        assert_eq!(inbox.take(), Some('q'));
    }
}
