//! Keyboard polling that runs alongside the render thread
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;
use std::thread::JoinHandle;
use std::time::Duration;
use wire3d_core::{KeyInbox, StopToken};

/// How long a single poll waits before checking on the render thread
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Character posted to the inbox for a key code
pub fn key_char(code: KeyCode) -> char {
    match code {
        KeyCode::Char(c) => c,
        KeyCode::Esc => '\u{1b}',
        KeyCode::Enter => '\n',
        KeyCode::Tab => '\t',
        KeyCode::Backspace => '\u{8}',
        _ => '\0',
    }
}

/// Wait for a key press or for `render` to finish on its own
///
/// Any key is posted to `inbox` and cancels `stop`. Returns the key, or
/// `None` if the render thread ended first. The caller joins the thread.
pub fn wait_for_key<T>(
    render: &JoinHandle<T>,
    stop: &StopToken,
    inbox: &KeyInbox,
) -> io::Result<Option<char>> {
    while !render.is_finished() {
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
            if kind == KeyEventKind::Release {
                continue;
            }
            let key = key_char(code);
            log::info!("Key {:?} pressed, stopping", key);
            inbox.post(key);
            stop.cancel();
            return Ok(Some(key));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_char() {
        assert_eq!(key_char(KeyCode::Char('q')), 'q');
        assert_eq!(key_char(KeyCode::Esc), '\u{1b}');
        assert_eq!(key_char(KeyCode::F(5)), '\0');
    }
}
