//! Terminal input for the console.
//!
//! A poller thread turns crossterm events into [`Event`]s and emits a
//! [`Event::Tick`] whenever the terminal stays quiet for one tick, so the
//! clock redraws and stale notices expire without user input.

use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    /// No input for one tick.
    Tick,
    /// Key press or repeat.
    Key(KeyEvent),
    /// Terminal resized; the next draw picks up the new size.
    Resize,
}

/// Maps a crossterm event to a console event. Key releases, mouse, focus
/// and paste events are dropped.
fn translate(evt: CrosstermEvent) -> Option<Event> {
    match evt {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
        CrosstermEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    }
}

/// Receiving end of the poller thread.
///
/// The thread stops once the handler is dropped; if the thread dies first,
/// [`EventHandler::next`] returns an error and the app quits.
pub struct EventHandler {
    rx: Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                let event = match event::poll(tick_rate) {
                    Ok(true) => match event::read().ok().and_then(translate) {
                        Some(event) => event,
                        None => continue,
                    },
                    Ok(false) => Event::Tick,
                    Err(_) => break,
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Blocks until the next event.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key_event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn presses_and_repeats_pass_releases_drop() {
        let press = key_event(KeyCode::Char('n'), KeyEventKind::Press);
        assert_eq!(
            translate(CrosstermEvent::Key(press)),
            Some(Event::Key(press))
        );
        let repeat = key_event(KeyCode::Char('n'), KeyEventKind::Repeat);
        assert_eq!(
            translate(CrosstermEvent::Key(repeat)),
            Some(Event::Key(repeat))
        );
        let release = key_event(KeyCode::Char('n'), KeyEventKind::Release);
        assert_eq!(translate(CrosstermEvent::Key(release)), None);
    }

    #[test]
    fn resize_and_focus() {
        assert_eq!(
            translate(CrosstermEvent::Resize(120, 40)),
            Some(Event::Resize)
        );
        assert_eq!(translate(CrosstermEvent::FocusGained), None);
    }
}
