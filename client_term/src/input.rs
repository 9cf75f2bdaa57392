//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputEvent, Key};
use std::collections::HashMap;

/// Ticks a freshly pressed direction key counts as held, on terminals that
/// never report releases. Must outlast the OS auto-repeat delay (500-660 ms).
pub const FIRST_HOLD_TICKS: u32 = 28;

/// Ticks a key counts as held after its latest auto-repeat
pub const HOLD_TICKS: u32 = 6;

/// Map a terminal key to a game key
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char('p') | KeyCode::Char('P') => Key::Launch,
        KeyCode::Char('r') | KeyCode::Char('R') => Key::Restart,
        KeyCode::Char('w') | KeyCode::Char('W') => Key::LeftUp,
        KeyCode::Char('s') | KeyCode::Char('S') => Key::LeftDown,
        KeyCode::Up => Key::RightUp,
        KeyCode::Down => Key::RightDown,
        _ => Key::Other,
    }
}

fn is_quit(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Translate a terminal key event into a game input event
pub fn translate(event: &KeyEvent) -> Option<InputEvent> {
    if is_quit(event) {
        return (event.kind == KeyEventKind::Press).then_some(InputEvent::Quit);
    }

    let key = map_key(event.code);
    match event.kind {
        KeyEventKind::Press => Some(InputEvent::KeyDown(key)),
        // Auto-repeat only matters for steering
        KeyEventKind::Repeat => key.paddle_control().map(|_| InputEvent::KeyDown(key)),
        KeyEventKind::Release => Some(InputEvent::KeyUp(key)),
    }
}

#[derive(Debug, Clone, Copy)]
struct Hold {
    age: u32, // Ticks since the last press
    repeating: bool, // Auto-repeat has kicked in
}

/// Synthesises key releases for terminals that only report presses.
///
/// Auto-repeat arrives as more presses of a key that is already held. Until
/// the first repeat a key stays held for `first_ticks`; after that it only
/// needs to be re-pressed every `repeat_ticks`.
#[derive(Debug, Clone)]
pub struct HoldTracker {
    first_ticks: u32,
    repeat_ticks: u32,
    held: HashMap<Key, Hold>,
}

impl HoldTracker {
    pub fn new(first_ticks: u32, repeat_ticks: u32) -> Self {
        Self {
            first_ticks,
            repeat_ticks,
            held: HashMap::new(),
        }
    }

    pub fn observe(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) if key.paddle_control().is_some() => {
                let repeating = self.held.contains_key(&key);
                self.held.insert(key, Hold { age: 0, repeating });
            }
            InputEvent::KeyUp(key) => {
                self.held.remove(&key);
            }
            _ => {}
        }
    }

    /// Age every held key by one tick and return the ones that ran out
    pub fn expire(&mut self) -> Vec<Key> {
        let mut released = Vec::new();
        let (first_ticks, repeat_ticks) = (self.first_ticks, self.repeat_ticks);
        self.held.retain(|key, hold| {
            hold.age += 1;
            let limit = if hold.repeating {
                repeat_ticks
            } else {
                first_ticks
            };
            if hold.age > limit {
                released.push(*key);
                false
            } else {
                true
            }
        });
        released
    }
}
