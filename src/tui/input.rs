// Input handling with per-key behaviors
//
// Action keys (copy, reset, edit toggle, quit) fire once per press. Most
// terminals never send release events, so a held key arrives as a stream of
// presses; a short debounce keeps one press from copying or resetting twice.
// Navigation keys pass straight through so holding an arrow scrolls.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Debounce window for action keys
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Trigger once per press; repeats inside the debounce window are dropped
    StateChange,
    /// Trigger on every press event
    Passthrough,
}

/// Tracks the state of a single key
#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    last_triggered: Option<Instant>,
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    /// Configure a key's behavior
    pub fn configure_key(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.key_behaviors.insert(key, behavior);
    }

    /// Configure multiple keys with the same behavior
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.configure_key(*key, behavior);
        }
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.handle_key_press_at(key, Instant::now())
    }

    fn handle_key_press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Passthrough);

        if behavior == KeyBehavior::Passthrough {
            return true;
        }

        let state = self.key_states.entry(key).or_default();

        if state.is_pressed {
            // Held key or a terminal without release events
            if let Some(last) = state.last_triggered {
                if now.duration_since(last) >= ACTION_DEBOUNCE {
                    state.last_triggered = Some(now);
                    return true;
                }
            }
            false
        } else {
            state.is_pressed = true;
            state.last_triggered = Some(now);
            true
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.is_pressed = false;
            state.last_triggered = None;
        }
    }

    /// Bindings used in View mode
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                // Playground actions
                KeyCode::Char('e'),
                KeyCode::Char('y'),
                KeyCode::Char('r'),
                KeyCode::Char('p'),
                // Section switching
                KeyCode::Char('['),
                KeyCode::Char(']'),
                // Drawers and overlays
                KeyCode::Char('L'),
                KeyCode::Char('?'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}
