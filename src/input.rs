//! Keyboard model and the merged command stream
//!
//! Key transitions and timer ticks arrive from different sources but are
//! consumed by one `EventStream`, one command at a time. Key commands are
//! queued and applied before the next tick, so a key event and a timer tick
//! landing in the same instant always resolve input first.

use std::collections::VecDeque;

use crate::sim::{Command, GameState, Lcg, PaddleDirection, reduce};

/// Keys that drive the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}

impl KeyAction {
    /// Parse a DOM event type (`keydown` / `keyup`)
    pub fn from_event_type(ty: &str) -> Option<Self> {
        match ty {
            "keydown" => Some(KeyAction::Down),
            "keyup" => Some(KeyAction::Up),
            _ => None,
        }
    }
}

/// A single key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub action: KeyAction,
    pub key: Key,
    /// Auto-repeat from a held key
    pub repeat: bool,
}

impl KeyEvent {
    pub fn new(action: KeyAction, key: Key) -> Self {
        Self {
            action,
            key,
            repeat: false,
        }
    }

    /// Command produced by this event, or `None` for auto-repeats
    pub fn command(&self) -> Option<Command> {
        if self.repeat {
            return None;
        }
        let direction = match (self.action, self.key) {
            (KeyAction::Down, Key::ArrowUp) => PaddleDirection::Up,
            (KeyAction::Down, Key::ArrowDown) => PaddleDirection::Down,
            (KeyAction::Up, _) => PaddleDirection::Idle,
        };
        Some(Command::Translate(direction))
    }
}

/// Single consumer folding key commands and timer ticks into game states
#[derive(Debug, Clone)]
pub struct EventStream {
    state: GameState,
    rng: Lcg,
    pending: VecDeque<Command>,
}

impl EventStream {
    pub fn new(rng: Lcg) -> Self {
        Self {
            state: GameState::initial(),
            rng,
            pending: VecDeque::new(),
        }
    }

    /// Seeded stream, or entropy-seeded when `seed` is `None` or zero
    pub fn with_seed(seed: Option<u32>) -> Self {
        Self::new(Lcg::from_setting(seed))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rng(&self) -> &Lcg {
        &self.rng
    }

    /// Number of key commands waiting for the next tick
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Queue the command for a key transition. Returns false if it was filtered.
    pub fn key(&mut self, event: KeyEvent) -> bool {
        match event.command() {
            Some(command) => {
                self.pending.push_back(command);
                true
            }
            None => false,
        }
    }

    /// Apply queued key commands without waiting for the timer
    pub fn flush(&mut self) -> &GameState {
        while let Some(command) = self.pending.pop_front() {
            self.apply(command);
        }
        &self.state
    }

    /// Timer fired: drain queued input, then tick
    pub fn on_timer(&mut self, elapsed: u64) -> &GameState {
        self.flush();
        self.apply(Command::Tick(elapsed));
        &self.state
    }

    /// Feed any command through the stream in arrival order
    pub fn push(&mut self, command: Command) -> &GameState {
        match command {
            Command::Translate(_) => {
                self.pending.push_back(command);
                &self.state
            }
            Command::Tick(elapsed) => self.on_timer(elapsed),
        }
    }

    fn apply(&mut self, command: Command) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, command, &mut self.rng);
    }
}

/// Fold `commands` from `initial`, yielding every resulting state
pub fn scan<I>(initial: GameState, mut rng: Lcg, commands: I) -> impl Iterator<Item = GameState>
where
    I: IntoIterator<Item = Command>,
{
    commands.into_iter().scan(initial, move |state, command| {
        let next = reduce(state.clone(), command, &mut rng);
        *state = next.clone();
        Some(next)
    })
}
