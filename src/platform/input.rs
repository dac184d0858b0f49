//! Input polling contract

use crate::sim::TickInput;

/// Everything the simulation can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Fire,
    Restart,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Fire,
        Action::Restart,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Host keyboard (or any other) state, polled once per tick.
/// A held action reads true every tick; there is no debouncing.
pub trait InputProvider {
    fn is_pressed(&self, action: Action) -> bool;
}

impl TickInput {
    /// Sample every action once
    pub fn poll(input: &impl InputProvider) -> Self {
        Self {
            up: input.is_pressed(Action::MoveUp),
            down: input.is_pressed(Action::MoveDown),
            left: input.is_pressed(Action::MoveLeft),
            right: input.is_pressed(Action::MoveRight),
            fire: input.is_pressed(Action::Fire),
            restart: input.is_pressed(Action::Restart),
        }
    }
}

/// A plain set of held actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    held: u8,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `press`
    pub fn with(mut self, action: Action) -> Self {
        self.press(action);
        self
    }

    pub fn press(&mut self, action: Action) {
        self.held |= action.bit();
    }

    pub fn release(&mut self, action: Action) {
        self.held &= !action.bit();
    }

    pub fn clear(&mut self) {
        self.held = 0;
    }
}

impl InputProvider for KeyState {
    fn is_pressed(&self, action: Action) -> bool {
        self.held & action.bit() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_state() {
        let mut keys = KeyState::new().with(Action::Fire).with(Action::MoveLeft);
        assert!(keys.is_pressed(Action::Fire));
        assert!(keys.is_pressed(Action::MoveLeft));
        assert!(!keys.is_pressed(Action::MoveRight));

        keys.release(Action::Fire);
        assert!(!keys.is_pressed(Action::Fire));

        keys.clear();
        assert!(Action::ALL.iter().all(|&a| !keys.is_pressed(a)));
    }

    #[test]
    fn test_poll() {
        let keys = KeyState::new()
            .with(Action::MoveUp)
            .with(Action::MoveRight)
            .with(Action::Restart);
        let input = TickInput::poll(&keys);
        assert_eq!(
            input,
            TickInput {
                up: true,
                right: true,
                restart: true,
                ..Default::default()
            }
        );
    }
}
