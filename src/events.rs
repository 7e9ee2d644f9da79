use bevy_ecs::prelude::*;

use crate::systems::mode::GameMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Exit,
    Confirm,
    Back,
    TogglePause,
    ToggleDebug,
    ToggleStep,
    Step,
}

/// Raw input stream: control commands plus typed characters.
///
/// Typed characters are *not* consumed directly by gameplay; the step gate
/// re-emits them as [`KeyTyped`] so single-step mode can buffer them.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
    Typed(char),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}

/// A typed character released into gameplay by the step gate, in FIFO order.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyTyped(pub char);

/// Outcome of a single resolved keystroke.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Head letter of the locked word matched; `ship` took the hit.
    Hit { ship: Entity },
    /// No word could accept the keystroke.
    Miss,
    /// The hit consumed the word's last letter.
    Kill { ship: Entity },
}

/// Requested change to the mode stack, applied by the mode system.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeTransition {
    Push(GameMode),
    Pop,
    /// Replace the top without resuming the mode underneath it.
    Switch(GameMode),
}
