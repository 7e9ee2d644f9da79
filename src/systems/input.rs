//! SDL input translation, routing groups, and the single-step gate.

use std::collections::{HashMap, VecDeque};

use bevy_ecs::prelude::*;
use sdl2::{event::Event, keyboard::Keycode, EventPump};
use tracing::debug;

use crate::events::{GameCommand, GameEvent, KeyTyped, ModeTransition};
use crate::systems::debug::DebugState;
use crate::systems::mode::{GameMode, ModeStack};
use crate::systems::GlobalState;

bitflags::bitflags! {
    /// Input handler groups that can be enabled per mode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Groups: u8 {
        /// Global control events: quit, escape, pause, debug, step.
        const CONTROL = 1 << 0;
        /// Typed letters feeding the targeting resolver.
        const TYPING = 1 << 1;
        /// Menu confirmation.
        const MENU = 1 << 2;
    }
}

/// The currently enabled input groups, maintained by the mode system.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routing(pub Groups);

impl Default for Routing {
    fn default() -> Self {
        Self(Groups::CONTROL)
    }
}

/// Static mapping from control keys to commands. Letter keys are reserved
/// for typing and never bound to commands.
#[derive(Resource, Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        key_bindings.insert(Keycode::Escape, GameCommand::Back);
        key_bindings.insert(Keycode::Return, GameCommand::Confirm);
        key_bindings.insert(Keycode::KpEnter, GameCommand::Confirm);
        key_bindings.insert(Keycode::Tab, GameCommand::TogglePause);
        key_bindings.insert(Keycode::F1, GameCommand::ToggleDebug);
        key_bindings.insert(Keycode::F2, GameCommand::ToggleStep);
        key_bindings.insert(Keycode::F3, GameCommand::Step);

        Self { key_bindings }
    }
}

/// Single-step debug mode: while enabled, typed characters are buffered and
/// only released, in FIFO order, by an explicit step trigger.
#[derive(Resource, Debug, Default)]
pub struct StepState {
    pub enabled: bool,
    pub queue: VecDeque<char>,
}

/// Minimal key event shape, decoupled from SDL's event pump so translation
/// is testable without a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleKeyEvent {
    KeyDown(Keycode),
}

fn keycode_to_char(key: Keycode) -> Option<char> {
    // Letter keys have single-character names ("A".."Z").
    let name = key.name();
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

/// Translates raw key events into game events. Control bindings are checked
/// first; letters pass only while the TYPING group is enabled.
pub fn translate_key_events(bindings: &Bindings, routing: Groups, keys: &[SimpleKeyEvent]) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for key_event in keys {
        let SimpleKeyEvent::KeyDown(key) = *key_event;
        if let Some(command) = bindings.key_bindings.get(&key).copied() {
            events.push(GameEvent::Command(command));
        } else if routing.contains(Groups::TYPING) {
            if let Some(ch) = keycode_to_char(key) {
                events.push(GameEvent::Typed(ch));
            }
        }
    }
    events
}

pub fn input_system(
    bindings: Res<Bindings>,
    routing: Res<Routing>,
    mut writer: EventWriter<GameEvent>,
    mut pump: NonSendMut<EventPump>,
) {
    let mut keys = Vec::new();
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                writer.write(GameEvent::Command(GameCommand::Exit));
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                keys.push(SimpleKeyEvent::KeyDown(key));
            }
            _ => {}
        }
    }
    for event in translate_key_events(&bindings, routing.0, &keys) {
        writer.write(event);
    }
}

/// Forwards typed characters into gameplay, honoring single-step mode.
///
/// Control events are never buffered; only typed characters queue. A `Step`
/// command (or disabling step mode) drains the queue in arrival order.
pub fn step_gate_system(
    mut events: EventReader<GameEvent>,
    mut step: ResMut<StepState>,
    mut typed: EventWriter<KeyTyped>,
) {
    for event in events.read().copied() {
        match event {
            GameEvent::Typed(ch) => {
                if step.enabled {
                    step.queue.push_back(ch);
                } else {
                    typed.write(KeyTyped(ch));
                }
            }
            GameEvent::Command(GameCommand::Step) if step.enabled => {
                debug!(buffered = step.queue.len(), "Step: releasing buffered input");
                for ch in step.queue.drain(..) {
                    typed.write(KeyTyped(ch));
                }
            }
            _ => {}
        }
    }

    if !step.enabled && !step.queue.is_empty() {
        for ch in step.queue.drain(..) {
            typed.write(KeyTyped(ch));
        }
    }
}

/// Applies control commands against the current mode.
pub fn command_system(
    mut events: EventReader<GameEvent>,
    modes: Res<ModeStack>,
    mut global: ResMut<GlobalState>,
    mut debug: ResMut<DebugState>,
    mut step: ResMut<StepState>,
    mut transitions: EventWriter<ModeTransition>,
) {
    for event in events.read().copied() {
        let GameEvent::Command(command) = event else {
            continue;
        };
        let mode = modes.current();
        match command {
            GameCommand::Exit => global.exit = true,
            GameCommand::ToggleDebug => debug.toggle(),
            GameCommand::ToggleStep => {
                step.enabled = !step.enabled;
                debug!(enabled = step.enabled, "Single-step toggled");
            }
            GameCommand::Step => {} // consumed by the step gate
            GameCommand::Confirm => match mode {
                Some(GameMode::Menu) => {
                    transitions.write(ModeTransition::Switch(GameMode::Intro));
                }
                Some(GameMode::Outro) => {
                    transitions.write(ModeTransition::Switch(GameMode::Menu));
                }
                Some(GameMode::Paused) => {
                    transitions.write(ModeTransition::Pop);
                }
                _ => {}
            },
            GameCommand::TogglePause => match mode {
                Some(GameMode::Playing) => {
                    transitions.write(ModeTransition::Push(GameMode::Paused));
                }
                Some(GameMode::Paused) => {
                    transitions.write(ModeTransition::Pop);
                }
                _ => {}
            },
            GameCommand::Back => match mode {
                Some(GameMode::Menu) | None => global.exit = true,
                Some(GameMode::Playing) => {
                    transitions.write(ModeTransition::Push(GameMode::Paused));
                }
                Some(GameMode::Paused) => {
                    transitions.write(ModeTransition::Pop);
                }
                Some(GameMode::Intro) | Some(GameMode::Outro) => {
                    transitions.write(ModeTransition::Switch(GameMode::Menu));
                }
            },
        }
    }
}
