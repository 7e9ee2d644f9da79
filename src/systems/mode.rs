//! The mode stack and per-mode phase stacks.

use std::collections::HashMap;

use bevy_ecs::prelude::*;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};
use strum_macros::Display;
use tracing::{debug, info, warn};

use crate::constants::ui::{
    layer, BANNER_DELAY_TICKS, BANNER_HOLD_TICKS, BANNER_SLIDE_TICKS, INTRO_SLIDE_TICKS,
};
use crate::constants::{player_rest, CANVAS_SIZE};
use crate::events::ModeTransition;
use crate::systems::bolt::Cannons;
use crate::systems::driver::Driver;
use crate::systems::hud::ScoreBoard;
use crate::systems::input::{Groups, Routing};
use crate::systems::movement::{PlayerShip, Position};
use crate::systems::render::{Renderable, UiLabel, Visual};
use crate::systems::spawn::{wave_ship_count, SpawnWave};
use crate::systems::targeting::{ActiveWords, TargetLock};
use crate::systems::EntityKind;
use crate::tween::{Ease, Segment, Tween};

/// Top-level game modes, stacked.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Menu,
    Intro,
    Playing,
    Paused,
    Outro,
}

/// Ties an entity's lifetime to a mode: suspended with it, despawned when it
/// leaves the stack. The player ship carries no scope and persists.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeScope(pub GameMode);

/// Excluded from update and draw while a mode above owns the screen.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suspended;

/// Marker for the animated wave/title banners.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner;

#[derive(Resource, Debug, Default)]
pub struct ModeStack {
    stack: SmallVec<[GameMode; 4]>,
}

impl ModeStack {
    pub fn current(&self) -> Option<GameMode> {
        self.stack.last().copied()
    }

    pub fn contains(&self, mode: GameMode) -> bool {
        self.stack.contains(&mode)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// A mode's internal sequencing steps, top of stack active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Intro: wait for the player's entrance slide to settle.
    SlideIn,
    /// Playing: field the next wave's ships.
    SpawnWave,
    /// Playing: run the wave banner animation to completion.
    WaveBanner { started: bool },
    /// Playing: steady state; watches for the field to clear.
    Play,
}

#[derive(Resource, Debug, Default)]
pub struct PhaseStacks(pub HashMap<GameMode, SmallVec<[Phase; 4]>>);

impl PhaseStacks {
    pub fn top(&self, mode: GameMode) -> Option<Phase> {
        self.0.get(&mode).and_then(|s| s.last().copied())
    }
}

fn groups_for(mode: GameMode) -> Groups {
    match mode {
        GameMode::Menu | GameMode::Outro => Groups::CONTROL | Groups::MENU,
        GameMode::Intro | GameMode::Paused => Groups::CONTROL,
        GameMode::Playing => Groups::CONTROL | Groups::TYPING,
    }
}

/// Applies queued [`ModeTransition`]s: suspends, resumes, despawns scoped
/// entities, and runs each mode's entry setup.
#[allow(clippy::too_many_arguments)]
pub fn mode_system(
    mut transitions: EventReader<ModeTransition>,
    mut modes: ResMut<ModeStack>,
    mut phases: ResMut<PhaseStacks>,
    mut routing: ResMut<Routing>,
    mut score: ResMut<ScoreBoard>,
    mut active: ResMut<ActiveWords>,
    mut lock: ResMut<TargetLock>,
    scoped: Query<(Entity, &ModeScope)>,
    player: Query<Entity, With<PlayerShip>>,
    mut commands: Commands,
) {
    for transition in transitions.read().copied() {
        match transition {
            ModeTransition::Push(mode) => {
                if let Some(top) = modes.current() {
                    suspend_mode(top, &scoped, &mut commands);
                }
                modes.stack.push(mode);
                info!(%mode, depth = modes.depth(), "Mode pushed");
                enter_mode(mode, &mut phases, &mut score, &player, &mut commands);
            }
            ModeTransition::Pop => {
                let Some(old) = modes.stack.pop() else {
                    warn!("Pop requested on an empty mode stack");
                    continue;
                };
                info!(mode = %old, depth = modes.depth(), "Mode popped");
                leave_mode(old, &scoped, &mut phases, &mut active, &mut lock, &mut commands);
                if let Some(top) = modes.current() {
                    resume_mode(top, &scoped, &mut commands);
                }
            }
            ModeTransition::Switch(mode) => {
                if let Some(old) = modes.stack.pop() {
                    info!(from = %old, to = %mode, "Mode switched");
                    leave_mode(old, &scoped, &mut phases, &mut active, &mut lock, &mut commands);
                }
                modes.stack.push(mode);
                enter_mode(mode, &mut phases, &mut score, &player, &mut commands);
            }
        }
        if let Some(top) = modes.current() {
            routing.0 = groups_for(top);
        } else {
            routing.0 = Groups::CONTROL;
        }
    }
}

fn suspend_mode(mode: GameMode, scoped: &Query<(Entity, &ModeScope)>, commands: &mut Commands) {
    for (entity, scope) in scoped.iter() {
        if scope.0 == mode {
            commands.entity(entity).insert(Suspended);
        }
    }
}

fn resume_mode(mode: GameMode, scoped: &Query<(Entity, &ModeScope)>, commands: &mut Commands) {
    for (entity, scope) in scoped.iter() {
        if scope.0 == mode {
            commands.entity(entity).remove::<Suspended>();
        }
    }
}

fn leave_mode(
    mode: GameMode,
    scoped: &Query<(Entity, &ModeScope)>,
    phases: &mut PhaseStacks,
    active: &mut ActiveWords,
    lock: &mut TargetLock,
    commands: &mut Commands,
) {
    for (entity, scope) in scoped.iter() {
        if scope.0 == mode {
            commands.entity(entity).despawn();
        }
    }
    phases.0.remove(&mode);
    if mode == GameMode::Playing {
        active.0.clear();
        lock.0 = None;
    }
}

fn enter_mode(
    mode: GameMode,
    phases: &mut PhaseStacks,
    score: &mut ScoreBoard,
    player: &Query<Entity, With<PlayerShip>>,
    commands: &mut Commands,
) {
    debug!(%mode, "Entering mode");
    let center = Vec2::new(CANVAS_SIZE.x as f32 / 2.0, CANVAS_SIZE.y as f32 / 2.0);
    match mode {
        GameMode::Menu => {
            // A fresh run; the previous player ship (if any) retires.
            for entity in player.iter() {
                commands.entity(entity).despawn();
            }
            *score = ScoreBoard::default();
            spawn_banner(
                commands,
                mode,
                "ZPYPE",
                Tween::new([Segment::new(
                    Vec2::new(center.x, -40.0),
                    Vec2::new(center.x, center.y - 80.0),
                    BANNER_SLIDE_TICKS * 2,
                    Ease::QuadOut,
                )]),
            );
            spawn_label(commands, mode, "PRESS ENTER", Vec2::new(center.x, center.y + 40.0));
        }
        GameMode::Intro => {
            if player.is_empty() {
                let start = Vec2::new(center.x, CANVAS_SIZE.y as f32 + 40.0);
                commands.spawn((
                    EntityKind::Player,
                    PlayerShip,
                    Cannons::default(),
                    Position(start),
                    Driver::position(Tween::new([Segment::new(
                        start,
                        player_rest(),
                        INTRO_SLIDE_TICKS,
                        Ease::QuadOut,
                    )])),
                    Renderable {
                        visual: Visual::PlayerShip,
                        layer: layer::FIELD,
                    },
                ));
            }
            phases.0.insert(mode, smallvec![Phase::SlideIn]);
        }
        GameMode::Playing => {
            score.wave = 1;
            phases.0.insert(
                mode,
                smallvec![Phase::Play, Phase::WaveBanner { started: false }, Phase::SpawnWave],
            );
        }
        GameMode::Paused => {
            spawn_label(commands, mode, "PAUSED", center);
        }
        GameMode::Outro => {
            spawn_banner(
                commands,
                mode,
                "GAME OVER",
                Tween::new([Segment::new(
                    Vec2::new(center.x, -40.0),
                    Vec2::new(center.x, center.y - 60.0),
                    BANNER_SLIDE_TICKS * 2,
                    Ease::QuadOut,
                )]),
            );
            spawn_label(commands, mode, "PRESS ENTER", Vec2::new(center.x, center.y + 60.0));
        }
    }
}

fn spawn_banner(commands: &mut Commands, mode: GameMode, text: &str, tween: Tween) {
    commands.spawn((
        EntityKind::Ui,
        Banner,
        UiLabel { text: text.to_string() },
        Position(Vec2::new(CANVAS_SIZE.x as f32 / 2.0, -40.0)),
        Driver::position(tween),
        Renderable {
            visual: Visual::Label,
            layer: layer::HUD,
        },
        ModeScope(mode),
    ));
}

fn spawn_label(commands: &mut Commands, mode: GameMode, text: &str, at: Vec2) {
    commands.spawn((
        EntityKind::Ui,
        UiLabel { text: text.to_string() },
        Position(at),
        Renderable {
            visual: Visual::Label,
            layer: layer::HUD,
        },
        ModeScope(mode),
    ));
}

/// Evaluates the active mode's top phase once per tick; phases pop
/// themselves when their completion criterion holds.
#[allow(clippy::too_many_arguments)]
pub fn phase_system(
    modes: Res<ModeStack>,
    mut phases: ResMut<PhaseStacks>,
    mut score: ResMut<ScoreBoard>,
    mut waves: EventWriter<SpawnWave>,
    mut transitions: EventWriter<ModeTransition>,
    sliding_player: Query<(), (With<PlayerShip>, With<Driver>)>,
    animated_banners: Query<(), (With<Banner>, With<Driver>)>,
    banners: Query<(Entity, &ModeScope), With<Banner>>,
    field: Query<(&EntityKind, &ModeScope)>,
    mut commands: Commands,
) {
    let Some(mode) = modes.current() else {
        return;
    };
    let Some(stack) = phases.0.get_mut(&mode) else {
        return;
    };
    let Some(top) = stack.last_mut() else {
        return;
    };

    match top {
        Phase::SlideIn => {
            if sliding_player.is_empty() {
                stack.pop();
                transitions.write(ModeTransition::Switch(GameMode::Playing));
            }
        }
        Phase::SpawnWave => {
            waves.write(SpawnWave {
                count: wave_ship_count(score.wave),
            });
            stack.pop();
        }
        Phase::WaveBanner { started } => {
            if !*started {
                *started = true;
                let center = Vec2::new(CANVAS_SIZE.x as f32 / 2.0, CANVAS_SIZE.y as f32 / 2.0);
                spawn_banner(
                    &mut commands,
                    GameMode::Playing,
                    &format!("WAVE {}", score.wave),
                    Tween::new([
                        Segment::hold(Vec2::new(center.x, -30.0), BANNER_DELAY_TICKS),
                        Segment::new(Vec2::new(center.x, -30.0), center, BANNER_SLIDE_TICKS, Ease::QuadOut),
                        Segment::hold(center, BANNER_HOLD_TICKS),
                        Segment::new(
                            center,
                            Vec2::new(center.x, CANVAS_SIZE.y as f32 + 30.0),
                            BANNER_SLIDE_TICKS,
                            Ease::QuadIn,
                        ),
                    ]),
                );
            } else if animated_banners.is_empty() {
                for (entity, scope) in banners.iter() {
                    if scope.0 == GameMode::Playing {
                        commands.entity(entity).despawn();
                    }
                }
                stack.pop();
            }
        }
        Phase::Play => {
            let field_clear = !field.iter().any(|(kind, scope)| {
                scope.0 == GameMode::Playing
                    && matches!(kind, EntityKind::Enemy | EntityKind::Bolt | EntityKind::Effect)
            });
            if field_clear {
                score.wave += 1;
                debug!(wave = score.wave, "Field clear, queueing next wave");
                stack.push(Phase::WaveBanner { started: false });
                stack.push(Phase::SpawnWave);
            }
        }
    }
}
