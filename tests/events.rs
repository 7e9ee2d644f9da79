use bevy_ecs::event::{event_update_system, EventRegistry, Events};
use bevy_ecs::schedule::Schedule;
use bevy_ecs::world::World;
use speculoos::prelude::*;
use zpype::events::{GameCommand, GameEvent};

#[test]
fn test_registered_events_are_dropped_after_two_updates() {
    let mut world = World::new();
    EventRegistry::register_event::<GameEvent>(&mut world);

    let mut schedule = Schedule::default();
    schedule.add_systems(event_update_system);

    world.send_event(GameEvent::Command(GameCommand::Confirm));
    assert_that(&world.resource::<Events<GameEvent>>().len()).is_equal_to(1);

    // First rotation keeps the event readable for late readers.
    schedule.run(&mut world);
    assert_that(&world.resource::<Events<GameEvent>>().len()).is_equal_to(1);

    // Second rotation retires it; the buffer does not grow unbounded.
    schedule.run(&mut world);
    assert_that(&world.resource::<Events<GameEvent>>().is_empty()).is_true();
}
