//! Press/release abilities: speed boost and vertical boost.

use hecs::{Entity, World};
use tracing::{debug, trace};

use space_shooter_core::components::ShipMovement;
use space_shooter_core::enums::BoostRelease;
use space_shooter_core::input::InputAction;

/// Apply an action press or release to a ship.
/// Does nothing if the entity has no `ShipMovement`.
pub fn apply(world: &mut World, ship: Entity, action: InputAction, pressed: bool) {
    let Ok(mut movement) = world.get::<&mut ShipMovement>(ship) else {
        trace!(?ship, ?action, "ability input for entity without movement");
        return;
    };

    match (action, pressed) {
        (InputAction::SpeedBoost, true) => speed_boost_pressed(&mut movement),
        (InputAction::SpeedBoost, false) => speed_boost_released(&mut movement),
        (InputAction::VerticalBoost, pressed) => movement.vertical_boost = pressed,
    }
    debug!(
        ?action,
        pressed,
        move_speed = movement.move_speed,
        vertical_boost = movement.vertical_boost,
        "ability toggled"
    );
}

pub fn speed_boost_pressed(movement: &mut ShipMovement) {
    // A second press while boosted must not save the boosted speed.
    if movement.boost_release == BoostRelease::RestoreSaved && movement.saved_speed.is_none() {
        movement.saved_speed = Some(movement.move_speed);
    }
    movement.move_speed = movement.boost_speed;
    movement.speed_boost_active = true;
}

pub fn speed_boost_released(movement: &mut ShipMovement) {
    match movement.boost_release {
        BoostRelease::SubtractDelta => {
            movement.move_speed -= movement.boost_delta;
        }
        BoostRelease::RestoreSaved => {
            if let Some(saved) = movement.saved_speed.take() {
                movement.move_speed = saved;
            }
        }
    }
    movement.speed_boost_active = false;
}
