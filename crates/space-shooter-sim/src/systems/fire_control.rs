//! Fire control: spawns projectiles from the stick direction, gated by a
//! cooldown timer.

use glam::DVec3;
use hecs::{Entity, World};
use tracing::{debug, trace};

use space_shooter_core::components::{PlayerShip, Weapon};
use space_shooter_core::events::{AudioEvent, GameEvent};
use space_shooter_core::input::AxisInput;
use space_shooter_core::types::{Rotator, Transform};

use crate::timers::{TimerAction, TimerQueue};
use crate::world_setup;

/// Try to fire every player ship's gun. Returns the number of shots fired.
pub fn run(
    world: &mut World,
    timers: &mut TimerQueue,
    input: &AxisInput,
    audio_events: &mut Vec<AudioEvent>,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let ships: Vec<Entity> = world
        .query_mut::<(&Weapon, &PlayerShip)>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect();

    let fire_direction = input.fire_direction();
    let mut fired = 0;
    for ship in ships {
        if try_fire(world, timers, ship, fire_direction, audio_events, events).is_some() {
            fired += 1;
        }
    }
    fired
}

/// Fire one shot along `fire_direction` if the gun is ready.
///
/// Returns the spawned projectile. Attempts during cooldown, with a zero
/// direction, or from a ship without a transform are dropped, not queued.
pub fn try_fire(
    world: &mut World,
    timers: &mut TimerQueue,
    ship: Entity,
    fire_direction: DVec3,
    audio_events: &mut Vec<AudioEvent>,
    events: &mut Vec<GameEvent>,
) -> Option<Entity> {
    let weapon: Weapon = (*world.get::<&Weapon>(ship).ok()?).clone();
    if !weapon.can_fire || fire_direction.length_squared() <= 0.0 {
        return None;
    }
    let Ok(location) = world.get::<&Transform>(ship).map(|t| t.location) else {
        trace!(?ship, "shot skipped: ship has no transform");
        return None;
    };

    let rotation = Rotator::from_direction(fire_direction);
    let spawn_location = location + rotation.rotate_vector(weapon.gun_offset);
    let projectile = world_setup::spawn_projectile(
        world,
        spawn_location,
        rotation,
        weapon.projectile_speed,
        weapon.projectile_lifespan,
        weapon.projectile_radius,
    );

    let handle = timers.set_timer(
        weapon.fire_interval,
        TimerAction::ShotCooldownExpired { ship },
    );
    if let Ok(mut weapon) = world.get::<&mut Weapon>(ship) {
        weapon.can_fire = false;
        weapon.cooldown = Some(handle);
    }

    if let Some(sound) = weapon.fire_sound {
        audio_events.push(AudioEvent::PlaySound { sound, location });
    }
    events.push(GameEvent::ShotFired {
        location: spawn_location,
        rotation,
    });
    debug!(?ship, ?spawn_location, yaw = rotation.yaw, "shot fired");

    Some(projectile)
}

/// Cooldown timer callback: re-arm the gun.
/// Ships despawned while the timer was pending are ignored.
pub fn on_cooldown_expired(world: &mut World, ship: Entity, events: &mut Vec<GameEvent>) {
    let Ok(mut weapon) = world.get::<&mut Weapon>(ship) else {
        trace!(?ship, "cooldown expired for missing ship");
        return;
    };
    weapon.can_fire = true;
    weapon.cooldown = None;
    events.push(GameEvent::WeaponReady);
    trace!(?ship, "weapon ready");
}
