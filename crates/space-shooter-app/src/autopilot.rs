//! Seeded autopilot: wanders the arena, sweeps fire and pulses abilities.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use space_shooter_core::commands::PlayerCommand;
use space_shooter_core::input::{AxisInput, InputAction};

/// Ticks between heading changes.
const RETARGET_TICKS: u32 = 90;
/// Chance per retarget of pressing the speed boost.
const SPEED_BOOST_CHANCE: f64 = 0.3;
/// Chance per retarget of pressing the vertical boost.
const VERTICAL_BOOST_CHANCE: f64 = 0.1;
/// Aim rotation speed in radians per tick.
const AIM_SWEEP_RATE: f64 = 0.05;

/// Produces one input frame per tick plus occasional ability commands.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: ChaCha8Rng,
    ticks_until_retarget: u32,
    movement: (f64, f64),
    aim_angle: f64,
    speed_boost_held: bool,
    vertical_boost_held: bool,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            ticks_until_retarget: 0,
            movement: (0.0, 0.0),
            aim_angle: 0.0,
            speed_boost_held: false,
            vertical_boost_held: false,
        }
    }

    /// Advance one tick. Returns the axis input for this tick and any
    /// ability commands to queue before it.
    pub fn next_frame(&mut self) -> (AxisInput, Vec<PlayerCommand>) {
        let mut commands = Vec::new();

        if self.ticks_until_retarget == 0 {
            self.retarget(&mut commands);
            self.ticks_until_retarget = RETARGET_TICKS;
        }
        self.ticks_until_retarget -= 1;

        self.aim_angle = (self.aim_angle + AIM_SWEEP_RATE) % std::f64::consts::TAU;
        let input = AxisInput::new(
            self.movement.0,
            self.movement.1,
            self.aim_angle.cos(),
            self.aim_angle.sin(),
        );
        (input, commands)
    }

    fn retarget(&mut self, commands: &mut Vec<PlayerCommand>) {
        self.movement = (self.rng.gen_range(-1.0..=1.0), self.rng.gen_range(-1.0..=1.0));

        let want_speed = self.rng.gen_bool(SPEED_BOOST_CHANCE);
        toggle(
            commands,
            &mut self.speed_boost_held,
            want_speed,
            InputAction::SpeedBoost,
        );

        let want_vertical = self.rng.gen_bool(VERTICAL_BOOST_CHANCE);
        toggle(
            commands,
            &mut self.vertical_boost_held,
            want_vertical,
            InputAction::VerticalBoost,
        );
    }

    /// Commands that release every held ability.
    pub fn release_all(&mut self) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        toggle(
            &mut commands,
            &mut self.speed_boost_held,
            false,
            InputAction::SpeedBoost,
        );
        toggle(
            &mut commands,
            &mut self.vertical_boost_held,
            false,
            InputAction::VerticalBoost,
        );
        commands
    }
}

fn toggle(commands: &mut Vec<PlayerCommand>, held: &mut bool, want: bool, action: InputAction) {
    match (*held, want) {
        (false, true) => commands.push(PlayerCommand::PressAction { action }),
        (true, false) => commands.push(PlayerCommand::ReleaseAction { action }),
        _ => {}
    }
    *held = want;
}
