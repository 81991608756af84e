//! Input bindings and the per-frame axis sample.
//!
//! Bindings are a closed set of identifiers rather than global name
//! constants. The host samples every axis once per frame into an
//! `AxisInput` and passes it to the simulation explicitly.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binding name did not match any known axis or action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown input binding: {0:?}")]
pub struct UnknownBinding(pub String);

/// Continuously sampled input channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAxis {
    MoveForward,
    MoveRight,
    FireForward,
    FireRight,
}

impl InputAxis {
    pub const ALL: [InputAxis; 4] = [
        InputAxis::MoveForward,
        InputAxis::MoveRight,
        InputAxis::FireForward,
        InputAxis::FireRight,
    ];

    pub fn binding_name(self) -> &'static str {
        match self {
            InputAxis::MoveForward => "MoveForward",
            InputAxis::MoveRight => "MoveRight",
            InputAxis::FireForward => "FireForward",
            InputAxis::FireRight => "FireRight",
        }
    }
}

impl fmt::Display for InputAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binding_name())
    }
}

impl FromStr for InputAxis {
    type Err = UnknownBinding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputAxis::ALL
            .into_iter()
            .find(|axis| axis.binding_name() == s)
            .ok_or_else(|| UnknownBinding(s.to_string()))
    }
}

/// Discrete press/release actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    SpeedBoost,
    VerticalBoost,
}

impl InputAction {
    pub const ALL: [InputAction; 2] = [InputAction::SpeedBoost, InputAction::VerticalBoost];

    pub fn binding_name(self) -> &'static str {
        match self {
            InputAction::SpeedBoost => "SpeedBoost",
            InputAction::VerticalBoost => "JumpAbility",
        }
    }
}

impl fmt::Display for InputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binding_name())
    }
}

impl FromStr for InputAction {
    type Err = UnknownBinding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputAction::ALL
            .into_iter()
            .find(|action| action.binding_name() == s)
            .ok_or_else(|| UnknownBinding(s.to_string()))
    }
}

/// One frame's worth of axis values, each in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisInput {
    pub move_forward: f64,
    pub move_right: f64,
    pub fire_forward: f64,
    pub fire_right: f64,
}

impl AxisInput {
    /// Build a sample from raw values. Out-of-range and non-finite values
    /// are clamped (non-finite reads as zero).
    pub fn new(move_forward: f64, move_right: f64, fire_forward: f64, fire_right: f64) -> Self {
        Self {
            move_forward: sanitize_axis(move_forward),
            move_right: sanitize_axis(move_right),
            fire_forward: sanitize_axis(fire_forward),
            fire_right: sanitize_axis(fire_right),
        }
    }

    pub fn movement(move_forward: f64, move_right: f64) -> Self {
        Self::new(move_forward, move_right, 0.0, 0.0)
    }

    pub fn firing(fire_forward: f64, fire_right: f64) -> Self {
        Self::new(0.0, 0.0, fire_forward, fire_right)
    }

    pub fn axis(&self, axis: InputAxis) -> f64 {
        match axis {
            InputAxis::MoveForward => self.move_forward,
            InputAxis::MoveRight => self.move_right,
            InputAxis::FireForward => self.fire_forward,
            InputAxis::FireRight => self.fire_right,
        }
    }

    pub fn set_axis(&mut self, axis: InputAxis, value: f64) {
        let value = sanitize_axis(value);
        match axis {
            InputAxis::MoveForward => self.move_forward = value,
            InputAxis::MoveRight => self.move_right = value,
            InputAxis::FireForward => self.fire_forward = value,
            InputAxis::FireRight => self.fire_right = value,
        }
    }

    /// Fire stick direction in the horizontal plane (not normalized).
    pub fn fire_direction(&self) -> DVec3 {
        DVec3::new(self.fire_forward, self.fire_right, 0.0)
    }
}

fn sanitize_axis(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_names_parse_back() {
        for axis in InputAxis::ALL {
            assert_eq!(axis.binding_name().parse::<InputAxis>(), Ok(axis));
        }
        for action in InputAction::ALL {
            assert_eq!(action.binding_name().parse::<InputAction>(), Ok(action));
        }
        assert_eq!(
            "JumpAbility".parse::<InputAction>(),
            Ok(InputAction::VerticalBoost)
        );
    }

    #[test]
    fn unknown_binding_is_rejected() {
        let err = "Strafe".parse::<InputAxis>().unwrap_err();
        assert_eq!(err, UnknownBinding("Strafe".to_string()));
        assert!(err.to_string().contains("Strafe"));
    }

    #[test]
    fn axis_values_are_clamped() {
        let input = AxisInput::new(2.0, -3.0, f64::NAN, 0.25);
        assert_eq!(input.move_forward, 1.0);
        assert_eq!(input.move_right, -1.0);
        assert_eq!(input.fire_forward, 0.0);
        assert_eq!(input.fire_right, 0.25);

        let mut input = AxisInput::default();
        input.set_axis(InputAxis::FireForward, 7.0);
        assert_eq!(input.axis(InputAxis::FireForward), 1.0);
        assert_eq!(input.fire_direction(), DVec3::new(1.0, 0.0, 0.0));
    }
}
