use crate::core::{Button, Controller};

/// Degrees subtracted from a held counter each frame.
pub const SPIN_STEP_DEGREES: f32 = 1.0;

/// Which spins are held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinInput {
    pub cubes: bool,
    pub podium: bool,
    pub world: bool,
}

impl SpinInput {
    pub fn from_controller(controller: &dyn Controller) -> Self {
        Self {
            cubes: controller.is_down(Button::Digit1),
            podium: controller.is_down(Button::Digit2),
            world: controller.is_down(Button::Digit3),
        }
    }
}

/// Angles of the cubes scene, in degrees.
///
/// Counters are unbounded; trigonometry takes care of the wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationState {
    pub cube_angles: [f32; 4],
    pub podium_angle: f32,
    pub world_angle: f32,
}

impl AnimationState {
    /// One frame of animation. Steps are per frame, not per second.
    pub fn advance(self, input: SpinInput) -> Self {
        let mut next = self;
        if input.cubes {
            for angle in next.cube_angles.iter_mut() {
                *angle -= SPIN_STEP_DEGREES;
            }
        }
        if input.podium {
            next.podium_angle -= SPIN_STEP_DEGREES;
        }
        if input.world {
            next.world_angle -= SPIN_STEP_DEGREES;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_input_keeps_state() {
        let state = AnimationState {
            cube_angles: [3.0, 2.0, 1.0, 0.0],
            podium_angle: 5.0,
            world_angle: -7.0,
        };
        assert_eq!(state.advance(SpinInput::default()), state);
    }

    #[test]
    fn cube_spin_moves_all_cubes_together() {
        let input = SpinInput {
            cubes: true,
            ..Default::default()
        };
        let state = AnimationState::default().advance(input);
        assert_eq!(state.cube_angles, [-1.0; 4]);
        assert_eq!(state.podium_angle, 0.0);
        assert_eq!(state.world_angle, 0.0);
    }

    #[test]
    fn angles_are_not_wrapped() {
        let input = SpinInput {
            world: true,
            ..Default::default()
        };
        let state = (0..400).fold(AnimationState::default(), |s, _| s.advance(input));
        assert_eq!(state.world_angle, -400.0);
    }
}
