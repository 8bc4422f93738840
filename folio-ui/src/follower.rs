//! The pointer follower: a marker that trails the real pointer.
//!
//! Two inputs and one clock drive it:
//!
//! - pointer moves overwrite `target`; nothing else happens until the next tick
//! - pointer-over events recompute `hovering` immediately from the hit target
//! - each frame, [`PointerFollower::tick`] closes a fixed fraction (`ease`) of
//!   the remaining distance between `current` and `target`
//!
//! The per-axis update `current += (target - current) * ease` is an
//! exponential decay. With `ease` in `(0, 1]` it never overshoots, and a
//! bounded jump converges to within any epsilon after a bounded number of ticks.
//! Dropped frames need no resynchronisation: the next tick simply starts from
//! wherever `current` is.
//!
//! ```
//! use folio_ui::follower::{FollowerConfig, PointerFollower};
//! use folio_ui::px::PxPosition;
//!
//! let mut follower = PointerFollower::new(FollowerConfig::default());
//! follower.on_pointer_move(PxPosition::new(100.0, 100.0));
//!
//! let first = follower.tick().position;
//! assert!((first.x - 15.0).abs() < 1e-9);
//! let second = follower.tick().position;
//! assert!((second.x - 27.75).abs() < 1e-9);
//! ```

use tracing::trace;

use crate::{cursor::HoverTarget, px::PxPosition};

/// Fraction of the remaining distance closed per tick.
pub const DEFAULT_EASE: f64 = 0.15;

/// Marker scale while the pointer is over an interactive element.
pub const DEFAULT_HOVER_SCALE: f64 = 1.5;

/// Marker scale otherwise.
pub const REST_SCALE: f64 = 1.0;

/// Tunables for [`PointerFollower`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerConfig {
    /// Damping factor in `(0, 1]`.
    pub ease: f64,
    /// Scale applied while hovering an interactive element.
    pub hover_scale: f64,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            ease: DEFAULT_EASE,
            hover_scale: DEFAULT_HOVER_SCALE,
        }
    }
}

/// The follower's transient state. Created on mount, discarded on unmount.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FollowerState {
    /// Last observed real pointer position.
    pub target: PxPosition,
    /// Smoothed position actually rendered.
    pub current: PxPosition,
    /// Whether the last pointer-over target was inside an interactive element.
    pub hovering: bool,
}

/// What the host renders each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Centre of the marker in viewport pixels.
    pub position: PxPosition,
    pub scale: f64,
}

impl MarkerStyle {
    /// CSS `transform` value: centre the marker on its position, then scale.
    pub fn transform(&self) -> String {
        format!("translate(-50%, -50%) scale({})", self.scale)
    }
}

/// Smoothing filter plus hover flag.
#[derive(Debug, Clone)]
pub struct PointerFollower {
    state: FollowerState,
    config: FollowerConfig,
}

impl PointerFollower {
    pub fn new(config: FollowerConfig) -> Self {
        Self {
            state: FollowerState::default(),
            config,
        }
    }

    /// Records the latest pointer position. `current` is left for the next tick.
    pub fn on_pointer_move(&mut self, position: PxPosition) {
        self.state.target = position;
    }

    /// Recomputes `hovering` from the element the pointer just entered.
    pub fn on_pointer_over(&mut self, target: &dyn HoverTarget) {
        let hovering = target.is_within_interactive();
        if hovering != self.state.hovering {
            trace!(hovering, "hover changed");
        }
        self.state.hovering = hovering;
    }

    /// Advances `current` one step toward `target` and returns the marker to render.
    pub fn tick(&mut self) -> MarkerStyle {
        self.state.current = self
            .state
            .current
            .approach(self.state.target, self.config.ease);
        self.marker()
    }

    /// The marker for the current state, without advancing.
    pub fn marker(&self) -> MarkerStyle {
        MarkerStyle {
            position: self.state.current,
            scale: if self.state.hovering {
                self.config.hover_scale
            } else {
                REST_SCALE
            },
        }
    }

    /// Whether `current` is within `epsilon` of `target` on both axes.
    pub fn is_settled(&self, epsilon: f64) -> bool {
        self.state.current.max_axis_distance(self.state.target) < epsilon
    }

    pub fn state(&self) -> &FollowerState {
        &self.state
    }

    pub fn config(&self) -> &FollowerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::NonInteractive;

    use super::*;

    const EPSILON: f64 = 0.01;

    struct Interactive;

    impl HoverTarget for Interactive {
        fn is_within_interactive(&self) -> bool {
            true
        }
    }

    fn follower() -> PointerFollower {
        PointerFollower::new(FollowerConfig::default())
    }

    #[test]
    fn known_first_and_second_ticks() {
        let mut follower = follower();
        follower.on_pointer_move(PxPosition::new(100.0, 100.0));

        let first = follower.tick().position;
        assert!((first.x - 15.0).abs() < 1e-9);
        assert!((first.y - 15.0).abs() < 1e-9);

        let second = follower.tick().position;
        assert!((second.x - 27.75).abs() < 1e-9);
        assert!((second.y - 27.75).abs() < 1e-9);
    }

    #[test]
    fn pointer_move_does_not_touch_current() {
        let mut follower = follower();
        follower.on_pointer_move(PxPosition::new(640.0, 480.0));
        assert_eq!(follower.state().current, PxPosition::ZERO);
        assert_eq!(follower.state().target, PxPosition::new(640.0, 480.0));
    }

    #[test]
    fn only_latest_move_between_ticks_is_observed() {
        let mut coalesced = follower();
        coalesced.on_pointer_move(PxPosition::new(900.0, -300.0));
        coalesced.on_pointer_move(PxPosition::new(10.0, 20.0));
        coalesced.on_pointer_move(PxPosition::new(200.0, 40.0));

        let mut direct = follower();
        direct.on_pointer_move(PxPosition::new(200.0, 40.0));

        assert_eq!(coalesced.tick(), direct.tick());
    }

    #[test]
    fn converges_without_overshoot() {
        let targets = [
            PxPosition::new(1920.0, 1080.0),
            PxPosition::new(-250.0, 30.5),
            PxPosition::new(0.0, 0.0),
            PxPosition::new(12.25, 8000.0),
        ];
        let mut follower = follower();
        for target in targets {
            follower.on_pointer_move(target);
            let mut ticks = 0;
            while !follower.is_settled(EPSILON) {
                let before = follower.state().current;
                let after = follower.tick().position;
                for (b, a, t) in [(before.x, after.x, target.x), (before.y, after.y, target.y)] {
                    // The step stays between the previous position and the target.
                    assert!((a - b).abs() <= (t - b).abs() + 1e-9);
                    assert!((t - a) * (t - b) >= 0.0);
                }
                ticks += 1;
                assert!(ticks < 200, "did not converge toward {target}");
            }
            assert!(follower.state().current.max_axis_distance(target) < EPSILON);
        }
    }

    #[test]
    fn converged_state_is_stable() {
        let mut follower = follower();
        follower.on_pointer_move(PxPosition::new(333.0, 777.0));
        while !follower.is_settled(EPSILON) {
            follower.tick();
        }
        for _ in 0..50 {
            let before = follower.state().current;
            let after = follower.tick().position;
            assert!(before.max_axis_distance(after) < EPSILON);
        }
    }

    #[test]
    fn hover_sets_scale_independently_of_tick() {
        let mut follower = follower();
        assert_eq!(follower.marker().scale, REST_SCALE);

        follower.on_pointer_over(&Interactive);
        assert!(follower.state().hovering);
        assert_eq!(follower.marker().scale, DEFAULT_HOVER_SCALE);
        assert_eq!(follower.state().current, PxPosition::ZERO);

        follower.on_pointer_over(&NonInteractive);
        assert_eq!(follower.tick().scale, REST_SCALE);
    }

    #[test]
    fn custom_config_is_honoured() {
        let mut follower = PointerFollower::new(FollowerConfig {
            ease: 0.5,
            hover_scale: 2.0,
        });
        follower.on_pointer_move(PxPosition::new(8.0, -8.0));
        follower.on_pointer_over(&Interactive);
        let marker = follower.tick();
        assert_eq!(marker.position, PxPosition::new(4.0, -4.0));
        assert_eq!(marker.scale, 2.0);
        assert_eq!(marker.transform(), "translate(-50%, -50%) scale(2)");
    }
}
