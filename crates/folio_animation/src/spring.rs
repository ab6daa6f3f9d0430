//! Spring physics animation
//!
//! A damped harmonic oscillator pulled toward a target value, integrated
//! with RK4 so large frame deltas stay stable.

use serde::{Deserialize, Serialize};

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Critically damped spring used for page scrolling: no overshoot past
    /// the target section, settles in well under a second
    pub fn smooth_scroll() -> Self {
        Self::critically_damped(170.0, 1.0)
    }

    /// A gentle spring with a little overshoot
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// A stiff, snappy spring
    pub fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Spring with damping set to exactly the critical value
    pub fn critically_damped(stiffness: f32, mass: f32) -> Self {
        let mut config = Self::new(stiffness, 0.0, mass);
        config.damping = config.critical_damping();
        config
    }

    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Will oscillate around the target
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::smooth_scroll()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Half a pixel: anything closer is visually at rest
    const EPSILON: f32 = 0.5;
    /// Pixels per second below which motion is imperceptible
    const VELOCITY_EPSILON: f32 = 5.0;

    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Retarget without touching velocity, so interruptions stay smooth
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` and stop
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < Self::EPSILON
            && self.velocity.abs() < Self::VELOCITY_EPSILON
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Once settled the spring snaps exactly onto its target.
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let (x, v) = (self.value, self.velocity);
        let half = dt * 0.5;

        let a1 = self.acceleration(x, v);
        let a2 = self.acceleration(x + v * half, v + a1 * half);
        let v2 = v + a1 * half;
        let a3 = self.acceleration(x + v2 * half, v + a2 * half);
        let v3 = v + a2 * half;
        let a4 = self.acceleration(x + v3 * dt, v + a3 * dt);
        let v4 = v + a3 * dt;

        self.velocity += (a1 + 2.0 * a2 + 2.0 * a3 + a4) * dt / 6.0;
        self.value += (v + 2.0 * v2 + 2.0 * v3 + v4) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}
