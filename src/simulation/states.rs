//! Core state types for the planet simulation.
//!
//! Defines the body/system structs:
//! - `Body`   one gravitating point mass plus its presentation data
//! - `System` the list of bodies and the current simulation time `t`
//!
//! Bodies are addressed by stable index into `System::bodies`; nothing in
//! the physics relies on reference identity.

use std::collections::VecDeque;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Astronomical unit, the Sun-Earth distance in meters.
pub const AU: f64 = 149.6e9;

/// One simulated day in seconds, the default timestep.
pub const DAY: f64 = 86_400.0;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg), > 0
    pub radius: f64, // draw radius in pixels, no physical meaning
    pub color: [f32; 3], // sRGB draw color
    pub anchor: bool, // the star; distances are reported relative to it
    pub dist_to_anchor: f64, // meters, 0.0 until first refreshed
    pub trail: VecDeque<NVec2>, // past positions, appended once per step
}

impl Body {
    /// Build a body at rest with an empty trail.
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64, color: [f32; 3]) -> Self {
        Self {
            x,
            v,
            m,
            radius,
            color,
            anchor: false,
            dist_to_anchor: 0.0,
            trail: VecDeque::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time (s)
}

impl System {
    /// Index of the anchor body, if the scenario has one.
    /// Scenarios are expected to mark at most one body; the first wins.
    pub fn anchor_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.anchor)
    }

    /// Recompute every non-anchor body's distance to the anchor from the
    /// current positions. The distance is the exact Euclidean separation,
    /// independent of any force softening. No-op without an anchor.
    pub fn refresh_anchor_distances(&mut self) {
        let Some(ai) = self.anchor_index() else {
            return;
        };
        let anchor_x = self.bodies[ai].x;
        for (i, b) in self.bodies.iter_mut().enumerate() {
            if i != ai {
                b.dist_to_anchor = (b.x - anchor_x).norm();
            }
        }
    }

    /// Append the current position to each body's trail.
    /// With `cap = None` trails grow without bound; with `cap = Some(n)`
    /// the oldest points are evicted once the bound is hit.
    pub fn push_trails(&mut self, cap: Option<usize>) {
        for b in self.bodies.iter_mut() {
            b.trail.push_back(b.x);
            if let Some(n) = cap {
                while b.trail.len() > n {
                    b.trail.pop_front();
                }
            }
        }
    }
}
