//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`DisplayConfig`]    – presentation settings consumed only by the viewer
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field except body position, mass, and draw radius has a default,
//! so a minimal scenario only lists its bodies.
//!
//! # YAML format
//! A two-body scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   h0: 86400.0            # timestep in seconds (default: one day)
//!   eps2: 0.0              # softening epsilon^2 (default: none)
//!   G: 6.67428e-11         # gravitational constant
//!   trail_cap: 5000        # optional bound on trail length (default: unbounded)
//!
//! display:
//!   px_per_au: 200.0       # screen pixels per astronomical unit
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]
//!     m: 1.98892e30
//!     radius: 30.0
//!     color: [ 1.0, 1.0, 0.0 ]
//!     anchor: true
//!   - x: [ -1.496e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [ 0.39, 0.58, 0.93 ]
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;

use crate::simulation::params::G_SI;
use crate::simulation::states::DAY;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub h0: f64,                  // time step size (s)
    pub eps2: f64,                // softening - prevents singular forces at zero separation
    pub G: f64,                   // gravitational constant
    pub trail_cap: Option<usize>, // bound on per-body trail length; None = unbounded
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            h0: DAY,
            eps2: 0.0,
            G: G_SI,
            trail_cap: None,
        }
    }
}

/// Presentation settings, injected into the viewer and never read by the
/// physics
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub px_per_au: f64, // screen pixels per astronomical unit
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { px_per_au: 200.0 }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position (m)
    #[serde(default)]
    pub v: [f64; 2], // initial velocity (m/s), defaults to rest
    pub m: f64,      // mass (kg)
    pub radius: f64, // draw radius in pixels
    #[serde(default = "default_color")]
    pub color: [f32; 3], // sRGB draw color, defaults to white
    #[serde(default)]
    pub anchor: bool, // marks the star; at most one per scenario
}

fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // global numerical and physical parameters
    #[serde(default)]
    pub display: DisplayConfig, // viewer settings
    pub bodies: Vec<BodyConfig>, // list of bodies that define the initial state
}
