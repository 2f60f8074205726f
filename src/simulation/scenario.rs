//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - presentation settings (`Display`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems. `Scenario::solar_system` is the
//! compiled-in default: the Sun plus the four inner planets.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::{Parameters, G_SI};
use crate::simulation::states::{Body, NVec2, System, AU, DAY};

/// Presentation settings carried alongside the physics state.
/// The viewer reads these; the physics never does.
#[derive(Debug, Clone)]
pub struct Display {
    pub px_per_au: f64, // screen pixels per astronomical unit
}

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it contains the parameters, display settings, current system state,
/// and the set of active force laws (accelerations)
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub display: Display,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Map a deserialized [`ScenarioConfig`] into the runtime bundle.
    pub fn build(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| Body {
                x: NVec2::new(bc.x[0], bc.x[1]),
                v: NVec2::new(bc.v[0], bc.v[1]),
                m: bc.m,
                radius: bc.radius,
                color: bc.color,
                anchor: bc.anchor,
                dist_to_anchor: 0.0,
                trail: Default::default(),
            })
            .collect();

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            eps2: p_cfg.eps2,
            G: p_cfg.G,
            trail_cap: p_cfg.trail_cap,
        };

        let display = Display {
            px_per_au: cfg.display.px_per_au,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        Self {
            parameters,
            display,
            system,
            forces,
        }
    }

    /// The compiled-in default scenario: Sun (anchor) and the four inner
    /// planets on near-circular orbits, one simulated day per step.
    pub fn solar_system() -> Self {
        let mut sun = Body::new(
            NVec2::zeros(),
            NVec2::zeros(),
            1.98892e30,
            30.0,
            [1.0, 1.0, 0.0], // yellow
        );
        sun.anchor = true;

        let earth = Body::new(
            NVec2::new(-1.0 * AU, 0.0),
            NVec2::new(0.0, 29_783.0),
            5.9742e24,
            16.0,
            [100.0 / 255.0, 149.0 / 255.0, 237.0 / 255.0], // cornflower blue
        );

        let mars = Body::new(
            NVec2::new(-1.534 * AU, 0.0),
            NVec2::new(0.0, 24_077.0),
            6.39e23,
            12.0,
            [226.0 / 255.0, 11.0 / 255.0, 26.0 / 255.0], // red
        );

        let mercury = Body::new(
            NVec2::new(0.387 * AU, 0.0),
            NVec2::new(0.0, -47_400.0),
            3.30e23,
            8.0,
            [129.0 / 255.0, 29.0 / 255.0, 29.0 / 255.0], // dark red
        );

        let venus = Body::new(
            NVec2::new(0.723 * AU, 0.0),
            NVec2::new(0.0, -35_020.0),
            4.8685e24,
            14.0,
            [218.0 / 255.0, 147.0 / 255.0, 197.0 / 255.0], // rose
        );

        let parameters = Parameters {
            h0: DAY,
            eps2: 0.0,
            G: G_SI,
            trail_cap: None,
        };

        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        Self {
            parameters,
            display: Display { px_per_au: 200.0 },
            system: System {
                bodies: vec![sun, earth, mars, mercury, venus],
                t: 0.0,
            },
            forces,
        }
    }
}
