pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, NVec2, AU, DAY};
pub use simulation::params::{Parameters, G_SI};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::scenario::{Display, Scenario};

pub use configuration::config::{BodyConfig, DisplayConfig, ParametersConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;
