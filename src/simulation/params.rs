//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size `h0`,
//! - softening and gravitational constant (`eps2`, `G`),
//! - optional bound on trail length

/// Gravitational constant in SI units.
pub const G_SI: f64 = 6.67428e-11;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // step size (s); one step always advances exactly h0
    pub eps2: f64, // softening epsilon^2; 0.0 = exact inverse-square law
    pub G: f64, // gravitational constant
    pub trail_cap: Option<usize>, // None = unbounded trails
}
