//! Force / acceleration contributors for the simulation
//!
//! Defines the acceleration trait and the direct pairwise
//! Newtonian gravity term

use crate::simulation::states::{Body, NVec2, System};

impl Body {
    /// Gravitational force exerted on `self` by `other`.
    ///
    /// With `eps2 = 0` this is the exact inverse-square law:
    /// magnitude `g * m1 * m2 / r^2` directed along the separation
    /// vector. A positive `eps2` is added to the squared separation in
    /// the denominator, smoothing close encounters.
    ///
    /// Coincident bodies with `eps2 = 0` divide by zero and yield a
    /// non-finite force; scenarios must not start (or evolve) two bodies
    /// onto the same point unless softening is enabled.
    pub fn attraction(&self, other: &Body, g: f64, eps2: f64) -> NVec2 {
        // r points from self toward other; attraction pulls along +r
        let r = other.x - self.x;
        let d2 = r.norm_squared() + eps2;

        // 1 / |r_soft|^3, so that f = coef * r has magnitude
        // g * m1 * m2 / d^2 when eps2 = 0
        let inv_d = d2.sqrt().recip();
        let inv_d3 = inv_d * inv_d * inv_d;

        g * self.m * other.m * inv_d3 * r
    }
}

/// Collection of acceleration terms (gravity, and whatever comes later)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Direct N^2 Newtonian gravity.
///
/// Every unordered pair is evaluated once via [`Body::attraction`] and the
/// resulting force applied to both bodies with opposite sign, so Newton's
/// third law holds by construction. `eps2` is the optional softening
/// floor; the reference scenarios run with `eps2 = 0`.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Force on i from j; the pull on j is equal and opposite
                let f = bi.attraction(bj, self.G, self.eps2);

                out[i] += f / bi.m;
                out[j] -= f / bj.m;
            }
        }
    }
}
