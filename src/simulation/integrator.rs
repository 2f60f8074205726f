//! Fixed-step time integrator for the planet simulation
//!
//! A single first-order (semi-implicit Euler) scheme driven by
//! `AccelSet` and `Parameters`: velocities are kicked from accelerations
//! evaluated at the pre-step positions, then positions drift with the
//! already-updated velocities. Not symplectic in the velocity-Verlet
//! sense; energy drifts slowly and tests bound that drift instead of
//! expecting exact conservation.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one step of duration `params.h0`.
///
/// Snapshot semantics: all accelerations are computed from the pre-step
/// state before any body moves, so the result does not depend on the
/// order bodies appear in the list (beyond floating-point rounding of
/// the force sum itself).
///
/// After the kick/drift update the per-body bookkeeping runs: anchor
/// distances are refreshed and the new position is appended to each
/// trail.
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.h0; // time step dt

    // a[i] holds the net acceleration of body i at the current time,
    // accumulated from the pre-step positions of all bodies
    let mut a = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a);

    // Kick then drift, per body:
    // v_n+1 = v_n + dt * a_n
    // x_n+1 = x_n + dt * v_n+1
    for (b, a) in sys.bodies.iter_mut().zip(a.iter()) {
        b.v += dt * *a;
        b.x += dt * b.v;
    }

    // Increment the system time by one full step
    sys.t += dt;

    // Bookkeeping on the post-step positions
    sys.refresh_anchor_distances();
    sys.push_trails(params.trail_cap);
}
