use planetsim::configuration::config::ScenarioConfig;
use planetsim::simulation::forces::{AccelSet, NewtonianGravity};
use planetsim::simulation::integrator::euler_integrator;
use planetsim::simulation::params::{Parameters, G_SI};
use planetsim::simulation::scenario::Scenario;
use planetsim::simulation::states::{Body, NVec2, System, AU, DAY};

/// Build a simple 2-body System separated along the x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let b1 = Body::new(
        [-dist / 2.0, 0.0].into(),
        NVec2::zeros(),
        m1,
        1.0,
        [1.0, 1.0, 1.0],
    );
    let b2 = Body::new(
        [dist / 2.0, 0.0].into(),
        NVec2::zeros(),
        m2,
        1.0,
        [1.0, 1.0, 1.0],
    );
    System {
        bodies: vec![b1, b2],
        t: 0.0,
    }
}

/// Sun (anchor, at origin) plus Earth at -1 AU on a near-circular orbit,
/// the two-body core of the default scenario
pub fn sun_earth_system() -> System {
    let mut sun = Body::new(
        NVec2::zeros(),
        NVec2::zeros(),
        1.98892e30,
        30.0,
        [1.0, 1.0, 0.0],
    );
    sun.anchor = true;

    let earth = Body::new(
        [-1.0 * AU, 0.0].into(),
        [0.0, 29_783.0].into(),
        5.9742e24,
        16.0,
        [0.4, 0.6, 0.9],
    );

    System {
        bodies: vec![sun, earth],
        t: 0.0,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        h0: 0.001,
        eps2: 0.0,
        G: 0.1,
        trail_cap: None,
    }
}

/// Solar-scale parameters: SI constants, one-day step
pub fn solar_params() -> Parameters {
    Parameters {
        h0: DAY,
        eps2: 0.0,
        G: G_SI,
        trail_cap: None,
    }
}

/// Build a gravity term + AccelSet
pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        G: p.G,
        eps2: p.eps2,
    })
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn attraction_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let b0 = &sys.bodies[0];
    let b1 = &sys.bodies[1];

    let f01 = b0.attraction(b1, 0.1, 0.0);
    let f10 = b1.attraction(b0, 0.1, 0.0);

    // Equal magnitude, opposite direction, exactly: both calls see the
    // same separation and masses
    assert!((f01 + f10).norm() < 1e-15, "forces not antisymmetric: {:?} vs {:?}", f01, f10);
    assert!(f01.norm() > 0.0);
}

#[test]
fn attraction_magnitude_matches_inverse_square() {
    let sys = two_body_system(2.0, 5.0, 7.0);
    let f = sys.bodies[0].attraction(&sys.bodies[1], 0.1, 0.0);

    let expected = 0.1 * 5.0 * 7.0 / (2.0 * 2.0);
    assert!((f.norm() - expected).abs() < 1e-12 * expected, "got {}, want {}", f.norm(), expected);

    // Directed from body 0 toward body 1 (+x)
    assert!(f.x > 0.0);
    assert!(f.y == 0.0);
}

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let net = acc[0] * sys.bodies[0].m + acc[1] * sys.bodies[1].m;

    assert!(net.norm() < 1e-12, "Net momentum not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let dx = sys.bodies[1].x - sys.bodies[0].x;
    let a1 = acc[0];

    // Should point in same direction as +dx (attraction)
    assert!(dx.norm() > 0.0);
    assert!(a1.dot(&dx) > 0.0, "Acceleration is not toward second body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0, 1.0, 1.0);
    let sys_2r = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc_r = vec![Default::default(); 2];
    let mut acc_2r = vec![Default::default(); 2];

    forces.accumulate_accels(sys_r.t, &sys_r, &mut acc_r);
    forces.accumulate_accels(sys_2r.t, &sys_2r, &mut acc_2r);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-3, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_softening_prevents_blowup() {
    let mut p = test_params();
    p.eps2 = 0.1;

    let sys = two_body_system(1e-9, 1.0, 1.0);
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    assert!(acc[0].norm() < 1e9, "Softening failed; acceleration too large");
}

// ==================================================================================
// Anchor distance tests
// ==================================================================================

#[test]
fn anchor_distance_exact_on_axis() {
    // d chosen so d*d and its square root are exactly representable
    let d = 2.0e9;
    let mut sys = System {
        bodies: vec![
            Body::new(NVec2::zeros(), NVec2::zeros(), 1.0e30, 1.0, [1.0, 1.0, 1.0]),
            Body::new([d, 0.0].into(), NVec2::zeros(), 1.0e24, 1.0, [1.0, 1.0, 1.0]),
        ],
        t: 0.0,
    };
    sys.bodies[0].anchor = true;

    assert_eq!(sys.bodies[1].dist_to_anchor, 0.0); // untouched before refresh

    sys.refresh_anchor_distances();

    assert_eq!(sys.bodies[1].dist_to_anchor, d);
    assert_eq!(sys.bodies[0].dist_to_anchor, 0.0); // anchor reports no distance
}

#[test]
fn anchor_distance_tracks_orbit() {
    let mut sys = sun_earth_system();
    let p = solar_params();
    let forces = gravity_set(&p);

    euler_integrator(&mut sys, &forces, &p);

    let expected = (sys.bodies[1].x - sys.bodies[0].x).norm();
    assert_eq!(sys.bodies[1].dist_to_anchor, expected);
    assert!((expected - AU).abs() < 0.01 * AU);
}

#[test]
fn no_anchor_leaves_distances_alone() {
    let mut sys = two_body_system(1.0, 1.0, 1.0);
    sys.refresh_anchor_distances();
    assert_eq!(sys.bodies[0].dist_to_anchor, 0.0);
    assert_eq!(sys.bodies[1].dist_to_anchor, 0.0);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn trail_grows_one_point_per_step() {
    let mut sys = sun_earth_system();
    let p = solar_params();
    let forces = gravity_set(&p);

    let steps = 50;
    for _ in 0..steps {
        euler_integrator(&mut sys, &forces, &p);
    }

    for b in &sys.bodies {
        assert_eq!(b.trail.len(), steps);
    }
    // Latest trail point is the current position
    assert_eq!(*sys.bodies[1].trail.back().unwrap(), sys.bodies[1].x);
}

#[test]
fn trail_cap_bounds_length() {
    let mut sys = sun_earth_system();
    let mut p = solar_params();
    p.trail_cap = Some(10);
    let forces = gravity_set(&p);

    for _ in 0..50 {
        euler_integrator(&mut sys, &forces, &p);
    }

    for b in &sys.bodies {
        assert_eq!(b.trail.len(), 10);
    }
}

#[test]
fn integration_is_deterministic() {
    let p = solar_params();

    let mut sys_a = sun_earth_system();
    let mut sys_b = sun_earth_system();
    let forces_a = gravity_set(&p);
    let forces_b = gravity_set(&p);

    for _ in 0..100 {
        euler_integrator(&mut sys_a, &forces_a, &p);
        euler_integrator(&mut sys_b, &forces_b, &p);
    }

    for (a, b) in sys_a.bodies.iter().zip(sys_b.bodies.iter()) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.v, b.v);
        assert_eq!(a.dist_to_anchor, b.dist_to_anchor);
    }
    assert_eq!(sys_a.t, sys_b.t);
}

#[test]
fn time_advances_by_exactly_h0() {
    let mut sys = two_body_system(1.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    for _ in 0..10 {
        euler_integrator(&mut sys, &forces, &p);
    }

    assert!((sys.t - 10.0 * p.h0).abs() < 1e-12);
}

#[test]
fn earth_orbit_stays_near_one_au_for_a_year() {
    let mut sys = sun_earth_system();
    let p = solar_params();
    let forces = gravity_set(&p);

    // One simulated year at one day per step
    for _ in 0..365 {
        euler_integrator(&mut sys, &forces, &p);
    }

    let dist = sys.bodies[1].dist_to_anchor;
    let drift = (dist - AU).abs() / AU;
    assert!(drift < 0.05, "Earth drifted {:.1}% from 1 AU", drift * 100.0);
}

// ==================================================================================
// Scenario / configuration tests
// ==================================================================================

#[test]
fn solar_system_scenario_shape() {
    let scenario = Scenario::solar_system();

    assert_eq!(scenario.system.bodies.len(), 5);
    assert_eq!(scenario.system.anchor_index(), Some(0));
    assert_eq!(scenario.parameters.h0, DAY);
    assert_eq!(scenario.parameters.G, G_SI);
    assert!(scenario.system.bodies.iter().all(|b| b.m > 0.0));
    assert!(scenario.system.bodies.iter().all(|b| b.trail.is_empty()));
}

#[test]
fn scenario_config_defaults_from_minimal_yaml() {
    let yaml = r#"
bodies:
  - x: [ 0.0, 0.0 ]
    m: 1.0e30
    radius: 10.0
    anchor: true
  - x: [ 1.496e11, 0.0 ]
    v: [ 0.0, -29783.0 ]
    m: 5.9742e24
    radius: 5.0
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("parse failed");

    assert_eq!(cfg.parameters.h0, DAY);
    assert_eq!(cfg.parameters.G, G_SI);
    assert_eq!(cfg.parameters.eps2, 0.0);
    assert_eq!(cfg.parameters.trail_cap, None);
    assert_eq!(cfg.display.px_per_au, 200.0);
    assert_eq!(cfg.bodies[0].color, [1.0, 1.0, 1.0]);
    assert!(!cfg.bodies[1].anchor);

    let scenario = Scenario::build(cfg);
    assert_eq!(scenario.system.anchor_index(), Some(0));
    assert_eq!(scenario.system.bodies[1].v, NVec2::new(0.0, -29_783.0));
    assert_eq!(scenario.system.t, 0.0);
}

#[test]
fn shipped_solar_system_yaml_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/solar_system.yaml");
    let text = std::fs::read_to_string(path).expect("missing scenarios/solar_system.yaml");
    let cfg: ScenarioConfig = serde_yaml::from_str(&text).expect("parse failed");

    let scenario = Scenario::build(cfg);
    assert_eq!(scenario.system.bodies.len(), 5);
    assert_eq!(scenario.system.anchor_index(), Some(0));
}
