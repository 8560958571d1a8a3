use std::f64::consts::{ PI, SQRT_2 };
use sqwell::{
    error::WellError,
    solve::integrate,
    well::Well,
};

#[test]
fn samples_include_far_wall() {
    let wf = integrate(&Well::default(), PI * PI / 2.0, 0.1).unwrap();
    assert_eq!(wf.len(), 11);
    assert_eq!(wf.x.len(), wf.psi.len());
    assert_eq!(wf.x[0], 0.0);
    assert!((wf.x[10] - 1.0).abs() < 1e-12);
    for (i, xi) in wf.x.iter().enumerate() {
        assert!((xi - 0.1 * i as f64).abs() < 1e-12);
    }
}

#[test]
fn first_sample_is_state_after_one_step() {
    let wf = integrate(&Well::default(), PI * PI / 2.0, 0.1).unwrap();
    assert_eq!(wf.psi[0], 0.1);
}

#[test]
fn sample_count_ignores_energy() {
    let well = Well::default();
    let counts: Vec<usize>
        = [0.0, 1.0, 50.0, 500.0].into_iter()
        .map(|e| integrate(&well, e, 2e-3).unwrap().len())
        .collect();
    assert!(counts.iter().all(|&n| n == 501));
}

#[test]
fn fine_steps_approach_sine_modes() {
    let dx = 1e-4;
    let well = Well::default();
    for n in 1..=3 {
        let wf = integrate(&well, well.energy(n), dx).unwrap();
        let normed = sqwell::utils::wf_normalized(&wf.psi, dx).unwrap();
        let k = n as f64 * PI;
        let worst
            = wf.x.iter().zip(&normed)
            .map(|(x, q)| (q - SQRT_2 * (k * x).sin()).abs())
            .fold(0.0_f64, f64::max);
        assert!(worst < 1e-2, "n = {}: max deviation {}", n, worst);
    }
}

#[test]
fn non_positive_step_is_rejected() {
    let well = Well::default();
    for dx in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        let err = integrate(&well, 1.0, dx).unwrap_err();
        assert!(matches!(err, WellError::BadStep(_)), "dx = {}: {:?}", dx, err);
    }
}

#[test]
fn non_finite_energy_is_rejected() {
    let err = integrate(&Well::default(), f64::NAN, 0.1).unwrap_err();
    assert!(matches!(err, WellError::BadEnergy(_)));
}

#[test]
fn overflow_is_reported_as_divergence() {
    let err = integrate(&Well::default(), 1e200, 0.5).unwrap_err();
    assert!(matches!(err, WellError::Diverged { index: 2, .. }), "{:?}", err);
}

#[test]
fn coarse_steps_stay_finite() {
    let well = Well::default();
    let wf = integrate(&well, well.energy(1), 0.25).unwrap();
    assert_eq!(wf.len(), 5);
    assert!(wf.psi.iter().all(|q| q.is_finite()));
    assert!(wf.boundary_mismatch() > 0.1);
}

#[test]
fn bad_well_is_rejected() {
    assert!(matches!(Well::new(1.0, 0.0, 1.0, 0.0), Err(WellError::BadWell { .. })));
    assert!(matches!(Well::new(1.0, 1.0, -1.0, 0.0), Err(WellError::BadWell { .. })));
    assert!(matches!(Well::new(1.0, 1.0, 1.0, f64::NAN), Err(WellError::BadWell { .. })));
    let well = Well { hbar: 0.0, ..Well::default() };
    assert!(matches!(integrate(&well, 1.0, 0.1), Err(WellError::BadWell { .. })));
}

#[test]
fn constant_potential_shifts_energies() {
    let well = Well::new(1.0, 1.0, 1.0, 3.0).unwrap();
    assert!((well.energy(1) - (PI * PI / 2.0 + 3.0)).abs() < 1e-12);
    assert!((well.curvature(well.energy(1)) + PI * PI).abs() < 1e-12);
}

#[test]
fn unrepresentable_sample_count_is_rejected() {
    let well = Well::default();
    assert_eq!(well.sample_count(0.25).unwrap(), 5);
    for dx in [1e-300, f64::MIN_POSITIVE] {
        let err = well.sample_count(dx).unwrap_err();
        assert!(matches!(err, WellError::TooManySamples { .. }), "dx = {}: {:?}", dx, err);
        let err = integrate(&well, 1.0, dx).unwrap_err();
        assert!(matches!(err, WellError::TooManySamples { .. }), "dx = {}: {:?}", dx, err);
    }
}
