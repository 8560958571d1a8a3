use sqwell::{
    error::WellError,
    units::{ me, mp, Units },
    well::Well,
};

#[test]
fn electron_in_nanometer_well() {
    let uu = Units::from_mks(me, 1e-9).unwrap();
    let well = Well::default();
    let e1: f64 = uu.from_nat_energy(well.energy(1));
    let e2: f64 = uu.from_nat_energy(well.energy(2));
    assert!((Units::to_ev(e1) - 0.376).abs() < 1e-3);
    assert!((e2 / e1 - 4.0).abs() < 1e-12);
}

#[test]
fn heavier_particles_have_lower_levels() {
    let electron = Units::from_mks(me, 1e-9).unwrap();
    let proton = Units::from_mks(mp, 1e-9).unwrap();
    assert!((electron.e / proton.e - mp / me).abs() < 1e-6 * (mp / me));
}

#[test]
fn conversions_invert() {
    let uu = Units::from_mks(me, 2e-10).unwrap();
    let e: f64 = uu.to_nat_energy(uu.from_nat_energy(12.5));
    let x: f64 = uu.to_nat_length(uu.from_nat_length(0.25));
    assert!((e - 12.5).abs() < 1e-12);
    assert!((x - 0.25).abs() < 1e-15);
}

#[test]
fn unphysical_scales_are_rejected() {
    for (mass, a) in [(0.0, 1e-9), (-me, 1e-9), (me, 0.0), (me, f64::INFINITY), (f64::NAN, 1e-9)] {
        let err = Units::from_mks(mass, a).unwrap_err();
        assert!(matches!(err, WellError::BadWell { .. }), "m = {}, a = {}: {:?}", mass, a, err);
    }
}
