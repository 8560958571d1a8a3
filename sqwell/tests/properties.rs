use std::f64::consts::PI;
use proptest::prelude::*;
use sqwell::{
    solve::{ energy_levels, enumerate, System },
    utils::{ normalize, wf_norm },
    well::Well,
};

proptest! {
    #[test]
    fn runs_share_grid_and_normalize(n_max in 1usize..6, dx in 1e-3f64..5e-2) {
        let well = Well::default();
        let (levels, wfs) = enumerate(&well, n_max, dx).unwrap();
        prop_assert_eq!(levels.len(), n_max);
        prop_assert_eq!(wfs.len(), n_max);

        let count = (1.0 / dx).floor() as usize + 1;
        for wf in wfs.iter() {
            prop_assert_eq!(wf.len(), count);
            prop_assert_eq!(wf.x.len(), count);
        }

        let normed = normalize(&wfs, dx).unwrap();
        for wf in normed.iter() {
            prop_assert!((wf_norm(&wf.psi, dx) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn energies_follow_closed_form(n in 1usize..1000) {
        let level = energy_levels(&Well::default(), n)[n - 1];
        let expected = (n * n) as f64 * PI * PI / 2.0;
        prop_assert_eq!(level.n, n);
        prop_assert!((level.e - expected).abs() <= 1e-12 * expected);
    }

    #[test]
    fn normalization_is_idempotent(n_max in 1usize..5, dx in 1e-3f64..1e-2) {
        let spectrum = System::new(Well::default(), dx).unwrap().solve(n_max).unwrap();
        let again = normalize(spectrum.wavefunctions(), dx).unwrap();
        for (a, b) in spectrum.wavefunctions().iter().zip(&again) {
            for (qa, qb) in a.psi.iter().zip(&b.psi) {
                prop_assert!((qa - qb).abs() <= 1e-9 * qa.abs() + 1e-15);
            }
        }
    }

    #[test]
    fn shifted_series_never_change_shape(n_max in 1usize..4, dx in 1e-3f64..2e-2) {
        let spectrum = System::new(Well::default(), dx).unwrap().solve(n_max).unwrap();
        let flat = spectrum.series(false).unwrap();
        let shifted = spectrum.series(true).unwrap();
        for ((f, s), e) in flat.iter().zip(&shifted).zip(spectrum.energies()) {
            prop_assert_eq!(&f.label, &s.label);
            prop_assert!(f.y.iter().zip(&s.y).all(|(yf, ys)| (ys - yf - e).abs() < 1e-9 * e));
        }
    }
}
