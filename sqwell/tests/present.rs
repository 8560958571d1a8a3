use ndarray as nd;
use sqwell::{
    error::WellError,
    present::{ build_figure, build_series, level_label, TITLE },
    solve::System,
    well::Well,
};

#[test]
fn unshifted_series_copy_amplitudes_exactly() {
    let spectrum = System::new(Well::default(), 1e-3).unwrap().solve(3).unwrap();
    let series = spectrum.series(false).unwrap();
    assert_eq!(series.len(), 3);
    for (s, wf) in series.iter().zip(spectrum.wavefunctions()) {
        assert_eq!(s.y, wf.psi.to_vec());
        assert_eq!(s.x, wf.x.to_vec());
    }
}

#[test]
fn shifted_series_are_offset_by_energy() {
    let spectrum = System::new(Well::default(), 1e-3).unwrap().solve(3).unwrap();
    let series = spectrum.series(true).unwrap();
    for ((s, wf), level) in series.iter().zip(spectrum.wavefunctions()).zip(spectrum.levels()) {
        assert!(s.y.iter().zip(&wf.psi).all(|(y, q)| *y == q + level.e));
    }
}

#[test]
fn labels_carry_index_and_rounded_energy() {
    let spectrum = System::new(Well::default(), 1e-2).unwrap().solve(3).unwrap();
    let labels: Vec<String>
        = spectrum.series(true).unwrap()
        .into_iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(labels, ["n=1, E=4.93", "n=2, E=19.74", "n=3, E=44.41"]);
    assert_eq!(level_label(9, 0.006), "n=10, E=0.01");
}

#[test]
fn mismatched_inputs_are_rejected() {
    let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 3);
    let q: nd::Array1<f64> = nd::array![1.0, 2.0, 3.0];
    let short: nd::Array1<f64> = nd::array![1.0, 2.0];

    let err = build_series(&[1.0, 2.0], &[q.clone()], &[x.clone()], true).unwrap_err();
    assert!(matches!(err, WellError::Length(_)));
    let err = build_series(&[1.0], &[q.clone()], &[x.clone(), x.clone()], true).unwrap_err();
    assert!(matches!(err, WellError::Length(_)));
    let err = build_series(&[1.0], &[short], &[x.clone()], false).unwrap_err();
    assert!(matches!(err, WellError::Length(_)));

    let ok = build_series(&[1.0], &[q], &[x], false).unwrap();
    assert_eq!(ok[0].y, vec![1.0, 2.0, 3.0]);
}

#[test]
fn empty_inputs_give_no_series() {
    let none: [nd::Array1<f64>; 0] = [];
    assert!(build_series(&[], &none, &none, true).unwrap().is_empty());
}

#[test]
fn figure_text_tracks_shift() {
    let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 3);
    let q: nd::Array1<f64> = nd::array![0.0, 1.0, 0.0];
    let shifted = build_figure(&[2.0], &[q.view()], &[x.view()], true).unwrap();
    let flat = build_figure(&[2.0], &[q.view()], &[x.view()], false).unwrap();
    assert_eq!(shifted.title, TITLE);
    assert_eq!(shifted.xlabel, "x");
    assert_eq!(shifted.ylabel, "ψ(x) + E");
    assert_eq!(flat.ylabel, "ψ(x)");
    assert_eq!(shifted.series[0].y, vec![2.0, 3.0, 2.0]);
    assert_eq!(flat.series[0].y, vec![0.0, 1.0, 0.0]);
}
