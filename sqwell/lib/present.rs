//! Shaping of computed levels into labeled series for a plotting collaborator.
//!
//! Nothing here affects the physics: the optional energy shift is a uniform
//! offset applied purely so that levels stack vertically when drawn together.

use ndarray as nd;
use serde::{ Deserialize, Serialize };
use crate::{
    Arr1,
    error::LengthError,
    solve::WResult,
};

/// Title attached to every [`Figure`] built by [`build_figure`].
pub const TITLE: &str = "Infinite square well";

/// A single labeled curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    /// Horizontal coordinates.
    pub x: Vec<f64>,
    /// Vertical coordinates.
    pub y: Vec<f64>,
    /// Display label.
    pub label: String,
}

/// Everything a plotting collaborator needs to draw one figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub series: Vec<PlotSeries>,
}

/// Format the display label for the `i`-th (0-based) level with energy `e`.
///
/// ```
/// assert_eq!(sqwell::present::level_label(0, std::f64::consts::PI.powi(2) / 2.0), "n=1, E=4.93");
/// ```
pub fn level_label(i: usize, e: f64) -> String {
    format!("n={}, E={:.2}", i + 1, e)
}

/// Build one [`PlotSeries`] per level.
///
/// For level `i`, `y = psi[i] + eigenvalues[i]` if `shift` is `true`, and
/// `y = psi[i]` exactly otherwise; `x` is copied from `x[i]`. All three input
/// sequences must have the same length, and each `x[i]` must have the same
/// length as `psi[i]`; otherwise [`WellError::Length`][crate::error::WellError::Length]
/// is returned.
pub fn build_series<S, T>(
    eigenvalues: &[f64],
    psi: &[Arr1<S>],
    x: &[Arr1<T>],
    shift: bool,
) -> WResult<Vec<PlotSeries>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check_len(eigenvalues.len(), psi.len())?;
    LengthError::check_len(psi.len(), x.len())?;
    eigenvalues.iter().zip(psi).zip(x).enumerate()
        .map(|(i, ((&e, q), xk))| -> WResult<PlotSeries> {
            LengthError::check(xk, q)?;
            let y: Vec<f64>
                = if shift {
                    q.iter().map(|qk| qk + e).collect()
                } else {
                    q.to_vec()
                };
            Ok(PlotSeries { x: xk.to_vec(), y, label: level_label(i, e) })
        })
        .collect()
}

/// Like [`build_series`], but wrap the series with title and axis text.
pub fn build_figure<S, T>(
    eigenvalues: &[f64],
    psi: &[Arr1<S>],
    x: &[Arr1<T>],
    shift: bool,
) -> WResult<Figure>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let series = build_series(eigenvalues, psi, x, shift)?;
    let ylabel = if shift { "ψ(x) + E" } else { "ψ(x)" };
    Ok(Figure {
        title: TITLE.to_string(),
        xlabel: "x".to_string(),
        ylabel: ylabel.to_string(),
        series,
    })
}
