//! Functions to find zeros in sampled (continuous) functions via Lagrange
//! interpolation.
//!
//! ```
//! use sqwell::interp::{ Zero, find_zeros };
//!
//! let x: Vec<f64> = (0..=1000).map(|k| k as f64 / 1000.0).collect();
//! let y: Vec<f64> = x.iter().map(|xk| (3.0 * std::f64::consts::PI * xk).sin()).collect();
//! let zeros = find_zeros(&x[1..1000], &y[1..1000], Zero::All).unwrap();
//! assert_eq!(zeros.len(), 2);
//! assert!(
//!     [1.0 / 3.0, 2.0 / 3.0].into_iter()
//!         .zip(zeros)
//!         .all(|(expected, computed)| (computed - expected).abs() < 1e-9)
//! )
//! ```

use std::cmp;
use log::warn;
use num_traits::Float;
use crate::error::*;

pub type InterpResult<T> = Result<T, InterpError>;

/// Specifies a set of zeros to look for in [`find_zeros`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Zero {
    /// Points at which a function changes from positive to negative.
    Falling,
    /// Points at which a function changes from negative to positive.
    Rising,
    /// Either/both of the above.
    All,
}

impl Zero {
    fn matches<A: Float>(&self, a: A, b: A) -> bool {
        match self {
            Self::Falling => a > b,
            Self::Rising => a < b,
            Self::All => true,
        }
    }
}

/// Compute the value of a sampled function at `x` via the Lagrange polynomial
/// through all given points.
pub fn lagrange<A: Float>(data_x: &[A], data_y: &[A], x: A) -> InterpResult<A> {
    LengthError::check_len(data_x.len(), data_y.len())?;
    let res: A
        = data_x.iter().zip(data_y).enumerate()
        .map(|(j, (&xj, &yj))| {
            let basis
                = data_x.iter().enumerate()
                .filter(|(m, _)| *m != j)
                .map(|(_, &xm)| (x - xm) / (xj - xm))
                .fold(A::one(), |acc, f| acc * f);
            yj * basis
        })
        .fold(A::zero(), |acc, t| acc + t);
    Ok(res)
}

/// Return a list of all zeros of a given kind in a sampled function.
///
/// Each zero is located by inverse interpolation over up to four samples
/// surrounding the sign change, so the function must be locally invertible on
/// the scale of a few grid points. Exact zeros in the data are reported as-is.
pub fn find_zeros<A: Float>(data_x: &[A], data_y: &[A], kind: Zero)
    -> InterpResult<Vec<A>>
{
    LengthError::check_len(data_x.len(), data_y.len())?;
    LagrangeError::check(data_x)?;
    let n = data_x.len();
    let z = A::zero();
    let mut zeros: Vec<A> = Vec::new();
    for i in 1..n {
        let (yprev, y) = (data_y[i - 1], data_y[i]);
        if y == z {
            zeros.push(data_x[i]);
        } else if yprev != z && yprev * y < z && kind.matches(yprev, y) {
            let il = i.saturating_sub(2);
            let ir = cmp::min(n, i + 2);
            if ir - il < 4 {
                warn!(
                    "interp::find_zeros: attempting to interpolate near an edge \
                    of the given data; some accuracy may be lost"
                );
            }
            zeros.push(lagrange(&data_y[il..ir], &data_x[il..ir], z)?);
        }
    }
    Ok(zeros)
}
