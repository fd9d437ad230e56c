use faer::{Mat, Side};

use crate::error::Error;

/// All eigenvalues of a real symmetric Hamiltonian, rounded to 3 decimal
/// places and sorted ascending.
///
/// Rounding happens before the sort and before any degeneracy comparison:
/// solver noise below 5e-4 must collapse to the same rounded value or the
/// multiplicity count splits.
pub fn extract_spectrum(h: &Mat<f64>) -> Result<Vec<f64>, Error> {
    let mut evals = h.selfadjoint_eigenvalues(Side::Lower);

    if evals.iter().any(|e| !e.is_finite()) {
        return Err(Error::Numerical);
    }

    for e in evals.iter_mut() {
        *e = round3(*e);
    }
    evals.sort_by(f64::total_cmp);
    Ok(evals)
}

/// Round to 3 decimals, normalizing -0.0 to 0.0.
fn round3(x: f64) -> f64 {
    let r = (x * 1000.0).round() / 1000.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
