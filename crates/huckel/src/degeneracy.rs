/// A molecular-orbital energy level with its multiplicity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Level {
    pub energy: f64,
    pub degeneracy: usize,
}

/// Collapse an ascending sequence of rounded eigenvalues into energy
/// levels with multiplicities.
///
/// Single left-to-right scan: equal consecutive values (exact equality,
/// the input is already rounded) extend the current level, a new value
/// emits the pending one. Empty input yields no levels. Output keeps the
/// ascending energy order of the input.
pub fn aggregate(evals: &[f64]) -> Vec<Level> {
    let mut levels = Vec::new();
    let mut marker: Option<f64> = None;
    let mut count = 0;

    for &e in evals {
        match marker {
            Some(m) if m == e => count += 1,
            _ => {
                if let Some(m) = marker {
                    levels.push(Level {
                        energy: m,
                        degeneracy: count,
                    });
                }
                marker = Some(e);
                count = 1;
            }
        }
    }

    if let Some(m) = marker {
        levels.push(Level {
            energy: m,
            degeneracy: count,
        });
    }

    levels
}
