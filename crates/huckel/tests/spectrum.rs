use huckel::{build_cyclic, build_linear, build_platonic, extract_spectrum};

#[test]
fn tetrahedron_spectrum() {
    let h = build_platonic(4).unwrap();
    let evals = extract_spectrum(&h).unwrap();
    assert_eq!(evals, vec![-3.0, 1.0, 1.0, 1.0]);
}

#[test]
fn two_atom_chain_spectrum() {
    let h = build_linear(2).unwrap();
    let evals = extract_spectrum(&h).unwrap();
    assert_eq!(evals, vec![-1.0, 1.0]);
}

#[test]
fn butadiene_spectrum() {
    // E_k = -2 cos(k pi / 5), the golden-ratio pair
    let h = build_linear(4).unwrap();
    let evals = extract_spectrum(&h).unwrap();
    assert_eq!(evals, vec![-1.618, -0.618, 0.618, 1.618]);
}

#[test]
fn benzene_spectrum() {
    let h = build_cyclic(6).unwrap();
    let evals = extract_spectrum(&h).unwrap();
    assert_eq!(evals, vec![-2.0, -1.0, -1.0, 1.0, 1.0, 2.0]);
}

#[test]
fn single_atom_spectrum() {
    let h = build_linear(1).unwrap();
    let evals = extract_spectrum(&h).unwrap();
    assert_eq!(evals, vec![0.0]);
}

#[test]
fn spectrum_is_sorted_ascending() {
    let h = build_cyclic(10).unwrap();
    let evals = extract_spectrum(&h).unwrap();
    assert!(evals.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(evals.len(), 10);
}
