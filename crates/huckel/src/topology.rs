use faer::Mat;

use crate::error::Error;

/// Atom counts with a Platonic-solid skeleton: tetrahedron, octahedron,
/// cube, icosahedron, dodecahedron.
pub const PLATONIC_SIZES: [usize; 5] = [4, 6, 8, 12, 20];

/// A conjugated system the Hückel model covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Linear polyene with n atoms (n >= 1).
    Linear(usize),
    /// Cyclic polyene with n atoms (n >= 3).
    Cyclic(usize),
    /// sp2-hybridized Platonic-solid cage (n in PLATONIC_SIZES).
    Platonic(usize),
}

impl Topology {
    /// Hückel Hamiltonian for this topology.
    pub fn hamiltonian(&self) -> Result<Mat<f64>, Error> {
        match *self {
            Topology::Linear(n) => build_linear(n),
            Topology::Cyclic(n) => build_cyclic(n),
            Topology::Platonic(n) => build_platonic(n),
        }
    }
}

/// Hückel Hamiltonian for a linear polyene: -1 wherever |i - j| = 1.
pub fn build_linear(n: usize) -> Result<Mat<f64>, Error> {
    if n < 1 {
        return Err(Error::InvalidSize {
            topology: "linear",
            n,
            requirement: "n >= 1",
        });
    }

    Ok(Mat::from_fn(n, n, |i, j| {
        if i.abs_diff(j) == 1 {
            -1.0
        } else {
            0.0
        }
    }))
}

/// Hückel Hamiltonian for a cyclic polyene: the linear chain with the
/// (0, n-1) bond closing the ring.
pub fn build_cyclic(n: usize) -> Result<Mat<f64>, Error> {
    if n < 3 {
        return Err(Error::InvalidSize {
            topology: "cyclic",
            n,
            requirement: "n >= 3",
        });
    }

    let mut h = build_linear(n)?;
    h.write(0, n - 1, -1.0);
    h.write(n - 1, 0, -1.0);
    Ok(h)
}

// Skeleton graphs of the five Platonic solids as fixed edge lists. Any
// labeling of the right isomorphism class gives the same spectrum.

/// K4: every pair of vertices bonded.
const TETRAHEDRON: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Each vertex bonded to all but its antipode (i and i + 3).
const OCTAHEDRON: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (0, 4),
    (0, 5),
    (1, 2),
    (1, 3),
    (1, 5),
    (2, 3),
    (2, 4),
    (3, 4),
    (3, 5),
    (4, 5),
];

/// 3-bit vertex labels, bonded iff the labels differ in exactly one bit.
const CUBE: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (0, 4),
    (1, 3),
    (1, 5),
    (2, 3),
    (2, 6),
    (3, 7),
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 7),
];

/// Apex 0 over pentagon 1..=5, antiprism band to pentagon 6..=10,
/// apex 11 underneath.
const ICOSAHEDRON: [(usize, usize); 30] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (0, 5),
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 5),
    (5, 1),
    (1, 6),
    (1, 7),
    (2, 7),
    (2, 8),
    (3, 8),
    (3, 9),
    (4, 9),
    (4, 10),
    (5, 10),
    (5, 6),
    (6, 7),
    (7, 8),
    (8, 9),
    (9, 10),
    (10, 6),
    (6, 11),
    (7, 11),
    (8, 11),
    (9, 11),
    (10, 11),
];

/// Outer pentagon 0..=4, ring of ten 5..=14 (odd-indexed ring vertices
/// bond outward, even-indexed inward), inner pentagon 15..=19.
const DODECAHEDRON: [(usize, usize); 30] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 0),
    (0, 5),
    (1, 7),
    (2, 9),
    (3, 11),
    (4, 13),
    (5, 6),
    (6, 7),
    (7, 8),
    (8, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (12, 13),
    (13, 14),
    (14, 5),
    (6, 16),
    (8, 17),
    (10, 18),
    (12, 19),
    (14, 15),
    (15, 16),
    (16, 17),
    (17, 18),
    (18, 19),
    (19, 15),
];

/// Hückel Hamiltonian for an sp2-hybridized Platonic solid: -1 times the
/// adjacency matrix of the solid's skeleton graph.
pub fn build_platonic(n: usize) -> Result<Mat<f64>, Error> {
    let edges: &[(usize, usize)] = match n {
        4 => &TETRAHEDRON,
        6 => &OCTAHEDRON,
        8 => &CUBE,
        12 => &ICOSAHEDRON,
        20 => &DODECAHEDRON,
        _ => {
            return Err(Error::InvalidSize {
                topology: "platonic",
                n,
                requirement: "n in {4, 6, 8, 12, 20}",
            })
        }
    };

    let mut h = Mat::zeros(n, n);
    for &(a, b) in edges {
        h.write(a, b, -1.0);
        h.write(b, a, -1.0);
    }
    Ok(h)
}
