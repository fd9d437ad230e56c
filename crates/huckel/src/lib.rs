pub mod degeneracy;
pub mod error;
pub mod spectrum;
pub mod topology;

pub use degeneracy::{aggregate, Level};
pub use error::Error;
pub use spectrum::extract_spectrum;
pub use topology::{build_cyclic, build_linear, build_platonic, Topology, PLATONIC_SIZES};

/// Full pipeline: build the Hamiltonian, extract its spectrum, collapse
/// it into energy levels. Levels come out in ascending energy order with
/// multiplicities summing to the atom count.
pub fn energy_levels(topology: Topology) -> Result<Vec<Level>, Error> {
    let h = topology.hamiltonian()?;
    let evals = extract_spectrum(&h)?;
    Ok(aggregate(&evals))
}
