use clap::{Parser, ValueEnum};

use huckel::{energy_levels, Level, Topology};

/// Hückel molecular-orbital energies for conjugated systems
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "NB: for platonic solids n = 4, 6, 8, 12, 20")]
struct Args {
    /// Structure class of the conjugated system
    #[arg(value_enum)]
    mode: Mode,

    /// Number of atoms
    n: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Linear,
    Cyclic,
    Platonic,
}

fn main() {
    let args = Args::parse();

    let topology = match args.mode {
        Mode::Linear => Topology::Linear(args.n),
        Mode::Cyclic => Topology::Cyclic(args.n),
        Mode::Platonic => Topology::Platonic(args.n),
    };

    match energy_levels(topology) {
        Ok(levels) => print_energies(&levels),
        Err(err) => {
            eprintln!("huckel: {}", err);
            std::process::exit(2);
        }
    }
}

/// Print the energy/degeneracy table from highest to lowest energy,
/// followed by the total orbital count.
fn print_energies(levels: &[Level]) {
    let mut count = 0;

    println!();
    println!("{:<10} {:<10}", " Energy", "Degeneracy");
    println!("---------------------");

    for level in levels.iter().rev() {
        count += level.degeneracy;
        let sign = if level.energy < 0.0 { '-' } else { ' ' };
        let magnitude = format!("{:.3}", level.energy.abs());
        println!("{}{:<10}    {:<10}", sign, magnitude, level.degeneracy);
    }

    println!("---------------------");
    println!("System has {} orbitals", count);
    println!();
}
