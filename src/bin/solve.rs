use clap::Parser;

use kociemba::solver::Mode;

/// Solve a 3x3 cube from its 54-character facelet string.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Facelet string in URFDLB face order, 9 characters per face.
    facelet: String,

    /// Maximum solution length to search.
    #[arg(short, long, default_value_t = 24)]
    max_depth: usize,

    /// Search timeout in seconds.
    #[arg(short, long, default_value_t = 5.0)]
    timeout: f64,

    /// Use the fast (near-optimal) search instead of the optimal one.
    #[arg(short, long)]
    fast: bool,
}

fn main() {
    let cli = Cli::parse();
    let mode = if cli.fast { Mode::Fast } else { Mode::Optimal };
    let result = kociemba::solve(&cli.facelet, cli.max_depth, cli.timeout, mode);
    println!("{result}");
}
