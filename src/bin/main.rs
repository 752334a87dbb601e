use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use utmatrix::data::linear_algebra::matrix::TriangularMatrix;
use utmatrix::io::import;

/// Add or subtract two upper triangular matrices stored as text.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Order of both matrices
    order: isize,
    /// File containing the left operand, row by row from the diagonal
    left: PathBuf,
    /// File containing the right operand, row by row from the diagonal
    right: PathBuf,
    /// Subtract the right operand instead of adding it
    #[arg(short, long)]
    subtract: bool,
}

fn read(path: &Path, order: isize) -> Result<TriangularMatrix<f64>> {
    import(path, order).with_context(|| format!("couldn't read matrix from \"{}\"", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("UTMATRIX_LOG", "warn"))
        .init();

    let opts = Opts::parse();

    let left = read(&opts.left, opts.order)?;
    let right = read(&opts.right, opts.order)?;

    let result = if opts.subtract {
        info!("subtracting matrices of order {}", opts.order);
        left.try_sub(&right)
    } else {
        info!("adding matrices of order {}", opts.order);
        left.try_add(&right)
    }
    .context("matrices don't have the same shape")?;

    print!("{result}");

    Ok(())
}
