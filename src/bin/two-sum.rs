use std::io::{self, Read};

use color_eyre::eyre::Result;
use two_sum::{output, parse, solve};

/// Counted stdin format in, space-joined indices out, nested-scan solver.
fn main() -> Result<()> {
    color_eyre::install()?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let (nums, target) = parse::counted(&input)?;
    let result = solve::two_sum(&nums, target);

    println!("{}", output::spaced(result));

    Ok(())
}
