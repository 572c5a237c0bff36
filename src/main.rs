//! sfx-gen: one-shot generator for the quiz game's UI sound effects.
//!
//! Running the binary takes no arguments: it synthesizes the fixed clip
//! catalog into the default output directory and prints the path of each
//! file written.

use sfx_gen::config::GeneratorConfig;
use sfx_gen::error::Result;
use sfx_gen::generation::generate_all;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = GeneratorConfig::new();
    let output_dir = config.effective_output_dir();

    eprintln!("=== sfx-gen ===");
    eprintln!("Output directory: {}", output_dir.display());
    eprintln!();

    let paths = generate_all(&output_dir)?;

    for path in &paths {
        println!("Generated {}", path.display());
    }

    Ok(())
}
