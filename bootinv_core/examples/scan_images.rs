//! Scan one or more directories and print the boot image inventory
//!
//! Run with: cargo run --example scan_images -- /srv/images [more dirs...]

use std::path::PathBuf;

use bootinv_core::{Config, load_images};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let locations: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();

    if locations.is_empty() {
        eprintln!("Usage: cargo run --example scan_images -- <directory> [more dirs...]");
        return Ok(());
    }

    // Empty pattern means the built-in image extension set
    let config = Config::for_images(locations, "");
    config.validate()?;

    let images = load_images(&config)?;

    println!("Found {} image(s)", images.len());
    for image in &images {
        let digest = image
            .checksum()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!("{:>10}  {}  {}", image.size(), digest, image.path().display());
    }

    Ok(())
}
