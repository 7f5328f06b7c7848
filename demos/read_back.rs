use std::error::Error;

use skyline::{BarReader, Barcode, ScanMode};

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "./skyline_read_back.png".to_string());

    // Generate an image to read if none was given
    if !std::path::Path::new(&path).exists() {
        Barcode::new(0xC0FFEE_u64)?.to_image(3).save(&path)?;
    }

    let img = image::open(&path)?;
    match BarReader::read(&img, ScanMode::Normal) {
        Ok(decoded) => {
            println!("Decoded id: {}", decoded.id);
            println!("Checksum verified: {}", decoded.verified);
        }
        Err(e) if e.is_detection_error() => {
            println!("No barcode found in {path}: {e}");
            println!("Retrying in small mode...");
            let decoded = BarReader::read(&img, ScanMode::Small)?;
            println!("Decoded id: {} (verified: {})", decoded.id, decoded.verified);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
