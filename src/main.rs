use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};

use skyline::{decode, BarReader, Barcode, Decoded, ScanMode, MAX_SCALE};

#[derive(Parser, Debug)]
#[command(name = "skyline", version, about = "Encode and read bar-height barcodes")]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Encode an identifier (0..2^40) into bar levels
    Encode {
        id: u64,

        /// Write the rendered barcode to this PNG
        #[arg(long)]
        out: Option<PathBuf>,

        /// Pixel scale of the rendered barcode
        #[arg(
            long,
            default_value_t = 4,
            value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64)
        )]
        scale: u32,
    },

    /// Read a barcode from an image
    Decode {
        image: PathBuf,

        /// Tuned for barcodes that occupy a small part of the frame
        #[arg(long)]
        small: bool,
    },

    /// Decode a typed sequence of 23 levels or measured heights
    Levels {
        #[arg(
            num_args = 1..,
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true
        )]
        levels: Vec<f64>,
    },
}

fn report(decoded: Decoded) {
    if decoded.verified {
        println!("{}", decoded.id);
    } else {
        println!("{} (unverified: checksum mismatch, re-scan)", decoded.id);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    match args.cmd {
        Cmd::Encode { id, out, scale } => {
            let code = Barcode::new(id)?;
            log::info!("{}", code.metadata());
            println!("{}", code.bars());
            print!("{}", code.render_as_string());
            if let Some(path) = out {
                code.to_image(scale).save(&path)?;
                println!("Saved to {}", path.display());
            }
        }
        Cmd::Decode { image, small } => {
            let img = image::open(&image)?;
            match BarReader::read(&img, ScanMode::from(small)) {
                Ok(decoded) => report(decoded),
                Err(e) if e.is_detection_error() => {
                    return Err(format!("{e}; reposition the camera or improve lighting").into())
                }
                Err(e) => return Err(e.into()),
            }
        }
        Cmd::Levels { levels } => report(decode(&levels)?),
    }

    Ok(())
}
