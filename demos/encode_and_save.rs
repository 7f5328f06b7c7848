use std::error::Error;

use skyline::{Barcode, RenderConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let code = Barcode::new(1234567890u64)?;
    println!("{}", code.metadata());
    println!("{}", code.render_as_string());

    // Default rendering, black bars on white
    code.to_image(4).save("./skyline_1234567890.png")?;

    // Light bars on a dark background, wider gaps
    let mut cfg = RenderConfig::scaled(6);
    cfg.gap(18).fg(image::Rgb([250, 250, 250])).bg(image::Rgb([10, 20, 60]));
    code.render_with(&cfg).save("./skyline_1234567890_inverted.png")?;

    println!("Barcodes saved to: skyline_1234567890.png, skyline_1234567890_inverted.png");
    Ok(())
}
