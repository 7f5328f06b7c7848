use std::collections::HashMap;
use std::fmt::{Debug, Display};

use image::{Rgb, RgbImage};
use rand::Rng;

// Adds uniform noise in -amp..=amp to every channel
pub fn add_noise<R: Rng>(img: &mut RgbImage, amp: i16, rng: &mut R) {
    if amp == 0 {
        return;
    }
    for p in img.pixels_mut() {
        for c in p.0.iter_mut() {
            *c = (*c as i16 + rng.random_range(-amp..=amp)).clamp(0, 255) as u8;
        }
    }
}

// Pastes the barcode into a larger frame of given colour, at the given offset
pub fn frame(img: &RgbImage, w: u32, h: u32, x: u32, y: u32, bg: Rgb<u8>) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(w, h, bg);
    image::imageops::overlay(&mut canvas, img, x as i64, y as i64);
    canvas
}

pub fn median(runtime: &mut [u128]) -> f64 {
    if runtime.is_empty() {
        return 0.0;
    }
    runtime.sort_unstable();
    if runtime.len() % 2 == 1 {
        runtime[runtime.len() / 2] as f64
    } else {
        let mid = runtime.len() / 2;
        (runtime[mid - 1] as f64 + runtime[mid] as f64) / 2.0
    }
}

pub fn print_table<N>(result: &HashMap<String, HashMap<String, N>>, rows: &[&str], columns: &[&str])
where
    N: Display + Debug + Default,
{
    let cell_w = 15;
    let df = N::default();
    let divider = "-".repeat(columns.len() * (cell_w + 2) + 1);

    println!("{divider}");
    let mut header = String::from("| ");
    for c in columns {
        header.push_str(&format!("{c:<cell_w$}| "));
    }
    println!("{header}");
    println!("{divider}");

    for hr in rows {
        let Some(r) = result.get(*hr) else { continue };
        let mut row = format!("| {hr:<cell_w$}| ");

        for c in columns.iter().skip(1) {
            let cell = r.get(*c).unwrap_or(&df);
            row.push_str(&format!("{:<cell_w$.2}| ", cell));
        }

        println!("{row}");
    }

    println!("{divider}");
}
