//! Per-pixel background stripping.
//!
//! A pixel is background when its red, green and blue channels are all
//! strictly greater than the threshold. Background pixels become
//! `TRANSPARENT_WHITE`; every other pixel, alpha included, is left as is.
//! Pixels are independent, so evaluation order does not matter.
use image::{Rgba, RgbaImage};

use crate::types::PixelClass;

pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Classify one pixel. Alpha does not take part.
#[inline]
pub fn classify(pixel: &Rgba<u8>, threshold: u8) -> PixelClass {
    let [r, g, b, _] = pixel.0;
    if r > threshold && g > threshold && b > threshold {
        PixelClass::Background
    } else {
        PixelClass::Foreground
    }
}

#[inline]
pub fn strip_pixel(pixel: Rgba<u8>, threshold: u8) -> Rgba<u8> {
    match classify(&pixel, threshold) {
        PixelClass::Background => TRANSPARENT_WHITE,
        PixelClass::Foreground => pixel,
    }
}

/// Return a copy of `image` with near-white pixels made transparent.
pub fn strip_background(image: &RgbaImage, threshold: u8) -> RgbaImage {
    let mut out = image.clone();
    strip_background_in_place(&mut out, threshold);
    out
}

/// Strip `image` in place; returns how many pixels were cleared.
pub fn strip_background_in_place(image: &mut RgbaImage, threshold: u8) -> usize {
    let mut cleared = 0;
    for pixel in image.pixels_mut() {
        if classify(pixel, threshold) == PixelClass::Background {
            *pixel = TRANSPARENT_WHITE;
            cleared += 1;
        }
    }
    cleared
}
