// qr.rs
// Render an otpauth URL as a PNG QR code wrapped in a data URI.

use anyhow::Result;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

pub fn png_bytes(otpauth_url: &str) -> Result<Vec<u8>> {
    let code = QrCode::new(otpauth_url.as_bytes())?;
    let img = code.render::<Luma<u8>>().min_dimensions(200, 200).build();

    // image 0.25: write_to requires Write + Seek -> Cursor<Vec<u8>>
    let mut cursor = Cursor::new(Vec::<u8>::new());
    image::DynamicImage::ImageLuma8(img).write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

pub fn png_data_uri(otpauth_url: &str) -> Result<String> {
    let png = png_bytes(otpauth_url)?;
    Ok(format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(png)))
}
