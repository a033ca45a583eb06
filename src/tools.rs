use crate::structure::Bitmap;
use byteorder::{LittleEndian, WriteBytesExt};
use cgmath::Point2;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug)]
pub enum SaveError {
    MissingExtension,
    UnknownExtension(String),
    Io(std::io::Error),
    #[cfg(feature = "image")]
    Image(image::ImageError),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::MissingExtension => write!(f, "no file extension provided"),
            SaveError::UnknownExtension(ext) => write!(f, "unknown output file extension: {}", ext),
            SaveError::Io(e) => write!(f, "io error: {}", e),
            #[cfg(feature = "image")]
            SaveError::Image(e) => write!(f, "image error: {}", e),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            #[cfg(feature = "image")]
            SaveError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

#[cfg(feature = "image")]
impl From<image::ImageError> for SaveError {
    fn from(e: image::ImageError) -> Self {
        SaveError::Image(e)
    }
}

pub fn save(imgout_path_str: &str, img: &Bitmap) -> Result<(), SaveError> {
    let output_ext = Path::new(imgout_path_str)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .ok_or(SaveError::MissingExtension)?;
    match output_ext {
        "pfm" => save_pfm(imgout_path_str, img),
        #[cfg(feature = "image")]
        "png" => save_png(imgout_path_str, img),
        _ => Err(SaveError::UnknownExtension(output_ext.to_string())),
    }
}

/// Portable float map: rows are stored from the bottom to the top
pub fn save_pfm(imgout_path_str: &str, img: &Bitmap) -> Result<(), SaveError> {
    let mut file = BufWriter::new(File::create(Path::new(imgout_path_str))?);
    let header = format!("PF\n{} {}\n-1.0\n", img.size.x, img.size.y);
    file.write_all(header.as_bytes())?;
    for y in 0..img.size.y {
        for x in 0..img.size.x {
            let p = img.get(Point2::new(x, img.size.y - y - 1));
            file.write_f32::<LittleEndian>(p.r.abs())?;
            file.write_f32::<LittleEndian>(p.g.abs())?;
            file.write_f32::<LittleEndian>(p.b.abs())?;
        }
    }
    file.flush()?;
    Ok(())
}

#[cfg(feature = "image")]
pub fn save_png(imgout_path_str: &str, img: &Bitmap) -> Result<(), SaveError> {
    let image_ldr = image::RgbImage::from_fn(img.size.x, img.size.y, |x, y| {
        img.get(Point2::new(x, y)).to_rgb()
    });
    image_ldr.save_with_format(imgout_path_str, image::ImageFormat::Png)?;
    Ok(())
}
