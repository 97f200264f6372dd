use std::path::Path;

use eframe::egui;

/// Decode the lab logo into an egui image.
pub fn load_logo(path: &Path) -> Result<egui::ColorImage, image::ImageError> {
    let img = image::open(path)?.to_rgba8();
    let size = [img.width() as usize, img.height() as usize];

    Ok(egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw()))
}
