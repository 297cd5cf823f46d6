use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui;
use image::ImageReader;

/// Decodes an artwork asset into an egui image.
pub fn decode_artwork(path: &Path) -> Result<egui::ColorImage, String> {
    let image = ImageReader::open(path)
        .map_err(|error| format!("failed to open artwork {:?}: {error}", path))?
        .with_guessed_format()
        .map_err(|error| format!("failed to detect artwork format {:?}: {error}", path))?
        .decode()
        .map_err(|error| format!("failed to decode artwork {:?}: {error}", path))?;

    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_raw(),
    ))
}

/// Textures keyed by catalog index. Failed loads are remembered so each
/// missing asset is reported once.
pub struct ArtworkTextures {
    assets_dir: PathBuf,
    loaded: HashMap<usize, Option<egui::TextureHandle>>,
}

impl ArtworkTextures {
    pub fn new(assets_dir: PathBuf) -> Self {
        Self {
            assets_dir,
            loaded: HashMap::new(),
        }
    }

    pub fn get(
        &mut self,
        ctx: &egui::Context,
        index: usize,
        file_name: &str,
    ) -> Option<&egui::TextureHandle> {
        let assets_dir = &self.assets_dir;
        self.loaded
            .entry(index)
            .or_insert_with(|| {
                let path = assets_dir.join(file_name);
                match decode_artwork(&path) {
                    Ok(image) => {
                        tracing::debug!(path = %path.display(), "loaded artwork texture");
                        Some(ctx.load_texture(
                            format!("artwork-{index}"),
                            image,
                            egui::TextureOptions::LINEAR,
                        ))
                    }
                    Err(error) => {
                        tracing::warn!("{error}");
                        None
                    }
                }
            })
            .as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn decodes_png_into_color_image() {
        let dir = tempdir().expect("temp dir should be created");
        let path = dir.path().join("tiny.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .expect("png should be written");

        let decoded = decode_artwork(&path).expect("png should decode");
        assert_eq!(decoded.size, [3, 2]);
        assert_eq!(decoded.pixels[0], egui::Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn missing_asset_is_an_error() {
        let dir = tempdir().expect("temp dir should be created");
        let result = decode_artwork(&dir.path().join("absent.png"));
        assert!(result.is_err());
    }

    #[test]
    fn failed_load_is_cached_as_none() {
        let dir = tempdir().expect("temp dir should be created");
        let ctx = egui::Context::default();
        let mut textures = ArtworkTextures::new(dir.path().to_path_buf());

        assert!(textures.get(&ctx, 0, "absent.png").is_none());
        assert!(textures.loaded.contains_key(&0));
    }
}
