/// Widths above this (in logical points) use the landscape arrangement.
pub const LANDSCAPE_BREAKPOINT: f32 = 600.0;

/// Artwork cards are 3 wide by 4 tall.
pub const ARTWORK_ASPECT: f32 = 3.0 / 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryLayout {
    pub landscape: bool,
    pub artwork_width_fraction: f32,
    pub caption_width_fraction: f32,
}

impl GalleryLayout {
    pub fn for_width(width: f32) -> Self {
        if width > LANDSCAPE_BREAKPOINT {
            Self {
                landscape: true,
                artwork_width_fraction: 0.4,
                caption_width_fraction: 0.35,
            }
        } else {
            Self {
                landscape: false,
                artwork_width_fraction: 0.8,
                caption_width_fraction: 0.7,
            }
        }
    }

    /// Card size for the available area, shrunk to fit `max_height` while keeping the aspect.
    pub fn artwork_size(&self, available_width: f32, max_height: f32) -> [f32; 2] {
        let mut width = available_width * self.artwork_width_fraction;
        let mut height = width / ARTWORK_ASPECT;
        if height > max_height && max_height > 0.0 {
            height = max_height;
            width = height * ARTWORK_ASPECT;
        }
        [width, height]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(!GalleryLayout::for_width(600.0).landscape);
        assert!(GalleryLayout::for_width(600.5).landscape);
    }

    #[test]
    fn portrait_uses_wider_cards() {
        let layout = GalleryLayout::for_width(400.0);
        assert_eq!(layout.artwork_width_fraction, 0.8);
        assert_eq!(layout.caption_width_fraction, 0.7);
    }

    #[test]
    fn artwork_size_keeps_aspect_when_height_bound() {
        let layout = GalleryLayout::for_width(900.0);
        let [width, height] = layout.artwork_size(900.0, 300.0);
        assert_eq!(height, 300.0);
        assert!((width / height - ARTWORK_ASPECT).abs() < 1e-5);
    }

    #[test]
    fn artwork_size_uses_width_fraction_when_room() {
        let layout = GalleryLayout::for_width(400.0);
        let [width, height] = layout.artwork_size(400.0, 10_000.0);
        assert_eq!(width, 320.0);
        assert!((height - 320.0 / ARTWORK_ASPECT).abs() < 1e-3);
    }
}
