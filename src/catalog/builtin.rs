use crate::catalog::models::{Artwork, ArtworkCatalog};
use crate::error::CatalogError;

pub fn builtin_artworks() -> Vec<Artwork> {
    vec![
        Artwork::new("img1.png", "canmore_view", "alberta", "2024"),
        Artwork::new("img2.png", "canmore_bridge", "alberta", "2024"),
        Artwork::new("img3.png", "calgary_downtown", "alberta", "2024"),
    ]
}

pub fn builtin_catalog() -> Result<ArtworkCatalog, CatalogError> {
    ArtworkCatalog::new(builtin_artworks())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::strings::StringTable;

    #[test]
    fn builtin_catalog_has_three_artworks() {
        let catalog = builtin_catalog().expect("builtin catalog is non-empty");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].image.0, "img1.png");
        assert_eq!(catalog[2].image.0, "img3.png");
    }

    #[test]
    fn every_builtin_key_has_builtin_text() {
        let strings = StringTable::builtin();
        for artwork in builtin_artworks() {
            assert_ne!(strings.text(artwork.title), artwork.title.0);
            assert_ne!(strings.text(artwork.artist), artwork.artist.0);
        }
    }
}
