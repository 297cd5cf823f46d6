use std::ops::Index;

use crate::error::CatalogError;

/// Asset file name, resolved against the configured assets directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(pub &'static str);

/// Key into the string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRef(pub &'static str);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub image: ImageRef,
    pub title: TextRef,
    pub artist: TextRef,
    pub year: String,
}

impl Artwork {
    pub fn new(image: &'static str, title: &'static str, artist: &'static str, year: &str) -> Self {
        Self {
            image: ImageRef(image),
            title: TextRef(title),
            artist: TextRef(artist),
            year: year.to_string(),
        }
    }
}

/// Fixed, ordered, non-empty list of artworks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkCatalog {
    artworks: Vec<Artwork>,
}

impl ArtworkCatalog {
    pub fn new(artworks: Vec<Artwork>) -> Result<Self, CatalogError> {
        if artworks.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { artworks })
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.artworks.iter()
    }
}

impl Index<usize> for ArtworkCatalog {
    type Output = Artwork;

    fn index(&self, index: usize) -> &Self::Output {
        &self.artworks[index]
    }
}
