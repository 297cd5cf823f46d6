use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::catalog::models::{Artwork, TextRef};
use crate::error::StringsError;

pub const STRINGS_FILE: &str = "strings.json";

const BUILTIN_STRINGS: &[(&str, &str)] = &[
    ("canmore_view", "Canmore View"),
    ("canmore_bridge", "Canmore Bridge"),
    ("calgary_downtown", "Calgary Downtown"),
    ("alberta", "Alberta"),
];

/// Display text for title/artist references.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_STRINGS
                .iter()
                .map(|(key, text)| (key.to_string(), text.to_string()))
                .collect(),
        }
    }

    /// Built-ins overlaid with `<assets_dir>/strings.json` when present.
    pub fn load(assets_dir: &Path) -> Result<Self, StringsError> {
        let path = assets_dir.join(STRINGS_FILE);
        let mut table = Self::builtin();

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no string table on disk, using built-ins");
                return Ok(table);
            }
            Err(source) => return Err(StringsError::Read { path, source }),
        };

        let overrides: HashMap<String, String> =
            serde_json::from_str(&raw).map_err(|source| StringsError::Parse {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), count = overrides.len(), "loaded string table");
        table.entries.extend(overrides);
        Ok(table)
    }

    /// Unknown keys resolve to the key itself.
    pub fn text(&self, key: TextRef) -> &str {
        self.entries.get(key.0).map(String::as_str).unwrap_or(key.0)
    }

    pub fn caption(&self, artwork: &Artwork) -> Caption {
        Caption {
            title: self.text(artwork.title).to_string(),
            byline: format!("{} ({})", self.text(artwork.artist), artwork.year),
        }
    }
}

/// Resolved caption text: title line and "artist (year)" line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub title: String,
    pub byline: String,
}
