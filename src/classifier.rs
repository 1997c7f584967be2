//! Color-to-province classification.
//!
//! The definition table maps every palette color in the province bitmap to a
//! numeric province id. Parsing is tolerant: a row only counts if its leading
//! field is a non-negative integer and three channel values follow, anything
//! else is skipped. Duplicate colors keep the last row seen.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Province identifier; 0 is reserved for "no province / background".
pub type ProvinceId = u32;

/// Read-only mapping from an RGB triple to a province id.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    colors: HashMap<[u8; 3], ProvinceId>,
}

impl Classifier {
    /// Build a classifier from (id, r, g, b) records.
    pub fn from_records(records: impl IntoIterator<Item = (ProvinceId, [u8; 3])>) -> Self {
        let mut colors = HashMap::new();
        for (pid, rgb) in records {
            colors.insert(rgb, pid);
        }
        Self { colors }
    }

    /// Load a `;`-delimited definition table from disk.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Parse definition-table text, skipping malformed rows.
    pub fn parse(text: &str) -> Self {
        let mut colors = HashMap::new();
        for line in text.lines() {
            let mut fields = line.split(';');
            let Some(pid) = fields.next().and_then(|f| f.trim().parse::<ProvinceId>().ok())
            else {
                continue;
            };
            let channels: Vec<u8> = fields
                .take(3)
                .filter_map(|f| f.trim().parse::<u8>().ok())
                .collect();
            if let [r, g, b] = channels[..] {
                colors.insert([r, g, b], pid);
            }
        }
        Self { colors }
    }

    /// Look up the province id for a color; unknown colors are background.
    pub fn lookup(&self, color: [u8; 3]) -> ProvinceId {
        self.colors.get(&color).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
