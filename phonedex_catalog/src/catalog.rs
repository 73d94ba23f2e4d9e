//! The normalized display table, loaded once and shared read-only.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::{info, warn};

use phonedex_core::{DisplayRecord, Result};

use crate::normalize::{NormalizeOptions, normalize_records};
use crate::raw::{RawRecord, read_raw_records};

/// In-memory display table. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<DisplayRecord>,
}

impl Catalog {
    /// A catalog with the full schema and no rows.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Load and normalize a CSV catalog.
    ///
    /// A missing file is not an error: a diagnostic is logged and an empty
    /// catalog is returned, so every search simply finds nothing.
    pub fn load(path: impl AsRef<Path>, options: &NormalizeOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Catalog file not found at {}; serving an empty catalog",
                    path.display()
                );
                return Ok(Self::empty());
            }
            Err(e) => return Err(e.into()),
        };

        let catalog = Self::from_reader(BufReader::new(file), options)?;
        info!(
            "Loaded {} phones from {}",
            catalog.records.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse and normalize CSV text from any reader.
    pub fn from_reader<R: Read>(reader: R, options: &NormalizeOptions) -> Result<Self> {
        let raw = read_raw_records(reader)?;
        Ok(Self::from_raw(&raw, options))
    }

    #[must_use]
    pub fn from_raw(raw: &[RawRecord], options: &NormalizeOptions) -> Self {
        Self {
            records: normalize_records(raw, options),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
