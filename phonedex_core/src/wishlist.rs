//! Process-wide wishlist of saved phones, keyed by phone name.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub phone: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
}

/// Ordered list of entries, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

fn require_phone(phone: &str) -> Result<()> {
    if phone.is_empty() {
        return Err(Error::Validation("phone is required".to_string()));
    }
    Ok(())
}

impl Wishlist {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry unless one with the same phone already exists.
    pub fn add(&mut self, phone: &str, image_url: &str) -> Result<()> {
        require_phone(phone)?;
        if self.contains(phone) {
            debug!("Wishlist already contains {phone:?}");
            return Ok(());
        }
        self.entries.push(WishlistEntry {
            phone: phone.to_string(),
            image_url: image_url.to_string(),
        });
        Ok(())
    }

    /// Remove every entry for `phone`. Removing an absent phone is a no-op.
    pub fn remove(&mut self, phone: &str) -> Result<()> {
        require_phone(phone)?;
        self.entries.retain(|entry| entry.phone != phone);
        Ok(())
    }

    #[must_use]
    pub fn list(&self) -> &[WishlistEntry] {
        &self.entries
    }

    #[must_use]
    pub fn contains(&self, phone: &str) -> bool {
        self.entries.iter().any(|entry| entry.phone == phone)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
