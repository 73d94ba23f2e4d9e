use std::sync::Arc;
use tokio::sync::Mutex;

use phonedex_catalog::Catalog;
use phonedex_core::{Wishlist, WishlistEntry};

/// Everything a request handler needs, built once at startup.
///
/// The catalog is immutable and shared; the wishlist is process-wide and
/// serialized behind a mutex.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    wishlist: Arc<Mutex<Wishlist>>,
    result_limit: usize,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, result_limit: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            wishlist: Arc::new(Mutex::new(Wishlist::new())),
            result_limit,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn result_limit(&self) -> usize {
        self.result_limit
    }

    pub(crate) fn wishlist(&self) -> &Mutex<Wishlist> {
        &self.wishlist
    }

    /// Copy of the wishlist as it is right now.
    pub async fn wishlist_snapshot(&self) -> Vec<WishlistEntry> {
        self.wishlist.lock().await.list().to_vec()
    }
}
