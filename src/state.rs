use std::sync::Arc;

use crate::catalog::CatalogSource;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
}

impl AppState {
    pub fn new(catalog: impl CatalogSource + 'static) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
