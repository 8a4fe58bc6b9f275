use std::sync::Arc;

use crate::auth::AuthManager;
use crate::config::Config;
use crate::service::ProductCatalogService;

/// Application context containing shared dependencies, passed to handlers
/// as axum state. All collaborators are injected explicitly.
#[derive(Clone)]
pub struct AppContext {
    pub service: ProductCatalogService,
    pub auth_manager: Arc<AuthManager>,
    pub config: Arc<Config>,
}

impl AppContext {
    pub fn new(
        service: ProductCatalogService,
        auth_manager: Arc<AuthManager>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            service,
            auth_manager,
            config,
        }
    }
}
