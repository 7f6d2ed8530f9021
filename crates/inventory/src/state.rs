use crate::{
    abstract_trait::{DynCatalogClient, DynNavigator, DynNotifier},
    di::DependenciesInject,
    domain::Route,
    service::{CatalogHttpClient, NoticeQueue, RouteHistory},
    views::{CreateProductView, ListView, UpdateProductView},
};
use anyhow::{Context, Result};
use shared::config::Config;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub notices: Arc<NoticeQueue>,
    pub history: Arc<RouteHistory>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        info!("Connecting to catalog at {}", config.catalog_base_url);

        let client = CatalogHttpClient::new(&config.catalog_base_url)
            .context("Failed to build catalog client")?;

        Ok(Self::with_client(Arc::new(client)))
    }

    pub fn with_client(catalog_client: DynCatalogClient) -> Self {
        let notices = Arc::new(NoticeQueue::new());
        let history = Arc::new(RouteHistory::new());

        let di_container = DependenciesInject::new(
            catalog_client,
            notices.clone() as DynNotifier,
            history.clone() as DynNavigator,
        );

        Self {
            di_container,
            notices,
            history,
        }
    }

    pub fn list_view(&self) -> ListView {
        ListView::new(self.di_container.clone())
    }

    pub fn create_view(&self) -> CreateProductView {
        CreateProductView::new(self.di_container.clone())
    }

    pub fn update_view(&self, path: &str) -> Option<UpdateProductView> {
        match Route::parse(path)? {
            Route::UpdateProduct(id) => Some(UpdateProductView::new(self.di_container.clone(), id)),
            _ => None,
        }
    }
}
