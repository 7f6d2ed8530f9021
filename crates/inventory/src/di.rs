use crate::abstract_trait::{DynCatalogClient, DynNavigator, DynNotifier};

#[derive(Clone)]
pub struct DependenciesInject {
    pub catalog_client: DynCatalogClient,
    pub notifier: DynNotifier,
    pub navigator: DynNavigator,
}

impl DependenciesInject {
    pub fn new(
        catalog_client: DynCatalogClient,
        notifier: DynNotifier,
        navigator: DynNavigator,
    ) -> Self {
        Self {
            catalog_client,
            notifier,
            navigator,
        }
    }
}
