use crate::{
    di::DependenciesInject,
    domain::{Notice, Route},
    listing::{FilterKey, ListingPage, ListingQuery, PAGE_SIZE, PageControls, apply},
    views::LoadOutcome,
};
use shared::{
    domain::requests::{ProductQuery, SortOrder},
    errors::ViewError,
    model::{Product, ProductId, ProductType, ProductTypeId},
};
use tracing::{debug, error, info};

const FETCH_FAILED: &str = "Could not load data from the server.";
const NO_MATCHES: &str = "No matching products found.";

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: ProductId,
    pub code: String,
    pub name: String,
    pub import_date: String,
    pub quantity: i64,
    pub low_stock: bool,
    pub type_name: Option<String>,
    pub edit_route: Route,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Idle,
    Ready,
    Failed,
}

pub struct ListView {
    deps: DependenciesInject,
    products: Vec<Product>,
    product_types: Vec<ProductType>,
    query: ListingQuery,
    page_size: usize,
    current: ListingPage,
    notified_empty: Option<FilterKey>,
    state: ListState,
}

impl ListView {
    pub fn new(deps: DependenciesInject) -> Self {
        Self::with_page_size(deps, PAGE_SIZE)
    }

    pub fn with_page_size(deps: DependenciesInject, page_size: usize) -> Self {
        Self {
            deps,
            products: Vec::new(),
            product_types: Vec::new(),
            query: ListingQuery::default(),
            page_size,
            current: ListingPage::empty(page_size),
            notified_empty: None,
            state: ListState::Idle,
        }
    }

    /// Fetches products and product types together. Once loaded the view keeps
    /// its data; after a failed load, calling again retries.
    pub async fn activate(&mut self) -> LoadOutcome {
        if self.state == ListState::Ready {
            debug!("List view already loaded, skipping fetch");
            return LoadOutcome::Ready;
        }

        info!("Loading products and product types");

        let client = self.deps.catalog_client.clone();
        let query = ProductQuery::default();
        let result = tokio::try_join!(client.list_products(&query), client.list_product_types());

        let outcome = match result {
            Ok((products, product_types)) => {
                info!(
                    "Loaded {} products and {} product types",
                    products.len(),
                    product_types.len()
                );
                self.products = products;
                self.product_types = product_types;
                self.state = ListState::Ready;
                LoadOutcome::Ready
            }
            Err(err) => {
                error!("Initial load failed: {err}");
                self.deps.notifier.notify(Notice::error(FETCH_FAILED));
                self.products.clear();
                self.product_types.clear();
                self.state = ListState::Failed;
                LoadOutcome::Degraded(ViewError::Fetch(err))
            }
        };

        self.recompute();
        outcome
    }

    pub fn is_loaded(&self) -> bool {
        self.state == ListState::Ready
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product_types(&self) -> &[ProductType] {
        &self.product_types
    }

    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    pub fn page(&self) -> &ListingPage {
        &self.current
    }

    pub fn controls(&self) -> PageControls {
        self.current.pagination.controls()
    }

    pub fn type_name(&self, id: ProductTypeId) -> Option<&str> {
        self.product_types
            .iter()
            .find(|product_type| product_type.id == id)
            .map(|product_type| product_type.name.as_str())
    }

    pub fn rows(&self) -> Vec<ListRow> {
        self.current
            .rows
            .iter()
            .map(|product| ListRow {
                id: product.id,
                code: format!("#{}", product.id),
                name: product.name.clone(),
                import_date: product.display_import_date(),
                quantity: product.quantity,
                low_stock: product.is_low_stock(),
                type_name: self.type_name(product.product_type_id).map(str::to_string),
                edit_route: Route::UpdateProduct(product.id),
            })
            .collect()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.query.search_term != term {
            self.query.search_term = term;
            self.query.page = 1;
        }
        self.recompute();
    }

    pub fn select_product_type(&mut self, product_type: Option<ProductTypeId>) {
        if self.query.product_type != product_type {
            self.query.product_type = product_type;
            self.query.page = 1;
        }
        self.recompute();
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.query.sort_order = sort_order;
        self.recompute();
    }

    pub fn toggle_sort_order(&mut self) {
        self.set_sort_order(self.query.sort_order.toggled());
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.query.page = page;
        self.recompute();
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.query.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.query.page.saturating_sub(1).max(1));
    }

    fn recompute(&mut self) {
        self.current = apply(&self.products, &self.query, self.page_size);
        self.query.page = self.current.pagination.page;

        debug!(
            "Recomputed listing: {} rows on page {}/{}",
            self.current.rows.len(),
            self.current.pagination.page,
            self.current.pagination.total_pages
        );

        // Nothing has been fetched yet, so an empty result says nothing.
        if self.state == ListState::Idle {
            return;
        }

        if !self.current.no_matches {
            self.notified_empty = None;
            return;
        }

        let key = self.query.filter_key();
        if self.notified_empty.as_ref() != Some(&key) {
            self.deps.notifier.notify(Notice::info(NO_MATCHES));
            self.notified_empty = Some(key);
        }
    }
}
