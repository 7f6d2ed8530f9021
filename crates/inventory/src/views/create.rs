use crate::{
    di::DependenciesInject,
    domain::{Notice, Route},
    form::{FormField, ProductForm, SubmitOutcome},
    views::LoadOutcome,
};
use chrono::{Local, NaiveDate};
use shared::{errors::ViewError, model::ProductType};
use tracing::{error, info};

const TYPES_FAILED: &str = "Could not load the product type list.";

pub struct CreateProductView {
    deps: DependenciesInject,
    form: ProductForm,
    product_types: Vec<ProductType>,
}

impl CreateProductView {
    pub fn new(deps: DependenciesInject) -> Self {
        Self {
            deps,
            form: ProductForm::for_create(),
            product_types: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> LoadOutcome {
        info!("Loading product types for the create form");

        match self.deps.catalog_client.list_product_types().await {
            Ok(product_types) => {
                self.product_types = product_types;
                LoadOutcome::Ready
            }
            Err(err) => {
                error!("Loading product types failed: {err}");
                self.deps.notifier.notify(Notice::error(TYPES_FAILED));
                self.product_types.clear();
                LoadOutcome::Degraded(ViewError::Fetch(err))
            }
        }
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn product_types(&self) -> &[ProductType] {
        &self.product_types
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        self.form.set_field(field, value)
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.submit_as_of(Local::now().date_naive()).await
    }

    pub async fn submit_as_of(&mut self, today: NaiveDate) -> SubmitOutcome {
        self.form
            .submit(&self.deps, &self.product_types, today)
            .await
    }

    pub fn cancel(&self) {
        self.deps.navigator.navigate(Route::ProductList);
    }
}
