use crate::{
    di::DependenciesInject,
    domain::{Notice, Route},
    form::{FormField, ProductForm, SubmitOutcome},
    views::LoadOutcome,
};
use chrono::{Local, NaiveDate};
use shared::{
    errors::{ClientError, ViewError},
    model::{ProductId, ProductType},
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const NOT_FOUND: &str = "Product not found!";

enum UpdateState {
    Loading,
    Ready {
        form: ProductForm,
        product_types: Vec<ProductType>,
    },
    Redirected,
}

pub struct UpdateProductView {
    deps: DependenciesInject,
    id: ProductId,
    cancel: CancellationToken,
    state: UpdateState,
}

impl UpdateProductView {
    pub fn new(deps: DependenciesInject, id: ProductId) -> Self {
        Self {
            deps,
            id,
            cancel: CancellationToken::new(),
            state: UpdateState::Loading,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Cancelling the returned token tears the view down.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, UpdateState::Loading)
    }

    pub fn is_redirected(&self) -> bool {
        matches!(self.state, UpdateState::Redirected)
    }

    /// Fetches the record and the type list together. Nothing is applied
    /// once the view has been torn down.
    pub async fn load(&mut self) -> LoadOutcome {
        if self.cancel.is_cancelled() {
            return LoadOutcome::Cancelled;
        }

        let id = self.id;
        info!("Loading product id={id} for editing");

        let client = self.deps.catalog_client.clone();
        let cancel = self.cancel.clone();

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = async {
                tokio::try_join!(client.get_product(id), client.list_product_types())
            } => Some(result),
        };

        let Some(result) = result.filter(|_| !cancel.is_cancelled()) else {
            info!("Update view for id={id} torn down, discarding load result");
            return LoadOutcome::Cancelled;
        };

        match result {
            Ok((product, product_types)) => {
                self.state = UpdateState::Ready {
                    form: ProductForm::for_update(product),
                    product_types,
                };
                LoadOutcome::Ready
            }
            Err(err) => {
                error!("Loading product id={id} failed: {err}");
                self.deps.notifier.notify(Notice::error(NOT_FOUND));
                self.deps.navigator.navigate(Route::ProductList);
                self.state = UpdateState::Redirected;

                let err = match err {
                    ClientError::NotFound => ViewError::NotFound(id),
                    other => ViewError::Fetch(other),
                };
                LoadOutcome::Redirected(err)
            }
        }
    }

    pub fn form(&self) -> Option<&ProductForm> {
        match &self.state {
            UpdateState::Ready { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn product_types(&self) -> &[ProductType] {
        match &self.state {
            UpdateState::Ready { product_types, .. } => product_types.as_slice(),
            _ => &[],
        }
    }

    /// The locked price as shown next to the form.
    pub fn price_display(&self) -> Option<String> {
        self.form()
            .and_then(ProductForm::original)
            .map(|product| product.display_sale_price())
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        match &mut self.state {
            UpdateState::Ready { form, .. } => form.set_field(field, value),
            _ => false,
        }
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.submit_as_of(Local::now().date_naive()).await
    }

    pub async fn submit_as_of(&mut self, today: NaiveDate) -> SubmitOutcome {
        match &mut self.state {
            UpdateState::Ready {
                form,
                product_types,
            } => form.submit(&self.deps, product_types.as_slice(), today).await,
            _ => SubmitOutcome::NotReady,
        }
    }

    pub fn cancel(&self) {
        self.deps.navigator.navigate(Route::ProductList);
    }
}

impl Drop for UpdateProductView {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
