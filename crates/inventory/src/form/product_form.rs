use crate::{
    di::DependenciesInject,
    domain::{Notice, Route},
    form::{
        FormErrors, FormField, FormSchema, ProductFormValues, SubmitLatch, validate_import_date,
        validate_name, validate_product_type, validate_quantity, validate_sale_price,
    },
};
use chrono::NaiveDate;
use shared::{
    domain::requests::ProductPayload,
    errors::ViewError,
    model::{Product, ProductId, ProductType},
};
use std::borrow::Cow;
use tracing::{error, info, warn};
use validator::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteTarget {
    Create,
    Update(ProductId),
}

impl WriteTarget {
    fn schema(self) -> FormSchema {
        match self {
            WriteTarget::Create => FormSchema::create(),
            WriteTarget::Update(_) => FormSchema::update(),
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            WriteTarget::Create => "Product created successfully!",
            WriteTarget::Update(_) => "Product updated successfully!",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            WriteTarget::Create => "Failed to create product.",
            WriteTarget::Update(_) => "Failed to update product.",
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Saved(Product),
    Invalid(ViewError),
    Failed(ViewError),
    /// Another submission is still in flight; nothing was sent.
    Pending,
    /// The form has not been loaded yet.
    NotReady,
}

/// Field state plus the submit lifecycle shared by the create and update flows.
#[derive(Debug)]
pub struct ProductForm {
    schema: FormSchema,
    target: WriteTarget,
    values: ProductFormValues,
    original: Option<Product>,
    errors: FormErrors,
    latch: SubmitLatch,
}

impl ProductForm {
    pub fn for_create() -> Self {
        Self::new(WriteTarget::Create, ProductFormValues::default(), None)
    }

    pub fn for_update(product: Product) -> Self {
        Self::new(
            WriteTarget::Update(product.id),
            ProductFormValues::from_product(&product),
            Some(product),
        )
    }

    fn new(target: WriteTarget, values: ProductFormValues, original: Option<Product>) -> Self {
        Self {
            schema: target.schema(),
            target,
            values,
            original,
            errors: FormErrors::default(),
            latch: SubmitLatch::new(),
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn target(&self) -> WriteTarget {
        self.target
    }

    pub fn values(&self) -> &ProductFormValues {
        &self.values
    }

    pub fn original(&self) -> Option<&Product> {
        self.original.as_ref()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.latch.is_held()
    }

    pub fn submit_latch(&self) -> SubmitLatch {
        self.latch.clone()
    }

    /// Returns false and leaves the value alone for read-only fields.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if !self.schema.is_editable(field) {
            warn!("Ignoring edit of read-only field {}", field.key());
            return false;
        }

        self.values.set(field, value);
        true
    }

    fn field<T>(
        &self,
        field: FormField,
        errors: &mut FormErrors,
        rule: impl FnOnce(&str) -> Result<T, ValidationError>,
        from_original: impl FnOnce(&Product) -> T,
    ) -> Option<T> {
        if !self.schema.is_editable(field) {
            let value = self.original.as_ref().map(from_original);
            if value.is_none() {
                errors.insert(
                    field,
                    ValidationError::new("unavailable")
                        .with_message(Cow::Borrowed("Value is not available")),
                );
            }
            return value;
        }

        match rule(self.values.get(field)) {
            Ok(value) => Some(value),
            Err(error) => {
                errors.insert(field, error);
                None
            }
        }
    }

    /// Runs every rule of the schema; stores the errors and returns the payload
    /// only when all fields pass.
    pub fn validate(
        &mut self,
        product_types: &[ProductType],
        today: NaiveDate,
    ) -> Option<ProductPayload> {
        let mut errors = FormErrors::default();

        let name = self.field(FormField::Name, &mut errors, validate_name, |p| {
            p.name.clone()
        });
        let import_date = self.field(
            FormField::ImportDate,
            &mut errors,
            |raw| validate_import_date(raw, today),
            |p| p.import_date,
        );
        let sale_price = self.field(
            FormField::SalePrice,
            &mut errors,
            validate_sale_price,
            |p| p.sale_price,
        );
        let quantity = self.field(FormField::Quantity, &mut errors, validate_quantity, |p| {
            p.quantity
        });
        let product_type_id = self.field(
            FormField::ProductType,
            &mut errors,
            |raw| validate_product_type(raw, product_types),
            |p| p.product_type_id,
        );

        self.errors = errors;

        match (name, import_date, sale_price, quantity, product_type_id) {
            (
                Some(name),
                Some(import_date),
                Some(sale_price),
                Some(quantity),
                Some(product_type_id),
            ) => Some(ProductPayload {
                name,
                import_date,
                sale_price,
                quantity,
                product_type_id,
            }),
            _ => None,
        }
    }

    pub async fn submit(
        &mut self,
        deps: &DependenciesInject,
        product_types: &[ProductType],
        today: NaiveDate,
    ) -> SubmitOutcome {
        let Some(_guard) = self.latch.try_acquire() else {
            warn!("Submission already in flight, ignoring");
            return SubmitOutcome::Pending;
        };

        let Some(payload) = self.validate(product_types, today) else {
            info!("Form rejected, invalid fields: {:?}", self.errors.fields());
            return SubmitOutcome::Invalid(ViewError::Validation(self.errors.fields()));
        };

        let result = match self.target {
            WriteTarget::Create => deps.catalog_client.create_product(&payload).await,
            WriteTarget::Update(id) => {
                deps.catalog_client
                    .update_product(id, &payload.with_id(id))
                    .await
            }
        };

        match result {
            Ok(product) => {
                info!("Saved product id={}", product.id);
                deps.notifier
                    .notify(Notice::success(self.target.success_message()));
                deps.navigator.navigate(Route::ProductList);
                SubmitOutcome::Saved(product)
            }
            Err(err) => {
                error!("Saving product failed: {err}");
                deps.notifier
                    .notify(Notice::error(self.target.failure_message()));
                SubmitOutcome::Failed(ViewError::Write(err))
            }
        }
    }
}
