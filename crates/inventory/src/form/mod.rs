mod errors;
mod product_form;
mod rules;
mod schema;
mod submit;
mod values;

pub use self::errors::FormErrors;
pub use self::product_form::{ProductForm, SubmitOutcome, WriteTarget};
pub use self::rules::{
    NAME_MAX_CHARS, validate_import_date, validate_name, validate_product_type,
    validate_quantity, validate_sale_price,
};
pub use self::schema::{FieldAccess, FormField, FormSchema};
pub use self::submit::{SubmitGuard, SubmitLatch};
pub use self::values::ProductFormValues;
