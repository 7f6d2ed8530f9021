use crate::form::FormField;
use shared::{model::Product, utils::format_form_date};

/// Raw field values as the inputs hold them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFormValues {
    pub name: String,
    pub import_date: String,
    pub sale_price: String,
    pub quantity: String,
    pub product_type_id: String,
}

impl ProductFormValues {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            import_date: format_form_date(product.import_date),
            sale_price: product.sale_price.to_string(),
            quantity: product.quantity.to_string(),
            product_type_id: product.product_type_id.to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::ImportDate => &self.import_date,
            FormField::SalePrice => &self.sale_price,
            FormField::Quantity => &self.quantity,
            FormField::ProductType => &self.product_type_id,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::ImportDate => &mut self.import_date,
            FormField::SalePrice => &mut self.sale_price,
            FormField::Quantity => &mut self.quantity,
            FormField::ProductType => &mut self.product_type_id,
        };
        *slot = value.into();
    }
}
