use crate::model::{Product, ProductId, ProductTypeId};
use crate::utils::iso_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Server-side equivalents of the listing filters. The list view filters in
/// memory and sends none of these; they exist for callers that page on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductQuery {
    #[serde(rename = "ten_san_pham_like", skip_serializing_if = "Option::is_none")]
    pub name_like: Option<String>,

    #[serde(rename = "loai_san_pham_id", skip_serializing_if = "Option::is_none")]
    pub product_type_id: Option<ProductTypeId>,

    #[serde(rename = "_sort", skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    #[serde(rename = "_order", skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl ProductQuery {
    pub fn sorted_by_quantity(order: SortOrder) -> Self {
        Self {
            sort: Some("so_luong".to_string()),
            order: Some(order),
            ..Self::default()
        }
    }
}

/// Body of a create request; also the editable part of an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductPayload {
    #[serde(rename = "ten_san_pham")]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Product name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[serde(rename = "ngay_nhap", with = "iso_date")]
    pub import_date: NaiveDate,

    #[serde(rename = "gia_ban")]
    #[validate(range(exclusive_min = 0.0, message = "Sale price must be a positive number"))]
    pub sale_price: f64,

    #[serde(rename = "so_luong")]
    #[validate(range(min = 1, message = "Quantity must be greater than 0"))]
    pub quantity: i64,

    #[serde(rename = "loai_san_pham_id")]
    pub product_type_id: ProductTypeId,
}

impl ProductPayload {
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            import_date: self.import_date,
            sale_price: self.sale_price,
            quantity: self.quantity,
            product_type_id: self.product_type_id,
        }
    }
}

impl From<Product> for ProductPayload {
    fn from(value: Product) -> Self {
        ProductPayload {
            name: value.name,
            import_date: value.import_date,
            sale_price: value.sale_price,
            quantity: value.quantity,
            product_type_id: value.product_type_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ProductPayload {
        ProductPayload {
            name: "Áo Sơ Mi".into(),
            import_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            sale_price: 199000.0,
            quantity: 10,
            product_type_id: 1,
        }
    }

    #[test]
    fn payload_without_id_on_the_wire() {
        let value = serde_json::to_value(payload()).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["so_luong"], 10);
        assert_eq!(value["ngay_nhap"], "2024-05-01");
    }

    #[test]
    fn derive_rules_reject_bad_payload() {
        let mut bad = payload();
        bad.quantity = 0;
        bad.sale_price = 0.0;

        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("quantity"));
        assert!(fields.contains_key("sale_price"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn query_serializes_only_present_params() {
        let query = ProductQuery::sorted_by_quantity(SortOrder::Asc);
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["_sort"], "so_luong");
        assert_eq!(value["_order"], "asc");
        assert!(value.get("ten_san_pham_like").is_none());
    }

    #[test]
    fn sort_order_toggles_and_defaults_to_desc() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
    }
}
