use crate::model::ProductTypeId;
use crate::utils::{format_display_date, format_price, iso_date, numeric_id};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ProductId = i64;

/// Quantities strictly below this are shown as low stock. Display only, never stored.
pub const LOW_STOCK_THRESHOLD: i64 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "numeric_id")]
    pub id: ProductId,
    #[serde(rename = "ten_san_pham")]
    pub name: String,
    #[serde(rename = "ngay_nhap", with = "iso_date")]
    pub import_date: NaiveDate,
    #[serde(rename = "gia_ban")]
    pub sale_price: f64,
    #[serde(rename = "so_luong")]
    pub quantity: i64,
    #[serde(rename = "loai_san_pham_id", deserialize_with = "numeric_id")]
    pub product_type_id: ProductTypeId,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }

    pub fn display_import_date(&self) -> String {
        format_display_date(self.import_date)
    }

    pub fn display_sale_price(&self) -> String {
        format_price(self.sale_price)
    }
}
