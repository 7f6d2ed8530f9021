#![allow(dead_code)]

mod fake_catalog;
mod stub_catalog;

pub use self::fake_catalog::FakeCatalog;
pub use self::stub_catalog::{StubCatalog, Write};

use chrono::NaiveDate;
use inventory::{abstract_trait::DynCatalogClient, state::AppState};
use shared::model::{Product, ProductType};
use std::sync::Arc;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn today() -> NaiveDate {
    date(2024, 6, 15)
}

pub fn product(id: i64, name: &str, quantity: i64, product_type_id: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        import_date: date(2024, 3, 5),
        sale_price: 250000.0,
        quantity,
        product_type_id,
    }
}

pub fn product_types() -> Vec<ProductType> {
    vec![
        ProductType {
            id: 1,
            name: "Áo".into(),
        },
        ProductType {
            id: 2,
            name: "Quần".into(),
        },
        ProductType {
            id: 3,
            name: "Váy".into(),
        },
    ]
}

pub fn clothing() -> Vec<Product> {
    vec![
        product(1, "Áo Thun", 30, 1),
        product(2, "Quần Jean", 120, 2),
        product(3, "Áo Khoác", 75, 1),
        product(4, "Váy Hoa", 12, 3),
    ]
}

/// Quantities 10, 20, ... 120 spread over the three types.
pub fn twelve_products() -> Vec<Product> {
    (1..=12)
        .map(|i| product(i, &format!("Mẫu {i}"), i * 10, 1 + i % 3))
        .collect()
}

pub fn app(stub: &Arc<StubCatalog>) -> AppState {
    AppState::with_client(stub.clone() as DynCatalogClient)
}
