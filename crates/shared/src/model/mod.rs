mod product;
mod product_type;

pub use self::product::{LOW_STOCK_THRESHOLD, Product, ProductId};
pub use self::product_type::{ProductType, ProductTypeId};
