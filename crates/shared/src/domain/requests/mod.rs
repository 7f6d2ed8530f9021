mod product;

pub use self::product::{ProductPayload, ProductQuery, SortOrder};
