mod pagination;
mod pipeline;

pub use self::pagination::{PageControls, Pagination};
pub use self::pipeline::{FilterKey, ListingPage, ListingQuery, PAGE_SIZE, apply};
