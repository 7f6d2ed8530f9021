mod catalog;
mod navigator;
mod notifier;

pub use self::catalog::CatalogHttpClient;
pub use self::navigator::RouteHistory;
pub use self::notifier::NoticeQueue;
