mod catalog;
mod navigator;
mod notifier;

pub use self::catalog::{CatalogClientTrait, DynCatalogClient};
pub use self::navigator::{DynNavigator, NavigatorTrait};
pub use self::notifier::{DynNotifier, NotifierTrait};
