mod myconfig;

pub use self::myconfig::{Config, DEFAULT_CATALOG_API_URL};
