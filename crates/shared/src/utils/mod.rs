mod date;
mod logs;
mod numeric_id;
mod price;

pub use self::date::{format_display_date, format_form_date, iso_date, parse_import_date};
pub use self::logs::init_logger;
pub use self::numeric_id::numeric_id;
pub use self::price::format_price;
