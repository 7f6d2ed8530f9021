mod notice;
mod route;

pub use self::notice::{Notice, NoticeLevel};
pub use self::route::Route;
