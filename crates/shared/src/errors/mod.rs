mod client;
mod view;

pub use self::client::ClientError;
pub use self::view::ViewError;
