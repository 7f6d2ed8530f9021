mod create;
mod list;
mod update;

pub use self::create::CreateProductView;
pub use self::list::{ListRow, ListView};
pub use self::update::UpdateProductView;

use shared::errors::ViewError;

#[derive(Debug)]
pub enum LoadOutcome {
    Ready,
    /// Loading failed; the view stays up with empty data.
    Degraded(ViewError),
    /// Loading failed and the view navigated back to the listing.
    Redirected(ViewError),
    /// The view was torn down first; the late result was dropped.
    Cancelled,
}
