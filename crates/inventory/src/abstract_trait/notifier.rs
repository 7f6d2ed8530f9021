use crate::domain::Notice;
use std::sync::Arc;

pub type DynNotifier = Arc<dyn NotifierTrait + Send + Sync>;

/// Transient, non-blocking user notices (toasts).
pub trait NotifierTrait {
    fn notify(&self, notice: Notice);
}
