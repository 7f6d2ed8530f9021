use crate::domain::Route;
use std::sync::Arc;

pub type DynNavigator = Arc<dyn NavigatorTrait + Send + Sync>;

pub trait NavigatorTrait {
    fn navigate(&self, route: Route);
}
