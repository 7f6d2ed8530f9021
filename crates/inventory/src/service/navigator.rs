use crate::{abstract_trait::NavigatorTrait, domain::Route};
use std::sync::{Mutex, MutexGuard};
use tracing::info;

#[derive(Debug, Default)]
pub struct RouteHistory {
    visited: Mutex<Vec<Route>>,
}

impl RouteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Route>> {
        self.visited.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn current(&self) -> Option<Route> {
        self.lock().last().copied()
    }

    pub fn visited(&self) -> Vec<Route> {
        self.lock().clone()
    }
}

impl NavigatorTrait for RouteHistory {
    fn navigate(&self, route: Route) {
        info!("Navigating to {route}");
        self.lock().push(route);
    }
}
