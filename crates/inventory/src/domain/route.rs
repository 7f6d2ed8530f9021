use shared::model::ProductId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ProductList,
    CreateProduct,
    UpdateProduct(ProductId),
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::ProductList),
            ["add"] => Some(Route::CreateProduct),
            ["update", id] => id.parse().ok().map(Route::UpdateProduct),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::ProductList => write!(f, "/"),
            Route::CreateProduct => write!(f, "/add"),
            Route::UpdateProduct(id) => write!(f, "/update/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::ProductList,
            Route::CreateProduct,
            Route::UpdateProduct(42),
        ] {
            assert_eq!(Route::parse(&route.to_string()), Some(route));
        }
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/update/abc"), None);
        assert_eq!(Route::parse("/products/1/edit"), None);
    }
}
