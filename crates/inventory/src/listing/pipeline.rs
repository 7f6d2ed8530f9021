use crate::listing::Pagination;
use shared::{
    domain::requests::SortOrder,
    model::{Product, ProductTypeId},
};
use std::cmp::Reverse;

pub const PAGE_SIZE: usize = 5;

/// Normalised (search term, type filter) pair; two queries with the same key
/// select the same rows.
pub type FilterKey = (Option<String>, Option<ProductTypeId>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub search_term: String,
    pub product_type: Option<ProductTypeId>,
    pub sort_order: SortOrder,
    pub page: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            product_type: None,
            sort_order: SortOrder::Desc,
            page: 1,
        }
    }
}

impl ListingQuery {
    pub fn normalized_term(&self) -> Option<String> {
        let term = self.search_term.trim();
        (!term.is_empty()).then(|| term.to_lowercase())
    }

    pub fn has_active_filter(&self) -> bool {
        self.normalized_term().is_some() || self.product_type.is_some()
    }

    pub fn filter_key(&self) -> FilterKey {
        (self.normalized_term(), self.product_type)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    pub rows: Vec<Product>,
    pub pagination: Pagination,
    /// Filters were active and nothing matched.
    pub no_matches: bool,
}

impl ListingPage {
    pub fn empty(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            pagination: Pagination::new(0, page_size, 1),
            no_matches: false,
        }
    }
}

/// Filter by name, filter by type, sort by quantity, then cut out one page.
pub fn apply(products: &[Product], query: &ListingQuery, page_size: usize) -> ListingPage {
    let term = query.normalized_term();

    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|product| {
            term.as_deref()
                .is_none_or(|term| product.name.to_lowercase().contains(term))
        })
        .filter(|product| {
            query
                .product_type
                .is_none_or(|type_id| product.product_type_id == type_id)
        })
        .collect();

    let no_matches = matched.is_empty() && query.has_active_filter();

    match query.sort_order {
        SortOrder::Asc => matched.sort_by_key(|product| product.quantity),
        SortOrder::Desc => matched.sort_by_key(|product| Reverse(product.quantity)),
    }

    let pagination = Pagination::new(matched.len(), page_size, query.page);
    let rows = matched[pagination.range()]
        .iter()
        .map(|product| (*product).clone())
        .collect();

    ListingPage {
        rows,
        pagination,
        no_matches,
    }
}
