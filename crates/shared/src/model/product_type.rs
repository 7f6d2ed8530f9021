use crate::utils::numeric_id;
use serde::{Deserialize, Serialize};

pub type ProductTypeId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductType {
    #[serde(deserialize_with = "numeric_id")]
    pub id: ProductTypeId,
    #[serde(rename = "ten_loai")]
    pub name: String,
}
