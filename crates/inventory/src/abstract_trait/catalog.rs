use async_trait::async_trait;
use shared::{
    domain::requests::{ProductPayload, ProductQuery},
    errors::ClientError,
    model::{Product, ProductId, ProductType},
};
use std::sync::Arc;

pub type DynCatalogClient = Arc<dyn CatalogClientTrait + Send + Sync>;

#[async_trait]
pub trait CatalogClientTrait {
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError>;
    async fn get_product(&self, id: ProductId) -> Result<Product, ClientError>;
    async fn list_product_types(&self) -> Result<Vec<ProductType>, ClientError>;
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ClientError>;
    async fn update_product(
        &self,
        id: ProductId,
        product: &Product,
    ) -> Result<Product, ClientError>;
    async fn delete_product(&self, id: ProductId) -> Result<(), ClientError>;
}
