use crate::abstract_trait::CatalogClientTrait;
use async_trait::async_trait;
use reqwest::{
    Client, Response, StatusCode,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use shared::{
    domain::requests::{ProductPayload, ProductQuery},
    errors::ClientError,
    model::{Product, ProductId, ProductType},
};
use tracing::{error, info};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct CatalogHttpClient {
    client: Client,
    base_url: String,
}

impl CatalogHttpClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check_status(operation: &str, response: Response) -> Result<Response, ClientError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            error!("{operation} failed: not found");
            return Err(ClientError::NotFound);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("{operation} failed with status {status}: {message}");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(
        operation: &str,
        response: Response,
    ) -> Result<T, ClientError> {
        let response = Self::check_status(operation, response).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|err| {
            error!("{operation} returned an unreadable body: {err}");
            ClientError::Decode(err.to_string())
        })
    }
}

#[async_trait]
impl CatalogClientTrait for CatalogHttpClient {
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError> {
        info!("Retrieving all products (query: {query:?})");

        let response = self
            .client
            .get(self.url("/products"))
            .query(query)
            .send()
            .await
            .inspect_err(|err| error!("GET /products failed: {err}"))?;

        let products: Vec<Product> = Self::read_json("GET /products", response).await?;

        info!("Retrieved {} products", products.len());
        Ok(products)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ClientError> {
        info!("Retrieving product id={id}");

        let response = self
            .client
            .get(self.url(&format!("/products/{id}")))
            .send()
            .await
            .inspect_err(|err| error!("GET /products/{id} failed: {err}"))?;

        Self::read_json(&format!("GET /products/{id}"), response).await
    }

    async fn list_product_types(&self) -> Result<Vec<ProductType>, ClientError> {
        info!("Retrieving product types");

        let response = self
            .client
            .get(self.url("/productTypes"))
            .send()
            .await
            .inspect_err(|err| error!("GET /productTypes failed: {err}"))?;

        let types: Vec<ProductType> = Self::read_json("GET /productTypes", response).await?;

        info!("Retrieved {} product types", types.len());
        Ok(types)
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ClientError> {
        info!("Creating product: {}", payload.name);

        payload.validate()?;

        let response = self
            .client
            .post(self.url("/products"))
            .json(payload)
            .send()
            .await
            .inspect_err(|err| error!("POST /products failed: {err}"))?;

        let product: Product = Self::read_json("POST /products", response).await?;

        info!("Created product id={}", product.id);
        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        product: &Product,
    ) -> Result<Product, ClientError> {
        info!("Updating product id={id}");

        // The stored price goes back untouched, so only the editable fields are checked.
        if let Err(mut errors) = ProductPayload::from(product.clone()).validate() {
            errors.errors_mut().remove("sale_price");
            if !errors.is_empty() {
                return Err(errors.into());
            }
        }

        let response = self
            .client
            .put(self.url(&format!("/products/{id}")))
            .json(product)
            .send()
            .await
            .inspect_err(|err| error!("PUT /products/{id} failed: {err}"))?;

        Self::read_json(&format!("PUT /products/{id}"), response).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ClientError> {
        info!("Deleting product id={id}");

        let response = self
            .client
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await
            .inspect_err(|err| error!("DELETE /products/{id} failed: {err}"))?;

        Self::check_status(&format!("DELETE /products/{id}"), response).await?;

        info!("Deleted product id={id}");
        Ok(())
    }
}
