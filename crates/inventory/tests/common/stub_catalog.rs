use async_trait::async_trait;
use inventory::abstract_trait::CatalogClientTrait;
use shared::{
    domain::requests::{ProductPayload, ProductQuery},
    errors::ClientError,
    model::{Product, ProductId, ProductType},
};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq)]
pub enum Write {
    Create(ProductPayload),
    Update(ProductId, Product),
    Delete(ProductId),
}

/// In-memory catalog with switchable failures and gates that park a call
/// until the test releases it.
#[derive(Default)]
pub struct StubCatalog {
    products: Mutex<Vec<Product>>,
    product_types: Vec<ProductType>,
    writes: Mutex<Vec<Write>>,
    reads: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    hold_reads: AtomicBool,
    hold_writes: AtomicBool,
    started: Notify,
    release: Notify,
}

fn server_error() -> ClientError {
    ClientError::Status {
        status: 500,
        message: "Internal Server Error".into(),
    }
}

impl StubCatalog {
    pub fn new(products: Vec<Product>, product_types: Vec<ProductType>) -> Self {
        Self {
            products: Mutex::new(products),
            product_types,
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn hold_reads(&self) {
        self.hold_reads.store(true, Ordering::SeqCst);
    }

    pub fn hold_writes(&self) {
        self.hold_writes.store(true, Ordering::SeqCst);
    }

    /// Resolves once a held call has been entered.
    pub async fn started(&self) {
        self.started.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn writes(&self) -> Vec<Write> {
        self.writes.lock().unwrap().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    async fn gate(&self, held: &AtomicBool) {
        if held.load(Ordering::SeqCst) {
            self.started.notify_one();
            self.release.notified().await;
        }
    }

    fn read(&self) -> Result<(), ClientError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(())
    }

    fn write(&self, write: Write) -> Result<(), ClientError> {
        self.writes.lock().unwrap().push(write);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogClientTrait for StubCatalog {
    async fn list_products(&self, _query: &ProductQuery) -> Result<Vec<Product>, ClientError> {
        self.read()?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ClientError> {
        self.gate(&self.hold_reads).await;
        self.read()?;
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(ClientError::NotFound)
    }

    async fn list_product_types(&self) -> Result<Vec<ProductType>, ClientError> {
        self.read()?;
        Ok(self.product_types.clone())
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ClientError> {
        self.gate(&self.hold_writes).await;
        self.write(Write::Create(payload.clone()))?;

        let mut products = self.products.lock().unwrap();
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let product = payload.clone().with_id(id);
        products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        product: &Product,
    ) -> Result<Product, ClientError> {
        self.gate(&self.hold_writes).await;
        self.write(Write::Update(id, product.clone()))?;

        let mut products = self.products.lock().unwrap();
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ClientError::NotFound)?;
        *slot = product.clone();
        Ok(product.clone())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ClientError> {
        self.write(Write::Delete(id))?;
        self.products.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}
