use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

/// A json-server look-alike bound to an ephemeral local port.
#[derive(Clone, Default)]
pub struct FakeCatalog {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    products: Vec<Value>,
    product_types: Vec<Value>,
    requests: Vec<String>,
    last_query: HashMap<String, String>,
    last_body: Option<Value>,
    fail_product_types: bool,
}

fn id_of(value: &Value) -> Option<i64> {
    match value.get("id")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

impl FakeCatalog {
    pub fn new(products: Vec<Value>, product_types: Vec<Value>) -> Self {
        let catalog = Self::default();
        {
            let mut inner = catalog.lock();
            inner.products = products;
            inner.product_types = product_types;
        }
        catalog
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }

    pub fn fail_product_types(&self) {
        self.lock().fail_product_types = true;
    }

    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    pub fn last_query(&self) -> HashMap<String, String> {
        self.lock().last_query.clone()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.lock().last_body.clone()
    }

    pub fn products(&self) -> Vec<Value> {
        self.lock().products.clone()
    }

    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/products", get(list_products).post(create_product))
            .route(
                "/products/{id}",
                get(get_product).put(update_product).delete(delete_product),
            )
            .route("/productTypes", get(list_product_types))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake catalog");
        let addr = listener.local_addr().expect("fake catalog address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake catalog server");
        });

        format!("http://{addr}")
    }
}

async fn list_products(
    State(db): State<FakeCatalog>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut inner = db.lock();
    inner.requests.push("GET /products".into());
    inner.last_query = params;
    Json(Value::Array(inner.products.clone()))
}

async fn get_product(
    State(db): State<FakeCatalog>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    let mut inner = db.lock();
    inner.requests.push(format!("GET /products/{id}"));
    inner
        .products
        .iter()
        .find(|p| id_of(p) == Some(id))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_product_types(State(db): State<FakeCatalog>) -> Result<Json<Value>, StatusCode> {
    let mut inner = db.lock();
    inner.requests.push("GET /productTypes".into());
    if inner.fail_product_types {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(Value::Array(inner.product_types.clone())))
}

async fn create_product(
    State(db): State<FakeCatalog>,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut inner = db.lock();
    inner.requests.push("POST /products".into());
    inner.last_body = Some(body.clone());

    let next_id = inner.products.iter().filter_map(id_of).max().unwrap_or(0) + 1;
    body["id"] = json!(next_id);
    inner.products.push(body.clone());

    (StatusCode::CREATED, Json(body))
}

async fn update_product(
    State(db): State<FakeCatalog>,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut inner = db.lock();
    inner.requests.push(format!("PUT /products/{id}"));
    inner.last_body = Some(body.clone());

    let slot = inner
        .products
        .iter_mut()
        .find(|p| id_of(p) == Some(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    body["id"] = json!(id);
    *slot = body.clone();

    Ok(Json(body))
}

async fn delete_product(State(db): State<FakeCatalog>, Path(id): Path<i64>) -> StatusCode {
    let mut inner = db.lock();
    inner.requests.push(format!("DELETE /products/{id}"));

    let before = inner.products.len();
    inner.products.retain(|p| id_of(p) != Some(id));

    if inner.products.len() < before {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}
