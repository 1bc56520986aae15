mod memory;
mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgProductStore;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Product, ProductRequest},
};

/// Identity-keyed CRUD primitives over product records.
///
/// Handlers only ever see this trait; the backing implementation is chosen
/// once at startup and injected through the app state.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Every stored record, in stable storage order.
    async fn list_all(&self) -> Result<Vec<Product>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>>;

    /// Persists a new record and returns it with the assigned id.
    async fn create(&self, req: ProductRequest) -> Result<Product>;

    /// Overwrites all mutable fields of an existing record. Returns `None`
    /// without mutating anything when the id is unknown.
    async fn update(&self, id: i32, req: ProductRequest) -> Result<Option<Product>>;

    /// Returns whether a record was actually removed.
    async fn delete_by_id(&self, id: i32) -> Result<bool>;

    /// Cheap liveness probe for the readiness endpoint.
    async fn ping(&self) -> Result<()>;
}
