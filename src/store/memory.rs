use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Product, ProductRequest},
};

use super::ProductStore;

/// Map-backed store used by the test suite. Ids count up from 1 and are
/// never handed out twice, mirroring the database sequence.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    records: BTreeMap<i32, Product>,
    next_id: i32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Product>> {
        let inner = self.inner.lock().expect("store mutex poisoned");

        Ok(inner.records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        let inner = self.inner.lock().expect("store mutex poisoned");

        Ok(inner.records.get(&id).cloned())
    }

    async fn create(&self, req: ProductRequest) -> Result<Product> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");

        inner.next_id += 1;
        let product = Product {
            id: inner.next_id,
            name: req.name,
            description: req.description,
            price: req.price,
            quantity: req.quantity,
        };
        inner.records.insert(product.id, product.clone());

        Ok(product)
    }

    async fn update(&self, id: i32, req: ProductRequest) -> Result<Option<Product>> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");

        match inner.records.get_mut(&id) {
            Some(record) => {
                record.name = req.name;
                record.description = req.description;
                record.price = req.price;
                record.quantity = req.quantity;

                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");

        Ok(inner.records.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
