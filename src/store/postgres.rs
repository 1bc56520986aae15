use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Product, ProductRequest},
};

use super::ProductStore;

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn create(&self, req: ProductRequest) -> Result<Product> {
        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, quantity)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.quantity)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn update(&self, id: i32, req: ProductRequest) -> Result<Option<Product>> {
        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $1, description = $2, price = $3, quantity = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.quantity)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
