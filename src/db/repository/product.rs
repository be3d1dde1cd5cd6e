//! Product Repository

use super::{BaseRepository, RepoResult, Repository};
use crate::db::models::snapshot::ProductSnapshot;
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "products";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Register every snapshot as a catalog product, returning the new ids
    ///
    /// Runs sequentially and stops at the first failure. Ids created before
    /// the failure are kept; a snapshot whose identity triple already exists
    /// in the catalog surfaces as [`super::RepoError::Duplicate`].
    pub async fn materialize(&self, snapshots: &[ProductSnapshot]) -> RepoResult<Vec<i64>> {
        let mut ids = Vec::with_capacity(snapshots.len());
        for snap in snapshots {
            let created = self
                .create(ProductCreate {
                    category: snap.category.clone(),
                    variety: snap.variety.clone(),
                    packaging: snap.packaging.clone(),
                })
                .await?;
            ids.push(created.id);
        }
        Ok(ids)
    }
}

impl Repository<Product, ProductCreate, ProductUpdate> for ProductRepository {
    async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        self.base.insert(TABLE, data).await
    }

    async fn get(&self, id: i64) -> RepoResult<Option<Product>> {
        self.base.select_by_id(TABLE, id).await
    }

    async fn get_multi(&self, skip: u64, limit: u64) -> RepoResult<Vec<Product>> {
        self.base.select_page(TABLE, skip, limit).await
    }

    async fn update(&self, id: i64, data: ProductUpdate) -> RepoResult<Product> {
        self.base.merge_by_id(TABLE, id, data).await
    }

    async fn remove(&self, id: i64) -> RepoResult<Product> {
        self.base.delete_by_id(TABLE, id).await
    }
}
