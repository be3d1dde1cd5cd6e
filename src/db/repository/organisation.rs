//! Organisation Repository

use super::{BaseRepository, RepoResult, Repository};
use crate::db::models::{Organisation, OrganisationCreate, OrganisationUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "organisations";

#[derive(Clone)]
pub struct OrganisationRepository {
    base: BaseRepository,
}

impl OrganisationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

impl Repository<Organisation, OrganisationCreate, OrganisationUpdate> for OrganisationRepository {
    async fn create(&self, data: OrganisationCreate) -> RepoResult<Organisation> {
        self.base.insert(TABLE, data).await
    }

    async fn get(&self, id: i64) -> RepoResult<Option<Organisation>> {
        self.base.select_by_id(TABLE, id).await
    }

    async fn get_multi(&self, skip: u64, limit: u64) -> RepoResult<Vec<Organisation>> {
        self.base.select_page(TABLE, skip, limit).await
    }

    async fn update(&self, id: i64, data: OrganisationUpdate) -> RepoResult<Organisation> {
        self.base.merge_by_id(TABLE, id, data).await
    }

    async fn remove(&self, id: i64) -> RepoResult<Organisation> {
        self.base.delete_by_id(TABLE, id).await
    }
}
