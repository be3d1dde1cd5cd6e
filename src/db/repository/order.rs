//! Order Repository
//!
//! Orders go through an extra workflow on creation: a referenced order can
//! backfill fields the request left unset, and the products the caller sent
//! are registered in the catalog as standalone rows.

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, ProductRepository, RepoError, RepoResult, Repository};
use crate::db::models::order::{OrderRecord, OrderRow};
use crate::db::models::{Order, OrderCreate, OrderType, OrderUpdate, snapshot};

const TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
    products: ProductRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db.clone()),
            products: ProductRepository::new(db),
        }
    }

    /// Create an order through the full workflow
    ///
    /// 1. If the request names a reference, load it and backfill unset
    ///    fields. A reference pointing at no order is ignored, but the
    ///    `References` value is stored as given.
    /// 2. Persist the (possibly backfilled) order.
    /// 3. Register the products the caller sent (not the inherited ones)
    ///    as catalog rows. Backfilled products already exist in the
    ///    catalog from their own order, so re-registering them would only
    ///    trip the identity index.
    ///
    /// Returns the stored order and the ids of the catalog products created
    /// in step 3. If registration fails partway, the order and the ids
    /// created so far remain in place.
    pub async fn create_new_order(&self, data: OrderCreate) -> RepoResult<(Order, Vec<i64>)> {
        let requested_products = data.products.clone().unwrap_or_default();

        let mut request = data;
        if let Some(ref_id) = request.references
            && let Some(reference) = self.get(ref_id).await?
        {
            request = request.fill_from_reference(&reference);
        }

        let order = self.create(request).await?;
        let product_ids = self.products.materialize(&requested_products).await?;
        Ok((order, product_ids))
    }
}

impl Repository<Order, OrderCreate, OrderUpdate> for OrderRepository {
    async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let record = OrderRecord::from_create(&data);
        let row: OrderRow = self.base.insert(TABLE, record).await?;
        Ok(row.decode()?)
    }

    async fn get(&self, id: i64) -> RepoResult<Option<Order>> {
        let row: Option<OrderRow> = self.base.select_by_id(TABLE, id).await?;
        row.map(|r| r.decode().map_err(RepoError::from)).transpose()
    }

    async fn get_multi(&self, skip: u64, limit: u64) -> RepoResult<Vec<Order>> {
        let rows: Vec<OrderRow> = self.base.select_page(TABLE, skip, limit).await?;
        rows.into_iter()
            .map(|r| r.decode().map_err(RepoError::from))
            .collect()
    }

    async fn update(&self, id: i64, data: OrderUpdate) -> RepoResult<Order> {
        // Encode snapshots to their storage form before merging
        #[derive(Serialize)]
        struct OrderUpdateDb {
            #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
            order_type: Option<OrderType>,
            #[serde(rename = "References", skip_serializing_if = "Option::is_none")]
            references: Option<i64>,
            #[serde(rename = "Products", skip_serializing_if = "Option::is_none")]
            products: Option<Vec<String>>,
            #[serde(rename = "Organisation_id", skip_serializing_if = "Option::is_none")]
            organisation_id: Option<i64>,
        }

        let update_data = OrderUpdateDb {
            order_type: data.order_type,
            references: data.references,
            products: data.products.as_deref().map(snapshot::encode_all),
            organisation_id: data.organisation_id,
        };

        let row: OrderRow = self.base.merge_by_id(TABLE, id, update_data).await?;
        Ok(row.decode()?)
    }

    async fn remove(&self, id: i64) -> RepoResult<Order> {
        let row: OrderRow = self.base.delete_by_id(TABLE, id).await?;
        Ok(row.decode()?)
    }
}
