//! Order Repository

use serde::Serialize;
use shared::models::Order;

use super::{Document, OrderRepository, RepoResult};

#[derive(Serialize)]
struct FinishedPatch {
    finished: bool,
}

fn sort_by_timestamp(mut orders: Vec<Order>) -> Vec<Order> {
    // Sorted here instead of ORDER BY
    orders.sort_by_key(|o| o.timestamp);
    orders
}

impl OrderRepository {
    /// All orders, oldest first
    pub async fn find_all_sorted(&self) -> RepoResult<Vec<Order>> {
        Ok(sort_by_timestamp(self.find_all().await?))
    }

    /// Orders not yet closed out, oldest first
    pub async fn find_unfinished(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base()
            .db()
            .query("SELECT * FROM type::table($table) WHERE finished = false")
            .bind(("table", Order::TABLE))
            .await?
            .take(0)?;
        Ok(sort_by_timestamp(orders))
    }

    /// Mark an order finished. `None` if absent.
    pub async fn close_out(&self, id: &str) -> RepoResult<Option<Order>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        let updated: Option<Order> = self
            .base()
            .db()
            .update((Order::TABLE, id.to_owned()))
            .merge(FinishedPatch { finished: true })
            .await?;
        Ok(updated)
    }
}
