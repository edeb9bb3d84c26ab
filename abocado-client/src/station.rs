//! Station
//!
//! Pull-based refresh: [`Station::refresh`] fetches dishes, tables and
//! orders as one [`Snapshot`], and every mutation helper refetches after
//! the server accepts it. Views are recomputed from the snapshot on demand.

use shared::models::{DiningTable, Dish, Order, OrderQuery, OrderStatus};
use shared::order::ItemStatus;
use shared::views::{
    DashboardStats, KitchenBoard, ReadyView, TableCard, TableDetail, dashboard_stats,
    kitchen_board, ready_view, service_cards, table_detail,
};

use crate::{AbocadoClient, Cart, ClientResult, HttpClient, NetworkHttpClient};

/// Collections as of the last refresh
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub dishes: Vec<Dish>,
    pub tables: Vec<DiningTable>,
    pub orders: Vec<Order>,
}

impl Snapshot {
    pub fn kitchen(&self) -> KitchenBoard {
        kitchen_board(&self.dishes, &self.tables, &self.orders)
    }

    pub fn ready(&self) -> ReadyView {
        ready_view(&self.dishes, &self.tables, &self.orders)
    }

    pub fn service(&self) -> Vec<TableCard> {
        service_cards(&self.tables, &self.orders)
    }

    pub fn table_detail(&self, table_id: &str) -> Option<TableDetail> {
        table_detail(table_id, &self.dishes, &self.tables, &self.orders)
    }

    pub fn dashboard(&self) -> DashboardStats {
        dashboard_stats(&self.tables, &self.orders)
    }
}

pub struct Station<H: HttpClient = NetworkHttpClient> {
    client: AbocadoClient<H>,
    snapshot: Snapshot,
    stale: bool,
}

impl<H: HttpClient> Station<H> {
    pub fn new(client: AbocadoClient<H>) -> Self {
        Self {
            client,
            snapshot: Snapshot::default(),
            stale: false,
        }
    }

    pub fn client(&self) -> &AbocadoClient<H> {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut AbocadoClient<H> {
        &mut self.client
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// A mutation went through but the refetch after it failed
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Fetch all three collections; the old snapshot stays on failure
    pub async fn refresh(&mut self) -> ClientResult<&Snapshot> {
        let all_orders = OrderQuery::default();
        let (dishes, tables, orders) = tokio::join!(
            self.client.dishes(None),
            self.client.tables(),
            self.client.orders(&all_orders),
        );
        self.snapshot = Snapshot {
            dishes: dishes?,
            tables: tables?,
            orders: orders?,
        };
        self.stale = false;
        tracing::debug!(
            dishes = self.snapshot.dishes.len(),
            tables = self.snapshot.tables.len(),
            orders = self.snapshot.orders.len(),
            "Snapshot refreshed"
        );
        Ok(&self.snapshot)
    }

    /// Refetch after an accepted mutation
    ///
    /// The mutation already happened, so a failed refetch only marks the
    /// snapshot stale; the next successful [`Station::refresh`] clears it.
    async fn refresh_after(&mut self, action: &'static str) {
        if let Err(e) = self.refresh().await {
            tracing::warn!(action, error = %e, "Refresh after mutation failed");
            self.stale = true;
        }
    }

    /// Submit a cart for a table; the cart is emptied once the order exists
    pub async fn submit_cart(&mut self, table_id: &str, cart: &mut Cart) -> ClientResult<Order> {
        let order = self.client.create_order(&cart.to_request(table_id)).await?;
        cart.clear();
        self.refresh_after("submit_cart").await;
        Ok(order)
    }

    pub async fn set_item_status(
        &mut self,
        order_id: &str,
        item_id: &str,
        status: ItemStatus,
    ) -> ClientResult<Order> {
        let order = self
            .client
            .update_item_status(order_id, item_id, status)
            .await?;
        self.refresh_after("set_item_status").await;
        Ok(order)
    }

    pub async fn clear_table(&mut self, table_id: &str) -> ClientResult<DiningTable> {
        let table = self.client.clear_table(table_id).await?;
        self.refresh_after("clear_table").await;
        Ok(table)
    }

    pub async fn close_order(&mut self, order_id: &str, status: OrderStatus) -> ClientResult<Order> {
        let order = self.client.update_order_status(order_id, status).await?;
        self.refresh_after("close_order").await;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;
    use http::StatusCode;
    use rust_decimal::Decimal;
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use serde_json::Value;
    use shared::models::OrderItem;

    use crate::ClientError;

    /// Accepts every write with `reply`; reads fail while `reads_down` is set
    struct ScriptedHttp {
        reply: Value,
        reads_down: Arc<AtomicBool>,
    }

    impl ScriptedHttp {
        fn read<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
            if self.reads_down.load(Ordering::SeqCst) {
                return Err(ClientError::Status {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    body: String::new(),
                });
            }
            serde_json::from_value(Value::Array(Vec::new()))
                .map_err(|e| ClientError::InvalidResponse(format!("{path}: {e}")))
        }

        fn write<T: DeserializeOwned>(&self) -> ClientResult<T> {
            serde_json::from_value(self.reply.clone())
                .map_err(|e| ClientError::InvalidResponse(e.to_string()))
        }
    }

    #[async_trait]
    impl HttpClient for ScriptedHttp {
        async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
            self.read(path)
        }
        async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync>(
            &self,
            path: &str,
            _query: &Q,
        ) -> ClientResult<T> {
            self.read(path)
        }
        async fn post<T: DeserializeOwned, B: Serialize + Sync>(
            &self,
            _path: &str,
            _body: &B,
        ) -> ClientResult<T> {
            self.write()
        }
        async fn post_empty<T: DeserializeOwned>(&self, _path: &str) -> ClientResult<T> {
            self.write()
        }
        async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
            &self,
            _path: &str,
            _body: &B,
        ) -> ClientResult<T> {
            self.write()
        }
        async fn delete(&self, _path: &str) -> ClientResult<()> {
            Ok(())
        }
        fn token(&self) -> Option<&str> {
            None
        }
        fn set_token(&mut self, _token: Option<String>) {}
    }

    fn order() -> Order {
        Order {
            id: "o1".into(),
            table_id: "t2".into(),
            items: vec![OrderItem {
                id: "i1".into(),
                dish_id: "1".into(),
                quantity: 1,
                notes: None,
                status: ItemStatus::Ready,
                started_at: None,
                completed_at: None,
            }],
            status: OrderStatus::Active,
            created_at: Utc::now(),
            completed_at: None,
            total: Decimal::new(989, 2),
        }
    }

    fn station(reads_down: bool) -> (Station<ScriptedHttp>, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(reads_down));
        let http = ScriptedHttp {
            reply: serde_json::to_value(order()).unwrap(),
            reads_down: flag.clone(),
        };
        (Station::new(AbocadoClient::with_http(http)), flag)
    }

    #[tokio::test]
    async fn test_accepted_mutation_survives_failed_refetch() {
        let (mut station, _) = station(true);

        let updated = station
            .set_item_status("o1", "i1", ItemStatus::Delivered)
            .await
            .unwrap();
        assert_eq!(updated.id, "o1");
        assert!(station.is_stale());
        assert!(station.snapshot().orders.is_empty());

        // a plain refresh still reports the failure
        assert!(station.refresh().await.is_err());
        assert!(station.is_stale());
    }

    #[tokio::test]
    async fn test_successful_refetch_is_fresh() {
        let (mut station, _) = station(false);
        station.close_order("o1", OrderStatus::Cancelled).await.unwrap();
        assert!(!station.is_stale());
    }

    #[tokio::test]
    async fn test_refresh_clears_stale() {
        let (mut station, reads_down) = station(true);
        station
            .set_item_status("o1", "i1", ItemStatus::Delivered)
            .await
            .unwrap();
        assert!(station.is_stale());

        reads_down.store(false, Ordering::SeqCst);
        station.refresh().await.unwrap();
        assert!(!station.is_stale());
    }
}
