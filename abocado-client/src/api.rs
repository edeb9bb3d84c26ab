//! Typed API calls
//!
//! [`AbocadoClient`] owns the transport and the current [`Session`]. When
//! built from a [`ClientConfig`] it restores the session from disk and keeps
//! the file in sync on login and logout.

use shared::client::{CurrentUserResponse, HealthResponse, LoginRequest, LoginResponse};
use shared::models::{
    CreateOrderRequest, DiningTable, DiningTableCreate, DiningTableUpdate, Dish, DishCategory,
    DishCreate, DishQuery, DishUpdate, Order, OrderQuery, OrderStatus, StaffCreate, StaffInfo,
    UpdateOrderItemRequest, UpdateOrderRequest,
};
use shared::order::ItemStatus;
use shared::views::MenuSection;

use crate::{
    ClientConfig, ClientError, ClientResult, HttpClient, NetworkHttpClient, Session, SessionStore,
};

pub struct AbocadoClient<H: HttpClient = NetworkHttpClient> {
    http: H,
    session: Option<Session>,
    store: Option<SessionStore>,
}

impl AbocadoClient<NetworkHttpClient> {
    /// Build a network client and restore the persisted session, if any
    ///
    /// A corrupt session file is discarded and the client starts logged out.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let store = SessionStore::new(&config.session_path);
        let session = match store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(path = %store.path().display(), error = %e, "Discarding session file");
                store.clear()?;
                None
            }
        };

        let mut http = NetworkHttpClient::new(config)?;
        http.set_token(session.as_ref().map(|s| s.token.clone()));

        Ok(Self {
            http,
            session,
            store: Some(store),
        })
    }
}

impl<H: HttpClient> AbocadoClient<H> {
    /// Wrap an existing transport; nothing is persisted
    pub fn with_http(http: H) -> Self {
        Self {
            http,
            session: None,
            store: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    // ========== Auth ==========

    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<&Session> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.http.post("/api/auth/login", &request).await?;
        let session = Session::from(response);

        if let Some(store) = &self.store {
            store.save(&session)?;
        }
        self.http.set_token(Some(session.token.clone()));
        tracing::info!(username = %session.user.username, role = %session.user.role, "Logged in");

        let session = self.session.insert(session);
        Ok(&*session)
    }

    /// Drop the session locally; tokens are stateless on the server
    pub fn logout(&mut self) -> ClientResult<()> {
        self.session = None;
        self.http.set_token(None);
        if let Some(store) = &self.store {
            store.clear()?;
        }
        Ok(())
    }

    pub async fn me(&self) -> ClientResult<CurrentUserResponse> {
        self.require_session()?;
        self.http.get("/api/auth/me").await
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.http.get("/health").await
    }

    fn require_session(&self) -> ClientResult<()> {
        match self.session {
            Some(_) => Ok(()),
            None => Err(ClientError::NotLoggedIn),
        }
    }

    // ========== Menu ==========

    /// Public digital menu; works without a session
    pub async fn menu(&self, category: Option<DishCategory>) -> ClientResult<Vec<MenuSection>> {
        self.http
            .get_with_query("/api/menu", &DishQuery { category })
            .await
    }

    // ========== Dishes ==========

    pub async fn dishes(&self, category: Option<DishCategory>) -> ClientResult<Vec<Dish>> {
        self.http
            .get_with_query("/api/dishes", &DishQuery { category })
            .await
    }

    pub async fn dish(&self, id: &str) -> ClientResult<Dish> {
        self.http.get(&format!("/api/dishes/{id}")).await
    }

    pub async fn create_dish(&self, data: &DishCreate) -> ClientResult<Dish> {
        self.http.post("/api/dishes", data).await
    }

    pub async fn update_dish(&self, id: &str, data: &DishUpdate) -> ClientResult<Dish> {
        self.http.patch(&format!("/api/dishes/{id}"), data).await
    }

    pub async fn delete_dish(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("/api/dishes/{id}")).await
    }

    // ========== Tables ==========

    pub async fn tables(&self) -> ClientResult<Vec<DiningTable>> {
        self.http.get("/api/tables").await
    }

    pub async fn table(&self, id: &str) -> ClientResult<DiningTable> {
        self.http.get(&format!("/api/tables/{id}")).await
    }

    pub async fn create_table(&self, data: &DiningTableCreate) -> ClientResult<DiningTable> {
        self.http.post("/api/tables", data).await
    }

    pub async fn update_table(
        &self,
        id: &str,
        data: &DiningTableUpdate,
    ) -> ClientResult<DiningTable> {
        self.http.patch(&format!("/api/tables/{id}"), data).await
    }

    pub async fn delete_table(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("/api/tables/{id}")).await
    }

    pub async fn clear_table(&self, id: &str) -> ClientResult<DiningTable> {
        self.http.post_empty(&format!("/api/tables/{id}/clear")).await
    }

    // ========== Orders ==========

    pub async fn orders(&self, query: &OrderQuery) -> ClientResult<Vec<Order>> {
        self.http.get_with_query("/api/orders", query).await
    }

    pub async fn order(&self, id: &str) -> ClientResult<Order> {
        self.http.get(&format!("/api/orders/{id}")).await
    }

    pub async fn create_order(&self, request: &CreateOrderRequest) -> ClientResult<Order> {
        self.http.post("/api/orders", request).await
    }

    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        let body = UpdateOrderRequest {
            status: Some(status),
        };
        self.http.patch(&format!("/api/orders/{id}"), &body).await
    }

    pub async fn update_item_status(
        &self,
        order_id: &str,
        item_id: &str,
        status: ItemStatus,
    ) -> ClientResult<Order> {
        let body = UpdateOrderItemRequest {
            status: Some(status),
        };
        self.http
            .patch(&format!("/api/orders/{order_id}/items/{item_id}"), &body)
            .await
    }

    pub async fn delete_order(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("/api/orders/{id}")).await
    }

    // ========== Staff ==========

    pub async fn staff(&self) -> ClientResult<Vec<StaffInfo>> {
        self.http.get("/api/staff").await
    }

    pub async fn create_staff(&self, data: &StaffCreate) -> ClientResult<StaffInfo> {
        self.http.post("/api/staff", data).await
    }

    pub async fn delete_staff(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("/api/staff/{id}")).await
    }
}
