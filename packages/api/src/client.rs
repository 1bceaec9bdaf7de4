//! # HTTP client for the CarbonTrack backend
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] and a [`TokenStore`]. Every call goes
//! through [`ApiClient::dispatch`], which is the one place with cross-cutting
//! behaviour:
//!
//! 1. attach `Authorization: Bearer <token>` when a token is persisted;
//! 2. a request that gets no response becomes [`ApiError::Network`];
//! 3. a `401` clears the persisted token and becomes [`ApiError::Unauthorized`]
//!    (the client never navigates; the session layer reacts to the error);
//! 4. any other non-2xx becomes [`ApiError::Api`] carrying the body's `message`.
//!
//! The client is cheap to clone: `reqwest::Client` is reference-counted and
//! token stores are handles.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::{ClientConfig, TokenStore};

use crate::error::ApiError;
use crate::models::{
    AiRecommendations, AuthResponse, Credentials, ImportResult, NewOrder, Order,
    OrderRecommendations, PlatformComparison, PlatformLogin, Registration, Suggestion, Summary,
    TrendPoint, User,
};

#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    store: S,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrdersPayload<'a, T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    orders_data: Option<&'a T>,
}

impl<S: TokenStore> ApiClient<S> {
    pub fn new(config: &ClientConfig, store: S) -> Self {
        Self::with_base_url(&config.api.base_url, store)
    }

    pub fn with_base_url(base_url: &str, store: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    async fn dispatch(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match self.store.token() {
            Some(token) => {
                tracing::debug!(
                    "attaching token {}...",
                    token.chars().take(10).collect::<String>()
                );
                request.bearer_auth(token)
            }
            None => {
                tracing::debug!("no token persisted, sending anonymous request");
                request
            }
        };

        let response = request.send().await.map_err(|e| {
            tracing::error!("Network error - server may be down or unreachable: {e}");
            ApiError::Network
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        tracing::warn!("API error {status}: {message:?}");

        if status == StatusCode::UNAUTHORIZED {
            match self.store.clear_token() {
                Ok(()) => tracing::info!("token expired or invalid, removed from storage"),
                Err(e) => tracing::error!("failed to clear token after 401: {e}"),
            }
            return Err(ApiError::Unauthorized { message });
        }

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.dispatch(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.json(self.request(Method::GET, path)).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.json(self.request(Method::POST, path).json(body)).await
    }

    // ---- auth ----

    /// `POST /auth/register`
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        self.post("/auth/register", registration).await
    }

    /// `POST /auth/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", credentials).await
    }

    /// `GET /auth/me`
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }

    // ---- orders ----

    /// `POST /orders`
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.post("/orders", order).await
    }

    /// `GET /orders`
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/orders").await
    }

    /// `GET /orders/:id`
    pub async fn get_order(&self, id: &str) -> Result<Order, ApiError> {
        self.get(&format!("/orders/{id}")).await
    }

    /// `DELETE /orders/:id`
    pub async fn delete_order(&self, id: &str) -> Result<(), ApiError> {
        self.dispatch(self.request(Method::DELETE, &format!("/orders/{id}")))
            .await?;
        Ok(())
    }

    /// `GET /orders/zomato`
    pub async fn check_zomato_login(&self) -> Result<PlatformLogin, ApiError> {
        self.get("/orders/zomato").await
    }

    /// `POST /orders/zomato/fetch` with no payload: ask the backend to pull the
    /// order history through its own Zomato session. The raw response is
    /// returned so it can be shown for review before importing.
    pub async fn fetch_zomato_orders(&self) -> Result<Value, ApiError> {
        self.post(
            "/orders/zomato/fetch",
            &OrdersPayload::<Value> { orders_data: None },
        )
        .await
    }

    /// `POST /orders/zomato/fetch` with reconciled order records.
    pub async fn import_zomato_orders(&self, orders: &[Value]) -> Result<ImportResult, ApiError> {
        self.post(
            "/orders/zomato/fetch",
            &OrdersPayload {
                orders_data: Some(&orders),
            },
        )
        .await
    }

    /// `GET /orders/swiggy`
    pub async fn check_swiggy_login(&self) -> Result<PlatformLogin, ApiError> {
        self.get("/orders/swiggy").await
    }

    /// `POST /orders/swiggy/fetch` with no payload.
    pub async fn fetch_swiggy_orders(&self) -> Result<Value, ApiError> {
        self.post(
            "/orders/swiggy/fetch",
            &OrdersPayload::<Value> { orders_data: None },
        )
        .await
    }

    /// `POST /orders/swiggy/fetch` with the pasted payload, unchanged.
    pub async fn import_swiggy_orders(&self, data: &Value) -> Result<ImportResult, ApiError> {
        self.post(
            "/orders/swiggy/fetch",
            &OrdersPayload {
                orders_data: Some(data),
            },
        )
        .await
    }

    /// `GET /orders/:id/recommendations`
    pub async fn order_recommendations(&self, id: &str) -> Result<OrderRecommendations, ApiError> {
        self.get(&format!("/orders/{id}/recommendations")).await
    }

    // ---- insights ----

    /// `GET /insights/summary`
    pub async fn summary(&self) -> Result<Summary, ApiError> {
        self.get("/insights/summary").await
    }

    /// `GET /insights/trends`
    pub async fn trends(&self) -> Result<Vec<TrendPoint>, ApiError> {
        self.get("/insights/trends").await
    }

    /// `GET /insights/platform-comparison`
    pub async fn platform_comparison(&self) -> Result<PlatformComparison, ApiError> {
        self.get("/insights/platform-comparison").await
    }

    /// `GET /insights/suggestions`
    pub async fn suggestions(&self) -> Result<Vec<Suggestion>, ApiError> {
        self.get("/insights/suggestions").await
    }

    /// `GET /insights/ai-recommendations`
    pub async fn ai_recommendations(&self) -> Result<AiRecommendations, ApiError> {
        self.get("/insights/ai-recommendations").await
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use serde_json::json;
    use store::MemoryStore;

    use super::*;
    use crate::testing::{serve, unreachable_base_url, CountingStore};

    #[tokio::test]
    async fn test_attaches_bearer_token() {
        let router = Router::new().route(
            "/auth/me",
            get(|| async { Json(json!({"_id": "u1", "name": "Asha", "email": "a@b.c"})) }),
        );
        let (base, hits) = serve(router).await;
        let client = ApiClient::with_base_url(&base, MemoryStore::with_token("tok-123"));

        let user = client.current_user().await.unwrap();
        assert_eq!(user.id, "u1");

        let recorded = hits.all();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].authorization.as_deref(), Some("Bearer tok-123"));
    }

    #[tokio::test]
    async fn test_no_token_sends_no_header() {
        let router = Router::new().route("/orders", get(|| async { Json(json!([])) }));
        let (base, hits) = serve(router).await;
        let client = ApiClient::with_base_url(&base, MemoryStore::new());

        assert!(client.list_orders().await.unwrap().is_empty());
        assert_eq!(hits.all()[0].authorization, None);
    }

    #[tokio::test]
    async fn test_401_clears_token_exactly_once() {
        let router = Router::new().route(
            "/insights/summary",
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"message": "Token is not valid"})),
                )
            }),
        );
        let (base, _hits) = serve(router).await;
        let store = CountingStore::with_token("stale");
        let client = ApiClient::with_base_url(&base, store.clone());

        let err = client.summary().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Unauthorized {
                message: Some("Token is not valid".into())
            }
        );
        assert!(!store.has_token());
        assert_eq!(store.clears(), 1);
    }

    #[tokio::test]
    async fn test_network_error_is_uniform_across_endpoints() {
        let client = ApiClient::with_base_url(&unreachable_base_url().await, MemoryStore::new());

        assert_eq!(client.summary().await.unwrap_err(), ApiError::Network);
        assert_eq!(client.list_orders().await.unwrap_err(), ApiError::Network);
        assert_eq!(client.delete_order("x").await.unwrap_err(), ApiError::Network);
        let err = client
            .login(&Credentials {
                email: "a@b.c".into(),
                password: "secret".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), crate::NETWORK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_business_error_carries_backend_message() {
        let router = Router::new().route(
            "/orders",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"message": "Distance is required"})),
                )
            }),
        );
        let (base, _hits) = serve(router).await;
        let store = MemoryStore::with_token("keep-me");
        let client = ApiClient::with_base_url(&base, store.clone());

        let order = NewOrder {
            restaurant_name: "Cafe".into(),
            date: "2024-06-01".into(),
            food_items: vec![],
            distance: 0.0,
            price: 0.0,
            platform: crate::OrderPlatform::Other,
        };
        let err = client.create_order(&order).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.user_message("Failed to add order"), "Distance is required");
        // Only 401 touches the token
        assert!(store.has_token());
    }

    #[tokio::test]
    async fn test_delete_and_path_params() {
        let router = Router::new()
            .route(
                "/orders/{id}",
                delete(|Path(id): Path<String>| async move {
                    Json(json!({"message": format!("deleted {id}")}))
                }),
            )
            .route(
                "/orders/{id}/recommendations",
                get(|Path(id): Path<String>| async move {
                    Json(json!({"recommendations": {"overall": {"message": id}}}))
                }),
            );
        let (base, hits) = serve(router).await;
        let client = ApiClient::with_base_url(&format!("{base}/"), MemoryStore::new());

        client.delete_order("o-42").await.unwrap();
        let recs = client.order_recommendations("o-42").await.unwrap();
        assert_eq!(
            recs.recommendations.overall.unwrap().message.as_deref(),
            Some("o-42")
        );

        let recorded = hits.all();
        assert_eq!(recorded[0].method, "DELETE");
        assert_eq!(recorded[0].path, "/orders/o-42");
        assert_eq!(recorded[1].path, "/orders/o-42/recommendations");
    }

    #[tokio::test]
    async fn test_import_wraps_orders_data() {
        let router = Router::new().route(
            "/orders/zomato/fetch",
            post(|Json(body): Json<Value>| async move {
                let count = body["ordersData"].as_array().map(|a| a.len()).unwrap_or(0);
                Json(json!({"importedCount": count}))
            }),
        );
        let (base, _hits) = serve(router).await;
        let client = ApiClient::with_base_url(&base, MemoryStore::new());

        let orders = vec![json!({"orderId": 1}), json!({"orderId": 2})];
        let result = client.import_zomato_orders(&orders).await.unwrap();
        assert_eq!(result.imported_count, 2);
    }

    #[tokio::test]
    async fn test_decode_error_on_unexpected_body() {
        let router = Router::new().route("/insights/trends", get(|| async { "not json" }));
        let (base, _hits) = serve(router).await;
        let client = ApiClient::with_base_url(&base, MemoryStore::new());

        assert!(matches!(
            client.trends().await.unwrap_err(),
            ApiError::Decode(_)
        ));
    }
}
