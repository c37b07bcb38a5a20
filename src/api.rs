//! HTTP API: health check and subscription management

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use axum::{
    Router,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, Subscription};
use crate::store::SubscriptionStore;

static STORE: LazyLock<SubscriptionStore> = LazyLock::new(|| {
    let path = env::var("STORE_PATH").unwrap_or_else(|_| "store.json".to_string());
    SubscriptionStore::new(PathBuf::from(path))
});

#[derive(Serialize, Deserialize)]
pub struct ApiCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ApiSubscription {
    pub name: String,
    pub email: String,
    pub home: ApiCoordinate,
    pub destination: ApiCoordinate,
    pub departure_time: u16,
    pub return_time: u16,
}

impl From<ApiSubscription> for Subscription {
    fn from(api: ApiSubscription) -> Self {
        Self {
            name: api.name,
            email: api.email,
            home: Coordinate::new(api.home.latitude, api.home.longitude),
            destination: Coordinate::new(api.destination.latitude, api.destination.longitude),
            departure_time: api.departure_time,
            return_time: api.return_time,
        }
    }
}

impl From<&Subscription> for ApiSubscription {
    fn from(sub: &Subscription) -> Self {
        Self {
            name: sub.name.clone(),
            email: sub.email.clone(),
            home: ApiCoordinate {
                latitude: sub.home.latitude,
                longitude: sub.home.longitude,
            },
            destination: ApiCoordinate {
                latitude: sub.destination.latitude,
                longitude: sub.destination.longitude,
            },
            departure_time: sub.departure_time,
            return_time: sub.return_time,
        }
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/subscriptions", get(list_subscriptions))
        .route("/subscriptions", post(create_subscription))
}

async fn health() -> &'static str {
    "OK"
}

async fn list_subscriptions() -> Result<Json<Vec<ApiSubscription>>, StatusCode> {
    let subscriptions = STORE.load().map_err(|err| {
        tracing::error!("Failed to load subscriptions: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let api_subscriptions = subscriptions.iter().map(ApiSubscription::from).collect();
    Ok(Json(api_subscriptions))
}

async fn create_subscription(
    Json(payload): Json<ApiSubscription>,
) -> Result<StatusCode, (StatusCode, String)> {
    let subscription = Subscription::from(payload);
    tracing::info!("New subscription received for {}", subscription.email);

    subscription
        .validate()
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    STORE.add(subscription).map_err(|err| {
        tracing::error!("Failed to persist subscription: {err}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to persist subscription".to_string(),
        )
    })?;

    Ok(StatusCode::CREATED)
}
