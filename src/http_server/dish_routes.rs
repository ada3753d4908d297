//! Dish HTTP Routes

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::gateway::{DishFilter, Envelope, GatewayError, QueryGateway};

/// Query string of `/dishes/filter`
#[derive(Debug, Default, Deserialize)]
pub struct DishFilterParams {
    #[serde(rename = "isVeg")]
    pub is_veg: Option<String>,
}

impl From<DishFilterParams> for DishFilter {
    fn from(params: DishFilterParams) -> Self {
        Self {
            is_veg: params.is_veg,
        }
    }
}

/// Create dish routes
pub fn dish_routes(gateway: QueryGateway) -> Router {
    Router::new()
        .route("/", get(list_handler))
        .route("/details/{id}", get(details_handler))
        .route("/filter", get(filter_handler))
        .route("/sort-by-price", get(sort_by_price_handler))
        .with_state(gateway)
}

async fn list_handler(
    State(gateway): State<QueryGateway>,
) -> Result<Json<Envelope>, GatewayError> {
    gateway.list_dishes().map(Json)
}

async fn details_handler(
    State(gateway): State<QueryGateway>,
    Path(id): Path<String>,
) -> Result<Json<Envelope>, GatewayError> {
    gateway.dish_by_id(&id).map(Json)
}

async fn filter_handler(
    State(gateway): State<QueryGateway>,
    params: Result<Query<DishFilterParams>, QueryRejection>,
) -> Result<Json<Envelope>, GatewayError> {
    let Query(params) = params?;
    gateway.dishes_by_filter(&DishFilter::from(params)).map(Json)
}

async fn sort_by_price_handler(
    State(gateway): State<QueryGateway>,
) -> Result<Json<Envelope>, GatewayError> {
    gateway.dishes_sorted_by_price().map(Json)
}
