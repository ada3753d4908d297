//! Restaurant HTTP Routes

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::gateway::{Envelope, GatewayError, QueryGateway, RestaurantFilter};

/// Query string of `/restaurants/filter`
#[derive(Debug, Default, Deserialize)]
pub struct RestaurantFilterParams {
    #[serde(rename = "isVeg")]
    pub is_veg: Option<String>,
    #[serde(rename = "hasOutdoorSeating")]
    pub has_outdoor_seating: Option<String>,
    #[serde(rename = "isLuxury")]
    pub is_luxury: Option<String>,
}

impl From<RestaurantFilterParams> for RestaurantFilter {
    fn from(params: RestaurantFilterParams) -> Self {
        Self {
            is_veg: params.is_veg,
            has_outdoor_seating: params.has_outdoor_seating,
            is_luxury: params.is_luxury,
        }
    }
}

/// Create restaurant routes
pub fn restaurant_routes(gateway: QueryGateway) -> Router {
    Router::new()
        .route("/", get(list_handler))
        .route("/details/{id}", get(details_handler))
        .route("/cuisine/{cuisine}", get(cuisine_handler))
        .route("/filter", get(filter_handler))
        .route("/sort-by-rating", get(sort_by_rating_handler))
        .with_state(gateway)
}

async fn list_handler(
    State(gateway): State<QueryGateway>,
) -> Result<Json<Envelope>, GatewayError> {
    gateway.list_restaurants().map(Json)
}

async fn details_handler(
    State(gateway): State<QueryGateway>,
    Path(id): Path<String>,
) -> Result<Json<Envelope>, GatewayError> {
    gateway.restaurant_by_id(&id).map(Json)
}

async fn cuisine_handler(
    State(gateway): State<QueryGateway>,
    Path(cuisine): Path<String>,
) -> Result<Json<Envelope>, GatewayError> {
    gateway.restaurants_by_cuisine(&cuisine).map(Json)
}

async fn filter_handler(
    State(gateway): State<QueryGateway>,
    params: Result<Query<RestaurantFilterParams>, QueryRejection>,
) -> Result<Json<Envelope>, GatewayError> {
    let Query(params) = params?;
    gateway.restaurants_by_filters(&RestaurantFilter::from(params)).map(Json)
}

async fn sort_by_rating_handler(
    State(gateway): State<QueryGateway>,
) -> Result<Json<Envelope>, GatewayError> {
    gateway.restaurants_sorted_by_rating().map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_params_keep_raw_strings() {
        let params = RestaurantFilterParams {
            is_veg: Some("true".to_string()),
            has_outdoor_seating: Some("1".to_string()),
            is_luxury: None,
        };
        let filter = RestaurantFilter::from(params);
        assert_eq!(filter.is_veg.as_deref(), Some("true"));
        assert_eq!(filter.has_outdoor_seating.as_deref(), Some("1"));
        assert_eq!(filter.is_luxury, None);
    }
}
