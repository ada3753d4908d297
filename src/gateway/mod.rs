//! # Query Gateway
//!
//! Translates a logical request into exactly one read query and maps the
//! result set onto an [`Envelope`] or a [`GatewayError`].
//!
//! - Non-empty result: envelope under the resource key
//! - Zero rows: [`GatewayError::NotFound`] with a message naming the resource
//! - Storage failure: [`GatewayError::Storage`] with the engine's message
//!
//! Filter values are bound exactly as received. No coercion happens here,
//! so `"1"` and `"true"` are different filters.

pub mod errors;
pub mod filter;
pub mod query;
pub mod resource;
pub mod response;

pub use errors::{GatewayError, GatewayResult};
pub use filter::{FilterExpr, OrderBy, SortDirection};
pub use query::SelectQuery;
pub use resource::Resource;
pub use response::{Envelope, ErrorResponse, MessageResponse};

use std::fmt;
use std::sync::Arc;

use resource::{CUISINE, HAS_OUTDOOR_SEATING, ID, IS_LUXURY, IS_VEG, PRICE, RATING};
use crate::storage::RecordSource;

/// Restaurant filter values, passed through unvalidated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantFilter {
    pub is_veg: Option<String>,
    pub has_outdoor_seating: Option<String>,
    pub is_luxury: Option<String>,
}

/// Dish filter value, passed through unvalidated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishFilter {
    pub is_veg: Option<String>,
}

/// Read-only gateway over a [`RecordSource`]
#[derive(Clone)]
pub struct QueryGateway {
    source: Arc<dyn RecordSource>,
}

impl fmt::Debug for QueryGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryGateway").finish_non_exhaustive()
    }
}

impl QueryGateway {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    // ==================
    // Restaurants
    // ==================

    pub fn list_restaurants(&self) -> GatewayResult<Envelope> {
        self.collection(
            Resource::Restaurant,
            SelectQuery::new(Resource::Restaurant.table()),
            || "No restaurants found".to_string(),
        )
    }

    pub fn restaurant_by_id(&self, id: &str) -> GatewayResult<Envelope> {
        self.single(Resource::Restaurant, id, || {
            format!("No restaurant found with id {}", id)
        })
    }

    pub fn restaurants_by_cuisine(&self, cuisine: &str) -> GatewayResult<Envelope> {
        let query = SelectQuery::new(Resource::Restaurant.table())
            .filter(FilterExpr::eq(CUISINE, Some(cuisine.to_string())));
        self.collection(Resource::Restaurant, query, || {
            format!("No restaurants found with the cuisine {}", cuisine)
        })
    }

    pub fn restaurants_by_filters(&self, filter: &RestaurantFilter) -> GatewayResult<Envelope> {
        let query = SelectQuery::new(Resource::Restaurant.table())
            .filter(FilterExpr::eq(IS_VEG, filter.is_veg.clone()))
            .filter(FilterExpr::eq(
                HAS_OUTDOOR_SEATING,
                filter.has_outdoor_seating.clone(),
            ))
            .filter(FilterExpr::eq(IS_LUXURY, filter.is_luxury.clone()));
        self.collection(Resource::Restaurant, query, || {
            "No restaurants found with given filters".to_string()
        })
    }

    pub fn restaurants_sorted_by_rating(&self) -> GatewayResult<Envelope> {
        let query = SelectQuery::new(Resource::Restaurant.table()).order_by(OrderBy::desc(RATING));
        self.collection(Resource::Restaurant, query, || {
            "No restaurants found".to_string()
        })
    }

    // ==================
    // Dishes
    // ==================

    pub fn list_dishes(&self) -> GatewayResult<Envelope> {
        self.collection(
            Resource::Dish,
            SelectQuery::new(Resource::Dish.table()),
            || "No dishes found".to_string(),
        )
    }

    pub fn dish_by_id(&self, id: &str) -> GatewayResult<Envelope> {
        self.single(Resource::Dish, id, || format!("No dish found with id {}", id))
    }

    pub fn dishes_by_filter(&self, filter: &DishFilter) -> GatewayResult<Envelope> {
        let query = SelectQuery::new(Resource::Dish.table())
            .filter(FilterExpr::eq(IS_VEG, filter.is_veg.clone()));
        self.collection(Resource::Dish, query, || {
            "No dishes found with given filter".to_string()
        })
    }

    pub fn dishes_sorted_by_price(&self) -> GatewayResult<Envelope> {
        let query = SelectQuery::new(Resource::Dish.table()).order_by(OrderBy::asc(PRICE));
        self.collection(Resource::Dish, query, || "No dishes found".to_string())
    }

    // ==================
    // Helpers
    // ==================

    fn collection(
        &self,
        resource: Resource,
        query: SelectQuery,
        not_found: impl FnOnce() -> String,
    ) -> GatewayResult<Envelope> {
        let rows = self.run(&query)?;
        if rows.is_empty() {
            return Err(Self::not_found(not_found()));
        }
        Ok(Envelope::collection(resource, rows))
    }

    fn single(
        &self,
        resource: Resource,
        id: &str,
        not_found: impl FnOnce() -> String,
    ) -> GatewayResult<Envelope> {
        let query =
            SelectQuery::new(resource.table()).filter(FilterExpr::eq(ID, Some(id.to_string())));
        match self.run(&query)?.into_iter().next() {
            Some(row) => Ok(Envelope::single(resource, row)),
            None => Err(Self::not_found(not_found())),
        }
    }

    fn run(&self, query: &SelectQuery) -> GatewayResult<Vec<serde_json::Value>> {
        self.source.fetch(query).map_err(|e| {
            tracing::error!(table = query.table(), error = %e, "query failed");
            GatewayError::from(e)
        })
    }

    fn not_found(message: String) -> GatewayError {
        tracing::debug!(%message, "no matching rows");
        GatewayError::NotFound(message)
    }
}
