//! Resource descriptors: table names, envelope keys and the columns the
//! gateway filters or sorts on.

/// A table exposed by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Restaurant,
    Dish,
}

impl Resource {
    /// Backing table
    pub fn table(&self) -> &'static str {
        match self {
            Resource::Restaurant => "restaurants",
            Resource::Dish => "dishes",
        }
    }

    /// Envelope key for a collection, also used in "not found" messages
    pub fn plural(&self) -> &'static str {
        self.table()
    }

    /// Envelope key for a single record
    pub fn singular(&self) -> &'static str {
        match self {
            Resource::Restaurant => "restaurant",
            Resource::Dish => "dish",
        }
    }
}

pub const ID: &str = "id";
pub const CUISINE: &str = "cuisine";
pub const RATING: &str = "rating";
pub const PRICE: &str = "price";
pub const IS_VEG: &str = "isVeg";
pub const HAS_OUTDOOR_SEATING: &str = "hasOutdoorSeating";
pub const IS_LUXURY: &str = "isLuxury";
