use crate::model::review::{NewReview, Review};
use serde::{Deserialize, Serialize};

/// A dealership as stored in the `dealers` collection.
///
/// The `_id` is assigned by the store on insert and never changes afterwards.
/// Reviews are embedded and kept in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub location: Location,
    pub address: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub state: String,
    pub city: String,
}

/// A dealer that has not been persisted yet. Used by the seeder for bulk inserts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDealer {
    pub name: String,
    pub location: Location,
    pub address: String,
    #[serde(default)]
    pub reviews: Vec<NewReview>,
}
