use serde::{Deserialize, Serialize};

/// Movie record as it travels over the wire.
///
/// A request body is a valid Movie when it deserializes: all required fields
/// present and well-typed. The router constrains `id` only on path lookups
/// (1..=2000 on get-by-id), never on the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub overview: String,
    pub year: i32,
    pub rating: f64,
    pub category: String,
}
