use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A board or staff member shown on the about page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub photo: Option<String>,
    /// Editor-controlled sort position; ties fall back to name order.
    pub order: i64,
}
