use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Payload of the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

/// Payload of the membership application form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MembershipApplication {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Tier selected on the form (`individual`, `family`, `business`, ...).
    /// Free text — tiers are managed in the CMS, not validated here.
    pub membership_type: String,
    #[serde(default)]
    pub message: Option<String>,
}
