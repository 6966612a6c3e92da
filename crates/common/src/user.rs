//! Account snapshots returned by the user endpoint

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// The logged in user
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub username: String,
    pub email: String,
    pub subscription: SubscriptionType,
    /// Bytes used by the filesystem
    pub storage_space_used: i64,
    pub is_admin: bool,
    pub balance_micro_eur: i64,
    #[serde(rename = "hotlinking_enabled")]
    pub hotlinking: bool,
    pub monthly_transfer_cap: i64,
    pub monthly_transfer_used: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub file_viewer_branding: HashMap<String, String>,
    pub file_embed_domains: String,
    pub skip_file_viewer: bool,
}

/// Properties of a subscription plan, not the active subscription itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionType {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file_size_limit: i64,
    pub file_expiry_days: i64,
    /// Storage cap in bytes, zero or negative when there is none
    pub storage_space: i64,
    pub price_per_tb_storage: i64,
    pub price_per_tb_bandwidth: i64,
    pub monthly_transfer_cap: i64,
    pub file_viewer_branding: bool,
}
