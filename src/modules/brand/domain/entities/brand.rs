use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Company a campaign is run for, owned by one dashboard user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub billing_email: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Brand {
    pub fn new(owner_id: Uuid, name: impl Into<String>, billing_email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            owner_id,
            billing_email: billing_email.into(),
            created_at: Some(Utc::now()),
        }
    }
}
