use crate::schema::external_transactions;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A transaction as reported by an originating system.
///
/// Rows are written by the ingestion side and only ever read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = external_transactions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Transaction {
    pub uuid: Uuid,
    pub external_id: String,
    pub payload: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub external_updated_at: Option<DateTime<Utc>>,
    pub external_created_at: Option<DateTime<Utc>>,
    pub amount: f64,
    pub status: String,
    pub currency: String,
    pub status_original: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Insertable)]
#[diesel(table_name = external_transactions)]
pub struct NewTransaction {
    pub uuid: Uuid,
    pub external_id: String,
    pub payload: Option<serde_json::Value>,
    pub external_created_at: Option<DateTime<Utc>>,
    pub external_updated_at: Option<DateTime<Utc>>,
    pub amount: f64,
    pub status: String,
    pub currency: String,
    pub status_original: Option<String>,
}

impl NewTransaction {
    pub fn new(external_id: String, amount: f64, currency: String, status: String) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            external_id,
            payload: None,
            external_created_at: None,
            external_updated_at: None,
            amount,
            status,
            currency,
            status_original: None,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_status_original(mut self, status_original: impl Into<String>) -> Self {
        self.status_original = Some(status_original.into());
        self
    }

    pub fn created_externally_at(mut self, at: DateTime<Utc>) -> Self {
        self.external_created_at = Some(at);
        self.external_updated_at = Some(at);
        self
    }
}
