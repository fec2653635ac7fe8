//! Database model for persisted application state blobs.

use diesel::prelude::*;

/// One keyed state blob, stored as JSON text.
#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::app_state)]
pub struct AppStateDB {
    pub state_key: String,
    pub state_value: String,
    pub updated_at: String,
}

impl AppStateDB {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            state_key: key.to_string(),
            state_value: value.to_string(),
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
