use async_trait::async_trait;
use diesel::prelude::*;
use log::info;
use std::sync::Arc;

use super::model::AppStateDB;
use crate::db::{self, get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::app_state::dsl::*;
use accrue_core::errors::Result;
use accrue_core::LedgerStore;

/// [`LedgerStore`] backed by the `app_state` table.
///
/// Reads go through the pool; writes are serialized through the writer actor.
pub struct SqliteLedgerStore {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteLedgerStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SqliteLedgerStore { pool, writer }
    }

    /// Opens (creating if needed) the database at `db_location`, applies
    /// pending migrations and starts the writer actor.
    pub fn open(db_location: &str) -> Result<Self> {
        let db_path = db::init(db_location)?;
        let pool = db::create_pool(&db_path)?;
        db::run_migrations(&pool)?;
        let writer = db::spawn_writer((*pool).clone());
        info!("Ledger store opened at {}", db_path);
        Ok(Self::new(pool, writer))
    }
}

#[async_trait]
impl LedgerStore for SqliteLedgerStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let value = app_state
            .filter(state_key.eq(key))
            .select(state_value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let row = AppStateDB::new(key, value);
        self.writer
            .exec(move |conn| {
                diesel::replace_into(app_state)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accrue_core::constants::{GOLD_CATEGORY_ID, LEDGER_STATE_KEY, STOCK_CATEGORY_ID};
    use accrue_core::{compute_proposal, Category, Ledger, LedgerState, ResetConfirmation};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> SqliteLedgerStore {
        let location = dir.path().join("accrue.db");
        SqliteLedgerStore::open(location.to_str().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.get(LEDGER_STATE_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        store.set(LEDGER_STATE_KEY, "{\"goldCash\":1}").await.unwrap();
        store.set(LEDGER_STATE_KEY, "{\"goldCash\":2}").await.unwrap();

        assert_eq!(
            store.get(LEDGER_STATE_KEY).unwrap().as_deref(),
            Some("{\"goldCash\":2}")
        );
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[tokio::test]
    async fn test_committed_ledger_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let categories = vec![
            Category::new(STOCK_CATEGORY_ID, "Stocks", dec!(30)),
            Category::new(GOLD_CATEGORY_ID, "Gold", dec!(20)),
        ];

        let committed = {
            let mut ledger = Ledger::load(Arc::new(open_store(&dir))).unwrap();
            let proposal =
                compute_proposal(ledger.state(), dec!(10000000), &categories, dec!(3460000))
                    .unwrap();
            ledger.commit(proposal).await.unwrap().clone()
        };

        let reopened = Ledger::load(Arc::new(open_store(&dir))).unwrap();
        assert_eq!(reopened.state(), &committed);
        assert_eq!(reopened.state().stock_owes_gold, dec!(270000));
    }

    #[tokio::test]
    async fn test_reset_persists_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(open_store(&dir));
        store
            .set(
                LEDGER_STATE_KEY,
                &accrue_core::encode_state(&LedgerState {
                    gold_cash: dec!(500000),
                    ..Default::default()
                })
                .unwrap(),
            )
            .await
            .unwrap();

        let mut ledger = Ledger::load(store.clone()).unwrap();
        ledger.reset(ResetConfirmation::Confirmed).await.unwrap();

        let reloaded = Ledger::load(store).unwrap();
        assert_eq!(reloaded.state(), &LedgerState::default());
    }
}
