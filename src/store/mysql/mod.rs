//! MySQL Verse Store
//!
//! `VerseStore` implementation for MySQL databases (including MariaDB).
//!
//! # Schema Expectations
//! - `key_abbreviations_english(a, b)` - book abbreviation to book number
//! - `key_english(b, n)` - book number to canonical name
//! - `bible_version_key(table, abbreviation, version)` - translation directory
//! - one table per translation with columns `id` (8-digit `BBCCCVVV` key),
//!   `c` (chapter), `v` (verse), `t` (text)
//!
//! # Implementation Notes
//! - Uses `mysql_async` (async driver, requires tokio runtime)
//! - One connection per store, opened in `connect` and reused until `disconnect`
//! - SQL text is logged at DEBUG before execution
//! - Range bounds are passed as the zero-padded key strings; the server
//!   coerces them against the numeric `id` column exactly as the stored
//!   8-digit keys compare

use mysql_async::{prelude::*, Conn, OptsBuilder, Row};
use tracing::debug;

use crate::error::{Result, ScripturaError};
use crate::store::{StoreConfig, TranslationRecord, VerseRecord, VerseStore};

const BOOK_NUMBER_SQL: &str = "SELECT b FROM key_abbreviations_english WHERE a = ?";
const BOOK_NAME_SQL: &str = "SELECT n FROM key_english WHERE b = ?";
const TRANSLATION_TABLE_SQL: &str = "SELECT `table` FROM bible_version_key WHERE abbreviation = ?";
const TRANSLATIONS_SQL: &str = "SELECT `table`, abbreviation, version FROM bible_version_key";

/// MySQL-backed verse store holding a single reused connection
pub struct MySqlStore {
    conn: Conn,
}

impl MySqlStore {
    /// Connect to the database described by `config`
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let opts = OptsBuilder::default()
            .ip_or_hostname(&config.host)
            .tcp_port(config.port)
            .user(Some(&config.user))
            .pass(Some(&config.password))
            .db_name(Some(&config.database));

        let conn = Conn::new(opts).await.map_err(|e| {
            ScripturaError::connection_failed(format!("Failed to connect to MySQL: {e}"))
        })?;

        debug!(host = %config.host, database = %config.database, "connected");

        Ok(Self { conn })
    }

    /// Close the connection
    ///
    /// Dropping the store also releases it, but an explicit disconnect
    /// completes the protocol-level quit exchange.
    pub async fn disconnect(self) -> Result<()> {
        self.conn
            .disconnect()
            .await
            .map_err(|e| ScripturaError::connection_failed(format!("Failed to disconnect: {e}")))
    }
}

impl VerseStore for MySqlStore {
    async fn book_number(&mut self, name: &str) -> Result<Option<u32>> {
        debug!(sql = BOOK_NUMBER_SQL, name, "resolving book number");

        let row: Option<Row> =
            self.conn.exec_first(BOOK_NUMBER_SQL, (name,)).await.map_err(|e| {
                ScripturaError::query_failed(format!(
                    "Failed to query book number for '{name}': {e}"
                ))
            })?;

        row.map(|r| {
            r.get::<u32, _>(0)
                .ok_or_else(|| ScripturaError::query_failed("Failed to extract book number"))
        })
        .transpose()
    }

    async fn book_name(&mut self, number: u32) -> Result<Option<String>> {
        debug!(sql = BOOK_NAME_SQL, number, "resolving book name");

        let row: Option<Row> =
            self.conn.exec_first(BOOK_NAME_SQL, (number,)).await.map_err(|e| {
                ScripturaError::query_failed(format!(
                    "Failed to query book name for number '{number}': {e}"
                ))
            })?;

        row.map(|r| {
            r.get::<String, _>(0)
                .ok_or_else(|| ScripturaError::query_failed("Failed to extract book name"))
        })
        .transpose()
    }

    async fn translation_table(&mut self, abbreviation: &str) -> Result<Option<String>> {
        debug!(sql = TRANSLATION_TABLE_SQL, abbreviation, "resolving translation table");

        let row: Option<Row> = self
            .conn
            .exec_first(TRANSLATION_TABLE_SQL, (abbreviation,))
            .await
            .map_err(|e| {
                ScripturaError::query_failed(format!(
                    "Failed to query translation table for '{abbreviation}': {e}"
                ))
            })?;

        row.map(|r| {
            r.get::<String, _>(0)
                .ok_or_else(|| ScripturaError::query_failed("Failed to extract table name"))
        })
        .transpose()
    }

    async fn verses_in_range(
        &mut self,
        table: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<VerseRecord>> {
        // The table name was validated as a plain identifier before it
        // reaches this interpolation; key bounds are bound parameters.
        let sql =
            format!("SELECT c AS chapter, v AS verse, t AS text FROM {table} WHERE id >= ? AND id <= ?");
        debug!(sql = %sql, start, end, "querying verse range");

        let rows: Vec<Row> = self.conn.exec(sql.as_str(), (start, end)).await.map_err(|e| {
            ScripturaError::query_failed(format!("Failed to query verses from '{table}': {e}"))
        })?;

        let mut verses = Vec::with_capacity(rows.len());
        for row in rows {
            let chapter: u32 = row
                .get(0)
                .ok_or_else(|| ScripturaError::query_failed("Failed to extract chapter"))?;
            let verse: u32 = row
                .get(1)
                .ok_or_else(|| ScripturaError::query_failed("Failed to extract verse"))?;
            let text: String = row
                .get(2)
                .ok_or_else(|| ScripturaError::query_failed("Failed to extract verse text"))?;

            verses.push(VerseRecord { chapter, verse, text });
        }

        Ok(verses)
    }

    async fn translations(&mut self) -> Result<Vec<TranslationRecord>> {
        debug!(sql = TRANSLATIONS_SQL, "listing translations");

        let rows: Vec<Row> = self.conn.query(TRANSLATIONS_SQL).await.map_err(|e| {
            ScripturaError::query_failed(format!("Failed to query translations: {e}"))
        })?;

        let mut translations = Vec::with_capacity(rows.len());
        for row in rows {
            let table: String = row
                .get(0)
                .ok_or_else(|| ScripturaError::query_failed("Failed to extract table name"))?;
            let abbreviation: String = row
                .get(1)
                .ok_or_else(|| ScripturaError::query_failed("Failed to extract abbreviation"))?;
            let version: String = row
                .get(2)
                .ok_or_else(|| ScripturaError::query_failed("Failed to extract version name"))?;

            translations.push(TranslationRecord { table, abbreviation, version });
        }

        Ok(translations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a running MariaDB instance loaded with the
    // scripture schema. They are marked with #[ignore] and should be run
    // with: cargo test -- --ignored

    #[tokio::test]
    #[ignore] // Requires running MariaDB instance
    async fn test_connect_and_resolve_book() {
        let config = StoreConfig::default();

        let mut store = MySqlStore::connect(&config).await.expect("connection should succeed");

        let number = store.book_number("John").await.expect("query should succeed");
        assert_eq!(number, Some(43));

        let name = store.book_name(43).await.expect("query should succeed");
        assert_eq!(name.as_deref(), Some("John"));

        store.disconnect().await.expect("disconnect should succeed");
    }

    #[tokio::test]
    #[ignore] // Requires running MariaDB instance
    async fn test_fetch_verse_range() {
        let config = StoreConfig::default();

        let mut store = MySqlStore::connect(&config).await.expect("connection should succeed");

        let table = store
            .translation_table("WEB")
            .await
            .expect("query should succeed")
            .expect("WEB translation should exist");

        let verses = store
            .verses_in_range(&table, "43003016", "43003018")
            .await
            .expect("query should succeed");
        assert_eq!(verses.len(), 3);
        assert_eq!(verses[0].chapter, 3);
        assert_eq!(verses[0].verse, 16);

        store.disconnect().await.expect("disconnect should succeed");
    }

    #[tokio::test]
    #[ignore] // Requires running MariaDB instance
    async fn test_connect_bad_credentials() {
        let config = StoreConfig { user: "nobody".to_string(), ..StoreConfig::default() };

        let result = MySqlStore::connect(&config).await;
        assert!(matches!(result, Err(ScripturaError::ConnectionFailed(_))));
    }
}
