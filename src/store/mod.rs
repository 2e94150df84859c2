//! Verse Store Abstraction
//!
//! This module defines the read-only data-access boundary the lookup
//! service depends on, plus the connection configuration and the record
//! types returned from queries.
//!
//! # Connection Model
//! A store owns a single connection for its lifetime. Methods take
//! `&mut self`, so concurrent use of one handle is ruled out by the borrow
//! rules; callers needing concurrency open independent stores.
//!
//! # Implementations
//! - [`mysql::MySqlStore`] - production store over MySQL/MariaDB
//! - test stand-ins implement [`VerseStore`] in memory

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScripturaError};

pub mod mysql;

/// Connection configuration for the verse store
///
/// Defaults target a local MariaDB with the conventional scripture schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Hostname of the database server
    #[serde(default = "default_host")]
    pub host: String,

    /// Port number
    #[serde(default = "default_port")]
    pub port: u16,

    /// Username
    #[serde(default = "default_user")]
    pub user: String,

    /// Password
    /// WARNING: Sensitive data, do not log or include in error messages
    #[serde(default)]
    pub password: String,

    /// Database name
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3306
}

fn default_user() -> String {
    "root".to_string()
}

fn default_database() -> String {
    "bible".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            database: default_database(),
        }
    }
}

/// A single verse row returned from a range query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Chapter number
    pub chapter: u32,

    /// Verse number within the chapter
    pub verse: u32,

    /// Verse text in the queried translation
    pub text: String,
}

/// A row of the translation directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Name of the table holding this translation's verse rows
    pub table: String,

    /// Short code used to select the translation ("KJV", "WEB")
    pub abbreviation: String,

    /// Display name ("King James Version")
    pub version: String,
}

/// Validate that a resolved table name is a safe SQL identifier
///
/// Table names cannot be bound as query parameters, so the resolved name is
/// interpolated into the query text. Anything that is not a plain
/// identifier (leading ASCII letter or underscore, then ASCII alphanumerics
/// or underscores) is rejected before it reaches a query.
pub fn validate_table_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ScripturaError::invalid_table_name(name))
    }
}

/// Read-only data access used by the lookup service
///
/// All methods are sequential round-trips on the store's single connection.
/// Implementations surface driver failures as `ConnectionFailed` or
/// `QueryFailed`; absence of a row is `Ok(None)`, not an error - the
/// service decides what a miss means.
pub trait VerseStore {
    /// Resolve a book name or abbreviation to its canonical book number
    fn book_number(&mut self, name: &str) -> impl Future<Output = Result<Option<u32>>> + Send;

    /// Resolve a book number back to its canonical English name
    fn book_name(&mut self, number: u32) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Resolve a translation abbreviation to its backing table name
    fn translation_table(
        &mut self,
        abbreviation: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Fetch verse rows with keys in `[start, end]`, in natural table order
    fn verses_in_range(
        &mut self,
        table: &str,
        start: &str,
        end: &str,
    ) -> impl Future<Output = Result<Vec<VerseRecord>>> + Send;

    /// List every row of the translation directory
    fn translations(&mut self) -> impl Future<Output = Result<Vec<TranslationRecord>>> + Send;
}
