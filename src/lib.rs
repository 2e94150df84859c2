//! Scriptura - Bible Verse Lookup Client
//!
//! Scriptura is a client library for MariaDB/MySQL scripture databases. It
//! turns a human-readable reference ("John 3:16-18") and a translation code
//! ("KJV") into the verse rows stored for that translation.
//!
//! # How a Lookup Works
//! 1. The reference is split on its LAST space into book token and citation
//! 2. The book token resolves to a canonical book number
//! 3. The citation parses into two zero-padded `BBCCCVVV` keys bounding the range
//! 4. The translation abbreviation resolves to its backing table
//! 5. A single range query returns the rows between the keys, inclusive
//!
//! # Module Organization
//! - [`error`] - Error types and stable error codes
//! - [`reference`] - Reference parsing into composite range keys
//! - [`store`] - Data-access trait and the MySQL implementation
//! - [`service`] - Lookup orchestration over any store
//! - [`config`] - Explicit client configuration
//!
//! # Public API
//! The CLI is a thin wrapper over the same exports offered to library
//! consumers: [`VerseService`], [`MySqlStore`], [`ClientConfig`], and the
//! parsing primitives [`split_reference`]/[`parse_citation`]/[`VerseKey`].

pub mod config; // Explicit client configuration
pub mod error; // Error handling infrastructure
pub mod reference; // Reference parsing into composite range keys
pub mod service; // Lookup orchestration
pub mod store; // Data-access trait and MySQL implementation

// Re-export commonly used types for convenience
pub use config::ClientConfig;
pub use error::{Result, ScripturaError};
pub use reference::{parse_citation, split_reference, VerseKey};
pub use service::VerseService;
pub use store::{mysql::MySqlStore, StoreConfig, TranslationRecord, VerseRecord, VerseStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_exports() {
        // Verify that key types are accessible through the crate root
        let key = VerseKey::new(43, 3, 16);
        assert_eq!(key.encode(), "43003016");

        let _store_config = StoreConfig::default();
        let _client_config = ClientConfig::default();
    }
}
