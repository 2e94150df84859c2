//! Verse Lookup Service
//!
//! Orchestrates a verse lookup over any [`VerseStore`]: split the reference
//! into book token and citation, resolve the book number, parse the
//! citation into range bounds, resolve the translation table, validate the
//! identifier, and run the bounded query.

use tracing::{error, warn};

use crate::error::{Result, ScripturaError};
use crate::reference::{parse_citation, split_reference};
use crate::store::{validate_table_name, TranslationRecord, VerseRecord, VerseStore};

/// Verse lookup service generic over its backing store
pub struct VerseService<S: VerseStore> {
    store: S,
}

impl<S: VerseStore> VerseService<S> {
    /// Create a service over an already-connected store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the service, returning the store for teardown
    pub fn into_store(self) -> S {
        self.store
    }

    /// Fetch the verses named by `reference` from `translation`
    ///
    /// `reference` is `"<book> <chapter>:<verse>"` with optional `-` ranges;
    /// see [`crate::reference`] for the accepted shapes. The translation
    /// abbreviation is matched case-insensitively.
    ///
    /// An empty result set is not an error: it logs a warning and returns
    /// an empty vec. This includes reversed ranges, whose bounds simply
    /// match no rows.
    pub async fn get_verses(
        &mut self,
        reference: &str,
        translation: &str,
    ) -> Result<Vec<VerseRecord>> {
        if reference.trim().is_empty() {
            return Err(ScripturaError::EmptyReference);
        }

        let (book_token, citation) = split_reference(reference)?;

        let book_number = self
            .store
            .book_number(book_token)
            .await?
            .ok_or_else(|| ScripturaError::book_not_found(book_token))?;

        let (start, end) = parse_citation(book_number, citation)?;

        let translation = translation.to_uppercase();
        let table = self
            .store
            .translation_table(&translation)
            .await?
            .ok_or_else(|| ScripturaError::translation_not_found(&translation))?;

        // The table name is interpolated into the query text, so it must be
        // a plain identifier.
        validate_table_name(&table)?;

        let verses = self.store.verses_in_range(&table, &start.encode(), &end.encode()).await?;

        if verses.is_empty() {
            warn!(reference, translation = %translation, "no verses found for reference");
        }

        Ok(verses)
    }

    /// Canonical English name for a book number
    pub async fn book_name(&mut self, book_number: u32) -> Result<String> {
        self.store
            .book_name(book_number)
            .await?
            .ok_or_else(|| ScripturaError::book_not_found(book_number.to_string()))
    }

    /// List the translations available in the store
    ///
    /// Fail-soft: a data-access failure is logged and yields an empty list
    /// rather than an error.
    pub async fn available_translations(&mut self) -> Vec<TranslationRecord> {
        match self.store.translations().await {
            Ok(translations) => translations,
            Err(e) => {
                error!(error = %e, "failed to fetch translations");
                Vec::new()
            }
        }
    }
}
