//! Application state containing the catalog and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::DomainError;
use crate::infrastructure::SeaOrmBookRepository;
use crate::infrastructure::config::{Config, DEFAULT_OPENLIBRARY_URL};
use crate::modules::classification::ClassificationTable;
use crate::modules::integrations::OpenLibraryClient;
use crate::services::CatalogService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks)
    db: DatabaseConnection,
    /// Book catalog
    pub catalog: CatalogService,
    /// ISBN metadata lookups
    pub lookup: OpenLibraryClient,
}

impl AppState {
    /// State with the built-in Dewey table and default options
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_classification(db, ClassificationTable::dewey())
    }

    pub fn with_classification(db: DatabaseConnection, table: ClassificationTable) -> Self {
        let book_repo = Arc::new(SeaOrmBookRepository::new(db.clone()));
        let catalog = CatalogService::new(book_repo, Arc::new(table));

        Self {
            db,
            catalog,
            lookup: OpenLibraryClient::new(DEFAULT_OPENLIBRARY_URL),
        }
    }

    /// Build state from runtime configuration, loading a custom taxonomy if one is configured
    pub fn from_config(db: DatabaseConnection, config: &Config) -> Result<Self, DomainError> {
        let table = match &config.classification_file {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    DomainError::Validation(format!("cannot read taxonomy file {}: {}", path, e))
                })?;
                let table = ClassificationTable::from_json(&json)?;
                tracing::info!(
                    "Loaded {} subjects from taxonomy file {}",
                    table.subjects().len(),
                    path
                );
                table
            }
            None => ClassificationTable::dewey(),
        };

        let mut state = Self::with_classification(db, table);
        state.catalog = state
            .catalog
            .with_search_fields(config.search_fields.clone())
            .with_strict_subjects(config.strict_subjects);
        state.lookup = OpenLibraryClient::new(config.openlibrary_url.clone());
        Ok(state)
    }

    /// Replace the Open Library endpoint (tests point this at a mock server)
    pub fn with_lookup(mut self, lookup: OpenLibraryClient) -> Self {
        self.lookup = lookup;
        self
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
