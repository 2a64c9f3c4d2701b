use std::env;

use crate::domain::SearchFields;

pub const DEFAULT_OPENLIBRARY_URL: &str = "https://openlibrary.org";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub profile: String,
    /// Fields that take part in keyword search
    pub search_fields: SearchFields,
    /// Reject writes whose main subject is not in the taxonomy instead of filing them under 000
    pub strict_subjects: bool,
    /// Optional JSON taxonomy replacing the built-in Dewey table
    pub classification_file: Option<String>,
    pub openlibrary_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let profile = env::var("PROFILE").unwrap_or_else(|_| "default".to_string());

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            if profile == "default" {
                "sqlite://shelfmark.db?mode=rwc".to_string()
            } else {
                format!("sqlite://shelfmark_{}.db?mode=rwc", profile)
            }
        });

        Self {
            database_url,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            profile,
            search_fields: env::var("SEARCH_FIELDS")
                .map(|s| SearchFields::parse_list(&s))
                .unwrap_or_default(),
            strict_subjects: env::var("STRICT_SUBJECTS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            classification_file: env::var("CLASSIFICATION_FILE")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            openlibrary_url: env::var("OPENLIBRARY_URL")
                .unwrap_or_else(|_| DEFAULT_OPENLIBRARY_URL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchField;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "PROFILE",
        "DATABASE_URL",
        "PORT",
        "CORS_ALLOWED_ORIGINS",
        "SEARCH_FIELDS",
        "STRICT_SUBJECTS",
        "CLASSIFICATION_FILE",
        "OPENLIBRARY_URL",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: tests touching the environment are serialized.
            unsafe { env::remove_var(var) };
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env();
        assert_eq!(config.database_url, "sqlite://shelfmark.db?mode=rwc");
        assert_eq!(config.port, 8000);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.search_fields, SearchFields::default());
        assert!(!config.strict_subjects);
        assert!(config.classification_file.is_none());
        assert_eq!(config.openlibrary_url, DEFAULT_OPENLIBRARY_URL);
    }

    #[test]
    #[serial]
    fn test_profile_and_overrides() {
        clear_env();
        unsafe {
            env::set_var("PROFILE", "work");
            env::set_var("PORT", "9100");
            env::set_var("SEARCH_FIELDS", "title,isbn");
            env::set_var("STRICT_SUBJECTS", "1");
            env::set_var("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,");
        }

        let config = Config::from_env();
        assert_eq!(config.database_url, "sqlite://shelfmark_work.db?mode=rwc");
        assert_eq!(config.port, 9100);
        assert!(config.search_fields.contains(SearchField::Isbn));
        assert!(!config.search_fields.contains(SearchField::Author));
        assert!(config.strict_subjects);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );

        clear_env();
    }
}
