//! Catalog error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or parsing a category document
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Configuration file '{}' not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file: {0}")]
    Syntax(#[from] serde_yaml::Error),

    #[error("Failed to parse configuration file: no top-level 'categories' key")]
    MissingCategories,

    #[error("Failed to parse configuration file: {0}")]
    Shape(String),

    #[error("No categories found in configuration file '{}'.", path.display())]
    Empty { path: PathBuf },
}

impl CatalogError {
    /// Build the right variant for an I/O failure on `path`
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound { path }
        } else {
            CatalogError::Read { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::NotFound {
            path: PathBuf::from("config/categories/student-life-hr.yaml"),
        };

        assert_eq!(
            err.to_string(),
            "Configuration file 'config/categories/student-life-hr.yaml' not found."
        );
    }

    #[test]
    fn test_from_io_maps_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CatalogError::from_io("missing.yaml", io);
        assert!(matches!(err, CatalogError::NotFound { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = CatalogError::from_io("locked.yaml", io);
        assert!(matches!(err, CatalogError::Read { .. }));
        assert!(err.to_string().contains("locked.yaml"));
    }

    #[test]
    fn test_empty_message_names_path() {
        let err = CatalogError::Empty {
            path: PathBuf::from("cats.yaml"),
        };
        assert!(err.to_string().contains("No categories found"));
        assert!(err.to_string().contains("cats.yaml"));
    }
}
