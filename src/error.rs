use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuiverError {
    #[error("catalog file not found: {0}")]
    CatalogNotFound(String),

    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    #[error("spot '{query}' not found. Available spots: {}", .suggestions.join(", "))]
    SpotNotFound {
        query: String,
        suggestions: Vec<String>,
    },

    #[error("provider request failed: {0}")]
    Provider(String),

    #[error("failed to parse conditions: {0}")]
    ConditionsParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuiverError {
    /// Errors that end a single forecast request without a recommendation,
    /// as opposed to setup failures that stop the process.
    pub fn is_request_level(&self) -> bool {
        matches!(
            self,
            QuiverError::SpotNotFound { .. }
                | QuiverError::Provider(_)
                | QuiverError::ConditionsParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, QuiverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_not_found_lists_suggestions() {
        let err = QuiverError::SpotNotFound {
            query: "nowhere_beach".to_string(),
            suggestions: vec!["Linda Mar".to_string(), "Ocean Beach".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("nowhere_beach"));
        assert!(message.contains("Linda Mar, Ocean Beach"));
        assert!(err.is_request_level());
    }

    #[test]
    fn catalog_errors_are_not_request_level() {
        assert!(!QuiverError::CatalogNotFound("my_boards.json".to_string()).is_request_level());
    }
}
