//! Error type for the few fallible operations (config, embedded tables, storage).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("locale table `{locale}` is not valid JSON: {source}")]
    Dictionary {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to persist `{key}`: {reason}")]
    Storage { key: String, reason: String },
}
