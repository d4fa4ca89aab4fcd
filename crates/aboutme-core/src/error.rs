use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("saved state for '{key}' could not be encoded or decoded")]
    SavedState {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("saved state bundle is malformed")]
    Bundle(#[from] serde_json::Error),
    #[error("no string resource '{id}' for locale '{locale}' or the default locale")]
    MissingString { id: String, locale: String },
    #[error("no drawable resource '{0}'")]
    MissingDrawable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
