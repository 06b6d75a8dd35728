use thiserror::Error;

/// Failure raised by the record store.
///
/// The `Display` text is what clients see, so it is kept close to the
/// underlying driver message.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Cast to ObjectId failed for value \"{value}\" at path \"_id\" for model \"{model}\"")]
    InvalidId { model: &'static str, value: String },
}

impl StoreError {
    pub fn invalid_id(model: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidId {
            model,
            value: value.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
