use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read preferences file {path}: {source}")]
    PreferencesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preferences file: {0}")]
    PreferencesFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
