//! Errors for itemset mining and rule derivation.
//! One `thiserror` enum for the crate; every variant is raised before any
//! tree is touched.

/// Broad classification of a [`MiningError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed transactions or thresholds.
    InvalidInput,
    /// Inconsistent or unparsable settings.
    Configuration,
}

#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("transaction {transaction} contains the reserved root marker")]
    ReservedItem { transaction: usize },

    #[error("invalid minimum support {value}: {reason}")]
    InvalidSupport { value: f64, reason: &'static str },

    #[error("invalid {name} threshold {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl MiningError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ReservedItem { .. } | Self::InvalidSupport { .. } => ErrorKind::InvalidInput,
            Self::InvalidThreshold { .. } | Self::Configuration(_) | Self::ConfigParse(_) => {
                ErrorKind::Configuration
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MiningError>;
