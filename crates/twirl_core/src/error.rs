use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpinnerError {
    #[error("config error: {0}")]
    Config(String),

    /// Construction failure tagged with the spinner variant that raised it.
    #[error("[{name}] {source}")]
    Spinner {
        name: String,
        #[source]
        source: Box<SpinnerError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl SpinnerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Wraps `self` with the name of the spinner being built.
    pub fn in_spinner(self, name: impl Into<String>) -> Self {
        Self::Spinner {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// True for configuration errors, including wrapped ones.
    pub fn is_config(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Spinner { source, .. } => source.is_config(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpinnerError>;
