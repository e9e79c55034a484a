use crate::Category;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Raw console input that does not match the expected format.
    #[error("{0}")]
    Format(String),

    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("No meal exists in the {0} category.")]
    EmptyCategory(Category),

    #[error("Unable to save. Plan your meals first.")]
    NoPlan,

    #[error("Unable to save to {path}: {source}")]
    Export {
        path: String,
        source: std::io::Error,
    },

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<strum::ParseError> for Error {
    fn from(value: strum::ParseError) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Unknown($crate::__private::anyhow!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Unknown($crate::__private::anyhow!($fmt, $($arg)*)))
    };
}
