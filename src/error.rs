use std::fmt::{Debug, Display};

/// Broad category of a failure, so that callers can react to it without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum ErrorKind {
    /// Bad dimensions, ratio, anchor, percentage or quality
    InvalidArgument,
    /// MIME type outside of the accepted set
    UnsupportedFormat,
    DecodeFailure,
    EncodeFailure,
    /// The source could not be read or downloaded
    FetchFailure,
}

pub struct CropError {
    kind: ErrorKind,
    message: String,
}

impl CropError {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for CropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for CropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CropError")
            .field(&self.kind)
            .field(&self.message)
            .finish()
    }
}

impl std::error::Error for CropError {}

#[macro_export]
macro_rules! wc_err {
    ($kind:ident, $($arg:tt)+) => {
        $crate::error::CropError::new(
            $crate::error::ErrorKind::$kind,
            format!(
                "wondercrop: {} @ {}:{}:{}",
                format_args!($($arg)+),
                file!(),
                line!(),
                column!()
            ),
        )
    };
}

#[macro_export]
macro_rules! wc_try {
    ($kind:ident, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::wc_err!($kind, "{}", err));
            }
        }
    };
}
