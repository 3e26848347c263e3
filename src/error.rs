use serde_json::error::Category;
use thiserror::Error;

/// Errors returned by [OrderedMap::encode](struct.OrderedMap.html#method.encode) and
/// [OrderedMap::decode](struct.OrderedMap.html#method.decode).
///
/// The wrapped `serde_json::Error` is kept untouched, so line/column information
/// and the original message are still available through `source()`.
#[derive(Error, Debug)]
pub enum Error {
  /// The input is not well-formed JSON (this includes premature EOF and trailing characters).
  #[error("JSON syntax error: {0}")]
  Syntax(#[source] serde_json::Error),

  /// The input is well-formed JSON, but its top-level value is neither an object nor null.
  #[error("object expected: {0}")]
  Type(#[source] serde_json::Error),

  /// A key or value could not be serialized.
  #[error("JSON encoding error: {0}")]
  Encoding(#[source] serde_json::Error),
}

impl Error {
  /// Sort a decoding failure into [Syntax](#variant.Syntax) or [Type](#variant.Type).
  pub(crate) fn from_decode(err: serde_json::Error) -> Self {
    match err.classify() {
      Category::Data => Error::Type(err),
      Category::Syntax | Category::Eof | Category::Io => Error::Syntax(err),
    }
  }

  /// Returns true for [Syntax](#variant.Syntax) errors.
  pub fn is_syntax(&self) -> bool {
    matches!(self, Error::Syntax(_))
  }

  /// Returns true for [Type](#variant.Type) errors.
  pub fn is_type(&self) -> bool {
    matches!(self, Error::Type(_))
  }

  /// Returns true for [Encoding](#variant.Encoding) errors.
  pub fn is_encoding(&self) -> bool {
    matches!(self, Error::Encoding(_))
  }

  /// The underlying `serde_json` error.
  pub fn inner(&self) -> &serde_json::Error {
    match self {
      Error::Syntax(e) | Error::Type(e) | Error::Encoding(e) => e,
    }
  }
}

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
