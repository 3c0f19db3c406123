// アプリケーション層
// ユースケースを実装し、ドメインとポートを組み合わせる

mod error;
pub mod service;

pub use error::{ApplicationError, SpeciesKey};
