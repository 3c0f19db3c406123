use crate::domain::error::DomainError;
use crate::domain::model::SpeciesId;
use crate::domain::port::RepositoryError;

use std::fmt;

/// 種を特定するキー
/// NotFoundエラーでどのキーで検索したかを伝えるために使う
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeciesKey {
    Id(SpeciesId),
    Name(String),
}

impl fmt::Display for SpeciesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesKey::Id(id) => write!(f, "with id: {}", id),
            SpeciesKey::Name(name) => write!(f, "of name: {}", name),
        }
    }
}

/// アプリケーション層のエラー型
/// 重複・未存在の判定と、ドメインエラー・リポジトリエラーをラップする
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    /// 同名の種が既に登録されている
    #[error("Species {0} is already registered.")]
    AlreadyExists(String),
    /// 指定されたIDまたは種名の種が存在しない
    #[error("Species {0} doesn't exist.")]
    NotFound(SpeciesKey),
    /// ドメインエラー（ビジネスルール違反）
    #[error(transparent)]
    DomainError(#[from] DomainError),
    /// リポジトリエラー（永続化の失敗）
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}
