// 出力ポート
// ドメイン層が外部に依存する機能をトレイトとして定義
// アダプター層でこれらのトレイトを実装する

use crate::domain::model::{Species, SpeciesId};
use async_trait::async_trait;

/// リポジトリエラー型
/// リポジトリ操作で発生するエラーを表現する
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum RepositoryError {
    /// データベース接続に失敗
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// 操作に失敗
    #[error("Operation failed: {0}")]
    OperationFailed(String),
    /// データの取得・復元に失敗
    #[error("Fetch failed: {0}")]
    FetchFailed(String),
    /// 一意制約違反（同名の種が既に存在する）
    #[error("Conflict: {0}")]
    Conflict(String),
}

/// 種リポジトリトレイト
/// 種集約の永続化を抽象化する
#[async_trait]
pub trait SpeciesRepository: Send + Sync {
    /// 種IDで種を検索する
    ///
    /// # Returns
    /// * `Ok(Some(Species))` - 種が見つかった
    /// * `Ok(None)` - 種が見つからなかった
    /// * `Err(RepositoryError)` - 検索失敗
    async fn find_by_id(&self, id: SpeciesId) -> Result<Option<Species>, RepositoryError>;

    /// 種名で種を検索する（大文字小文字を区別する）
    ///
    /// # Returns
    /// * `Ok(Some(Species))` - 種が見つかった
    /// * `Ok(None)` - 種が見つからなかった
    /// * `Err(RepositoryError)` - 検索失敗
    async fn find_by_name(&self, species_name: &str) -> Result<Option<Species>, RepositoryError>;

    /// すべての種を取得する
    /// 順序は保証しない
    async fn find_all(&self) -> Result<Vec<Species>, RepositoryError>;

    /// 種を保存する
    /// IDが未採番なら新規登録してIDを採番し、採番済みなら更新する
    ///
    /// # Returns
    /// * `Ok(Species)` - IDが設定された保存後の種
    /// * `Err(RepositoryError::Conflict)` - 同名の種が既に存在する
    /// * `Err(RepositoryError)` - 保存失敗
    async fn save(&self, species: &Species) -> Result<Species, RepositoryError>;

    /// 種IDで種を削除する
    async fn delete_by_id(&self, id: SpeciesId) -> Result<(), RepositoryError>;
}
