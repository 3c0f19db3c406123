use super::require_species;
use crate::application::{ApplicationError, SpeciesKey};
use crate::domain::model::{Species, SpeciesId};
use crate::domain::port::SpeciesRepository;
use std::sync::Arc;

/// 種クエリサービス
/// 読み取り専用の種操作を提供する
pub struct SpeciesQueryService {
    species_repository: Arc<dyn SpeciesRepository>,
}

impl SpeciesQueryService {
    /// 新しい種クエリサービスを作成
    ///
    /// # Arguments
    /// * `species_repository` - 種リポジトリ
    pub fn new(species_repository: Arc<dyn SpeciesRepository>) -> Self {
        Self { species_repository }
    }

    /// 種IDで種を取得
    ///
    /// # Returns
    /// * `Ok(Species)` - 種が見つかった
    /// * `Err(ApplicationError::NotFound)` - 種が見つからなかった
    pub async fn get_species_by_id(&self, id: SpeciesId) -> Result<Species, ApplicationError> {
        tracing::debug!(species_id = %id, "looking up species by id");
        require_species(self.species_repository.as_ref(), id).await
    }

    /// 種名で種を取得
    ///
    /// # Returns
    /// * `Ok(Species)` - 種が見つかった
    /// * `Err(ApplicationError::NotFound)` - 種が見つからなかった
    pub async fn get_species_by_name(&self, species_name: &str) -> Result<Species, ApplicationError> {
        tracing::debug!(species_name, "looking up species by name");
        self.species_repository
            .find_by_name(species_name)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(SpeciesKey::Name(species_name.to_string())))
    }

    /// すべての種を取得
    /// 登録がない場合は空のリストを返す
    pub async fn list_species(&self) -> Result<Vec<Species>, ApplicationError> {
        self.species_repository
            .find_all()
            .await
            .map_err(ApplicationError::from)
    }
}
