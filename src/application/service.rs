use crate::application::{ApplicationError, SpeciesKey};
use crate::domain::model::{AdjustmentAmount, Species, SpeciesId};
use crate::domain::port::{RepositoryError, SpeciesRepository};
use std::sync::Arc;

mod species_query_service;

pub use species_query_service::SpeciesQueryService;

/// IDで種を解決し、存在しなければNotFoundにする
/// 取得・削除・増減のすべてがこの解決を経由する
async fn require_species(
    repository: &dyn SpeciesRepository,
    id: SpeciesId,
) -> Result<Species, ApplicationError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or(ApplicationError::NotFound(SpeciesKey::Id(id)))
}

/// 種アプリケーションサービス
/// 登録・削除・頭数の増減といった更新系のユースケースを提供する
pub struct SpeciesApplicationService {
    species_repository: Arc<dyn SpeciesRepository>,
}

impl SpeciesApplicationService {
    /// 新しいアプリケーションサービスを作成
    ///
    /// # Arguments
    /// * `species_repository` - 種リポジトリ
    pub fn new(species_repository: Arc<dyn SpeciesRepository>) -> Self {
        Self { species_repository }
    }

    /// 新しい種を登録
    ///
    /// # Arguments
    /// * `species` - 登録する種（未保存）
    ///
    /// # Returns
    /// * `Ok(Species)` - IDが採番された登録済みの種
    /// * `Err(ApplicationError::AlreadyExists)` - 同名の種が既に存在する
    /// * `Err(ApplicationError)` - 登録失敗
    pub async fn create_species(&self, species: Species) -> Result<Species, ApplicationError> {
        let species_name = species.species_name().to_string();

        if self
            .species_repository
            .find_by_name(&species_name)
            .await?
            .is_some()
        {
            tracing::warn!(species_name = %species_name, "species already registered");
            return Err(ApplicationError::AlreadyExists(species_name));
        }

        // 検索と保存の間に同名が登録された場合はストアの一意制約で検出される
        let saved = match self.species_repository.save(&species).await {
            Ok(saved) => saved,
            Err(RepositoryError::Conflict(_)) => {
                tracing::warn!(species_name = %species_name, "species registered concurrently");
                return Err(ApplicationError::AlreadyExists(species_name));
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            species_id = ?saved.id(),
            species_name = %species_name,
            quantity = saved.quantity(),
            "species created"
        );
        Ok(saved)
    }

    /// 種IDで種を削除
    ///
    /// # Returns
    /// * `Ok(())` - 削除成功
    /// * `Err(ApplicationError::NotFound)` - 種が存在しない
    pub async fn delete_species(&self, id: SpeciesId) -> Result<(), ApplicationError> {
        require_species(self.species_repository.as_ref(), id).await?;
        self.species_repository.delete_by_id(id).await?;
        tracing::info!(species_id = %id, "species deleted");
        Ok(())
    }

    /// 頭数を増やす
    ///
    /// # Arguments
    /// * `id` - 種ID
    /// * `amount` - 増加量（1〜10）
    ///
    /// # Returns
    /// * `Ok(Species)` - 保存後の種
    /// * `Err(ApplicationError::NotFound)` - 種が存在しない
    /// * `Err(ApplicationError::DomainError(LimitExceeded))` - 上限超過（保存しない）
    pub async fn increment_quantity(
        &self,
        id: SpeciesId,
        amount: AdjustmentAmount,
    ) -> Result<Species, ApplicationError> {
        let mut species = require_species(self.species_repository.as_ref(), id).await?;

        if let Err(err) = species.increase(amount) {
            tracing::warn!(species_id = %id, amount = amount.value(), error = %err, "increment rejected");
            return Err(err.into());
        }

        let saved = self.species_repository.save(&species).await?;
        tracing::info!(species_id = %id, quantity = saved.quantity(), "species quantity incremented");
        Ok(saved)
    }

    /// 頭数を減らす
    ///
    /// # Arguments
    /// * `id` - 種ID
    /// * `amount` - 減少量（1〜10）
    ///
    /// # Returns
    /// * `Ok(Species)` - 保存後の種（頭数0を含む）
    /// * `Err(ApplicationError::NotFound)` - 種が存在しない
    /// * `Err(ApplicationError::DomainError(AlreadyZero))` - 0未満になる（保存しない）
    pub async fn decrement_quantity(
        &self,
        id: SpeciesId,
        amount: AdjustmentAmount,
    ) -> Result<Species, ApplicationError> {
        let mut species = require_species(self.species_repository.as_ref(), id).await?;

        if let Err(err) = species.decrease(amount) {
            tracing::warn!(species_id = %id, amount = amount.value(), error = %err, "decrement rejected");
            return Err(err.into());
        }

        let saved = self.species_repository.save(&species).await?;
        tracing::info!(species_id = %id, quantity = saved.quantity(), "species quantity decremented");
        Ok(saved)
    }
}
