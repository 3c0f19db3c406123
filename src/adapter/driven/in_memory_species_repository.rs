use crate::domain::model::{Species, SpeciesId};
use crate::domain::port::{RepositoryError, SpeciesRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug)]
struct InMemoryState {
    species: BTreeMap<SpeciesId, Species>,
    next_id: i64,
}

/// インメモリ種リポジトリ
/// プロセス内で種を保持する。IDは1から順に採番する
#[derive(Debug)]
pub struct InMemorySpeciesRepository {
    state: RwLock<InMemoryState>,
}

impl InMemorySpeciesRepository {
    /// 空のリポジトリを作成
    pub fn new() -> Self {
        Self {
            state: RwLock::new(InMemoryState {
                species: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemorySpeciesRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeciesRepository for InMemorySpeciesRepository {
    async fn find_by_id(&self, id: SpeciesId) -> Result<Option<Species>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.species.get(&id).cloned())
    }

    async fn find_by_name(&self, species_name: &str) -> Result<Option<Species>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .species
            .values()
            .find(|species| species.species_name().as_str() == species_name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Species>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.species.values().cloned().collect())
    }

    async fn save(&self, species: &Species) -> Result<Species, RepositoryError> {
        let mut state = self.state.write().await;

        // 自分以外に同名の種があれば一意制約違反
        let duplicated = state.species.values().any(|existing| {
            existing.species_name() == species.species_name() && existing.id() != species.id()
        });
        if duplicated {
            return Err(RepositoryError::Conflict(format!(
                "species_name '{}' is already used",
                species.species_name()
            )));
        }

        let id = match species.id() {
            Some(id) => id,
            None => {
                let id = SpeciesId::new(state.next_id);
                state.next_id += 1;
                id
            }
        };

        let saved = Species::reconstruct(
            id,
            species.species_name().clone(),
            species.kingdom(),
            species.phylum(),
            species.quantity(),
        );
        state.species.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: SpeciesId) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        state.species.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Kingdom, Phylum, SpeciesName};

    fn new_species(name: &str, quantity: u32) -> Species {
        Species::new(
            SpeciesName::new(name).unwrap(),
            Kingdom::Animal,
            Phylum::Chordata,
            quantity,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repository = InMemorySpeciesRepository::new();

        let first = repository.save(&new_species("Dromedary", 7)).await.unwrap();
        let second = repository.save(&new_species("Okapi", 2)).await.unwrap();

        assert_eq!(first.id(), Some(SpeciesId::new(1)));
        assert_eq!(second.id(), Some(SpeciesId::new(2)));
    }

    #[tokio::test]
    async fn test_save_existing_id_updates_in_place() {
        let repository = InMemorySpeciesRepository::new();
        let saved = repository.save(&new_species("Dromedary", 7)).await.unwrap();

        let updated = Species::reconstruct(
            saved.id().unwrap(),
            saved.species_name().clone(),
            saved.kingdom(),
            saved.phylum(),
            9,
        );
        repository.save(&updated).await.unwrap();

        let all = repository.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].quantity(), 9);
        assert_eq!(all[0].id(), saved.id());
    }

    #[tokio::test]
    async fn test_save_duplicate_name_conflicts() {
        let repository = InMemorySpeciesRepository::new();
        repository.save(&new_species("Dromedary", 7)).await.unwrap();

        let result = repository.save(&new_species("Dromedary", 1)).await;

        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
        assert_eq!(repository.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_name_is_case_sensitive() {
        let repository = InMemorySpeciesRepository::new();
        repository.save(&new_species("Dromedary", 7)).await.unwrap();

        assert!(repository.find_by_name("Dromedary").await.unwrap().is_some());
        assert!(repository.find_by_name("dromedary").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repository = InMemorySpeciesRepository::new();
        let saved = repository.save(&new_species("Dromedary", 7)).await.unwrap();
        let id = saved.id().unwrap();

        repository.delete_by_id(id).await.unwrap();

        assert!(repository.find_by_id(id).await.unwrap().is_none());
        assert!(repository.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repository = InMemorySpeciesRepository::new();
        let first = repository.save(&new_species("Dromedary", 7)).await.unwrap();
        repository.delete_by_id(first.id().unwrap()).await.unwrap();

        let second = repository.save(&new_species("Okapi", 2)).await.unwrap();
        assert_eq!(second.id(), Some(SpeciesId::new(2)));
    }
}
