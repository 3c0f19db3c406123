use crate::domain::model::{Kingdom, Phylum, Species};
use serde::{Deserialize, Serialize};

/// 種用のレスポンスDTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesResponse {
    pub id: Option<i64>,
    pub species_name: String,
    pub kingdom: Kingdom,
    pub phylum: Phylum,
    pub quantity: u32,
}

impl SpeciesResponse {
    /// ドメインオブジェクトからSpeciesResponseを作成
    pub fn from_species(species: &Species) -> Self {
        Self {
            id: species.id().map(|id| id.value()),
            species_name: species.species_name().to_string(),
            kingdom: species.kingdom(),
            phylum: species.phylum(),
            quantity: species.quantity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{SpeciesId, SpeciesName};

    #[test]
    fn test_from_species() {
        let species = Species::reconstruct(
            SpeciesId::new(1),
            SpeciesName::new("Dromedary").unwrap(),
            Kingdom::Animal,
            Phylum::Chordata,
            7,
        );

        let response = SpeciesResponse::from_species(&species);

        assert_eq!(response.id, Some(1));
        assert_eq!(response.species_name, "Dromedary");
        assert_eq!(response.quantity, 7);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["kingdom"], "ANIMAL");
        assert_eq!(json["phylum"], "CHORDATA");
    }
}
