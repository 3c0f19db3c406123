use crate::domain::error::DomainError;
use crate::domain::model::{AdjustmentAmount, Kingdom, Phylum, Species, SpeciesName};
use serde::{Deserialize, Serialize};

/// 種登録用のリクエストDTO
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSpeciesRequest {
    #[serde(alias = "specie")]
    pub species_name: String,
    pub kingdom: Kingdom,
    pub phylum: Phylum,
    pub quantity: u32,
}

impl CreateSpeciesRequest {
    /// 未保存の種に変換する
    /// 種名の長さと数量の範囲をここで検証する
    pub fn into_species(self) -> Result<Species, DomainError> {
        let species_name = SpeciesName::new(self.species_name)?;
        Species::new(species_name, self.kingdom, self.phylum, self.quantity)
    }
}

/// 頭数増減用のリクエストDTO
#[derive(Debug, Serialize, Deserialize)]
pub struct QuantityRequest {
    pub quantity: u32,
}

impl QuantityRequest {
    /// 増減量に変換する（1〜10）
    pub fn into_amount(self) -> Result<AdjustmentAmount, DomainError> {
        AdjustmentAmount::new(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_species_request_deserialization() {
        let json = r#"{"species_name":"Dromedary","kingdom":"ANIMAL","phylum":"CHORDATA","quantity":7}"#;
        let request: CreateSpeciesRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.species_name, "Dromedary");
        assert_eq!(request.kingdom, Kingdom::Animal);
        assert_eq!(request.phylum, Phylum::Chordata);
        assert_eq!(request.quantity, 7);
    }

    #[test]
    fn test_create_species_request_accepts_specie_alias() {
        let json = r#"{"specie":"Dromedary","kingdom":"ANIMAL","phylum":"CHORDATA","quantity":7}"#;
        let request: CreateSpeciesRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.species_name, "Dromedary");
    }

    #[test]
    fn test_create_species_request_missing_kingdom() {
        let json = r#"{"species_name":"Dromedary","phylum":"CHORDATA","quantity":7}"#;
        assert!(serde_json::from_str::<CreateSpeciesRequest>(json).is_err());
    }

    #[test]
    fn test_create_species_request_unknown_phylum() {
        let json = r#"{"species_name":"Dromedary","kingdom":"ANIMAL","phylum":"DRAGONS","quantity":7}"#;
        assert!(serde_json::from_str::<CreateSpeciesRequest>(json).is_err());
    }

    #[test]
    fn test_into_species_valid() {
        let request = CreateSpeciesRequest {
            species_name: "Dromedary".to_string(),
            kingdom: Kingdom::Animal,
            phylum: Phylum::Chordata,
            quantity: 7,
        };

        let species = request.into_species().unwrap();
        assert_eq!(species.id(), None);
        assert_eq!(species.species_name().as_str(), "Dromedary");
        assert_eq!(species.quantity(), 7);
    }

    #[test]
    fn test_into_species_invalid_name() {
        let request = CreateSpeciesRequest {
            species_name: "x".repeat(51),
            kingdom: Kingdom::Animal,
            phylum: Phylum::Chordata,
            quantity: 7,
        };
        assert!(matches!(
            request.into_species(),
            Err(DomainError::InvalidSpeciesName(_))
        ));
    }

    #[test]
    fn test_into_species_invalid_quantity() {
        let request = CreateSpeciesRequest {
            species_name: "Dromedary".to_string(),
            kingdom: Kingdom::Animal,
            phylum: Phylum::Chordata,
            quantity: 0,
        };
        assert!(matches!(
            request.into_species(),
            Err(DomainError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_quantity_request_into_amount() {
        assert_eq!(QuantityRequest { quantity: 10 }.into_amount().unwrap().value(), 10);
        assert!(QuantityRequest { quantity: 11 }.into_amount().is_err());
        assert!(QuantityRequest { quantity: 0 }.into_amount().is_err());
    }
}
