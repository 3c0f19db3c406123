// ドメインモデル（エンティティと値オブジェクト）

mod species;
mod value_objects;

pub use value_objects::{
    AdjustmentAmount, Kingdom, Phylum, SpeciesId, SpeciesName, MAX_QUANTITY,
    MAX_SPECIES_NAME_LENGTH, MIN_QUANTITY,
};

pub use species::Species;
