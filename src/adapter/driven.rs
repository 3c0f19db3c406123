// 駆動される側アダプター（リポジトリ実装）

mod in_memory_species_repository;
mod mysql_species_repository;

pub use in_memory_species_repository::InMemorySpeciesRepository;
pub use mysql_species_repository::MySqlSpeciesRepository;
