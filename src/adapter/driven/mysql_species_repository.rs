use crate::adapter::database_error::DatabaseError;
use crate::domain::model::{Kingdom, Phylum, Species, SpeciesId, SpeciesName};
use crate::domain::port::{RepositoryError, SpeciesRepository};
use async_trait::async_trait;

// MySQL関連のインポート
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Pool, Row};

const SELECT_COLUMNS: &str = "SELECT id, species_name, kingdom, phylum, quantity FROM species";

/// MySQL種リポジトリ
/// MySQLデータベースを使用して種を永続化する
#[derive(Clone)]
pub struct MySqlSpeciesRepository {
    pool: Pool<MySql>,
}

impl MySqlSpeciesRepository {
    /// 新しいMySQL種リポジトリを作成
    ///
    /// # Arguments
    /// * `pool` - MySQLコネクションプール
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

/// データベースの行から種を再構築する
fn species_from_row(row: &MySqlRow) -> Result<Species, RepositoryError> {
    let fetch_failed =
        |column: &str, e: sqlx::Error| RepositoryError::FetchFailed(format!("{}の読み取りに失敗しました: {}", column, e));

    let id: i64 = row.try_get("id").map_err(|e| fetch_failed("id", e))?;
    let species_name: String = row
        .try_get("species_name")
        .map_err(|e| fetch_failed("species_name", e))?;
    let kingdom: String = row.try_get("kingdom").map_err(|e| fetch_failed("kingdom", e))?;
    let phylum: String = row.try_get("phylum").map_err(|e| fetch_failed("phylum", e))?;
    let quantity: u32 = row
        .try_get("quantity")
        .map_err(|e| fetch_failed("quantity", e))?;

    let species_name = SpeciesName::new(species_name)
        .map_err(|e| RepositoryError::FetchFailed(format!("種名の解析に失敗しました: {}", e)))?;
    let kingdom = kingdom
        .parse::<Kingdom>()
        .map_err(|e| RepositoryError::FetchFailed(format!("界の解析に失敗しました: {}", e)))?;
    let phylum = phylum
        .parse::<Phylum>()
        .map_err(|e| RepositoryError::FetchFailed(format!("門の解析に失敗しました: {}", e)))?;

    Ok(Species::reconstruct(
        SpeciesId::new(id),
        species_name,
        kingdom,
        phylum,
        quantity,
    ))
}

#[async_trait]
impl SpeciesRepository for MySqlSpeciesRepository {
    async fn find_by_id(&self, id: SpeciesId) -> Result<Option<Species>, RepositoryError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::from_sqlx("種の取得に失敗しました", e))?;

        row.as_ref().map(species_from_row).transpose()
    }

    async fn find_by_name(&self, species_name: &str) -> Result<Option<Species>, RepositoryError> {
        // utf8mb4_binの照合順序により大文字小文字を区別して比較される
        let row = sqlx::query(&format!("{} WHERE species_name = ?", SELECT_COLUMNS))
            .bind(species_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::from_sqlx("種の取得に失敗しました", e))?;

        row.as_ref().map(species_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Species>, RepositoryError> {
        let rows = sqlx::query(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DatabaseError::from_sqlx("種一覧の取得に失敗しました", e))?;

        rows.iter().map(species_from_row).collect()
    }

    async fn save(&self, species: &Species) -> Result<Species, RepositoryError> {
        let id = match species.id() {
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE species
                    SET species_name = ?, kingdom = ?, phylum = ?, quantity = ?
                    WHERE id = ?
                    "#,
                )
                .bind(species.species_name().as_str())
                .bind(species.kingdom().as_str())
                .bind(species.phylum().as_str())
                .bind(species.quantity())
                .bind(id.value())
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::from_sqlx("種の更新に失敗しました", e))?;
                id
            }
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO species (species_name, kingdom, phylum, quantity)
                    VALUES (?, ?, ?, ?)
                    "#,
                )
                .bind(species.species_name().as_str())
                .bind(species.kingdom().as_str())
                .bind(species.phylum().as_str())
                .bind(species.quantity())
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::from_sqlx("種の登録に失敗しました", e))?;

                let raw_id = i64::try_from(result.last_insert_id()).map_err(|e| {
                    RepositoryError::OperationFailed(format!("採番されたIDが範囲外です: {}", e))
                })?;
                SpeciesId::new(raw_id)
            }
        };

        Ok(Species::reconstruct(
            id,
            species.species_name().clone(),
            species.kingdom(),
            species.phylum(),
            species.quantity(),
        ))
    }

    async fn delete_by_id(&self, id: SpeciesId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM species WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from_sqlx("種の削除に失敗しました", e))?;
        Ok(())
    }
}
