use crate::adapter::database_error::DatabaseError;
use sqlx::{MySql, Pool};

/// 起動時に適用するマイグレーション（ファイル名, SQL）
/// 種名の一意性・大文字小文字の区別はテーブル定義（utf8mb4_bin）で保証する
const MIGRATIONS: &[(&str, &str)] = &[(
    "001_create_species_table",
    include_str!("../../migrations/001_create_species_table.sql"),
)];

/// データベースマイグレーションを管理する構造体
pub struct DatabaseMigration {
    pool: Pool<MySql>,
}

impl DatabaseMigration {
    /// 新しいDatabaseMigrationインスタンスを作成
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    /// マイグレーションを実行
    /// べき等性を保証（CREATE TABLE IF NOT EXISTS）
    pub async fn run(&self) -> Result<(), DatabaseError> {
        for &(name, migration_sql) in MIGRATIONS {
            tracing::info!(migration = name, "running migration");
            sqlx::query(migration_sql)
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::MigrationError(format!("Migration {} failed: {}", name, e)))?;
        }

        tracing::info!(count = MIGRATIONS.len(), "all migrations completed");
        Ok(())
    }
}
