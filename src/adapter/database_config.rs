use crate::adapter::app_config::{env_or, parse_env, ConfigError};
use std::env;

/// データベース接続設定を管理する構造体
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// 環境変数から設定を読み取る
    /// DATABASE_URLが設定されていれば個別の接続設定より優先する
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            host: env_or("DATABASE_HOST", "localhost"),
            port: parse_env("DATABASE_PORT", 3306)?,
            database: env_or("DATABASE_NAME", "zoo_db"),
            username: env_or("DATABASE_USER", "zoo_user"),
            password: env_or("DATABASE_PASSWORD", "zoo_password"),
            max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 10)?,
        })
    }

    /// MySQL接続文字列を生成
    pub fn connection_string(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "mysql://{}:{}@{}:{}/{}",
                self.username, self.password, self.host, self.port, self.database
            ),
        }
    }
}
