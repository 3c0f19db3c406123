use zoo_species_inventory::adapter::driven::{InMemorySpeciesRepository, MySqlSpeciesRepository};
use zoo_species_inventory::adapter::driver::rest_api::{app, AppState};
use zoo_species_inventory::adapter::logging::init_tracing;
use zoo_species_inventory::adapter::{AppConfig, DatabaseMigration, StorageBackend};
use zoo_species_inventory::domain::port::SpeciesRepository;

use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .envファイルから環境変数を読み込む
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    tracing::info!(
        storage_backend = ?config.storage_backend,
        "starting zoo species inventory service"
    );

    // ストレージを選択
    let species_repository: Arc<dyn SpeciesRepository> = match config.storage_backend {
        StorageBackend::Memory => Arc::new(InMemorySpeciesRepository::new()),
        StorageBackend::MySql => {
            tracing::info!(
                host = %config.database.host,
                port = config.database.port,
                "connecting to database"
            );

            // 接続プールを作成
            let pool = MySqlPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(&config.database.connection_string())
                .await?;

            // マイグレーションを実行
            DatabaseMigration::new(pool.clone()).run().await?;

            Arc::new(MySqlSpeciesRepository::new(pool))
        }
    };

    let app = app(AppState::new(species_repository));

    // サーバーを起動
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "REST API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

// Ctrl+Cで受付を止め、処理中のリクエストを完了させてから終了する
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
