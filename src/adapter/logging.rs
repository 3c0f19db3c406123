use crate::adapter::app_config::LogFormat;
use tracing_subscriber::EnvFilter;

/// トレーシング（構造化ログ）を初期化する
///
/// 出力レベルは`RUST_LOG`で制御し、未設定の場合は`info`とする。
/// 二回目以降の呼び出しは何もしない。
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing(LogFormat::Json);
        init_tracing(LogFormat::Pretty);
        tracing::info!("tracing initialized twice without panicking");
    }
}
