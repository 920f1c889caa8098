//! emphub - 员工记录管理服务

use std::sync::Arc;

use emphub::application::EmployeeRepositoryPort;
use emphub::config::{load_config, print_config, AppConfig, StoreBackend};
use emphub::infrastructure::http::{AppState, HttpServer, ServerConfig};
use emphub::infrastructure::memory::InMemoryEmployeeRepository;
use emphub::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteEmployeeRepository,
};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},emphub={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 按配置创建 Record Store
async fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn EmployeeRepositoryPort>> {
    match config.database.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data is lost on restart");
            Ok(Arc::new(InMemoryEmployeeRepository::new()))
        }
        StoreBackend::Sqlite => {
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            Ok(Arc::new(SqliteEmployeeRepository::new(pool)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("emphub - employee registry service");
    print_config(&config);

    let employee_repo = build_store(&config).await?;
    let state = AppState::new(employee_repo);

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
