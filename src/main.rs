use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vehicle_rental::config::{DatabaseConfig, EnvironmentConfig};
use vehicle_rental::database::{create_pool, mask_database_url};
use vehicle_rental::routes::create_router;
use vehicle_rental::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    info!("🚙 Vehicle Rental API");
    info!("====================");
    info!("🏷️ Entorno: {}", config.environment);
    if config.is_development() && config.cors_origins.is_empty() {
        info!("🛠️ Modo desarrollo: CORS abierto a cualquier origen");
    }

    let db_config = DatabaseConfig::from_env()?;

    // Inicializar base de datos
    let pool = match create_pool(&db_config).await {
        Ok(pool) => {
            info!("✅ Base de datos conectada: {}", mask_database_url(&db_config.url));
            pool
        }
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_router(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health");
    info!("👤 Customers:");
    info!("   GET|POST /customers   GET|PUT|DELETE /customers/:national_id");
    info!("🚗 Vehicles:");
    info!("   GET|POST /vehicles    GET|PUT|DELETE /vehicles/:id");
    info!("📝 Rentals:");
    info!("   GET|POST /rentals     GET /rentals/:id   PUT /rentals/:id/close");
    info!("🔧 Maintenance:");
    info!("   GET|POST /maintenance GET /maintenance/:id PUT /maintenance/:id/finish");
    info!("📊 Reports:");
    info!("   GET  /reports/active-rentals");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
