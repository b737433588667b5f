use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::io::Read;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use crm_backend::config::AppConfig;
use crm_backend::database::create_pool;
use crm_backend::function::{self, FunctionEvent};
use crm_backend::state::AppState;
use crm_backend::{create_app, RESOURCE_PATHS};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = AppConfig::from_env().context("configuración inválida")?;

    // Configurar logging (a stderr: stdout queda libre para el modo invoke)
    tracing_subscriber::fmt()
        .with_max_level(config.server.log_level)
        .with_writer(std::io::stderr)
        .init();

    let pool = create_pool(&config.database).context("no se pudo preparar el pool de la base de datos")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("serve") => serve(pool, config).await,
        Some("invoke") => invoke(pool, args.get(1).map(String::as_str)).await,
        Some(other) => bail!("comando desconocido '{}': usa 'serve' o 'invoke <recurso>'", other),
    }
}

/// Servidor HTTP con todos los recursos
async fn serve(pool: sqlx::PgPool, config: AppConfig) -> Result<()> {
    info!("🚗 CRM Backend - clientes, empleados y vehículos");
    info!("================================================");

    let addr: SocketAddr = config
        .server
        .server_url()
        .parse()
        .with_context(|| format!("dirección inválida {}", config.server.server_url()))?;

    if config.server.is_production() {
        info!("🌍 Entorno: production");
    } else {
        warn!("🧪 Entorno: {} (no es production)", config.server.environment);
    }

    let app = create_app(AppState::new(pool));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    for path in RESOURCE_PATHS {
        info!("   GET|POST|PUT|DELETE|OPTIONS {}", path);
    }

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

/// Una invocación de función: evento JSON por stdin, respuesta JSON por stdout
async fn invoke(pool: sqlx::PgPool, resource: Option<&str>) -> Result<()> {
    let Some(resource) = resource else {
        bail!("falta el recurso: invoke <clients|employees|vehicles>");
    };
    let path = format!("/{}", resource.trim_start_matches('/'));
    if !RESOURCE_PATHS.contains(&path.as_str()) {
        bail!("recurso desconocido '{}'", resource);
    }

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("no se pudo leer el evento de stdin")?;
    let event: FunctionEvent = if raw.trim().is_empty() {
        FunctionEvent::default()
    } else {
        serde_json::from_str(&raw).context("evento JSON inválido")?
    };

    let app = create_app(AppState::new(pool));
    let response = function::invoke(app, &path, event).await;

    println!("{}", serde_json::to_string(&response)?);
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
            Ok(mut stream) => {
                stream.recv().await;
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
