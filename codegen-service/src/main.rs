use codegen_service::config::CodegenConfig;
use codegen_service::startup::Application;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT")
        .ok()
        .filter(|v| !v.is_empty());
    init_tracing("codegen-service", "info", otlp_endpoint.as_deref())?;

    init_metrics().map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))?;

    let config = CodegenConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    app.run_until_stopped().await?;

    tracing::info!("Codegen service stopped");
    Ok(())
}
