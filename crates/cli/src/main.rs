//! remessa — PDF package delivery gateway.

use std::sync::Arc;

use {
    clap::Parser,
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use {
    remessa_channels::PackageCatalog,
    remessa_config::Settings,
    remessa_delivery::{DeliveryPipeline, RecordResolver},
    remessa_files::HttpFileFetcher,
    remessa_gateway::{AppState, build_app},
    remessa_mailer::SmtpMailer,
    remessa_notion::NotionRecordSource,
    remessa_zapi::ZapiMessenger,
};

#[derive(Parser)]
#[command(name = "remessa", about = "Remessa — PDF package delivery gateway")]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // In development, pick up a local .env before reading settings.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(&cli);

    let settings = Settings::from_env()?;
    let state = wire_state(&settings);

    let addr = format!("{}:{}", cli.bind, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "remessa gateway listening");
    axum::serve(listener, build_app(state)).await?;
    Ok(())
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

/// Wire the live adapters into the shared app state.
fn wire_state(settings: &Settings) -> AppState {
    let catalog = Arc::new(PackageCatalog::builtin());
    let source = Arc::new(NotionRecordSource::new(
        settings.notion.token.clone(),
        settings.notion.database_id.clone(),
    ));
    let messaging = Arc::new(ZapiMessenger::new(
        settings.zapi.instance_id.clone(),
        settings.zapi.token.clone(),
        settings.zapi.security_token.clone(),
    ));
    let mailer = Arc::new(SmtpMailer::new(
        settings.smtp.server.clone(),
        settings.smtp.port,
        settings.smtp.user.clone(),
        settings.smtp.password.clone(),
    ));

    AppState::new(
        Arc::new(RecordResolver::new(source)),
        Arc::new(DeliveryPipeline::new(
            catalog,
            Arc::new(HttpFileFetcher::new()),
            messaging,
            mailer,
        )),
    )
}
