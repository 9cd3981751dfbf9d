use readygate_core::tracing::init_tracing;

use readygate_web::config::WebConfig;
use readygate_web::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = WebConfig::from_env()?;
    init_tracing(config.log_format);

    server::run(config).await
}
