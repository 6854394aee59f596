use std::{env, path::Path};

use abi::Config;
use anyhow::Result;
use orentit_service::start_server;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const CONFIG_ENV: &str = "ORENTIT_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let filename = config_path();
    info!("Loading config from {}", filename);
    let config = Config::load(&filename)?;

    start_server(&config).await
}

/// `$ORENTIT_CONFIG`, then `./orentit.yml`, then `~/.config/orentit.yml`
fn config_path() -> String {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return shellexpand::tilde(&path).into_owned();
    }

    let local = "./orentit.yml";
    if Path::new(local).exists() {
        return local.to_string();
    }
    shellexpand::tilde("~/.config/orentit.yml").into_owned()
}
