use clap::Parser;
use profilecard::card::FontCache;
use profilecard::config::setup_logging;
use profilecard::fetch::Fetcher;
use profilecard::provider::ProviderRegistry;
use profilecard::web::AppState;
use tracing::{error, info};

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let cli = profilecard::cli::CliOptions::parse();

    if setup_logging(cli.debug).is_err() {
        return;
    }

    let fetcher = match Fetcher::new(cli.upstream_timeout()) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            error!("Failed to build HTTP client: {}", err);
            return;
        }
    };

    let providers =
        ProviderRegistry::standard(cli.github_api_url.clone(), cli.instagram_url.clone());
    let fonts = FontCache::new(&cli.font_dir);
    info!("Reading label fonts from {}", fonts.dir().display());

    let state = AppState::new(providers, fetcher, fonts, cli.seed);
    if let Err(err) = profilecard::web::setup_server(&cli.listen_address, cli.port, state).await {
        error!("Application error: {}", err);
    }
}
