use clap::Parser;
use photo_classify::{cli, client, config, error, image_file, session, surface};
use cli::{Cli, Commands};
use client::HttpPredictionClient;
use config::Config;
use error::Result;
use image_file::LocalImage;
use photo_classify_common::{run_prediction, FileSource, UploadController};
use std::cell::RefCell;
use surface::TerminalSurface;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Predict { image, endpoint, json } => {
            let client = HttpPredictionClient::from_config(&config, endpoint.as_deref())?;
            let file = LocalImage::open_image(&image)?;

            if !json {
                println!("🔍 photo-classify - 推論 ({})\n", client.endpoint());
            }

            let controller = RefCell::new(
                UploadController::new(TerminalSurface::new(json)).with_policy(config.response_policy),
            );
            controller.borrow_mut().select_file(file, FileSource::Picker);
            run_prediction(&controller, &client).await;
        }

        Commands::Session { endpoint } => {
            let client = HttpPredictionClient::from_config(&config, endpoint.as_deref())?;
            println!("🔁 photo-classify - 対話モード ({})\n", client.endpoint());

            let controller = RefCell::new(
                UploadController::new(TerminalSurface::new(false)).with_policy(config.response_policy),
            );
            session::run_session(&controller, &client).await?;
        }

        Commands::Config { set_endpoint, set_policy, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(policy) = set_policy {
                config.set_response_policy(policy.into())?;
                println!("✔ 応答ポリシーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint);
                println!("  フィールド名: {}", config.field_name);
                println!(
                    "  タイムアウト: {}",
                    config
                        .timeout_seconds
                        .map(|s| format!("{}秒", s))
                        .unwrap_or_else(|| "なし".into())
                );
                println!("  応答ポリシー: {:?}", config.response_policy);
                if let Ok(endpoint) = std::env::var(config::ENDPOINT_ENV) {
                    println!("  ({} = {})", config::ENDPOINT_ENV, endpoint);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
