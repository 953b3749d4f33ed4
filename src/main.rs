use clap::Parser;
use goldenrecord::api::HttpApi;
use goldenrecord::pipeline::{self, ReportOptions, ReviewOptions, UploadOptions};
use goldenrecord::{cli, config, error, logging};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load()?;
    if let Some(url) = &cli.base_url {
        config.base_url = config::normalize_base_url(url)?;
    }

    match cli.command {
        Commands::Upload { file, identifier, yes } => {
            println!("📤 GoldenRecord - ファイルアップロード\n");
            let api = HttpApi::new(&config)?;
            let options = UploadOptions { identifier, assume_yes: yes };
            pipeline::run_upload(&api, &file, &options).await?;
            println!("\n次へ: goldenrecord review");
        }

        Commands::Review { all, feedback_log } => {
            println!("🔍 GoldenRecord - 重複確認\n");
            let api = HttpApi::new(&config)?;
            let options = ReviewOptions { all, feedback_log };
            pipeline::run_review(&api, &options).await?;
            println!("\n次へ: goldenrecord report");
        }

        Commands::Report { output, no_download } => {
            println!("📊 GoldenRecord - レポート\n");
            let api = HttpApi::new(&config)?;
            let options = ReportOptions {
                output_dir: output.unwrap_or_else(|| config.output_dir.clone()),
                download: !no_download,
            };
            pipeline::run_report(&api, &options).await?;
        }

        Commands::Run { file, identifier, yes, all, feedback_log, output } => {
            println!("🚀 GoldenRecord - 一括処理\n");
            let api = HttpApi::new(&config)?;
            pipeline::run_pipeline(
                &api,
                &file,
                &UploadOptions { identifier, assume_yes: yes },
                &ReviewOptions { all, feedback_log },
                &ReportOptions {
                    output_dir: output.unwrap_or_else(|| config.output_dir.clone()),
                    download: true,
                },
            )
            .await?;
        }

        Commands::Config { set_base_url, show } => {
            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ バックエンドURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  バックエンドURL: {}", config.base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  出力先: {}", config.output_dir.display());
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
