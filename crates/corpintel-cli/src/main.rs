//! Corpintel CLI - Competitive intelligence from free-text prompts.

use clap::Parser;
use corpintel_cli::commands;
use corpintel_cli::{build_analyzer, init_tracing, Cli, Command, Config, Formatter};
use tracing::debug;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> corpintel_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // A local .env may carry OPENAI_API_KEY
    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    let path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let mut config = Config::load_from(&path)?;
    config.apply_env();
    debug!(
        path = %path.display(),
        credential = config.provider.has_credential(),
        "Loaded configuration"
    );

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    debug!(?format, color_enabled, "Output settings");

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Route(args) => commands::execute_route(args, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &path, &formatter)?,
        cmd => {
            // Commands that call the generation backend
            let analyzer = build_analyzer(&config)?;

            match cmd {
                Command::Analyze(args) => {
                    commands::execute_analyze(args, &analyzer, &formatter).await?;
                }
                Command::Companies(args) => {
                    commands::execute_companies(args, &analyzer, &formatter).await?;
                }
                Command::Competitors(args) => {
                    commands::execute_competitors(args, &analyzer, &formatter).await?;
                }
                Command::Subsidiaries(args) => {
                    commands::execute_subsidiaries(args, &analyzer, &formatter).await?;
                }
                Command::Route(_) | Command::Config(_) => unreachable!(),
            }
        }
    }

    Ok(())
}
