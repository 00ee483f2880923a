//! ifupdown2 interfaces generator (generate-interfaces)

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use ifgen_cli::Cli;
use ifgen_core::{Settings, UsageError};

fn print_usage() {
    eprintln!("{}", Cli::command().render_help());
}

async fn generate(cli: Cli) -> Result<()> {
    let config = cli.generator_config()?;

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(porttab) = cli.porttab {
        settings.porttab_path = porttab;
    }

    let mut stdout = std::io::stdout().lock();
    ifgen_cli::run(&config, &settings, &mut stdout).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let verbose = cli.verbose || cli.debug;

    match generate(cli).await {
        Ok(()) => {
            log::info!("Generation completed successfully");
            std::process::exit(0);
        }
        Err(e) => {
            match e.downcast_ref::<UsageError>() {
                Some(UsageError::NoModeSelected) => print_usage(),
                Some(usage) => {
                    eprintln!("error: {}", usage);
                    print_usage();
                }
                None => {
                    eprintln!("Error: {}", e);

                    // Print error chain if in verbose mode
                    if verbose {
                        for cause in e.chain().skip(1) {
                            eprintln!("  Caused by: {}", cause);
                        }
                    }
                }
            }
            std::process::exit(1);
        }
    }
}
