use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("pset error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Init(args) = &cli.command {
        return commands::init::handle(args, &flags).await;
    }

    let project_root = bootstrap::resolve_project_root(flags.project.as_deref());

    // Payload-only import commands work outside a project.
    if let cli::Commands::Import { action } = &cli.command {
        let config = bootstrap::load_config(project_root.as_deref().ok())?;
        if let Some(result) = commands::import::handle_offline(action, &config, &flags) {
            return result;
        }
    }

    let project_root = project_root?;
    let config = bootstrap::load_config(Some(&project_root))?;
    context::warn_unconfigured(&config);

    if let cli::Commands::Auth { action } = &cli.command {
        let auth = context::local_auth(&project_root, &config);
        return commands::auth::handle(action, &flags, &auth);
    }

    let ctx = context::AppContext::init(project_root, config)
        .await
        .context("failed to initialize pset application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PSET_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
