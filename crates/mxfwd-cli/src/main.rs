//! mxfwd - MXRoute forwarder management CLI.

/// Application configuration stores (TOML).
mod config;
/// Options string generation.
mod options;
/// Terminal UI components.
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{ApiTokenConfig, OptionsStore, resolve_options_path, resolve_token_path};
use crate::options::generate_options_string;
use crate::tui::forwarder_viewer::{ForwarderRow, run_forwarder_viewer};
use crate::tui::options_form::run_options_form;
use mxfwd_api::forwarders::{ForwarderClient, LocalForwarderApi};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override the config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List forwarders for a domain.
    List(DomainArgs),
    /// Browse forwarders and delete marked ones via TUI.
    Manage(DomainArgs),
    /// Delete a single forwarder.
    Delete(DeleteArgs),
    /// Manage the alias-generation options record.
    Options(OptionsCommand),
    /// Manage the proxy API token.
    Token(TokenCommand),
}

/// Arguments for domain-scoped subcommands.
#[derive(clap::Args)]
struct DomainArgs {
    /// Domain to query (e.g. "example.com").
    #[arg(long, required = true)]
    domain: String,
}

/// Arguments for the `delete` subcommand.
#[derive(clap::Args)]
struct DeleteArgs {
    /// Full forwarder address to delete (e.g. "alias@example.com").
    #[arg(long, required = true)]
    email: String,

    /// Confirm the deletion. Without this flag nothing is deleted.
    #[arg(long)]
    yes: bool,
}

/// Arguments for the `options` subcommand.
#[derive(clap::Args)]
struct OptionsCommand {
    /// Options subcommand to run.
    #[command(subcommand)]
    command: OptionsSubcommands,
}

/// Available options subcommands.
#[derive(Subcommand)]
enum OptionsSubcommands {
    /// Edit the options record interactively via TUI.
    Edit,
    /// Print the generated options string.
    Show(OptionsShowArgs),
    /// Set options record fields non-interactively.
    Set(OptionsSetArgs),
}

/// Arguments for the `options show` subcommand.
#[derive(clap::Args)]
struct OptionsShowArgs {
    /// Also copy the generated string to the system clipboard.
    #[arg(long)]
    copy: bool,
}

/// Arguments for the `options set` subcommand.
///
/// Only the provided fields are changed; everything else keeps its
/// stored value.
#[derive(clap::Args)]
struct OptionsSetArgs {
    /// Domain the aliases are created under.
    #[arg(long)]
    domain: Option<String>,

    /// Destination address the aliases forward to.
    #[arg(long)]
    destination: Option<String>,

    /// Alias template (placeholders: "<slug>", "<hex>").
    #[arg(long)]
    template: Option<String>,

    /// Literal text prepended to the alias.
    #[arg(long)]
    prefix: Option<String>,

    /// Literal text appended to the alias.
    #[arg(long)]
    suffix: Option<String>,

    /// Number of slug words (kept as text, not validated).
    #[arg(long)]
    slug_length: Option<String>,

    /// Number of hex characters (kept as text, not validated).
    #[arg(long)]
    hex_length: Option<String>,

    /// Separator between alias components.
    #[arg(long)]
    alias_separator: Option<String>,

    /// Separator within the slug.
    #[arg(long)]
    slug_separator: Option<String>,
}

/// Arguments for the `token` subcommand.
#[derive(clap::Args)]
struct TokenCommand {
    /// Token subcommand to run.
    #[command(subcommand)]
    command: TokenSubcommands,
}

/// Available token subcommands.
#[derive(Subcommand)]
enum TokenSubcommands {
    /// Store the proxy API token.
    Set(TokenSetArgs),
    /// Show the stored token in masked form.
    Show,
}

/// Arguments for the `token set` subcommand.
#[derive(clap::Args)]
struct TokenSetArgs {
    /// Bearer token value.
    #[arg(long, required = true)]
    token: String,
}

/// Builds a `ForwarderClient` from the environment and the stored token.
///
/// `MXROUTE_SERVER_URL` must point at the proxy deployment. The bearer
/// token comes from `MXROUTE_API_TOKEN` when set, otherwise from the
/// stored token file.
///
/// # Errors
///
/// Returns an error if the server URL is missing or invalid, no token
/// is available, or the client fails to build.
#[instrument(skip_all)]
fn build_client(dir: Option<&PathBuf>) -> Result<ForwarderClient> {
    let server_url = std::env::var("MXROUTE_SERVER_URL")
        .context("MXROUTE_SERVER_URL environment variable is required")?;

    let api_token = if let Ok(token) = std::env::var("MXROUTE_API_TOKEN") {
        token
    } else {
        let token_path = resolve_token_path(dir).context("failed to resolve token path")?;
        ApiTokenConfig::load(&token_path)?.token
    };

    ForwarderClient::builder()
        .base_url(server_url.parse().context("invalid MXROUTE_SERVER_URL")?)
        .api_token(api_token)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build forwarder API client")
}

/// Runs the `list` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_list(args: &DomainArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_client(dir)?;

    let forwarders = client
        .list_forwarders(&args.domain)
        .await
        .context("failed to fetch forwarders")?;

    if forwarders.is_empty() {
        tracing::info!("No forwarders found for {}", args.domain);
        return Ok(());
    }

    tracing::info!("Email\t\t\t\tDestinations");
    for fwd in &forwarders {
        tracing::info!("{}\t{}", fwd.email, fwd.destinations.join(", "));
    }
    tracing::info!("Total: {} forwarders", forwarders.len());

    Ok(())
}

/// Runs the `manage` subcommand.
///
/// Fetches forwarders, launches the viewer TUI, and deletes every
/// forwarder the user marked. Per-item failures are logged and the
/// remaining deletions continue.
///
/// # Errors
///
/// Returns an error if the client fails to build, the list request
/// fails, or the TUI fails.
#[instrument(skip_all)]
async fn run_manage(args: &DomainArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_client(dir)?;

    let forwarders = client
        .list_forwarders(&args.domain)
        .await
        .context("failed to fetch forwarders")?;

    if forwarders.is_empty() {
        tracing::info!("No forwarders found for {}", args.domain);
        return Ok(());
    }

    let rows: Vec<ForwarderRow> = forwarders
        .iter()
        .map(|f| ForwarderRow {
            email: f.email.clone(),
            destinations: f.destinations.clone(),
        })
        .collect();

    tracing::info!("Loaded {} forwarders. Launching TUI...", rows.len());

    // Run TUI (blocking); deletions happen after the terminal is restored
    let result = run_forwarder_viewer(args.domain.clone(), rows)
        .context("forwarder viewer TUI failed")?;

    let Some(marked) = result else {
        tracing::info!("Cancelled, nothing deleted");
        return Ok(());
    };

    if marked.is_empty() {
        tracing::info!("No forwarders marked for deletion");
        return Ok(());
    }

    let mut deleted = 0usize;
    for email in &marked {
        match client.delete_forwarder(email).await {
            Ok(()) => {
                deleted = deleted.saturating_add(1);
                tracing::info!("Deleted {email}");
            }
            Err(err) => tracing::error!("Failed to delete {email}: {err:#}"),
        }
    }
    tracing::info!("Deleted {deleted} of {} marked forwarders", marked.len());

    Ok(())
}

/// Runs the `delete` subcommand.
///
/// # Errors
///
/// Returns an error if `--yes` is missing, the client fails to build,
/// or the API request fails.
#[instrument(skip_all)]
async fn run_delete(args: &DeleteArgs, dir: Option<&PathBuf>) -> Result<()> {
    ensure!(
        args.yes,
        "refusing to delete {} without --yes",
        args.email
    );

    let client = build_client(dir)?;

    client
        .delete_forwarder(&args.email)
        .await
        .with_context(|| format!("failed to delete {}", args.email))?;

    tracing::info!("Deleted {}", args.email);

    Ok(())
}

/// Runs the `options edit` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or the TUI fails.
#[instrument(skip_all)]
fn run_options_edit(dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_options_path(dir).context("failed to resolve options path")?;
    let store = OptionsStore::new(path);

    let config = run_options_form(&store).context("options form TUI failed")?;

    tracing::info!("Options saved to {}", store.path().display());
    let generated = generate_options_string(&config);
    if generated.is_empty() {
        tracing::info!("Options string is empty (all fields at their defaults)");
    } else {
        tracing::info!("{generated}");
    }

    Ok(())
}

/// Runs the `options show` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved.
#[instrument(skip_all)]
fn run_options_show(args: &OptionsShowArgs, dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_options_path(dir).context("failed to resolve options path")?;
    let store = OptionsStore::new(path);

    let generated = generate_options_string(&store.load());
    if generated.is_empty() {
        tracing::info!("Options string is empty (all fields at their defaults)");
    } else {
        tracing::info!("{generated}");
    }

    if args.copy {
        copy_to_clipboard(generated);
    }

    Ok(())
}

/// Runs the `options set` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or the save fails.
#[instrument(skip_all)]
fn run_options_set(args: &OptionsSetArgs, dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_options_path(dir).context("failed to resolve options path")?;
    let store = OptionsStore::new(path);

    let mut config = store.load();
    if let Some(value) = args.domain.clone() {
        config.domain = value;
    }
    if let Some(value) = args.destination.clone() {
        config.destination = value;
    }
    if let Some(value) = args.template.clone() {
        config.template = value;
    }
    if let Some(value) = args.prefix.clone() {
        config.prefix = value;
    }
    if let Some(value) = args.suffix.clone() {
        config.suffix = value;
    }
    if let Some(value) = args.slug_length.clone() {
        config.slug_length = value;
    }
    if let Some(value) = args.hex_length.clone() {
        config.hex_length = value;
    }
    if let Some(value) = args.alias_separator.clone() {
        config.alias_separator = value;
    }
    if let Some(value) = args.slug_separator.clone() {
        config.slug_separator = value;
    }

    store.save(&config).context("failed to save options")?;

    tracing::info!("Options saved to {}", store.path().display());
    let generated = generate_options_string(&config);
    if !generated.is_empty() {
        tracing::info!("{generated}");
    }

    Ok(())
}

/// Runs the `token set` subcommand.
///
/// # Errors
///
/// Returns an error if the token path cannot be resolved or the save fails.
#[instrument(skip_all)]
fn run_token_set(args: &TokenSetArgs, dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_token_path(dir).context("failed to resolve token path")?;

    let config = ApiTokenConfig {
        token: args.token.clone(),
    };
    config.save(&path).context("failed to save token")?;

    tracing::info!("Token saved to {}", path.display());

    Ok(())
}

/// Runs the `token show` subcommand.
///
/// # Errors
///
/// Returns an error if no token is stored.
#[instrument(skip_all)]
fn run_token_show(dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_token_path(dir).context("failed to resolve token path")?;
    let config = ApiTokenConfig::load(&path)?;

    tracing::info!("Token: {}", config.masked());

    Ok(())
}

/// Copies text to the system clipboard. Failure is logged, not fatal.
fn copy_to_clipboard(text: String) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => tracing::info!("Copied to clipboard"),
        Err(err) => tracing::warn!("clipboard copy failed: {err}"),
    }
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List(args) => run_list(&args, cli.dir.as_ref()).await,
        Commands::Manage(args) => run_manage(&args, cli.dir.as_ref()).await,
        Commands::Delete(args) => run_delete(&args, cli.dir.as_ref()).await,
        Commands::Options(options) => match options.command {
            OptionsSubcommands::Edit => run_options_edit(cli.dir.as_ref()),
            OptionsSubcommands::Show(args) => run_options_show(&args, cli.dir.as_ref()),
            OptionsSubcommands::Set(args) => run_options_set(&args, cli.dir.as_ref()),
        },
        Commands::Token(token) => match token.command {
            TokenSubcommands::Set(args) => run_token_set(&args, cli.dir.as_ref()),
            TokenSubcommands::Show => run_token_show(cli.dir.as_ref()),
        },
    }
}
