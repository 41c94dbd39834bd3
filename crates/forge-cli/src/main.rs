//! CLI entry point for apiforge.
//!
//! This binary provides the command-line interface for generating API
//! tests from OpenAPI specifications through the apiforge service.
//!
//! # Usage
//!
//! ```bash
//! apiforge [OPTIONS] <COMMAND>
//!
//! # Interactive TUI
//! apiforge run
//!
//! # One-shot generation to stdout
//! apiforge generate --input petstore.yaml --language go
//!
//! # One-shot generation written as JSON
//! apiforge generate --input petstore.yaml --output result.json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use forge_client::{Client, GenerateRequest};
use forge_core::{Config, Document, GenerationOptions, GenerationResult, TargetLanguage, Tier};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Generate API tests from OpenAPI specifications.
///
/// Talks to the apiforge generation service: submit a specification
/// document, receive a test plan plus generated test code.
#[derive(Parser)]
#[command(name = "apiforge", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the generation service.
    #[arg(
        long,
        global = true,
        env = "APIFORGE_SERVICE_URL",
        default_value = forge_core::DEFAULT_SERVICE_URL
    )]
    service_url: String,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Start the interactive TUI.
    Run,

    /// Generate tests for a specification in one shot.
    Generate {
        /// Path to the OpenAPI specification (.json/.yaml/.yml).
        #[arg(short, long)]
        input: Utf8PathBuf,

        /// Target language for generated code.
        #[arg(short, long, value_enum, default_value_t = LanguageArg::Curl)]
        language: LanguageArg,

        /// Processing mode.
        #[arg(short, long, value_enum, default_value_t = TierArg::Deep)]
        tier: TierArg,

        /// Include boundary test cases.
        #[arg(long)]
        boundary: bool,

        /// Skip negative test cases.
        #[arg(long)]
        no_negative: bool,

        /// Write the full result as JSON to a file (defaults to a
        /// human-readable summary on stdout).
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },
}

/// Target language argument.
#[derive(Clone, Copy, ValueEnum)]
enum LanguageArg {
    /// cURL shell snippets.
    Curl,
    /// Go test code.
    Go,
    /// Java test code.
    Java,
}

impl From<LanguageArg> for TargetLanguage {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Curl => Self::Curl,
            LanguageArg::Go => Self::Go,
            LanguageArg::Java => Self::Java,
        }
    }
}

/// Processing mode argument.
#[derive(Clone, Copy, ValueEnum)]
enum TierArg {
    /// Full reasoning, slower.
    Deep,
    /// Structured output, faster.
    Fast,
}

impl From<TierArg> for Tier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Deep => Self::High,
            TierArg::Fast => Self::Low,
        }
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
/// Noisy crates like `hyper` and `mio` are filtered to `warn` level.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging
/// * `no_color` - Disable ANSI colors in output
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("{level},hyper=warn,mio=warn,reqwest=warn"))
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

/// Builds a [`Config`] from CLI arguments.
fn build_config(cli: &Cli) -> Config {
    let mut config = Config::default();
    config.service.base_url = cli.service_url.clone();
    config
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the interactive TUI.
///
/// # Errors
///
/// Returns an error if the TUI fails.
async fn run_tui(config: Config) -> color_eyre::Result<()> {
    info!(service_url = %config.service.base_url, "Starting TUI");

    // Handle SIGTERM for graceful shutdown on Unix
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = forge_tui::run(config) => {
                result.map_err(|e| color_eyre::eyre::eyre!("TUI error: {}", e))?;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        forge_tui::run(config)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("TUI error: {}", e))?;
    }

    Ok(())
}

/// Generation inputs for the one-shot command.
struct GenerateArgs {
    input: Utf8PathBuf,
    language: TargetLanguage,
    tier: Tier,
    boundary: bool,
    no_negative: bool,
    output: Option<Utf8PathBuf>,
}

/// Runs a one-shot generation.
///
/// Persisted connection settings are fetched first (best effort) so a
/// model configured through the TUI also applies here; the CLI flags
/// override language and tier.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or the service
/// reports a failure.
async fn run_generate(config: Config, args: GenerateArgs) -> color_eyre::Result<()> {
    Document::check_path(&args.input)?;
    let content = std::fs::read_to_string(args.input.as_std_path())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read {}: {}", args.input, e))?;
    let document = Document::new(content, Document::display_name(&args.input));

    if !document.has_content() {
        return Err(color_eyre::eyre::eyre!("{} is empty", args.input));
    }

    let client = Client::new(&config.service);

    let mut options = GenerationOptions::default();
    match client.fetch_settings().await {
        Ok(settings) => {
            if let Some(base_url) = settings.base_url {
                options.connection.base_url = base_url;
            }
            if let Some(api_key) = settings.api_key {
                options.connection.api_key = api_key;
            }
            if let Some(model_name) = settings.model_name {
                options.connection.model_name = model_name;
            }
        }
        Err(e) => warn!(error = %e, "Settings fetch failed, using defaults"),
    }
    options.target_language = args.language;
    options.tier = args.tier;
    options.include_boundary = args.boundary;
    options.include_negative = !args.no_negative;

    info!(
        document = %document.name,
        language = %options.target_language.as_str(),
        "Submitting generation request"
    );

    let request = GenerateRequest::new(&document, &options);
    let result = client.generate(&request).await?;

    if let Some(output_path) = args.output {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(output_path.as_std_path(), json)?;
        info!(path = %output_path, "Result written");
    } else {
        print_result(&result)?;
    }

    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Prints a human-readable result summary with the generated code.
fn print_result(result: &GenerationResult) -> color_eyre::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle)?;
    writeln!(handle, "Test Plan ({} cases)", result.test_plan.len())?;
    writeln!(handle, "====================")?;
    for case in &result.test_plan {
        writeln!(
            handle,
            "  [{}] {} {} - {}",
            case.kind.label(),
            case.method,
            case.endpoint,
            case.name
        )?;
    }

    for case in &result.test_plan {
        let Some(code) = result.generated_code.get(&case.id) else {
            continue;
        };
        writeln!(handle)?;
        writeln!(handle, "--- {} ---", case.name)?;
        writeln!(handle, "{code}")?;
    }

    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to appropriate command
    let config = build_config(&cli);
    match cli.command {
        Commands::Run => run_tui(config).await,
        Commands::Generate {
            input,
            language,
            tier,
            boundary,
            no_negative,
            output,
        } => {
            run_generate(
                config,
                GenerateArgs {
                    input,
                    language: language.into(),
                    tier: tier.into(),
                    boundary,
                    no_negative,
                    output,
                },
            )
            .await
        }
    }
}
