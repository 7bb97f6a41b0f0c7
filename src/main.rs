mod logging;
mod routing;
mod scan;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::util::SubscriberInitExt;
use ventas_core::config;
use ventas_intent::{
    normalize, IntentMatcher, MAX_LEVENSHTEIN_DISTANCE, MIN_WORD_LENGTH_FOR_FUZZY,
};

#[derive(Parser)]
#[command(
    name = "ventas",
    version,
    about = "Ventas — detect sales-update requests in dashboard chat"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml", env = "VENTAS_CONFIG")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print whether a message asks to update the sales data.
    Check {
        /// The chat message.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Show the normalized text and which rule decided.
    Explain {
        /// The chat message.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Route a chat log (JSON lines or plain text) and print one result per line.
    Scan {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Show configuration and dictionary sizes.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (subscriber, level) = logging::subscriber(
        tracing_subscriber::EnvFilter::try_from_default_env().ok(),
        std::io::stderr,
    );
    subscriber.init();

    let cfg = config::load(&cli.config)?;
    level.apply(&cfg.ventas.log_level)?;

    let matcher = IntentMatcher::with_extras(&cfg.intent);

    match cli.command {
        Commands::Check { message } => {
            let text = join_message(message, "check")?;
            println!("{}", matcher.matches(&text));
        }
        Commands::Explain { message } => {
            let text = join_message(message, "explain")?;
            let report = serde_json::json!({
                "normalized": normalize(&text),
                "detection": matcher.detect(&text),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Scan { file } => {
            let mut stdout = tokio::io::stdout();
            let summary = scan::scan_path(&matcher, file.as_deref(), &mut stdout).await?;
            eprintln!(
                "{} messages: {} imports, {} chats, {} unreadable",
                summary.total, summary.imports, summary.chats, summary.errors
            );
        }
        Commands::Status => {
            println!("Ventas — Status\n");
            println!("Config: {}", cli.config);
            println!("Name: {}", cfg.ventas.name);
            println!("Log level: {}", cfg.ventas.log_level);
            println!();
            println!("  intent phrases:   {}", matcher.phrases().len());
            println!("  negation phrases: {}", matcher.negations().len());
            println!("  short words:      {}", matcher.short_words().len());
            println!(
                "  fuzzy: distance <= {MAX_LEVENSHTEIN_DISTANCE}, words >= {MIN_WORD_LENGTH_FOR_FUZZY} chars"
            );
            if !cfg.intent.is_empty() {
                println!("  (includes config extras)");
            }
        }
    }

    Ok(())
}

/// Join trailing CLI words into one message.
fn join_message(words: Vec<String>, command: &str) -> anyhow::Result<String> {
    if words.is_empty() {
        anyhow::bail!("no message provided. Usage: ventas {command} <message>");
    }
    Ok(words.join(" "))
}
