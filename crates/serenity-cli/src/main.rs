use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;

use commands::advice::{AdviceArgs, LookupKind};
use commands::prefs::PrefsAction;

#[derive(Parser)]
#[command(name = "serenity")]
#[command(about = "Serenity CLI - mental wellness chat companion", long_about = None)]
struct Cli {
    /// Directory holding config.toml, secret.json and preferences.toml
    #[arg(long, global = true)]
    config_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a short session: each text becomes a user turn with a reply
    SessionDemo {
        user_id: String,
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Print the assistant reply for a single message
    Respond {
        text: String,
        /// Ask the configured completion service, falling back to local rules
        #[arg(long)]
        remote: bool,
    },
    /// Advice for an issue within a religious tradition
    Advice {
        #[arg(long)]
        religion: String,
        #[arg(long)]
        issue: String,
    },
    /// Spiritual practices suited to the current mood
    Practices {
        #[arg(long)]
        religion: String,
        #[arg(long, default_value_t = serenity_core::mood::DEFAULT_MOOD)]
        mood: i32,
    },
    /// Quotes on a topic
    Quotes(AdviceArgs),
    /// Stories carrying a lesson
    Stories(AdviceArgs),
    /// Teachings on a concept
    Teachings(AdviceArgs),
    /// Community resources near a location
    Resources(AdviceArgs),
    /// Support groups for an issue
    Groups(AdviceArgs),
    /// Read or write stored preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = commands::load_config(cli.config_dir.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(&config.logging.level)?;
    if let Err(e) = &loaded {
        tracing::warn!("[serenity] Falling back to default configuration: {}", e);
    }

    match cli.command {
        Commands::SessionDemo { user_id, texts } => commands::session::demo(&user_id, &texts),
        Commands::Respond { text, remote } => {
            commands::session::respond(&text, remote, &config, cli.config_dir.as_deref()).await?
        }
        Commands::Advice { religion, issue } => commands::advice::advice(&religion, &issue),
        Commands::Practices { religion, mood } => commands::advice::practices(&religion, mood),
        Commands::Quotes(args) => commands::advice::lookup(LookupKind::Quotes, &args),
        Commands::Stories(args) => commands::advice::lookup(LookupKind::Stories, &args),
        Commands::Teachings(args) => commands::advice::lookup(LookupKind::Teachings, &args),
        Commands::Resources(args) => commands::advice::lookup(LookupKind::Resources, &args),
        Commands::Groups(args) => commands::advice::lookup(LookupKind::Groups, &args),
        Commands::Prefs { action } => commands::prefs::run(action, cli.config_dir.as_deref())?,
    }

    Ok(())
}
