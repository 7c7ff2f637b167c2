use std::io;

use app::App;
use clap::{Parser, Subcommand};
use config::{Config, SourceKind};
use dictionary::Dictionary;
use picker::Picker;
use presenter::Presenter;
use storage::Storage;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use words::{WordList, WordSource};

mod app;
mod config;
mod error;
mod picker;
mod presenter;
mod storage;
mod utilities;
mod words;

#[derive(Debug, Parser)]
#[command(name = "vocabulary", version, about = "get a word today")]
struct Cli {
    /// Where today's word is drawn from, overrides VOCABULARY_WORD_SOURCE
    #[arg(long, value_enum, global = true)]
    source: Option<SourceKind>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// add a word to the list
    #[command(visible_alias = "a")]
    Add { word: String },
    /// translate a word
    #[command(visible_alias = "t")]
    Translate { word: String },
    /// list the words that were added
    #[command(visible_alias = "l")]
    List,
}

fn needs_storage(command: Option<&Command>, source: SourceKind) -> bool {
    match command {
        Some(Command::Add { .. }) | Some(Command::List) => true,
        Some(Command::Translate { .. }) => false,
        None => source.needs_storage(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vocabulary=warn,dictionary=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    run(cli).await.map_err(|error| {
        error!(kind = ?error.kind(), %error, "command failed");
        anyhow::Error::from(error)
    })
}

async fn run(cli: Cli) -> error::Result<()> {
    let mut config = config::load_config()?;
    if let Some(source) = cli.source {
        config.source = source;
    }

    let app = build_app(&config, cli.command.as_ref()).await?;
    let mut out = io::stdout().lock();
    let result = match &cli.command {
        None => app.today(&mut Picker::from_clock(), &mut out).await,
        Some(Command::Translate { word }) => app.translate(word, &mut out).await,
        Some(Command::Add { word }) => app.add(word).await.map(|stored| {
            info!(id = %stored.id, "word added");
        }),
        Some(Command::List) => app.list(&mut out).await,
    };
    app.shutdown().await;
    result
}

async fn build_app(config: &Config, command: Option<&Command>) -> error::Result<App> {
    let storage = if needs_storage(command, config.source) {
        Some(Storage::connect(config.require_database_url()?).await?)
    } else {
        None
    };
    Ok(App::new(
        Box::new(Dictionary::with_base_url(config.dictionary_url.clone())),
        storage,
        WordSource::new(config.source, WordList::bundled()),
        Presenter::terminal(),
    ))
}
