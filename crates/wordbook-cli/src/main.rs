use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use wordbook_client::{ClientSession, DictionaryId, is_valid_dictionary_id};
use wordbook_config::Config;

mod output;

#[derive(Debug, Parser)]
#[command(name = "wordbook", version, about = "Look up words in the wordbook dictionaries")]
struct Cli {
    /// Print a list of available dictionaries
    #[arg(long)]
    dictionaries: bool,

    /// Print extended info about the given dictionary ids
    #[arg(long, value_name = "DICT-ID", num_args = 1..)]
    info: Vec<String>,

    /// Get suggestions and definitions for a word or phrase
    #[arg(short = 'w', value_name = "WORD", num_args = 1..)]
    words: Vec<String>,

    /// Dictionary to look the word up in, e.g. `-l:1-2`
    #[arg(short = 'l', value_name = "DICT-ID", requires = "words", value_parser = parse_language)]
    language: Option<String>,

    /// Override the API base url
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// More words of the phrase given with `-w`, e.g. after `-l`
    #[arg(value_name = "WORD", hide = true)]
    more_words: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Dictionaries,
    Info(Vec<String>),
    Lookup {
        words: Vec<String>,
        language: Option<String>,
    },
}

impl Cli {
    /// Pick one command: `--dictionaries`, then `--info`, then `-w`
    fn into_command(self) -> Option<Command> {
        if self.dictionaries {
            Some(Command::Dictionaries)
        } else if !self.info.is_empty() {
            Some(Command::Info(self.info))
        } else if !self.words.is_empty() {
            let mut words = self.words;
            words.extend(self.more_words);
            Some(Command::Lookup {
                words,
                language: self.language.filter(|id| is_valid_dictionary_id(id)),
            })
        } else {
            None
        }
    }
}

/// Accept the `-l:1-2` spelling next to `-l 1-2`
fn parse_language(value: &str) -> Result<String, String> {
    Ok(value.strip_prefix(':').unwrap_or(value).to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::new();
    init_tracing(&config.log_filter);

    if let Some(base_url) = cli.base_url.clone() {
        config.api.base_url = base_url;
    }

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let Some(command) = cli.into_command() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let session = ClientSession::new(config.api).context("Failed to build HTTP client")?;
    let mut out = io::stdout();

    match command {
        Command::Dictionaries => list_dictionaries(&session, &mut out).await,
        Command::Info(ids) => dictionary_info(&session, &ids, &mut out).await,
        Command::Lookup { words, language } => {
            lookup_words(&session, &words, language.as_deref(), &mut out).await
        }
    }
}

async fn list_dictionaries(session: &ClientSession, out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = session
        .list_dictionaries()
        .await
        .context("Failed to list dictionaries")?;

    if catalog.is_empty() {
        tracing::warn!("Server returned no dictionaries");
        return Ok(());
    }

    for dict in &catalog {
        output::write_dictionary(out, dict.id(), dict.short_name(), dict.long_name())?;
    }
    Ok(())
}

async fn dictionary_info(
    session: &ClientSession,
    ids: &[String],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let catalog = session
        .list_dictionaries()
        .await
        .context("Failed to list dictionaries")?;

    for id in ids.iter().filter(|id| is_valid_dictionary_id(id)) {
        let Some(dict) = catalog.find_by_id(id) else {
            tracing::info!("No dictionary with id {id}");
            continue;
        };

        // A failed field prints as empty; the other one is still shown
        let info = dict.info().await.unwrap_or_else(|e| {
            tracing::error!("Failed to fetch info of {id}: {e}");
            None
        });
        let alphabet = dict.alphabet().await.unwrap_or_else(|e| {
            tracing::error!("Failed to fetch alphabet of {id}: {e}");
            None
        });

        output::write_dictionary_info(
            out,
            dict.id(),
            dict.short_name(),
            dict.long_name(),
            alphabet.unwrap_or_default(),
            info.unwrap_or_default(),
        )?;
    }
    Ok(())
}

async fn lookup_words(
    session: &ClientSession,
    words: &[String],
    language: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let phrase = words.join(" ");
    let phrase = phrase.trim();

    let suggestions = session
        .list_suggestions(phrase, language)
        .await
        .with_context(|| format!("Failed to get suggestions for {phrase:?}"))?;

    if suggestions.is_empty() {
        tracing::warn!("No suggestions for {phrase:?}");
        return Ok(());
    }

    let dest_language_id = language
        .and_then(|id| id.parse::<DictionaryId>().ok())
        .map(|id| id.dest_language_id);

    for suggestion in &suggestions {
        output::write_suggestion(out, suggestion.word_id(), suggestion.word())?;

        match suggestion.definitions(dest_language_id).await {
            Ok(bundle) => output::write_definitions(out, &bundle)?,
            Err(e) => tracing::error!("Failed to fetch definitions of {:?}: {e}", suggestion.word()),
        }
        output::write_separator(out)?;
    }
    Ok(())
}
