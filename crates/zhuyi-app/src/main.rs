use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use zhuyi_config::{Config, DisplayMode, HskFilter, SortOrder, TranslationLanguage};
use zhuyi_lang_chinese::EXAMPLE_TEXT;

pub mod controller;
pub mod events;
pub mod io;
pub mod render;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::events::annotate::annotate_text;
use self::events::notes::note_lines;
use self::events::wordlist::{WordListQuery, select_words};
use self::render::{
    EMPTY_INPUT, render_annotation, render_json, render_notes, render_word_counts, render_words,
};
use self::state::AppState;

#[derive(Parser)]
#[command(name = "zhuyi")]
#[command(about = "Annotate Chinese text with pinyin, definitions and HSK vocabulary")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true, default_value = "zhuyi.json")]
    config: PathBuf,

    /// pinyin-and-chars, pinyin-only or chars-only
    #[arg(long, global = true)]
    display: Option<DisplayMode>,

    /// both, english-only, vietnamese-only or none
    #[arg(long, global = true)]
    translation: Option<TranslationLanguage>,

    /// Put a space after every Chinese word
    #[arg(long, global = true, overrides_with = "no_spaces")]
    spaces: bool,

    /// No space after Chinese words, even when the config file asks for it
    #[arg(long, global = true, overrides_with = "spaces")]
    no_spaces: bool,

    /// none, hsk1..hsk6 or not-in-hsk
    #[arg(long, global = true)]
    hsk: Option<HskFilter>,

    /// appearance, pronunciation or frequency
    #[arg(long, global = true)]
    sort: Option<SortOrder>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Annotate text from the argument, a file or stdin
    Annotate {
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Annotate stdin line by line, only the newest result is shown
    Watch {
        #[arg(long)]
        json: bool,
    },
    /// Browse the HSK word list
    Wordlist {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
        level: Option<u8>,
        #[arg(long)]
        search: Option<String>,
        /// Random sample, 10 words when no count is given
        #[arg(long, num_args = 0..=1, default_missing_value = "10")]
        random: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Manage noted words
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },
    /// Annotate the built-in example passage
    Example {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum NotesAction {
    Add { word: String },
    Remove { word: String },
    Toggle { word: String },
    List {
        #[arg(long)]
        json: bool,
    },
    Clear,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        let annotate = &mut config.annotate;
        if let Some(display) = self.display {
            annotate.display_mode = display;
        }
        if let Some(translation) = self.translation {
            annotate.translation = translation;
        }
        if self.spaces {
            annotate.insert_spaces = true;
        } else if self.no_spaces {
            annotate.insert_spaces = false;
        }
        if let Some(hsk) = self.hsk {
            annotate.hsk_filter = hsk;
        }
        if let Some(sort) = self.sort {
            annotate.sort_order = sort;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;
    cli.apply(&mut config);

    let state = Arc::new(AppState::new(config));
    run(state, cli.command).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(state: Arc<AppState>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Annotate { text, file, json } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, None) => {
                    let mut input = String::new();
                    tokio::io::stdin().read_to_string(&mut input).await?;
                    input
                }
            };
            print_annotation(&state, &text, json).await
        }
        Command::Example { json } => {
            println!("{EXAMPLE_TEXT}\n");
            print_annotation(&state, EXAMPLE_TEXT, json).await
        }
        Command::Watch { json } => watch(state, json).await,
        Command::Wordlist {
            level,
            search,
            random,
            json,
        } => {
            let query = WordListQuery {
                level,
                search,
                random,
            };
            print_word_list(&state, &query, json).await
        }
        Command::Notes { action } => notes(&state, action).await,
    }
}

async fn print_annotation(state: &AppState, text: &str, json: bool) -> anyhow::Result<()> {
    let Some(annotation) = annotate_text(state, text).await? else {
        println!("{EMPTY_INPUT}");
        return Ok(());
    };

    if json {
        println!("{}", render_json(&annotation)?);
    } else {
        let config = state.annotate_config().await;
        let noted = state.noted_words().await;
        print!("{}", render_annotation(&annotation, &config, &noted));
    }
    Ok(())
}

async fn watch(state: Arc<AppState>, json: bool) -> anyhow::Result<()> {
    let config = state.annotate_config().await;
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(BufReader::new(tokio::io::stdin()), config, json);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                controller.shutdown();
            }
            result = tasks.join_next() => {
                match result {
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(e))) => {
                        controller.shutdown();
                        return Err(e);
                    }
                    Some(Err(e)) => {
                        controller.shutdown();
                        bail!("Task panicked: {e}");
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}

async fn print_word_list(state: &AppState, query: &WordListQuery, json: bool) -> anyhow::Result<()> {
    let processor = state.processor().await?;
    let list = processor.word_list();
    let words = select_words(&list, query, &mut rand::thread_rng());

    if json {
        println!("{}", render_json(&words)?);
        return Ok(());
    }

    let translation = state.annotate_config().await.translation;
    if *query == WordListQuery::default() {
        print!("{}", render_word_counts(&list));
        println!();
    }
    print!("{}", render_words(&words, translation));
    Ok(())
}

async fn notes(state: &AppState, action: NotesAction) -> anyhow::Result<()> {
    match action {
        NotesAction::Add { word } => {
            if state.notes.lock().await.add(&word)? {
                println!("Added {word} to notes");
            } else {
                println!("{word} is already noted");
            }
        }
        NotesAction::Remove { word } => {
            if state.notes.lock().await.remove(&word)? {
                println!("Removed {word} from notes");
            } else {
                println!("{word} is not noted");
            }
        }
        NotesAction::Toggle { word } => {
            if state.notes.lock().await.toggle(&word)? {
                println!("Added {word} to notes");
            } else {
                println!("Removed {word} from notes");
            }
        }
        NotesAction::List { json } => {
            let lines = note_lines(state).await?;
            if json {
                println!("{}", render_json(&lines)?);
            } else {
                print!("{}", render_notes(&lines));
            }
        }
        NotesAction::Clear => {
            state.notes.lock().await.clear()?;
            println!("Cleared notes");
        }
    }
    Ok(())
}
