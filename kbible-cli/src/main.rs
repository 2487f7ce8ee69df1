use clap::{Parser, Subcommand};
use kbible_core::session::{cursor_after_insert, on_trigger, SuggestionSession};
use kbible_core::settings::{kbible_home, load_settings, save_settings, settings_path, Settings};
use kbible_core::{citation_match, resolve, Resolution, DEFAULT_TRIGGER};

mod fetch;
use fetch::HttpVerseSource;

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\nBuilt: ",
        env!("BUILD_DATE"),
        "\nCommit: ",
        env!("GIT_HASH")
    )
}

#[derive(Parser, Debug)]
#[command(
    name = "kbible",
    about = "Korean Bible citation lookup and callout formatting",
    version = env!("CARGO_PKG_VERSION"),
    long_version = long_version()
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a citation and print the formatted callout block
    Quote {
        /// Citation text, e.g. 요한복음3:16-18
        #[arg(long)]
        query: String,
        /// Tag the book name with '#' (overrides settings)
        #[arg(long, default_value_t = false)]
        tag: bool,
        /// Force the tag off (overrides settings)
        #[arg(long, default_value_t = false)]
        no_tag: bool,
        /// Output JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Parse and resolve a citation without fetching
    Resolve {
        /// Citation text
        #[arg(long)]
        query: String,
        /// Output JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run the inline-trigger path against one editor line
    Suggest {
        /// Line content
        #[arg(long)]
        line: String,
        /// Cursor position as a character offset (default: end of line)
        #[arg(long)]
        cursor: Option<usize>,
        /// Line number the block would be inserted at (for the reported
        /// cursor position)
        #[arg(long, default_value_t = 0)]
        at_line: usize,
        /// Output JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show or update persisted settings
    Config {
        /// Set the inline trigger prefix (empty string restores the default)
        #[arg(long)]
        prefix_trigger: Option<String>,
        /// Enable or disable book-name tagging
        #[arg(long)]
        enable_tagging: Option<bool>,
    },
    /// Print CLI version
    Version {},
    /// Diagnose config directory and effective settings
    Doctor {
        /// Verbose output
        #[arg(long, default_value_t = false)]
        verbose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Quote {
            query,
            tag,
            no_tag,
            json,
        } => {
            let settings = load_settings();
            let tagging = if tag {
                true
            } else if no_tag {
                false
            } else {
                settings.enable_tagging
            };
            let mut session = SuggestionSession::new(HttpVerseSource);
            let candidates = session.suggest(&query);
            match candidates.first() {
                Some(c) => {
                    let block = session.select(c, tagging);
                    if json {
                        let out = serde_json::json!({
                            "query": query,
                            "lookupKey": c.reference.lookup_key,
                            "displayLabel": c.reference.display_label,
                            "block": block,
                        });
                        println!("{}", serde_json::to_string_pretty(&out)?);
                    } else {
                        println!("{}", block);
                    }
                }
                None => print_empty(&query, json)?,
            }
        }
        Commands::Resolve { query, json } => {
            let resolved = citation_match(&query).map(|parsed| (resolve(&parsed), parsed));
            match resolved {
                Some((Resolution::Resolved(r), parsed)) => {
                    if json {
                        let out = ResolveResult {
                            query: &query,
                            book_alias: &parsed.book_alias,
                            chapter: &parsed.chapter,
                            verse_range: &parsed.verse_range,
                            lookup_key: &r.lookup_key,
                            display_label: &r.display_label,
                        };
                        println!("{}", serde_json::to_string_pretty(&out)?);
                    } else {
                        println!("{} -> {}", r.display_label, r.lookup_key);
                    }
                }
                _ => print_empty(&query, json)?,
            }
        }
        Commands::Suggest {
            line,
            cursor,
            at_line,
            json,
        } => {
            let settings = load_settings();
            let cursor = cursor.unwrap_or_else(|| line.chars().count());
            let Some(info) = on_trigger(&line, cursor, &settings.prefix_trigger) else {
                print_empty(&line, json)?;
                return Ok(());
            };
            let mut session = SuggestionSession::new(HttpVerseSource);
            let candidates = session.suggest(&info.query);
            match candidates.first() {
                Some(c) => {
                    let block = session.select(c, settings.enable_tagging);
                    let (new_line, new_ch) = cursor_after_insert(at_line, &block);
                    if json {
                        let out = serde_json::json!({
                            "query": info.query,
                            "replaceStart": info.start,
                            "replaceEnd": info.end,
                            "lookupKey": c.reference.lookup_key,
                            "displayLabel": c.reference.display_label,
                            "block": block,
                            "cursor": {"line": new_line, "ch": new_ch},
                        });
                        println!("{}", serde_json::to_string_pretty(&out)?);
                    } else {
                        println!("{}", block);
                        eprintln!(
                            "[meta] replace {}..{} cursor {}:{}",
                            info.start, info.end, new_line, new_ch
                        );
                    }
                }
                None => print_empty(&info.query, json)?,
            }
        }
        Commands::Config {
            prefix_trigger,
            enable_tagging,
        } => {
            let mut settings = load_settings();
            let changed = prefix_trigger.is_some() || enable_tagging.is_some();
            if let Some(p) = prefix_trigger {
                settings.prefix_trigger = p;
            }
            if let Some(t) = enable_tagging {
                settings.enable_tagging = t;
            }
            if changed {
                save_settings(&settings)?;
                eprintln!("[config] saved to {}", settings_path().display());
            }
            print_settings(&settings);
        }
        Commands::Version {} => {
            println!("kbible-cli {}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Doctor { verbose } => {
            let home = kbible_home();
            let path = settings_path();
            println!("KBIBLE_DIR: {}", home.display());
            println!(
                "settings: {} ({})",
                path.display(),
                if path.exists() {
                    "OK"
                } else {
                    "MISSING (defaults apply)"
                }
            );
            let settings = load_settings();
            print_settings(&settings);
            if verbose {
                println!(
                    "quote endpoint: {}",
                    fetch::quote_build_url("john/3:16")
                );
            }
        }
    }
    Ok(())
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveResult<'a> {
    query: &'a str,
    book_alias: &'a str,
    chapter: &'a str,
    verse_range: &'a str,
    lookup_key: &'a str,
    display_label: &'a str,
}

fn print_settings(settings: &Settings) {
    let trigger = if settings.prefix_trigger.is_empty() {
        format!("{} (default)", DEFAULT_TRIGGER)
    } else {
        settings.prefix_trigger.clone()
    };
    println!("prefix_trigger: {}", trigger);
    println!("enable_tagging: {}", settings.enable_tagging);
}

/// Every failure path degrades to an empty candidate list, never an error
/// exit: false triggers are routine in an autocomplete flow.
fn print_empty(query: &str, json: bool) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "query": query,
                "count": 0,
            }))?
        );
    } else {
        println!("no match");
    }
    Ok(())
}
