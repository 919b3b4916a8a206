//! verse-index CLI
//! The main interface is through the library and its WASM bindings; the CLI
//! works on JSON files exported from the layout host.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use verse_index::{
    import_entries, load_entries, HeaderPolicy, IndexConfig, StyledFragment, VerseIndexer,
};

#[derive(Parser)]
#[command(name = "verse-index", version, about = "Verse indexing and running headers")]
struct Cli {
    /// JSON configuration (style names, chapter strategies, lead words)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lay out {id, translation} records as styled paragraphs
    Import {
        /// JSON array of entries
        entries: PathBuf,
    },

    /// Build the page to verse map from a fragment dump
    Index {
        /// JSON array of styled fragments
        fragments: PathBuf,
    },

    /// Compute running headers and footers from a fragment dump
    Headers {
        /// JSON array of styled fragments
        fragments: PathBuf,

        /// Header policy: last-of-left, first-of-left or spread-range
        #[arg(short, long)]
        policy: HeaderPolicy,

        /// Page count of the document (defaults to the last page with a verse)
        #[arg(long)]
        pages: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> verse_index::Result<()> {
    let config = match &cli.config {
        Some(path) => IndexConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => IndexConfig::default(),
    };

    match cli.command {
        Command::Import { entries } => {
            let entries = load_entries(&std::fs::read_to_string(entries)?)?;
            let (story, report) = import_entries(entries, &config.styles);
            let paragraphs: Vec<_> = story.paragraphs().collect();
            print_json(&paragraphs)?;
            eprintln!(
                "imported {} verses, skipped {}",
                report.imported,
                report.skipped.total()
            );
        }
        Command::Index { fragments } => {
            let index = VerseIndexer::index_fragments(&config, read_fragments(&fragments)?);
            if index.map.is_empty() {
                eprintln!("no verses found; check the style names in the configuration");
            }
            print_json(&index)?;
        }
        Command::Headers {
            fragments,
            policy,
            pages,
        } => {
            let index = VerseIndexer::index_fragments(&config, read_fragments(&fragments)?);
            let page_count = pages.unwrap_or_else(|| index.map.page_span());
            print_json(&index.running_heads(page_count, policy))?;
            if index.skipped.total() > 0 {
                eprintln!("skipped {} fragments", index.skipped.total());
            }
        }
    }

    Ok(())
}

fn read_fragments(path: &Path) -> verse_index::Result<Vec<StyledFragment>> {
    Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> verse_index::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
