use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::catalog::SortOrder;

pub const DATA_DIR_ENV: &str = "BOOKCASE_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "bookcase-data";

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding the catalog snapshot (default: $BOOKCASE_DATA_DIR or `bookcase-data`).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        std::env::var(DATA_DIR_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a book to the end of the catalog.
    Add(AddArgs),
    /// Remove the first book matching all given fields.
    Remove(RemoveArgs),
    /// Print the visible books.
    List(ListArgs),
    /// Reorder the catalog by title.
    Sort(SortArgs),
    /// Print the distinct categories in the catalog.
    Categories,
}

impl Command {
    /// Log directive used when `RUST_LOG` is unset. Commands that change the
    /// catalog report what they wrote; read-only ones keep stderr quiet.
    pub fn default_log_directive(&self) -> &'static str {
        match self {
            Self::Add(_) | Self::Remove(_) | Self::Sort(_) => "info",
            Self::List(_) | Self::Categories => "warn",
        }
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub author: String,

    #[arg(long)]
    pub category: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub author: String,

    #[arg(long)]
    pub category: String,

    /// Image reference of the book (default: the standard cover).
    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Category to show, or `All`.
    #[arg(long, default_value = "All")]
    pub filter: String,

    /// Render `book-card` HTML instead of plain text.
    #[arg(long)]
    pub html: bool,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    #[arg(value_enum)]
    pub order: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl From<SortDirection> for SortOrder {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => SortOrder::Ascending,
            SortDirection::Desc => SortOrder::Descending,
        }
    }
}
