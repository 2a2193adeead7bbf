use std::path::PathBuf;

use clap::{Args, Subcommand};
use desk_core::enums::StatusFilter;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List articles: search, filter by status, paginate.
    List(ListArgs),
    /// Create an article.
    Add(AddArgs),
    /// Edit an existing article.
    Edit(EditArgs),
    /// Flip the publish flag of an article.
    Toggle { id: String },
    /// Delete an article.
    Delete { id: String },
    /// Preview an article as it appears on the live site.
    Show(ShowArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive headline search.
    #[arg(long)]
    pub search: Option<String>,
    /// all, published, or unpublished.
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,
    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Rows per page; must be one of the configured options.
    #[arg(long)]
    pub rows: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub headline: String,
    #[arg(long)]
    pub author: String,
    #[arg(long)]
    pub body: String,
    /// Publication date, YYYY-MM-DD.
    #[arg(long = "date")]
    pub publication_date: String,
    #[arg(long)]
    pub published: bool,
    /// Image file to attach; repeatable.
    #[arg(long = "image")]
    pub images: Vec<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub headline: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub body: Option<String>,
    /// Publication date, YYYY-MM-DD.
    #[arg(long = "date")]
    pub publication_date: Option<String>,
    #[arg(long, conflicts_with = "unpublish")]
    pub publish: bool,
    #[arg(long)]
    pub unpublish: bool,
    /// Image file to append; repeatable.
    #[arg(long = "image")]
    pub images: Vec<PathBuf>,
    /// Index of an attached image to remove; repeatable.
    #[arg(long = "remove-image")]
    pub remove_images: Vec<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub id: String,
    /// Carousel steps forward from the first image.
    #[arg(long, default_value_t = 0)]
    pub image: usize,
}
