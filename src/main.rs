//! anshell - Render a personal media catalog as a card gallery

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unreachable_pub,
    unsafe_code,
    unused,
    unused_import_braces,
    unused_lifetimes,
    variant_size_differences,
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::clone_on_ref_ptr,
    clippy::exit,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::lossy_float_literal,
    clippy::mem_forget,
    clippy::panic,
    clippy::pattern_type_mismatch,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::verbose_file_reads,
    clippy::dbg_macro,
    clippy::let_underscore_must_use,
    clippy::todo,
    clippy::unwrap_used,
    clippy::use_debug
)]
#![allow(
    // Catalog titles are rarely plain ASCII.
    clippy::non_ascii_literal,
)]

// }}}

use anshell::{
    termio, Category, Client, Dimensions, Document, Layout, PageLocation,
    Pipeline, Selection,
};
use clap::Parser;
use eyre::{eyre, Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use std::{env, path::PathBuf};
use url::Url;

fn main() -> Result<()> {
    let opts = Opts::parse();
    let page = opts.page_url()?;
    let selection = Selection::from(opts.category);
    let client = Client::new();

    // Bind the sinks first: a broken template must fail before any fetch.
    let document = match opts.template {
        Some(ref path) => Document::load(path).context("load template")?,
        None => Document::builtin(),
    };
    let gallery = document.gallery().context("bind gallery")?;
    let presenter = document
        .presenter(PageLocation::from(&page))
        .context("bind detail overlay")?;

    match selection {
        Selection::Home => println!("Rendering {page}"),
        Selection::Only(category) => println!("Rendering {category} on {page}"),
    }

    let pipeline = Pipeline::new(&client, &page, opts.layout());
    let progress_bar = ProgressBar::new(0);
    setup_card_progress_bar(&progress_bar);
    let cards = pipeline.run(selection, opts.count, &progress_bar);

    // Swap the whole grid at once, only once every card is ready.
    gallery.replace(&cards);
    if gallery.is_empty() {
        termio::print_warn("nothing to show");
    }

    if let Some(index) = opts.open {
        if !gallery.open(index, &presenter) {
            termio::print_warn(&format!("card {index} not opened"));
        }
    }

    document
        .save(&opts.output)
        .with_context(|| format!("write {}", opts.output.display()))?;
    termio::print_ok(&format!(
        "{} card(s) written to {}",
        gallery.len(),
        opts.output.display()
    ));

    Ok(())
}

/// Configures the progress bar for the cards.
fn setup_card_progress_bar(progress_bar: &ProgressBar) {
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:10}    [{bar:40.cyan/blue}] {pos:>4}/{len:4}")
            .progress_chars("##-"),
    );
    progress_bar.set_message("covers");
}

/// CLI options.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Opts {
    /// URL of the rendered page (defaults to `index.html` in the current
    /// directory).
    #[clap(short, long)]
    page: Option<Url>,

    /// Category page to render (the home page when absent).
    #[clap(short, long, arg_enum, value_parser)]
    category: Option<Category>,

    /// Number of records to draw at random.
    #[clap(short = 'n', long)]
    count: Option<usize>,

    /// Viewport width, in pixels.
    #[clap(long, default_value_t = 1024)]
    viewport_width: u32,

    /// Width of the card box, in pixels.
    #[clap(long, default_value_t = Dimensions::CARD_BOX.width)]
    box_width: u32,

    /// Height of the card box, in pixels.
    #[clap(long, default_value_t = Dimensions::CARD_BOX.height)]
    box_height: u32,

    /// Page template, holding the grid and the detail overlay.
    #[clap(short, long)]
    template: Option<PathBuf>,

    /// Path to the rendered page.
    #[clap(short, long, default_value = "gallery.html")]
    output: PathBuf,

    /// Position of the card to open in the detail overlay.
    #[clap(long)]
    open: Option<usize>,
}

impl Opts {
    /// Returns the page URL.
    fn page_url(&self) -> Result<Url> {
        if let Some(ref page) = self.page {
            return Ok(page.clone());
        }

        let cwd = env::current_dir().context("get current directory")?;
        Url::from_file_path(cwd.join("index.html"))
            .map_err(|()| eyre!("invalid page path {}", cwd.display()))
    }

    /// Returns the cover layout.
    fn layout(&self) -> Layout {
        Layout {
            card_box: Dimensions::new(self.box_width, self.box_height),
            viewport_width: self.viewport_width,
        }
    }
}
