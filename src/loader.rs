//! Resource loader: fetches the catalog source files.

use crate::{termio, Category, Client, Collection, PageLocation};
use eyre::{eyre, Result, WrapErr};
use std::thread;
use url::Url;

/// Directory holding the catalog source files, relative to the site root.
const DATA_DIR: &str = "data/";

/// Returns the URL of a category source file, as seen from `page`.
pub fn source_url(page: &Url, category: Category) -> Result<Url> {
    let location = PageLocation::from(page);
    let path = format!("{}{}", location.resolve(DATA_DIR), category.file_name());

    page.join(&path)
        .with_context(|| format!("resolve {path} against {page}"))
}

/// Loads and merges the given categories.
///
/// Every source is fetched concurrently and the merge only happens if all of
/// them succeed: a single failure turns the whole load into an empty
/// collection. Failures are logged, never returned.
pub fn load_collection(
    client: &Client,
    page: &Url,
    categories: &[Category],
) -> Collection {
    match fetch_all(client, page, categories) {
        Ok(records) => {
            termio::print_ok(&format!(
                "{} records loaded from {} source(s)",
                records.len(),
                categories.len()
            ));
            records
        },
        Err(err) => {
            termio::print_report(&err.wrap_err("load catalog"));
            Collection::new()
        },
    }
}

/// Fetches every source, failing on the first broken one.
fn fetch_all(
    client: &Client,
    page: &Url,
    categories: &[Category],
) -> Result<Collection> {
    let results = thread::scope(|scope| {
        let handles = categories
            .iter()
            .map(|&category| {
                scope.spawn(move || fetch_category(client, page, category))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(eyre!("fetch thread panicked")))
            })
            .collect::<Vec<_>>()
    });

    let mut collection = Collection::new();
    for records in results {
        collection.extend(records?);
    }

    Ok(collection)
}

/// Fetches a single category.
fn fetch_category(
    client: &Client,
    page: &Url,
    category: Category,
) -> Result<Collection> {
    let url = source_url(page, category)?;

    client
        .get_json::<Collection>(&url)
        .with_context(|| format!("fetch {category} from {url}"))
}
