//! From catalog sources to gallery cards.

use crate::{
    loader, sampler, termio, Card, Client, Collection, Layout, Record, Selection,
};
use eyre::eyre;
use indicatif::ProgressBar;
use std::thread;
use url::Url;

/// Maximum number of cards rendered at the same time.
pub const MAX_CONCURRENT_RENDERS: usize = 8;

/// The load, draw and render chain of a page.
pub struct Pipeline<'a> {
    /// Client to fetch sources and covers.
    client: &'a Client,
    /// Location of the rendered page.
    page: &'a Url,
    /// Cover layout.
    layout: Layout,
}

impl<'a> Pipeline<'a> {
    /// Initializes a new pipeline.
    pub fn new(client: &'a Client, page: &'a Url, layout: Layout) -> Self {
        Self {
            client,
            page,
            layout,
        }
    }

    /// Loads the records shown by `selection`.
    ///
    /// `count` overrides the number of drawn records; without it, the home
    /// page draws a few records and category pages show all of theirs.
    pub fn load(&self, selection: Selection, count: Option<usize>) -> Collection {
        let records = loader::load_collection(
            self.client,
            self.page,
            &selection.categories(),
        );

        match count.or_else(|| selection.default_count()) {
            Some(count) => sampler::sample(&records, count),
            None => records,
        }
    }

    /// Renders the cards of `records`, concurrently.
    ///
    /// At most [`MAX_CONCURRENT_RENDERS`] covers are fetched at once. Returns
    /// once every card is done, in the order of `records`. Cards that cannot
    /// be built are logged and skipped.
    pub fn render(&self, records: &[Record], progress: &ProgressBar) -> Vec<Card> {
        let mut cards = Vec::with_capacity(records.len());

        for chunk in records.chunks(MAX_CONCURRENT_RENDERS) {
            let results = thread::scope(|scope| {
                let handles = chunk
                    .iter()
                    .map(|record| {
                        scope.spawn(move || {
                            let card = Card::render(
                                self.client,
                                self.page,
                                record,
                                self.layout,
                                progress,
                            );
                            progress.inc(1);
                            card
                        })
                    })
                    .collect::<Vec<_>>();

                handles
                    .into_iter()
                    .map(|handle| {
                        handle
                            .join()
                            .unwrap_or_else(|_| Err(eyre!("card thread panicked")))
                    })
                    .collect::<Vec<_>>()
            });

            cards.extend(results.into_iter().filter_map(|card| {
                card.map_err(|err| termio::print_report_over(progress, &err))
                    .ok()
            }));
        }

        cards
    }

    /// Loads and renders the cards of `selection`.
    pub fn run(
        &self,
        selection: Selection,
        count: Option<usize>,
        progress: &ProgressBar,
    ) -> Vec<Card> {
        let records = self.load(selection, count);

        progress.set_length(records.len() as u64);
        let cards = self.render(&records, progress);
        progress.finish();

        cards
    }
}
