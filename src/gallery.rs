//! Card grid.

use crate::{
    card::{CARD_CLASS, PAYLOAD_ATTRIBUTE},
    dom, termio, Card, DetailPresenter, Record,
};
use eyre::{eyre, Result, WrapErr};
use kuchiki::NodeRef;

/// Text shown when there is nothing to display.
pub const EMPTY_PLACEHOLDER: &str = "No items available.";

/// The grid receiving the cards.
pub struct Gallery {
    /// Grid container.
    grid: NodeRef,
}

impl Gallery {
    /// Initializes a gallery on top of the given container.
    pub fn new(grid: NodeRef) -> Self {
        Self { grid }
    }

    /// Replaces the whole grid content with `cards`.
    ///
    /// An empty set of cards shows the placeholder instead.
    pub fn replace(&self, cards: &[Card]) {
        dom::clear(&self.grid);

        if cards.is_empty() {
            self.grid
                .append(dom::element_with_text("p", &[], EMPTY_PLACEHOLDER));
            return;
        }

        for card in cards {
            self.grid.append(card.to_node());
        }
    }

    /// Returns the number of cards in the grid.
    pub fn len(&self) -> usize {
        self.cards().len()
    }

    /// Tests if the grid holds no card.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recovers the record embedded in the `index`th card.
    pub fn record(&self, index: usize) -> Result<Record> {
        let card = self
            .cards()
            .into_iter()
            .nth(index)
            .ok_or_else(|| eyre!("no card at position {index}"))?;
        let image = card
            .select_first("img")
            .map_err(|()| eyre!("card {index} has no image"))?;
        let payload = dom::attribute(image.as_node(), PAYLOAD_ATTRIBUTE)
            .ok_or_else(|| eyre!("card {index} has no payload"))?;

        Record::from_payload(&payload)
            .with_context(|| format!("decode card {index}"))
    }

    /// Opens the `index`th card in the detail overlay.
    ///
    /// A card whose payload cannot be decoded leaves the overlay untouched.
    pub fn open(&self, index: usize, presenter: &DetailPresenter) -> bool {
        match self.record(index) {
            Ok(record) => {
                presenter.show(&record);
                true
            },
            Err(err) => {
                termio::print_report(&err);
                false
            },
        }
    }

    fn cards(&self) -> Vec<NodeRef> {
        self.grid
            .children()
            .filter(|node| dom::has_class(node, CARD_CLASS))
            .collect()
    }
}
