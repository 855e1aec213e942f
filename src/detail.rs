//! Detail overlay of a record.

use crate::{dom, PageLocation, Record};
use kuchiki::NodeRef;

/// Class toggling the overlay visibility.
const SHOWN_CLASS: &str = "show";

/// Number of genres displayed.
const MAX_GENRES: usize = 3;

/// Number of ticks on the rating meter.
const RATING_TICKS: u32 = 9;

/// Presents a record in the modal overlay.
pub struct DetailPresenter {
    /// Overlay, shown or hidden.
    overlay: NodeRef,
    /// Region receiving the record details.
    content: NodeRef,
    /// Page location, to resolve icons.
    location: PageLocation,
}

impl DetailPresenter {
    /// Initializes a presenter on top of the given overlay.
    pub fn new(overlay: NodeRef, content: NodeRef, location: PageLocation) -> Self {
        Self {
            overlay,
            content,
            location,
        }
    }

    /// Tests if the overlay is visible.
    pub fn is_shown(&self) -> bool {
        dom::has_class(&self.overlay, SHOWN_CLASS)
    }

    /// Replaces the overlay content with `record` and reveals it.
    pub fn show(&self, record: &Record) {
        dom::clear(&self.content);

        self.content.append(self.header(record));
        self.content.append(paragraph(
            "Synopsis",
            non_empty(record.synopsis.as_deref()).unwrap_or("Synopsis not available."),
        ));
        self.content.append(paragraph(
            "Author",
            non_empty(record.author.as_deref()).unwrap_or("Author not available"),
        ));
        self.content.append(paragraph(
            "Year",
            non_empty(record.release_date.as_deref()).unwrap_or("Date not available"),
        ));
        let genres = genres(&record.genres);
        self.content.append(paragraph(
            "Genre",
            if genres.is_empty() {
                "Genre not available"
            } else {
                genres.as_str()
            },
        ));

        let rating = paragraph("Rating", "");
        rating.append(rating_meter(record.rating));
        self.content.append(rating);

        if let Some(trailer) = record.embeddable_trailer() {
            let title = format!("{} | TRAILER", record.title);
            self.content.append(dom::element(
                "iframe",
                &[
                    ("width", "auto"),
                    ("height", "auto"),
                    ("src", trailer),
                    ("title", title.as_str()),
                    ("allowfullscreen", ""),
                ],
            ));
        }

        self.content.append(dom::element_with_text(
            "button",
            &[("id", "chiudi-modale")],
            "X",
        ));

        dom::add_class(&self.overlay, SHOWN_CLASS);
    }

    /// Hides the overlay, stopping any trailer playback.
    pub fn hide(&self) {
        if !self.is_shown() {
            return;
        }

        dom::remove_class(&self.overlay, SHOWN_CLASS);

        // Reloading the frame is the only way to stop an embedded player.
        if let Ok(iframe) = self.content.select_first("iframe") {
            let iframe = iframe.as_node();
            let src = dom::attribute(iframe, "src").unwrap_or_default();
            dom::set_attribute(iframe, "src", "");
            dom::set_attribute(iframe, "src", &src);
        }
    }

    /// Builds the title bar, with the kind icon.
    fn header(&self, record: &Record) -> NodeRef {
        let header = dom::element("div", &[("class", "header-modale")]);
        header.append(dom::element_with_text(
            "h3",
            &[("class", "title-modale")],
            &record.title,
        ));

        let icon = self.location.resolve_icon(record.kind.icon());
        header.append(dom::element(
            "img",
            &[
                ("alt", "Icona opera"),
                ("class", "opera-icon"),
                ("src", icon.as_str()),
            ],
        ));

        header
    }
}

/// Builds a `<p><strong>label:</strong> text</p>` paragraph.
fn paragraph(label: &str, text: &str) -> NodeRef {
    let node = dom::element("p", &[]);
    node.append(dom::element_with_text("strong", &[], &format!("{label}:")));
    node.append(NodeRef::new_text(format!(" {text}")));
    node
}

/// Builds the rating bar, with its ticks.
fn rating_meter(rating: f64) -> NodeRef {
    let container = dom::element("div", &[("class", "valutazione-container")]);

    let width = format!("width: {}%", rating.clamp(0.0, 10.0) * 10.0);
    container.append(dom::element(
        "div",
        &[("class", "valutazione-bar"), ("style", width.as_str())],
    ));

    for i in 1..=RATING_TICKS {
        let left = format!("left: {}%", i * 10);
        let tick = dom::element(
            "div",
            &[("class", "valutazione-tacca"), ("style", left.as_str())],
        );
        tick.append(dom::element_with_text(
            "div",
            &[("class", "valutazione-numero")],
            &i.to_string(),
        ));
        container.append(tick);
    }

    container
}

/// Joins the displayed genres, skipping blank ones.
fn genres(genres: &[String]) -> String {
    genres
        .iter()
        .map(|genre| genre.trim())
        .filter(|genre| !genre.is_empty())
        .take(MAX_GENRES)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}
