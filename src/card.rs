//! Gallery cards.

use crate::{
    dom,
    geometry::{self, Dimensions, Geometry, Layout, Orientation},
    termio, Client, PageLocation, Record,
};
use eyre::{Result, WrapErr};
use image::io::Reader as ImageReader;
use indicatif::ProgressBar;
use kuchiki::NodeRef;
use std::io::Cursor;
use url::Url;

/// Attribute holding the serialized record on the card image.
pub const PAYLOAD_ATTRIBUTE: &str = "data-opera";

/// Class of the card wrapper.
pub const CARD_CLASS: &str = "opera";

/// A rendered gallery card.
///
/// Cards are plain data, built off the main thread; they only become DOM
/// nodes through [`Card::to_node`].
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Title, used as image alternative text.
    title: String,
    /// Cover path, as seen from the page.
    src: String,
    /// Cover path, as given by the record.
    image: String,
    /// Natural size of the cover.
    natural: Dimensions,
    /// Fitted size of the cover.
    geometry: Geometry,
    /// Serialized record.
    payload: String,
}

impl Card {
    /// Renders the card of `record`.
    ///
    /// Blocks until the cover is fetched (or failed to). A missing or broken
    /// cover is not an error: the fallback size is used instead, and a
    /// warning is printed above `progress`.
    pub fn render(
        client: &Client,
        page: &Url,
        record: &Record,
        layout: Layout,
        progress: &ProgressBar,
    ) -> Result<Self> {
        let location = PageLocation::from(page);
        let src = location.resolve(&record.image);

        let natural = probe(client, page, &src).unwrap_or_else(|err| {
            termio::print_warn_over(
                progress,
                &format!(
                    "cover of {}: {err:#}, using fallback size",
                    record.title
                ),
            );
            Dimensions::FALLBACK
        });

        Self::with_dimensions(record, src, natural, layout)
    }

    /// Builds a card from a cover of known natural size.
    pub fn with_dimensions(
        record: &Record,
        src: String,
        natural: Dimensions,
        layout: Layout,
    ) -> Result<Self> {
        let natural = natural.or_fallback();

        Ok(Self {
            title: record.title.clone(),
            src,
            image: record.image.clone(),
            natural,
            geometry: geometry::fit(natural, layout),
            payload: record.to_payload().with_context(|| {
                format!("embed record {}", record.title)
            })?,
        })
    }

    /// Returns the fitted cover size.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Returns the cover orientation.
    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.natural)
    }

    /// Returns the serialized record.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Builds the card DOM node.
    pub fn to_node(&self) -> NodeRef {
        let Geometry {
            width,
            height,
            offset_x,
            offset_y,
        } = self.geometry;

        let class = format!("{CARD_CLASS} {}", self.orientation().class());
        let background = format!("--background-url: url('../{}')", self.image);
        let card = dom::element(
            "div",
            &[("class", class.as_str()), ("style", background.as_str())],
        );

        let width_attr = width.to_string();
        let height_attr = height.to_string();
        let style = format!(
            "width: {width}px; height: {height}px; margin: {offset_y}px {offset_x}px;"
        );
        card.append(dom::element(
            "img",
            &[
                ("src", self.src.as_str()),
                ("alt", self.title.as_str()),
                (PAYLOAD_ATTRIBUTE, self.payload.as_str()),
                ("width", width_attr.as_str()),
                ("height", height_attr.as_str()),
                ("loading", "lazy"),
                ("style", style.as_str()),
            ],
        ));

        card
    }
}

/// Fetches a cover and reads its natural size.
fn probe(client: &Client, page: &Url, src: &str) -> Result<Dimensions> {
    let url = page
        .join(src)
        .with_context(|| format!("resolve {src} against {page}"))?;

    let mut buf = Vec::new();
    client
        .get_image(&url, &mut buf)
        .with_context(|| format!("download image from {url}"))?;

    let (width, height) = ImageReader::new(Cursor::new(&buf))
        .with_guessed_format()
        .with_context(|| format!("determine image format from {url}"))?
        .into_dimensions()
        .with_context(|| format!("read image size from {url}"))?;

    Ok(Dimensions::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;
    use image::RgbImage;
    use std::{fs, path::PathBuf};

    /// Creates a site with a single cover.
    fn site(name: &str, width: u32, height: u32) -> PathBuf {
        let root = std::env::temp_dir()
            .join(format!("anshell-card-{name}-{}", std::process::id()));
        fs::create_dir_all(root.join("images")).expect("create site");
        RgbImage::new(width, height)
            .save(root.join("images/cover.png"))
            .expect("save cover");
        root
    }

    fn record() -> Record {
        Record {
            title: "L'Attacco dei Giganti".to_owned(),
            kind: Kind::Anime,
            synopsis: None,
            author: None,
            release_date: None,
            genres: Vec::new(),
            rating: 8.0,
            image: "images/cover.png".to_owned(),
            trailer: None,
        }
    }

    fn render(page: &Url, record: &Record) -> Card {
        Card::render(
            &Client::new(),
            page,
            record,
            Layout::default(),
            &ProgressBar::hidden(),
        )
        .expect("card")
    }

    #[test]
    fn render_with_cover() {
        let root = site("landscape", 192, 108);
        let page = Url::from_file_path(root.join("index.html")).expect("URL");

        let card = render(&page, &record());
        fs::remove_dir_all(&root).expect("remove site");

        assert_eq!(card.orientation(), Orientation::Landscape);
        assert_eq!(card.geometry().width, 420);
        assert_eq!(card.geometry().height, 236);
        assert_eq!(card.src, "images/cover.png");
    }

    #[test]
    fn render_from_nested_page() {
        let root = site("nested", 30, 40);
        let page =
            Url::from_file_path(root.join("pages/anime.html")).expect("URL");

        let card = render(&page, &record());
        fs::remove_dir_all(&root).expect("remove site");

        assert_eq!(card.natural, Dimensions::new(30, 40));
        assert_eq!(card.orientation(), Orientation::Portrait);
        assert!(card.src.ends_with("/images/cover.png"));
    }

    #[test]
    fn missing_cover_uses_fallback() {
        let root = site("missing", 10, 10);
        let page = Url::from_file_path(root.join("index.html")).expect("URL");
        let mut record = record();
        record.image = "images/nope.png".to_owned();

        let card = render(&page, &record);
        fs::remove_dir_all(&root).expect("remove site");

        assert_eq!(card.natural, Dimensions::FALLBACK);
        assert_eq!(card.orientation(), Orientation::Portrait);
    }

    #[test]
    fn node_carries_payload() {
        let record = record();
        let card = Card::with_dimensions(
            &record,
            "images/cover.png".to_owned(),
            Dimensions::new(1920, 1080),
            Layout::default(),
        )
        .expect("card");

        let node = card.to_node();
        let img = node.select_first("img").expect("image").as_node().clone();

        assert!(dom::has_class(&node, CARD_CLASS));
        assert!(dom::has_class(&node, "orientamento-orizzontale"));
        assert_eq!(dom::attribute(&img, "width").as_deref(), Some("420"));
        assert_eq!(
            dom::attribute(&img, "style").as_deref(),
            Some("width: 420px; height: 236px; margin: 142px 0px;")
        );
        assert_eq!(
            dom::attribute(&img, "alt").as_deref(),
            Some("L'Attacco dei Giganti")
        );

        let payload = dom::attribute(&img, PAYLOAD_ATTRIBUTE).expect("payload");
        assert!(!payload.contains('\''));
        assert_eq!(Record::from_payload(&payload).expect("record"), record);
    }
}
