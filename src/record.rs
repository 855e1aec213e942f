//! Catalog records, as stored in the `data/*.json` files.

use eyre::{Result, WrapErr};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// HTML entity used to embed apostrophes in a quoted attribute.
const APOSTROPHE_ENTITY: &str = "&apos;";

/// A sequence of records, in source order.
pub type Collection = Vec<Record>;

// -----------------------------------------------------------------------------

/// Kind of work described by a record.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// A book.
    #[serde(rename = "libro")]
    Book,
    /// An anime serie.
    #[serde(rename = "anime")]
    Anime,
    /// A movie.
    #[serde(rename = "film")]
    Film,
    /// A manga.
    #[serde(rename = "manga")]
    Manga,
    /// A TV serie.
    #[serde(rename = "serieTV")]
    TvSeries,
    /// A video game.
    #[serde(rename = "videogioco")]
    VideoGame,
}

impl Kind {
    /// Every kind, in display order.
    pub const ALL: [Self; 6] = [
        Self::Book,
        Self::Anime,
        Self::Film,
        Self::Manga,
        Self::TvSeries,
        Self::VideoGame,
    ];

    /// Returns the icon file name, relative to the `icons/` directory.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Book => "icon_libri.png",
            Self::Anime => "icon_anime.png",
            Self::Film => "icon_film.png",
            Self::Manga => "icon_manga.png",
            Self::TvSeries => "icon_serieTV.png",
            Self::VideoGame => "icon_videogiochi.png",
        }
    }

    /// Tests if a trailer can be embedded for this kind of work.
    pub const fn has_trailer(self) -> bool {
        match self {
            Self::Anime | Self::TvSeries | Self::VideoGame => true,
            Self::Book | Self::Film | Self::Manga => false,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Book => "book",
                Self::Anime => "anime",
                Self::Film => "film",
                Self::Manga => "manga",
                Self::TvSeries => "TV serie",
                Self::VideoGame => "video game",
            }
        )
    }
}

// -----------------------------------------------------------------------------

/// A catalog entry.
///
/// Records are never mutated once parsed: they go from the JSON file to a
/// card, get embedded in the card as a payload, and come back from it when
/// the card is opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Title.
    #[serde(rename = "titolo", alias = "title")]
    pub title: String,
    /// Kind of work.
    #[serde(rename = "tipo", alias = "kind")]
    pub kind: Kind,
    /// Plot summary.
    #[serde(
        rename = "trama",
        alias = "synopsis",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub synopsis: Option<String>,
    /// Author, studio or publisher.
    #[serde(
        rename = "autore",
        alias = "author",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<String>,
    /// Release date, free form (often just a year).
    #[serde(
        rename = "data",
        alias = "releaseDate",
        default,
        deserialize_with = "release_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_date: Option<String>,
    /// Genres.
    #[serde(
        rename = "genere",
        alias = "genres",
        default,
        deserialize_with = "null_as_default"
    )]
    pub genres: Vec<String>,
    /// Rating, out of 10.
    #[serde(
        rename = "valutazione",
        alias = "rating",
        default,
        deserialize_with = "null_as_default"
    )]
    pub rating: f64,
    /// Cover path, relative to the site root.
    #[serde(
        rename = "immagine",
        alias = "imagePath",
        default,
        deserialize_with = "null_as_default"
    )]
    pub image: String,
    /// Trailer URL, for embeddable kinds.
    #[serde(
        rename = "trailer",
        alias = "trailerUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub trailer: Option<String>,
}

impl Record {
    /// Returns the trailer to embed, if any.
    ///
    /// A trailer is only shown for kinds that support one, and an empty URL
    /// counts as no trailer at all.
    pub fn embeddable_trailer(&self) -> Option<&str> {
        self.trailer
            .as_deref()
            .filter(|url| !url.is_empty() && self.kind.has_trailer())
    }

    /// Serializes the record into an attribute-safe payload.
    pub fn to_payload(&self) -> Result<String> {
        let json = serde_json::to_string(self).context("serialize record")?;

        Ok(escape_apostrophes(&json))
    }

    /// Decodes a payload produced by [`Record::to_payload`].
    pub fn from_payload(payload: &str) -> Result<Self> {
        serde_json::from_str(&unescape_apostrophes(payload))
            .context("parse record payload")
    }
}

/// Replaces every apostrophe by its HTML entity.
pub fn escape_apostrophes(text: &str) -> String {
    text.replace('\'', APOSTROPHE_ENTITY)
}

/// Reverts [`escape_apostrophes`].
pub fn unescape_apostrophes(text: &str) -> String {
    text.replace(APOSTROPHE_ENTITY, "'")
}

/// Reads `null` the same way as a missing value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts release dates written either as text or as a bare year.
fn release_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Date {
        Text(String),
        Year(i64),
    }

    Ok(Option::<Date>::deserialize(deserializer)?.map(|date| match date {
        Date::Text(text) => text,
        Date::Year(year) => year.to_string(),
    }))
}
