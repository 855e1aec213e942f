use crate::sampler::DEFAULT_COUNT;
use clap::ArgEnum;
use std::fmt;

/// A catalog source file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, ArgEnum)]
pub enum Category {
    /// Books (`libri.json`).
    Books,
    /// Anime (`anime.json`).
    Anime,
    /// Video games (`videogiochi.json`).
    VideoGames,
    /// Manga (`manga.json`).
    Manga,
    /// TV series (`serieTV.json`).
    TvSeries,
    /// Films (`film.json`).
    Films,
}

impl Category {
    /// Categories drawn from by the home page, in merge order.
    ///
    /// Films have their own page and are not part of the home selection.
    pub const HOME: [Self; 5] = [
        Self::Books,
        Self::Anime,
        Self::VideoGames,
        Self::Manga,
        Self::TvSeries,
    ];

    /// Returns the source file name, relative to the `data/` directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Books => "libri.json",
            Self::Anime => "anime.json",
            Self::VideoGames => "videogiochi.json",
            Self::Manga => "manga.json",
            Self::TvSeries => "serieTV.json",
            Self::Films => "film.json",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Books => "books",
                Self::Anime => "anime",
                Self::VideoGames => "video games",
                Self::Manga => "manga",
                Self::TvSeries => "TV series",
                Self::Films => "films",
            }
        )
    }
}

/// What a page shows.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Selection {
    /// The home page: a random draw over every home category.
    Home,
    /// A single category page.
    Only(Category),
}

impl Selection {
    /// Returns the categories to load.
    pub fn categories(self) -> Vec<Category> {
        match self {
            Self::Home => Category::HOME.to_vec(),
            Self::Only(category) => vec![category],
        }
    }

    /// Returns how many records to draw when no count is requested.
    ///
    /// `None` means every record is shown.
    pub const fn default_count(self) -> Option<usize> {
        match self {
            Self::Home => Some(DEFAULT_COUNT),
            Self::Only(_) => None,
        }
    }
}

impl From<Option<Category>> for Selection {
    fn from(value: Option<Category>) -> Self {
        value.map_or(Self::Home, Self::Only)
    }
}
