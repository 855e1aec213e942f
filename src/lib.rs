pub mod fs;
pub mod geometry;
pub mod loader;
pub mod sampler;
pub mod termio;

mod card;
mod category;
mod client;
mod detail;
mod document;
mod dom;
mod gallery;
mod location;
mod pipeline;
mod record;
mod selectors;

pub use card::Card;
pub use category::{Category, Selection};
pub use client::Client;
pub use detail::DetailPresenter;
pub use document::Document;
pub use gallery::{Gallery, EMPTY_PLACEHOLDER};
pub use geometry::{Dimensions, Geometry, Layout, Orientation};
pub use location::PageLocation;
pub use pipeline::Pipeline;
pub use record::{Collection, Kind, Record};

use selectors::{GRID_SELECTOR, MODAL_CONTENT_SELECTOR, MODAL_SELECTOR};
