//! Cover sizing: fit an image in the card box, keeping its aspect ratio.

use std::fmt;

/// Size of an image or of a box, in pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Dimensions {
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl Dimensions {
    /// Natural size assumed for images that could not be loaded.
    pub const FALLBACK: Self = Self::new(300, 400);

    /// Default card box.
    pub const CARD_BOX: Self = Self::new(420, 520);

    /// Initializes new dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Replaces zero dimensions by the fallback ones.
    #[must_use]
    pub const fn or_fallback(self) -> Self {
        Self {
            width: if self.width == 0 {
                Self::FALLBACK.width
            } else {
                self.width
            },
            height: if self.height == 0 {
                Self::FALLBACK.height
            } else {
                self.height
            },
        }
    }
}

/// Layout parameters shared by every card of a page.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Layout {
    /// Box the covers are fitted in.
    pub card_box: Dimensions,
    /// Width of the viewport.
    pub viewport_width: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            card_box: Dimensions::CARD_BOX,
            viewport_width: 1024,
        }
    }
}

/// Scaled size of a cover and its offsets inside the card box.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Geometry {
    /// Scaled width.
    pub width: u32,
    /// Scaled height.
    pub height: u32,
    /// Horizontal margin.
    pub offset_x: i32,
    /// Vertical margin.
    pub offset_y: i32,
}

/// Cover orientation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Orientation {
    /// Wider than tall.
    Landscape,
    /// Taller than wide, or square.
    Portrait,
}

impl Orientation {
    /// Classifies an image from its natural size.
    pub const fn of(natural: Dimensions) -> Self {
        if natural.width > natural.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Returns the CSS class used by the stylesheet.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Landscape => "orientamento-orizzontale",
            Self::Portrait => "orientamento-verticale",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Landscape => "landscape",
                Self::Portrait => "portrait",
            }
        )
    }
}

/// Returns the scale-down applied on small screens.
pub fn responsive_factor(viewport_width: u32) -> f64 {
    match viewport_width {
        0..=480 => 0.7,
        481..=768 => 0.8,
        _ => 1.0,
    }
}

/// Fits an image of `natural` size in `layout`'s card box.
///
/// The image is scaled to the largest size that fits (then scaled down on
/// small viewports) and centered in the box.
pub fn fit(natural: Dimensions, layout: Layout) -> Geometry {
    let natural = natural.or_fallback();
    let card_box = layout.card_box;

    let scale = (f64::from(card_box.width) / f64::from(natural.width))
        .min(f64::from(card_box.height) / f64::from(natural.height))
        * responsive_factor(layout.viewport_width);

    let width = round(f64::from(natural.width) * scale);
    let height = round(f64::from(natural.height) * scale);

    Geometry {
        width: width as u32,
        height: height as u32,
        offset_x: round((f64::from(card_box.width) - width) / 2.0) as i32,
        offset_y: round((f64::from(card_box.height) - height) / 2.0) as i32,
    }
}

/// Rounds half-way values towards positive infinity.
fn round(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(viewport_width: u32) -> Layout {
        Layout {
            viewport_width,
            ..Layout::default()
        }
    }

    #[test]
    fn fit_landscape_on_desktop() {
        let res = fit(Dimensions::new(1920, 1080), layout(1024));

        assert_eq!(
            res,
            Geometry {
                width: 420,
                height: 236,
                offset_x: 0,
                offset_y: 142,
            }
        );
    }

    #[test]
    fn fit_portrait_on_desktop() {
        let res = fit(Dimensions::new(600, 900), layout(1920));

        // Height bound: 520 / 900.
        assert_eq!(res.height, 520);
        assert_eq!(res.width, 347);
        assert_eq!(res.offset_x, 37);
        assert_eq!(res.offset_y, 0);
    }

    #[test]
    fn responsive_steps() {
        assert!((responsive_factor(320) - 0.7).abs() < f64::EPSILON);
        assert!((responsive_factor(480) - 0.7).abs() < f64::EPSILON);
        assert!((responsive_factor(481) - 0.8).abs() < f64::EPSILON);
        assert!((responsive_factor(768) - 0.8).abs() < f64::EPSILON);
        assert!((responsive_factor(769) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fit_on_phone() {
        let res = fit(Dimensions::new(420, 520), layout(400));

        assert_eq!(res.width, 294);
        assert_eq!(res.height, 364);
        assert_eq!(res.offset_x, 63);
        assert_eq!(res.offset_y, 78);
    }

    #[test]
    fn fit_is_stable() {
        for natural in [
            Dimensions::new(1920, 1080),
            Dimensions::new(300, 400),
            Dimensions::new(1000, 1000),
            Dimensions::new(123, 987),
        ] {
            let first = fit(natural, layout(1024));
            let second =
                fit(Dimensions::new(first.width, first.height), layout(1024));

            assert_eq!(first, second, "{natural:?}");
        }
    }

    #[test]
    fn aspect_ratio_is_kept() {
        let natural = Dimensions::new(1280, 720);
        let res = fit(natural, layout(600));

        let expected = f64::from(natural.width) / f64::from(natural.height);
        let actual = f64::from(res.width) / f64::from(res.height);
        assert!((expected - actual).abs() < 0.01);
    }

    #[test]
    fn zero_dimensions_fall_back() {
        let res = fit(Dimensions::new(0, 0), layout(1024));

        assert_eq!(res, fit(Dimensions::FALLBACK, layout(1024)));
        assert_eq!(Dimensions::new(0, 50).or_fallback(), Dimensions::new(300, 50));
    }

    #[test]
    fn orientation() {
        assert_eq!(
            Orientation::of(Dimensions::new(1920, 1080)),
            Orientation::Landscape
        );
        assert_eq!(
            Orientation::of(Dimensions::new(600, 900)),
            Orientation::Portrait
        );
        assert_eq!(
            Orientation::of(Dimensions::new(500, 500)),
            Orientation::Portrait
        );
    }
}
