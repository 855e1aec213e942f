use once_cell::sync::Lazy;

/// Select `<div id="grid-opere">`, receiving the cards.
pub(crate) static GRID_SELECTOR: Lazy<kuchiki::Selectors> = Lazy::new(|| {
    kuchiki::Selectors::compile("#grid-opere").expect("invalid grid selector")
});

/// Select `<div id="modal">`, the detail overlay.
pub(crate) static MODAL_SELECTOR: Lazy<kuchiki::Selectors> = Lazy::new(|| {
    kuchiki::Selectors::compile("#modal").expect("invalid modal selector")
});

/// Select `<div class="modal-content">`, inside the overlay.
pub(crate) static MODAL_CONTENT_SELECTOR: Lazy<kuchiki::Selectors> =
    Lazy::new(|| {
        kuchiki::Selectors::compile(".modal-content")
            .expect("invalid modal content selector")
    });
