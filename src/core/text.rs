use scraper::ElementRef;

/// Visible text of an element with runs of whitespace collapsed.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive name comparison used for every catalog lookup.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// First `<table>` among the following siblings of `heading`.
pub(crate) fn next_table_sibling<'a>(heading: ElementRef<'a>) -> Option<ElementRef<'a>> {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
}
