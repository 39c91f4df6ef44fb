use regex::Regex;

/// Hygiene for user-typed search input: control characters become spaces,
/// whitespace runs collapse, ends are trimmed. Case folding and matching stay
/// in the catalog store so the semantics live in one place.
pub fn clean_query(input: &str) -> String {
    let strip = Regex::new(r"[\x00-\x1f\x7f]").unwrap();
    let replaced = strip.replace_all(input, " ").into_owned();

    let collapse = Regex::new(r" +").unwrap();
    collapse.replace_all(replaced.trim(), " ").into_owned()
}

/// Facet query params arrive comma-separated ("pedigree,whiskas").
pub fn facet_values(param: &str) -> impl Iterator<Item = &str> {
    param.split(',').map(str::trim).filter(|v| !v.is_empty())
}
