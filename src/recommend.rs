use crate::models::{ContentType, Genre, Item};

/// Filters the catalog down to items matching the selected type and genre.
///
/// An item is included iff its type and genre match the selections
/// (case-insensitively) and its language passes the per-type gate. Matches
/// are returned in catalog order; no ranking, no deduplication.
pub fn recommend<'a>(catalog: &'a [Item], content_type: ContentType, genre: Genre) -> Vec<&'a Item> {
    catalog
        .iter()
        .filter(|item| content_type.matches(&item.content_type))
        .filter(|item| genre.matches(&item.genre))
        .filter(|item| content_type.language_allowed(&item.language))
        .collect()
}
