use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::Item;

/// Loads catalog items from a CSV file into `items`, in file order.
///
/// The first line is a header and is discarded without validation. Each data
/// line is split on commas with no quoting or escaping (a comma inside a
/// title corrupts that row) and kept only if it yields exactly 4 fields, each
/// trimmed before storage. Rows with any other field count are dropped
/// silently.
///
/// Appending into a caller-owned vec means a read error partway through the
/// file leaves the rows loaded so far intact; the caller reports the error
/// and continues with the partial catalog.
pub fn load_catalog(path: impl AsRef<Path>, items: &mut Vec<Item>) -> AppResult<()> {
    let path = path.as_ref();
    let file = File::open(path).map_err(AppError::CatalogLoad)?;
    let reader = BufReader::new(file);

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(AppError::CatalogLoad)?;
        // Header line carries no data
        if index == 0 {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            continue;
        }

        items.push(Item::new(
            fields[0].trim().to_string(),
            fields[1].trim().to_string(),
            fields[2].trim().to_string(),
            fields[3].trim().to_string(),
        ));
    }

    tracing::info!(items = items.len(), path = %path.display(), "Catalog loaded");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_loads_rows_in_file_order() {
        let file = write_catalog_file(
            "Title,Type,Genre,Language\n\
             The Matrix,Movies,Action,Hindi\n\
             Kingdom,WebSeries,Thriller,K-Drama\n",
        );

        let mut items = Vec::new();
        load_catalog(file.path(), &mut items).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "The Matrix");
        assert_eq!(items[0].content_type, "Movies");
        assert_eq!(items[0].genre, "Action");
        assert_eq!(items[0].language, "Hindi");
        assert_eq!(items[1].title, "Kingdom");
    }

    #[test]
    fn test_trims_whitespace_around_fields() {
        let file = write_catalog_file("Title,Type,Genre,Language\n  Dune , Books ,Drama , English \n");

        let mut items = Vec::new();
        load_catalog(file.path(), &mut items).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Dune");
        assert_eq!(items[0].content_type, "Books");
        assert_eq!(items[0].genre, "Drama");
        assert_eq!(items[0].language, "English");
    }

    #[test]
    fn test_skips_rows_with_wrong_field_count() {
        let file = write_catalog_file(
            "Title,Type,Genre,Language\n\
             Too Few,Books,Drama\n\
             Dune,Books,Drama,English\n\
             Too, Many, Fields, Here, Extra\n\
             Kingdom,WebSeries,Thriller,K-Drama\n",
        );

        let mut items = Vec::new();
        load_catalog(file.path(), &mut items).unwrap();

        // Malformed rows vanish without disturbing the valid ones around them
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Dune");
        assert_eq!(items[1].title, "Kingdom");
    }

    #[test]
    fn test_preserves_empty_trailing_field() {
        let file = write_catalog_file("Title,Type,Genre,Language\nNameless,Books,Drama,\n");

        let mut items = Vec::new();
        load_catalog(file.path(), &mut items).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].language, "");
    }

    #[test]
    fn test_comma_in_title_corrupts_the_row() {
        // No quoting support: the extra comma makes this a 5-field row
        let file = write_catalog_file("Title,Type,Genre,Language\nCrouching Tiger, Hidden Dragon,Movies,Action,Hindi\n");

        let mut items = Vec::new();
        load_catalog(file.path(), &mut items).unwrap();

        assert!(items.is_empty());
    }

    #[test]
    fn test_header_is_always_skipped() {
        // Even a data-shaped first line is treated as the header
        let file = write_catalog_file("Dune,Books,Drama,English\nKingdom,WebSeries,Thriller,K-Drama\n");

        let mut items = Vec::new();
        load_catalog(file.path(), &mut items).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Kingdom");
    }

    #[test]
    fn test_header_only_file_yields_empty_catalog() {
        let file = write_catalog_file("Title,Type,Genre,Language\n");

        let mut items = Vec::new();
        load_catalog(file.path(), &mut items).unwrap();

        assert!(items.is_empty());
    }

    #[test]
    fn test_missing_file_reports_catalog_load_error() {
        let mut items = Vec::new();
        let err = load_catalog("/nonexistent/data.csv", &mut items).unwrap_err();

        assert!(matches!(err, AppError::CatalogLoad(_)));
        assert!(err.to_string().starts_with("Error reading CSV file: "));
        assert!(items.is_empty());
    }
}
