use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One recommendable entity loaded from the catalog file.
///
/// All four fields are stored as loaded (whitespace-trimmed); the loader
/// performs no schema validation beyond column count, so a row with an
/// unrecognized type or genre is kept verbatim and simply never matches a
/// menu selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Display name of the item
    pub title: String,
    /// Content category, compared case-insensitively against [`ContentType`]
    pub content_type: String,
    /// Genre, compared case-insensitively against [`Genre`]
    pub genre: String,
    /// Language or market (e.g. Hindi, English, K-Drama, Hollywood)
    pub language: String,
}

impl Item {
    /// Creates a new catalog item
    pub fn new(title: String, content_type: String, genre: String, language: String) -> Self {
        Self {
            title,
            content_type,
            genre,
            language,
        }
    }
}

/// Top-level content category offered in the type menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Books,
    Movies,
    WebSeries,
}

impl ContentType {
    /// All selectable types, in menu order
    pub const ALL: [ContentType; 3] = [ContentType::Books, ContentType::Movies, ContentType::WebSeries];

    /// Menu label for this type
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Books => "Books",
            ContentType::Movies => "Movies",
            ContentType::WebSeries => "WebSeries",
        }
    }

    /// Case-insensitive match against an item's stored type string
    pub fn matches(&self, content_type: &str) -> bool {
        content_type.eq_ignore_ascii_case(self.label())
    }

    /// Per-type language gate.
    ///
    /// Movies are restricted to Hindi (Bollywood only); web series to Hindi,
    /// K-Drama, or Hollywood; books carry no language constraint.
    pub fn language_allowed(&self, language: &str) -> bool {
        match self {
            ContentType::Books => true,
            ContentType::Movies => language.eq_ignore_ascii_case("Hindi"),
            ContentType::WebSeries => ["Hindi", "K-Drama", "Hollywood"]
                .iter()
                .any(|allowed| language.eq_ignore_ascii_case(allowed)),
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Genre offered in the genre menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Thriller,
    RomCom,
    Comedy,
    Romance,
    Action,
    Family,
    Drama,
    Suspense,
    Horror,
    Fantasy,
}

impl Genre {
    /// All selectable genres, in menu order
    pub const ALL: [Genre; 10] = [
        Genre::Thriller,
        Genre::RomCom,
        Genre::Comedy,
        Genre::Romance,
        Genre::Action,
        Genre::Family,
        Genre::Drama,
        Genre::Suspense,
        Genre::Horror,
        Genre::Fantasy,
    ];

    /// Menu label for this genre
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Thriller => "Thriller",
            Genre::RomCom => "Rom-Com",
            Genre::Comedy => "Comedy",
            Genre::Romance => "Romance",
            Genre::Action => "Action",
            Genre::Family => "Family",
            Genre::Drama => "Drama",
            Genre::Suspense => "Suspense",
            Genre::Horror => "Horror",
            Genre::Fantasy => "Fantasy",
        }
    }

    /// Case-insensitive match against an item's stored genre string
    pub fn matches(&self, genre: &str) -> bool {
        genre.eq_ignore_ascii_case(self.label())
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
