use std::io::{BufRead, Write};

use crate::error::AppResult;
use crate::models::{ContentType, Genre, Item};
use crate::prompt::prompt_choice;
use crate::recommend::recommend;

/// Runs one interactive recommendation session: prompt for a content type,
/// prompt for a genre, print the matching items (or a single no-match line)
/// and return. One recommendation per process invocation; there is no loop
/// back to the type menu.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    catalog: &[Item],
) -> AppResult<()> {
    let type_labels: Vec<&str> = ContentType::ALL.iter().map(|t| t.label()).collect();
    let selected_type = ContentType::ALL[prompt_choice(input, output, "content type", &type_labels)?];

    let genre_labels: Vec<&str> = Genre::ALL.iter().map(|g| g.label()).collect();
    let selected_genre = Genre::ALL[prompt_choice(input, output, "genre", &genre_labels)?];

    tracing::debug!(content_type = %selected_type, genre = %selected_genre, "Selection made");

    writeln!(
        output,
        "\nRecommendations for you ({} - {}):",
        selected_type, selected_genre
    )?;

    let matches = recommend(catalog, selected_type, selected_genre);
    if matches.is_empty() {
        writeln!(output, "No recommendations found in that category and genre.")?;
    } else {
        for item in matches {
            writeln!(output, "- {} [{}]", item.title, item.language)?;
        }
    }

    Ok(())
}
