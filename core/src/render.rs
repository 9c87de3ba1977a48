//! Markup for the result region and the animal-management list.
//!
//! `render` always redraws both regions from `AppState`, so calling it twice
//! on the same state yields the same output.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::image::resolve_image;
use crate::state::{AppState, QuizPhase};
use crate::types::Animal;

pub fn render(state: &AppState) -> String {
    let result = match (state.quiz, state.result.as_deref()) {
        (QuizPhase::ResultShown, Some(name)) => render_result(name),
        _ => String::new(),
    };
    let detail = state
        .selected
        .as_ref()
        .map(|animal| {
            format!(
                "<div id=\"animal-detail\"><p>#{} {} ({})</p></div>\n",
                encode_text(&animal.id.to_string()),
                encode_text(&animal.name),
                encode_text(&animal.kind),
            )
        })
        .unwrap_or_default();
    format!(
        "<div id=\"result\">{result}</div>\n{detail}<div id=\"animal-list\">{}</div>",
        render_animal_list(&state.animals)
    )
}

/// Result text followed by the matching image.
pub fn render_result(animal: &str) -> String {
    format!(
        "Looks like you're a {}!<br><img src=\"{}\" alt=\"{}\" style=\"max-width: 300px; height: auto;\">",
        encode_text(animal),
        resolve_image(animal),
        encode_double_quoted_attribute(animal),
    )
}

/// One row per animal, each with a delete button addressed by id.
pub fn render_animal_list(animals: &[Animal]) -> String {
    animals
        .iter()
        .map(|animal| {
            format!(
                "<div><p>{} ({})</p><button data-id=\"{}\" class=\"delete-button\">Delete</button></div>",
                encode_text(&animal.name),
                encode_text(&animal.kind),
                encode_double_quoted_attribute(&animal.id.to_string()),
            )
        })
        .collect()
}
