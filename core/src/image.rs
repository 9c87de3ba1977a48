//! Static image lookup for quiz results.

pub const PENGUIN_IMAGE: &str = "https://www.cabq.gov/artsculture/biopark/news/10-cool-facts-about-penguins/@@images/1a36b305-412d-405e-a38b-0947ce6709ba.jpeg";
pub const KOALA_IMAGE: &str =
    "https://animalfactguide.com/wp-content/uploads/2022/03/koala_iStock-140396797-scaled.jpg";
pub const DOG_IMAGE: &str = "https://images.unsplash.com/photo-1507146426996-ef05306b995a?fm=jpg&q=60&w=3000";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300";

/// Image URL for an animal name. Unknown names get the placeholder.
pub fn resolve_image(animal: &str) -> &'static str {
    match animal {
        "Penguin" => PENGUIN_IMAGE,
        "Koala" => KOALA_IMAGE,
        "Dog" => DOG_IMAGE,
        _ => PLACEHOLDER_IMAGE,
    }
}
