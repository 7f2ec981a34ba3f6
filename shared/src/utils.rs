//! Shared helpers used by both the client and tooling.

/// Sprite CDN base. The backend stores only the numeric sprite id; the image
/// itself is served from the public PokeAPI sprite repository.
const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Build the sprite image URL for a numeric sprite id.
pub fn sprite_url(sprite_id: u32) -> String {
    format!("{}/{}.png", SPRITE_BASE_URL, sprite_id)
}

/// Truncate a free-text description for card display.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated.trim_end())
}
