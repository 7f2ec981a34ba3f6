use shared::{Generation, PokemonSlot};

pub const LEVEL_MIN: u8 = 1;
pub const LEVEL_MAX: u8 = 100;

/// Clamp a level input to the valid range. Out-of-range values are pulled
/// to the nearest bound rather than rejected.
pub fn clamp_level(level: i64) -> u8 {
    level.clamp(LEVEL_MIN as i64, LEVEL_MAX as i64) as u8
}

/// Names of required team fields that are missing, in form order. The
/// labels match the editor form labels so the error message reads naturally.
pub fn missing_team_fields(
    name: &str,
    generation: Option<Generation>,
    slots: &[PokemonSlot],
) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if name.trim().is_empty() {
        missing.push("Team Name");
    }
    if generation.is_none() {
        missing.push("Generation");
    }
    if !slots.iter().any(|slot| !slot.species.is_empty()) {
        missing.push("Pokémon");
    }
    missing
}
