use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine generation labels the backend accepts, serialized exactly as the
/// backend stores them (`"Gen I"` … `"Gen IX"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Generation {
    #[serde(rename = "Gen I")]
    GenI,
    #[serde(rename = "Gen II")]
    GenII,
    #[serde(rename = "Gen III")]
    GenIII,
    #[serde(rename = "Gen IV")]
    GenIV,
    #[serde(rename = "Gen V")]
    GenV,
    #[serde(rename = "Gen VI")]
    GenVI,
    #[serde(rename = "Gen VII")]
    GenVII,
    #[serde(rename = "Gen VIII")]
    GenVIII,
    #[serde(rename = "Gen IX")]
    GenIX,
}

impl Generation {
    /// All generations in release order, for dropdowns.
    pub fn all() -> &'static [Generation] {
        &[
            Generation::GenI,
            Generation::GenII,
            Generation::GenIII,
            Generation::GenIV,
            Generation::GenV,
            Generation::GenVI,
            Generation::GenVII,
            Generation::GenVIII,
            Generation::GenIX,
        ]
    }

    /// Display label, identical to the wire value.
    pub fn label(&self) -> &'static str {
        match self {
            Generation::GenI => "Gen I",
            Generation::GenII => "Gen II",
            Generation::GenIII => "Gen III",
            Generation::GenIV => "Gen IV",
            Generation::GenV => "Gen V",
            Generation::GenVI => "Gen VI",
            Generation::GenVII => "Gen VII",
            Generation::GenVIII => "Gen VIII",
            Generation::GenIX => "Gen IX",
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn default_level() -> u8 {
    1
}

/// One Pokémon slot in a team.
///
/// `name` is the optional nickname; a slot only counts toward the team when
/// `species` is non-empty. `sprite_id` is the numeric id used to build the
/// sprite CDN URL (see [`crate::utils::sprite_url`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonSlot {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub species: String,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_id: Option<u32>,
}

impl PokemonSlot {
    /// Label shown in team lists: `Nickname (Species)` or just the species.
    pub fn display_label(&self) -> String {
        if self.name.is_empty() {
            self.species.clone()
        } else {
            format!("{} ({})", self.name, self.species)
        }
    }
}

/// A Pokémon team as exchanged with the backend.
///
/// `id` is backend-assigned and absent before the first save. The favorite
/// flag travels as `isFavorite` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub generation: Generation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
    pub pokemon: Vec<PokemonSlot>,
}

/// Partial update body for the favorite toggle (`PATCH /teams/{id}/`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteUpdate {
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_team() -> Team {
        Team {
            id: Some(7),
            name: "Kanto Classics".to_string(),
            generation: Generation::GenI,
            description: Some("Starter squad".to_string()),
            is_favorite: true,
            pokemon: vec![PokemonSlot {
                name: "Sparky".to_string(),
                species: "Pikachu".to_string(),
                level: 42,
                sprite_id: Some(25),
            }],
        }
    }

    #[test]
    fn team_serializes_favorite_as_camel_case() {
        let json = serde_json::to_value(sample_team()).expect("serialize");
        assert_eq!(json["isFavorite"], true);
        assert_eq!(json["generation"], "Gen I");
        assert!(json.get("is_favorite").is_none());
    }

    #[test]
    fn team_deserializes_backend_shape() {
        let json = r#"{
            "id": 3,
            "name": "Rain Dance",
            "generation": "Gen III",
            "isFavorite": false,
            "pokemon": [{"species": "Kyogre", "level": 70}]
        }"#;
        let team: Team = serde_json::from_str(json).expect("deserialize");
        assert_eq!(team.generation, Generation::GenIII);
        assert_eq!(team.pokemon[0].species, "Kyogre");
        assert_eq!(team.pokemon[0].name, "");
        assert!(team.description.is_none());
    }

    #[test]
    fn slot_level_defaults_to_one() {
        let slot: PokemonSlot =
            serde_json::from_str(r#"{"species":"Gengar"}"#).expect("deserialize");
        assert_eq!(slot.level, 1);
    }

    #[test]
    fn slot_display_label_includes_nickname() {
        let team = sample_team();
        assert_eq!(team.pokemon[0].display_label(), "Sparky (Pikachu)");

        let plain = PokemonSlot {
            name: String::new(),
            species: "Dragonite".to_string(),
            level: 55,
            sprite_id: None,
        };
        assert_eq!(plain.display_label(), "Dragonite");
    }

    #[test]
    fn generation_labels_round_trip() {
        for gen in Generation::all() {
            let json = serde_json::to_string(gen).expect("serialize");
            let back: Generation = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(*gen, back);
        }
    }
}
