//! Evolution tables.
//!
//! # Design
//! An evolution is triggered by reaching a level, by using an item, or by
//! trading. Each trigger carries different fields, so both the write and read
//! shapes are enums internally tagged by `evolution_type`: a level evolution
//! that also names an item cannot be built, and a payload whose tag does not
//! match its fields fails to decode.

use serde::{Deserialize, Serialize};

use crate::envelope::{IdRef, ReadAttributes, ResourceType, ToRequest, WriteAttributes};
use crate::types::names::{ItemNameObject, PokemonNameObject};

/// Write-side evolution entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "evolution_type", rename_all = "snake_case")]
pub enum EvolutionAttributes {
    Level { level: u8, pokemon: IdRef },
    Item { item: IdRef, pokemon: IdRef },
    Trade { pokemon: IdRef },
}

impl EvolutionAttributes {
    pub fn level(level: u8, pokemon: u32) -> Self {
        EvolutionAttributes::Level {
            level,
            pokemon: IdRef::from(pokemon),
        }
    }

    pub fn item(item: u32, pokemon: u32) -> Self {
        EvolutionAttributes::Item {
            item: IdRef::from(item),
            pokemon: IdRef::from(pokemon),
        }
    }

    pub fn trade(pokemon: u32) -> Self {
        EvolutionAttributes::Trade {
            pokemon: IdRef::from(pokemon),
        }
    }

    /// The pokemon evolved into.
    pub fn pokemon(&self) -> &IdRef {
        match self {
            EvolutionAttributes::Level { pokemon, .. }
            | EvolutionAttributes::Item { pokemon, .. }
            | EvolutionAttributes::Trade { pokemon } => pokemon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEvolutionsAttributes {
    pub evolutions: Vec<EvolutionAttributes>,
}

impl WriteAttributes for PokemonEvolutionsAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonEvolutions;
}

/// Read-side evolution entry with the target pokemon and item embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "evolution_type", rename_all = "snake_case")]
pub enum Evolution {
    Level {
        level: u8,
        pokemon: PokemonNameObject,
    },
    Item {
        item: ItemNameObject,
        pokemon: PokemonNameObject,
    },
    Trade {
        pokemon: PokemonNameObject,
    },
}

impl Evolution {
    pub fn pokemon(&self) -> &PokemonNameObject {
        match self {
            Evolution::Level { pokemon, .. }
            | Evolution::Item { pokemon, .. }
            | Evolution::Trade { pokemon } => pokemon,
        }
    }

    pub fn level(&self) -> Option<u8> {
        match self {
            Evolution::Level { level, .. } => Some(*level),
            _ => None,
        }
    }

    pub fn item(&self) -> Option<&ItemNameObject> {
        match self {
            Evolution::Item { item, .. } => Some(item),
            _ => None,
        }
    }

    pub fn to_attributes(&self) -> EvolutionAttributes {
        match self {
            Evolution::Level { level, pokemon } => EvolutionAttributes::Level {
                level: *level,
                pokemon: pokemon.id_ref(),
            },
            Evolution::Item { item, pokemon } => EvolutionAttributes::Item {
                item: item.id_ref(),
                pokemon: pokemon.id_ref(),
            },
            Evolution::Trade { pokemon } => EvolutionAttributes::Trade {
                pokemon: pokemon.id_ref(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonEvolutionsResource {
    pub evolutions: Vec<Evolution>,
}

impl ReadAttributes for PokemonEvolutionsResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonEvolutions;
}

impl ToRequest for PokemonEvolutionsResource {
    type Request = PokemonEvolutionsAttributes;

    fn to_request(&self) -> PokemonEvolutionsAttributes {
        PokemonEvolutionsAttributes {
            evolutions: self.evolutions.iter().map(Evolution::to_attributes).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::RequestEnvelope;
    use serde_json::json;

    fn pokemon(id: &str, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "type": "pokemon_names",
            "attributes": {"name": name},
            "links": {"self": format!("https://api.pkmnapi.com/v1/pokemon/names/{id}")}
        })
    }

    fn item(id: &str, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "type": "item_names",
            "attributes": {"name": name},
            "links": {"self": format!("https://api.pkmnapi.com/v1/items/names/{id}")}
        })
    }

    #[test]
    fn write_variants_serialize_with_discriminant() {
        let envelope = RequestEnvelope::new(PokemonEvolutionsAttributes {
            evolutions: vec![
                EvolutionAttributes::level(16, 2),
                EvolutionAttributes::item(10, 26),
                EvolutionAttributes::trade(65),
            ],
        });
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "data": {
                    "type": "pokemon_evolutions",
                    "attributes": {
                        "evolutions": [
                            {"evolution_type": "level", "level": 16, "pokemon": {"id": "2"}},
                            {"evolution_type": "item", "item": {"id": "10"}, "pokemon": {"id": "26"}},
                            {"evolution_type": "trade", "pokemon": {"id": "65"}}
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn level_evolution_exposes_level_and_no_item() {
        let evolution: Evolution = serde_json::from_value(json!({
            "evolution_type": "level",
            "level": 16,
            "pokemon": pokemon("2", "IVYSAUR")
        }))
        .unwrap();
        assert_eq!(evolution.level(), Some(16));
        assert!(evolution.item().is_none());
        assert_eq!(evolution.pokemon().attributes.name, "IVYSAUR");
    }

    #[test]
    fn item_evolution_exposes_item_and_no_level() {
        let evolution: Evolution = serde_json::from_value(json!({
            "evolution_type": "item",
            "item": item("10", "MOON STONE"),
            "pokemon": pokemon("36", "CLEFABLE")
        }))
        .unwrap();
        assert_eq!(evolution.level(), None);
        assert_eq!(evolution.item().unwrap().attributes.name, "MOON STONE");
    }

    #[test]
    fn trade_evolution_has_target_only() {
        let evolution: Evolution = serde_json::from_value(json!({
            "evolution_type": "trade",
            "pokemon": pokemon("65", "ALAKAZAM")
        }))
        .unwrap();
        assert_eq!(evolution.to_attributes(), EvolutionAttributes::trade(65));
    }

    #[test]
    fn unknown_discriminant_fails() {
        let result: Result<Evolution, _> = serde_json::from_value(json!({
            "evolution_type": "friendship",
            "pokemon": pokemon("2", "IVYSAUR")
        }));
        assert!(result.is_err());
    }

    #[test]
    fn discriminant_without_its_fields_fails() {
        let result: Result<Evolution, _> = serde_json::from_value(json!({
            "evolution_type": "item",
            "level": 16,
            "pokemon": pokemon("2", "IVYSAUR")
        }));
        assert!(result.is_err());
    }

    #[test]
    fn resource_maps_back_to_write_shape() {
        let resource: PokemonEvolutionsResource = serde_json::from_value(json!({
            "evolutions": [
                {"evolution_type": "level", "level": 16, "pokemon": pokemon("2", "IVYSAUR")},
                {"evolution_type": "item", "item": item("10", "MOON STONE"), "pokemon": pokemon("36", "CLEFABLE")}
            ]
        }))
        .unwrap();
        assert_eq!(
            resource.to_request().evolutions,
            vec![
                EvolutionAttributes::level(16, 2),
                EvolutionAttributes::item(10, 36)
            ]
        );
    }
}
