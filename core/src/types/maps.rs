//! Wild encounter tables per map.

use serde::{Deserialize, Serialize};

use crate::envelope::{IdRef, ReadAttributes, ResourceType, ToRequest, WriteAttributes};
use crate::types::names::PokemonNameObject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPokemonAttributes {
    pub grass: EncounterAreaAttributes,
    pub water: EncounterAreaAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterAreaAttributes {
    pub encounter_rate: u8,
    pub pokemon: Vec<EncounterAttributes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterAttributes {
    pub level: u8,
    pub pokemon: IdRef,
}

impl WriteAttributes for MapPokemonAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::MapPokemon;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPokemonResource {
    pub grass: EncounterArea,
    pub water: EncounterArea,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterArea {
    pub encounter_rate: u8,
    pub pokemon: Vec<Encounter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub level: u8,
    pub pokemon: PokemonNameObject,
}

impl EncounterArea {
    fn to_attributes(&self) -> EncounterAreaAttributes {
        EncounterAreaAttributes {
            encounter_rate: self.encounter_rate,
            pokemon: self
                .pokemon
                .iter()
                .map(|encounter| EncounterAttributes {
                    level: encounter.level,
                    pokemon: encounter.pokemon.id_ref(),
                })
                .collect(),
        }
    }
}

impl ReadAttributes for MapPokemonResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::MapPokemon;
}

impl ToRequest for MapPokemonResource {
    type Request = MapPokemonAttributes;

    fn to_request(&self) -> MapPokemonAttributes {
        MapPokemonAttributes {
            grass: self.grass.to_attributes(),
            water: self.water.to_attributes(),
        }
    }
}
