//! Pokedex entries and flavour texts.

use serde::{Deserialize, Serialize};

use crate::envelope::{ReadAttributes, ResourceType, ToRequest, WriteAttributes};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexEntryAttributes {
    pub species: String,
    pub height: u32,
    pub weight: u32,
}

impl WriteAttributes for PokedexEntryAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokedexEntries;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexEntryResource {
    pub species: String,
    pub height: u32,
    pub weight: u32,
}

impl ReadAttributes for PokedexEntryResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokedexEntries;
}

impl ToRequest for PokedexEntryResource {
    type Request = PokedexEntryAttributes;

    fn to_request(&self) -> PokedexEntryAttributes {
        PokedexEntryAttributes {
            species: self.species.clone(),
            height: self.height,
            weight: self.weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexTextAttributes {
    pub text: String,
}

impl WriteAttributes for PokedexTextAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokedexTexts;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexTextResource {
    pub text: String,
}

impl ReadAttributes for PokedexTextResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokedexTexts;
}

impl ToRequest for PokedexTextResource {
    type Request = PokedexTextAttributes;

    fn to_request(&self) -> PokedexTextAttributes {
        PokedexTextAttributes {
            text: self.text.clone(),
        }
    }
}
