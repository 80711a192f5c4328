//! Move stats and the per-pokemon move lists (level-up learnsets, starting
//! movesets).

use serde::{Deserialize, Serialize};

use crate::envelope::{IdRef, ReadAttributes, ResourceType, ToRequest, WriteAttributes};
use crate::types::names::{MoveNameObject, TypeNameObject};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveStatsAttributes {
    pub effect: u8,
    pub power: u8,
    pub r#type: IdRef,
    pub accuracy: f32,
    pub pp: u8,
}

impl WriteAttributes for MoveStatsAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::MoveStats;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveStatsResource {
    pub effect: u8,
    pub power: u8,
    pub r#type: TypeNameObject,
    pub accuracy: f32,
    pub pp: u8,
}

impl ReadAttributes for MoveStatsResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::MoveStats;
}

impl ToRequest for MoveStatsResource {
    type Request = MoveStatsAttributes;

    fn to_request(&self) -> MoveStatsAttributes {
        MoveStatsAttributes {
            effect: self.effect,
            power: self.power,
            r#type: self.r#type.id_ref(),
            accuracy: self.accuracy,
            pp: self.pp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonLearnsetAttributes {
    pub learnset: Vec<LearnsetEntryAttributes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnsetEntryAttributes {
    pub level: u8,
    pub r#move: IdRef,
}

impl WriteAttributes for PokemonLearnsetAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonLearnsets;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonLearnsetResource {
    pub learnset: Vec<LearnsetEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnsetEntry {
    pub level: u8,
    pub r#move: MoveNameObject,
}

impl ReadAttributes for PokemonLearnsetResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonLearnsets;
}

impl ToRequest for PokemonLearnsetResource {
    type Request = PokemonLearnsetAttributes;

    fn to_request(&self) -> PokemonLearnsetAttributes {
        PokemonLearnsetAttributes {
            learnset: self
                .learnset
                .iter()
                .map(|entry| LearnsetEntryAttributes {
                    level: entry.level,
                    r#move: entry.r#move.id_ref(),
                })
                .collect(),
        }
    }
}

/// Up to four moves a pokemon starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMovesetAttributes {
    pub moveset: Vec<MovesetEntryAttributes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovesetEntryAttributes {
    pub r#move: IdRef,
}

impl WriteAttributes for PokemonMovesetAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonMovesets;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonMovesetResource {
    pub moveset: Vec<MovesetEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovesetEntry {
    pub r#move: MoveNameObject,
}

impl ReadAttributes for PokemonMovesetResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonMovesets;
}

impl ToRequest for PokemonMovesetResource {
    type Request = PokemonMovesetAttributes;

    fn to_request(&self) -> PokemonMovesetAttributes {
        PokemonMovesetAttributes {
            moveset: self
                .moveset
                .iter()
                .map(|entry| MovesetEntryAttributes {
                    r#move: entry.r#move.id_ref(),
                })
                .collect(),
        }
    }
}
