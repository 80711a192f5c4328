//! Trainer parties and prize money.

use serde::{Deserialize, Serialize};

use crate::envelope::{IdRef, ReadAttributes, ResourceType, ToRequest, WriteAttributes};
use crate::types::names::PokemonNameObject;

/// Every party a trainer class fields, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerPartiesAttributes {
    pub parties: Vec<PartyAttributes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyAttributes {
    pub party: Vec<PartyMemberAttributes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyMemberAttributes {
    pub level: u8,
    pub pokemon: IdRef,
}

impl WriteAttributes for TrainerPartiesAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::TrainerParties;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerPartiesResource {
    pub parties: Vec<Party>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub party: Vec<PartyMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyMember {
    pub level: u8,
    pub pokemon: PokemonNameObject,
}

impl ReadAttributes for TrainerPartiesResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::TrainerParties;
}

impl ToRequest for TrainerPartiesResource {
    type Request = TrainerPartiesAttributes;

    fn to_request(&self) -> TrainerPartiesAttributes {
        TrainerPartiesAttributes {
            parties: self
                .parties
                .iter()
                .map(|party| PartyAttributes {
                    party: party
                        .party
                        .iter()
                        .map(|member| PartyMemberAttributes {
                            level: member.level,
                            pokemon: member.pokemon.id_ref(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerRewardAttributes {
    pub reward: u32,
}

impl WriteAttributes for TrainerRewardAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::TrainerRewards;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerRewardResource {
    pub reward: u32,
}

impl ReadAttributes for TrainerRewardResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::TrainerRewards;
}

impl ToRequest for TrainerRewardResource {
    type Request = TrainerRewardAttributes;

    fn to_request(&self) -> TrainerRewardAttributes {
        TrainerRewardAttributes {
            reward: self.reward,
        }
    }
}
