//! Technical and hidden machines: the move each one teaches, TM prices, and
//! the machine compatibility list of every pokemon.

use serde::{Deserialize, Serialize};

use crate::envelope::{
    EmbeddedObject, IdRef, ReadAttributes, ResourceType, ToRequest, WriteAttributes,
};
use crate::types::names::MoveNameObject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmMoveAttributes {
    pub r#move: IdRef,
}

impl WriteAttributes for TmMoveAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::TmMoves;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmMoveResource {
    pub r#move: MoveNameObject,
}

impl ReadAttributes for TmMoveResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::TmMoves;
}

impl ToRequest for TmMoveResource {
    type Request = TmMoveAttributes;

    fn to_request(&self) -> TmMoveAttributes {
        TmMoveAttributes {
            r#move: self.r#move.id_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmMoveAttributes {
    pub r#move: IdRef,
}

impl WriteAttributes for HmMoveAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::HmMoves;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HmMoveResource {
    pub r#move: MoveNameObject,
}

impl ReadAttributes for HmMoveResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::HmMoves;
}

impl ToRequest for HmMoveResource {
    type Request = HmMoveAttributes;

    fn to_request(&self) -> HmMoveAttributes {
        HmMoveAttributes {
            r#move: self.r#move.id_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmPriceAttributes {
    pub price: u32,
}

impl WriteAttributes for TmPriceAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::TmPrices;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmPriceResource {
    pub price: u32,
}

impl ReadAttributes for TmPriceResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::TmPrices;
}

impl ToRequest for TmPriceResource {
    type Request = TmPriceAttributes;

    fn to_request(&self) -> TmPriceAttributes {
        TmPriceAttributes { price: self.price }
    }
}

/// Write-side machine stub: `{"id": "1", "type": "tm_moves"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MachineRef {
    TmMoves { id: String },
    HmMoves { id: String },
}

impl MachineRef {
    pub fn tm(id: u32) -> Self {
        MachineRef::TmMoves { id: id.to_string() }
    }

    pub fn hm(id: u32) -> Self {
        MachineRef::HmMoves { id: id.to_string() }
    }

    pub fn id(&self) -> &str {
        match self {
            MachineRef::TmMoves { id } | MachineRef::HmMoves { id } => id,
        }
    }
}

/// A machine embedded in a compatibility list, discriminated by its `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Machine {
    #[serde(rename = "tm_moves")]
    Tm(EmbeddedObject<TmMoveResource>),
    #[serde(rename = "hm_moves")]
    Hm(EmbeddedObject<HmMoveResource>),
}

impl Machine {
    pub fn id(&self) -> &str {
        match self {
            Machine::Tm(object) => &object.id,
            Machine::Hm(object) => &object.id,
        }
    }

    /// The move taught by this machine.
    pub fn taught_move(&self) -> &MoveNameObject {
        match self {
            Machine::Tm(object) => &object.attributes.r#move,
            Machine::Hm(object) => &object.attributes.r#move,
        }
    }

    pub fn to_ref(&self) -> MachineRef {
        match self {
            Machine::Tm(object) => MachineRef::TmMoves {
                id: object.id.clone(),
            },
            Machine::Hm(object) => MachineRef::HmMoves {
                id: object.id.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMachinesAttributes {
    pub machines: Vec<MachineRef>,
}

impl WriteAttributes for PokemonMachinesAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonMachines;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonMachinesResource {
    pub machines: Vec<Machine>,
}

impl ReadAttributes for PokemonMachinesResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonMachines;
}

impl ToRequest for PokemonMachinesResource {
    type Request = PokemonMachinesAttributes;

    fn to_request(&self) -> PokemonMachinesAttributes {
        PokemonMachinesAttributes {
            machines: self.machines.iter().map(Machine::to_ref).collect(),
        }
    }
}
