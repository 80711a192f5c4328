//! In-game NPC trades.

use serde::{Deserialize, Serialize};

use crate::envelope::{IdRef, ReadAttributes, ResourceType, ToRequest, WriteAttributes};
use crate::types::names::PokemonNameObject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeAttributes {
    pub give: IdRef,
    pub get: IdRef,
    pub nickname: String,
}

impl WriteAttributes for TradeAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::Trades;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeResource {
    pub give: PokemonNameObject,
    pub get: PokemonNameObject,
    pub nickname: String,
}

impl ReadAttributes for TradeResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::Trades;
}

impl ToRequest for TradeResource {
    type Request = TradeAttributes;

    fn to_request(&self) -> TradeAttributes {
        TradeAttributes {
            give: self.give.id_ref(),
            get: self.get.id_ref(),
            nickname: self.nickname.clone(),
        }
    }
}
