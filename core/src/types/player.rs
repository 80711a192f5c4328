//! Default player and rival name choices offered at the start of a game.

use serde::{Deserialize, Serialize};

use crate::envelope::{ReadAttributes, ResourceType, ToRequest, WriteAttributes};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNamesAttributes {
    pub player: Vec<String>,
    pub rival: Vec<String>,
}

impl WriteAttributes for PlayerNamesAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::PlayerNames;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNamesResource {
    pub player: Vec<String>,
    pub rival: Vec<String>,
}

impl ReadAttributes for PlayerNamesResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::PlayerNames;
}

impl ToRequest for PlayerNamesResource {
    type Request = PlayerNamesAttributes;

    fn to_request(&self) -> PlayerNamesAttributes {
        PlayerNamesAttributes {
            player: self.player.clone(),
            rival: self.rival.clone(),
        }
    }
}
