//! Per-pokemon records: base stats, party icon, cry parameters.

use serde::{Deserialize, Serialize};

use crate::envelope::{IdRef, ReadAttributes, ResourceObject, ResourceType, ToRequest, WriteAttributes};
use crate::types::names::TypeNameObject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStatsAttributes {
    pub base_hp: u8,
    pub base_attack: u8,
    pub base_defence: u8,
    pub base_speed: u8,
    pub base_special: u8,
    pub types: Vec<IdRef>,
    pub catch_rate: u8,
    pub base_exp_yield: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<u8>,
}

impl WriteAttributes for PokemonStatsAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonStats;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStatsResource {
    pub base_hp: u8,
    pub base_attack: u8,
    pub base_defence: u8,
    pub base_speed: u8,
    pub base_special: u8,
    pub types: Vec<TypeNameObject>,
    pub catch_rate: u8,
    pub base_exp_yield: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<u8>,
}

impl ReadAttributes for PokemonStatsResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonStats;
}

impl ToRequest for PokemonStatsResource {
    type Request = PokemonStatsAttributes;

    fn to_request(&self) -> PokemonStatsAttributes {
        PokemonStatsAttributes {
            base_hp: self.base_hp,
            base_attack: self.base_attack,
            base_defence: self.base_defence,
            base_speed: self.base_speed,
            base_special: self.base_special,
            types: self.types.iter().map(ResourceObject::id_ref).collect(),
            catch_rate: self.catch_rate,
            base_exp_yield: self.base_exp_yield,
            growth_rate: self.growth_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonIconAttributes {
    pub icon: IdRef,
}

impl WriteAttributes for PokemonIconAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonIcons;
}

/// Icons have no attributes of their own; the image is served from `icons/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconResource {}

impl ReadAttributes for IconResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::Icons;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonIconResource {
    pub icon: ResourceObject<IconResource>,
}

impl ReadAttributes for PokemonIconResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonIcons;
}

impl ToRequest for PokemonIconResource {
    type Request = PokemonIconAttributes;

    fn to_request(&self) -> PokemonIconAttributes {
        PokemonIconAttributes {
            icon: self.icon.id_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonCryAttributes {
    pub base: u8,
    pub pitch: u8,
    pub length: u8,
}

impl WriteAttributes for PokemonCryAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonCries;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonCryResource {
    pub base: u8,
    pub pitch: u8,
    pub length: u8,
}

impl ReadAttributes for PokemonCryResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::PokemonCries;
}

impl ToRequest for PokemonCryResource {
    type Request = PokemonCryAttributes;

    fn to_request(&self) -> PokemonCryAttributes {
        PokemonCryAttributes {
            base: self.base,
            pitch: self.pitch,
            length: self.length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn type_name(id: &str, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "type": "type_names",
            "attributes": {"name": name},
            "links": {"self": format!("https://api.pkmnapi.com/v1/types/names/{id}")}
        })
    }

    #[test]
    fn stats_without_growth_rate_omit_the_key() {
        let stats = PokemonStatsAttributes {
            base_hp: 45,
            base_attack: 49,
            base_defence: 49,
            base_speed: 45,
            base_special: 65,
            types: vec![IdRef::from(22), IdRef::from(3)],
            catch_rate: 45,
            base_exp_yield: 64,
            growth_rate: None,
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert!(value.get("growth_rate").is_none());
        assert_eq!(value["types"], json!([{"id": "22"}, {"id": "3"}]));
    }

    #[test]
    fn stats_read_maps_types_to_ids() {
        let resource: PokemonStatsResource = serde_json::from_value(json!({
            "base_hp": 45,
            "base_attack": 49,
            "base_defence": 49,
            "base_speed": 45,
            "base_special": 65,
            "types": [type_name("22", "GRASS"), type_name("3", "POISON")],
            "catch_rate": 45,
            "base_exp_yield": 64,
            "growth_rate": 3
        }))
        .unwrap();
        let request = resource.to_request();
        assert_eq!(request.types, vec![IdRef::from(22), IdRef::from(3)]);
        assert_eq!(request.growth_rate, Some(3));
    }

    #[test]
    fn icon_embeds_object_with_empty_attributes() {
        let resource: PokemonIconResource = serde_json::from_value(json!({
            "icon": {
                "id": "7",
                "type": "icons",
                "attributes": {},
                "links": {"self": "https://api.pkmnapi.com/v1/icons/7"}
            }
        }))
        .unwrap();
        assert_eq!(resource.icon.resource_type, ResourceType::Icons);
        assert_eq!(
            serde_json::to_value(resource.to_request()).unwrap(),
            json!({"icon": {"id": "7"}})
        );
    }

    #[test]
    fn cry_round_trips_unchanged() {
        let value = json!({"base": 17, "pitch": 128, "length": 1});
        let resource: PokemonCryResource = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(resource.to_request()).unwrap(), value);
    }
}
