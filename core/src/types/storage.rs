//! Uploaded ROM and save files, and the patches recorded against a ROM.
//!
//! ROM and save bytes travel as raw uploads; these are the JSON views the
//! server returns for them.

use serde::{Deserialize, Serialize};

use crate::envelope::{ReadAttributes, ResourceType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomResource {
    pub name: String,
    pub hash: String,
    pub valid: bool,
}

impl ReadAttributes for RomResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::Roms;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavResource {}

impl ReadAttributes for SavResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::Savs;
}

/// A pending change produced by a write. Ids are server-generated strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomPatchResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ReadAttributes for RomPatchResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::RomPatches;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::CollectionResponse;
    use serde_json::json;

    #[test]
    fn patches_decode_with_and_without_description() {
        let patches: CollectionResponse<RomPatchResource> = serde_json::from_value(json!({
            "data": [
                {
                    "id": "8a3b0a9c-4b5e-4c1f-9d7e-2f6a1b3c4d5e",
                    "type": "rom_patches",
                    "attributes": {"description": "Item name"},
                    "links": {"self": "https://api.pkmnapi.com/v1/roms/patches/8a3b0a9c-4b5e-4c1f-9d7e-2f6a1b3c4d5e"}
                },
                {
                    "id": "0d6c2a8e-1f3b-4e5d-8c7a-9b0e1d2c3f4a",
                    "type": "rom_patches",
                    "attributes": {},
                    "links": {}
                }
            ],
            "links": {"self": "https://api.pkmnapi.com/v1/roms/patches"}
        }))
        .unwrap();
        let patches = patches.ensure_type().unwrap();
        assert_eq!(patches.data[0].attributes.description.as_deref(), Some("Item name"));
        assert_eq!(patches.data[1].attributes, RomPatchResource::default());
        assert_eq!(serde_json::to_value(&patches.data[1].attributes).unwrap(), json!({}));
    }

    #[test]
    fn rom_view_decodes() {
        let rom: RomResource = serde_json::from_value(json!({
            "name": "POKEMON RED",
            "hash": "3d45c1ee9abd5738df46d2bdda8b57dc",
            "valid": true
        }))
        .unwrap();
        assert!(rom.valid);
    }
}
