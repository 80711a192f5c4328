//! Mart inventories. A mart sells a mix of regular items and technical
//! machines, so each entry is a tagged union.

use serde::{Deserialize, Serialize};

use crate::envelope::{EmbeddedObject, ReadAttributes, ResourceType, ToRequest, WriteAttributes};
use crate::types::machines::TmMoveResource;
use crate::types::names::ItemNameResource;

/// Write-side inventory entry. TMs are referenced by their `tm_names` id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MartItemRef {
    ItemNames { id: String },
    TmNames { id: String },
}

impl MartItemRef {
    pub fn item(id: u32) -> Self {
        MartItemRef::ItemNames { id: id.to_string() }
    }

    pub fn tm(id: u32) -> Self {
        MartItemRef::TmNames { id: id.to_string() }
    }
}

/// Read-side inventory entry. The server renders TMs as `tm_moves` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MartItem {
    #[serde(rename = "item_names")]
    Item(EmbeddedObject<ItemNameResource>),
    #[serde(rename = "tm_moves")]
    Tm(EmbeddedObject<TmMoveResource>),
}

impl MartItem {
    pub fn id(&self) -> &str {
        match self {
            MartItem::Item(object) => &object.id,
            MartItem::Tm(object) => &object.id,
        }
    }

    pub fn to_ref(&self) -> MartItemRef {
        match self {
            MartItem::Item(object) => MartItemRef::ItemNames {
                id: object.id.clone(),
            },
            MartItem::Tm(object) => MartItemRef::TmNames {
                id: object.id.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MartItemsAttributes {
    pub mart_items: Vec<MartItemRef>,
}

impl WriteAttributes for MartItemsAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::MartItems;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MartItemsResource {
    pub mart_items: Vec<MartItem>,
}

impl ReadAttributes for MartItemsResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::MartItems;
}

impl ToRequest for MartItemsResource {
    type Request = MartItemsAttributes;

    fn to_request(&self) -> MartItemsAttributes {
        MartItemsAttributes {
            mart_items: self.mart_items.iter().map(MartItem::to_ref).collect(),
        }
    }
}
