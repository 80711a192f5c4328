//! Type effectiveness chart entries.

use serde::{Deserialize, Serialize};

use crate::envelope::{IdRef, ReadAttributes, ResourceType, ToRequest, WriteAttributes};
use crate::types::names::TypeNameObject;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeEffectAttributes {
    pub attacking_type: IdRef,
    pub defending_type: IdRef,
    pub multiplier: f32,
}

impl WriteAttributes for TypeEffectAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::TypeEffects;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeEffectResource {
    pub attacking_type: TypeNameObject,
    pub defending_type: TypeNameObject,
    pub multiplier: f32,
}

impl ReadAttributes for TypeEffectResource {
    const RESOURCE_TYPE: ResourceType = ResourceType::TypeEffects;
}

impl ToRequest for TypeEffectResource {
    type Request = TypeEffectAttributes;

    fn to_request(&self) -> TypeEffectAttributes {
        TypeEffectAttributes {
            attacking_type: self.attacking_type.id_ref(),
            defending_type: self.defending_type.id_ref(),
            multiplier: self.multiplier,
        }
    }
}
