//! Name tables: every kind whose only attribute is a `name` string.

use serde::{Deserialize, Serialize};

use crate::envelope::{ReadAttributes, ResourceObject, ResourceType, ToRequest, WriteAttributes};

macro_rules! name_table {
    ($(#[$doc:meta])* read_only $read:ident, $tag:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $read {
            pub name: String,
        }

        impl ReadAttributes for $read {
            const RESOURCE_TYPE: ResourceType = ResourceType::$tag;
        }
    };
    ($(#[$doc:meta])* $write:ident, $read:ident, $tag:ident) => {
        name_table!($(#[$doc])* read_only $read, $tag);

        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $write {
            pub name: String,
        }

        impl $write {
            pub fn new(name: impl Into<String>) -> Self {
                Self { name: name.into() }
            }
        }

        impl WriteAttributes for $write {
            const RESOURCE_TYPE: ResourceType = ResourceType::$tag;
        }

        impl ToRequest for $read {
            type Request = $write;

            fn to_request(&self) -> $write {
                $write {
                    name: self.name.clone(),
                }
            }
        }
    };
}

name_table!(
    /// `hms/names`
    read_only HmNameResource, HmNames
);
name_table!(
    /// `tms/names`
    read_only TmNameResource, TmNames
);
name_table!(
    /// `items/names`
    ItemNameAttributes, ItemNameResource, ItemNames
);
name_table!(
    /// `moves/names`
    MoveNameAttributes, MoveNameResource, MoveNames
);
name_table!(
    /// `pokemon/names`
    PokemonNameAttributes, PokemonNameResource, PokemonNames
);
name_table!(
    /// `trainers/names`
    TrainerNameAttributes, TrainerNameResource, TrainerNames
);
name_table!(
    /// `types/names`
    TypeNameAttributes, TypeNameResource, TypeNames
);
name_table!(
    /// `savs/player_names`: the player name stored in an uploaded save.
    SavPlayerNameAttributes, SavPlayerNameResource, SavPlayerNames
);

pub type ItemNameObject = ResourceObject<ItemNameResource>;
pub type MoveNameObject = ResourceObject<MoveNameResource>;
pub type PokemonNameObject = ResourceObject<PokemonNameResource>;
pub type TypeNameObject = ResourceObject<TypeNameResource>;
