//! JSON:API-style envelopes shared by every pkmnapi resource kind.
//!
//! # Design
//! Outgoing bodies are `{"data": {"type", "attributes"}}`; incoming bodies add
//! a server-assigned `id` and `links` to every resource object and wrap either
//! one object or an array of them. The envelopes are generic over the
//! attribute payload and carry no knowledge of any particular kind: the tag a
//! write payload is sent under comes from [`WriteAttributes::RESOURCE_TYPE`],
//! and the tag a read payload must arrive with comes from
//! [`ReadAttributes::RESOURCE_TYPE`].
//!
//! `id` stays a `String` on both sides so the server's formatting survives a
//! decode/encode cycle untouched.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// Relation name to URL. Threaded through unchanged.
pub type Links = BTreeMap<String, String>;

/// Closed set of resource kinds served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    AccessTokens,
    HmMoves,
    HmNames,
    Icons,
    ItemNames,
    MapPokemon,
    MartItems,
    MoveNames,
    MoveStats,
    PlayerNames,
    PokedexEntries,
    PokedexTexts,
    PokemonCries,
    PokemonEvolutions,
    PokemonIcons,
    PokemonLearnsets,
    PokemonMachines,
    PokemonMovesets,
    PokemonNames,
    PokemonStats,
    RomPatches,
    Roms,
    SavPlayerNames,
    Savs,
    TmMoves,
    TmNames,
    TmPrices,
    Trades,
    TrainerNames,
    TrainerParties,
    TrainerRewards,
    TypeEffects,
    TypeNames,
}

impl ResourceType {
    /// Wire form of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::AccessTokens => "access_tokens",
            ResourceType::HmMoves => "hm_moves",
            ResourceType::HmNames => "hm_names",
            ResourceType::Icons => "icons",
            ResourceType::ItemNames => "item_names",
            ResourceType::MapPokemon => "map_pokemon",
            ResourceType::MartItems => "mart_items",
            ResourceType::MoveNames => "move_names",
            ResourceType::MoveStats => "move_stats",
            ResourceType::PlayerNames => "player_names",
            ResourceType::PokedexEntries => "pokedex_entries",
            ResourceType::PokedexTexts => "pokedex_texts",
            ResourceType::PokemonCries => "pokemon_cries",
            ResourceType::PokemonEvolutions => "pokemon_evolutions",
            ResourceType::PokemonIcons => "pokemon_icons",
            ResourceType::PokemonLearnsets => "pokemon_learnsets",
            ResourceType::PokemonMachines => "pokemon_machines",
            ResourceType::PokemonMovesets => "pokemon_movesets",
            ResourceType::PokemonNames => "pokemon_names",
            ResourceType::PokemonStats => "pokemon_stats",
            ResourceType::RomPatches => "rom_patches",
            ResourceType::Roms => "roms",
            ResourceType::SavPlayerNames => "sav_player_names",
            ResourceType::Savs => "savs",
            ResourceType::TmMoves => "tm_moves",
            ResourceType::TmNames => "tm_names",
            ResourceType::TmPrices => "tm_prices",
            ResourceType::Trades => "trades",
            ResourceType::TrainerNames => "trainer_names",
            ResourceType::TrainerParties => "trainer_parties",
            ResourceType::TrainerRewards => "trainer_rewards",
            ResourceType::TypeEffects => "type_effects",
            ResourceType::TypeNames => "type_names",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A write payload. The tag is fixed per type at compile time.
pub trait WriteAttributes: Serialize {
    const RESOURCE_TYPE: ResourceType;
}

impl<A: WriteAttributes + ?Sized> WriteAttributes for &A {
    const RESOURCE_TYPE: ResourceType = A::RESOURCE_TYPE;
}

/// A read payload, as found under `data.attributes` of a response.
pub trait ReadAttributes: DeserializeOwned {
    const RESOURCE_TYPE: ResourceType;
}

/// Maps a read shape back to the write shape that would reproduce it,
/// collapsing every embedded resource into an [`IdRef`].
pub trait ToRequest {
    type Request: WriteAttributes;

    fn to_request(&self) -> Self::Request;
}

/// Minimal `{"id": "..."}` stub pointing at another resource on writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdRef {
    pub id: String,
}

impl IdRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<u32> for IdRef {
    fn from(id: u32) -> Self {
        Self { id: id.to_string() }
    }
}

/// `{"data": {"type", "attributes"}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope<A> {
    pub data: RequestData<A>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestData<A> {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub attributes: A,
}

impl<A: WriteAttributes> RequestEnvelope<A> {
    /// Wrap `attributes` under the tag of its kind.
    pub fn new(attributes: A) -> Self {
        Self {
            data: RequestData {
                resource_type: A::RESOURCE_TYPE,
                attributes,
            },
        }
    }
}

/// Body of a DELETE call: the attributes one level deeper, under `source`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteEnvelope<A> {
    pub source: A,
}

impl<A: WriteAttributes> DeleteEnvelope<A> {
    pub fn new(attributes: A) -> Self {
        Self { source: attributes }
    }
}

/// A resource object as the server renders it.
///
/// Decoding checks `type` against the tag of `A`, so an embedded object of
/// the wrong kind fails at any depth, not only at the top of a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceObject<A> {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub attributes: A,
    #[serde(default)]
    pub links: Links,
}

impl<'de, A: ReadAttributes> Deserialize<'de> for ResourceObject<A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw<T> {
            id: String,
            #[serde(rename = "type")]
            resource_type: ResourceType,
            attributes: T,
            #[serde(default)]
            links: Links,
        }

        let raw = Raw::<A>::deserialize(deserializer)?;
        if raw.resource_type != A::RESOURCE_TYPE {
            return Err(D::Error::custom(format!(
                "expected resource type `{}`, found `{}`",
                A::RESOURCE_TYPE,
                raw.resource_type
            )));
        }
        Ok(Self {
            id: raw.id,
            resource_type: raw.resource_type,
            attributes: raw.attributes,
            links: raw.links,
        })
    }
}

impl<A> ResourceObject<A> {
    /// The write-side stub for this object.
    pub fn id_ref(&self) -> IdRef {
        IdRef::new(self.id.clone())
    }
}

/// A resource object nested in a polymorphic list. Its `type` key is the
/// discriminant of the enclosing enum and is consumed there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedObject<A> {
    pub id: String,
    pub attributes: A,
    #[serde(default)]
    pub links: Links,
}

impl<A> EmbeddedObject<A> {
    pub fn id_ref(&self) -> IdRef {
        IdRef::new(self.id.clone())
    }
}

/// `{"data": <object>, "links": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "A: ReadAttributes"))]
pub struct ResourceResponse<A> {
    pub data: ResourceObject<A>,
    #[serde(default)]
    pub links: Links,
}

impl<A: ReadAttributes> ResourceResponse<A> {
    /// Fails with [`ApiError::Decode`] unless `data.type` is the tag of `A`.
    pub fn ensure_type(self) -> Result<Self, ApiError> {
        check_type(self.data.resource_type, A::RESOURCE_TYPE)?;
        Ok(self)
    }
}

impl<A> ResourceResponse<A> {
    pub fn attributes(&self) -> &A {
        &self.data.attributes
    }

    pub fn into_attributes(self) -> A {
        self.data.attributes
    }
}

/// `{"data": [<object>, ...], "links": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "A: ReadAttributes"))]
pub struct CollectionResponse<A> {
    pub data: Vec<ResourceObject<A>>,
    #[serde(default)]
    pub links: Links,
}

impl<A: ReadAttributes> CollectionResponse<A> {
    /// Fails with [`ApiError::Decode`] if any element carries a foreign tag.
    pub fn ensure_type(self) -> Result<Self, ApiError> {
        for object in &self.data {
            check_type(object.resource_type, A::RESOURCE_TYPE)?;
        }
        Ok(self)
    }
}

impl<A> CollectionResponse<A> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceObject<A>> {
        self.data.iter()
    }
}

fn check_type(found: ResourceType, expected: ResourceType) -> Result<(), ApiError> {
    if found == expected {
        return Ok(());
    }
    Err(ApiError::Decode(format!(
        "expected resource type `{expected}`, found `{found}`"
    )))
}
