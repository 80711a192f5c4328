//! Async facade over the whole pkmnapi surface.
//!
//! # Design
//! `Pkmnapi` pairs a `PkmnapiClient` (request building, response parsing)
//! with a `Transport` (the round-trip). Each public method only names its
//! path and schema types; the shared helpers below do the rest, so every
//! operation follows the same request and error contract.
//!
//! Reads return typed envelopes. Writes return the server's acknowledgement
//! as untyped JSON (`null` for an empty body). Binary endpoints hand bytes
//! through untouched.

use serde_json::Value;

use crate::client::PkmnapiClient;
use crate::config::ClientConfig;
use crate::endpoint::{endpoint, path_segment};
use crate::envelope::{CollectionResponse, ReadAttributes, ResourceResponse, WriteAttributes};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::*;

pub const GIF_CONTENT_TYPE: &str = "image/gif";
pub const WAV_CONTENT_TYPE: &str = "audio/wav";
pub const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";

pub type ResourceResult<A> = Result<ResourceResponse<A>, ApiError>;
pub type CollectionResult<A> = Result<CollectionResponse<A>, ApiError>;

pub struct Pkmnapi<T = ReqwestTransport> {
    client: PkmnapiClient,
    transport: T,
}

impl Pkmnapi<ReqwestTransport> {
    /// Validates `config` and builds a reqwest-backed facade.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let transport = ReqwestTransport::from_config(&config)?;
        Ok(Self::with_transport(&config, transport))
    }
}

impl<T: Transport> Pkmnapi<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            client: PkmnapiClient::new(config),
            transport,
        }
    }

    pub fn client(&self) -> &PkmnapiClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fails with `ApiError::Config` on a blank token.
    pub fn set_access_token(&mut self, token: &str) -> Result<&mut Self, ApiError> {
        self.client.set_access_token(token)?;
        Ok(self)
    }

    pub fn clear_access_token(&mut self) -> &mut Self {
        self.client.clear_access_token();
        self
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            "dispatching request"
        );
        let response = self.transport.execute(request).await?;
        tracing::debug!(status = response.status, "received response");
        Ok(response)
    }

    async fn fetch_json<A: ReadAttributes>(&self, path: &str) -> ResourceResult<A> {
        let response = self.dispatch(self.client.build_get(path)).await?;
        self.client.parse_resource(response)
    }

    async fn fetch_all<A: ReadAttributes>(&self, path: &str) -> CollectionResult<A> {
        let response = self.dispatch(self.client.build_get(path)).await?;
        self.client.parse_collection(response)
    }

    async fn fetch_raw(&self, path: &str, accept: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.dispatch(self.client.build_get_raw(path, accept)).await?;
        self.client.parse_raw(response)
    }

    async fn send_json<A: WriteAttributes>(
        &self,
        path: &str,
        attributes: &A,
    ) -> Result<Value, ApiError> {
        let request = self.client.build_post(path, attributes)?;
        let response = self.dispatch(request).await?;
        self.client.parse_value(response)
    }

    async fn send_raw(
        &self,
        path: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<Value, ApiError> {
        let request = self.client.build_post_raw(path, content_type, bytes);
        let response = self.dispatch(request).await?;
        self.client.parse_value(response)
    }

    async fn delete_json<A: WriteAttributes>(
        &self,
        path: &str,
        attributes: &A,
    ) -> Result<Value, ApiError> {
        let request = self.client.build_delete(path, attributes)?;
        let response = self.dispatch(request).await?;
        self.client.parse_value(response)
    }

    async fn delete_empty(&self, path: &str) -> Result<Value, ApiError> {
        let response = self.dispatch(self.client.build_delete_empty(path)).await?;
        self.client.parse_value(response)
    }

    // access_tokens

    /// Ask the server to mail an access token to `email_address`.
    pub async fn post_access_token(
        &self,
        attributes: &AccessTokenAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["access_tokens"], None), attributes).await
    }

    /// Ask the server to mail a revocation code.
    pub async fn post_access_token_delete(
        &self,
        attributes: &AccessTokenAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["access_tokens", "delete"], None), attributes)
            .await
    }

    pub async fn delete_access_token(
        &self,
        attributes: &AccessTokenDeleteAttributes,
    ) -> Result<Value, ApiError> {
        self.delete_json(&endpoint(&["access_tokens"], None), attributes)
            .await
    }

    // hm_moves

    pub async fn get_hm_move_all(&self) -> CollectionResult<HmMoveResource> {
        self.fetch_all(&endpoint(&["hms", "moves"], None)).await
    }

    pub async fn get_hm_move(&self, hm_id: u32) -> ResourceResult<HmMoveResource> {
        self.fetch_json(&endpoint(&["hms", "moves"], Some(hm_id))).await
    }

    pub async fn post_hm_move(
        &self,
        hm_id: u32,
        attributes: &HmMoveAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["hms", "moves"], Some(hm_id)), attributes)
            .await
    }

    // hm_names

    pub async fn get_hm_name_all(&self) -> CollectionResult<HmNameResource> {
        self.fetch_all(&endpoint(&["hms", "names"], None)).await
    }

    pub async fn get_hm_name(&self, hm_id: u32) -> ResourceResult<HmNameResource> {
        self.fetch_json(&endpoint(&["hms", "names"], Some(hm_id))).await
    }

    // icons

    /// Party icon as a GIF.
    pub async fn get_icon(&self, icon_id: u32) -> Result<Vec<u8>, ApiError> {
        self.fetch_raw(&endpoint(&["icons"], Some(icon_id)), GIF_CONTENT_TYPE)
            .await
    }

    // imgs

    pub async fn get_img_pokemon_logo(&self, content_type: &str) -> Result<Vec<u8>, ApiError> {
        self.fetch_raw(&endpoint(&["imgs", "pokemon_logo"], None), content_type)
            .await
    }

    pub async fn post_img_pokemon_logo(
        &self,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<Value, ApiError> {
        self.send_raw(&endpoint(&["imgs", "pokemon_logo"], None), content_type, bytes)
            .await
    }

    pub async fn get_img_town_map(&self, content_type: &str) -> Result<Vec<u8>, ApiError> {
        self.fetch_raw(&endpoint(&["imgs", "town_map"], None), content_type)
            .await
    }

    pub async fn get_img_game_boy(&self, content_type: &str) -> Result<Vec<u8>, ApiError> {
        self.fetch_raw(&endpoint(&["imgs", "game_boy"], None), content_type)
            .await
    }

    // item_names

    pub async fn get_item_name_all(&self) -> CollectionResult<ItemNameResource> {
        self.fetch_all(&endpoint(&["items", "names"], None)).await
    }

    pub async fn get_item_name(&self, item_id: u32) -> ResourceResult<ItemNameResource> {
        self.fetch_json(&endpoint(&["items", "names"], Some(item_id))).await
    }

    pub async fn post_item_name(
        &self,
        item_id: u32,
        attributes: &ItemNameAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["items", "names"], Some(item_id)), attributes)
            .await
    }

    // map_pics

    pub async fn get_map_pic(&self, map_id: u32, content_type: &str) -> Result<Vec<u8>, ApiError> {
        self.fetch_raw(&endpoint(&["maps", "pics"], Some(map_id)), content_type)
            .await
    }

    // map_pokemon

    pub async fn get_map_pokemon_all(&self) -> CollectionResult<MapPokemonResource> {
        self.fetch_all(&endpoint(&["maps", "pokemon"], None)).await
    }

    pub async fn get_map_pokemon(&self, map_id: u32) -> ResourceResult<MapPokemonResource> {
        self.fetch_json(&endpoint(&["maps", "pokemon"], Some(map_id))).await
    }

    pub async fn post_map_pokemon(
        &self,
        map_id: u32,
        attributes: &MapPokemonAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["maps", "pokemon"], Some(map_id)), attributes)
            .await
    }

    // mart_items

    pub async fn get_mart_items_all(&self) -> CollectionResult<MartItemsResource> {
        self.fetch_all(&endpoint(&["marts", "items"], None)).await
    }

    pub async fn get_mart_items(&self, mart_id: u32) -> ResourceResult<MartItemsResource> {
        self.fetch_json(&endpoint(&["marts", "items"], Some(mart_id))).await
    }

    pub async fn post_mart_items(
        &self,
        mart_id: u32,
        attributes: &MartItemsAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["marts", "items"], Some(mart_id)), attributes)
            .await
    }

    // move_names

    pub async fn get_move_name_all(&self) -> CollectionResult<MoveNameResource> {
        self.fetch_all(&endpoint(&["moves", "names"], None)).await
    }

    pub async fn get_move_name(&self, move_id: u32) -> ResourceResult<MoveNameResource> {
        self.fetch_json(&endpoint(&["moves", "names"], Some(move_id))).await
    }

    pub async fn post_move_name(
        &self,
        move_id: u32,
        attributes: &MoveNameAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["moves", "names"], Some(move_id)), attributes)
            .await
    }

    // move_stats

    pub async fn get_move_stats_all(&self) -> CollectionResult<MoveStatsResource> {
        self.fetch_all(&endpoint(&["moves", "stats"], None)).await
    }

    pub async fn get_move_stats(&self, move_id: u32) -> ResourceResult<MoveStatsResource> {
        self.fetch_json(&endpoint(&["moves", "stats"], Some(move_id))).await
    }

    pub async fn post_move_stats(
        &self,
        move_id: u32,
        attributes: &MoveStatsAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["moves", "stats"], Some(move_id)), attributes)
            .await
    }

    // player_names

    pub async fn get_player_names(&self) -> ResourceResult<PlayerNamesResource> {
        self.fetch_json(&endpoint(&["player_names"], None)).await
    }

    pub async fn post_player_names(
        &self,
        attributes: &PlayerNamesAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["player_names"], None), attributes).await
    }

    // pokedex_entries

    pub async fn get_pokedex_entry_all(&self) -> CollectionResult<PokedexEntryResource> {
        self.fetch_all(&endpoint(&["pokedex", "entries"], None)).await
    }

    pub async fn get_pokedex_entry(&self, pokedex_id: u32) -> ResourceResult<PokedexEntryResource> {
        self.fetch_json(&endpoint(&["pokedex", "entries"], Some(pokedex_id)))
            .await
    }

    pub async fn post_pokedex_entry(
        &self,
        pokedex_id: u32,
        attributes: &PokedexEntryAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["pokedex", "entries"], Some(pokedex_id)), attributes)
            .await
    }

    // pokedex_texts

    pub async fn get_pokedex_text_all(&self) -> CollectionResult<PokedexTextResource> {
        self.fetch_all(&endpoint(&["pokedex", "texts"], None)).await
    }

    pub async fn get_pokedex_text(&self, pokedex_id: u32) -> ResourceResult<PokedexTextResource> {
        self.fetch_json(&endpoint(&["pokedex", "texts"], Some(pokedex_id)))
            .await
    }

    pub async fn post_pokedex_text(
        &self,
        pokedex_id: u32,
        attributes: &PokedexTextAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["pokedex", "texts"], Some(pokedex_id)), attributes)
            .await
    }

    // pokemon_cries

    pub async fn get_pokemon_cry_all(&self) -> CollectionResult<PokemonCryResource> {
        self.fetch_all(&endpoint(&["pokemon", "cries"], None)).await
    }

    pub async fn get_pokemon_cry(&self, pokedex_id: u32) -> ResourceResult<PokemonCryResource> {
        self.fetch_json(&endpoint(&["pokemon", "cries"], Some(pokedex_id)))
            .await
    }

    /// The cry rendered as WAV audio.
    pub async fn get_pokemon_cry_raw(&self, pokedex_id: u32) -> Result<Vec<u8>, ApiError> {
        self.fetch_raw(&endpoint(&["pokemon", "cries"], Some(pokedex_id)), WAV_CONTENT_TYPE)
            .await
    }

    pub async fn post_pokemon_cry(
        &self,
        pokedex_id: u32,
        attributes: &PokemonCryAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["pokemon", "cries"], Some(pokedex_id)), attributes)
            .await
    }

    // pokemon_evolutions

    pub async fn get_pokemon_evolutions_all(&self) -> CollectionResult<PokemonEvolutionsResource> {
        self.fetch_all(&endpoint(&["pokemon", "evolutions"], None)).await
    }

    pub async fn get_pokemon_evolutions(
        &self,
        pokedex_id: u32,
    ) -> ResourceResult<PokemonEvolutionsResource> {
        self.fetch_json(&endpoint(&["pokemon", "evolutions"], Some(pokedex_id)))
            .await
    }

    pub async fn post_pokemon_evolutions(
        &self,
        pokedex_id: u32,
        attributes: &PokemonEvolutionsAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["pokemon", "evolutions"], Some(pokedex_id)), attributes)
            .await
    }

    // pokemon_icons

    pub async fn get_pokemon_icon_all(&self) -> CollectionResult<PokemonIconResource> {
        self.fetch_all(&endpoint(&["pokemon", "icons"], None)).await
    }

    pub async fn get_pokemon_icon(&self, pokedex_id: u32) -> ResourceResult<PokemonIconResource> {
        self.fetch_json(&endpoint(&["pokemon", "icons"], Some(pokedex_id)))
            .await
    }

    pub async fn post_pokemon_icon(
        &self,
        pokedex_id: u32,
        attributes: &PokemonIconAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["pokemon", "icons"], Some(pokedex_id)), attributes)
            .await
    }

    // pokemon_learnsets

    pub async fn get_pokemon_learnset_all(&self) -> CollectionResult<PokemonLearnsetResource> {
        self.fetch_all(&endpoint(&["pokemon", "learnsets"], None)).await
    }

    pub async fn get_pokemon_learnset(
        &self,
        pokedex_id: u32,
    ) -> ResourceResult<PokemonLearnsetResource> {
        self.fetch_json(&endpoint(&["pokemon", "learnsets"], Some(pokedex_id)))
            .await
    }

    pub async fn post_pokemon_learnset(
        &self,
        pokedex_id: u32,
        attributes: &PokemonLearnsetAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["pokemon", "learnsets"], Some(pokedex_id)), attributes)
            .await
    }

    // pokemon_machines

    pub async fn get_pokemon_machines_all(&self) -> CollectionResult<PokemonMachinesResource> {
        self.fetch_all(&endpoint(&["pokemon", "machines"], None)).await
    }

    pub async fn get_pokemon_machines(
        &self,
        pokedex_id: u32,
    ) -> ResourceResult<PokemonMachinesResource> {
        self.fetch_json(&endpoint(&["pokemon", "machines"], Some(pokedex_id)))
            .await
    }

    pub async fn post_pokemon_machines(
        &self,
        pokedex_id: u32,
        attributes: &PokemonMachinesAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["pokemon", "machines"], Some(pokedex_id)), attributes)
            .await
    }

    // pokemon_movesets

    pub async fn get_pokemon_moveset_all(&self) -> CollectionResult<PokemonMovesetResource> {
        self.fetch_all(&endpoint(&["pokemon", "movesets"], None)).await
    }

    pub async fn get_pokemon_moveset(
        &self,
        pokedex_id: u32,
    ) -> ResourceResult<PokemonMovesetResource> {
        self.fetch_json(&endpoint(&["pokemon", "movesets"], Some(pokedex_id)))
            .await
    }

    pub async fn post_pokemon_moveset(
        &self,
        pokedex_id: u32,
        attributes: &PokemonMovesetAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["pokemon", "movesets"], Some(pokedex_id)), attributes)
            .await
    }

    // pokemon_names

    pub async fn get_pokemon_name_all(&self) -> CollectionResult<PokemonNameResource> {
        self.fetch_all(&endpoint(&["pokemon", "names"], None)).await
    }

    pub async fn get_pokemon_name(&self, pokedex_id: u32) -> ResourceResult<PokemonNameResource> {
        self.fetch_json(&endpoint(&["pokemon", "names"], Some(pokedex_id)))
            .await
    }

    pub async fn post_pokemon_name(
        &self,
        pokedex_id: u32,
        attributes: &PokemonNameAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["pokemon", "names"], Some(pokedex_id)), attributes)
            .await
    }

    // pokemon_pics

    pub async fn get_pokemon_pic(
        &self,
        pokedex_id: u32,
        content_type: &str,
    ) -> Result<Vec<u8>, ApiError> {
        self.fetch_raw(&endpoint(&["pokemon", "pics"], Some(pokedex_id)), content_type)
            .await
    }

    pub async fn post_pokemon_pic(
        &self,
        pokedex_id: u32,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<Value, ApiError> {
        self.send_raw(&endpoint(&["pokemon", "pics"], Some(pokedex_id)), content_type, bytes)
            .await
    }

    // pokemon_stats

    pub async fn get_pokemon_stats_all(&self) -> CollectionResult<PokemonStatsResource> {
        self.fetch_all(&endpoint(&["pokemon", "stats"], None)).await
    }

    pub async fn get_pokemon_stats(&self, pokedex_id: u32) -> ResourceResult<PokemonStatsResource> {
        self.fetch_json(&endpoint(&["pokemon", "stats"], Some(pokedex_id)))
            .await
    }

    pub async fn post_pokemon_stats(
        &self,
        pokedex_id: u32,
        attributes: &PokemonStatsAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["pokemon", "stats"], Some(pokedex_id)), attributes)
            .await
    }

    // rom_patches

    pub async fn get_rom_patch_all(&self) -> CollectionResult<RomPatchResource> {
        self.fetch_all(&endpoint(&["roms", "patches"], None)).await
    }

    pub async fn get_rom_patch(&self, patch_id: &str) -> ResourceResult<RomPatchResource> {
        let patch_id = path_segment(patch_id)?;
        self.fetch_json(&endpoint(&["roms", "patches", &patch_id], None))
            .await
    }

    pub async fn delete_rom_patch(&self, patch_id: &str) -> Result<Value, ApiError> {
        let patch_id = path_segment(patch_id)?;
        self.delete_empty(&endpoint(&["roms", "patches", &patch_id], None))
            .await
    }

    // roms

    /// Upload a ROM image. The server answers with the new ROM's view.
    pub async fn post_rom(&self, bytes: &[u8]) -> Result<Value, ApiError> {
        self.send_raw(&endpoint(&["roms"], None), OCTET_STREAM_CONTENT_TYPE, bytes)
            .await
    }

    pub async fn get_rom(&self) -> ResourceResult<RomResource> {
        self.fetch_json(&endpoint(&["roms"], None)).await
    }

    pub async fn delete_rom(&self) -> Result<Value, ApiError> {
        self.delete_empty(&endpoint(&["roms"], None)).await
    }

    // sav_player_names

    pub async fn get_sav_player_name(&self) -> ResourceResult<SavPlayerNameResource> {
        self.fetch_json(&endpoint(&["savs", "player_names"], None)).await
    }

    pub async fn post_sav_player_name(
        &self,
        attributes: &SavPlayerNameAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["savs", "player_names"], None), attributes)
            .await
    }

    // savs

    pub async fn post_sav(&self, bytes: &[u8]) -> Result<Value, ApiError> {
        self.send_raw(&endpoint(&["savs"], None), OCTET_STREAM_CONTENT_TYPE, bytes)
            .await
    }

    pub async fn get_sav(&self) -> ResourceResult<SavResource> {
        self.fetch_json(&endpoint(&["savs"], None)).await
    }

    pub async fn delete_sav(&self) -> Result<Value, ApiError> {
        self.delete_empty(&endpoint(&["savs"], None)).await
    }

    // tm_moves

    pub async fn get_tm_move_all(&self) -> CollectionResult<TmMoveResource> {
        self.fetch_all(&endpoint(&["tms", "moves"], None)).await
    }

    pub async fn get_tm_move(&self, tm_id: u32) -> ResourceResult<TmMoveResource> {
        self.fetch_json(&endpoint(&["tms", "moves"], Some(tm_id))).await
    }

    pub async fn post_tm_move(
        &self,
        tm_id: u32,
        attributes: &TmMoveAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["tms", "moves"], Some(tm_id)), attributes)
            .await
    }

    // tm_names

    pub async fn get_tm_name_all(&self) -> CollectionResult<TmNameResource> {
        self.fetch_all(&endpoint(&["tms", "names"], None)).await
    }

    pub async fn get_tm_name(&self, tm_id: u32) -> ResourceResult<TmNameResource> {
        self.fetch_json(&endpoint(&["tms", "names"], Some(tm_id))).await
    }

    // tm_prices

    pub async fn get_tm_price_all(&self) -> CollectionResult<TmPriceResource> {
        self.fetch_all(&endpoint(&["tms", "prices"], None)).await
    }

    pub async fn get_tm_price(&self, tm_id: u32) -> ResourceResult<TmPriceResource> {
        self.fetch_json(&endpoint(&["tms", "prices"], Some(tm_id))).await
    }

    pub async fn post_tm_price(
        &self,
        tm_id: u32,
        attributes: &TmPriceAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["tms", "prices"], Some(tm_id)), attributes)
            .await
    }

    // trades

    pub async fn get_trade_all(&self) -> CollectionResult<TradeResource> {
        self.fetch_all(&endpoint(&["trades"], None)).await
    }

    pub async fn get_trade(&self, trade_id: u32) -> ResourceResult<TradeResource> {
        self.fetch_json(&endpoint(&["trades"], Some(trade_id))).await
    }

    pub async fn post_trade(
        &self,
        trade_id: u32,
        attributes: &TradeAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["trades"], Some(trade_id)), attributes)
            .await
    }

    // trainer_names

    pub async fn get_trainer_name_all(&self) -> CollectionResult<TrainerNameResource> {
        self.fetch_all(&endpoint(&["trainers", "names"], None)).await
    }

    pub async fn get_trainer_name(&self, trainer_id: u32) -> ResourceResult<TrainerNameResource> {
        self.fetch_json(&endpoint(&["trainers", "names"], Some(trainer_id)))
            .await
    }

    pub async fn post_trainer_name(
        &self,
        trainer_id: u32,
        attributes: &TrainerNameAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["trainers", "names"], Some(trainer_id)), attributes)
            .await
    }

    // trainer_parties

    pub async fn get_trainer_parties_all(&self) -> CollectionResult<TrainerPartiesResource> {
        self.fetch_all(&endpoint(&["trainers", "parties"], None)).await
    }

    pub async fn get_trainer_parties(
        &self,
        trainer_id: u32,
    ) -> ResourceResult<TrainerPartiesResource> {
        self.fetch_json(&endpoint(&["trainers", "parties"], Some(trainer_id)))
            .await
    }

    pub async fn post_trainer_parties(
        &self,
        trainer_id: u32,
        attributes: &TrainerPartiesAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["trainers", "parties"], Some(trainer_id)), attributes)
            .await
    }

    // trainer_pics

    pub async fn get_trainer_pic(
        &self,
        trainer_id: u32,
        content_type: &str,
    ) -> Result<Vec<u8>, ApiError> {
        self.fetch_raw(&endpoint(&["trainers", "pics"], Some(trainer_id)), content_type)
            .await
    }

    pub async fn post_trainer_pic(
        &self,
        trainer_id: u32,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<Value, ApiError> {
        self.send_raw(&endpoint(&["trainers", "pics"], Some(trainer_id)), content_type, bytes)
            .await
    }

    // trainer_rewards

    pub async fn get_trainer_reward_all(&self) -> CollectionResult<TrainerRewardResource> {
        self.fetch_all(&endpoint(&["trainers", "rewards"], None)).await
    }

    pub async fn get_trainer_reward(
        &self,
        trainer_id: u32,
    ) -> ResourceResult<TrainerRewardResource> {
        self.fetch_json(&endpoint(&["trainers", "rewards"], Some(trainer_id)))
            .await
    }

    pub async fn post_trainer_reward(
        &self,
        trainer_id: u32,
        attributes: &TrainerRewardAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["trainers", "rewards"], Some(trainer_id)), attributes)
            .await
    }

    // type_effects

    pub async fn get_type_effect_all(&self) -> CollectionResult<TypeEffectResource> {
        self.fetch_all(&endpoint(&["types", "effects"], None)).await
    }

    pub async fn get_type_effect(&self, type_effect_id: u32) -> ResourceResult<TypeEffectResource> {
        self.fetch_json(&endpoint(&["types", "effects"], Some(type_effect_id)))
            .await
    }

    pub async fn post_type_effect(
        &self,
        type_effect_id: u32,
        attributes: &TypeEffectAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["types", "effects"], Some(type_effect_id)), attributes)
            .await
    }

    // type_names

    pub async fn get_type_name_all(&self) -> CollectionResult<TypeNameResource> {
        self.fetch_all(&endpoint(&["types", "names"], None)).await
    }

    pub async fn get_type_name(&self, type_id: u32) -> ResourceResult<TypeNameResource> {
        self.fetch_json(&endpoint(&["types", "names"], Some(type_id))).await
    }

    pub async fn post_type_name(
        &self,
        type_id: u32,
        attributes: &TypeNameAttributes,
    ) -> Result<Value, ApiError> {
        self.send_json(&endpoint(&["types", "names"], Some(type_id)), attributes)
            .await
    }
}

impl<T> std::fmt::Debug for Pkmnapi<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pkmnapi")
            .field("base_url", &self.client.base_url())
            .finish_non_exhaustive()
    }
}
