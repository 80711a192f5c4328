//! In-memory data behind the fake service.
//!
//! Records are stored in their read shape, with every `{"id"}` reference
//! already expanded into a full resource object. Writes arrive in the write
//! shape and go through [`Store::expand`] before they are stored, so a
//! reference to a missing record is rejected at write time.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde_json::{json, Map, Value};
use uuid::Uuid;

pub const LINK_BASE: &str = "https://api.pkmnapi.com/v1";

/// Bearer token accepted by a freshly built app.
pub const ACCESS_TOKEN: &str = "mock-access-token";

/// A JSON-backed collection served under `/v1/{route}[/{id}]`.
#[derive(Debug)]
pub struct Table {
    pub route: &'static str,
    pub resource_type: &'static str,
    pub writable: bool,
}

const fn table(route: &'static str, resource_type: &'static str, writable: bool) -> Table {
    Table {
        route,
        resource_type,
        writable,
    }
}

pub static TABLES: &[Table] = &[
    table("hms/moves", "hm_moves", true),
    table("hms/names", "hm_names", false),
    table("items/names", "item_names", true),
    table("maps/pokemon", "map_pokemon", true),
    table("marts/items", "mart_items", true),
    table("moves/names", "move_names", true),
    table("moves/stats", "move_stats", true),
    table("pokedex/entries", "pokedex_entries", true),
    table("pokedex/texts", "pokedex_texts", true),
    table("pokemon/cries", "pokemon_cries", true),
    table("pokemon/evolutions", "pokemon_evolutions", true),
    table("pokemon/icons", "pokemon_icons", true),
    table("pokemon/learnsets", "pokemon_learnsets", true),
    table("pokemon/machines", "pokemon_machines", true),
    table("pokemon/movesets", "pokemon_movesets", true),
    table("pokemon/names", "pokemon_names", true),
    table("pokemon/stats", "pokemon_stats", true),
    table("tms/moves", "tm_moves", true),
    table("tms/names", "tm_names", false),
    table("tms/prices", "tm_prices", true),
    table("trades", "trades", true),
    table("trainers/names", "trainer_names", true),
    table("trainers/parties", "trainer_parties", true),
    table("trainers/rewards", "trainer_rewards", true),
    table("types/effects", "type_effects", true),
    table("types/names", "type_names", true),
];

/// Why a write was refused. Rendered by the handlers as an error document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    BadRequest(String),
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct Rom {
    pub name: String,
    pub hash: String,
}

#[derive(Debug, Default)]
pub struct Store {
    pub tables: HashMap<&'static str, BTreeMap<u32, Value>>,
    pub blobs: HashMap<String, Blob>,
    pub tokens: HashSet<String>,
    pub pending_codes: HashMap<String, String>,
    pub rom_patches: BTreeMap<String, Value>,
    pub rom: Option<Rom>,
    pub sav: bool,
    pub player_names: Value,
    pub sav_player_name: Value,
}

pub fn link(route: &str, id: impl std::fmt::Display) -> String {
    format!("{LINK_BASE}/{route}/{id}")
}

pub fn resource_object(resource_type: &str, route: &str, id: impl std::fmt::Display, attributes: Value) -> Value {
    let id = id.to_string();
    json!({
        "id": id,
        "type": resource_type,
        "attributes": attributes,
        "links": {"self": link(route, &id)}
    })
}

impl Store {
    pub fn seeded() -> Self {
        let mut store = Store {
            tables: TABLES.iter().map(|t| (t.route, BTreeMap::new())).collect(),
            ..Store::default()
        };
        store.tokens.insert(ACCESS_TOKEN.to_string());
        store.seed_names();
        store.seed_records();
        store.seed_blobs();
        store.rom = Some(Rom {
            name: "POKEMON RED".to_string(),
            hash: "3d45c1ee9abd5738df46d2bdda8b57dc".to_string(),
        });
        store.sav = true;
        store.player_names = json!({
            "player": ["RED", "ASH", "JACK"],
            "rival": ["BLUE", "GARY", "JOHN"]
        });
        store.sav_player_name = json!({"name": "RED"});
        store
    }

    pub fn table(&self, route: &str) -> Option<&BTreeMap<u32, Value>> {
        self.tables.get(route)
    }

    /// Expand write-side `{"id"}` references into embedded resource objects.
    pub fn expand(&self, key: Option<&str>, value: Value) -> Result<Value, Rejection> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| self.expand(key, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Value::Object(map) if is_reference(&map) => self.embed(key, &map),
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| {
                    let expanded = self.expand(Some(&k), v)?;
                    Ok((k, expanded))
                })
                .collect::<Result<Map<_, _>, _>>()
                .map(Value::Object),
            other => Ok(other),
        }
    }

    /// Store `attributes` (write shape) under `route/id` and record a patch.
    pub fn write(&mut self, table: &Table, id: u32, attributes: Value) -> Result<(), Rejection> {
        let expanded = self.expand(None, attributes)?;
        let records = self
            .tables
            .get_mut(table.route)
            .ok_or_else(|| Rejection::NotFound(format!("Unknown route {}", table.route)))?;
        records.insert(id, expanded);
        self.record_patch(format!("{} {id}", table.resource_type));
        Ok(())
    }

    pub fn record_patch(&mut self, description: String) {
        self.rom_patches
            .insert(Uuid::new_v4().to_string(), json!({"description": description}));
    }

    fn embed(&self, key: Option<&str>, reference: &Map<String, Value>) -> Result<Value, Rejection> {
        let id = reference
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| Rejection::BadRequest("Reference without id".to_string()))?;
        let target = reference
            .get("type")
            .and_then(Value::as_str)
            .or(key)
            .unwrap_or_default();
        let (route, resource_type) = match target {
            "pokemon" | "give" | "get" | "pokemon_names" => ("pokemon/names", "pokemon_names"),
            "move" | "move_names" => ("moves/names", "move_names"),
            "type" | "types" | "attacking_type" | "defending_type" | "type_names" => {
                ("types/names", "type_names")
            }
            "item" | "item_names" => ("items/names", "item_names"),
            "tm_names" | "tm_moves" => ("tms/moves", "tm_moves"),
            "hm_moves" => ("hms/moves", "hm_moves"),
            "icon" | "icons" => return Ok(resource_object("icons", "icons", id, json!({}))),
            other => {
                return Err(Rejection::BadRequest(format!(
                    "Unknown reference {other:?}"
                )))
            }
        };
        let attributes = id
            .parse::<u32>()
            .ok()
            .and_then(|n| self.table(route).and_then(|records| records.get(&n)))
            .cloned()
            .ok_or_else(|| Rejection::BadRequest(format!("Invalid {resource_type} ID {id}")))?;
        Ok(resource_object(resource_type, route, id, attributes))
    }

    fn seed(&mut self, route: &'static str, id: u32, attributes: Value) {
        // Seeds reference only records inserted before them.
        if let Ok(expanded) = self.expand(None, attributes) {
            if let Some(records) = self.tables.get_mut(route) {
                records.insert(id, expanded);
            }
        }
    }

    fn seed_names(&mut self) {
        let names: &[(&'static str, &[(u32, &str)])] = &[
            ("types/names", &[(0, "NORMAL"), (3, "POISON"), (20, "FIRE"), (21, "WATER"), (22, "GRASS")]),
            ("items/names", &[(1, "MASTER BALL"), (4, "POKé BALL"), (10, "MOON STONE")]),
            (
                "moves/names",
                &[(1, "POUND"), (5, "MEGA PUNCH"), (15, "CUT"), (22, "VINE WHIP"), (33, "TACKLE"), (34, "BODY SLAM"), (45, "GROWL"), (73, "LEECH SEED")],
            ),
            (
                "pokemon/names",
                &[(1, "BULBASAUR"), (2, "IVYSAUR"), (16, "PIDGEY"), (19, "RATTATA"), (35, "CLEFAIRY"), (36, "CLEFABLE")],
            ),
            ("trainers/names", &[(1, "YOUNGSTER"), (2, "BUG CATCHER")]),
            ("hms/names", &[(1, "HM01")]),
            ("tms/names", &[(1, "TM01"), (3, "TM03")]),
        ];
        for (route, entries) in names {
            for (id, name) in entries.iter() {
                self.seed(route, *id, json!({"name": name}));
            }
        }
    }

    fn seed_records(&mut self) {
        self.seed("tms/moves", 1, json!({"move": {"id": "5"}}));
        self.seed("tms/moves", 3, json!({"move": {"id": "34"}}));
        self.seed("hms/moves", 1, json!({"move": {"id": "15"}}));
        self.seed("tms/prices", 1, json!({"price": 3000}));
        self.seed(
            "moves/stats",
            1,
            json!({"effect": 0, "power": 40, "type": {"id": "0"}, "accuracy": 1.0, "pp": 35}),
        );
        self.seed("pokedex/entries", 1, json!({"species": "SEED", "height": 28, "weight": 150}));
        self.seed(
            "pokedex/texts",
            1,
            json!({"text": "A strange seed was\nplanted on its\nback at birth."}),
        );
        self.seed(
            "pokemon/stats",
            1,
            json!({
                "base_hp": 45,
                "base_attack": 49,
                "base_defence": 49,
                "base_speed": 45,
                "base_special": 65,
                "types": [{"id": "22"}, {"id": "3"}],
                "catch_rate": 45,
                "base_exp_yield": 64
            }),
        );
        self.seed("pokemon/cries", 1, json!({"base": 15, "pitch": 128, "length": 1}));
        self.seed("pokemon/icons", 1, json!({"icon": {"id": "7"}}));
        self.seed(
            "pokemon/evolutions",
            1,
            json!({"evolutions": [{"evolution_type": "level", "level": 16, "pokemon": {"id": "2"}}]}),
        );
        self.seed(
            "pokemon/evolutions",
            35,
            json!({"evolutions": [{"evolution_type": "item", "item": {"id": "10"}, "pokemon": {"id": "36"}}]}),
        );
        self.seed(
            "pokemon/learnsets",
            1,
            json!({"learnset": [{"level": 7, "move": {"id": "73"}}, {"level": 13, "move": {"id": "22"}}]}),
        );
        self.seed(
            "pokemon/movesets",
            1,
            json!({"moveset": [{"move": {"id": "33"}}, {"move": {"id": "45"}}]}),
        );
        self.seed(
            "pokemon/machines",
            1,
            json!({"machines": [{"id": "3", "type": "tm_moves"}, {"id": "1", "type": "hm_moves"}]}),
        );
        self.seed(
            "maps/pokemon",
            1,
            json!({
                "grass": {"encounter_rate": 25, "pokemon": [{"level": 3, "pokemon": {"id": "16"}}]},
                "water": {"encounter_rate": 0, "pokemon": []}
            }),
        );
        self.seed(
            "marts/items",
            1,
            json!({"mart_items": [{"id": "4", "type": "item_names"}, {"id": "1", "type": "tm_names"}]}),
        );
        self.seed(
            "trades",
            0,
            json!({"give": {"id": "1"}, "get": {"id": "2"}, "nickname": "BULBY"}),
        );
        self.seed(
            "trainers/parties",
            1,
            json!({"parties": [{"party": [{"level": 11, "pokemon": {"id": "19"}}]}]}),
        );
        self.seed("trainers/rewards", 1, json!({"reward": 1500}));
        self.seed(
            "types/effects",
            1,
            json!({"attacking_type": {"id": "21"}, "defending_type": {"id": "20"}, "multiplier": 2.0}),
        );
    }

    fn seed_blobs(&mut self) {
        let gif = b"GIF89a\x10\x00\x10\x00\x80\x00\x00".to_vec();
        let png = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR".to_vec();
        let wav = b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec();
        let blobs = [
            ("icons/7", "image/gif", gif),
            ("imgs/pokemon_logo", "image/png", png.clone()),
            ("imgs/town_map", "image/png", png.clone()),
            ("imgs/game_boy", "image/png", png.clone()),
            ("maps/pics/1", "image/png", png.clone()),
            ("pokemon/pics/1", "image/png", png.clone()),
            ("trainers/pics/1", "image/png", png),
            ("pokemon/cries/1", "audio/wav", wav),
        ];
        for (key, content_type, bytes) in blobs {
            self.blobs.insert(
                key.to_string(),
                Blob {
                    content_type: content_type.to_string(),
                    bytes,
                },
            );
        }
    }
}

/// `{"id": "..."}`, optionally with a string `type` tag, and nothing else.
fn is_reference(map: &Map<String, Value>) -> bool {
    map.get("id").is_some_and(Value::is_string)
        && map.get("type").map_or(true, Value::is_string)
        && map.keys().all(|k| k == "id" || k == "type")
}
