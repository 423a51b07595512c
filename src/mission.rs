//! DCSServerBot status payloads and sun state enrichment.
//!
//! The status page shows every server with its running mission. DCSServerBot
//! reports the mission clock and theatre but nothing about lighting, so each
//! mission gets a [`SunStateResult`] attached before the page is served.
//!
//! Fetching and caching the payloads is the web layer's job; this module
//! only works on already-decoded JSON.

use anyhow::{Context, Result};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::sun::{SunStateResult, get_sun_state};

fn default_status() -> String {
    "Unknown".to_string()
}

/// `null` and missing both become an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode an object, treating `null`, a missing key and `{}` alike as absent.
fn non_empty_object<T: DeserializeOwned>(
    object: Option<Map<String, Value>>,
) -> serde_json::Result<Option<T>> {
    match object {
        Some(map) if !map.is_empty() => serde_json::from_value(Value::Object(map)).map(Some),
        _ => Ok(None),
    }
}

fn empty_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    non_empty_object(Option::<Map<String, Value>>::deserialize(deserializer)?)
        .map_err(D::Error::custom)
}

/// A server entry from `/serverapi/servers`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_status")]
    pub status: String,
    /// An empty `{}` mission means no mission is loaded.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub mission: Option<MissionInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub players: Vec<PlayerEntry>,
}

/// Running mission as shown on the status page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MissionInfo {
    #[serde(default)]
    pub name: String,
    /// Seconds since the mission was loaded.
    #[serde(default)]
    pub uptime: f64,
    /// In-game clock, `YYYY-MM-DD HH:MM[:SS]`.
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub theatre: String,
    #[serde(default)]
    pub blue_slots: Option<u32>,
    #[serde(default)]
    pub blue_slots_used: Option<u32>,
    #[serde(default)]
    pub red_slots: Option<u32>,
    #[serde(default)]
    pub red_slots_used: Option<u32>,
    /// Always computed here, never taken from the input.
    #[serde(skip_deserializing)]
    pub sun_state: Option<SunStateResult>,
    #[serde(default)]
    pub mission_time: Option<String>,
    #[serde(default)]
    pub mission_date_time: Option<String>,
}

impl MissionInfo {
    /// Compute and store the sun state badge from the mission clock.
    pub fn attach_sun_state(&mut self) {
        self.sun_state = Some(get_sun_state(self.date_time.as_deref(), &self.theatre));
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerEntry {
    pub nick: String,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub unit_type: Option<String>,
    #[serde(default)]
    pub callsign: Option<String>,
}

/// Global statistics from `/serverapi/serverstats` (camelCase upstream).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsPayload {
    pub total_players: u64,
    pub active_players: u64,
    pub total_sorties: u64,
    pub avg_playtime: f64,
    pub total_kills: u64,
    pub total_deaths: u64,
    #[serde(rename = "totalPvPKills")]
    pub total_pvp_kills: u64,
    #[serde(rename = "totalPvPDeaths")]
    pub total_pvp_deaths: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DcsBotStats {
    pub total_players: u64,
    pub active_players: u64,
    pub total_sorties: u64,
    pub avg_playtime: f64,
    pub total_kills: u64,
    pub total_deaths: u64,
    pub total_pvp_kills: u64,
    pub total_pvp_deaths: u64,
}

impl From<StatsPayload> for DcsBotStats {
    fn from(s: StatsPayload) -> Self {
        Self {
            total_players: s.total_players,
            active_players: s.active_players,
            total_sorties: s.total_sorties,
            avg_playtime: s.avg_playtime,
            total_kills: s.total_kills,
            total_deaths: s.total_deaths,
            total_pvp_kills: s.total_pvp_kills,
            total_pvp_deaths: s.total_pvp_deaths,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DcsBotServer {
    pub name: String,
    pub status: String,
    pub num_players: usize,
    pub mission: Option<MissionInfo>,
    pub players: Vec<PlayerEntry>,
}

impl From<ServerPayload> for DcsBotServer {
    fn from(payload: ServerPayload) -> Self {
        let mission = payload.mission.map(|mut mission| {
            mission.attach_sun_state();
            mission
        });

        Self {
            name: payload.name,
            status: payload.status,
            num_players: payload.players.len(),
            mission,
            players: payload.players,
        }
    }
}

/// Body of the server status page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DcsBotPage {
    pub servers: Vec<DcsBotServer>,
    pub stats: Option<DcsBotStats>,
}

/// Build the status page, attaching a sun state to every running mission.
///
/// When the server list is unavailable the page is empty and stats are
/// dropped as well, even if they were fetched.
pub fn enrich_servers(
    servers: Option<Vec<ServerPayload>>,
    stats: Option<StatsPayload>,
) -> DcsBotPage {
    let Some(servers) = servers else {
        return DcsBotPage {
            servers: Vec::new(),
            stats: None,
        };
    };

    DcsBotPage {
        servers: servers.into_iter().map(DcsBotServer::from).collect(),
        stats: stats.map(DcsBotStats::from),
    }
}

/// Decode a `/serverapi/servers` response body.
///
/// A JSON `null` body means the bot had nothing to report and maps to `None`.
pub fn load_servers_json(content: &str) -> Result<Option<Vec<ServerPayload>>> {
    serde_json::from_str(content).context("Failed to parse DCSServerBot servers payload")
}

/// Decode a `/serverapi/serverstats` response body.
///
/// Both `null` and `{}` mean no statistics are available.
pub fn load_stats_json(content: &str) -> Result<Option<StatsPayload>> {
    let object: Option<Map<String, Value>> =
        serde_json::from_str(content).context("Failed to parse DCSServerBot stats payload")?;
    non_empty_object(object).context("Failed to parse DCSServerBot stats payload")
}
