use mission_sunstate::mission::{load_servers_json, load_stats_json};
use mission_sunstate::sun::SunState;
use mission_sunstate::{DcsBotPage, enrich_servers};

const SERVERS_BODY: &str = r#"[
    {
        "name": "Training Server",
        "status": "Running",
        "mission": {
            "name": "Op Dawn Patrol",
            "uptime": 5400.0,
            "date_time": "2025-12-21 06:00",
            "theatre": "Caucasus",
            "blue_slots": 24,
            "blue_slots_used": 3,
            "red_slots": 12,
            "red_slots_used": 1
        },
        "players": [
            { "nick": "Viper", "side": "blue", "unit_type": "F-16C_50" },
            { "nick": "Hog", "side": "blue", "unit_type": "A-10C_2" }
        ]
    },
    {
        "name": "Night Ops",
        "status": "Paused",
        "mission": {
            "name": "Midnight Strike",
            "date_time": "2025-06-15 00:00:00",
            "theatre": "Persian Gulf",
            "sun_state": { "state": "day", "icon": "x", "color": "x", "tooltip": "x" }
        },
        "players": null
    },
    {
        "name": "Idle Server",
        "status": "Shutdown"
    }
]"#;

const STATS_BODY: &str = r#"{
    "totalPlayers": 120,
    "activePlayers": 8,
    "totalSorties": 4500,
    "avgPlaytime": 37.5,
    "totalKills": 9000,
    "totalDeaths": 4100,
    "totalPvPKills": 310,
    "totalPvPDeaths": 290
}"#;

fn build_page() -> DcsBotPage {
    let servers = load_servers_json(SERVERS_BODY).unwrap();
    let stats = load_stats_json(STATS_BODY).unwrap();
    enrich_servers(servers, stats)
}

#[test]
fn test_every_mission_gets_a_sun_state() {
    let page = build_page();
    assert_eq!(page.servers.len(), 3);

    let dawn = page.servers[0].mission.as_ref().unwrap();
    assert_eq!(dawn.sun_state.unwrap().state, SunState::Dawn);

    let night = page.servers[1].mission.as_ref().unwrap();
    assert_eq!(night.sun_state.unwrap().state, SunState::Night);

    assert!(page.servers[2].mission.is_none());
}

#[test]
fn test_player_counts_and_defaults() {
    let page = build_page();

    assert_eq!(page.servers[0].num_players, 2);
    assert_eq!(page.servers[1].num_players, 0);
    assert!(page.servers[1].players.is_empty());
    assert_eq!(page.servers[2].num_players, 0);
    assert_eq!(page.servers[2].status, "Shutdown");
}

#[test]
fn test_stats_are_carried_over() {
    let stats = build_page().stats.unwrap();
    assert_eq!(stats.total_players, 120);
    assert_eq!(stats.active_players, 8);
    assert_eq!(stats.total_pvp_kills, 310);
    assert_eq!(stats.total_pvp_deaths, 290);
    assert_eq!(stats.avg_playtime, 37.5);
}

#[test]
fn test_page_json_layout() {
    let value = serde_json::to_value(build_page()).unwrap();

    let badge = &value["servers"][0]["mission"]["sun_state"];
    assert_eq!(badge["state"], "dawn");
    assert_eq!(badge["icon"], "fa-solid fa-cloud-sun");
    assert_eq!(badge["color"], "#fd7e14");
    assert_eq!(badge["tooltip"], "Aube");

    assert_eq!(value["servers"][1]["mission"]["sun_state"]["tooltip"], "Nuit");
    assert!(value["servers"][2]["mission"].is_null());
    assert_eq!(value["stats"]["total_pvp_kills"], 310);
}

#[test]
fn test_null_servers_body_gives_empty_page() {
    let servers = load_servers_json("null").unwrap();
    let stats = load_stats_json(STATS_BODY).unwrap();
    let page = enrich_servers(servers, stats);

    assert!(page.servers.is_empty());
    assert!(page.stats.is_none());
}

#[test]
fn test_missing_clock_fails_open_to_day() {
    let body = r#"[{ "name": "New", "mission": { "name": "Fresh", "theatre": "Syria" } }]"#;
    let page = enrich_servers(load_servers_json(body).unwrap(), None);

    let server = &page.servers[0];
    assert_eq!(server.status, "Unknown");
    assert_eq!(
        server.mission.as_ref().unwrap().sun_state.unwrap().state,
        SunState::Day
    );
    assert!(page.stats.is_none());
}

#[test]
fn test_malformed_bodies_are_errors() {
    let err = load_servers_json("{ not json").unwrap_err();
    assert!(format!("{err:#}").contains("servers payload"));

    assert!(load_stats_json(r#""offline""#).is_err());
}
