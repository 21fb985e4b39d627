use rustc_serialize::json::{Json, Object};

use crate::common::utils::json;
use crate::common::{utils, ParseCommandResult, PlanetId, Position};
use crate::game::simulation::{PlanetView, ShipView};

type Result<T> = ParseCommandResult<T>;

pub fn parse_command(string: &str) -> Result<(String, Object)> {
    let json = json::parse_json(string)?;
    let params = json::parse_json_as_object(&json)?;

    let command = json::parse_string_from_json_object(params, "action")?;
    let data = json::parse_optional_object_from_json_object(params, "data")?
        .cloned()
        .unwrap_or_default();

    Ok((command.to_string(), data))
}

pub fn parse_select_command_data(data: &Object) -> Result<(PlanetId, bool)> {
    let planet_id = json::parse_planet_id_from_json_object(data, "planet_id")?;
    let selected = json::parse_bool_from_json_object(data, "selected")?;

    Ok((planet_id, selected))
}

pub fn parse_dispatch_command_data(data: &Object) -> Result<PlanetId> {
    json::parse_planet_id_from_json_object(data, "target_id")
}

pub fn parse_click_command_data(data: &Object) -> Result<PlanetId> {
    json::parse_planet_id_from_json_object(data, "planet_id")
}

pub fn format_state(
    state: &str,
    winner: Option<&str>,
    planets_json: &str,
    ships_json: &str
) -> String {
    let winner = winner.map_or("null".to_string(), |winner| format!(r#""{}""#, winner));

    format!(
        r#"{{"state":"{}","winner":{},"planets":{},"ships":{}}}"#,
        state,
        winner,
        planets_json,
        ships_json
    )
}

pub fn format_error(message: &str) -> String {
    format!(r#"{{"error":{}}}"#, Json::String(message.to_string()))
}

pub fn format_planets(planets: &[PlanetView]) -> String {
    let formatted_planets = planets
        .iter()
        .map(|planet| {
            let Position(x, y) = planet.position;
            let owner = planet.owner.map_or("null".to_string(), |owner| owner.to_string());

            format!(
                r#"{{"id":{},"x":{},"y":{},"radius":{},"owner":{},"score":{},"selected":{},"color":"{}"}}"#,
                planet.id,
                x,
                y,
                planet.radius,
                owner,
                planet.score,
                planet.selected,
                planet.color.hex()
            )
        })
        .collect::<Vec<String>>();

    format!("[{}]", utils::join(formatted_planets, ","))
}

pub fn format_ships(ships: &[ShipView]) -> String {
    let formatted_ships = ships
        .iter()
        .map(|ship| {
            let Position(x, y) = ship.position;

            format!(
                r#"{{"id":{},"owner":{},"origin":{},"target":{},"x":{},"y":{},"heading":{},"color":"{}"}}"#,
                ship.id,
                ship.owner,
                ship.origin,
                ship.target,
                x,
                y,
                ship.heading,
                ship.color.hex()
            )
        })
        .collect::<Vec<String>>();

    format!("[{}]", utils::join(formatted_ships, ","))
}
