use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use rustc_serialize::json::Object;

use crate::common::color::Color;
use crate::common::utils::json;
use crate::common::{ConfigError, PlayerId, Position};
use crate::game::layout::{Bounds, PlanetTemplate};
use crate::game::player::PlayerProfile;
use crate::game::ship::ShipTemplate;

pub const MIN_PLANETS: usize = 2;
pub const MAX_PLANETS: usize = 25;

#[derive(Clone, Debug)]
pub struct SideConfig {
    pub name: String,
    pub color: Color,
    pub highlight: Option<Color>
}

impl SideConfig {
    fn new(name: &str, color: Color) -> SideConfig {
        SideConfig { name: name.to_string(), color, highlight: None }
    }

    fn apply_to(&self, mut profile: PlayerProfile) -> PlayerProfile {
        if let Some(highlight) = self.highlight {
            profile.set_highlight_color(highlight);
        }
        profile
    }
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub planet_count: usize,
    pub bounds: Bounds,
    pub planet_template: PlanetTemplate,
    pub starting_score: u32,
    pub neutral_score_min: u32,
    pub neutral_score_max: u32,
    pub max_placement_attempts: usize,
    pub ship_template: ShipTemplate,
    pub player: SideConfig,
    pub ai: SideConfig,
    pub ai_delay: f64,
    pub seed: Option<u64>
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            planet_count: 5,
            bounds: Bounds::new(Position(-12.0, -7.0), Position(12.0, 7.0)),
            planet_template: PlanetTemplate::default(),
            starting_score: 50,
            neutral_score_min: 5,
            neutral_score_max: 100,
            max_placement_attempts: 1000,
            ship_template: ShipTemplate::new(0.1, 3.0),
            player: SideConfig::new("Player", Color::GREEN),
            ai: SideConfig::new("AI", Color::RED),
            ai_delay: 5.0,
            seed: None
        }
    }
}

impl GameConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
        let raw = fs::read_to_string(path)?;
        GameConfig::from_json_str(&raw)
    }

    /// Applies the keys present in `raw` on top of the defaults.
    pub fn from_json_str(raw: &str) -> Result<GameConfig, ConfigError> {
        let document = json::parse_json(raw)?;
        let object = json::parse_json_as_object(&document)?;

        let mut config = GameConfig::default();
        config.apply(object)?;
        config.validate().map_err(ConfigError::Invalid)?;

        Ok(config)
    }

    fn apply(&mut self, object: &Object) -> Result<(), ConfigError> {
        if let Some(count) = json::parse_optional_u64_from_json_object(object, "planet_count")? {
            self.planet_count = count as usize;
        }

        if let Some(field) = json::parse_optional_object_from_json_object(object, "field")? {
            let lower_left = self.bounds.lower_left();
            let upper_right = self.bounds.upper_right();

            self.bounds = Bounds::new(
                Position(
                    json::parse_optional_f64_from_json_object(field, "min_x")?.unwrap_or(lower_left.x()),
                    json::parse_optional_f64_from_json_object(field, "min_y")?.unwrap_or(lower_left.y())
                ),
                Position(
                    json::parse_optional_f64_from_json_object(field, "max_x")?.unwrap_or(upper_right.x()),
                    json::parse_optional_f64_from_json_object(field, "max_y")?.unwrap_or(upper_right.y())
                )
            );
        }

        if let Some(planet) = json::parse_optional_object_from_json_object(object, "planet")? {
            let template = &mut self.planet_template;

            if let Some(radius) = json::parse_optional_f64_from_json_object(planet, "radius")? {
                template.radius = radius;
            }
            if let Some(variance) = json::parse_optional_f64_from_json_object(planet, "radius_variance")? {
                template.radius_variance = variance;
            }
            if let Some(ships) = json::parse_optional_u64_from_json_object(planet, "ships_per_tick")? {
                template.ships_per_tick = clamp_u32(ships);
            }
            if let Some(interval) = json::parse_optional_f64_from_json_object(planet, "tick_interval")? {
                template.tick_interval = interval;
            }
            if let Some(rate) = json::parse_optional_f64_from_json_object(planet, "spawn_rate")? {
                template.spawn_rate = rate;
            }
        }

        if let Some(score) = json::parse_optional_u64_from_json_object(object, "starting_score")? {
            self.starting_score = clamp_u32(score);
        }
        if let Some(score) = json::parse_optional_u64_from_json_object(object, "neutral_score_min")? {
            self.neutral_score_min = clamp_u32(score);
        }
        if let Some(score) = json::parse_optional_u64_from_json_object(object, "neutral_score_max")? {
            self.neutral_score_max = clamp_u32(score);
        }
        if let Some(attempts) = json::parse_optional_u64_from_json_object(object, "max_placement_attempts")? {
            self.max_placement_attempts = attempts as usize;
        }

        if let Some(ship) = json::parse_optional_object_from_json_object(object, "ship")? {
            let radius = json::parse_optional_f64_from_json_object(ship, "radius")?
                .unwrap_or(self.ship_template.radius());
            let speed = json::parse_optional_f64_from_json_object(ship, "speed")?
                .unwrap_or(self.ship_template.speed());

            self.ship_template = ShipTemplate::new(radius, speed);
        }

        if let Some(player) = json::parse_optional_object_from_json_object(object, "player")? {
            apply_side(&mut self.player, player)?;
        }

        if let Some(ai) = json::parse_optional_object_from_json_object(object, "ai")? {
            apply_side(&mut self.ai, ai)?;

            if let Some(delay) = json::parse_optional_f64_from_json_object(ai, "delay")? {
                self.ai_delay = delay;
            }
        }

        if let Some(seed) = json::parse_optional_u64_from_json_object(object, "seed")? {
            self.seed = Some(seed);
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.planet_count < MIN_PLANETS || self.planet_count > MAX_PLANETS {
            return Err(format!("planet_count must be within {}..={}, got {}", MIN_PLANETS, MAX_PLANETS, self.planet_count));
        }

        if !(self.bounds.width() > 0.0) || !(self.bounds.height() > 0.0) {
            return Err("field must have positive width and height".to_string());
        }

        let template = &self.planet_template;

        if !(template.radius > 0.0) {
            return Err(format!("planet radius must be positive, got {}", template.radius));
        }
        if !(template.radius_variance >= 0.0 && template.radius_variance < 1.0) {
            return Err(format!("planet radius_variance must be within [0, 1), got {}", template.radius_variance));
        }
        if !(template.tick_interval > 0.0) {
            return Err(format!("planet tick_interval must be positive, got {}", template.tick_interval));
        }
        if !(template.spawn_rate > 0.0 && template.spawn_rate <= 1.0) {
            return Err(format!("planet spawn_rate must be within (0, 1], got {}", template.spawn_rate));
        }

        if self.neutral_score_min > self.neutral_score_max {
            return Err(format!(
                "neutral_score_min {} exceeds neutral_score_max {}",
                self.neutral_score_min,
                self.neutral_score_max
            ));
        }

        if self.max_placement_attempts == 0 {
            return Err("max_placement_attempts must be positive".to_string());
        }

        if !(self.ship_template.speed() > 0.0) || !(self.ship_template.radius() >= 0.0) {
            return Err("ship speed must be positive and radius non-negative".to_string());
        }

        if !(self.ai_delay > 0.0) {
            return Err(format!("ai delay must be positive, got {}", self.ai_delay));
        }

        Ok(())
    }

    pub fn neutral_scores(&self) -> RangeInclusive<u32> {
        self.neutral_score_min..=self.neutral_score_max
    }

    pub fn player_profile(&self, id: PlayerId) -> PlayerProfile {
        self.player.apply_to(PlayerProfile::new(id, &self.player.name, self.player.color, self.ship_template))
    }

    pub fn ai_profile(&self, id: PlayerId) -> PlayerProfile {
        self.ai.apply_to(PlayerProfile::ai(id, &self.ai.name, self.ai.color, self.ship_template, self.ai_delay))
    }
}

fn apply_side(side: &mut SideConfig, object: &Object) -> Result<(), ConfigError> {
    if let Some(name) = json::parse_optional_string_from_json_object(object, "name")? {
        side.name = name.to_string();
    }

    if let Some(color) = json::parse_optional_string_from_json_object(object, "color")? {
        side.color = parse_color(color)?;
    }

    if let Some(highlight) = json::parse_optional_string_from_json_object(object, "highlight")? {
        side.highlight = Some(parse_color(highlight)?);
    }

    Ok(())
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::parse(name)
        .ok_or_else(|| ConfigError::Invalid(format!("unknown color `{}`", name)))
}

fn clamp_u32(value: u64) -> u32 {
    if value > u32::max_value() as u64 { u32::max_value() } else { value as u32 }
}
