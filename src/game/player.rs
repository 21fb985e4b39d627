use crate::common::color::Color;
use crate::common::{PlanetId, PlayerId};
use crate::game::ship::ShipTemplate;

#[derive(Clone, Debug)]
pub struct PlayerProfile {
    id: PlayerId,
    name: String,
    main_color: Color,
    highlight_color: Color,
    ship_template: ShipTemplate,
    is_ai: bool,
    ai_delay: f64,
    selected_planets: Vec<PlanetId>
}

impl PlayerProfile {
    pub fn new(id: PlayerId, name: &str, main_color: Color, ship_template: ShipTemplate) -> PlayerProfile {
        PlayerProfile {
            id,
            name: name.to_string(),
            main_color,
            highlight_color: main_color.highlight(),
            ship_template,
            is_ai: false,
            ai_delay: 5.0,
            selected_planets: vec![]
        }
    }

    pub fn ai(id: PlayerId, name: &str, main_color: Color, ship_template: ShipTemplate, ai_delay: f64) -> PlayerProfile {
        let mut profile = PlayerProfile::new(id, name, main_color, ship_template);
        profile.is_ai = true;
        profile.ai_delay = ai_delay;
        profile
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn main_color(&self) -> Color {
        self.main_color
    }

    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    pub fn set_highlight_color(&mut self, color: Color) {
        self.highlight_color = color;
    }

    pub fn ship_template(&self) -> &ShipTemplate {
        &self.ship_template
    }

    pub fn is_ai(&self) -> bool {
        self.is_ai
    }

    pub fn ai_delay(&self) -> f64 {
        self.ai_delay
    }

    /// Planets armed for the next dispatch, in the order they were selected.
    pub fn selected_planets(&self) -> &[PlanetId] {
        &self.selected_planets
    }

    pub fn is_selected(&self, planet_id: PlanetId) -> bool {
        self.selected_planets.contains(&planet_id)
    }

    pub fn add_selected(&mut self, planet_id: PlanetId) {
        if !self.is_selected(planet_id) {
            self.selected_planets.push(planet_id);
        }
    }

    pub fn remove_selected(&mut self, planet_id: PlanetId) {
        self.selected_planets.retain(|&selected| selected != planet_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PlayerProfile {
        PlayerProfile::new(0, "Player", Color::GREEN, ShipTemplate::new(0.1, 3.0))
    }

    #[test]
    fn selection_keeps_order_without_duplicates() {
        let mut player = profile();

        player.add_selected(4);
        player.add_selected(1);
        player.add_selected(4);

        assert_eq!(player.selected_planets(), &[4, 1]);

        player.remove_selected(4);
        assert_eq!(player.selected_planets(), &[1]);

        assert!(player.selected_planets().is_empty());
    }

    #[test]
    fn ai_profile_carries_delay() {
        let ai = PlayerProfile::ai(1, "AI", Color::RED, ShipTemplate::new(0.1, 3.0), 2.5);

        assert!(ai.is_ai());
        assert_eq!(ai.ai_delay(), 2.5);
        assert_eq!(ai.highlight_color(), Color::ORANGE);
        assert!(!profile().is_ai());
    }
}
