#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Color {
    LIME,
    GREEN,
    TEAL,
    CYAN,
    COBALT,
    VIOLET,
    MAGENTA,
    CRIMSON,
    RED,
    ORANGE,
    AMBER,
    YELLOW,
    NEUTRAL
}

impl Color {
    pub fn parse(name: &str) -> Option<Color> {
        let color = match name.to_lowercase().as_ref() {
            "lime" => Color::LIME,
            "green" => Color::GREEN,
            "teal" => Color::TEAL,
            "cyan" => Color::CYAN,
            "cobalt" => Color::COBALT,
            "violet" => Color::VIOLET,
            "magenta" => Color::MAGENTA,
            "crimson" => Color::CRIMSON,
            "red" => Color::RED,
            "orange" => Color::ORANGE,
            "amber" => Color::AMBER,
            "yellow" => Color::YELLOW,
            "neutral" => Color::NEUTRAL,
            _ => return None
        };

        Some(color)
    }

    pub fn rgba(&self) -> [f32; 4] {
        match *self {
            Color::LIME => rgb(164, 196, 0),
            Color::GREEN => rgb(96, 169, 23),
            Color::TEAL => rgb(0, 171, 169),
            Color::CYAN => rgb(27, 161, 226),
            Color::COBALT => rgb(0, 80, 239),
            Color::VIOLET => rgb(170, 0, 255),
            Color::MAGENTA => rgb(216, 0, 115),
            Color::CRIMSON => rgb(162, 0, 37),
            Color::RED => rgb(229, 20, 0),
            Color::ORANGE => rgb(250, 104, 0),
            Color::AMBER => rgb(240, 163, 10),
            Color::YELLOW => rgb(227, 200, 0),
            Color::NEUTRAL => rgb(255, 255, 255)
        }
    }

    /// Lighter companion used to tint selected planets.
    pub fn highlight(&self) -> Color {
        match *self {
            Color::GREEN => Color::LIME,
            Color::TEAL | Color::COBALT => Color::CYAN,
            Color::RED | Color::CRIMSON => Color::ORANGE,
            Color::MAGENTA => Color::VIOLET,
            Color::ORANGE | Color::AMBER => Color::YELLOW,
            other => other
        }
    }

    pub fn hex(&self) -> String {
        let [r, g, b, _] = self.rgba();
        format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
    }
}

fn rgb(r: u32, g: u32, b: u32) -> [f32; 4] {
    [r as f32 / 255_f32, g as f32 / 255_f32, b as f32 / 255_f32, 1_f32]
}

fn channel(value: f32) -> u8 {
    (value * 255_f32).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Color::parse("Green"), Some(Color::GREEN));
        assert_eq!(Color::parse("RED"), Some(Color::RED));
        assert_eq!(Color::parse("mauve"), None);
    }

    #[test]
    fn hex_round_trips_palette_bytes() {
        assert_eq!(Color::GREEN.hex(), "#60a917");
        assert_eq!(Color::NEUTRAL.hex(), "#ffffff");
    }
}
