//! Colors and the injected color lookup.

/// RGBA color for shape paint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn alpha(self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(text: &str) -> Option<Self> {
        let hex = text.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 0x11);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some(Self::new(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Self::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

/// Name or hex string to color, supplied by the host theme.
pub trait ColorResolver {
    fn resolve(&self, name: &str) -> Option<Color>;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> Option<Color>,
{
    fn resolve(&self, name: &str) -> Option<Color> {
        self(name)
    }
}

/// Built-in resolver: hex literals plus a small named palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct Palette;

impl Palette {
    fn named(name: &str) -> Option<Color> {
        let color = match name.to_ascii_lowercase().as_str() {
            "white" => Color::WHITE,
            "black" => Color::BLACK,
            "red" => Color::new(0xf2, 0x49, 0x5c),
            "green" => Color::new(0x73, 0xbf, 0x69),
            "blue" => Color::new(0x57, 0x94, 0xf2),
            "yellow" => Color::new(0xfa, 0xde, 0x2a),
            "orange" => Color::new(0xff, 0x98, 0x30),
            "purple" => Color::new(0xb8, 0x77, 0xd9),
            "gray" | "grey" => Color::new(0x80, 0x80, 0x80),
            "transparent" => Color::rgba(0, 0, 0, 0),
            _ => return None,
        };
        Some(color)
    }
}

impl ColorResolver for Palette {
    fn resolve(&self, name: &str) -> Option<Color> {
        Color::from_hex(name).or_else(|| Self::named(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Color::from_hex("#111827"), Some(Color::new(0x11, 0x18, 0x27)));
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("#0008"), Some(Color::rgba(0, 0, 0, 0x88)));
        assert_eq!(
            Color::from_hex("#c6c6c680"),
            Some(Color::rgba(0xc6, 0xc6, 0xc6, 0x80))
        );
        assert_eq!(Color::from_hex("c6c6c6"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
    }

    #[test]
    fn palette_resolves_names_and_hex() {
        assert_eq!(Palette.resolve("White"), Some(Color::WHITE));
        assert_eq!(Palette.resolve("grey"), Palette.resolve("gray"));
        assert_eq!(Palette.resolve("#000"), Some(Color::BLACK));
        assert_eq!(Palette.resolve("chartreuse-ish"), None);
    }

    #[test]
    fn closures_act_as_resolvers() {
        let always_black = |_: &str| Some(Color::BLACK);
        assert_eq!(always_black.resolve("red"), Some(Color::BLACK));
    }
}
