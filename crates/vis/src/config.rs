//! Chart dimensions and captions.

/// The space in pixels between the canvas border and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Padding {
    pub fn uniform(px: u32) -> Padding {
        Self {
            top: px,
            bottom: px,
            left: px,
            right: px,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(ChartConfig::DEFAULT_PADDING)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub padding: Padding,
    pub title: String,
    pub subtitle: String,
}

impl ChartConfig {
    pub const DEFAULT_WIDTH: u32 = 920;
    pub const DEFAULT_HEIGHT: u32 = 630;
    pub const DEFAULT_PADDING: u32 = 50;

    pub fn new(width: u32, height: u32, padding: Padding) -> ChartConfig {
        Self {
            width,
            height,
            padding,
            ..Default::default()
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            padding: Padding::default(),
            title: String::from("Doping in Professional Bicycle Racing"),
            subtitle: String::from("35 Fastest times up Alpe d'Huez"),
        }
    }
}

/// Reads a pixel length such as `"920px"` or `"920"`.
///
/// Only the leading digits are used, so decimals and units are ignored
/// (`"920.5px"` is `920`).
pub fn parse_px(value: &str) -> Option<u32> {
    let value = value.trim();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());

    value[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pixel_lengths() {
        assert_eq!(parse_px("920px"), Some(920));
        assert_eq!(parse_px("630"), Some(630));
        assert_eq!(parse_px(" 480.75px "), Some(480));
        assert_eq!(parse_px("px"), None);
        assert_eq!(parse_px(""), None);
    }

    #[test]
    fn default_padding_is_uniform() {
        let config = ChartConfig::default();

        assert_eq!(config.padding, Padding::uniform(50));
        assert_eq!((config.width, config.height), (920, 630));
    }
}
