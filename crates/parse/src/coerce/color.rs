use ysld_model::Color;

/// A table of colour names.
pub trait ColorNames: Send + Sync {
    fn lookup(&self, name: &str) -> Option<Color>;
}

/// The CSS basic and common extended colour keywords, case-insensitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct CssColorNames;

const CSS_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("silver", 0xc0c0c0),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("white", 0xffffff),
    ("maroon", 0x800000),
    ("red", 0xff0000),
    ("purple", 0x800080),
    ("fuchsia", 0xff00ff),
    ("magenta", 0xff00ff),
    ("green", 0x008000),
    ("lime", 0x00ff00),
    ("olive", 0x808000),
    ("yellow", 0xffff00),
    ("navy", 0x000080),
    ("blue", 0x0000ff),
    ("teal", 0x008080),
    ("aqua", 0x00ffff),
    ("cyan", 0x00ffff),
    ("orange", 0xffa500),
    ("brown", 0xa52a2a),
    ("pink", 0xffc0cb),
    ("gold", 0xffd700),
    ("beige", 0xf5f5dc),
    ("khaki", 0xf0e68c),
    ("salmon", 0xfa8072),
    ("tan", 0xd2b48c),
    ("violet", 0xee82ee),
    ("indigo", 0x4b0082),
    ("crimson", 0xdc143c),
    ("coral", 0xff7f50),
    ("darkgray", 0xa9a9a9),
    ("darkgrey", 0xa9a9a9),
    ("lightgray", 0xd3d3d3),
    ("lightgrey", 0xd3d3d3),
    ("darkgreen", 0x006400),
    ("darkblue", 0x00008b),
    ("darkred", 0x8b0000),
    ("lightblue", 0xadd8e6),
    ("lightgreen", 0x90ee90),
    ("steelblue", 0x4682b4),
    ("forestgreen", 0x228b22),
    ("skyblue", 0x87ceeb),
    ("wheat", 0xf5deb3),
];

impl ColorNames for CssColorNames {
    fn lookup(&self, name: &str) -> Option<Color> {
        CSS_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, packed)| Color::from_packed(*packed))
    }
}

/// Reads a colour literal: `#rrggbb`, `#rgb`, `0xrrggbb`, either hex form
/// with a trailing alpha byte, `rgb(r, g, b)`, a name from `names`, bare
/// `rrggbb` hex digits, or a packed decimal integer.
pub fn parse_color_literal(text: &str, names: &dyn ColorNames) -> Option<Color> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        return Color::from_hex_digits(hex);
    }
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return Color::from_hex_digits(hex);
    }
    if let Some(args) = strip_function(text, "rgb") {
        return parse_rgb_args(args);
    }
    if let Some(color) = names.lookup(text) {
        return Some(color);
    }
    if text.len() == 6 {
        if let Some(color) = Color::from_hex_digits(text) {
            return Some(color);
        }
    }
    text.parse::<u32>().ok().filter(|v| *v <= 0xff_ffff).map(Color::from_packed)
}

fn strip_function<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let head = text.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    text[name.len()..].trim_start().strip_prefix('(')?.strip_suffix(')')
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let channels: Vec<u8> = args
        .split(',')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<_>>()?;
    match channels[..] {
        [r, g, b] => Some(Color::rgb(r, g, b)),
        _ => None,
    }
}
