use crate::error::ConfigError;
use crate::limits;
use serde::{Deserialize, Serialize};

pub type VertexId = u32;
pub type TileId = u32;
pub type ColorIndex = u8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Side {
    /// Member order inside a tile; `tile.members[side as usize]` is that side's vertex.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "Top",
            Side::Right => "Right",
            Side::Bottom => "Bottom",
            Side::Left => "Left",
        }
    }

    pub fn parse(s: &str) -> Option<Side> {
        match s {
            "Top" => Some(Side::Top),
            "Right" => Some(Side::Right),
            "Bottom" => Some(Side::Bottom),
            "Left" => Some(Side::Left),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Parses `#RRGGBB` (alpha is opaque).
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Color {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: 255,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub hex: String,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        PaletteEntry {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// Fixed, ordered set of usable colors. Assignments store indices into it.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    rgba: Vec<Color>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Palette, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if entries.len() > limits::MAX_PALETTE {
            return Err(ConfigError::PaletteTooLarge(entries.len()));
        }
        let mut rgba = Vec::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            if entries[..i].iter().any(|prev| prev.name == e.name) {
                return Err(ConfigError::DuplicateColor(e.name.clone()));
            }
            let c = Color::from_hex(&e.hex).ok_or_else(|| ConfigError::InvalidHex {
                name: e.name.clone(),
                hex: e.hex.clone(),
            })?;
            rgba.push(c);
        }
        Ok(Palette { entries, rgba })
    }

    pub fn default_entries() -> Vec<PaletteEntry> {
        vec![
            PaletteEntry::new("red", "#EE334E"),
            PaletteEntry::new("yellow", "#FCB131"),
            PaletteEntry::new("green", "#00A651"),
            PaletteEntry::new("blue", "#0081C8"),
        ]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn entry(&self, color: ColorIndex) -> Option<&PaletteEntry> {
        self.entries.get(color as usize)
    }

    pub fn rgba(&self, color: ColorIndex) -> Option<Color> {
        self.rgba.get(color as usize).copied()
    }

    pub fn index_of(&self, name: &str) -> Option<ColorIndex> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .map(|i| i as ColorIndex)
    }

    /// `(color + step) mod len`.
    pub fn advance(&self, color: ColorIndex, step: usize) -> ColorIndex {
        ((color as usize + step) % self.entries.len()) as ColorIndex
    }
}

impl Default for Palette {
    fn default() -> Self {
        let entries = Self::default_entries();
        let rgba = entries
            .iter()
            .filter_map(|e| Color::from_hex(&e.hex))
            .collect();
        Palette { entries, rgba }
    }
}

/// Single forced binding supplied to a coloring attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub vertex: VertexId,
    pub color: ColorIndex,
}

/// Total mapping vertex -> palette index. Only produced by a successful search;
/// replaced wholesale, never edited in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    colors: Vec<ColorIndex>,
}

impl ColorAssignment {
    pub fn empty() -> Self {
        ColorAssignment { colors: Vec::new() }
    }

    pub(crate) fn from_complete(colors: Vec<ColorIndex>) -> Self {
        ColorAssignment { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color_of(&self, vertex: VertexId) -> Option<ColorIndex> {
        self.colors.get(vertex as usize).copied()
    }

    pub fn as_slice(&self) -> &[ColorIndex] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, ColorIndex)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(v, &c)| (v as VertexId, c))
    }
}

/// Display colors of one tile's four regions, as the renderer consumes them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileColors {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parse_and_format() {
        let c = Color::from_hex("#0081C8").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0x00, 0x81, 0xC8, 255));
        assert_eq!(c.to_hex(), "#0081C8");
        assert!(Color::from_hex("0081C8").is_none());
        assert!(Color::from_hex("#0081C").is_none());
        assert!(Color::from_hex("#00g1C8").is_none());
    }

    #[test]
    fn palette_rejects_bad_entries() {
        assert!(matches!(Palette::new(vec![]), Err(ConfigError::EmptyPalette)));
        let dup = vec![
            PaletteEntry::new("red", "#FF0000"),
            PaletteEntry::new("red", "#EE0000"),
        ];
        assert!(matches!(Palette::new(dup), Err(ConfigError::DuplicateColor(_))));
        let bad = vec![PaletteEntry::new("red", "crimson")];
        assert!(matches!(Palette::new(bad), Err(ConfigError::InvalidHex { .. })));
    }

    #[test]
    fn advance_wraps() {
        let p = Palette::default();
        assert_eq!(p.len(), 4);
        assert_eq!(p.index_of("blue"), Some(3));
        assert_eq!(p.advance(3, 1), 0);
        assert_eq!(p.advance(1, 2), 3);
        assert_eq!(Palette::new(Palette::default_entries()).unwrap(), p);
    }
}
