// Human-readable names: tiles are `<row letters><col number>` (A1, A2, .., B1, ..),
// vertices append `-<Side>`. Row letters run bijective base-26 (Z is followed by AA),
// so labels stay unique for any row count.

use crate::model::Side;

pub fn row_label(row: u32) -> String {
    let mut n = row as u64 + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        out.push(b'A' + rem);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

pub fn tile_label(row: u32, col: u32) -> String {
    format!("{}{}", row_label(row), col as u64 + 1)
}

pub fn vertex_label(tile: &str, side: Side) -> String {
    format!("{}-{}", tile, side.as_str())
}

/// Splits `A1-Top` into (`A1`, Top).
pub fn parse_vertex_label(label: &str) -> Option<(&str, Side)> {
    let (tile, side) = label.rsplit_once('-')?;
    if tile.is_empty() {
        return None;
    }
    Some((tile, Side::parse(side)?))
}
