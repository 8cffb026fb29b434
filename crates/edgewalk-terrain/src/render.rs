use edgewalk_core::Point;
use edgewalk_paths::PathState;

use crate::map::TerrainMap;

/// Draw `path` over `map` as ASCII art.
///
/// The start is `S`, the destination `D`, every cell the route enters `*`
/// (`@` for its final cell when that is not the destination). Other cells use
/// the glyphs [`TerrainMap::parse`] reads.
pub fn render_path(map: &TerrainMap, path: &PathState, destination: Point) -> String {
    let range = map.range();
    let mut canvas: Vec<char> = range
        .iter()
        .map(|p| map.at(p).map_or(' ', TerrainMap::glyph))
        .collect();
    let mut put = |p: Point, ch: char| {
        if let Some(i) = range.index_of(p) {
            canvas[i] = ch;
        }
    };

    for cell in path.cells() {
        put(cell, '*');
    }
    if path.end() != destination {
        put(path.end(), '@');
    }
    put(destination, 'D');
    put(path.start(), 'S');

    let w = range.width().max(1) as usize;
    canvas
        .chunks(w)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
