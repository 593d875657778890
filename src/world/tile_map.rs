//! World domain: uniform grid map with overlaid hazard regions.

use bevy::prelude::*;

use crate::physics::coverage;
use crate::world::{Environment, EnvironmentOverlap, GameMap, MapBounds, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileKind {
    #[default]
    Empty,
    /// Solid block.
    Stone,
    /// Decorative tile the character walks through.
    Backdrop,
}

impl TileKind {
    /// `#` is stone, `.` is backdrop and a space is empty.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            ' ' => Some(Self::Empty),
            '#' => Some(Self::Stone),
            '.' => Some(Self::Backdrop),
            _ => None,
        }
    }

    pub fn passable(self) -> bool {
        !matches!(self, Self::Stone)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HazardRegion {
    pub kind: Environment,
    pub rect: Rect,
}

/// Row-major tile grid anchored at the origin.
#[derive(Debug, Clone)]
pub struct TileMap {
    tile_size: f32,
    columns: usize,
    rows: usize,
    cells: Vec<TileKind>,
    hazards: Vec<HazardRegion>,
}

impl TileMap {
    /// Builds a map from glyph rows (see [`TileKind::from_glyph`]). Short rows
    /// are padded with empty cells and unknown glyphs read as empty.
    pub fn from_rows<S: AsRef<str>>(tile_size: f32, rows: &[S], hazards: Vec<HazardRegion>) -> Self {
        let columns = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut cells = vec![TileKind::Empty; columns * rows.len()];
        for (row, line) in rows.iter().enumerate() {
            for (column, glyph) in line.as_ref().chars().enumerate() {
                cells[row * columns + column] = TileKind::from_glyph(glyph).unwrap_or_default();
            }
        }

        Self {
            tile_size,
            columns,
            rows: rows.len(),
            cells,
            hazards,
        }
    }

    pub fn hazards(&self) -> &[HazardRegion] {
        &self.hazards
    }

    pub fn kind_at(&self, column: usize, row: usize) -> TileKind {
        if column >= self.columns || row >= self.rows {
            return TileKind::Empty;
        }
        self.cells[row * self.columns + column]
    }

    /// Every non-empty cell as a tile, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.columns).map(move |column| (column, row)))
            .filter_map(|(column, row)| self.tile(column, row))
    }

    fn tile(&self, column: usize, row: usize) -> Option<Tile> {
        let kind = self.kind_at(column, row);
        if kind == TileKind::Empty {
            return None;
        }
        let min = Vec2::new(column as f32, row as f32) * self.tile_size;
        Some(Tile {
            rect: Rect::from_corners(min, min + Vec2::splat(self.tile_size)),
            passable: kind.passable(),
        })
    }

    /// Inclusive cell index range covering `lo..hi` along an axis with `count` cells.
    fn span(&self, lo: f32, hi: f32, count: usize) -> Option<(usize, usize)> {
        if count == 0 || hi < 0.0 {
            return None;
        }
        let first = (lo / self.tile_size).floor().max(0.0) as usize;
        let last = ((hi / self.tile_size).floor() as usize).min(count - 1);
        (first <= last).then_some((first, last))
    }
}

impl GameMap for TileMap {
    fn bounds(&self) -> MapBounds {
        MapBounds {
            left: 0.0,
            right: self.columns as f32 * self.tile_size,
            top: 0.0,
            bottom: self.rows as f32 * self.tile_size,
        }
    }

    fn candidate_tiles(&self, rect: Rect) -> Vec<Tile> {
        let (Some((c0, c1)), Some((r0, r1))) = (
            self.span(rect.min.x, rect.max.x, self.columns),
            self.span(rect.min.y, rect.max.y, self.rows),
        ) else {
            return Vec::new();
        };

        let mut tiles = Vec::new();
        for row in r0..=r1 {
            for column in c0..=c1 {
                tiles.extend(self.tile(column, row));
            }
        }
        tiles
    }

    fn environment_overlaps(&self, rect: Rect) -> Vec<EnvironmentOverlap> {
        self.hazards
            .iter()
            .filter_map(|hazard| {
                let area = coverage(rect, hazard.rect);
                (area > 0.0).then_some(EnvironmentOverlap {
                    kind: hazard.kind,
                    area,
                })
            })
            .collect()
    }
}
