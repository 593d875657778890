//! Hand-placed map for unit tests: reports every tile as a candidate.

use bevy::prelude::*;

use crate::world::{EnvironmentOverlap, GameMap, MapBounds, Tile};

pub(crate) struct StubMap {
    pub bounds: MapBounds,
    pub tiles: Vec<Tile>,
    pub overlaps: Vec<EnvironmentOverlap>,
}

impl StubMap {
    pub fn open(width: f32, height: f32) -> Self {
        Self {
            bounds: MapBounds {
                left: 0.0,
                right: width,
                top: 0.0,
                bottom: height,
            },
            tiles: Vec::new(),
            overlaps: Vec::new(),
        }
    }

    pub fn with_block(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.tiles.push(Tile {
            rect: Rect::new(x, y, x + w, y + h),
            passable: false,
        });
        self
    }

    pub fn with_backdrop(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.tiles.push(Tile {
            rect: Rect::new(x, y, x + w, y + h),
            passable: true,
        });
        self
    }

    pub fn with_overlap(mut self, overlap: EnvironmentOverlap) -> Self {
        self.overlaps.push(overlap);
        self
    }
}

impl GameMap for StubMap {
    fn bounds(&self) -> MapBounds {
        self.bounds
    }

    fn candidate_tiles(&self, _rect: Rect) -> Vec<Tile> {
        self.tiles.clone()
    }

    fn environment_overlaps(&self, _rect: Rect) -> Vec<EnvironmentOverlap> {
        self.overlaps.clone()
    }
}
