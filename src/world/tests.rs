//! World domain: tests for the grid map, hazard coverage and pickups.

use bevy::prelude::*;

use super::{
    Diamond, Environment, GameMap, HazardRegion, Level, Lever, MapBounds, Spawn, TileKind,
    TileMap,
};
use crate::player::Variant;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn small_map() -> TileMap {
    TileMap::from_rows(32.0, &["    ", "  # ", "####"], Vec::new())
}

// -----------------------------------------------------------------------------
// Grid
// -----------------------------------------------------------------------------

#[test]
fn test_bounds_follow_grid_size() {
    let bounds = small_map().bounds();
    assert_eq!(
        bounds,
        MapBounds {
            left: 0.0,
            right: 128.0,
            top: 0.0,
            bottom: 96.0,
        }
    );
}

#[test]
fn test_candidate_tiles_cover_query() {
    let map = small_map();

    let tiles = map.candidate_tiles(Rect::new(70.0, 40.0, 90.0, 60.0));

    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles[0].rect, Rect::new(64.0, 32.0, 96.0, 64.0));
    assert!(!tiles[0].passable);
}

#[test]
fn test_candidate_tiles_span_several_cells() {
    let map = small_map();

    // Straddles rows 1 and 2, columns 1 through 3.
    let tiles = map.candidate_tiles(Rect::new(40.0, 50.0, 100.0, 70.0));

    let origins: Vec<Vec2> = tiles.iter().map(|tile| tile.rect.min).collect();
    assert_eq!(
        origins,
        vec![
            Vec2::new(64.0, 32.0),
            Vec2::new(32.0, 64.0),
            Vec2::new(64.0, 64.0),
            Vec2::new(96.0, 64.0),
        ]
    );
}

#[test]
fn test_candidate_tiles_outside_map_are_empty() {
    let map = small_map();
    assert!(map.candidate_tiles(Rect::new(-50.0, -50.0, -10.0, -10.0)).is_empty());
    assert!(map.candidate_tiles(Rect::new(200.0, 200.0, 250.0, 250.0)).is_empty());
}

#[test]
fn test_backdrop_tiles_are_passable_candidates() {
    let map = TileMap::from_rows(16.0, &[".#"], Vec::new());

    let tiles = map.candidate_tiles(Rect::new(0.0, 0.0, 32.0, 16.0));

    assert_eq!(tiles.len(), 2);
    assert!(tiles[0].passable);
    assert!(!tiles[1].passable);
}

#[test]
fn test_tiles_skips_empty_cells() {
    let map = small_map();
    let tiles: Vec<_> = map.tiles().collect();
    assert_eq!(tiles.len(), 5);
    assert!(tiles.iter().all(|tile| !tile.passable));
}

#[test]
fn test_from_rows_pads_short_rows_and_ignores_unknown_glyphs() {
    let map = TileMap::from_rows(10.0, &["#", "#x#"], Vec::new());

    assert_eq!(map.bounds().right, 30.0);
    assert_eq!(map.kind_at(0, 0), TileKind::Stone);
    assert_eq!(map.kind_at(1, 0), TileKind::Empty);
    assert_eq!(map.kind_at(1, 1), TileKind::Empty);
    assert_eq!(map.kind_at(2, 1), TileKind::Stone);
    // Out of range reads as empty.
    assert_eq!(map.kind_at(9, 9), TileKind::Empty);
}

#[test]
fn test_glyphs() {
    assert_eq!(TileKind::from_glyph('#'), Some(TileKind::Stone));
    assert_eq!(TileKind::from_glyph('.'), Some(TileKind::Backdrop));
    assert_eq!(TileKind::from_glyph(' '), Some(TileKind::Empty));
    assert_eq!(TileKind::from_glyph('?'), None);
    assert!(TileKind::Backdrop.passable());
    assert!(!TileKind::Stone.passable());
}

#[test]
fn test_bounds_contains() {
    let bounds = small_map().bounds();
    assert!(bounds.contains(Rect::new(0.0, 0.0, 128.0, 96.0)));
    assert!(!bounds.contains(Rect::new(-1.0, 0.0, 10.0, 10.0)));
    assert!(!bounds.contains(Rect::new(100.0, 80.0, 130.0, 90.0)));
}

// -----------------------------------------------------------------------------
// Hazards
// -----------------------------------------------------------------------------

#[test]
fn test_environment_overlap_reports_coverage() {
    let hazards = vec![
        HazardRegion {
            kind: Environment::Water,
            rect: Rect::new(0.0, 0.0, 64.0, 32.0),
        },
        HazardRegion {
            kind: Environment::Fire,
            rect: Rect::new(200.0, 0.0, 232.0, 32.0),
        },
    ];
    let map = TileMap::from_rows(32.0, &["        "], hazards);

    let overlaps = map.environment_overlaps(Rect::new(32.0, 0.0, 96.0, 32.0));

    assert_eq!(overlaps.len(), 1);
    assert_eq!(overlaps[0].kind, Environment::Water);
    assert!(approx(overlaps[0].area, 0.5));
}

#[test]
fn test_touching_hazard_is_not_reported() {
    let hazards = vec![HazardRegion {
        kind: Environment::Fire,
        rect: Rect::new(0.0, 0.0, 32.0, 32.0),
    }];
    let map = TileMap::from_rows(32.0, &["    "], hazards);

    assert!(map
        .environment_overlaps(Rect::new(32.0, 0.0, 64.0, 32.0))
        .is_empty());
}

// -----------------------------------------------------------------------------
// Pickups
// -----------------------------------------------------------------------------

#[test]
fn test_diamond_collect_is_permanent() {
    let mut diamond = Diamond::new(Rect::new(0.0, 0.0, 8.0, 8.0));
    assert!(!diamond.is_collected());
    diamond.collect();
    diamond.collect();
    assert!(diamond.is_collected());
}

#[test]
fn test_lever_toggle_flips_state() {
    let mut lever = Lever::new(Rect::new(0.0, 0.0, 8.0, 16.0), true);
    assert!(lever.is_on());
    lever.toggle();
    assert!(!lever.is_on());
    assert_eq!(lever.bounds(), Rect::new(0.0, 0.0, 8.0, 16.0));
}

#[test]
fn test_level_lookups() {
    let mut level = Level {
        id: "test".to_string(),
        name: "Test".to_string(),
        map: small_map(),
        diamonds: vec![
            Diamond::new(Rect::new(0.0, 0.0, 8.0, 8.0)),
            Diamond::new(Rect::new(20.0, 0.0, 28.0, 8.0)),
        ],
        levers: Vec::new(),
        spawns: vec![Spawn {
            variant: Variant::Water,
            position: Vec2::new(8.0, 8.0),
            size: Vec2::new(16.0, 24.0),
        }],
    };

    assert!(level.spawn_for(Variant::Fire).is_none());
    assert_eq!(
        level.spawn_for(Variant::Water).map(|spawn| spawn.position),
        Some(Vec2::new(8.0, 8.0))
    );

    assert_eq!(level.diamonds_remaining(), 2);
    level.diamonds[1].collect();
    assert_eq!(level.diamonds_remaining(), 1);
}
