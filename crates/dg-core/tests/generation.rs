use dg_core::{
    CellKind, DungeonRng, GenerationError, GenerationPhase, Generator, GeneratorConfig, Point2d,
    Rect, RoomAreaPolicy, WorklistOrder,
};
use proptest::prelude::*;

fn generated(width: i32, height: i32, min: i32, max: i32, seed: u64) -> Generator {
    let mut g = Generator::new(Point2d::new(width, height), min, max, DungeonRng::new(seed))
        .expect("valid configuration");
    g.generate().expect("generation succeeds");
    g
}

/// A room is never carved over the room its free area was split around
fn assert_provenance(g: &Generator) {
    let rooms = g.rooms();
    for (i, room) in rooms.iter().enumerate().skip(1) {
        let parent = rooms[..i]
            .iter()
            .find(|p| p.source.split(&p.bounds).contains(&room.source))
            .unwrap_or_else(|| panic!("room {i} source {} has no parent", room.source));
        assert!(
            !room.bounds.intersects(&parent.bounds),
            "room {} overlaps its parent room {}",
            room.bounds,
            parent.bounds
        );
    }
}

fn assert_layout_invariants(g: &Generator) {
    let size = g.grid().size();
    let dungeon = Rect::new(0, 0, size.x, size.y);

    for room in g.rooms() {
        assert!(room.bounds.width() >= 3 && room.bounds.height() >= 3, "{}", room.bounds);
        assert!(dungeon.contains(&room.bounds), "{} outside dungeon", room.bounds);
        assert!(room.source.contains(&room.bounds), "{} outside {}", room.bounds, room.source);
    }

    for x in 0..size.x {
        for y in 0..size.y {
            if !g.grid().is_empty(x, y) {
                let p = Point2d::new(x, y);
                assert!(
                    g.rooms().iter().any(|r| r.bounds.contains_point(p)),
                    "stamped cell {p} belongs to no room"
                );
            }
        }
    }

    assert_provenance(g);
}

#[test]
fn test_reference_scenario_is_reproducible() {
    let a = generated(20, 20, 9, 100, 2024);
    let b = generated(20, 20, 9, 100, 2024);

    assert!(!a.rooms().is_empty());
    assert_eq!(a.rooms(), b.rooms());
    assert_eq!(a.render(), b.render());
    assert_layout_invariants(&a);
}

#[test]
fn test_render_shape_and_idempotence() {
    let g = generated(20, 20, 9, 100, 17);
    let text = g.render();

    assert_eq!(text, g.render());
    assert!(text.ends_with('\n'));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 20);
    assert!(lines.iter().all(|l| l.chars().count() == 20));
    assert!(text.chars().all(|c| matches!(c, ' ' | '#' | '+' | '\n')));
}

#[test]
fn test_render_agrees_with_cells() {
    let g = generated(31, 17, 12, 200, 4);
    for (y, line) in g.render().lines().enumerate() {
        for (x, c) in line.chars().enumerate() {
            assert_eq!(c, g.grid().cell(x as i32, y as i32).symbol());
        }
    }
}

#[test]
fn test_area_below_minimum_yields_empty_grid() {
    let g = generated(5, 5, 50, 100, 42);
    assert!(g.rooms().is_empty());
    assert_eq!(g.phase(), GenerationPhase::Done);
    assert_eq!(g.grid().count(CellKind::Empty), 25);
    assert_eq!(g.render(), "     \n     \n     \n     \n     \n");
}

#[test]
fn test_dungeon_at_minimum_stays_queued() {
    let g = generated(3, 3, 9, 9, 0);
    assert_eq!(g.phase(), GenerationPhase::Done);
    assert!(g.rooms().is_empty());
    assert_eq!(g.free_areas().collect::<Vec<_>>(), vec![&Rect::new(0, 0, 3, 3)]);
}

#[test]
fn test_stock_configuration() {
    let mut g = Generator::with_config(GeneratorConfig::default(), DungeonRng::new(1)).unwrap();
    g.generate().unwrap();
    assert_eq!(g.render().lines().count(), 50);
    assert!(!g.rooms().is_empty());
    assert_layout_invariants(&g);
}

#[test]
fn test_split_regression() {
    let strips = Rect::new(0, 0, 10, 10).split(&Rect::new(2, 3, 4, 2));
    assert_eq!(
        strips,
        vec![
            Rect::new(0, 0, 2, 10),
            Rect::new(0, 0, 8, 3),
            Rect::new(6, 3, 4, 7),
            Rect::new(2, 5, 4, 5),
        ]
    );
}

#[test]
fn test_degenerate_dungeon_aborts() {
    let mut g =
        Generator::new(Point2d::new(40, 1), 9, 100, DungeonRng::new(3)).expect("valid config");
    assert_eq!(
        g.generate(),
        Err(GenerationError::InvalidBounds { width: 40, height: 1 })
    );
}

fn inner_rect() -> impl Strategy<Value = (Rect, Rect)> {
    (-20i32..20, -20i32..20, 1i32..40, 1i32..40).prop_flat_map(|(x, y, w, h)| {
        (0..w, 0..h).prop_flat_map(move |(dx, dy)| {
            (0..=w - dx, 0..=h - dy).prop_map(move |(iw, ih)| {
                (Rect::new(x, y, w, h), Rect::new(x + dx, y + dy, iw, ih))
            })
        })
    })
}

proptest! {
    #[test]
    fn prop_split_strips_stay_inside_and_avoid_inner((outer, inner) in inner_rect()) {
        let strips = outer.split(&inner);
        prop_assert!(strips.len() <= 4);
        for strip in &strips {
            prop_assert!(outer.contains(strip), "{} outside {}", strip, outer);
            prop_assert!(!strip.intersects(&inner), "{} overlaps {}", strip, inner);
            prop_assert!(strip.width() >= 0 && strip.height() >= 0);
        }
    }

    #[test]
    fn prop_generation_invariants(
        width in 3i32..60,
        height in 3i32..60,
        min in 1i32..60,
        extra in 0i32..300,
        seed in any::<u64>(),
    ) {
        let g = generated(width, height, min, min + extra, seed);
        prop_assert_eq!(g.phase(), GenerationPhase::Done);
        prop_assert!(g.free_areas().all(|a| a.area() <= min));
        if width * height > min {
            prop_assert_eq!(g.free_areas().count(), 0);
        }
        prop_assert!(g.corridors().is_empty());
        prop_assert_eq!(g.grid().count(CellKind::Floor), 0);
        assert_layout_invariants(&g);
    }

    #[test]
    fn prop_same_seed_same_layout(
        width in 3i32..40,
        height in 3i32..40,
        seed in any::<u64>(),
        largest_first in any::<bool>(),
        bounded in any::<bool>(),
    ) {
        let config = GeneratorConfig {
            worklist_order: if largest_first { WorklistOrder::LargestFirst } else { WorklistOrder::Fifo },
            room_area_policy: if bounded { RoomAreaPolicy::Bounded } else { RoomAreaPolicy::FirstDraw },
            ..GeneratorConfig::new(Point2d::new(width, height), 9, 100)
        };
        let mut a = Generator::with_config(config.clone(), DungeonRng::new(seed)).unwrap();
        let mut b = Generator::with_config(config, DungeonRng::new(seed)).unwrap();
        a.generate().unwrap();
        b.generate().unwrap();
        prop_assert_eq!(a.rooms(), b.rooms());
        prop_assert_eq!(a.render(), b.render());
        assert_layout_invariants(&a);
    }
}
