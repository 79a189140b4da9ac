//! Tests for the controller boundary: dealing, input filtering, notifications.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use strictly_memory::{
    GAME_OVER_TITLE, GridSize, ICONS_UNAVAILABLE_TITLE, Icon, IconCatalog, IconSupply,
    IconSupplyError, ManualClock, SeasonIcons, Season, SelectionOutcome, Severity, TileId,
    UNEXPECTED_ERROR_TITLE,
};
use strictly_memory_game::{DEFAULT_CATALOG, GameConfig, GameController};

fn one_pair_config() -> GameConfig {
    GameConfig::default().with_grid_size(GridSize::new(1).unwrap())
}

fn catalog() -> IconCatalog {
    IconCatalog::new(vec![SeasonIcons::new(
        Season::Winter,
        vec![Icon::from("❄️"), Icon::from("⛄")],
    )])
}

/// Finds the two tile ids carrying `icon`.
fn tiles_with(controller: &GameController<ManualClock>, icon: &Icon) -> Vec<TileId> {
    controller
        .session()
        .unwrap()
        .board()
        .tiles()
        .iter()
        .filter(|tile| tile.icon() == icon)
        .map(|tile| *tile.id())
        .collect()
}

#[test]
fn test_bundled_catalog_covers_every_season() {
    let catalog = IconCatalog::from_json_str(DEFAULT_CATALOG).unwrap();
    for season in [Season::Winter, Season::Summer, Season::Rainy, Season::Spring] {
        let icons = catalog.icons_for_season(season).unwrap();
        assert!(icons.len() >= GridSize::DEFAULT.distinct_icons(), "{season}");
    }
}

#[test]
fn test_missing_season_reports_error_and_leaves_board_empty() {
    let mut controller = GameController::new(GameConfig::default(), ManualClock::new());
    let started = controller.start(&catalog(), Season::Summer, &mut StdRng::seed_from_u64(1));

    assert!(!started);
    assert!(controller.session().is_none());
    let notifications = controller.drain_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title(), ICONS_UNAVAILABLE_TITLE);
    assert_eq!(*notifications[0].severity(), Severity::Error);
    assert!(controller.drain_notifications().is_empty());
}

#[test]
fn test_pool_too_small_reports_error() {
    let mut controller = GameController::new(GameConfig::default(), ManualClock::new());
    assert!(!controller.start(&catalog(), Season::Winter, &mut StdRng::seed_from_u64(1)));
    assert!(controller.drain_notifications()[0].is_error());
}

struct FailingSupply;

impl IconSupply for FailingSupply {
    fn icons_for_season(&self, _season: Season) -> Result<Vec<Icon>, IconSupplyError> {
        Err(IconSupplyError::Unreadable {
            message: "connection refused".to_string(),
        })
    }
}

#[test]
fn test_supply_failure_message_is_surfaced() {
    let mut controller = GameController::new(GameConfig::default(), ManualClock::new());
    assert!(!controller.start(&FailingSupply, Season::Rainy, &mut StdRng::seed_from_u64(1)));
    let notifications = controller.drain_notifications();
    assert!(notifications[0].message().contains("connection refused"));
}

#[test]
fn test_full_game_emits_game_over() {
    let clock = ManualClock::new();
    let mut controller = GameController::new(one_pair_config(), clock.clone());
    assert!(controller.start(&catalog(), Season::Winter, &mut StdRng::seed_from_u64(9)));
    assert_eq!(controller.session().unwrap().board().len(), 4);

    for icon in [Icon::from("❄️"), Icon::from("⛄")] {
        let ids = tiles_with(&controller, &icon);
        assert_eq!(ids.len(), 2);
        assert_eq!(controller.select(ids[0]), Some(SelectionOutcome::AwaitingPair));
        clock.advance(Duration::from_millis(500));
        assert_eq!(
            controller.select(ids[1]),
            Some(SelectionOutcome::Match {
                pair: [ids[0], ids[1]]
            })
        );
        clock.advance(Duration::from_millis(600));
        controller.tick();
    }

    assert!(controller.is_finished());
    let notifications = controller.drain_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title(), GAME_OVER_TITLE);
    assert_eq!(*notifications[0].severity(), Severity::Success);
    assert!(notifications[0].message().contains("2.2 seconds"));
}

#[test]
fn test_matched_tiles_are_ignored() {
    let clock = ManualClock::new();
    let mut controller = GameController::new(one_pair_config(), clock.clone());
    controller.start(&catalog(), Season::Winter, &mut StdRng::seed_from_u64(4));

    let ids = tiles_with(&controller, &Icon::from("❄️"));
    controller.select(ids[0]);
    controller.select(ids[1]);
    clock.advance(Duration::from_millis(600));

    // select() runs due actions first, so the pair is already gone.
    assert_eq!(controller.select(ids[0]), None);
    assert_eq!(controller.session().unwrap().clicks(), 2);
    assert!(controller.drain_notifications().is_empty());
}

#[test]
fn test_unknown_tile_becomes_error_notification() {
    let mut controller = GameController::new(one_pair_config(), ManualClock::new());
    controller.start(&catalog(), Season::Winter, &mut StdRng::seed_from_u64(4));

    assert_eq!(controller.select(TileId::new(40)), None);
    let notifications = controller.drain_notifications();
    assert_eq!(notifications[0].title(), UNEXPECTED_ERROR_TITLE);
}

#[test]
fn test_select_without_game_is_ignored() {
    let mut controller = GameController::new(GameConfig::default(), ManualClock::new());
    assert_eq!(controller.select(TileId::new(0)), None);
    assert!(controller.tick().is_empty());
}
