//! Tests for the resolver driven directly with borrowed components.

use std::time::Duration;
use strictly_memory::{
    Board, DeferredAction, Deck, Icon, MatchResolver, ResolveContext, Selection,
    SelectionOutcome, SessionTimer, TaskQueue, TileId,
};

struct Table {
    board: Board,
    timer: SessionTimer,
    tasks: TaskQueue,
    resolver: MatchResolver,
}

impl Table {
    fn new(names: &[&str]) -> Self {
        let deck = Deck::from_icons(names.iter().copied().map(Icon::from).collect()).unwrap();
        Self {
            board: Board::new(&deck),
            timer: SessionTimer::new(),
            tasks: TaskQueue::new(),
            resolver: MatchResolver::new(),
        }
    }

    fn select(&mut self, index: usize, icon: &str, now_ms: u64) -> SelectionOutcome {
        let ctx = ResolveContext {
            board: &mut self.board,
            timer: &mut self.timer,
            tasks: &mut self.tasks,
            now: Duration::from_millis(now_ms),
            reveal_delay: Duration::from_millis(600),
        };
        self.resolver
            .on_tile_selected(&Selection::new(icon, TileId::new(index)), ctx)
            .unwrap()
    }
}

#[test]
fn test_first_click_starts_timer() {
    let mut table = Table::new(&["A", "A"]);
    assert_eq!(table.timer.started_at(), None);

    table.select(0, "A", 250);
    assert_eq!(table.timer.started_at(), Some(Duration::from_millis(250)));
    assert_eq!(table.resolver.previous().map(|s| s.tile_id), Some(TileId::new(0)));

    table.select(0, "A", 400);
    table.select(1, "A", 900);
    assert_eq!(table.timer.started_at(), Some(Duration::from_millis(250)));
}

#[test]
fn test_match_schedules_removal_after_delay() {
    let mut table = Table::new(&["A", "B", "B", "A"]);
    table.select(1, "B", 0);
    table.select(2, "B", 100);

    let task = table.tasks.pending().next().copied().unwrap();
    assert_eq!(task.due, Duration::from_millis(700));
    assert_eq!(
        task.action,
        DeferredAction::RemovePair([TileId::new(1), TileId::new(2)])
    );
}

#[test]
fn test_comparison_uses_event_icons() {
    let mut table = Table::new(&["A", "A", "B", "B"]);
    table.select(0, "A", 0);
    // The event source is trusted: tile 2 reported as "A" counts as a match.
    assert_eq!(
        table.select(2, "A", 10),
        SelectionOutcome::Match {
            pair: [TileId::new(0), TileId::new(2)]
        }
    );
}

#[test]
fn test_apply_deferred_hide_and_remove() {
    let mut table = Table::new(&["A", "B", "A", "B"]);
    table.select(0, "A", 0);
    table.select(1, "B", 10);

    let hide = DeferredAction::HidePair([TileId::new(0), TileId::new(1)]);
    let done = table
        .resolver
        .apply_deferred(hide, &mut table.board, &mut table.timer, Duration::from_millis(610))
        .unwrap();
    assert_eq!(done, None);
    assert_eq!(table.board.active_count(), 4);

    let remove = DeferredAction::RemovePair([TileId::new(0), TileId::new(2)]);
    let done = table
        .resolver
        .apply_deferred(remove, &mut table.board, &mut table.timer, Duration::from_millis(700))
        .unwrap();
    assert_eq!(done, None);
    assert_eq!(table.board.active_count(), 2);
    assert!(table.timer.is_running());
}
