//! Line-based terminal front end.
//!
//! Tile numbers are typed on stdin. Deferred hide/remove actions are woken
//! by a tokio timer racing the next input line, so a pair resolves on time
//! even while the player is idle.

use crate::config::GameConfig;
use crate::controller::GameController;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use strictly_memory::{
    Clock, IconCatalog, IconSupply, Notification, SelectionOutcome, SystemClock, TileId,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, instrument, warn};

/// Icon catalog bundled with the binary.
pub const DEFAULT_CATALOG: &str = include_str!("../assets/icons.json");

/// Input line parsed from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn over a tile.
    Select(TileId),
    /// Leave the game.
    Quit,
    /// Anything unrecognised.
    Invalid,
}

/// Parses one input line.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Command::Quit;
    }
    line.parse::<usize>()
        .map(|index| Command::Select(TileId::new(index)))
        .unwrap_or(Command::Invalid)
}

/// Loads the configured icon catalog, falling back to the bundled one.
#[instrument(skip(config))]
pub fn load_catalog(config: &GameConfig) -> Result<IconCatalog> {
    let catalog = match config.icons_path() {
        Some(path) => IconCatalog::from_file(path)?,
        None => IconCatalog::from_json_str(DEFAULT_CATALOG)?,
    };
    Ok(catalog)
}

/// Builds the deal RNG: seeded when configured, OS entropy otherwise.
pub fn deal_rng(config: &GameConfig) -> StdRng {
    match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    }
}

/// Renders the board plus a status line.
pub fn render<C: Clock + Clone>(controller: &GameController<C>) -> String {
    let Some(session) = controller.session() else {
        return String::from("(no game)");
    };
    format!(
        "{}\n{} clicks, {} of {} tiles left",
        session.board().display(*controller.config().columns()),
        session.clicks(),
        session.board().active_count(),
        session.board().len(),
    )
}

fn describe(outcome: SelectionOutcome) -> Option<&'static str> {
    match outcome {
        SelectionOutcome::AwaitingPair => None,
        SelectionOutcome::Reselected => Some("Same tile twice: turned back over."),
        SelectionOutcome::Mismatch { .. } => Some("No match."),
        SelectionOutcome::Match { .. } => Some("Match!"),
    }
}

async fn write_line(out: &mut tokio::io::Stdout, text: &str) -> Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}

async fn flush_notifications<C: Clock + Clone>(
    out: &mut tokio::io::Stdout,
    controller: &mut GameController<C>,
) -> Result<Vec<Notification>> {
    let notifications = controller.drain_notifications();
    for notification in &notifications {
        write_line(out, &notification.to_string()).await?;
    }
    Ok(notifications)
}

/// Plays one game on stdin/stdout until it is won, quit, or input ends.
#[instrument(skip(config))]
pub async fn run_play(config: GameConfig) -> Result<()> {
    let season = config.resolved_season();
    let mut rng = deal_rng(&config);
    let mut out = tokio::io::stdout();

    // A broken catalog is reported like an empty one: the game just doesn't start.
    let supply: Box<dyn IconSupply> = match load_catalog(&config) {
        Ok(catalog) => Box::new(catalog),
        Err(e) => {
            write_line(&mut out, &Notification::icons_unavailable(e).to_string()).await?;
            return Ok(());
        }
    };

    let mut controller = GameController::new(config, SystemClock::new());
    if !controller.start(supply.as_ref(), season, &mut rng) {
        flush_notifications(&mut out, &mut controller).await?;
        return Ok(());
    }

    info!(%season, "Game started");
    write_line(
        &mut out,
        &format!("Season: {season}. Type a tile number, or q to quit."),
    )
    .await?;
    write_line(&mut out, &render(&controller)).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let wait = controller
            .session()
            .and_then(|session| session.until_next_due());

        tokio::select! {
            _ = tokio::time::sleep(wait.unwrap_or(Duration::ZERO)), if wait.is_some() => {
                let events = controller.tick();
                debug!(count = events.len(), "Deferred actions ran");
                flush_notifications(&mut out, &mut controller).await?;
                write_line(&mut out, &render(&controller)).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("Input closed");
                    break;
                };
                match parse_command(&line) {
                    Command::Quit => {
                        info!("Player quit");
                        break;
                    }
                    Command::Invalid => {
                        warn!(input = %line, "Unrecognised input");
                        write_line(&mut out, "Type a tile number, or q to quit.").await?;
                    }
                    Command::Select(tile_id) => {
                        let outcome = controller.select(tile_id);
                        flush_notifications(&mut out, &mut controller).await?;
                        write_line(&mut out, &render(&controller)).await?;
                        if let Some(text) = outcome.and_then(describe) {
                            write_line(&mut out, text).await?;
                        }
                    }
                }
            }
        }

        if controller.is_finished() {
            break;
        }
    }

    Ok(())
}
