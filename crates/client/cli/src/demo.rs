//! Scripted bot-vs-bot duel.
use anyhow::{Result, anyhow};
use duel_core::{DuelKind, PlayerId, SessionView};
use duel_runtime::{DuelEngine, DuelEvent, Event, ProgressRepository, Topic};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::DemoArgs;
use crate::render;
use crate::setup::{self, Table};

const FIRST: PlayerId = PlayerId::new(1);
const SECOND: PlayerId = PlayerId::new(2);

pub async fn run(args: &DemoArgs, table: Table) -> Result<()> {
    let [first_character, second_character] =
        setup::choose_characters(&table.engine, &args.characters)?;
    setup::enroll(&table, FIRST, &first_character)?;
    setup::enroll(&table, SECOND, &second_character)?;
    info!(
        "{FIRST} plays {first_character}, {SECOND} plays {second_character} ({} duel)",
        args.kind()
    );

    let printer = args
        .events
        .then(|| spawn_event_printer(table.engine.subscribe(Topic::Duel)));

    let mut view = start(&table.engine, args.kind())?;
    println!("{}", render::board(&view));

    let mut turns = 0;
    let mut winner = None;
    while let Some(owner) = view.turn_owner {
        if turns >= args.turns {
            warn!("turn limit reached, {owner} forfeits");
            winner = table.engine.forfeit(owner)?;
            break;
        }
        let slot = pick_slot(&view, owner)
            .ok_or_else(|| anyhow!("{owner} has no affordable ability"))?;
        let result = table.engine.act(owner, slot)?;
        turns += 1;

        println!("{}", result.report.log);
        println!("{}", render::board(&result.view));
        if let Some(rewards) = result.rewards {
            println!(
                "{} +{} trophies +{} souls, {} {} trophies",
                rewards.winner.player,
                rewards.winner.trophies,
                rewards.winner.souls,
                rewards.loser.player,
                rewards.loser.trophies
            );
        }
        winner = result.winner;
        view = result.view;
    }

    if let Some(winner) = winner {
        println!("{winner} wins after {turns} turns");
    }
    for player in [FIRST, SECOND] {
        let progress = table.repo.progress(player)?;
        println!(
            "{player}: {} trophies, {} souls",
            progress.trophies, progress.souls
        );
    }

    if let Some(printer) = printer {
        if let Err(err) = printer.await {
            warn!("event printer failed: {err}");
        }
    }
    Ok(())
}

fn start(engine: &DuelEngine, kind: DuelKind) -> Result<SessionView> {
    match kind {
        DuelKind::Friendly => {
            engine.challenge(FIRST, SECOND)?;
            Ok(engine.accept_challenge(SECOND)?)
        }
        DuelKind::Ranked => {
            engine.enqueue_for_match(SECOND)?;
            let session = engine
                .enqueue_for_match(FIRST)?
                .ok_or_else(|| anyhow!("no ranked opponent found"))?;
            Ok(engine.accept_session(session)?)
        }
    }
}

/// Most expensive affordable ability, lowest slot on ties.
fn pick_slot(view: &SessionView, player: PlayerId) -> Option<u8> {
    view.fighter_for(player)?
        .slots
        .iter()
        .filter(|slot| slot.affordable)
        .max_by_key(|slot| (slot.energy_cost, std::cmp::Reverse(slot.slot)))
        .map(|slot| slot.slot)
}

fn spawn_event_printer(mut events: broadcast::Receiver<Event>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    match serde_json::to_string(&event) {
                        Ok(line) => println!("{line}"),
                        Err(err) => warn!("failed to encode event: {err}"),
                    }
                    if matches!(event, Event::Duel(DuelEvent::DuelFinished { .. })) {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => warn!("event printer skipped {skipped} events"),
                Err(RecvError::Closed) => break,
            }
        }
    })
}
