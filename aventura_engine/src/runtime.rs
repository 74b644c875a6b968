use std::{fs, rc::Rc};

use anyhow::{Context, Result};
use aventura_engine::{RecordingSceneSink, SceneSink, Session, SessionPolicy};
use aventura_store::SessionStore;
use aventura_world::campaign_world;
use serde::Serialize;

use crate::cli::Args;
use crate::demo::{run_demo, DemoOptions};
use crate::script::run_script;

pub fn execute(args: Args) -> Result<()> {
    let Args {
        store,
        reset,
        demo,
        script,
        event_log_json,
        scene_json,
        state_json,
    } = args;

    let demo = match demo.as_ref() {
        Some(slug) => Some(DemoOptions::parse(slug)?),
        None => None,
    };

    let world = campaign_world();
    let session_store =
        SessionStore::from_json_file(store.as_deref()).context("loading session store")?;
    if let Some(path) = store.as_ref() {
        log::info!("session store backed by {}", path.display());
    }

    let policy = if reset {
        SessionPolicy::Reset
    } else {
        SessionPolicy::Resume
    };
    let recorder = Rc::new(RecordingSceneSink::new());
    let sink = recorder.clone() as Rc<dyn SceneSink>;
    let mut session = Session::start(&world, session_store, Some(sink), policy)?;

    if let Some(options) = demo.as_ref() {
        run_demo(&mut session, options)?;
    }
    if let Some(path) = script.as_deref() {
        run_script(&mut session, path)?;
    }

    session.flush().context("saving session store")?;

    for line in session.events() {
        println!("{line}");
    }
    print_summary(&session, &recorder);

    if let Some(path) = event_log_json.as_deref() {
        let event_log = build_event_log(session.events());
        let json = serde_json::to_string_pretty(&event_log)
            .context("serializing session event log to JSON")?;
        fs::write(path, &json)
            .with_context(|| format!("writing session event log to {}", path.display()))?;
        println!("Saved session event log to {}", path.display());
    }

    if let Some(path) = scene_json.as_deref() {
        let scene = session.current_scene()?;
        let json =
            serde_json::to_string_pretty(&scene).context("serializing scene view to JSON")?;
        fs::write(path, &json)
            .with_context(|| format!("writing scene view to {}", path.display()))?;
        println!("Saved scene view to {}", path.display());
    }

    if let Some(path) = state_json.as_deref() {
        let json = serde_json::to_string_pretty(session.state())
            .context("serializing session state to JSON")?;
        fs::write(path, &json)
            .with_context(|| format!("writing session state to {}", path.display()))?;
        println!("Saved session state to {}", path.display());
    }

    Ok(())
}

fn print_summary(session: &Session<'_>, recorder: &RecordingSceneSink) {
    let state = session.state();
    let inventory: Vec<String> = state
        .inventory()
        .iter()
        .map(|entry| format!("{} x{}", entry.name, entry.quantity))
        .collect();

    println!();
    println!("Session summary:");
    println!("  location: {}", state.current_location());
    println!("  friends: {}", join_or_none(state.friends()));
    println!("  inventory: {}", join_or_none(&inventory));
    println!("  visited: {}", join_or_none(state.visited()));
    println!(
        "  sink: {} scene updates, {} panel updates, {} popups",
        recorder.scenes().len(),
        recorder.panels().len(),
        recorder.popups().len()
    );
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

#[derive(Serialize)]
struct EventLogEntry {
    sequence: u32,
    label: String,
}

#[derive(Serialize)]
struct EventLog {
    events: Vec<EventLogEntry>,
}

fn build_event_log(events: &[String]) -> EventLog {
    let events = events
        .iter()
        .enumerate()
        .map(|(index, label)| EventLogEntry {
            sequence: index as u32,
            label: label.clone(),
        })
        .collect();
    EventLog { events }
}
