use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tempfile::tempdir;

#[derive(Debug, Deserialize)]
struct EventLog {
    events: Vec<EventLogEntry>,
}

#[derive(Debug, Deserialize)]
struct EventLogEntry {
    sequence: u32,
    label: String,
}

fn run_harness(args: &[&str]) -> Result<(bool, String)> {
    let output = Command::new(env!("CARGO_BIN_EXE_aventura_engine"))
        .args(args)
        .output()
        .context("executing aventura_engine harness")?;
    let mut transcript = String::from_utf8_lossy(&output.stdout).to_string();
    transcript.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok((output.status.success(), transcript))
}

fn read_json(path: &Path) -> Result<Value> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading JSON artifact from {}", path.display()))?;
    let value: Value = serde_json::from_str(&data)
        .with_context(|| format!("parsing JSON artifact from {}", path.display()))?;
    Ok(value)
}

#[test]
fn conejo_demo_befriends_the_rabbit() -> Result<()> {
    let temp = tempdir().context("creating temporary directory for session artifacts")?;
    let store_path = temp.path().join("sesion.json");
    let event_log_path = temp.path().join("events.json");
    let state_path = temp.path().join("state.json");

    let store_str = store_path.to_str().context("store path is not valid UTF-8")?;
    let event_log_str = event_log_path
        .to_str()
        .context("event log path is not valid UTF-8")?;
    let state_str = state_path.to_str().context("state path is not valid UTF-8")?;

    let (success, transcript) = run_harness(&[
        "--store",
        store_str,
        "--demo",
        "conejo",
        "--event-log-json",
        event_log_str,
        "--state-json",
        state_str,
    ])?;

    assert!(success, "harness exited with failure: {transcript}");
    for marker in [
        "demo.start conejo",
        "friend.add Conejo",
        "popup ¡Has regalado una zanahoria al conejo!",
        "demo.end conejo",
    ] {
        assert!(
            transcript.contains(marker),
            "{marker} missing from transcript: {transcript}"
        );
    }

    let state = read_json(&state_path)?;
    assert_eq!(state["current_location"], "bosqueConejoContento");
    assert_eq!(state["friends"], serde_json::json!(["Conejo"]));
    assert_eq!(
        state["inventory"],
        serde_json::json!([{ "nombre": "botiquin", "cantidad": 1 }])
    );
    assert!(state["selected_item"].is_null());

    let raw = fs::read_to_string(&event_log_path).context("reading session event log")?;
    let log: EventLog = serde_json::from_str(&raw).context("parsing session event log")?;
    assert_eq!(
        log.events.first().map(|event| event.label.as_str()),
        Some("session.start resume")
    );
    assert!(log
        .events
        .iter()
        .any(|event| event.label == "puzzle.solved bosqueConejo Conejo"));
    assert!(log
        .events
        .windows(2)
        .all(|pair| pair[0].sequence < pair[1].sequence));

    // The backing file holds the four session documents.
    let saved = read_json(&store_path)?;
    assert_eq!(saved["amigos"], serde_json::json!(["Conejo"]));
    assert_eq!(saved["personajes"], serde_json::json!(["Alba", "Diego"]));
    let visited = saved["lugaresVisitados"]
        .as_array()
        .context("visited document is an array")?;
    assert!(visited.iter().any(|entry| entry == "bosqueConejo"));
    Ok(())
}

#[test]
fn saved_progress_resumes_until_reset() -> Result<()> {
    let temp = tempdir().context("creating temporary directory for session artifacts")?;
    let store_path = temp.path().join("sesion.json");
    let store_str = store_path.to_str().context("store path is not valid UTF-8")?;

    let (success, transcript) = run_harness(&["--store", store_str, "--demo", "zorro"])?;
    assert!(success, "zorro demo failed: {transcript}");
    assert!(transcript.contains("friend.add ZorroPolar"));

    // A plain reboot keeps the cured fox and the spent first-aid kit.
    let resumed_path = temp.path().join("resumed.json");
    let resumed_str = resumed_path
        .to_str()
        .context("resumed state path is not valid UTF-8")?;
    let (success, transcript) = run_harness(&["--store", store_str, "--state-json", resumed_str])?;
    assert!(success, "resume run failed: {transcript}");
    assert!(transcript.contains("session.start resume"));
    assert!(
        !transcript.contains("location.first_visit bosque"),
        "resumed session re-narrated the start location: {transcript}"
    );

    let state = read_json(&resumed_path)?;
    assert_eq!(state["friends"], serde_json::json!(["ZorroPolar"]));
    assert_eq!(state["inventory"], serde_json::json!([]));
    assert_eq!(state["current_location"], "bosque");

    // An explicit reset reseeds every document.
    let reset_path = temp.path().join("reset.json");
    let reset_str = reset_path
        .to_str()
        .context("reset state path is not valid UTF-8")?;
    let (success, transcript) =
        run_harness(&["--store", store_str, "--reset", "--state-json", reset_str])?;
    assert!(success, "reset run failed: {transcript}");
    assert!(transcript.contains("session.start reset"));

    let state = read_json(&reset_path)?;
    assert_eq!(state["friends"], serde_json::json!([]));
    assert_eq!(
        state["inventory"],
        serde_json::json!([{ "nombre": "botiquin", "cantidad": 1 }])
    );
    assert_eq!(state["visited"], serde_json::json!(["bosque"]));
    Ok(())
}

#[test]
fn script_replay_befriends_the_seal() -> Result<()> {
    let temp = tempdir().context("creating temporary directory for session artifacts")?;
    let store_path = temp.path().join("sesion.json");
    let script_path = temp.path().join("focas.json");
    let scene_path = temp.path().join("scene.json");

    let script = r#"[
        { "op": "move", "target": "bosqueArbolMagico" },
        { "op": "move", "target": "playa" },
        { "op": "move", "target": "playa2" },
        { "op": "acquire", "item": "pechina" },
        { "op": "move", "target": "playaFocas" },
        { "op": "move", "target": "casaFocas" },
        { "op": "select", "item": "pechina" },
        { "op": "use_item" }
    ]"#;
    fs::write(&script_path, script).context("writing command script")?;

    let store_str = store_path.to_str().context("store path is not valid UTF-8")?;
    let script_str = script_path.to_str().context("script path is not valid UTF-8")?;
    let scene_str = scene_path.to_str().context("scene path is not valid UTF-8")?;

    let (success, transcript) = run_harness(&[
        "--store",
        store_str,
        "--script",
        script_str,
        "--scene-json",
        scene_str,
    ])?;

    assert!(success, "script replay failed: {transcript}");
    for marker in [
        "script.start commands=8",
        "friend.add Foca",
        "popup ¡Has regalado la pechina a la foca!",
        "script.end",
    ] {
        assert!(
            transcript.contains(marker),
            "{marker} missing from transcript: {transcript}"
        );
    }

    // The session ends back on the beach, with the seal-house entry gone.
    let scene = read_json(&scene_path)?;
    assert_eq!(scene["location"], "playaFocas");
    assert_eq!(scene["item_interactive"], false);
    let actions = scene["actions"]
        .as_array()
        .context("scene actions are an array")?;
    assert!(actions.iter().all(|action| action["target"] != "casaFocas"));
    assert!(actions.iter().any(|action| action["target"] == "playa"));
    Ok(())
}

#[test]
fn demo_and_script_flags_conflict() -> Result<()> {
    let temp = tempdir().context("creating temporary directory for session artifacts")?;
    let script_path = temp.path().join("vacio.json");
    fs::write(&script_path, "[]").context("writing empty command script")?;
    let script_str = script_path.to_str().context("script path is not valid UTF-8")?;

    let (success, transcript) = run_harness(&["--demo", "conejo", "--script", script_str])?;
    assert!(!success, "conflicting flags were accepted: {transcript}");
    assert!(transcript.contains("--demo cannot be combined with --script"));
    Ok(())
}
