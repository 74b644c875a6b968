use std::{fs, path::Path};

use anyhow::{Context, Result};
use aventura_engine::Session;
use serde::Deserialize;

/// One scripted player gesture, as read from a JSON replay file.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionCommand {
    Move { target: String },
    Acquire { item: String },
    Select { item: String },
    UseItem,
    Befriend { friend: String, return_to: String },
}

/// Replays a JSON list of commands against the session, in order.
pub fn run_script(session: &mut Session<'_>, path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read command script: {}", path.display()))?;
    let commands: Vec<SessionCommand> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse command script: {}", path.display()))?;

    session.log_event(format!("script.start commands={}", commands.len()));
    for command in &commands {
        apply(session, command)?;
    }
    session.log_event("script.end");
    Ok(())
}

fn apply(session: &mut Session<'_>, command: &SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Move { target } => session.change_location(target)?,
        SessionCommand::Acquire { item } => {
            // Picking an item up re-enters the location, like the scene
            // button does.
            session.acquire_item(item);
            let here = session.state().current_location().to_string();
            session.change_location(&here)?;
        }
        SessionCommand::Select { item } => session.toggle_selected(item),
        SessionCommand::UseItem => {
            session.try_use_item()?;
        }
        SessionCommand::Befriend { friend, return_to } => {
            session.befriend(friend, return_to)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_from_tagged_json() {
        let raw = r#"[
            { "op": "move", "target": "bosqueArbolMagico" },
            { "op": "acquire", "item": "zanahoria" },
            { "op": "select", "item": "zanahoria" },
            { "op": "use_item" },
            { "op": "befriend", "friend": "Conejo", "return_to": "bosque" }
        ]"#;
        let commands: Vec<SessionCommand> = serde_json::from_str(raw).expect("parse");
        assert_eq!(commands.len(), 5);
        assert!(matches!(
            &commands[0],
            SessionCommand::Move { target } if target == "bosqueArbolMagico"
        ));
        assert!(matches!(&commands[3], SessionCommand::UseItem));
    }

    #[test]
    fn unknown_ops_are_rejected() {
        let raw = r#"[{ "op": "dance" }]"#;
        assert!(serde_json::from_str::<Vec<SessionCommand>>(raw).is_err());
    }
}
