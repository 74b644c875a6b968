use anyhow::{anyhow, bail, Result};
use aventura_engine::{Session, UseOutcome};
use aventura_world::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DemoSlug {
    Conejo,
    Zorro,
    Foca,
}

impl DemoSlug {
    fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "conejo" => Some(DemoSlug::Conejo),
            "zorro" => Some(DemoSlug::Zorro),
            "foca" => Some(DemoSlug::Foca),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DemoSlug::Conejo => "conejo",
            DemoSlug::Zorro => "zorro",
            DemoSlug::Foca => "foca",
        }
    }

    fn gift(&self) -> &'static str {
        match self {
            DemoSlug::Conejo => "zanahoria",
            DemoSlug::Zorro => "botiquin",
            DemoSlug::Foca => "pechina",
        }
    }

    /// Where the gift is lying around. The fox demo relies on the first-aid
    /// kit every fresh session starts with.
    fn pickup_at(&self) -> Option<&'static str> {
        match self {
            DemoSlug::Conejo => Some("bosque2"),
            DemoSlug::Zorro => None,
            DemoSlug::Foca => Some("playa2"),
        }
    }

    fn route(&self) -> &'static [&'static str] {
        match self {
            DemoSlug::Conejo => &["bosqueArbolMagico", "bosque2", "bosqueConejo"],
            DemoSlug::Zorro => &["bosqueArbolMagico", "montaña", "zorroHerido"],
            DemoSlug::Foca => &[
                "bosqueArbolMagico",
                "playa",
                "playa2",
                "playaFocas",
                "casaFocas",
            ],
        }
    }
}

#[derive(Clone)]
pub struct DemoOptions {
    slug: DemoSlug,
}

impl DemoOptions {
    pub fn parse(value: &str) -> Result<Self> {
        let slug = DemoSlug::from_str(value)
            .ok_or_else(|| anyhow!("unknown walkthrough demo: {}", value))?;
        Ok(Self { slug })
    }

    fn slug(&self) -> DemoSlug {
        self.slug
    }
}

/// Plays one puzzle from the start location to its resolution, driving the
/// session only through actions the current scene actually offers.
pub fn run_demo(session: &mut Session<'_>, options: &DemoOptions) -> Result<()> {
    let slug = options.slug();
    session.log_event(format!("demo.start {}", slug.label()));

    for hop in slug.route() {
        step_to(session, hop)?;
        if slug.pickup_at() == Some(*hop) {
            pick_up(session, slug.gift())?;
        }
    }

    session.toggle_selected(slug.gift());
    let outcome = session.try_use_item()?;
    if !matches!(outcome, UseOutcome::Solved { .. }) {
        bail!(
            "demo '{}' did not resolve its puzzle (outcome {:?})",
            slug.label(),
            outcome
        );
    }

    session.log_event(format!("demo.end {}", slug.label()));
    Ok(())
}

fn step_to(session: &mut Session<'_>, target: &str) -> Result<()> {
    let scene = session.current_scene()?;
    let action = scene
        .actions
        .iter()
        .find(|action| matches!(action, Action::Move { target: declared, .. } if declared == target))
        .cloned()
        .ok_or_else(|| anyhow!("no visible move from {} to {target}", scene.location))?;
    session.perform(&action)?;
    Ok(())
}

fn pick_up(session: &mut Session<'_>, item: &str) -> Result<()> {
    let scene = session.current_scene()?;
    let action = scene
        .actions
        .iter()
        .find(|action| matches!(action, Action::AcquireItem { item: declared, .. } if declared == item))
        .cloned()
        .ok_or_else(|| anyhow!("no pickup for {item} at {}", scene.location))?;
    session.perform(&action)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_options_parse_known_slugs() {
        let options = DemoOptions::parse(" Conejo ").expect("parse");
        assert_eq!(options.slug(), DemoSlug::Conejo);
    }

    #[test]
    fn demo_options_reject_unknown_slugs() {
        assert!(DemoOptions::parse("dragon").is_err());
    }

    #[test]
    fn every_demo_route_ends_at_its_puzzle() {
        let world = aventura_world::campaign_world();
        for slug in [DemoSlug::Conejo, DemoSlug::Zorro, DemoSlug::Foca] {
            let last = slug.route().last().expect("route is never empty");
            let rule = world.puzzle(last).expect("route ends at a puzzle site");
            assert_eq!(rule.required_item, slug.gift());
        }
    }
}
