//! `umbra inspect` - report per-element decisions without writing output.
//!
//! Runs the real pipeline on a copy of the document and diffs the tracked
//! inline properties, so the report can never drift from what `apply`
//! would do.

use super::InspectArgs;
use crate::classify::categorize;
use crate::config::UmbraConfig;
use crate::engine::{Session, SessionOptions};
use crate::html;
use crate::log;
use crate::profile;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub fn run(args: &InspectArgs, config: &UmbraConfig) -> Result<()> {
    let doc = html::read_snapshot(&args.input)
        .with_context(|| format!("failed to load `{}`", args.input.display()))?;

    let mut darkened = doc.clone();
    let mut host = profile::host_for(
        config.profiles.enable && args.hostname.is_some(),
        &config.profiles.expanded_dir(),
    );
    let mut session = Session::new(SessionOptions {
        force_root_background: config.render.force_root_background,
        hostname: args.hostname.clone(),
    });
    session.enable(&mut darkened, host.as_mut());

    log!("inspect"; "{:?} theme", session.theme());

    let mut touched = 0usize;
    let mut total = 0usize;
    for id in doc.walk() {
        let Some(before) = doc.element(id) else {
            continue;
        };
        let Some(after) = darkened.element(id) else {
            continue;
        };
        total += 1;

        let mut changes = Vec::new();
        for property in crate::dom::props::TRACKED {
            let old = before.inline.get(property);
            let new = after.inline.get(property);
            if old == new {
                continue;
            }
            let from = doc.computed(id, property).unwrap_or("(unset)");
            changes.push(format!(
                "{}: {} {} {}",
                property.bold(),
                from,
                "→".dimmed(),
                new.unwrap_or("(removed)")
            ));
        }

        if changes.is_empty() {
            continue;
        }
        touched += 1;

        let tag = &before.tag;
        let classes = if before.classes.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", before.classes.join(" "))
        };
        println!(
            "{}{}{}{}  {}",
            "<".dimmed(),
            tag.cyan(),
            classes.dimmed(),
            ">".dimmed(),
            format!("{:?}", categorize(before)).dimmed()
        );
        for change in changes {
            println!("    {change}");
        }
    }

    log!("inspect"; "{touched} of {total} elements rewritten");
    Ok(())
}
