//! `umbra apply` - darken a snapshot file.

use super::ApplyArgs;
use crate::config::UmbraConfig;
use crate::engine::{Session, SessionOptions};
use crate::html;
use crate::log;
use crate::profile;
use anyhow::{Context, Result, bail};
use std::fs;

pub fn run(args: &ApplyArgs, config: &UmbraConfig) -> Result<()> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read `{}`", args.input.display()))?;
    let mut doc = html::load(&raw).context("failed to parse snapshot")?;

    let mut host = profile::host_for(
        config.profiles.enable && args.hostname.is_some(),
        &config.profiles.expanded_dir(),
    );
    let mut session = Session::new(SessionOptions {
        force_root_background: config.render.force_root_background,
        hostname: args.hostname.clone(),
    });

    let writes = session.enable(&mut doc, host.as_mut());
    log!("apply"; "{:?} theme, {} style writes", session.theme(), writes);

    if args.roundtrip {
        session.disable(&mut doc, host.as_mut());
        let restored = html::serialize(&doc, config.render.pretty);
        let baseline = html::serialize(
            &html::load(&raw).context("failed to parse snapshot")?,
            config.render.pretty,
        );
        if restored != baseline {
            bail!("roundtrip mismatch: restore did not reproduce the original document");
        }
        log!("apply"; "roundtrip ok: restore reproduced the original");
        return Ok(());
    }

    let output = html::serialize(&doc, config.render.pretty);
    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            log!("apply"; "wrote {}", path.display());
        }
        None => print!("{output}"),
    }
    Ok(())
}
