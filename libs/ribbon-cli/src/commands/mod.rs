//! Subcommands and the parameter resolution they share.

pub mod build;
pub mod export;
pub mod inspect;
pub mod params;

use std::fs;

use anyhow::{Context, Result};
use ribbon_mesh::{random_seed, MeshSession, ShapeParams};
use tracing::{info, warn};

use crate::ParamArgs;

/// Resolves preset, overrides and seed into validated parameters.
pub fn resolve_params(args: &ParamArgs) -> Result<ShapeParams> {
    let mut params = match &args.params {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read preset {:?}", path))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse preset {:?}", path))?
        }
        None => ShapeParams::default(),
    };

    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    if let Some(layers) = args.layers {
        params.layers = layers;
    }
    if let Some(target_mm) = args.target_mm {
        params.target_diam_mm = target_mm;
    }
    if args.random_seed {
        params.seed = random_seed(&mut rand::thread_rng());
        info!(seed = params.seed, "picked random seed");
    }

    match params.validate() {
        Ok(()) => {}
        Err(e) if args.allow_invalid => warn!(%e, "building with invalid parameters"),
        Err(e) => return Err(e).context("Parameters rejected (use --allow-invalid to build anyway)"),
    }

    Ok(params)
}

/// Builds a session for `args` with its mesh already installed.
pub fn built_session(args: &ParamArgs) -> Result<MeshSession> {
    let mut session = MeshSession::new(resolve_params(args)?);
    session.rebuild_if_dirty();
    Ok(session)
}
