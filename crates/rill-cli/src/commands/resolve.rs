//! Resolve command implementation.
//!
//! This implements `rill resolve`: load the layered environment, derive the
//! configuration, run the pre-build clean when the profile asks for it, and
//! emit the result as JSON.

use std::fs;
use std::path::Path;

use rill_config::{validate_env, BuildConfig, EnvMap};

use crate::cli::ResolveArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::settings::Settings;
use crate::ui;

/// Execute the resolve command.
///
/// # Process
///
/// 1. Load tool settings (CLI > RILL_* env > rill.toml > defaults)
/// 2. Load the layered application environment for the mode
/// 3. Resolve flags and the build configuration (pure)
/// 4. Clean the output directory unless the profile is dev or --no-clean
/// 5. Emit the configuration to stdout or --out
///
/// # Errors
///
/// Returns errors for unreadable environment files, a failed clean (fatal,
/// the tree may be partially removed), and unwritable output files.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let settings = Settings::load(&args)?;
    tracing::debug!(?settings, "resolved tool settings");

    let env = EnvMap::load(&settings.root, &settings.mode)?;
    let config = BuildConfig::resolve(&settings.mode, &env);

    // Visibility into half-configured environments, without failing
    let report = validate_env(&env);
    for missing in &report.missing {
        ui::warning(&format!("{missing} is not set"));
    }
    if let Some(profile) = &report.unknown_profile {
        ui::warning(&format!(
            "APP_ENV={profile} matches no known profile (development/production/sit)"
        ));
    }

    if settings.clean {
        let out_dir = settings.resolve_path(&config.build.output_dir);
        utils::ensure_safe_clean_target(&out_dir)?;
        if let Some(outcome) = config.prepare_output(&settings.root)? {
            utils::report_clean_outcome(&out_dir, outcome);
        }
    }

    emit(&config, &settings)?;
    ui::success(&format!(
        "Resolved configuration for mode {}",
        settings.mode
    ));
    Ok(())
}

/// Write the configuration to the configured destination.
fn emit(config: &BuildConfig, settings: &Settings) -> Result<()> {
    let json = if settings.compact {
        serde_json::to_string(config)?
    } else {
        serde_json::to_string_pretty(config)?
    };

    match &settings.out {
        Some(path) => {
            let path = settings.resolve_path(path);
            write_output(&path, &json)?;
            ui::info(&format!("Wrote configuration to {}", path.display()));
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn write_output(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, format!("{json}\n"))?;
    Ok(())
}
