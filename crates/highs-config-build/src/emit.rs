//! Cargo directives for the descriptor and for its consumers.
//!
//! `highs-config` declares `links = "highs_config"`. Cargo therefore lets
//! only one descriptor into a dependency graph, and passes every
//! `cargo::metadata` line emitted here to the build scripts of direct
//! dependents as `DEP_HIGHS_CONFIG_<NAME>`.

use crate::env::{parse_bool, Env};
use crate::error::{ConfigError, Result};
use crate::options::{BuildOptions, IndexWidth, INPUT_VARIABLES};
use crate::symbols::{SymbolValue, HIGHSINT64, PRESENCE_FLAGS};
use std::io::{self, Write};
use std::path::Path;

/// Value of the `links` key in `highs-config`'s manifest.
pub const LINKS: &str = "highs_config";
/// Prefix under which dependents see the descriptor's metadata.
pub const DEP_PREFIX: &str = "DEP_HIGHS_CONFIG_";
/// Metadata key carrying the directory that holds `HConfig.h`.
pub const INCLUDE_KEY: &str = "INCLUDE";

/// Emit the directives that publish `options` to the crate being built
/// and to its dependents.
///
/// For each symbol the output holds:
/// - `rustc-check-cfg`, so `#[cfg(NAME)]` never trips `unexpected_cfgs`;
/// - `rustc-cfg` for each defined presence flag;
/// - `metadata` with the value, flags as `1`/`0`.
///
/// It then lists the variables that should trigger a rerun.
pub fn emit_directives<W: Write>(
    options: &BuildOptions,
    include_dir: Option<&Path>,
    out: &mut W,
) -> io::Result<()> {
    for symbol in options.symbols() {
        let name = symbol.name;
        match symbol.value {
            SymbolValue::Flag(defined) => {
                writeln!(out, "cargo::rustc-check-cfg=cfg({name})")?;
                if defined {
                    writeln!(out, "cargo::rustc-cfg={name}")?;
                }
                writeln!(out, "cargo::metadata={name}={}", u8::from(defined))?;
            }
            SymbolValue::Str(value) => writeln!(out, "cargo::metadata={name}={value}")?,
            SymbolValue::Int(value) => writeln!(out, "cargo::metadata={name}={value}")?,
        }
    }
    if let Some(dir) = include_dir {
        writeln!(out, "cargo::metadata={INCLUDE_KEY}={}", dir.display())?;
    }
    for variable in INPUT_VARIABLES {
        writeln!(out, "cargo::rerun-if-env-changed={variable}")?;
    }
    Ok(())
}

/// Rerun the build script when the commit of the source tree moves.
///
/// Only needed when the hash came from git: an explicit `HIGHS_GITHASH`
/// is already covered by `rerun-if-env-changed`. Watches the paths
/// reported by [`Env::git_watch_paths`] for the recorded source directory.
pub fn emit_git_watch<E, W>(env: &E, options: &BuildOptions, out: &mut W) -> io::Result<()>
where
    E: Env + ?Sized,
    W: Write,
{
    if env.is_set("HIGHS_GITHASH") {
        return Ok(());
    }
    for path in env.git_watch_paths(Path::new(options.source_dir())) {
        writeln!(out, "cargo::rerun-if-changed={}", path.display())?;
    }
    Ok(())
}

/// Re-emit the descriptor's presence flags as `rustc-cfg` for a consumer.
///
/// Call this from the build script of a crate that depends directly on
/// `highs-config`. Afterwards that crate can write
/// `#[cfg(CUPDLP_GPU)]` and the like.
pub fn forward_cfgs<E, W>(env: &E, out: &mut W) -> Result<()>
where
    E: Env + ?Sized,
    W: Write,
{
    for name in PRESENCE_FLAGS {
        writeln!(out, "cargo::rustc-check-cfg=cfg({name})")?;
        if dep_flag(env, name)? {
            writeln!(out, "cargo::rustc-cfg={name}")?;
        }
    }
    Ok(())
}

/// Index width of the descriptor a consumer is being linked against.
pub fn linked_index_width<E: Env + ?Sized>(env: &E) -> Result<IndexWidth> {
    dep_flag(env, HIGHSINT64).map(IndexWidth::from_int64)
}

/// Fail unless the linked descriptor uses the `expected` index width.
///
/// A consumer written for 32-bit `HighsInt` calls this with
/// [`IndexWidth::Bits32`] so that a 64-bit build is rejected at build time,
/// before any code with a mismatched layout can be linked.
pub fn require_index_width<E: Env + ?Sized>(env: &E, expected: IndexWidth) -> Result<()> {
    let found = linked_index_width(env)?;
    if found == expected {
        Ok(())
    } else {
        Err(ConfigError::IndexWidthMismatch { expected, found })
    }
}

fn dep_flag<E: Env + ?Sized>(env: &E, name: &str) -> Result<bool> {
    let variable = format!("{DEP_PREFIX}{name}");
    let value = env.require(&variable)?;
    parse_bool(&variable, &value)
}
