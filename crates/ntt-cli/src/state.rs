//! # State File
//!
//! The registry persists between invocations as a pretty-printed JSON
//! [`RegistrySnapshot`]. Writes go to a temporary file in the same directory
//! and are renamed into place, so a crash never leaves a half-written state.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use ntt_registry::{PassportRegistry, RegistryError, RegistrySnapshot, SystemClock};
use serde::Serialize;

/// Load and verify the registry stored at `path`.
pub fn load(path: &Path) -> anyhow::Result<PassportRegistry> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading registry state from {}", path.display()))?;
    let snapshot: RegistrySnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("parsing registry state in {}", path.display()))?;
    let registry = PassportRegistry::restore(snapshot, SystemClock)
        .with_context(|| format!("verifying registry state in {}", path.display()))?;
    tracing::debug!(path = %path.display(), credentials = registry.emitted_count(), "registry loaded");
    Ok(registry)
}

/// Persist `registry` to `path`.
pub fn save(path: &Path, registry: &PassportRegistry) -> anyhow::Result<()> {
    write_json(path, &registry.snapshot())?;
    tracing::debug!(path = %path.display(), "registry saved");
    Ok(())
}

/// Load, apply one registry operation, and save only if it succeeded.
pub fn update<R>(
    path: &Path,
    op: impl FnOnce(&mut PassportRegistry) -> Result<R, RegistryError>,
) -> anyhow::Result<R> {
    let mut registry = load(path)?;
    let out = op(&mut registry)?;
    save(path, &registry)?;
    Ok(out)
}

/// Atomically replace `path` with the JSON rendering of `value`.
pub fn write_json(path: &Path, value: &impl Serialize) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;
    serde_json::to_writer_pretty(&mut tmp, value).context("serializing state")?;
    tmp.write_all(b"\n")?;
    tmp.persist(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
