use crate::catalog::Catalog;
use crate::error::{PickerError, Result};
use crate::types::config::PickerConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "picker.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".picker/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/model-picker/config.toml";

pub fn load_config(root: &Path) -> Result<Option<PickerConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<PickerConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: PickerConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PickerError::ConfigParse(e.to_string()))?;
    Ok(Some(cfg))
}

/// Built-in catalog with any on-disk config applied, validated.
pub fn load_catalog(root: &Path) -> Result<Catalog> {
    let catalog = match load_config(root)? {
        Some(cfg) => {
            tracing::info!(root = %root.display(), file = DEFAULT_CONFIG_FILE, "applying config");
            cfg.apply_to(Catalog::builtin())
        }
        None => {
            tracing::debug!(root = %root.display(), "no config file, using built-in catalog");
            Catalog::builtin()
        }
    };
    catalog.validate()?;
    Ok(catalog)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PickerError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
