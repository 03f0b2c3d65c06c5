use std::collections::HashMap;
use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use todo_model::DEFAULT_SLOT_KEY;
use tracing::{
  debug,
  info,
  trace
};

const CONFIG_ENV: &str = "TODORC";

/// Flattened `section.key = value`
/// settings. File values replace the
/// defaults and `--rc` overrides replace
/// file values.
#[derive(Debug, Clone)]
pub struct Config {
  map:              HashMap<String, String>,
  pub loaded_files: Vec<PathBuf>
}

impl Default for Config {
  fn default() -> Self {
    let mut map = HashMap::new();
    map.insert(
      "storage.key".to_string(),
      DEFAULT_SLOT_KEY.to_string()
    );
    map.insert(
      "color".to_string(),
      "on".to_string()
    );
    Self {
      map,
      loaded_files: vec![]
    }
  }
}

impl Config {
  #[tracing::instrument(skip(
    config_override
  ))]
  pub fn load(
    config_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    let mut cfg = Config::default();

    match resolve_config_path(
      config_override
    )? {
      | Some(path) => {
        info!(config = %path.display(), "loading config");
        cfg.load_file(&path)?;
      }
      | None => {
        debug!(
          "no config file found; \
           using defaults"
        );
      }
    }

    Ok(cfg)
  }

  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (k, v) in overrides {
      let key = k
        .strip_prefix("rc.")
        .unwrap_or(&k)
        .to_string();
      debug!(key = %key, value = %v, "applying override");
      self.map.insert(key, v);
    }
  }

  pub fn get(
    &self,
    key: &str
  ) -> Option<String> {
    self.map.get(key).cloned()
  }

  pub fn get_bool(
    &self,
    key: &str
  ) -> Option<bool> {
    self
      .map
      .get(key)
      .map(|v| parse_bool(v))
  }

  pub fn storage_key(
    &self
  ) -> anyhow::Result<String> {
    let key = self
      .get("storage.key")
      .unwrap_or_else(|| {
        DEFAULT_SLOT_KEY.to_string()
      });
    let key = key.trim();
    if key.is_empty()
      || key.contains(['/', '\\'])
      || key.starts_with('.')
    {
      return Err(anyhow!(
        "invalid storage.key: {key:?}"
      ));
    }
    Ok(key.to_string())
  }

  pub fn color(&self) -> bool {
    self.get_bool("color").unwrap_or(true)
  }

  #[tracing::instrument(skip(self))]
  fn load_file(
    &mut self,
    path: &Path
  ) -> anyhow::Result<()> {
    let path = expand_tilde(path);
    let text =
      fs::read_to_string(&path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;
    self.load_str(&text).with_context(
      || {
        format!(
          "invalid config file {}",
          path.display()
        )
      }
    )?;
    self.loaded_files.push(path);
    Ok(())
  }

  fn load_str(
    &mut self,
    text: &str
  ) -> anyhow::Result<()> {
    let table: toml::Table =
      toml::from_str(text)?;
    flatten_into(
      "",
      &table,
      &mut self.map
    );
    Ok(())
  }
}

fn flatten_into(
  prefix: &str,
  table: &toml::Table,
  out: &mut HashMap<String, String>
) {
  for (k, v) in table {
    let key = if prefix.is_empty() {
      k.clone()
    } else {
      format!("{prefix}.{k}")
    };

    match v {
      | toml::Value::Table(inner) => {
        flatten_into(&key, inner, out);
      }
      | toml::Value::String(s) => {
        trace!(key = %key, value = %s, "loaded config key");
        out.insert(key, s.clone());
      }
      | other => {
        trace!(key = %key, value = %other, "loaded config key");
        out.insert(key, other.to_string());
      }
    }
  }
}

#[tracing::instrument(skip(
  cfg,
  override_dir
))]
pub fn resolve_data_dir(
  cfg: &Config,
  override_dir: Option<&Path>
) -> anyhow::Result<PathBuf> {
  let dir = if let Some(path) =
    override_dir
  {
    path.to_path_buf()
  } else if let Some(cfg_value) =
    cfg.get("data.location")
  {
    expand_tilde(Path::new(&cfg_value))
  } else {
    default_data_dir()?
  };

  if !dir.exists() {
    info!(dir = %dir.display(), "creating data directory");
    fs::create_dir_all(&dir)
      .with_context(|| {
        format!(
          "failed to create {}",
          dir.display()
        )
      })?;
  }

  Ok(dir)
}

fn resolve_config_path(
  override_path: Option<&Path>
) -> anyhow::Result<Option<PathBuf>> {
  if let Some(path) = override_path {
    return Ok(Some(path.to_path_buf()));
  }

  if let Ok(from_env) =
    std::env::var(CONFIG_ENV)
  {
    if from_env == "/dev/null" {
      return Ok(None);
    }
    return Ok(Some(PathBuf::from(
      from_env
    )));
  }

  let Some(config_dir) =
    dirs::config_dir()
  else {
    return Ok(None);
  };
  let candidate = config_dir
    .join("todo")
    .join("config.toml");
  if candidate.exists() {
    return Ok(Some(candidate));
  }

  Ok(None)
}

fn default_data_dir()
-> anyhow::Result<PathBuf> {
  let base = dirs::data_dir()
    .ok_or_else(|| {
      anyhow!(
        "cannot determine data \
         directory"
      )
    })?;
  Ok(base.join("todo"))
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}

fn parse_bool(s: &str) -> bool {
  matches!(
    s.trim()
      .to_ascii_lowercase()
      .as_str(),
    "1" | "y" | "yes" | "on" | "true"
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_without_file() {
    let cfg = Config::default();
    assert_eq!(
      cfg.storage_key().expect("key"),
      "todos"
    );
    assert!(cfg.color());
    assert!(cfg.get("data.location").is_none());
  }

  #[test]
  fn nested_tables_flatten_to_dotted_keys()
  {
    let mut cfg = Config::default();
    cfg
      .load_str(
        "color = false\n\n[data]\nlocation = \"/tmp/todo\"\n\n[storage]\nkey = \"work\"\n"
      )
      .expect("valid toml");

    assert_eq!(
      cfg.get("data.location").as_deref(),
      Some("/tmp/todo")
    );
    assert_eq!(
      cfg.storage_key().expect("key"),
      "work"
    );
    assert!(!cfg.color());
  }

  #[test]
  fn overrides_strip_rc_prefix() {
    let mut cfg = Config::default();
    cfg.apply_overrides([
      (
        "rc.storage.key".to_string(),
        "home".to_string()
      ),
      (
        "color".to_string(),
        "off".to_string()
      )
    ]);
    assert_eq!(
      cfg.storage_key().expect("key"),
      "home"
    );
    assert!(!cfg.color());
  }

  #[test]
  fn storage_key_rejects_paths() {
    for bad in ["", "../x", "a/b", ".hidden"] {
      let mut cfg = Config::default();
      cfg.apply_overrides([(
        "storage.key".to_string(),
        bad.to_string()
      )]);
      assert!(
        cfg.storage_key().is_err(),
        "{bad:?}"
      );
    }
  }

  #[test]
  fn bool_spellings() {
    for yes in ["1", "y", "Yes", "ON", "true"] {
      assert!(parse_bool(yes));
    }
    for no in ["0", "off", "nope", ""] {
      assert!(!parse_bool(no));
    }
  }
}
