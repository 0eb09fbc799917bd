//! Configuration resolution
//!
//! This module merges three configuration sources into one authoritative
//! [`Md2DocxConfig`], with defined precedence (highest last):
//!
//! 1. Compiled-in defaults
//! 2. An optional TOML or YAML file
//! 3. Environment variables prefixed with `MD2DOCX_`
//!
//! Environment keys use a double underscore to separate section from key
//! (e.g. `MD2DOCX_CONVERSION__DEFAULT_TOC_DEPTH=5`); keys without the
//! separator land as top-level entries. Resolution is atomic: it either yields
//! a complete valid config or fails with a `Configuration` error naming the
//! offending key where possible.
//!
//! The resolver reads the environment as an explicit snapshot parameter, so
//! resolution is a pure function of (snapshot, file contents); [`load_config`]
//! is the thin ambient wrapper over `std::env::vars()`.

use crate::config::schema::Md2DocxConfig;
use crate::domain::errors::Md2DocxError;
use crate::domain::result::Result;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Prefix recognized on configuration environment variables
pub const ENV_PREFIX: &str = "MD2DOCX_";

/// Coerces a raw string value to the most specific matching JSON type
///
/// Fixed priority order: case-insensitive boolean (`true/yes/1/on`,
/// `false/no/0/off`) -> integer (no decimal point) -> float (contains a
/// decimal point) -> string verbatim. Pure and total: any string that fails
/// numeric parsing falls through to the string case, never an error.
pub fn coerce_value(raw: &str) -> Value {
    match raw.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => return Value::Bool(true),
        "false" | "no" | "0" | "off" => return Value::Bool(false),
        _ => {}
    }

    if raw.contains('.') {
        if let Ok(float) = raw.parse::<f64>() {
            if let Some(number) = serde_json::Number::from_f64(float) {
                return Value::Number(number);
            }
        }
    } else if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(int.into());
    }

    Value::String(raw.to_string())
}

/// Parses configuration overrides out of an environment snapshot
///
/// Retains only keys starting with `prefix`, strips it, lower-cases the
/// remainder, and splits on the first `__` into (section, key). Keys without
/// the separator land as top-level entries; they are not validated here and
/// fail later if they match no config field. Values pass through
/// [`coerce_value`].
pub fn parse_env_overrides<I, K, V>(vars: I, prefix: &str) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut overrides = Map::new();

    for (name, raw) in vars {
        let Some(remainder) = name.as_ref().strip_prefix(prefix) else {
            continue;
        };
        let key = remainder.to_lowercase();
        let value = coerce_value(raw.as_ref());

        match key.split_once("__") {
            Some((section, setting)) => {
                let entry = overrides
                    .entry(section.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(section_map) = entry {
                    section_map.insert(setting.to_string(), value);
                }
            }
            None => {
                overrides.insert(key, value);
            }
        }
    }

    overrides
}

/// Loads configuration overrides from a TOML or YAML file
///
/// The parser is selected by file extension: `.toml` uses the strict TOML
/// parser; `.yaml` and `.yml` use the YAML parser behind the `yaml` feature.
/// The parsed root must be a mapping.
///
/// # Errors
///
/// Returns a `Configuration` error when the file cannot be read, the
/// extension is unsupported, parsing fails, the root is not a mapping, or
/// YAML support was compiled out.
pub fn load_override_file(path: &Path) -> Result<Map<String, Value>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let contents = fs::read_to_string(path).map_err(|e| {
        Md2DocxError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let root = match extension.as_str() {
        "toml" => {
            let table: toml::Value = toml::from_str(&contents)?;
            toml_to_json(table)
        }
        "yaml" | "yml" => parse_yaml(path, &contents)?,
        other => {
            return Err(Md2DocxError::Configuration(format!(
                "Unsupported configuration file extension '{}' for {}: expected .toml, .yaml or .yml",
                other,
                path.display()
            )))
        }
    };

    match root {
        Value::Object(map) => Ok(map),
        _ => Err(Md2DocxError::Configuration(format!(
            "Configuration file {} must contain a mapping at the top level",
            path.display()
        ))),
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Path, contents: &str) -> Result<Value> {
    serde_yaml::from_str(contents).map_err(|e| {
        Md2DocxError::Configuration(format!("YAML parse error in {}: {}", path.display(), e))
    })
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Path, _contents: &str) -> Result<Value> {
    Err(Md2DocxError::Configuration(format!(
        "YAML configuration file {} requires the 'yaml' feature; rebuild with --features yaml or use a TOML file",
        path.display()
    )))
}

/// Recursively merges two override maps; `overlay` wins on leaf conflicts
///
/// Where both sides hold a mapping at the same key the maps merge
/// recursively; otherwise the overlay value replaces the base value.
/// Non-overlapping keys from both sides are retained.
pub fn merge_maps(base: Map<String, Value>, overlay: Map<String, Value>) -> Map<String, Value> {
    let mut merged = base;
    for (key, overlay_value) in overlay {
        let value = match (merged.remove(&key), overlay_value) {
            (Some(Value::Object(base_map)), Value::Object(overlay_map)) => {
                Value::Object(merge_maps(base_map, overlay_map))
            }
            (_, replacement) => replacement,
        };
        merged.insert(key, value);
    }
    merged
}

/// Resolves a complete configuration from a file and an environment snapshot
///
/// Merge order, highest precedence last: compiled defaults, file overrides,
/// environment overrides. Pure function of its inputs.
///
/// # Errors
///
/// Returns a `Configuration` error if the file cannot be loaded, a merged key
/// does not correspond to a declared config field, a value has an
/// incompatible type, or section validation fails. Errors are never partially
/// applied.
pub fn resolve_from<I, K, V>(file_path: Option<&Path>, env_vars: I) -> Result<Md2DocxConfig>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let file_overrides = match file_path {
        Some(path) => load_override_file(path)?,
        None => Map::new(),
    };
    let env_overrides = parse_env_overrides(env_vars, ENV_PREFIX);
    let merged = merge_maps(file_overrides, env_overrides);

    let config: Md2DocxConfig = serde_json::from_value(Value::Object(merged))
        .map_err(|e| Md2DocxError::Configuration(e.to_string()))?;

    config.validate().map_err(Md2DocxError::Configuration)?;

    tracing::debug!(
        file = ?file_path,
        "Configuration resolved"
    );

    Ok(config)
}

/// Loads configuration from an optional file plus the process environment
///
/// # Examples
///
/// ```no_run
/// use md2docx::config::load_config;
///
/// let config = load_config(None).expect("Failed to load config");
/// assert_eq!(config.conversion.default_toc_depth, 3);
/// ```
pub fn load_config(file_path: Option<&Path>) -> Result<Md2DocxConfig> {
    resolve_from(file_path, std::env::vars())
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, item)| (key, toml_to_json(item)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::PageSize;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use test_case::test_case;

    fn no_env() -> Vec<(String, String)> {
        Vec::new()
    }

    #[test_case("true", Value::Bool(true); "lowercase true")]
    #[test_case("TRUE", Value::Bool(true); "uppercase true")]
    #[test_case("yes", Value::Bool(true); "yes")]
    #[test_case("on", Value::Bool(true); "on")]
    #[test_case("1", Value::Bool(true); "one is boolean")]
    #[test_case("false", Value::Bool(false); "false literal")]
    #[test_case("No", Value::Bool(false); "mixed case no")]
    #[test_case("off", Value::Bool(false); "off")]
    #[test_case("0", Value::Bool(false); "zero is boolean")]
    fn test_coerce_booleans(raw: &str, expected: Value) {
        assert_eq!(coerce_value(raw), expected);
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(coerce_value("42"), Value::Number(42.into()));
        assert_eq!(coerce_value("-7"), Value::Number((-7).into()));
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(
            coerce_value("3.14"),
            Value::Number(serde_json::Number::from_f64(3.14).unwrap())
        );
    }

    #[test]
    fn test_coerce_string_fallback() {
        assert_eq!(coerce_value("hello"), Value::String("hello".to_string()));
        assert_eq!(coerce_value("2.5.1"), Value::String("2.5.1".to_string()));
        assert_eq!(coerce_value(""), Value::String(String::new()));
    }

    #[test]
    fn test_parse_env_overrides_nested() {
        let vars = vec![
            ("MD2DOCX_CONVERSION__DEFAULT_TOC_DEPTH", "5"),
            ("MD2DOCX_TEMPLATE__BODY_FONT", "Arial"),
            ("UNRELATED_VAR", "ignored"),
        ];
        let map = parse_env_overrides(vars, ENV_PREFIX);

        assert_eq!(map.len(), 2);
        assert_eq!(
            map["conversion"]["default_toc_depth"],
            Value::Number(5.into())
        );
        assert_eq!(
            map["template"]["body_font"],
            Value::String("Arial".to_string())
        );
    }

    #[test]
    fn test_parse_env_overrides_flat_key() {
        let vars = vec![("MD2DOCX_SOMETHING", "x")];
        let map = parse_env_overrides(vars, ENV_PREFIX);
        assert_eq!(map["something"], Value::String("x".to_string()));
    }

    #[test]
    fn test_parse_env_overrides_groups_sections() {
        let vars = vec![
            ("MD2DOCX_PANDOC__TIMEOUT_SECONDS", "60"),
            ("MD2DOCX_PANDOC__MIN_VERSION", "3.0"),
        ];
        let map = parse_env_overrides(vars, ENV_PREFIX);
        let pandoc = map["pandoc"].as_object().unwrap();
        assert_eq!(pandoc.len(), 2);
    }

    #[test]
    fn test_merge_recursive_preserves_non_overlapping() {
        let base = serde_json::json!({ "a": { "x": 1, "y": 2 } });
        let overlay = serde_json::json!({ "a": { "y": 3 } });
        let merged = merge_maps(
            base.as_object().unwrap().clone(),
            overlay.as_object().unwrap().clone(),
        );
        assert_eq!(Value::Object(merged), serde_json::json!({ "a": { "x": 1, "y": 3 } }));
    }

    #[test]
    fn test_merge_leaf_replacement() {
        let base = serde_json::json!({ "a": { "x": 1 }, "b": 2 });
        let overlay = serde_json::json!({ "b": { "c": 3 } });
        let merged = merge_maps(
            base.as_object().unwrap().clone(),
            overlay.as_object().unwrap().clone(),
        );
        assert_eq!(
            Value::Object(merged),
            serde_json::json!({ "a": { "x": 1 }, "b": { "c": 3 } })
        );
    }

    #[test]
    fn test_resolve_defaults_without_sources() {
        let config = resolve_from(None, no_env()).unwrap();
        assert_eq!(config, Md2DocxConfig::default());
    }

    #[test]
    fn test_resolve_env_override_single_field() {
        let vars = vec![("MD2DOCX_CONVERSION__DEFAULT_TOC_DEPTH", "5")];
        let config = resolve_from(None, vars).unwrap();

        assert_eq!(config.conversion.default_toc_depth, 5);
        // Everything else stays at the compiled default
        let mut expected = Md2DocxConfig::default();
        expected.conversion.default_toc_depth = 5;
        assert_eq!(config, expected);
    }

    #[test]
    fn test_resolve_unknown_key_fails() {
        let vars = vec![("MD2DOCX_CONVERSION__NO_SUCH_SETTING", "1")];
        let err = resolve_from(None, vars).unwrap_err();
        assert!(matches!(err, Md2DocxError::Configuration(_)));
        assert!(err.to_string().contains("no_such_setting"));
    }

    #[test]
    fn test_resolve_flat_key_fails_at_construction() {
        // A key without the section separator lands top-level and only fails
        // once it matches no config field.
        let vars = vec![("MD2DOCX_MYSTERY", "1")];
        let err = resolve_from(None, vars).unwrap_err();
        assert!(matches!(err, Md2DocxError::Configuration(_)));
        assert!(err.to_string().contains("mystery"));
    }

    #[test]
    fn test_resolve_type_mismatch_fails() {
        let vars = vec![("MD2DOCX_PANDOC__TIMEOUT_SECONDS", "soon")];
        let err = resolve_from(None, vars).unwrap_err();
        assert!(matches!(err, Md2DocxError::Configuration(_)));
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "[template]\npage_size = \"Letter\"\nbody_font = \"Georgia\"\n\n[conversion]\ndefault_toc = true\n"
        )
        .unwrap();
        file.flush().unwrap();

        let config = resolve_from(Some(file.path()), no_env()).unwrap();
        assert_eq!(config.template.page_size, PageSize::Letter);
        assert_eq!(config.template.body_font, "Georgia");
        assert!(config.conversion.default_toc);
        // Untouched sections keep their defaults
        assert_eq!(config.pandoc.timeout_seconds, 300);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_load_yaml_file() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(
            file,
            "conversion:\n  default_toc_depth: 2\nlogging:\n  level: debug\n"
        )
        .unwrap();
        file.flush().unwrap();

        let config = resolve_from(Some(file.path()), no_env()).unwrap();
        assert_eq!(config.conversion.default_toc_depth, 2);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_env_wins_over_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "[conversion]\ndefault_toc_depth = 2\nvalidate_output = true\n").unwrap();
        file.flush().unwrap();

        let vars = vec![("MD2DOCX_CONVERSION__DEFAULT_TOC_DEPTH", "4")];
        let config = resolve_from(Some(file.path()), vars).unwrap();

        // Env overrides the file for the shared key; file-only keys survive
        assert_eq!(config.conversion.default_toc_depth, 4);
        assert!(config.conversion.validate_output);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = resolve_from(Some(Path::new("nonexistent.toml")), no_env()).unwrap_err();
        assert!(matches!(err, Md2DocxError::Configuration(_)));
        assert!(err.to_string().contains("nonexistent.toml"));
    }

    #[test]
    fn test_unsupported_extension_fails() {
        let mut file = NamedTempFile::with_suffix(".ini").unwrap();
        writeln!(file, "key = value").unwrap();
        file.flush().unwrap();

        let err = load_override_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration file extension"));
    }

    #[test]
    fn test_malformed_toml_fails() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "this is not = valid = toml").unwrap();
        file.flush().unwrap();

        let err = load_override_file(file.path()).unwrap_err();
        assert!(matches!(err, Md2DocxError::Configuration(_)));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_non_mapping_yaml_root_fails() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(file, "- just\n- a\n- list").unwrap();
        file.flush().unwrap();

        let err = load_override_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("mapping at the top level"));
    }

    #[test]
    fn test_out_of_range_file_value_fails_atomically() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "[conversion]\ndefault_toc_depth = 9\n").unwrap();
        file.flush().unwrap();

        let err = resolve_from(Some(file.path()), no_env()).unwrap_err();
        assert!(err.to_string().contains("default_toc_depth"));
    }
}
