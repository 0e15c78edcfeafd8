//! Parse the project `.env` file into a key-value map. Applying it to the process env happens in
//! the crate root.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// `.env` in `override_dir` if given, else in the current directory.
fn dotenv_path(override_dir: Option<&Path>) -> Option<PathBuf> {
    let dir = override_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())?;
    let path = dir.join(".env");
    path.is_file().then_some(path)
}

/// One `KEY=VALUE` line, or `None` for blanks, comments and malformed lines.
///
/// * An `export ` prefix is accepted and ignored.
/// * Double-quoted values support `\"`; single-quoted values are taken verbatim.
/// * Unquoted values end at ` #` (inline comment); a `#` without a preceding space is kept.
fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let value = value.trim();
    let value = if let Some(inner) = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    {
        inner.replace("\\\"", "\"")
    } else if let Some(inner) = value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        inner.to_string()
    } else {
        value
            .split_once(" #")
            .map_or(value, |(before, _)| before)
            .trim_end()
            .to_string()
    };
    Some((key.to_string(), value))
}

fn parse_dotenv(content: &str) -> HashMap<String, String> {
    content.lines().filter_map(parse_line).collect()
}

/// Load `.env` from `override_dir` or the current directory. Missing file returns an empty map.
pub fn load_env_map(override_dir: Option<&Path>) -> std::io::Result<HashMap<String, String>> {
    let path = match dotenv_path(override_dir) {
        Some(p) => p,
        None => return Ok(HashMap::new()),
    };
    let content = std::fs::read_to_string(&path)?;
    Ok(parse_dotenv(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        let m = parse_dotenv("PROMPTSMITH_KNOWLEDGE_DIR=/srv/kb\nRUST_LOG=debug\n");
        assert_eq!(m.get("PROMPTSMITH_KNOWLEDGE_DIR"), Some(&"/srv/kb".to_string()));
        assert_eq!(m.get("RUST_LOG"), Some(&"debug".to_string()));
    }

    #[test]
    fn skip_comments_blanks_and_malformed() {
        let m = parse_dotenv("\n# comment\nKEY=val\n  \nNOT_KEY_VALUE\n=value_only\n");
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("KEY"), Some(&"val".to_string()));
    }

    #[test]
    fn quoted_values() {
        let m = parse_dotenv("A=\"hello world\"\nB='single # quoted'\nC=\"say \\\"hi\\\"\"\nD=\"\"\n");
        assert_eq!(m.get("A"), Some(&"hello world".to_string()));
        assert_eq!(m.get("B"), Some(&"single # quoted".to_string()));
        assert_eq!(m.get("C"), Some(&"say \"hi\"".to_string()));
        assert_eq!(m.get("D"), Some(&"".to_string()));
    }

    #[test]
    fn export_prefix_and_inline_comment() {
        let m = parse_dotenv("export PROMPTSMITH_CACHE_TTL_SECS=120 # two minutes\nURL=http://x/#frag\n");
        assert_eq!(m.get("PROMPTSMITH_CACHE_TTL_SECS"), Some(&"120".to_string()));
        assert_eq!(m.get("URL"), Some(&"http://x/#frag".to_string()));
    }

    #[test]
    fn empty_value_is_kept() {
        let m = parse_dotenv("KEY=\nOTHER=val\n");
        assert_eq!(m.get("KEY"), Some(&"".to_string()));
        assert_eq!(m.get("OTHER"), Some(&"val".to_string()));
    }

    #[test]
    fn load_env_map_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_env_map(Some(dir.path())).unwrap().is_empty());
    }

    #[test]
    fn load_env_map_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "A=1\nB=2\n").unwrap();
        let m = load_env_map(Some(dir.path())).unwrap();
        assert_eq!(m.get("A"), Some(&"1".to_string()));
        assert_eq!(m.get("B"), Some(&"2".to_string()));
    }
}
