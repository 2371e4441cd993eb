//! Character set sources for the five standard pools.
//!
//! Each pool has a built-in set; a configured charset directory overrides a
//! pool with the trimmed UTF-8 contents of `<dir>/<name>.txt`.

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::pass::pool::{Pool, PoolSelection};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";
const CHINESE: &str = "安宝川道德凡风福高光海河恒虎火吉江金静空兰雷立林龙马梅明木牛平青泉山石水松天武溪霞香雪雅岩阳宜玉月云泽竹";
const TIBETAN: &str = "ཀཁགངཅཆཇཉཏཐདནཔཕབམཙཚཛཝཞཟའཡརལཤསཧཨ";

/// The standard pools, in the order the selection iterates them.
pub const POOL_NAMES: [&str; 5] = ["uppercase", "lowercase", "symbols", "chinese", "tibetan"];

fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "uppercase" => Some(UPPERCASE),
        "lowercase" => Some(LOWERCASE),
        "symbols" => Some(SYMBOLS),
        "chinese" => Some(CHINESE),
        "tibetan" => Some(TIBETAN),
        _ => None,
    }
}

/// Characters for one pool: `<dir>/<name>.txt` when a charset directory is
/// configured, the built-in set otherwise. A configured file that cannot be
/// read is an error rather than a silent fallback.
pub fn load(charset_dir: &str, name: &str) -> Result<Vec<char>> {
    if !charset_dir.is_empty() {
        let path = Path::new(charset_dir).join(format!("{name}.txt"));
        let text = fs::read_to_string(&path).map_err(|source| AppError::Charset {
            name: name.to_string(),
            source,
        })?;
        return Ok(text.trim().chars().collect());
    }
    match builtin(name) {
        Some(chars) => Ok(chars.chars().collect()),
        None => Err(AppError::Config(format!("unknown pool name '{name}'"))),
    }
}

/// Build the per-request selection: all five standard pools in order, with
/// pools absent from `enabled` zeroed to empty entries. Disabled entries
/// keep their slot so the composer's base quota still divides by five.
pub fn select(enabled: &[String], charset_dir: &str) -> Result<PoolSelection> {
    let mut sel = PoolSelection::new();
    for name in POOL_NAMES {
        if enabled.iter().any(|e| e == name) {
            let chars = load(charset_dir, name)?;
            log::debug!("pool '{name}': {} candidate chars", chars.len());
            sel.push(Pool::new(name, chars));
        } else {
            sel.push(Pool::empty(name));
        }
    }
    Ok(sel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn enabled(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builtin_selection_keeps_all_five_slots() {
        let sel = select(&enabled(&["uppercase", "tibetan"]), "").unwrap();
        assert_eq!(sel.len(), 5);
        let sizes: Vec<usize> = sel.iter().map(|p| p.len()).collect();
        assert_eq!(sizes[0], 26);
        assert_eq!(sizes[1], 0);
        assert_eq!(sizes[2], 0);
        assert_eq!(sizes[3], 0);
        assert!(sizes[4] > 0);
    }

    #[test]
    fn nothing_enabled_gives_an_all_empty_selection() {
        let sel = select(&[], "").unwrap();
        assert_eq!(sel.len(), 5);
        assert!(sel.all_empty());
    }

    #[test]
    fn charset_dir_overrides_a_pool() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("chinese.txt")).unwrap();
        // trailing newline must be trimmed away
        writeln!(f, "中文密码").unwrap();

        let dir_str = dir.path().to_str().unwrap();
        let chars = load(dir_str, "chinese").unwrap();
        assert_eq!(chars, vec!['中', '文', '密', '码']);
    }

    #[test]
    fn missing_file_in_configured_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        let err = load(dir_str, "uppercase").unwrap_err();
        assert!(matches!(err, AppError::Charset { .. }));
    }
}
