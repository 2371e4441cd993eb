use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("unknown pool: {0}")]
    UnknownPool(String),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.board = true,
            "-g" | "--github" => flags.github = true,
            "-n" | "--name" => {
                i += 1;
                let value = value_of(args, i, "--name")?;
                flags.name = Some(value.clone());
            }
            "-l" | "--length" => {
                i += 1;
                let value = value_of(args, i, "--length")?;
                flags.length = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(value.clone()))?,
                );
            }
            "-p" | "--pools" => {
                i += 1;
                flags.pools = Some(parse_pools(value_of(args, i, "--pools")?)?);
            }
            "-o" | "--output" => {
                i += 1;
                flags.output = Some(value_of(args, i, "--output")?.clone());
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_of<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a String, ParseError> {
    args.get(i)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

/// Comma-separated pool list, e.g. `upper,lower,symbols,chinese,tibetan`.
fn parse_pools(value: &str) -> Result<Vec<String>, ParseError> {
    let mut pools = Vec::new();
    for part in value.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let canonical = canonical_pool(part).ok_or_else(|| ParseError::UnknownPool(part.into()))?;
        if !pools.iter().any(|p| p == canonical) {
            pools.push(canonical.to_string());
        }
    }
    Ok(pools)
}

fn canonical_pool(name: &str) -> Option<&'static str> {
    match name {
        "upper" | "uppercase" => Some("uppercase"),
        "lower" | "lowercase" => Some("lowercase"),
        "sym" | "symbols" => Some("symbols"),
        "zh" | "chinese" => Some("chinese"),
        "bo" | "tibetan" => Some("tibetan"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("polypass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_a_full_invocation() {
        let flags = parse(&args(&[
            "-n", "mail", "-l", "24", "-p", "upper,lower,tibetan", "-b", "-g",
        ]))
        .unwrap();
        assert_eq!(flags.name.as_deref(), Some("mail"));
        assert_eq!(flags.length, Some(24));
        assert_eq!(
            flags.pools.as_deref(),
            Some(&["uppercase".to_string(), "lowercase".into(), "tibetan".into()][..])
        );
        assert!(flags.board && flags.github);
    }

    #[test]
    fn rejects_unknown_arguments_and_pools() {
        assert_eq!(
            parse(&args(&["--frob"])).unwrap_err(),
            ParseError::UnknownArg("--frob".into())
        );
        assert_eq!(
            parse(&args(&["-p", "upper,klingon"])).unwrap_err(),
            ParseError::UnknownPool("klingon".into())
        );
    }

    #[test]
    fn rejects_a_non_numeric_length() {
        assert_eq!(
            parse(&args(&["-l", "many"])).unwrap_err(),
            ParseError::InvalidNumber("many".into())
        );
    }

    #[test]
    fn flag_without_its_value_is_an_error() {
        assert_eq!(
            parse(&args(&["-n"])).unwrap_err(),
            ParseError::MissingValue("--name".into())
        );
    }

    #[test]
    fn duplicate_pools_collapse() {
        let flags = parse(&args(&["-p", "upper,uppercase,upper"])).unwrap();
        assert_eq!(flags.pools.as_deref(), Some(&["uppercase".to_string()][..]));
    }
}
