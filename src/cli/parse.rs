use thiserror::Error;

use super::CliFlags;
use crate::settings::{MAX_COUNT, MAX_LENGTH};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("flag provided but not defined: -{0}")]
    UnknownFlag(String),
    #[error("flag needs an argument: -{0}")]
    MissingValue(String),
    #[error("invalid value {value:?} for flag -{flag}")]
    InvalidValue { flag: String, value: String },
    #[error("invalid value \"{0}\" for flag -len: length must not be negative")]
    NegativeLength(i64),
    #[error("invalid value {value:?} for flag -{flag}: must be at most {max}")]
    TooLarge {
        flag: String,
        value: String,
        max: usize,
    },
    #[error("bad flag syntax: {0}")]
    BadSyntax(String),
    #[error("-seed and -urandom cannot be used together")]
    ConflictingSources,
}

/// Parse arguments with Go `flag` conventions: `-name value`, `-name=value`,
/// one or two leading dashes, and parsing stops at `--` or the first
/// non-flag argument.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();

        if arg == "--" {
            flags.rest = args[i + 1..].to_vec();
            break;
        }
        if arg.len() < 2 || !arg.starts_with('-') {
            flags.rest = args[i..].to_vec();
            break;
        }

        let body = arg.strip_prefix("--").unwrap_or(&arg[1..]);
        if body.is_empty() || body.starts_with('-') || body.starts_with('=') {
            return Err(ParseError::BadSyntax(arg.to_string()));
        }
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (body, None),
        };

        match name {
            "h" | "help" => flags.help = bool_value(name, inline)?,
            "version" => flags.version = bool_value(name, inline)?,
            "v" => flags.verbose = bool_value(name, inline)?,
            "urandom" => flags.urandom = bool_value(name, inline)?,
            "len" => {
                let value = take_value(name, inline, args, &mut i)?;
                flags.length = Some(parse_length(&value)?);
            }
            "inc" => flags.include = Some(take_value(name, inline, args, &mut i)?),
            "exc" => flags.exclude = Some(take_value(name, inline, args, &mut i)?),
            "n" => {
                let value = take_value(name, inline, args, &mut i)?;
                match value.parse::<usize>() {
                    Ok(n) if n > MAX_COUNT => return Err(too_large(name, value, MAX_COUNT)),
                    Ok(n) if n > 0 => flags.number = Some(n),
                    _ => return Err(invalid(name, value)),
                }
            }
            "seed" => {
                let value = take_value(name, inline, args, &mut i)?;
                flags.seed = Some(value.parse().map_err(|_| invalid(name, value))?);
            }
            _ => return Err(ParseError::UnknownFlag(name.to_string())),
        }
        i += 1;
    }

    if flags.seed.is_some() && flags.urandom {
        return Err(ParseError::ConflictingSources);
    }

    Ok(flags)
}

fn too_large(flag: &str, value: String, max: usize) -> ParseError {
    ParseError::TooLarge {
        flag: flag.to_string(),
        value,
        max,
    }
}

fn invalid(flag: &str, value: String) -> ParseError {
    ParseError::InvalidValue {
        flag: flag.to_string(),
        value,
    }
}

/// Value for a non-boolean flag: the `=` suffix, else the next argument.
fn take_value(
    name: &str,
    inline: Option<String>,
    args: &[String],
    i: &mut usize,
) -> Result<String, ParseError> {
    if let Some(value) = inline {
        return Ok(value);
    }
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| ParseError::MissingValue(name.to_string()))
}

fn bool_value(name: &str, inline: Option<String>) -> Result<bool, ParseError> {
    match inline.as_deref() {
        None => Ok(true),
        Some("1" | "t" | "T" | "true" | "TRUE" | "True") => Ok(true),
        Some("0" | "f" | "F" | "false" | "FALSE" | "False") => Ok(false),
        Some(other) => Err(invalid(name, other.to_string())),
    }
}

fn parse_length(value: &str) -> Result<usize, ParseError> {
    let n: i64 = value.trim().parse().map_err(|_| invalid("len", value.to_string()))?;
    if n < 0 {
        return Err(ParseError::NegativeLength(n));
    }
    match usize::try_from(n) {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(too_large("len", value.to_string(), MAX_LENGTH)),
    }
}
