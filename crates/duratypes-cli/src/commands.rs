//! Subcommand implementations. Each returns one [`Record`] per input and
//! stops at the first input that fails.

use anyhow::{Context, Result};
use duratypes::{format_duration, format_value, parse_duration, parse_value, DurationError};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// One converted input.
#[derive(Debug, Serialize)]
pub struct Record {
    pub input: String,
    pub seconds: i64,
    pub formatted: String,
}

pub fn parse(inputs: &[String], json_input: bool) -> Result<Vec<Record>> {
    inputs
        .iter()
        .map(|input| -> Result<Record> {
            let seconds = if json_input {
                let value: Value = serde_json::from_str(input)
                    .with_context(|| format!("{input:?} is not a JSON literal"))?;
                parse_value(&value)
            } else {
                parse_duration(input)
            }
            .map_err(|err| classified(err, "parse", input))?;

            debug!(input = %input, seconds, "parsed");
            Ok(Record {
                input: input.clone(),
                seconds,
                formatted: format_duration(seconds),
            })
        })
        .collect()
}

pub fn format(args: &[String]) -> Result<Vec<Record>> {
    args.iter()
        .map(|arg| -> Result<Record> {
            // Anything that is not a JSON literal is kept as a string so the
            // formatter reports it as a type error.
            let value = serde_json::from_str::<Value>(arg)
                .unwrap_or_else(|_| Value::String(arg.clone()));
            let formatted = format_value(&value).map_err(|err| classified(err, "format", arg))?;
            let seconds = value.as_i64().unwrap_or_default();

            Ok(Record {
                input: arg.clone(),
                seconds,
                formatted,
            })
        })
        .collect()
}

fn classified(err: DurationError, action: &str, input: &str) -> anyhow::Error {
    let kind = err.kind();
    anyhow::Error::new(err).context(format!("cannot {action} {input:?} ({kind} error)"))
}

pub fn render_seconds(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| r.seconds.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_formatted(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| r.formatted.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
