use crate::{config::OutputFormat, media, reference, Tweet};
use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;
use std::{
    io::{Read, Write},
    path::PathBuf,
};
use tracing::{info, warn};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every status URL found in the text
    Urls {
        /// Text to scan; read from stdin when omitted
        text: Option<String>,
    },
    /// Print the id of every status URL found in the text
    Ids {
        /// Text to scan; read from stdin when omitted
        text: Option<String>,
    },
    /// Print the id of the first status URL found in the text
    First {
        /// Text to scan; read from stdin when omitted
        text: Option<String>,
    },
    /// Print the best URL and kind of each media attached to a tweet JSON document
    Media {
        /// Path to the tweet JSON, or `-` for stdin
        file: PathBuf,
    },
}

/// Whether a command produced what it was asked for. Maps to the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NotFound,
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

/// Loads the text or document the command operates on.
pub fn load_input(command: &Command) -> Result<String> {
    match command {
        Command::Urls { text } | Command::Ids { text } | Command::First { text } => {
            match text {
                Some(text) => Ok(text.clone()),
                None => read_stdin(),
            }
        }
        Command::Media { file } => {
            if file.as_os_str() == "-" {
                read_stdin()
            } else {
                std::fs::read_to_string(file)
                    .with_context(|| format!("Failed to read {}", file.display()))
            }
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value).context("Failed to encode output")?;
    writeln!(out)?;
    Ok(())
}

/// Runs `command` over already loaded `input`, writing results to `out`.
pub fn execute<W: Write>(
    command: &Command,
    input: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<Outcome> {
    match command {
        Command::Urls { .. } => {
            let urls = reference::find_all_urls(input);
            match format {
                OutputFormat::Plain => {
                    for url in &urls {
                        writeln!(out, "{url}")?;
                    }
                }
                OutputFormat::Json => write_json(out, &urls)?,
            }
            Ok(found_if(!urls.is_empty()))
        }
        Command::Ids { .. } => {
            let ids = reference::find_all_ids(input);
            match format {
                OutputFormat::Plain => {
                    for id in &ids {
                        writeln!(out, "{id}")?;
                    }
                }
                OutputFormat::Json => write_json(out, &ids)?,
            }
            Ok(found_if(!ids.is_empty()))
        }
        Command::First { .. } => {
            let id = reference::find_first_id(input);
            match (format, id) {
                (OutputFormat::Plain, Some(id)) => writeln!(out, "{id}")?,
                (OutputFormat::Plain, None) => {}
                (OutputFormat::Json, id) => write_json(out, &id)?,
            }
            Ok(found_if(id.is_some()))
        }
        Command::Media { .. } => {
            let tweet = Tweet::from_json(input).context("Failed to decode tweet JSON")?;
            if !media::has_media(&tweet) {
                info!("Tweet {} has no media", tweet.id_str);
            }

            let resolved = match media::resolve_all_media(&tweet) {
                Ok(resolved) => resolved,
                Err(e) => {
                    warn!("Cannot resolve media of tweet {}: {}", tweet.id_str, e);
                    return Ok(Outcome::NotFound);
                }
            };

            match format {
                OutputFormat::Plain => {
                    for media in &resolved {
                        writeln!(out, "{}\t{}", media.url, media.kind)?;
                    }
                }
                OutputFormat::Json => write_json(out, &resolved)?,
            }
            Ok(found_if(!resolved.is_empty()))
        }
    }
}

fn found_if(found: bool) -> Outcome {
    if found {
        Outcome::Found
    } else {
        Outcome::NotFound
    }
}
