//! Command-line options for `generate` and `check`.

use std::fmt;

/// How `generate` writes blueprints to stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON document describing every request.
    #[default]
    Json,
    /// Indented class skeletons from the outline emitter.
    Outline,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "json" => Some(OutputFormat::Json),
            "outline" => Some(OutputFormat::Outline),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Json => "json",
            OutputFormat::Outline => "outline",
        })
    }
}

/// How problems are written to stderr.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MessageFormat {
    #[default]
    Human,
    /// JSON Lines, one diagnostic per line, then the tally.
    Json,
}

impl MessageFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "human" => Some(MessageFormat::Human),
            "json" => Some(MessageFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub format: OutputFormat,
    pub messages: MessageFormat,
    /// Worker threads for each batch level.
    pub jobs: Option<usize>,
    /// Stop writing output at the first failed request.
    pub fail_fast: bool,
}

/// Parse the options following the catalog path.
///
/// Later occurrences of an option override earlier ones.
pub fn parse_generate_options(args: &[String]) -> Result<GenerateOptions, String> {
    let mut options = GenerateOptions::default();
    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            options.format = OutputFormat::parse(format).ok_or_else(|| {
                format!("unknown format '{format}' (expected 'json' or 'outline')")
            })?;
        } else if let Some(messages) = arg.strip_prefix("--message-format=") {
            options.messages = MessageFormat::parse(messages).ok_or_else(|| {
                format!("unknown message format '{messages}' (expected 'human' or 'json')")
            })?;
        } else if let Some(jobs) = arg.strip_prefix("--jobs=") {
            options.jobs = match jobs.parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(format!("invalid job count '{jobs}' (expected a positive integer)"))
                }
                Ok(n) => Some(n),
            };
        } else if arg == "--fail-fast" {
            options.fail_fast = true;
        } else {
            return Err(format!("unknown option '{arg}'"));
        }
    }
    Ok(options)
}
