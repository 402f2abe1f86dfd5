use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use wordpace_core::{
    app::PacerConfig,
    pacing::{PunctuationPolicy, TimingConfig},
};

pub(super) const USAGE: &str = "\
Usage: wordpace [OPTIONS] [FILE | -]

Shows FILE (or standard input) one word at a time.

Options:
  --base-delay <ms>        minimum time per word (default 120)
  --chars-per-unit <n>     word-length divisor (default 7)
  --unit-offset <ms>       extra time per length unit (default 150)
  --punct-offset <ms>      extra time for punctuation (default 150)
  --policy <rule>          density | sentence-end (default density)
  --autostart              start reading immediately
  -h, --help               print this help

Keys: s/Enter start, Space pause/resume, x stop, Up/Down select setting,
      Left/Right or -/+ edit it, p switch punctuation rule, q/Esc quit.
Logs go to stderr; set RUST_LOG and redirect 2> to capture them.";

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum TextSource {
    File(PathBuf),
    Stdin,
    /// Standard input when it is piped, otherwise the built-in sample.
    Auto,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct LaunchOptions {
    pub source: TextSource,
    pub config: PacerConfig,
    pub autostart: bool,
    pub help: bool,
}

pub(super) fn parse_args<I>(args: I) -> Result<LaunchOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut source = TextSource::Auto;
    let mut timing = TimingConfig::default();
    let mut policy = PunctuationPolicy::default();
    let mut autostart = false;
    let mut help = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => help = true,
            "--autostart" => autostart = true,
            "--base-delay" => timing.base_delay_ms = number(&arg, args.next())?,
            "--chars-per-unit" => {
                let value = number(&arg, args.next())?;
                if value == 0 {
                    bail!("--chars-per-unit must be at least 1");
                }
                timing.chars_per_unit = value;
            }
            "--unit-offset" => timing.unit_offset_ms = number(&arg, args.next())?,
            "--punct-offset" => timing.punctuation_offset_ms = number(&arg, args.next())?,
            "--policy" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("--policy needs a value"))?;
                policy = PunctuationPolicy::from_label(&value)
                    .ok_or_else(|| anyhow!("unknown punctuation rule: {value}"))?;
            }
            "-" => source = TextSource::Stdin,
            flag if flag.starts_with("--") => bail!("unknown option: {flag}\n\n{USAGE}"),
            path => {
                if source != TextSource::Auto {
                    bail!("only one text source can be given\n\n{USAGE}");
                }
                source = TextSource::File(PathBuf::from(path));
            }
        }
    }

    Ok(LaunchOptions {
        source,
        config: PacerConfig { timing, policy },
        autostart,
        help,
    })
}

fn number(flag: &str, value: Option<String>) -> Result<u32> {
    let value = value.ok_or_else(|| anyhow!("{flag} needs a value"))?;
    value
        .trim()
        .parse()
        .with_context(|| format!("{flag} expects a non-negative integer, got {value:?}"))
}
