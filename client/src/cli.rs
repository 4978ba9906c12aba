use std::{path::PathBuf, str::FromStr};

use anyhow::Context;
use strum::VariantNames;

use crate::patterns::Pattern;

/// `client [pattern|-] [config path]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Args {
    /// Overrides the configured pattern; `-` leaves it alone.
    pub pattern: Option<Pattern>,
    pub config_path: Option<PathBuf>,
}

pub fn parse_args<I>(mut args: I) -> anyhow::Result<Args>
where
    I: Iterator<Item = String>,
{
    let pattern = args
        .next()
        .filter(|name| name != "-")
        .map(|name| {
            Pattern::from_str(&name).with_context(|| {
                format!(
                    "Unknown pattern {name:?}, expected one of: {}",
                    Pattern::VARIANTS.join(", ")
                )
            })
        })
        .transpose()?;

    let config_path = args.next().map(PathBuf::from);

    if let Some(extra) = args.next() {
        anyhow::bail!("Unexpected argument {extra:?}");
    }

    Ok(Args {
        pattern,
        config_path,
    })
}
