use anyhow::{bail, Context, Result};
use clap::Args;
use wegli_api::types::{Notice, Record};

use super::WegliClient;
use crate::output::{print_json, print_notices, OutputFormat};

#[derive(Args)]
pub struct NoticesArgs {
    /// Get a single notice by its token
    #[arg(long)]
    pub token: Option<String>,

    /// Filter by status: open, disabled, analyzing, shared
    #[arg(long, conflicts_with = "token")]
    pub status: Option<String>,
}

pub fn run(args: &NoticesArgs, client: &WegliClient, format: &OutputFormat) -> Result<()> {
    if !client.is_authenticated() {
        bail!("Notices need an API key: pass --api-key or set WEGLI_API_KEY");
    }

    if let Some(status) = &args.status {
        if !matches!(status.as_str(), "open" | "disabled" | "analyzing" | "shared") {
            bail!("Invalid status '{}': expected open, disabled, analyzing or shared", status);
        }
    }

    let maps = match &args.token {
        Some(token) => vec![client.get_notice_by_token(token)?],
        None => client.list_own_notices()?,
    };

    let maps: Vec<_> = match &args.status {
        Some(status) => maps
            .into_iter()
            .filter(|m| m.get("status").and_then(|v| v.as_str()) == Some(status.as_str()))
            .collect(),
        None => maps,
    };

    eprintln!("{} notices", maps.len());

    if let OutputFormat::Json = format {
        print_json(&maps);
        return Ok(());
    }

    let notices = Notice::from_maps(maps).context("server returned a malformed notice")?;
    print_notices(&notices, format)
}
