use anyhow::{Context, Result};
use clap::Args;
use wegli_api::types::{Charge, Record};

use super::{filter_by_text, WegliClient};
use crate::output::{print_charges, print_json, OutputFormat};

#[derive(Args)]
pub struct ChargesArgs {
    /// Get a single charge by its TBNR (e.g. 141312)
    #[arg(long)]
    pub tbnr: Option<String>,

    /// Only keep charges whose description contains this text
    #[arg(long, conflicts_with = "tbnr")]
    pub search: Option<String>,
}

pub fn run(args: &ChargesArgs, client: &WegliClient, format: &OutputFormat) -> Result<()> {
    let maps = match &args.tbnr {
        Some(tbnr) => vec![client.get_charge_by_tbnr(tbnr)?],
        None => client.list_charges()?,
    };

    let maps = match &args.search {
        Some(search) => filter_by_text(maps, "description", search),
        None => maps,
    };

    eprintln!("{} charges", maps.len());

    if let OutputFormat::Json = format {
        print_json(&maps);
        return Ok(());
    }

    let charges = Charge::from_maps(maps).context("server returned a malformed charge")?;
    print_charges(&charges, format)
}
