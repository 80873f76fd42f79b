use anyhow::{Context, Result};
use clap::Args;
use wegli_api::types::{District, Record};

use super::{filter_by_text, WegliClient};
use crate::output::{print_districts, print_json, OutputFormat};

#[derive(Args)]
pub struct DistrictsArgs {
    /// Get a single district by postal code (e.g. 12305)
    #[arg(long)]
    pub zip: Option<String>,

    /// Only keep districts whose name contains this text
    #[arg(long, conflicts_with = "zip")]
    pub name: Option<String>,
}

pub fn run(args: &DistrictsArgs, client: &WegliClient, format: &OutputFormat) -> Result<()> {
    let maps = match &args.zip {
        Some(zip) => vec![client.get_district_by_zip(zip)?],
        None => client.list_districts()?,
    };

    let maps = match &args.name {
        Some(name) => filter_by_text(maps, "name", name),
        None => maps,
    };

    eprintln!("{} districts", maps.len());

    if let OutputFormat::Json = format {
        print_json(&maps);
        return Ok(());
    }

    let districts = District::from_maps(maps).context("server returned a malformed district")?;
    print_districts(&districts, format)
}
