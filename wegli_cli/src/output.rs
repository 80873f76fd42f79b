use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use wegli_api::types::{Charge, District, Notice};

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    #[value(alias = "md")]
    Markdown,
}

#[derive(Tabled, Serialize)]
struct ChargeRow {
    #[tabled(rename = "TBNR")]
    #[serde(rename = "TBNR")]
    tbnr: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "Fine")]
    #[serde(rename = "Fine")]
    fine: String,
    #[tabled(rename = "Points")]
    #[serde(rename = "Points")]
    points: i64,
}

#[derive(Tabled, Serialize)]
struct NoticeRow {
    #[tabled(rename = "Token")]
    #[serde(rename = "Token")]
    token: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Registration")]
    #[serde(rename = "Registration")]
    registration: String,
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
    #[tabled(rename = "TBNR")]
    #[serde(rename = "TBNR")]
    tbnr: String,
    #[tabled(rename = "Photos")]
    #[serde(rename = "Photos")]
    photos: usize,
}

#[derive(Tabled, Serialize)]
struct DistrictRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Zip")]
    #[serde(rename = "Zip")]
    zip: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Prefixes")]
    #[serde(rename = "Prefixes")]
    prefixes: String,
}

// -- Row builders --

fn build_charge_rows(charges: &[Charge]) -> Vec<ChargeRow> {
    charges
        .iter()
        .map(|c| ChargeRow {
            tbnr: c.tbnr.clone(),
            description: truncate(&c.description, 60),
            fine: format_fine(&c.fine),
            points: c.points,
        })
        .collect()
}

fn build_notice_rows(notices: &[Notice]) -> Vec<NoticeRow> {
    notices
        .iter()
        .map(|n| NoticeRow {
            token: n.token.clone(),
            status: n.status.to_string(),
            date: n
                .start_date
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            registration: n.registration.clone().unwrap_or_default(),
            location: format_location(n),
            tbnr: n
                .tbnr
                .clone()
                .or_else(|| n.charge.as_ref().map(|c| c.tbnr.clone()))
                .unwrap_or_default(),
            photos: n.photos.len(),
        })
        .collect()
}

fn build_district_rows(districts: &[District]) -> Vec<DistrictRow> {
    districts
        .iter()
        .map(|d| DistrictRow {
            name: d.name.clone(),
            zip: d.zip.clone(),
            email: d.email.clone().unwrap_or_default(),
            prefixes: d.prefixes.join(", "),
        })
        .collect()
}

// -- Generic printers --

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_charges(charges: &[Charge], format: &OutputFormat) -> Result<()> {
    print_rows(build_charge_rows(charges), format)
}

pub fn print_notices(notices: &[Notice], format: &OutputFormat) -> Result<()> {
    print_rows(build_notice_rows(notices), format)
}

pub fn print_districts(districts: &[District], format: &OutputFormat) -> Result<()> {
    print_rows(build_district_rows(districts), format)
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_fine(fine: &str) -> String {
    match fine.parse::<f64>() {
        Ok(amount) => format!("{:.2} €", amount),
        Err(_) => fine.to_string(),
    }
}

fn format_location(notice: &Notice) -> String {
    let place = match (&notice.zip, &notice.city) {
        (Some(zip), Some(city)) => format!("{} {}", zip, city),
        (Some(zip), None) => zip.clone(),
        (None, Some(city)) => city.clone(),
        (None, None) => String::new(),
    };
    match &notice.street {
        Some(street) if !place.is_empty() => format!("{}, {}", street, place),
        Some(street) => street.clone(),
        None => place,
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
