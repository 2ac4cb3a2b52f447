use crate::models::{CashFlow, Flight, Notification};
use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save any serializable records as pretty JSON.
pub fn save_json<T: Serialize, P: AsRef<Path>>(records: &T, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(records)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Save notifications as CSV with header.
pub fn save_notifications_csv<P: AsRef<Path>>(records: &[Notification], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("id","people_id","company_id","is_read","is_notification","zulu_event_time","category","action","description","amount","account_id"))?;
    for n in records {
        wtr.serialize((
            &n.id,
            &n.people_id,
            &n.company_id,
            n.is_read,
            n.is_notification,
            &n.zulu_event_time,
            n.category,
            n.action,
            &n.description,
            n.amount,
            &n.account_id,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save flights as CSV with header. The embedded airports are flattened to
/// their ICAO codes.
pub fn save_flights_csv<P: AsRef<Path>>(records: &[Flight], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("id","departure_icao","arrival_icao","registered","result_comments","start_time","end_time"))?;
    for f in records {
        wtr.serialize((
            &f.id,
            &f.departure_airport.icao,
            &f.arrival_actual_airport.icao,
            f.registered,
            &f.result_comments,
            &f.start_time,
            &f.end_time,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save cash-flow entries as CSV with header.
pub fn save_cashflow_csv<P: AsRef<Path>>(cashflow: &CashFlow, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("id","company_id","account_id","amount","creation_date","description","carry_forward"))?;
    for e in &cashflow.entries {
        wtr.serialize((
            &e.id,
            &e.company_id,
            &e.account_id,
            e.amount,
            &e.creation_date,
            &e.description,
            &e.carry_forward,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}
