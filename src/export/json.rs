use crate::errors::AppResult;
use crate::models::TimesheetEntry;
use std::io::Write;
use std::path::Path;

/// Serialize the entries as a single JSON array.
pub fn to_json(entries: &[TimesheetEntry], pretty: bool) -> AppResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(entries)?
    } else {
        serde_json::to_string(entries)?
    };
    Ok(json)
}

/// Write the JSON array to `path`, or to stdout when no path is given.
pub fn write_json(entries: &[TimesheetEntry], path: Option<&Path>, pretty: bool) -> AppResult<()> {
    let json = to_json(entries, pretty)?;

    match path {
        Some(p) => std::fs::write(p, json)?,
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(json.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}
