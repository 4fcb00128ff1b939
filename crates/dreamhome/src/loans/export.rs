use std::io::Write;

use super::domain::LoanResult;

/// Write the yearly schedule as CSV with a header row.
pub fn write_schedule_csv<W: Write>(result: &LoanResult, writer: W) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);
    for year in &result.schedule {
        csv.serialize(year)?;
    }
    csv.flush()?;
    Ok(())
}
