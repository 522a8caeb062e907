use crate::errors::AppResult;
use crate::export::model::EntryExport;
use csv::Writer;
use std::path::Path;

pub(crate) fn write_csv(path: &Path, rows: &[EntryExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
