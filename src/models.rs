use chrono::{Datelike, Local, NaiveDate};

/// Calendar date of a front-page scan.
///
/// Computed fresh per run from the local wall-clock date; the same value
/// drives both the source URL path and the destination blob name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CoverDate {
    /// Returns today's date according to the local clock.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    /// Returns the `YYYY/MM/DD` path segments used in the source URL.
    /// Month and day are zero-padded to two digits; the year is used as-is.
    pub fn path_segments(&self) -> String {
        format!("{}/{:02}/{:02}", self.year, self.month, self.day)
    }

    /// Returns the destination blob name, `YYYY_MM_DD.pdf`.
    /// Re-running on the same day produces the same name and overwrites the blob.
    pub fn blob_name(&self) -> String {
        format!("{}_{:02}_{:02}.pdf", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CoverDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}
