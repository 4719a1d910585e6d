use crate::clean::{clean_decision_date, clean_status};
use crate::extract::ResponseRecord;
use serde::Serialize;
use time::{Date, Weekday};

/// One scraped response plus its cleaned columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResponseRow {
    pub application_date: String,
    pub decision_date: String,
    pub status: String,
    pub decision_date_scrubbed: String,
    pub decision_date_token: String,
    pub decision_date_parsed: Option<Date>,
    pub decision_day: Option<Weekday>,
    pub decision_dayofweek_number: Option<u8>,
    pub status_cleaned: String,
}

impl From<ResponseRecord> for ResponseRow {
    fn from(rec: ResponseRecord) -> Self {
        let date = clean_decision_date(&rec.decision_date);
        let status_cleaned = clean_status(&rec.status);
        Self {
            application_date: rec.application_date,
            decision_date: rec.decision_date,
            status: rec.status,
            decision_date_scrubbed: date.scrubbed,
            decision_date_token: date.token,
            decision_date_parsed: date.date,
            decision_day: date.weekday,
            decision_dayofweek_number: date.weekday_number,
            status_cleaned,
        }
    }
}

/// Rows in insertion order; the row index is the position in `rows`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ResponseTable {
    pub rows: Vec<ResponseRow>,
}

impl ResponseTable {
    pub fn from_records(records: Vec<ResponseRecord>) -> Self {
        let rows: Vec<ResponseRow> = records.into_iter().map(ResponseRow::from).collect();
        let unparsed = rows.iter().filter(|r| r.decision_date_parsed.is_none()).count();
        if unparsed > 0 {
            tracing::warn!("{} of {} decision dates could not be parsed", unparsed, rows.len());
        }
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (date, weekday) of every row whose decision date parsed.
    pub fn dated(&self) -> impl Iterator<Item = (Date, Weekday)> + '_ {
        self.rows
            .iter()
            .filter_map(|r| Some((r.decision_date_parsed?, r.decision_day?)))
    }
}
