use crate::Storage;
use log::debug;
use serde_json::Value;

/// Durable store for save sections, one JSON document per section name.
const ENVELOPE_SCHEMA: &str = "
create table if not exists Envelope (
    section text primary key,
    data text not null,
    timestamp integer not null
);";

#[derive(Debug)]
pub enum EnvelopeError {
    Sql(rusqlite::Error),
    Json(serde_json::Error),
}

impl From<rusqlite::Error> for EnvelopeError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}

impl From<serde_json::Error> for EnvelopeError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl Storage {
    pub fn setup_envelope(&self) -> Result<(), EnvelopeError> {
        self.connection().execute_batch(ENVELOPE_SCHEMA)?;
        Ok(())
    }

    pub fn write_section(&self, section: &str, data: &Value) -> Result<(), EnvelopeError> {
        let data = serde_json::to_string(data)?;
        debug!("Write section {} ({} bytes)", section, data.len());
        self.connection().execute(
            "insert or replace into Envelope (section, data, timestamp) values (?, ?, strftime('%s', 'now'))",
            [section, data.as_str()],
        )?;
        Ok(())
    }

    pub fn read_sections(&self) -> Result<Vec<(String, Value)>, EnvelopeError> {
        let mut statement = self
            .connection()
            .prepare("select section, data from Envelope order by section")?;
        let mut rows = statement.query([])?;
        let mut sections = vec![];
        while let Some(row) = rows.next()? {
            let section: String = row.get(0)?;
            let data: String = row.get(1)?;
            sections.push((section, serde_json::from_str(&data)?));
        }
        Ok(sections)
    }
}
