use std::collections::BTreeMap;

use datamap::{EnvelopeError, Storage};
use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Save payload of named sections contributed by independent systems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub sections: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug)]
pub enum SaveError {
    Json(serde_json::Error),
    Storage(EnvelopeError),
}

impl From<serde_json::Error> for SaveError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<EnvelopeError> for SaveError {
    fn from(error: EnvelopeError) -> Self {
        Self::Storage(error)
    }
}

impl Envelope {
    pub fn set_section<T: Serialize>(&mut self, name: &str, data: &T) -> Result<(), SaveError> {
        let value = datamap::to_json_value(data)?;
        self.sections.insert(name.to_string(), value);
        Ok(())
    }

    pub fn get_section<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, SaveError> {
        match self.sections.get(name) {
            Some(value) => Ok(Some(datamap::parse_json_value(value.clone())?)),
            None => Ok(None),
        }
    }

    pub fn store(&self, storage: &Storage) -> Result<(), SaveError> {
        storage.setup_envelope()?;
        for (name, value) in &self.sections {
            storage.write_section(name, value)?;
        }
        info!("Stored {} save sections", self.sections.len());
        Ok(())
    }

    pub fn load(storage: &Storage) -> Result<Self, SaveError> {
        storage.setup_envelope()?;
        let sections = storage.read_sections()?.into_iter().collect();
        Ok(Self { sections })
    }
}
