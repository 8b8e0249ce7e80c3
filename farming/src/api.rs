use crate::collections::DictionaryError;
use crate::cultivating::{Cultivating, CultivatingError};
use crate::decaying::Decaying;
use crate::planting::PlantingError;
use crate::tiling::{Role, Tiling, TilingError};
use crate::timing::Timing;
use crate::tooling::{Tooling, ToolingError};

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum Event {
    Timing(Vec<Timing>),
    Tiling(Vec<Tiling>),
    Cultivating(Vec<Cultivating>),
    Decaying(Vec<Decaying>),
    Tooling(Vec<Tooling>),
}

impl Event {
    pub fn as_bytes(events: &Vec<Event>) -> Result<Vec<u8>, bincode::error::EncodeError> {
        let config = bincode::config::standard();
        bincode::encode_to_vec(events, config)
    }

    #[inline]
    pub fn from_bytes(data: &[u8]) -> Result<Vec<Event>, bincode::error::DecodeError> {
        let config = bincode::config::standard();
        let (events, _) = bincode::decode_from_slice(data, config)?;
        Ok(events)
    }
}

impl From<Vec<Timing>> for Event {
    fn from(events: Vec<Timing>) -> Self {
        Self::Timing(events)
    }
}

impl From<Vec<Tiling>> for Event {
    fn from(events: Vec<Tiling>) -> Self {
        Self::Tiling(events)
    }
}

impl From<Vec<Cultivating>> for Event {
    fn from(events: Vec<Cultivating>) -> Self {
        Self::Cultivating(events)
    }
}

impl From<Vec<Decaying>> for Event {
    fn from(events: Vec<Decaying>) -> Self {
        Self::Decaying(events)
    }
}

impl From<Vec<Tooling>> for Event {
    fn from(events: Vec<Tooling>) -> Self {
        Self::Tooling(events)
    }
}

#[macro_export]
macro_rules! occur {
    () => (
        Vec::<$crate::api::Event>::new()
    );
    ($($x:expr),+ $(,)?) => ({
        let events: Vec<$crate::api::Event> = vec![$($x.into()),+];
        events
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    MapNotLoaded,
    TileNotConfigured { role: Role },
    Tiling(TilingError),
    Cultivating(CultivatingError),
    Planting(PlantingError),
    Tooling(ToolingError),
    Inconsistency(DictionaryError),
}

impl From<TilingError> for ActionError {
    fn from(error: TilingError) -> Self {
        Self::Tiling(error)
    }
}

impl From<CultivatingError> for ActionError {
    fn from(error: CultivatingError) -> Self {
        Self::Cultivating(error)
    }
}

impl From<PlantingError> for ActionError {
    fn from(error: PlantingError) -> Self {
        Self::Planting(error)
    }
}

impl From<ToolingError> for ActionError {
    fn from(error: ToolingError) -> Self {
        Self::Tooling(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}
