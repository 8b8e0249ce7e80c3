use log::{info, warn};
use regex::Regex;
use serde::de;

use crate::collections::Shared;
use crate::model::{ItemKey, ItemKind};
use crate::planting::{GrowthKey, GrowthKind};
use crate::tiling::RoleRule;
use crate::tooling::{ToolKey, ToolKind};
use crate::Game;

/// Tables read by [`Game::load_game_knowledge`]. Enum columns hold bare
/// variant names, structured columns hold JSON documents.
pub const KNOWLEDGE_SCHEMA: &str = "
create table if not exists ItemKind (
    id integer primary key,
    name text not null,
    category text not null,
    harvest text
);
create table if not exists ToolKind (
    id integer primary key,
    name text not null,
    range integer not null,
    metric text not null,
    targeting text not null,
    action text not null,
    read_roles text not null,
    block_roles text not null,
    write_role text not null
);
create table if not exists GrowthKind (
    id integer primary key,
    name text not null,
    seed integer not null,
    result integer not null,
    steps text not null
);
create table if not exists RoleRule (
    id integer primary key,
    role text not null,
    name_pattern text,
    order_min integer,
    order_max integer,
    collider text not null,
    weight integer not null
);";

impl Game {
    pub fn load_game_knowledge(&mut self) -> Result<(), DataError> {
        info!("Begin game knowledge loading");
        for kind in self.storage.find_all::<ItemKind, _, DataError, _>(load_item_kind)? {
            self.known.items.insert(kind.id, kind.name.clone(), kind);
        }
        for kind in self.storage.find_all::<ToolKind, _, DataError, _>(load_tool_kind)? {
            self.known.tools.insert(kind.id, kind.name.clone(), kind);
        }
        for kind in self.storage.find_all::<GrowthKind, _, DataError, _>(load_growth_kind)? {
            self.known.growths.insert(kind.id, kind.name.clone(), kind);
        }
        let rules = self.storage.find_all::<RoleRule, _, DataError, _>(load_role_rule)?;
        self.known.rules = rules.into_iter().map(Shared::new).collect();
        self.tiling.rules = self.known.rules.clone();
        self.controller.hand_harvest = match self.known.tools.find(&self.config.hand_harvest_tool) {
            Ok(tool) => Some(tool),
            Err(error) => {
                warn!("Hand harvest disabled, {:?}", error);
                None
            }
        };
        info!(
            "End game knowledge loading: {} items, {} tools, {} growths, {} role rules",
            self.known.items.len(),
            self.known.tools.len(),
            self.known.growths.len(),
            self.known.rules.len()
        );
        Ok(())
    }
}

pub(crate) fn load_item_kind(row: &rusqlite::Row) -> Result<ItemKind, DataError> {
    let harvest: Option<String> = row.get("harvest")?;
    let data = ItemKind {
        id: ItemKey(row.get("id")?),
        name: row.get("name")?,
        category: row.get_variant("category")?,
        harvest: match harvest {
            Some(harvest) => Some(datamap::parse_json_variant(&harvest)?),
            None => None,
        },
    };
    Ok(data)
}

pub(crate) fn load_tool_kind(row: &rusqlite::Row) -> Result<ToolKind, DataError> {
    let data = ToolKind {
        id: ToolKey(row.get("id")?),
        name: row.get("name")?,
        range: row.get("range")?,
        metric: row.get_variant("metric")?,
        targeting: row.get_json("targeting")?,
        action: row.get_json("action")?,
        read_roles: row.get_json("read_roles")?,
        block_roles: row.get_json("block_roles")?,
        write_role: row.get_variant("write_role")?,
    };
    Ok(data)
}

pub(crate) fn load_growth_kind(row: &rusqlite::Row) -> Result<GrowthKind, DataError> {
    let data = GrowthKind {
        id: GrowthKey(row.get("id")?),
        name: row.get("name")?,
        seed: ItemKey(row.get("seed")?),
        result: ItemKey(row.get("result")?),
        steps: row.get_json("steps")?,
    };
    Ok(data.normalize())
}

pub(crate) fn load_role_rule(row: &rusqlite::Row) -> Result<RoleRule, DataError> {
    let pattern: Option<String> = row.get("name_pattern")?;
    let order_min: Option<i32> = row.get("order_min")?;
    let order_max: Option<i32> = row.get("order_max")?;
    let order_range = match (order_min, order_max) {
        (None, None) => None,
        (min, max) => Some([min.unwrap_or(i32::MIN), max.unwrap_or(i32::MAX)]),
    };
    let data = RoleRule {
        id: row.get("id")?,
        role: row.get_variant("role")?,
        name_pattern: match pattern {
            Some(pattern) => Some(Regex::new(&pattern)?),
            None => None,
        },
        order_range,
        collider: row.get_variant("collider")?,
        weight: row.get("weight")?,
    };
    Ok(data)
}

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    Sql(rusqlite::Error),
    Pattern(regex::Error),
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<rusqlite::Error> for DataError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}

impl From<regex::Error> for DataError {
    fn from(error: regex::Error) -> Self {
        Self::Pattern(error)
    }
}

pub trait JsonDeserializer {
    fn get_json<T>(&self, index: &str) -> Result<T, DataError>
    where
        T: de::DeserializeOwned;

    fn get_variant<T>(&self, index: &str) -> Result<T, DataError>
    where
        T: de::DeserializeOwned;
}

impl<'stmt> JsonDeserializer for rusqlite::Row<'stmt> {
    fn get_json<T>(&self, index: &str) -> Result<T, DataError>
    where
        T: de::DeserializeOwned,
    {
        let value: String = self.get(index)?;
        let value = serde_json::from_str(&value)?;
        Ok(value)
    }

    fn get_variant<T>(&self, index: &str) -> Result<T, DataError>
    where
        T: de::DeserializeOwned,
    {
        let value: String = self.get(index)?;
        let value = datamap::parse_json_variant(&value)?;
        Ok(value)
    }
}
