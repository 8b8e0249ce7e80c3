use log::error;

use crate::api::{ActionError, Event};
use crate::model::{EntityCategory, HarvestMethod};
use crate::tooling::{ToolAction, ToolContext, Validation};
use crate::Game;

mod harvest;
mod hoe;
mod seed;
mod strike;
mod water;

impl Game {
    pub fn validate_action(&self, context: &ToolContext) -> Validation {
        match &context.tool.action {
            ToolAction::Hoe => self.validate_hoe(context),
            ToolAction::Water { .. } => self.validate_water(context),
            ToolAction::Seed => self.validate_seed(context),
            ToolAction::HandHarvest => self.validate_harvest(context, HarvestMethod::Hand),
            ToolAction::Sickle => self.validate_harvest(context, HarvestMethod::Scythe),
            ToolAction::Axe { .. } => self.validate_strike(context, EntityCategory::Tree),
            ToolAction::PickAxe { .. } => self.validate_strike(context, EntityCategory::Ore),
        }
    }

    /// Applies the tool to every cell of an already validated context.
    /// Cells that turned unsuitable meanwhile are skipped, missing
    /// configuration aborts the remaining cells.
    pub fn execute_action(&mut self, context: &ToolContext) -> Result<Vec<Event>, ActionError> {
        let tool = context.tool.clone();
        let result = match tool.action {
            ToolAction::Hoe => self.hoe(context),
            ToolAction::Water { duration, mode } => self.water(context, duration, mode),
            ToolAction::Seed => self.seed(context),
            ToolAction::HandHarvest => self.harvest(context, HarvestMethod::Hand),
            ToolAction::Sickle => self.harvest(context, HarvestMethod::Scythe),
            ToolAction::Axe { damage } => self.strike(context, EntityCategory::Tree, damage),
            ToolAction::PickAxe { damage } => self.strike(context, EntityCategory::Ore, damage),
        };
        if let Err(error) = &result {
            error!(
                "Unable to use {} at {:?}, {:?}",
                tool.name, context.cursor, error
            );
        }
        result
    }
}
