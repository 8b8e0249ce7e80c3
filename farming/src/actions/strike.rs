use crate::api::{ActionError, Event};
use crate::math::CellMath;
use crate::model::EntityCategory;
use crate::tooling::{ToolContext, Tooling, Validation};
use crate::{occur, Game};

impl Game {
    pub(crate) fn validate_strike(&self, context: &ToolContext, category: EntityCategory) -> Validation {
        let mut validation = Validation::default();
        for cell in &context.cells {
            let found = self.find_entity(cell.position(), category).is_some();
            validation.judge(*cell, found);
        }
        validation.finish("Nothing to strike.")
    }

    /// Reports damage to the first entity of category found over target cells.
    pub(crate) fn strike(
        &mut self,
        context: &ToolContext,
        category: EntityCategory,
        damage: i32,
    ) -> Result<Vec<Event>, ActionError> {
        let damage = if damage != 0 { damage } else { 1 };
        let target = context
            .ordered_cells()
            .into_iter()
            .find_map(|cell| self.find_entity(cell.position(), category));
        let events = match target {
            Some(entity) => occur![vec![Tooling::DamageReported {
                entity: entity.id,
                damage,
            }]],
            None => occur![],
        };
        Ok(events)
    }
}
