use log::debug;

use crate::api::{ActionError, Event};
use crate::collections::Shared;
use crate::cultivating::GridId;
use crate::math::CellMath;
use crate::model::{ItemCategory, ItemKey};
use crate::tooling::{
    PlayerInput, ToolAction, ToolContext, ToolKind, ToolState, Tooling, ToolingError, Validation,
};
use crate::{occur, Game};

impl Game {
    /// Selects the tool for held item: its own definition or, for seeds,
    /// the shared planting tool.
    pub fn equip(&mut self, item: ItemKey) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.get(item)?;
        let tool = match self.known.tools.find(&self.config.tool_key(item)) {
            Ok(tool) => tool,
            Err(_) if kind.category == ItemCategory::Seed => {
                self.known.tools.find(&self.config.seed_tool)?
            }
            Err(error) => return Err(error.into()),
        };
        debug!("Equip {} with {}", kind.name, tool.name);
        let tool_id = tool.id;
        self.controller.equip(tool, item);
        Ok(occur![vec![Tooling::ToolEquipped {
            tool: tool_id,
            item
        }]])
    }

    pub fn unequip(&mut self) -> Vec<Event> {
        self.controller.unequip();
        occur![vec![Tooling::ToolUnequipped]]
    }

    /// Hand harvest is tried first and pre-empts the equipped tool.
    pub fn tick_tools(&mut self, input: &PlayerInput) -> Vec<Event> {
        if input.animating {
            return vec![];
        }
        let grid = match self.map {
            Some(grid) => grid,
            None => return vec![],
        };
        let previous = self.controller.state;
        let hand = self.controller.hand_harvest.clone();
        let equipped = self.controller.equipped.clone();
        let held = self.controller.held;
        let mut rejection = Validation::default();
        let mut accepted = None;
        if let Some(tool) = hand {
            match self.prepare_candidate(grid, &tool, input, None) {
                Ok((context, validation)) => {
                    accepted = Some((ToolState::HandHarvestCandidate, context, validation))
                }
                Err(validation) => rejection = validation,
            }
        }
        if accepted.is_none() {
            if let Some(tool) = equipped {
                match self.prepare_candidate(grid, &tool, input, held) {
                    Ok((context, validation)) => {
                        accepted = Some((ToolState::EquippedToolCandidate, context, validation))
                    }
                    Err(validation) => rejection = validation,
                }
            }
        }
        let mut events = vec![];
        match accepted {
            Some((state, context, validation)) => {
                if self.is_preview_visible(input) {
                    events.extend(occur![self
                        .tiling
                        .paint_preview(&validation.valid, &validation.invalid)]);
                } else {
                    events.extend(occur![self.tiling.clear_preview()]);
                }
                self.controller.accept(state, context, validation);
            }
            None => {
                events.extend(occur![self.tiling.clear_preview()]);
                self.controller.reject(rejection);
            }
        }
        if self.controller.state != previous {
            events.extend(occur![vec![Tooling::CandidateChanged {
                state: self.controller.state
            }]]);
        }
        events
    }

    fn prepare_candidate(
        &self,
        grid: GridId,
        tool: &Shared<ToolKind>,
        input: &PlayerInput,
        item: Option<ItemKey>,
    ) -> Result<(ToolContext, Validation), Validation> {
        let PlayerInput { origin, cursor, .. } = *input;
        if !origin.in_range(cursor, tool.range, tool.metric) {
            let mut validation = Validation::default();
            validation.reject(cursor);
            return Err(validation.finish("Out of range."));
        }
        let cells = tool
            .targeting
            .get_cells(origin, cursor, tool.range, tool.metric);
        let context = ToolContext {
            grid,
            origin,
            cursor,
            tool: tool.clone(),
            item,
            cells,
        };
        let validation = self.validate_action(&context);
        if validation.is_valid() {
            Ok((context, validation))
        } else {
            Err(validation)
        }
    }

    fn is_preview_visible(&self, input: &PlayerInput) -> bool {
        self.config.preview_always_show && !(self.config.preview_hide_when_moving && input.moving)
    }

    /// Executes accepted non-seed candidate with the context it was validated with.
    pub fn use_tool(&mut self) -> Result<Vec<Event>, ActionError> {
        match &self.controller.candidate {
            None => return Err(ToolingError::NoCandidate.into()),
            Some(context) if context.tool.action == ToolAction::Seed => {
                return Err(ToolingError::CandidateIsSeed.into())
            }
            Some(_) => {}
        }
        self.consume_candidate()
    }

    /// Plants with accepted seed candidate.
    pub fn use_seed(&mut self) -> Result<Vec<Event>, ActionError> {
        match &self.controller.candidate {
            None => return Err(ToolingError::NoCandidate.into()),
            Some(context) if context.tool.action != ToolAction::Seed => {
                return Err(ToolingError::CandidateIsNotSeed.into())
            }
            Some(_) => {}
        }
        self.consume_candidate()
    }

    fn consume_candidate(&mut self) -> Result<Vec<Event>, ActionError> {
        let context = self
            .controller
            .take_candidate()
            .ok_or(ToolingError::NoCandidate)?;
        let mut events = self.execute_action(&context)?;
        events.extend(occur![self.tiling.clear_preview()]);
        events.extend(occur![vec![Tooling::CandidateChanged {
            state: self.controller.state
        }]]);
        Ok(events)
    }
}
