use crate::collections::Shared;
use crate::model::ItemKey;
use crate::tooling::{ToolContext, ToolKind, ToolState, Validation};

/// Per-tick selection between hand harvesting and the equipped tool.
/// Keeps the last accepted context until it is consumed by an execution.
#[derive(Default)]
pub struct ToolController {
    pub state: ToolState,
    pub equipped: Option<Shared<ToolKind>>,
    pub held: Option<ItemKey>,
    pub hand_harvest: Option<Shared<ToolKind>>,
    pub candidate: Option<ToolContext>,
    pub validation: Validation,
}

impl ToolController {
    pub fn equip(&mut self, tool: Shared<ToolKind>, item: ItemKey) {
        self.equipped = Some(tool);
        self.held = Some(item);
        self.forget();
    }

    pub fn unequip(&mut self) {
        self.equipped = None;
        self.held = None;
        self.forget();
    }

    pub fn accept(&mut self, state: ToolState, context: ToolContext, validation: Validation) {
        self.state = state;
        self.candidate = Some(context);
        self.validation = validation;
    }

    pub fn reject(&mut self, validation: Validation) {
        self.state = ToolState::Invalid;
        self.candidate = None;
        self.validation = validation;
    }

    pub fn take_candidate(&mut self) -> Option<ToolContext> {
        let candidate = self.candidate.take();
        if candidate.is_some() {
            self.state = ToolState::Idle;
            self.validation = Validation::default();
        }
        candidate
    }

    pub fn forget(&mut self) {
        self.state = ToolState::Idle;
        self.candidate = None;
        self.validation = Validation::default();
    }
}
