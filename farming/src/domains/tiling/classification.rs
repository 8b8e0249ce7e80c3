use std::collections::HashMap;

use crate::collections::Shared;
use crate::tiling::{ColliderRequirement, Layer, LayerId, Role, RoleRule};

impl RoleRule {
    /// Returns `weight` if the name pattern matches and every other stated
    /// constraint holds, zero otherwise. Rules without a name pattern never score.
    pub fn score(&self, layer: &Layer) -> u32 {
        let pattern = match &self.name_pattern {
            Some(pattern) => pattern,
            None => return 0,
        };
        if !pattern.is_match(&layer.name) {
            return 0;
        }
        if let Some([min, max]) = self.order_range {
            if layer.order < min || layer.order > max {
                return 0;
            }
        }
        let collider_accepted = match self.collider {
            ColliderRequirement::Any => true,
            ColliderRequirement::Require => layer.collider,
            ColliderRequirement::Forbid => !layer.collider,
        };
        if collider_accepted {
            self.weight
        } else {
            0
        }
    }
}

/// Accumulated positive scores per role in rule declaration order.
pub fn score_layer(layer: &Layer, rules: &[Shared<RoleRule>]) -> Vec<(Role, u32)> {
    let mut scores: Vec<(Role, u32)> = vec![];
    for rule in rules {
        let score = rule.score(layer);
        if score == 0 {
            continue;
        }
        match scores.iter_mut().find(|(role, _)| *role == rule.role) {
            Some((_, total)) => *total += score,
            None => scores.push((rule.role, score)),
        }
    }
    scores
}

/// Builds role index from scratch. Layers that score for no role become decor.
pub fn classify(layers: &[Layer], rules: &[Shared<RoleRule>]) -> HashMap<Role, Vec<LayerId>> {
    let mut index: HashMap<Role, Vec<LayerId>> = HashMap::new();
    for layer in layers {
        let scores = score_layer(layer, rules);
        if scores.is_empty() {
            index.entry(Role::Decor).or_default().push(layer.id);
            continue;
        }
        for (role, _) in scores {
            index.entry(role).or_default().push(layer.id);
        }
    }
    index
}
