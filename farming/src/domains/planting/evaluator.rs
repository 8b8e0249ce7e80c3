use chrono::NaiveDate;

use crate::cultivating::{GridState, Key};
use crate::math::Cell;
use crate::planting::{GrowthKind, GrowthNeed, NeedKind};

/// Checks that every need of `step` is met by the cell state.
/// Unmet needs are reported together, one per line.
pub fn can_grow_at(
    growth: &GrowthKind,
    grid: &GridState,
    cell: Cell,
    step: usize,
    today: NaiveDate,
) -> Result<(), String> {
    let step = match growth.steps.get(step) {
        Some(step) => step,
        None => return Err(format!("Step {} does not exist.", step)),
    };
    let reasons: Vec<String> = step
        .needs
        .iter()
        .filter_map(|need| check_need(grid, cell, need, today).err())
        .collect();
    if reasons.is_empty() {
        Ok(())
    } else {
        Err(reasons.join("\n"))
    }
}

/// Index of the next step the seed may advance to, starting at `start`.
pub fn try_find_next_growable_step(
    growth: &GrowthKind,
    grid: &GridState,
    cell: Cell,
    start: usize,
    today: NaiveDate,
) -> Result<usize, String> {
    if start >= growth.steps.len() {
        return Err("Seed is at its final step.".to_string());
    }
    can_grow_at(growth, grid, cell, start, today)?;
    Ok(start)
}

fn check_need(grid: &GridState, cell: Cell, need: &GrowthNeed, today: NaiveDate) -> Result<(), String> {
    let current = match need.kind {
        NeedKind::None | NeedKind::Unsupported => return Ok(()),
        NeedKind::Watering => grid.get_int(cell, Key::WetCount).unwrap_or(0),
        NeedKind::ElapsedDays => {
            let start = grid
                .get_date(cell, Key::SeedStartDate)
                .ok_or_else(|| "Seed start date not set.".to_string())?;
            (today - start).num_days().max(0)
        }
    };
    if current >= need.value {
        Ok(())
    } else {
        Err(format!(
            "{} need not met (current: {} / need: {}).",
            need.kind.label(),
            current,
            need.value
        ))
    }
}
