use farming::cultivating::Key;
use farming::tooling::{PlayerInput, ToolState};

use crate::testing::{at, field, FarmingTestScenario, HOE, WATERING_CAN};

mod testing;

fn wet(scenario: FarmingTestScenario, cell: [i32; 2]) -> FarmingTestScenario {
    let origin = [cell[0] - 1, cell[1]];
    scenario
        .when_perform(HOE, origin, cell)
        .when_perform(WATERING_CAN, origin, cell)
        .then_action_should_succeed()
}

#[test]
fn test_wet_ground_dries_at_expiry() {
    wet(FarmingTestScenario::new().given_standard_map(), at(2, 2))
        .when_time_passes(179)
        .then_flag_should_be(at(2, 2), Key::Watered, true)
        .then_tile_should_be("Ground_Wet", at(2, 2), Some("wet"))
        .when_time_passes(1)
        .then_flag_should_be(at(2, 2), Key::Watered, false)
        .then_int_should_be(at(2, 2), Key::WetUntil, None)
        .then_tile_should_be("Ground_Wet", at(2, 2), None)
        .then(|given| {
            assert_eq!(given.grid().get_text(at(2, 2), Key::WetPreviousRole), None);
            assert!(given.game.decaying.entries.is_empty());
        });
}

#[test]
fn test_drying_keeps_tilled_soil_and_watering_count() {
    wet(FarmingTestScenario::new().given_standard_map(), at(2, 2))
        .when_time_passes(500)
        .then_flag_should_be(at(2, 2), Key::Tilled, true)
        .then_tile_should_be("Ground_Hoed", at(2, 2), Some("hoed"))
        .then_tile_should_be("Ground", at(2, 2), Some("tile"))
        .then_int_should_be(at(2, 2), Key::WetCount, Some(1));
}

#[test]
fn test_cells_dry_independently() {
    let scenario = wet(FarmingTestScenario::new().given_standard_map(), at(2, 2)).given_time(100);
    wet(scenario, at(6, 2))
        .when_time_passes(100)
        .then_flag_should_be(at(2, 2), Key::Watered, false)
        .then_flag_should_be(at(6, 2), Key::Watered, true)
        .then_tile_should_be("Ground_Wet", at(6, 2), Some("wet"))
        .when_time_passes(80)
        .then_flag_should_be(at(6, 2), Key::Watered, false)
        .then_tile_should_be("Ground_Wet", at(6, 2), None);
}

#[test]
fn test_rewatering_postpones_drying() {
    let scenario = wet(FarmingTestScenario::new().given_standard_map(), at(2, 2)).given_time(150);
    wet(scenario, at(2, 2))
        .when_time_passes(100)
        .then_flag_should_be(at(2, 2), Key::Watered, true)
        .when_time_passes(80)
        .then_flag_should_be(at(2, 2), Key::Watered, false);
}

#[test]
fn test_drying_checked_at_interval() {
    let idle = PlayerInput::default();
    wet(FarmingTestScenario::new().given_standard_map(), at(2, 2))
        .given_time(200)
        .when(|given| {
            given.game.update(0.1, &idle);
        })
        .then_flag_should_be(at(2, 2), Key::Watered, true)
        .when(|given| {
            given.game.update(0.2, &idle);
        })
        .then_flag_should_be(at(2, 2), Key::Watered, false);
}

#[test]
fn test_game_time_drives_drying() {
    let idle = PlayerInput::default();
    wet(FarmingTestScenario::new().given_standard_map(), at(2, 2))
        .when(|given| {
            given.game.update(2.5, &idle);
        })
        .then_flag_should_be(at(2, 2), Key::Watered, true)
        .when(|given| {
            given.game.update(0.5, &idle);
        })
        .then_flag_should_be(at(2, 2), Key::Watered, false);
}

/// Map without a wet layer, wet tiles land on the ground itself.
fn shared_ground_map(scenario: FarmingTestScenario) -> FarmingTestScenario {
    scenario
        .given_layer("Ground", 0, false, &field())
        .given_layer("Ground_Hoed", 1, false, &[])
        .given_map("farm")
}

#[test]
fn test_drying_restores_ground_shared_with_wet_tiles() {
    wet(shared_ground_map(FarmingTestScenario::new()), at(2, 2))
        .then_tile_should_be("Ground", at(2, 2), Some("wet"))
        .when_time_passes(500)
        .then_flag_should_be(at(2, 2), Key::Watered, false)
        .then_flag_should_be(at(2, 2), Key::Tilled, true)
        .then_tile_should_be("Ground", at(2, 2), Some("tile"))
        .then_tile_should_be("Ground_Hoed", at(2, 2), Some("hoed"))
        .given_equipped(HOE)
        .when_aim(at(1, 2), at(2, 2))
        .then_state_should_be(ToolState::EquippedToolCandidate);
}

#[test]
fn test_rewatered_shared_ground_restores_original_tile() {
    let scenario = wet(shared_ground_map(FarmingTestScenario::new()), at(2, 2)).given_time(100);
    wet(scenario, at(2, 2))
        .when_time_passes(500)
        .then_tile_should_be("Ground", at(2, 2), Some("tile"));
}

#[test]
fn test_restored_wet_cell_on_shared_ground_dries_to_ground() {
    let envelope = wet(shared_ground_map(FarmingTestScenario::new()), at(2, 2)).capture();
    shared_ground_map(FarmingTestScenario::new().given_envelope(&envelope))
        .then_tile_should_be("Ground", at(2, 2), Some("wet"))
        .when_time_passes(180)
        .then_flag_should_be(at(2, 2), Key::Watered, false)
        .then_tile_should_be("Ground", at(2, 2), Some("tile"));
}
