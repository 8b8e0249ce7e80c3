#![allow(dead_code)]

use datamap::Storage;
use farming::api::{ActionError, Event};
use farming::config::SimulationConfig;
use farming::cultivating::{GridState, Key, Value};
use farming::data::KNOWLEDGE_SCHEMA;
use farming::math::{Cell, CellMath};
use farming::model::{Entities, EntityCategory, EntityId, EntityView, ItemKey};
use farming::persistence::Envelope;
use farming::tiling::{Layer, LayerId};
use farming::tooling::{PlayerInput, ToolState};
use farming::Game;

pub const ITEMS: &str = "
insert into ItemKind values (1, 'hoe', 'Tool', null);
insert into ItemKind values (2, 'watering-can', 'Tool', null);
insert into ItemKind values (3, 'sickle', 'Tool', null);
insert into ItemKind values (4, 'axe', 'Tool', null);
insert into ItemKind values (5, 'pickaxe', 'Tool', null);
insert into ItemKind values (6, 'wide-hoe', 'Tool', null);
insert into ItemKind values (7, 'turnip-seed', 'Seed', 'Hand');
insert into ItemKind values (8, 'wheat-seed', 'Seed', 'Scythe');
insert into ItemKind values (9, 'melon-seed', 'Seed', 'Hand');
insert into ItemKind values (10, 'stone', 'Other', null);
insert into ItemKind values (11, 'sprinkler', 'Tool', null);
insert into ItemKind values (70, 'turnip', 'Crop', null);
insert into ItemKind values (80, 'wheat', 'Crop', null);
";

pub const TOOLS: &str = r#"
insert into ToolKind values (1, 'simulation_tool_1', 2, 'Manhattan',
    '{"shape": {"type": "SingleCell"}}', '{"type": "Hoe"}',
    '["GroundBase"]', '["Blocking"]', 'GroundHoed');
insert into ToolKind values (2, 'simulation_tool_2', 2, 'Chebyshev',
    '{"shape": {"type": "SingleCell"}}', '{"type": "Water", "duration": 180}',
    '["GroundHoed"]', '["Blocking"]', 'GroundWet');
insert into ToolKind values (3, 'simulation_tool_3', 1, 'Chebyshev',
    '{"shape": {"type": "SingleCell"}}', '{"type": "Sickle"}',
    '["GroundBase", "GroundHoed"]', '["Blocking"]', 'GroundGrowth');
insert into ToolKind values (4, 'simulation_tool_4', 1, 'Chebyshev',
    '{"shape": {"type": "SingleCell"}}', '{"type": "Axe", "damage": 3}',
    '[]', '[]', 'GroundBase');
insert into ToolKind values (5, 'simulation_tool_5', 1, 'Chebyshev',
    '{"shape": {"type": "SingleCell"}}', '{"type": "PickAxe"}',
    '[]', '[]', 'GroundBase');
insert into ToolKind values (6, 'simulation_tool_6', 3, 'Manhattan',
    '{"shape": {"type": "Rect", "width": 3, "height": 1}, "respect_range": false}', '{"type": "Hoe"}',
    '["GroundBase"]', '["Blocking"]', 'GroundHoed');
insert into ToolKind values (11, 'simulation_tool_11', 2, 'Chebyshev',
    '{"shape": {"type": "SingleCell"}}', '{"type": "Water", "duration": 60, "mode": "Extend"}',
    '["GroundHoed"]', '["Blocking"]', 'GroundWet');
insert into ToolKind values (7, 'simulation_tool_seed', 1, 'Chebyshev',
    '{"shape": {"type": "SingleCell"}}', '{"type": "Seed"}',
    '["GroundHoed"]', '["Blocking"]', 'GroundGrowth');
insert into ToolKind values (8, 'simulation_tool_hand', 1, 'Chebyshev',
    '{"shape": {"type": "SingleCell"}}', '{"type": "HandHarvest"}',
    '["GroundBase", "GroundHoed"]', '["Blocking"]', 'GroundGrowth');
"#;

pub const GROWTHS: &str = r#"
insert into GrowthKind values (1, 'simulation_growth_7', 7, 70, '[
    {"tile": "turnip-0"},
    {"tile": "turnip-1", "needs": [{"type": "Watering", "value": 3}, {"type": "ElapsedDays", "value": 2}]},
    {"tile": "turnip-2", "needs": [{"type": "ElapsedDays", "value": 1}]}
]');
insert into GrowthKind values (2, 'simulation_growth_8', 8, 80, '[
    {"tile": "wheat-0"},
    {"tile": "wheat-1", "needs": [{"type": "ElapsedDays", "value": 1}]}
]');
"#;

pub const RULES: &str = "
insert into RoleRule values (1, 'GroundBase', '(?i)^ground$', null, null, 'Forbid', 10);
insert into RoleRule values (2, 'GroundHoed', '(?i)hoed', null, null, 'Forbid', 10);
insert into RoleRule values (3, 'GroundWet', '(?i)wet', null, null, 'Forbid', 10);
insert into RoleRule values (4, 'GroundGrowth', '(?i)growth|crops', null, null, 'Any', 10);
insert into RoleRule values (5, 'Blocking', '(?i)wall|fence', null, null, 'Require', 10);
";

pub const HOE: ItemKey = ItemKey(1);
pub const WATERING_CAN: ItemKey = ItemKey(2);
pub const SICKLE: ItemKey = ItemKey(3);
pub const AXE: ItemKey = ItemKey(4);
pub const PICKAXE: ItemKey = ItemKey(5);
pub const WIDE_HOE: ItemKey = ItemKey(6);
pub const TURNIP_SEED: ItemKey = ItemKey(7);
pub const WHEAT_SEED: ItemKey = ItemKey(8);
pub const MELON_SEED: ItemKey = ItemKey(9);
pub const STONE: ItemKey = ItemKey(10);
pub const SPRINKLER: ItemKey = ItemKey(11);
pub const TURNIP: ItemKey = ItemKey(70);
pub const WHEAT: ItemKey = ItemKey(80);

pub const FIELD: usize = 10;
pub const WALL: Cell = [5, 5];

pub fn at(x: i32, y: i32) -> Cell {
    [x, y]
}

pub fn field() -> Vec<Cell> {
    let mut cells = vec![];
    for y in 0..FIELD as i32 {
        for x in 0..FIELD as i32 {
            cells.push([x, y]);
        }
    }
    cells
}

pub fn create_storage() -> Storage {
    let storage = Storage::open_in_memory().unwrap();
    storage.execute_batch(KNOWLEDGE_SCHEMA).unwrap();
    for content in [ITEMS, TOOLS, GROWTHS, RULES] {
        storage.execute_batch(content).unwrap();
    }
    storage
}

pub fn create_game(config: SimulationConfig) -> Game {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut game = Game::new(create_storage(), config);
    game.load_game_knowledge().unwrap();
    game
}

pub struct FarmingTestScenario {
    pub game: Game,
    layers: Vec<Layer>,
    entities: Vec<EntityView>,
    ticked: Vec<Event>,
    current_action_result: Option<Result<Vec<Event>, ActionError>>,
}

impl FarmingTestScenario {
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        FarmingTestScenario {
            game: create_game(config),
            layers: vec![],
            entities: vec![],
            ticked: vec![],
            current_action_result: None,
        }
    }

    pub fn grid(&self) -> &GridState {
        let grid = self.game.map.unwrap();
        self.game.cultivating.get_grid(grid).unwrap()
    }

    pub fn layer(&self, name: &str) -> &Layer {
        self.game.tiling.find_layer(name).unwrap()
    }

    pub fn tile(&self, layer: &str, cell: Cell) -> Option<String> {
        self.layer(layer).get_tile(cell).cloned()
    }

    pub fn events(&self) -> &Vec<Event> {
        self.current_action_result
            .as_ref()
            .unwrap()
            .as_ref()
            .unwrap()
    }

    pub fn capture(&mut self) -> Envelope {
        let mut envelope = Envelope::default();
        self.game.capture(&mut envelope).unwrap();
        envelope
    }

    pub fn ticked(&self) -> String {
        format!("{:?}", self.ticked)
    }

    pub fn given_layer(mut self, name: &str, order: i32, collider: bool, cells: &[Cell]) -> Self {
        let id = LayerId(self.layers.len() + 1);
        let layer = Layer::new(id, name, order, collider).with_tiles(cells, "tile");
        self.layers.push(layer);
        self
    }

    /// Ground field with empty hoed, wet and crop layers, a wall and decor.
    pub fn given_standard_layers(self) -> Self {
        self.given_layer("Ground", 0, false, &field())
            .given_layer("Ground_Hoed", 1, false, &[])
            .given_layer("Ground_Wet", 2, false, &[])
            .given_layer("Crops", 3, false, &[])
            .given_layer("Walls", 4, true, &[WALL])
            .given_layer("Flowers", 5, false, &[at(9, 9)])
    }

    pub fn given_map(mut self, path: &str) -> Self {
        let layers = std::mem::take(&mut self.layers);
        self.game.enter_map(path, layers).unwrap();
        self
    }

    pub fn given_standard_map(self) -> Self {
        self.given_standard_layers().given_map("farm")
    }

    pub fn given_envelope(mut self, envelope: &Envelope) -> Self {
        self.game.restore(envelope).unwrap();
        self
    }

    pub fn given_time(mut self, seconds: i64) -> Self {
        self.game.timing.set_seconds(seconds);
        self
    }

    pub fn given_property(mut self, cell: Cell, key: Key, value: impl Into<Value>) -> Self {
        let grid = self.game.map.unwrap();
        self.game
            .cultivating
            .get_grid_mut(grid)
            .unwrap()
            .set(cell, key, value);
        self
    }

    pub fn given_entity(mut self, id: usize, category: EntityCategory, cell: Cell) -> Self {
        self.entities.push(EntityView {
            id: EntityId(id),
            category,
            position: cell.position(),
        });
        self.game.set_probe(Box::new(Entities {
            entities: self.entities.clone(),
        }));
        self
    }

    pub fn given_equipped(mut self, item: ItemKey) -> Self {
        self.game.equip(item).unwrap();
        self
    }

    pub fn when_aim(mut self, origin: Cell, cursor: Cell) -> Self {
        let input = PlayerInput {
            origin,
            cursor,
            animating: false,
            moving: false,
        };
        self.ticked = self.game.tick_tools(&input);
        self
    }

    pub fn when_tick(mut self, input: PlayerInput) -> Self {
        self.ticked = self.game.tick_tools(&input);
        self
    }

    pub fn when_use_tool(mut self) -> Self {
        self.current_action_result = Some(self.game.use_tool());
        self
    }

    pub fn when_use_seed(mut self) -> Self {
        self.current_action_result = Some(self.game.use_seed());
        self
    }

    /// Equips, aims from origin and uses whatever candidate got accepted.
    pub fn when_perform(self, item: ItemKey, origin: Cell, cursor: Cell) -> Self {
        let mut scenario = self.given_equipped(item).when_aim(origin, cursor);
        let is_seed = scenario
            .game
            .controller
            .candidate
            .as_ref()
            .map(|context| context.tool.action == farming::tooling::ToolAction::Seed)
            .unwrap_or(false);
        scenario.current_action_result = Some(if is_seed {
            scenario.game.use_seed()
        } else {
            scenario.game.use_tool()
        });
        scenario
    }

    pub fn when_days_pass(mut self, days: u32) -> Self {
        self.game.advance_time(days);
        self
    }

    pub fn when_time_passes(mut self, seconds: i64) -> Self {
        let now = self.game.timing.now_seconds();
        self.game.timing.set_seconds(now + seconds);
        self.game.revert_expired();
        self
    }

    pub fn then_action_should_succeed(self) -> Self {
        match &self.current_action_result {
            Some(Ok(_)) => {}
            other => panic!("Action expected to succeed, got {:?}", other),
        }
        self
    }

    pub fn then_action_should_fail(self, expected: ActionError) -> Self {
        match &self.current_action_result {
            Some(Err(error)) => assert_eq!(error, &expected),
            other => panic!("Action expected to fail, got {:?}", other),
        }
        self
    }

    pub fn then_state_should_be(self, state: ToolState) -> Self {
        assert_eq!(self.game.controller.state, state);
        self
    }

    pub fn then_rejection_should_be(self, reason: &str) -> Self {
        assert_eq!(self.game.controller.state, ToolState::Invalid);
        assert_eq!(self.game.controller.validation.reason.as_deref(), Some(reason));
        self
    }

    pub fn then_int_should_be(self, cell: Cell, key: Key, expected: Option<i64>) -> Self {
        assert_eq!(self.grid().get_int(cell, key), expected, "{:?} at {:?}", key, cell);
        self
    }

    pub fn then_flag_should_be(self, cell: Cell, key: Key, expected: bool) -> Self {
        assert_eq!(self.grid().get_flag(cell, key), expected, "{:?} at {:?}", key, cell);
        self
    }

    pub fn then_tile_should_be(self, layer: &str, cell: Cell, expected: Option<&str>) -> Self {
        assert_eq!(
            self.tile(layer, cell).as_deref(),
            expected,
            "tile of {} at {:?}",
            layer,
            cell
        );
        self
    }

    pub fn then<F>(self, check: F) -> Self
    where
        F: FnOnce(&Self),
    {
        check(&self);
        self
    }

    pub fn when<F>(mut self, change: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        change(&mut self);
        self
    }
}
