use bjtable::{Action, Card, Table, TableOptions, TableView};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Browser handle for one table. The page owns the render loop: it forwards
/// clicks to the action methods, calls `advance` every frame with
/// `performance.now()`, and draws whatever `snapshot` returns. Actions take
/// the same clock so the dealer's pacing starts from the click.
#[wasm_bindgen]
pub struct WasmTable {
    table: Table,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, starting_chips: u32) -> Result<WasmTable, JsValue> {
        let options = TableOptions::default().with_starting_chips(starting_chips);
        let table = Table::new(options, u64::from(seed)).map_err(js_err)?;
        Ok(Self { table })
    }

    /// Advances the table clock. `now_ms` is a monotonic page clock.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        self.table.advance_to(clock(now_ms)) as u32
    }

    pub fn increase_bet(&mut self, now_ms: f64) -> bool {
        self.act(now_ms, Action::IncreaseBet)
    }

    pub fn decrease_bet(&mut self, now_ms: f64) -> bool {
        self.act(now_ms, Action::DecreaseBet)
    }

    pub fn place_bet(&mut self, now_ms: f64) -> bool {
        self.act(now_ms, Action::PlaceBet)
    }

    pub fn twist(&mut self, now_ms: f64) -> bool {
        self.act(now_ms, Action::Twist)
    }

    pub fn stick(&mut self, now_ms: f64) -> bool {
        self.act(now_ms, Action::Stick)
    }

    /// Next timer deadline, for pages that sleep between frames.
    pub fn next_deadline(&self) -> Option<f64> {
        self.table.next_deadline().map(|ms| ms as f64)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.table.snapshot()))
    }
}

impl WasmTable {
    fn act(&mut self, now_ms: f64, action: Action) -> bool {
        self.table.advance_to(clock(now_ms));
        self.table.apply(action)
    }
}

/// The engine's view plus the asset key of every card, so the page can
/// look up artwork without knowing the naming scheme.
#[derive(Serialize)]
struct Snapshot {
    #[serde(flatten)]
    view: TableView,
    player_assets: Vec<String>,
    dealer_assets: Vec<String>,
}

impl From<TableView> for Snapshot {
    fn from(view: TableView) -> Self {
        Self {
            player_assets: view.player.iter().map(Card::asset_key).collect(),
            dealer_assets: view.dealer.iter().map(Card::asset_key).collect(),
            view,
        }
    }
}

fn clock(now_ms: f64) -> u64 {
    now_ms.max(0.0) as u64
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
