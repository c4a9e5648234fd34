pub mod avatar;
pub mod engines;
pub mod pack;
pub mod storage;

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use avatar::AvatarSession;
pub use engines::{GrammarEngine, JumbleEngine, SurvivalEngine, WordBattleEngine};

#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
