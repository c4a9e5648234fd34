//! One wasm-facing engine per game. Every mutating call returns the fresh
//! snapshot so the UI can re-render from a single value.

use wasm_bindgen::prelude::*;
use wordplay_games::{
    builtin_pack, Game, GrammarConfig, GrammarGame, JumbleConfig, JumbleGame, SurvivalConfig, SurvivalQuiz,
    WordBattleConfig, WordBattleGame,
};
use wordplay_protocol::{ContentPack, SpanId};
use wordplay_session::BestScoreStore;

use crate::pack::load_pack;
use crate::storage::LocalStorageStore;
use crate::{js_error, to_js};

/// Methods every engine shares: clock, quit, restart, snapshot, best score.
macro_rules! session_methods {
    ($engine:ident) => {
        #[wasm_bindgen]
        impl $engine {
            /// One second of game time. Call from a 1 s interval.
            pub fn tick(&mut self) -> Result<JsValue, JsValue> {
                self.game.tick();
                self.snapshot()
            }

            /// Frame-driven alternative to `tick`; `dt` in seconds.
            pub fn advance(&mut self, dt: f32) -> Result<JsValue, JsValue> {
                self.game.advance(dt);
                self.snapshot()
            }

            pub fn end(&mut self) -> Result<JsValue, JsValue> {
                self.game.end();
                self.snapshot()
            }

            pub fn restart(&mut self) -> Result<JsValue, JsValue> {
                self.game.restart();
                self.snapshot()
            }

            pub fn snapshot(&self) -> Result<JsValue, JsValue> {
                to_js(&self.game.snapshot())
            }

            pub fn score(&self) -> i32 {
                self.game.score()
            }

            /// Store the score if it is a new best. Returns true when it was.
            #[wasm_bindgen(js_name = recordBest)]
            pub fn record_best(&self) -> bool {
                self.game.record_best(&mut LocalStorageStore::open())
            }

            #[wasm_bindgen(js_name = bestScore)]
            pub fn best_score(&self) -> Option<i32> {
                LocalStorageStore::open().load(self.game.kind().best_score_key())
            }
        }
    };
}

#[wasm_bindgen]
pub struct GrammarEngine {
    game: GrammarGame,
}

#[wasm_bindgen]
impl GrammarEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<GrammarEngine, JsValue> {
        Self::with_pack(builtin_pack())
    }

    #[wasm_bindgen(js_name = fromPack)]
    pub fn from_pack(bytes: &[u8]) -> Result<GrammarEngine, JsValue> {
        Self::with_pack(load_pack(bytes)?)
    }

    fn with_pack(pack: ContentPack) -> Result<GrammarEngine, JsValue> {
        let game = GrammarGame::new(pack.passages, GrammarConfig::default()).map_err(js_error)?;
        Ok(Self { game })
    }

    pub fn select(&mut self, span: u32) -> Result<JsValue, JsValue> {
        self.game.select(SpanId::new(span)).map_err(js_error)?;
        self.snapshot()
    }

    pub fn submit(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.game.submit(text).map_err(js_error)?;
        self.snapshot()
    }

    pub fn cancel(&mut self) -> Result<JsValue, JsValue> {
        self.game.cancel();
        self.snapshot()
    }

    #[wasm_bindgen(js_name = nextPassage)]
    pub fn next_passage(&mut self) -> Result<JsValue, JsValue> {
        self.game.next_passage().map_err(js_error)?;
        self.snapshot()
    }
}

session_methods!(GrammarEngine);

#[wasm_bindgen]
pub struct WordBattleEngine {
    game: WordBattleGame,
}

#[wasm_bindgen]
impl WordBattleEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(rack: usize, seed: u32) -> Result<WordBattleEngine, JsValue> {
        Self::with_pack(builtin_pack(), rack, seed)
    }

    #[wasm_bindgen(js_name = fromPack)]
    pub fn from_pack(bytes: &[u8], rack: usize, seed: u32) -> Result<WordBattleEngine, JsValue> {
        Self::with_pack(load_pack(bytes)?, rack, seed)
    }

    fn with_pack(pack: ContentPack, rack: usize, seed: u32) -> Result<WordBattleEngine, JsValue> {
        let puzzle = pack
            .racks
            .get(rack)
            .ok_or_else(|| JsValue::from_str(&format!("no rack {} in pack", rack)))?;
        let config = WordBattleConfig {
            seed: u64::from(seed),
            ..WordBattleConfig::default()
        };
        Ok(Self {
            game: WordBattleGame::new(puzzle, &pack.words, config),
        })
    }

    pub fn submit(&mut self, word: &str) -> Result<JsValue, JsValue> {
        self.game.submit(word).map_err(js_error)?;
        self.snapshot()
    }

    /// Add words from `fetchWordList`. Ignored unless the rack allows an
    /// extended dictionary. Returns how many words were new.
    #[wasm_bindgen(js_name = extendDictionary)]
    pub fn extend_dictionary(&mut self, words: JsValue) -> Result<usize, JsValue> {
        let words: Vec<String> = serde_wasm_bindgen::from_value(words)?;
        Ok(self.game.extend_dictionary(words))
    }
}

session_methods!(WordBattleEngine);

#[wasm_bindgen]
pub struct JumbleEngine {
    game: JumbleGame,
}

#[wasm_bindgen]
impl JumbleEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<JumbleEngine, JsValue> {
        Self::with_pack(builtin_pack(), seed)
    }

    #[wasm_bindgen(js_name = fromPack)]
    pub fn from_pack(bytes: &[u8], seed: u32) -> Result<JumbleEngine, JsValue> {
        Self::with_pack(load_pack(bytes)?, seed)
    }

    fn with_pack(pack: ContentPack, seed: u32) -> Result<JumbleEngine, JsValue> {
        let config = JumbleConfig {
            seed: u64::from(seed),
            ..JumbleConfig::default()
        };
        let game = JumbleGame::new(pack.jumbles, config).map_err(js_error)?;
        Ok(Self { game })
    }

    pub fn guess(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.game.guess(text).map_err(js_error)?;
        self.snapshot()
    }

    pub fn skip(&mut self) -> Result<JsValue, JsValue> {
        self.game.skip().map_err(js_error)?;
        self.snapshot()
    }
}

session_methods!(JumbleEngine);

#[wasm_bindgen]
pub struct SurvivalEngine {
    game: SurvivalQuiz,
}

#[wasm_bindgen]
impl SurvivalEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<SurvivalEngine, JsValue> {
        Self::with_pack(builtin_pack(), seed)
    }

    #[wasm_bindgen(js_name = fromPack)]
    pub fn from_pack(bytes: &[u8], seed: u32) -> Result<SurvivalEngine, JsValue> {
        Self::with_pack(load_pack(bytes)?, seed)
    }

    fn with_pack(pack: ContentPack, seed: u32) -> Result<SurvivalEngine, JsValue> {
        let config = SurvivalConfig {
            seed: u64::from(seed),
            ..SurvivalConfig::default()
        };
        let game = SurvivalQuiz::new(pack.questions, config).map_err(js_error)?;
        Ok(Self { game })
    }

    pub fn answer(&mut self, choice: usize) -> Result<JsValue, JsValue> {
        self.game.answer(choice).map_err(js_error)?;
        self.snapshot()
    }
}

session_methods!(SurvivalEngine);
