use log::{info, warn};
use rkyv::AlignedVec;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;
use wordplay_games::wordlist::parse_word_list;
use wordplay_protocol::ContentPack;

use crate::{js_error, to_js};

/// Validate and deserialize an rkyv content pack fetched by the host.
pub fn load_pack(bytes: &[u8]) -> Result<ContentPack, JsValue> {
    // fetch() buffers carry no alignment guarantee.
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);
    let pack: ContentPack = rkyv::from_bytes(&aligned).map_err(|e| JsValue::from_str(&format!("invalid content pack: {:?}", e)))?;
    info!(
        "content pack v{} loaded: {} passages, {} racks, {} jumbles, {} questions",
        pack.version,
        pack.passages.len(),
        pack.racks.len(),
        pack.jumbles.len(),
        pack.questions.len()
    );
    Ok(pack)
}

async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url)).await?.dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("HTTP {} for {}", response.status(), url)));
    }
    JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// Fetch a flat JSON array of words. Callers keep the built-in dictionary
/// when this fails.
#[wasm_bindgen(js_name = fetchWordList)]
pub async fn fetch_word_list(url: String) -> Result<JsValue, JsValue> {
    let words = match fetch_text(&url).await {
        Ok(text) => parse_word_list(&text).map_err(js_error),
        Err(err) => Err(err),
    };
    match words {
        Ok(words) => {
            info!("fetched {} words from {}", words.len(), url);
            to_js(&words)
        }
        Err(err) => {
            warn!("word list fetch from {} failed: {:?}", url, err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordplay_games::builtin_pack;

    #[test]
    fn test_load_pack_from_unaligned_buffer() {
        let pack = builtin_pack();
        let bytes = rkyv::to_bytes::<_, 1024>(&pack).expect("serialize pack");
        let mut shifted = vec![0u8];
        shifted.extend_from_slice(&bytes);
        let loaded = load_pack(&shifted[1..]).expect("pack should validate");
        assert_eq!(loaded, pack);
    }
}
