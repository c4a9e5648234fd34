use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use wordplay_games::avatar::{Avatar, AvatarState, ConversationWidget, ReadinessPolicy, Sleeper, WidgetError};

use crate::js_error;

fn widget_error(value: JsValue) -> WidgetError {
    WidgetError::Failed(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Adapter over the vendor object. It must expose `isReady()`,
/// `startConversation()` and `sendMessage(text)`; the last two may return
/// promises.
pub struct JsWidget {
    inner: JsValue,
}

impl JsWidget {
    pub fn new(inner: JsValue) -> Self {
        Self { inner }
    }

    fn call(&self, method: &str, args: &Array) -> Result<JsValue, WidgetError> {
        let func: Function = Reflect::get(&self.inner, &JsValue::from_str(method))
            .map_err(widget_error)?
            .dyn_into()
            .map_err(|_| WidgetError::Failed(format!("widget has no {}()", method)))?;
        func.apply(&self.inner, args).map_err(widget_error)
    }

    async fn call_async(&self, method: &str, args: Array) -> Result<(), WidgetError> {
        let value = self.call(method, &args)?;
        JsFuture::from(Promise::resolve(&value)).await.map_err(widget_error)?;
        Ok(())
    }
}

impl ConversationWidget for JsWidget {
    fn is_ready(&self) -> bool {
        self.call("isReady", &Array::new())
            .map(|ready| ready.is_truthy())
            .unwrap_or(false)
    }

    fn start_conversation(&self) -> LocalBoxFuture<'_, Result<(), WidgetError>> {
        self.call_async("startConversation", Array::new()).boxed_local()
    }

    fn send_message<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), WidgetError>> {
        self.call_async("sendMessage", Array::of1(&JsValue::from_str(text)))
            .boxed_local()
    }
}

/// Sleeps on `setTimeout`. Resolves at once when no timer is available.
pub struct TimeoutSleeper;

impl Sleeper for TimeoutSleeper {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        let delay = i32::try_from(ms).unwrap_or(i32::MAX);
        let promise = Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window()
                .map(|window| window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay).is_ok())
                .unwrap_or(false);
            if !scheduled {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        async move {
            let _ = JsFuture::from(promise).await;
        }
        .boxed_local()
    }
}

#[wasm_bindgen]
pub struct AvatarSession {
    avatar: Rc<Avatar<JsWidget>>,
    policy: ReadinessPolicy,
}

#[wasm_bindgen]
impl AvatarSession {
    /// Wrap the vendor widget. Timing defaults to 250 ms polls for 10 s.
    #[wasm_bindgen(constructor)]
    pub fn new(widget: JsValue, poll_interval_ms: Option<u32>, timeout_ms: Option<u32>) -> AvatarSession {
        let defaults = ReadinessPolicy::default();
        Self {
            avatar: Rc::new(Avatar::new(JsWidget::new(widget))),
            policy: ReadinessPolicy {
                poll_interval_ms: poll_interval_ms.unwrap_or(defaults.poll_interval_ms),
                timeout_ms: timeout_ms.unwrap_or(defaults.timeout_ms),
            },
        }
    }

    /// Resolves when the widget is ready, rejects with a notice on timeout.
    pub fn connect(&self) -> Promise {
        let avatar = Rc::clone(&self.avatar);
        let policy = self.policy;
        future_to_promise(async move {
            avatar.connect(&TimeoutSleeper, policy).await.map_err(js_error)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    pub fn start(&self) -> Promise {
        let avatar = Rc::clone(&self.avatar);
        future_to_promise(async move {
            avatar.start().await.map_err(js_error)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    pub fn send(&self, text: String) -> Promise {
        let avatar = Rc::clone(&self.avatar);
        future_to_promise(async move {
            avatar.send(&text).await.map_err(js_error)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    pub fn state(&self) -> String {
        match self.avatar.state() {
            AvatarState::Loading => "loading",
            AvatarState::Ready => "ready",
            AvatarState::Talking => "talking",
            AvatarState::Unavailable => "unavailable",
        }
        .to_string()
    }

    pub fn notice(&self) -> Option<String> {
        self.avatar.notice()
    }

    #[wasm_bindgen(js_name = canStart)]
    pub fn can_start(&self) -> bool {
        self.avatar.can_start()
    }

    #[wasm_bindgen(js_name = canSend)]
    pub fn can_send(&self) -> bool {
        self.avatar.can_send()
    }
}
