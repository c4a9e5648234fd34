//! The avatar page talks to a third-party conversational widget that loads
//! on its own schedule. The engine never touches the vendor script; it is
//! handed something implementing [`ConversationWidget`] and a [`Sleeper`]
//! to wait with.

use std::cell::{Cell, RefCell};

use futures::future::LocalBoxFuture;
use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("the avatar is still loading")]
    NotReady,
    #[error("the avatar did not load within {waited_ms} ms")]
    Timeout { waited_ms: u32 },
    /// Readiness already gave up; the timeout notice stays in place.
    #[error("the avatar is unavailable")]
    Unavailable,
    #[error("start a conversation first")]
    NotStarted,
    #[error("avatar error: {0}")]
    Failed(String),
}

pub trait ConversationWidget {
    fn is_ready(&self) -> bool;

    fn start_conversation(&self) -> LocalBoxFuture<'_, Result<(), WidgetError>>;

    fn send_message<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), WidgetError>>;
}

/// Source of delays for readiness polling.
pub trait Sleeper {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPolicy {
    pub poll_interval_ms: u32,
    pub timeout_ms: u32,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            poll_interval_ms: 250,
            timeout_ms: 10_000,
        }
    }
}

/// Resolve once `widget` reports ready, or fail after `policy.timeout_ms`.
pub async fn wait_until_ready<W, S>(widget: &W, sleeper: &S, policy: ReadinessPolicy) -> Result<(), WidgetError>
where
    W: ConversationWidget + ?Sized,
    S: Sleeper + ?Sized,
{
    let interval = policy.poll_interval_ms.max(1);
    let mut waited = 0u32;
    loop {
        if widget.is_ready() {
            return Ok(());
        }
        if waited >= policy.timeout_ms {
            warn!("avatar widget not ready after {} ms, giving up", waited);
            return Err(WidgetError::Timeout { waited_ms: waited });
        }
        sleeper.sleep(interval).await;
        waited = waited.saturating_add(interval);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarState {
    Loading,
    Ready,
    Talking,
    Unavailable,
}

/// Gate in front of the widget: nothing is sent before it is ready and a
/// conversation has started.
///
/// Methods take `&self` so a host can share one gate between pending
/// promises.
pub struct Avatar<W> {
    widget: W,
    state: Cell<AvatarState>,
    notice: RefCell<Option<String>>,
}

impl<W: ConversationWidget> Avatar<W> {
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            state: Cell::new(AvatarState::Loading),
            notice: RefCell::new(None),
        }
    }

    pub fn state(&self) -> AvatarState {
        self.state.get()
    }

    /// Last user-visible problem, if any.
    pub fn notice(&self) -> Option<String> {
        self.notice.borrow().clone()
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn can_start(&self) -> bool {
        self.state() == AvatarState::Ready
    }

    pub fn can_send(&self) -> bool {
        self.state() == AvatarState::Talking
    }

    fn fail(&self, err: WidgetError) -> WidgetError {
        *self.notice.borrow_mut() = Some(err.to_string());
        err
    }

    fn succeed(&self, state: AvatarState) {
        self.state.set(state);
        *self.notice.borrow_mut() = None;
    }

    pub async fn connect<S: Sleeper + ?Sized>(&self, sleeper: &S, policy: ReadinessPolicy) -> Result<(), WidgetError> {
        match wait_until_ready(&self.widget, sleeper, policy).await {
            Ok(()) => {
                info!("avatar widget ready");
                self.succeed(AvatarState::Ready);
                Ok(())
            }
            Err(err) => {
                self.state.set(AvatarState::Unavailable);
                Err(self.fail(err))
            }
        }
    }

    pub async fn start(&self) -> Result<(), WidgetError> {
        match self.state() {
            AvatarState::Ready | AvatarState::Talking => {}
            AvatarState::Unavailable => return Err(WidgetError::Unavailable),
            AvatarState::Loading => return Err(self.fail(WidgetError::NotReady)),
        }
        match self.widget.start_conversation().await {
            Ok(()) => {
                self.succeed(AvatarState::Talking);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Send `text`. Blank input is ignored.
    pub async fn send(&self, text: &str) -> Result<(), WidgetError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        match self.state() {
            AvatarState::Talking => {}
            AvatarState::Ready => return Err(self.fail(WidgetError::NotStarted)),
            AvatarState::Unavailable => return Err(WidgetError::Unavailable),
            AvatarState::Loading => return Err(self.fail(WidgetError::NotReady)),
        }
        self.widget.send_message(text).await.map_err(|err| self.fail(err))
    }
}
