//! Single-threaded event loop.
//!
//! Events are taken off a queue one at a time. Each is applied to the stores
//! and to the surfaces' local state before the next is taken, then every
//! surface whose store committed a change (or whose local state changed)
//! re-renders from the new snapshot.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use context_demos_state::{Subscription, use_blog, use_cart};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::app::App;
use crate::error::CliError;
use crate::events::UiEvent;
use crate::views::{StoreKind, Surface};

/// One surface's output after one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// 0 for the initial render, then 1 per event.
    pub step: usize,
    /// The event that triggered this render; `None` for the initial render.
    pub event: Option<UiEvent>,
    pub surface: &'static str,
    pub output: String,
}

#[derive(Debug, Default)]
struct ChangeFlags {
    cart: AtomicBool,
    blog: AtomicBool,
}

impl ChangeFlags {
    fn flag(&self, kind: StoreKind) -> &AtomicBool {
        match kind {
            StoreKind::Cart => &self.cart,
            StoreKind::Blog => &self.blog,
        }
    }

    fn mark(&self, kind: StoreKind) {
        self.flag(kind).store(true, Ordering::Release);
    }

    fn take(&self, kind: StoreKind) -> bool {
        self.flag(kind).swap(false, Ordering::AcqRel)
    }
}

/// Drives one [`App`] from a queue of [`UiEvent`]s.
pub struct EventLoop {
    app: App,
    surfaces: Vec<Box<dyn Surface>>,
    changes: Arc<ChangeFlags>,
    _subscriptions: Vec<Subscription>,
    events: mpsc::UnboundedReceiver<UiEvent>,
}

impl EventLoop {
    /// Create a loop for `app` and the sender that feeds it.
    ///
    /// The loop subscribes to every store the app provides so surfaces know
    /// when to re-render.
    #[must_use]
    pub fn new(app: App) -> (Self, mpsc::UnboundedSender<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let changes = Arc::new(ChangeFlags::default());
        let mut subscriptions = Vec::new();

        if let Ok(cart) = use_cart(app.scope()) {
            let changes = Arc::clone(&changes);
            let subscription = cart.subscribe(move |_| changes.mark(StoreKind::Cart));
            debug!(subscription = %subscription.id(), "Subscribed to cart");
            subscriptions.push(subscription);
        }
        if let Ok(blog) = use_blog(app.scope()) {
            let changes = Arc::clone(&changes);
            let subscription = blog.subscribe(move |_| changes.mark(StoreKind::Blog));
            debug!(subscription = %subscription.id(), "Subscribed to blog");
            subscriptions.push(subscription);
        }

        let surfaces = app.surfaces();
        let event_loop = Self {
            app,
            surfaces,
            changes,
            _subscriptions: subscriptions,
            events: rx,
        };
        (event_loop, tx)
    }

    /// Render every surface, then process events until all senders are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Stops at the first event or render that fails; see
    /// [`App::dispatch`] and [`Surface::render`].
    pub async fn run(mut self) -> Result<Vec<Frame>, CliError> {
        let mut frames = Vec::new();
        for surface in &self.surfaces {
            frames.push(self.render(surface.as_ref(), 0, None)?);
        }

        let mut step = 0;
        while let Some(event) = self.events.recv().await {
            step += 1;
            info!(step, demo = %self.app.demo(), event = %event, "Dispatching event");
            frames.extend(self.step(step, &event)?);
        }

        debug!(steps = step, frames = frames.len(), "Event queue drained");
        Ok(frames)
    }

    fn step(&mut self, step: usize, event: &UiEvent) -> Result<Vec<Frame>, CliError> {
        self.app.dispatch(event)?;

        let local: Vec<bool> = self
            .surfaces
            .iter_mut()
            .map(|surface| surface.handle(event))
            .collect();
        let cart_changed = self.changes.take(StoreKind::Cart);
        let blog_changed = self.changes.take(StoreKind::Blog);

        let mut frames = Vec::new();
        for (surface, local_changed) in self.surfaces.iter().zip(local) {
            let store_changed = match surface.source() {
                StoreKind::Cart => cart_changed,
                StoreKind::Blog => blog_changed,
            };
            if store_changed || local_changed {
                frames.push(self.render(surface.as_ref(), step, Some(event))?);
            }
        }
        Ok(frames)
    }

    fn render(
        &self,
        surface: &dyn Surface,
        step: usize,
        event: Option<&UiEvent>,
    ) -> Result<Frame, CliError> {
        Ok(Frame {
            step,
            event: event.cloned(),
            surface: surface.name(),
            output: surface.render(self.app.scope())?,
        })
    }
}

/// Run `events` through a fresh loop for `app`.
///
/// # Errors
///
/// See [`EventLoop::run`].
pub async fn replay(app: App, events: Vec<UiEvent>) -> Result<Vec<Frame>, CliError> {
    let (event_loop, tx) = EventLoop::new(app);
    for event in events {
        if tx.send(event).is_err() {
            break;
        }
    }
    drop(tx);
    event_loop.run().await
}
