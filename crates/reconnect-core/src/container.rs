//! Decoration containers.
//!
//! A container owns the hearts currently on screen. The spawner only talks
//! to the [`DecorationHost`] trait, so the UI layer (or a test) injects
//! whatever container it wants rather than having one looked up globally.

use std::ops::Deref;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::decoration::{Decoration, DecorationId};

/// Capacity of the container event channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Something decorations can be attached to and detached from.
pub trait DecorationHost: Send + Sync + 'static {
    /// Take ownership of a new decoration.
    fn attach(&self, decoration: Decoration);

    /// Drop a decoration. Returns false if it was not attached.
    fn detach(&self, id: DecorationId) -> bool;

    /// Current rendered width in pixels, if known.
    fn measured_width(&self) -> Option<f64>;
}

/// Change notification for renderers.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerEvent {
    Attached(DecorationId),
    Detached(DecorationId),
}

/// In-memory container backing one heart layer.
pub struct DecorationContainer {
    name: String,
    decorations: Mutex<Vec<Decoration>>,
    width: Mutex<Option<f64>>,
    events: broadcast::Sender<ContainerEvent>,
}

impl DecorationContainer {
    pub fn new(name: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            name: name.into(),
            decorations: Mutex::new(Vec::new()),
            width: Mutex::new(None),
            events,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of hearts currently attached.
    pub fn len(&self) -> usize {
        self.decorations.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.lock().is_empty()
    }

    /// Copy of the attached hearts, oldest first.
    pub fn snapshot(&self) -> Vec<Decoration> {
        self.decorations.lock().clone()
    }

    pub fn contains(&self, id: DecorationId) -> bool {
        self.decorations.lock().iter().any(|d| d.id == id)
    }

    /// Record the rendered width reported by the UI.
    pub fn set_width(&self, width: f64) {
        *self.width.lock() = Some(width);
    }

    /// Subscribe to attach/detach notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<ContainerEvent> {
        self.events.subscribe()
    }

    fn notify(&self, event: ContainerEvent) {
        // No receivers just means nothing is rendering this layer
        let _ = self.events.send(event);
    }
}

impl DecorationHost for DecorationContainer {
    fn attach(&self, decoration: Decoration) {
        let id = decoration.id;
        self.decorations.lock().push(decoration);
        tracing::trace!(container = %self.name, %id, "attached");
        self.notify(ContainerEvent::Attached(id));
    }

    fn detach(&self, id: DecorationId) -> bool {
        let removed = {
            let mut decorations = self.decorations.lock();
            let before = decorations.len();
            decorations.retain(|d| d.id != id);
            decorations.len() != before
        };
        if removed {
            tracing::trace!(container = %self.name, %id, "detached");
            self.notify(ContainerEvent::Detached(id));
        }
        removed
    }

    fn measured_width(&self) -> Option<f64> {
        *self.width.lock()
    }
}

/// Cheaply clonable container handle.
///
/// Compares by identity so it can be passed as a component prop.
#[derive(Clone)]
pub struct ContainerHandle(Arc<DecorationContainer>);

impl ContainerHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(DecorationContainer::new(name)))
    }

    /// The container as a host for the spawner.
    pub fn host(&self) -> Arc<dyn DecorationHost> {
        self.0.clone()
    }
}

impl Deref for ContainerHandle {
    type Target = DecorationContainer;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for ContainerHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for ContainerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerHandle")
            .field("name", &self.0.name)
            .field("len", &self.0.len())
            .finish()
    }
}
