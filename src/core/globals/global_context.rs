//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - graph: the live object graph
// - singletons: scene-bound singleton slots
// - transitions: command queue for scene changes
//
// Teardown events go through here so that destroying objects and
// clearing the singleton slots that pointed at them happen together.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::graph::{ObjectId, SceneGraph};
use crate::core::scene::{SceneKey, SceneTransition};
use crate::core::singleton::{AttachOutcome, Singleton, SingletonRegistry};

//=== GlobalContext =======================================================

/// Shared context data accessible to scenes during updates.
///
/// Owned by the [`Engine`](crate::Engine) and passed explicitly to every
/// scene hook, so there is no hidden global state behind the singletons.
pub struct GlobalContext<S: SceneKey> {
    /// The live object graph.
    pub graph: SceneGraph,

    /// Scene-bound singleton slots.
    ///
    /// Prefer [`GlobalContext::instance`] for access; it passes the graph
    /// along for you.
    pub singletons: SingletonRegistry,

    /// Transitions queued during this tick.
    transitions: Vec<SceneTransition<S>>,
}

impl<S: SceneKey> GlobalContext<S> {
    /// Creates a new context with an empty graph and empty slots.
    pub fn new() -> Self {
        Self {
            graph: SceneGraph::new(),
            singletons: SingletonRegistry::new(),
            transitions: Vec::new(),
        }
    }

    //--- Singletons -------------------------------------------------------

    /// Returns the sole `T`, adopting or creating it on first access.
    pub fn instance<T: Singleton>(&mut self) -> &mut T {
        self.singletons.get_instance::<T>(&mut self.graph)
    }

    /// Returns the current `T` without creating one.
    pub fn find<T: Singleton>(&self) -> Option<&T> {
        self.singletons.get::<T>(&self.graph)
    }

    /// Spawns an object carrying `instance` and attaches it to the `T` slot.
    pub fn spawn_singleton<T: Singleton>(&mut self, instance: T) -> AttachOutcome {
        self.singletons.spawn(&mut self.graph, instance)
    }

    //--- Teardown ---------------------------------------------------------

    /// Destroys one object and fires its teardown event.
    pub fn destroy(&mut self, id: ObjectId) -> bool {
        if self.graph.destroy(id).is_none() {
            return false;
        }
        self.singletons.on_teardown(&[id]);
        true
    }

    /// Destroys every non-persistent object and fires their teardown events.
    pub fn unload_scene(&mut self) -> Vec<ObjectId> {
        let destroyed = self.graph.unload_scene();
        let cleared = self.singletons.on_teardown(&destroyed);
        debug!("Scene unload: {} object(s), {} scoped slot(s) cleared", destroyed.len(), cleared);
        destroyed
    }

    /// Destroys every object, persistent ones included, and empties all
    /// singleton slots.
    pub fn teardown_all(&mut self) -> Vec<ObjectId> {
        let destroyed = self.graph.clear();
        self.singletons.on_teardown(&destroyed);
        self.singletons.clear();
        destroyed
    }

    //--- Transitions ------------------------------------------------------

    /// Queues a scene transition to be processed at the next tick boundary.
    pub fn queue_transition(&mut self, transition: SceneTransition<S>) {
        self.transitions.push(transition);
    }

    pub fn request_load(&mut self, key: S) {
        self.queue_transition(SceneTransition::Load(key));
    }

    pub fn request_quit(&mut self) {
        self.queue_transition(SceneTransition::Quit);
    }

    /// Returns the number of queued transitions.
    pub fn pending_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// Takes all transitions from the queue, leaving it empty.
    pub(crate) fn take_transitions(&mut self) -> Vec<SceneTransition<S>> {
        std::mem::take(&mut self.transitions)
    }
}

impl<S: SceneKey> Default for GlobalContext<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
