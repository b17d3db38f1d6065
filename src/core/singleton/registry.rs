//=========================================================================
// Singleton Registry
//=========================================================================
//
// Scene-bound singleton slots, keyed by component type.
//
// Architecture:
//   SingletonRegistry
//     └─ slots: HashMap<TypeId, Slot { occupant: Option<ObjectId>, .. }>
//                                        │
//   SceneGraph ◄──────────── occupant ───┘ (component lives in the graph)
//
// Flow:
//   get_instance::<T>()  live occupant? ─yes─► return
//                              │ no
//                        find_object_of_type::<T>() ─found─► attach, return
//                              │ none
//                        spawn(T::NAME) + T::create() ─► attach, return
//
//   attach::<T>(id)      slot has another live occupant ─► destroy id
//                        otherwise ─► occupy slot (+ persist if AcrossScenes)
//
//   on_teardown(ids)     SceneScoped slot whose occupant died ─► cleared
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Persistence, Singleton};
use crate::core::graph::{ObjectId, SceneGraph};
use crate::error::{Result, SingletonError};

//=== AttachOutcome =======================================================

/// Result of attaching a scene object to a singleton slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// The object now occupies the slot (or already did).
    Installed(ObjectId),

    /// Another live instance already occupied the slot; the newcomer's
    /// object was destroyed.
    Discarded {
        discarded: ObjectId,
        kept: ObjectId,
    },

    /// The object is not in the graph or does not carry the singleton
    /// component. Nothing changed.
    Ignored(ObjectId),
}

impl AttachOutcome {
    /// Id of the object occupying the slot after the attach, if any.
    pub fn occupant(&self) -> Option<ObjectId> {
        match *self {
            Self::Installed(id) => Some(id),
            Self::Discarded { kept, .. } => Some(kept),
            Self::Ignored(_) => None,
        }
    }
}

//=== Slot ================================================================

#[derive(Debug)]
struct Slot {
    type_name: &'static str,
    persistence: Persistence,
    occupant: Option<ObjectId>,
}

//=== SingletonRegistry ===================================================

/// Owner of every scene-bound singleton slot.
///
/// The registry holds object ids only; the instances themselves are
/// components in the [`SceneGraph`] passed to each operation.
#[derive(Debug, Default)]
pub struct SingletonRegistry {
    slots: HashMap<TypeId, Slot>,
}

impl SingletonRegistry {
    /// Creates a registry with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Access -----------------------------------------------------------

    /// Returns the sole `T`, adopting one from the graph or creating one
    /// if the slot is empty.
    ///
    /// Repeated calls return the same instance until its object is torn
    /// down.
    pub fn get_instance<'g, T: Singleton>(&mut self, graph: &'g mut SceneGraph) -> &'g mut T {
        let id = self.resolve::<T>(graph);
        graph
            .component_mut::<T>(id)
            .expect("resolved singleton object carries its component")
    }

    /// Returns the current `T` without creating one.
    pub fn get<'g, T: Singleton>(&self, graph: &'g SceneGraph) -> Option<&'g T> {
        self.instance_id::<T>(graph)
            .and_then(|id| graph.component::<T>(id))
    }

    /// Mutable variant of [`SingletonRegistry::get`].
    pub fn get_mut<'g, T: Singleton>(&self, graph: &'g mut SceneGraph) -> Option<&'g mut T> {
        let id = self.instance_id::<T>(graph)?;
        graph.component_mut::<T>(id)
    }

    /// Object id of the live `T`, if the slot is occupied.
    pub fn instance_id<T: Singleton>(&self, graph: &SceneGraph) -> Option<ObjectId> {
        self.slots
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.occupant)
            .filter(|&id| graph.has_component::<T>(id))
    }

    /// Returns true if a live `T` occupies its slot.
    pub fn contains<T: Singleton>(&self, graph: &SceneGraph) -> bool {
        self.instance_id::<T>(graph).is_some()
    }

    /// Number of slots currently holding an occupant.
    ///
    /// Occupants are not checked for liveness here; stale persistent slots
    /// still count until accessed or cleared.
    pub fn occupied(&self) -> usize {
        self.slots.values().filter(|slot| slot.occupant.is_some()).count()
    }

    //--- Attach -----------------------------------------------------------

    /// Binds an object carrying a `T` to the `T` slot.
    ///
    /// If another live object already occupies the slot, `id` is destroyed
    /// (firing its teardown, so any scoped slot it occupied is cleared) and
    /// [`AttachOutcome::Discarded`] is returned. This is the normal
    /// way duplicates are resolved and is not an error.
    pub fn attach<T: Singleton>(&mut self, graph: &mut SceneGraph, id: ObjectId) -> AttachOutcome {
        if !graph.has_component::<T>(id) {
            warn!("Object {} does not carry a {}; not attached", id, T::NAME);
            return AttachOutcome::Ignored(id);
        }

        match self.instance_id::<T>(graph) {
            Some(kept) if kept != id => {
                debug!("{} already exists at {}; destroying duplicate {}", T::NAME, kept, id);
                graph.destroy(id);
                self.on_teardown(&[id]);
                AttachOutcome::Discarded { discarded: id, kept }
            }
            _ => {
                self.install::<T>(graph, id);
                AttachOutcome::Installed(id)
            }
        }
    }

    /// Creates an object named `T::NAME` carrying `instance` and attaches
    /// it, discarding it if a `T` already exists.
    pub fn spawn<T: Singleton>(&mut self, graph: &mut SceneGraph, instance: T) -> AttachOutcome {
        let id = graph.spawn(T::NAME);
        graph.add_component(id, instance);
        self.attach::<T>(graph, id)
    }

    /// Like [`SingletonRegistry::spawn`], but reports an occupied slot
    /// instead of silently discarding the new instance.
    ///
    /// # Errors
    ///
    /// Returns [`SingletonError::AlreadyExists`] if a live `T` exists. The
    /// graph is left untouched in that case.
    pub fn try_spawn<T: Singleton>(&mut self, graph: &mut SceneGraph, instance: T) -> Result<ObjectId> {
        if self.contains::<T>(graph) {
            return Err(SingletonError::AlreadyExists { type_name: T::NAME });
        }

        let id = graph.spawn(T::NAME);
        graph.add_component(id, instance);
        self.install::<T>(graph, id);
        Ok(id)
    }

    //--- Teardown ---------------------------------------------------------

    /// Reacts to objects having been removed from the graph.
    ///
    /// Scene-scoped slots whose occupant is among `destroyed` are cleared.
    /// Persistent slots are left alone. Returns the number of cleared slots.
    pub fn on_teardown(&mut self, destroyed: &[ObjectId]) -> usize {
        let mut cleared = 0;

        for slot in self.slots.values_mut() {
            if slot.persistence != Persistence::SceneScoped {
                continue;
            }
            if let Some(id) = slot.occupant.filter(|id| destroyed.contains(id)) {
                debug!("Clearing scoped singleton {} (object {} torn down)", slot.type_name, id);
                slot.occupant = None;
                cleared += 1;
            }
        }

        cleared
    }

    /// Empties every slot regardless of policy.
    pub fn clear(&mut self) {
        debug!("Clearing all {} singleton slots", self.slots.len());
        for slot in self.slots.values_mut() {
            slot.occupant = None;
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn resolve<T: Singleton>(&mut self, graph: &mut SceneGraph) -> ObjectId {
        if let Some(id) = self.instance_id::<T>(graph) {
            return id;
        }

        if let Some(stale) = self.slots.get_mut(&TypeId::of::<T>()).and_then(|s| s.occupant.take()) {
            warn!("{} slot pointed at destroyed object {}; rebuilding", T::NAME, stale);
        }

        if let Some(found) = graph.find_object_of_type::<T>() {
            debug!("Adopting existing {} at {}", T::NAME, found);
            self.install::<T>(graph, found);
            return found;
        }

        let id = graph.spawn(T::NAME);
        graph.add_component(id, T::create());
        debug!("Created {} at {}", T::NAME, id);
        self.install::<T>(graph, id);
        id
    }

    fn install<T: Singleton>(&mut self, graph: &mut SceneGraph, id: ObjectId) {
        let slot = self.slots.entry(TypeId::of::<T>()).or_insert(Slot {
            type_name: T::NAME,
            persistence: T::PERSISTENCE,
            occupant: None,
        });
        slot.occupant = Some(id);

        if T::PERSISTENCE == Persistence::AcrossScenes {
            graph.mark_persistent(id);
        }
    }
}

//=== Tests ===============================================================
