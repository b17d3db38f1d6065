//=========================================================================
// Scene Graph
//=========================================================================
//
// The live object graph: every object currently in play, plus a type
// index answering "is there an object carrying component T?" without
// walking the graph.
//
// Architecture:
//   SceneGraph
//     ├─ objects:    BTreeMap<ObjectId, GameObject>   (spawn order)
//     └─ type_index: HashMap<TypeId, Vec<ObjectId>>
//
// Destroying objects only removes them. Reacting to the teardown (e.g.
// clearing singleton slots) is the caller's job, see GlobalContext.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::object::{Component, GameObject, ObjectId};

//=== SceneGraph ==========================================================

/// Live object graph with a component-type index.
#[derive(Debug, Default)]
pub struct SceneGraph {
    objects: BTreeMap<ObjectId, GameObject>,
    type_index: HashMap<TypeId, Vec<ObjectId>>,
    next_id: u64,
}

impl SceneGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Objects ----------------------------------------------------------

    /// Adds an empty object to the graph.
    pub fn spawn(&mut self, name: impl Into<String>) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId(self.next_id);
        let object = GameObject::new(id, name.into());
        debug!("Spawned object {} ({:?})", id, object.name());
        self.objects.insert(id, object);
        id
    }

    /// Adds a component to an object.
    ///
    /// Returns `false` if the object is not in the graph. A component of
    /// the same type already on the object is replaced.
    pub fn add_component<T: Component>(&mut self, id: ObjectId, component: T) -> bool {
        let Some(object) = self.objects.get_mut(&id) else {
            warn!(
                "Cannot add {} to missing object {}",
                std::any::type_name::<T>(),
                id
            );
            return false;
        };

        if object.insert(component).is_some() {
            warn!(
                "Object {} already had a {}; it has been replaced",
                id,
                std::any::type_name::<T>()
            );
        } else {
            self.type_index.entry(TypeId::of::<T>()).or_default().push(id);
        }
        true
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(&id)
    }

    pub fn component<T: Component>(&self, id: ObjectId) -> Option<&T> {
        self.objects.get(&id).and_then(GameObject::get::<T>)
    }

    pub fn component_mut<T: Component>(&mut self, id: ObjectId) -> Option<&mut T> {
        self.objects.get_mut(&id).and_then(GameObject::get_mut::<T>)
    }

    /// Returns true if `id` is live and carries a `T`.
    pub fn has_component<T: Component>(&self, id: ObjectId) -> bool {
        self.objects.get(&id).is_some_and(GameObject::has::<T>)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    //--- Lookup -----------------------------------------------------------

    /// Returns the oldest live object carrying a `T`.
    pub fn find_object_of_type<T: Component>(&self) -> Option<ObjectId> {
        self.find_objects_of_type::<T>().first().copied()
    }

    /// Returns every live object carrying a `T`, in spawn order.
    pub fn find_objects_of_type<T: Component>(&self) -> &[ObjectId] {
        self.type_index
            .get(&TypeId::of::<T>())
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    //--- Persistence ------------------------------------------------------

    /// Marks an object to survive [`SceneGraph::unload_scene`].
    pub fn mark_persistent(&mut self, id: ObjectId) -> bool {
        match self.objects.get_mut(&id) {
            Some(object) => {
                object.set_persistent();
                true
            }
            None => false,
        }
    }

    pub fn is_persistent(&self, id: ObjectId) -> bool {
        self.objects.get(&id).is_some_and(GameObject::is_persistent)
    }

    //--- Teardown ---------------------------------------------------------

    /// Removes an object and all of its components.
    ///
    /// No teardown event fires, so singleton slots pointing at the object
    /// are not cleared. Use [`GlobalContext::destroy`] for objects that may
    /// carry singletons.
    ///
    /// [`GlobalContext::destroy`]: crate::core::globals::GlobalContext::destroy
    pub fn destroy(&mut self, id: ObjectId) -> Option<GameObject> {
        let object = self.objects.remove(&id)?;

        for type_id in object.component_types() {
            if let Some(ids) = self.type_index.get_mut(&type_id) {
                ids.retain(|&other| other != id);
                if ids.is_empty() {
                    self.type_index.remove(&type_id);
                }
            }
        }

        debug!("Destroyed object {} ({:?})", id, object.name());
        Some(object)
    }

    /// Destroys every non-persistent object, returning their ids.
    pub fn unload_scene(&mut self) -> Vec<ObjectId> {
        let doomed: Vec<ObjectId> = self
            .objects
            .values()
            .filter(|object| !object.is_persistent())
            .map(GameObject::id)
            .collect();
        self.destroy_all(doomed)
    }

    /// Destroys every object, persistent ones included.
    pub fn clear(&mut self) -> Vec<ObjectId> {
        let doomed: Vec<ObjectId> = self.objects.keys().copied().collect();
        self.destroy_all(doomed)
    }

    fn destroy_all(&mut self, ids: Vec<ObjectId>) -> Vec<ObjectId> {
        for &id in &ids {
            self.destroy(id);
        }
        ids
    }
}

//=== Tests ===============================================================
