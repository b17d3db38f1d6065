//=========================================================================
// Game Object
//=========================================================================
//
// A named node of the live scene graph carrying type-keyed components.
//
// Components are stored type-erased (Box<dyn Any + Send>) and recovered
// by downcasting, one component per type per object.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

//=== ObjectId ============================================================

/// Identity of an object in the [`SceneGraph`](super::SceneGraph).
///
/// Ids are never reused within one graph, so a stale id can always be told
/// apart from a newer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== Component ===========================================================

/// Marker trait for anything that can be attached to a [`GameObject`].
///
/// Automatically implemented for all types that are Send + 'static.
pub trait Component: Any + Send {}

impl<T: Any + Send> Component for T {}

//=== GameObject ==========================================================

/// A node of the live scene graph.
pub struct GameObject {
    id: ObjectId,
    name: String,
    persistent: bool,
    components: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl GameObject {
    pub(crate) fn new(id: ObjectId, name: String) -> Self {
        Self {
            id,
            name,
            persistent: false,
            components: HashMap::new(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the object survives scene loads.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub(crate) fn set_persistent(&mut self) {
        self.persistent = true;
    }

    //--- Components -------------------------------------------------------

    /// Inserts a component, returning the previous one of the same type.
    pub(crate) fn insert<T: Component>(&mut self, component: T) -> Option<Box<dyn Any + Send>> {
        self.components.insert(TypeId::of::<T>(), Box::new(component))
    }

    pub fn has<T: Component>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<T>())
    }

    pub fn get<T: Component>(&self) -> Option<&T> {
        self.components
            .get(&TypeId::of::<T>())
            .and_then(|c| c.downcast_ref::<T>())
    }

    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&TypeId::of::<T>())
            .and_then(|c| c.downcast_mut::<T>())
    }

    pub(crate) fn component_types(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.components.keys().copied()
    }

    /// Number of components attached.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

impl fmt::Debug for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameObject")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("persistent", &self.persistent)
            .field("components", &self.components.len())
            .finish()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(u32);

    #[derive(Debug, PartialEq)]
    struct Tag(&'static str);

    #[test]
    fn new_object_is_not_persistent() {
        let object = GameObject::new(ObjectId(1), "Player".into());
        assert_eq!(object.name(), "Player");
        assert!(!object.is_persistent());
        assert_eq!(object.component_count(), 0);
    }

    #[test]
    fn components_are_keyed_by_type() {
        let mut object = GameObject::new(ObjectId(1), "Player".into());
        assert!(object.insert(Health(10)).is_none());
        assert!(object.insert(Tag("hero")).is_none());

        assert_eq!(object.get::<Health>(), Some(&Health(10)));
        assert_eq!(object.get::<Tag>(), Some(&Tag("hero")));
        assert!(!object.has::<String>());
    }

    #[test]
    fn insert_same_type_replaces() {
        let mut object = GameObject::new(ObjectId(1), "Player".into());
        object.insert(Health(10));
        assert!(object.insert(Health(20)).is_some());
        assert_eq!(object.get::<Health>(), Some(&Health(20)));
        assert_eq!(object.component_count(), 1);
    }

    #[test]
    fn get_mut_mutates_in_place() {
        let mut object = GameObject::new(ObjectId(1), "Player".into());
        object.insert(Health(10));
        object.get_mut::<Health>().unwrap().0 = 3;
        assert_eq!(object.get::<Health>(), Some(&Health(3)));
    }

    #[test]
    fn object_id_display() {
        assert_eq!(ObjectId(7).to_string(), "#7");
    }
}
