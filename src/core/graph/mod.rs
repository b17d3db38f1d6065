//=========================================================================
// Scene Graph System
//=========================================================================
//
// Live object graph the scene-bound singletons are attached to.
//
// Architecture:
//   SceneGraph
//     └─ GameObject (ObjectId, name, persistent flag)
//          └─ components: HashMap<TypeId, Box<dyn Any + Send>>
//
//=========================================================================

//=== Module Declarations =================================================

mod object;
mod scene_graph;

//=== Public API ==========================================================

pub use object::{Component, GameObject, ObjectId};
pub use scene_graph::SceneGraph;
