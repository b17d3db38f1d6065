//=========================================================================
// Core Systems
//
// Everything the engine loop drives.
//
// Responsibilities:
// - `graph`: the live object graph and its component-type index
// - `singleton`: lazy and scene-bound singleton holders
// - `scene`: scene registration, loading and transitions
// - `globals`: the context passed to scenes and the systems owning them
//
// Notes:
// All of it runs on the caller's thread. Lifecycle events (attach,
// teardown) are explicit method calls made by the engine or by scenes
// through `GlobalContext`.
//
//=========================================================================

pub mod globals;
pub mod graph;
pub mod scene;
pub mod singleton;
