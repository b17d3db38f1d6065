//=========================================================================
// Singleton Engine: Library Root
//
// Singleton holders for a scene-driven engine, in four variants:
//
// - Plain lazy singleton (`LazyHolder`, process-wide)
// - Scene-bound singleton persisting across scene loads
// - Scene-scoped singleton rebuilt for every scene
// - Master singleton composing sub-managers
//
// plus a consumer that reaches a singleton through a stored function
// instead of naming it at every call site.
//
// Typical usage:
// ```no_run
// use singleton_engine::prelude::*;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum GameScene { Main }
// impl SceneKey for GameScene {}
//
// let mut engine = EngineBuilder::<GameScene>::new().build();
// engine.run().unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the holders, the scene graph and the scene system.
// `managers` contains the concrete singletons built on top of them.
//
pub mod core;
pub mod managers;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod engine;
mod error;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use error::{Result, SingletonError};
