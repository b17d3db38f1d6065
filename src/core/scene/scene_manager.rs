//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, loading, and lifecycle.
//
// Scenes are stored in a HashMap by key; at most one is active. Loading
// a scene replaces the active one and unloads the scene graph in between.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::globals::GlobalContext;

//=== Scene Transition ====================================================

/// Requests processed by the SceneManager at the tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition<K: SceneKey> {
    /// Unloads the active scene and loads the given one.
    Load(K),

    /// Unloads and loads the active scene again.
    Reload,

    /// Stops the engine loop after this tick.
    Quit,

    /// No transition occurs.
    Empty,
}

impl<K: SceneKey> Default for SceneTransition<K> {
    fn default() -> Self {
        Self::Empty
    }
}

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys uniquely identify scenes in the SceneManager's HashMap.
/// Typically implemented by game-specific enums.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Manager =======================================================

/// Manages scene lifecycle and single-scene loading.
pub struct SceneManager<S: SceneKey> {
    scenes: HashMap<S, Box<dyn Scene<S>>>,
    active: Option<S>,
}

impl<S: SceneKey> SceneManager<S> {
    //--- Construction -----------------------------------------------------

    /// Creates a new scene manager with no active scene.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            active: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene with the manager.
    ///
    /// Scenes must be registered before being loaded.
    /// The scene is automatically boxed for storage.
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!("Scene {:?} was already registered and has been replaced", key);
        }
    }

    pub fn is_registered(&self, key: S) -> bool {
        self.scenes.contains_key(&key)
    }

    /// Key of the currently loaded scene.
    pub fn active(&self) -> Option<S> {
        self.active
    }

    //--- Loading ----------------------------------------------------------

    /// Unloads the active scene (if any) and loads `key`.
    ///
    /// Unloading calls `on_exit`, then tears down every non-persistent
    /// object through the context. Returns false, changing nothing, if
    /// `key` is not registered.
    pub fn load(&mut self, key: S, context: &mut GlobalContext<S>) -> bool {
        if !self.scenes.contains_key(&key) {
            warn!("Attempted to load unregistered scene {:?}", key);
            return false;
        }

        self.unload(context);

        info!("Loading scene {:?}", key);
        self.active = Some(key);
        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_enter(context);
        }
        true
    }

    /// Exits the active scene and tears down its objects.
    ///
    /// Returns the key of the scene that was unloaded.
    pub fn unload(&mut self, context: &mut GlobalContext<S>) -> Option<S> {
        let key = self.active.take()?;

        debug!("Unloading scene {:?}", key);
        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_exit(context);
        }

        let destroyed = context.unload_scene();
        debug!("Scene {:?} unloaded, {} object(s) torn down", key, destroyed.len());
        Some(key)
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates the active scene.
    pub fn update(&mut self, context: &mut GlobalContext<S>) {
        let Some(key) = self.active else {
            return;
        };

        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.update(context);
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Processes all queued scene transitions in FIFO order.
    ///
    /// Should be called at the tick boundary after scene updates. Returns
    /// true if a `Quit` was among them; transitions queued after the quit
    /// are dropped.
    pub fn process_transitions(&mut self, context: &mut GlobalContext<S>) -> bool {
        for transition in context.take_transitions() {
            match transition {
                SceneTransition::Load(key) => {
                    self.load(key, context);
                }
                SceneTransition::Reload => match self.active {
                    Some(key) => {
                        self.load(key, context);
                    }
                    None => warn!("Reload requested with no active scene"),
                },
                SceneTransition::Quit => {
                    info!("Quit requested");
                    return true;
                }
                SceneTransition::Empty => {}
            }
        }

        false
    }
}

impl<S: SceneKey> Default for SceneManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
        Missing,
    }

    impl SceneKey for TestScene {}

    struct Marker;

    /// Records lifecycle calls and spawns one object on enter.
    struct Recording {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Scene<TestScene> for Recording {
        fn on_enter(&mut self, context: &mut GlobalContext<TestScene>) {
            let id = context.graph.spawn(self.name);
            context.graph.add_component(id, Marker);
            self.log.lock().unwrap().push(format!("enter {}", self.name));
        }

        fn on_exit(&mut self, _context: &mut GlobalContext<TestScene>) {
            self.log.lock().unwrap().push(format!("exit {}", self.name));
        }

        fn update(&mut self, _context: &mut GlobalContext<TestScene>) {
            self.log.lock().unwrap().push(format!("update {}", self.name));
        }
    }

    fn manager_with_log() -> (SceneManager<TestScene>, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut manager = SceneManager::new();
        manager.register_scene(TestScene::A, Recording { name: "A", log: Arc::clone(&log) });
        manager.register_scene(TestScene::B, Recording { name: "B", log: Arc::clone(&log) });
        (manager, log)
    }

    //--- SceneTransition Tests --------------------------------------------

    #[test]
    fn transition_default_is_empty() {
        let transition: SceneTransition<TestScene> = SceneTransition::default();
        assert_eq!(transition, SceneTransition::Empty);
    }

    //--- SceneManager Tests -----------------------------------------------

    #[test]
    fn new_manager_has_no_active_scene() {
        let manager = SceneManager::<TestScene>::new();
        assert_eq!(manager.active(), None);
        assert!(!manager.is_registered(TestScene::A));
    }

    #[test]
    fn load_unregistered_scene_is_refused() {
        let (mut manager, log) = manager_with_log();
        let mut context = GlobalContext::new();

        assert!(!manager.load(TestScene::Missing, &mut context));
        assert_eq!(manager.active(), None);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn load_switches_scenes_and_tears_down_objects() {
        let (mut manager, log) = manager_with_log();
        let mut context = GlobalContext::new();

        assert!(manager.load(TestScene::A, &mut context));
        let a_object = context.graph.find_object_of_type::<Marker>().unwrap();

        assert!(manager.load(TestScene::B, &mut context));
        assert_eq!(manager.active(), Some(TestScene::B));
        assert!(!context.graph.contains(a_object));
        assert_eq!(context.graph.find_objects_of_type::<Marker>().len(), 1);

        assert_eq!(
            *log.lock().unwrap(),
            vec!["enter A", "exit A", "enter B"]
        );
    }

    #[test]
    fn update_reaches_only_the_active_scene() {
        let (mut manager, log) = manager_with_log();
        let mut context = GlobalContext::new();

        manager.update(&mut context);
        assert!(log.lock().unwrap().is_empty());

        manager.load(TestScene::B, &mut context);
        manager.update(&mut context);
        assert_eq!(log.lock().unwrap().last().map(String::as_str), Some("update B"));
    }

    #[test]
    fn process_transitions_in_order() {
        let (mut manager, log) = manager_with_log();
        let mut context = GlobalContext::new();

        context.request_load(TestScene::A);
        context.request_load(TestScene::B);
        assert!(!manager.process_transitions(&mut context));

        assert_eq!(manager.active(), Some(TestScene::B));
        assert_eq!(
            *log.lock().unwrap(),
            vec!["enter A", "exit A", "enter B"]
        );
    }

    #[test]
    fn reload_rebuilds_scene_objects() {
        let (mut manager, _log) = manager_with_log();
        let mut context = GlobalContext::new();

        manager.load(TestScene::A, &mut context);
        let before = context.graph.find_object_of_type::<Marker>();

        context.queue_transition(SceneTransition::Reload);
        manager.process_transitions(&mut context);

        let after = context.graph.find_object_of_type::<Marker>();
        assert!(after.is_some());
        assert_ne!(before, after);
        assert_eq!(manager.active(), Some(TestScene::A));
    }

    #[test]
    fn quit_stops_processing() {
        let (mut manager, _log) = manager_with_log();
        let mut context = GlobalContext::new();

        context.request_quit();
        context.request_load(TestScene::A);
        assert!(manager.process_transitions(&mut context));
        assert_eq!(manager.active(), None);
    }

    #[test]
    fn unload_without_active_scene_is_noop() {
        let (mut manager, log) = manager_with_log();
        let mut context = GlobalContext::new();
        assert_eq!(manager.unload(&mut context), None);
        assert!(log.lock().unwrap().is_empty());
    }
}
