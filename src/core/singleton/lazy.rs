//=========================================================================
// Lazy Holder
//=========================================================================
//
// Process-wide slot constructing its single value on first access.
//
// Backed by `once_cell::sync::OnceCell`, so concurrent first access is
// guarded: the first caller constructs, every other caller blocks until
// the value exists and then observes that same value.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use once_cell::sync::OnceCell;

//=== LazyHolder ==========================================================

/// Lazily-initialized holder of exactly one `T`.
///
/// `new` is `const`, so a holder can back a `static`:
///
/// ```rust
/// use singleton_engine::core::singleton::LazyHolder;
///
/// struct Config { name: &'static str }
///
/// fn make_config() -> Config {
///     Config { name: "default" }
/// }
///
/// static CONFIG: LazyHolder<Config> = LazyHolder::new(make_config);
///
/// assert!(!CONFIG.is_initialized());
/// assert_eq!(CONFIG.get_instance().name, "default");
/// assert!(std::ptr::eq(CONFIG.get_instance(), CONFIG.get_instance()));
/// ```
pub struct LazyHolder<T> {
    cell: OnceCell<T>,
    init: fn() -> T,
}

impl<T> LazyHolder<T> {
    /// Creates an empty holder that will build its value with `init`.
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceCell::new(),
            init,
        }
    }

    /// Returns the sole instance, constructing it on first call.
    pub fn get_instance(&self) -> &T {
        self.cell.get_or_init(|| {
            debug!("Constructing {}", std::any::type_name::<T>());
            (self.init)()
        })
    }

    /// Returns the instance if it has already been constructed.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Returns true once the instance has been constructed.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

//=== Tests ===============================================================
