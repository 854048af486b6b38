use lasso::{Spur, ThreadedRodeo};
use std::sync::OnceLock;

/// Interned string key for GUIDs, player names and ability names.
/// The same few hundred strings repeat on every line of a raid log.
pub type IStr = Spur;

static INTERNER: OnceLock<ThreadedRodeo> = OnceLock::new();

fn interner() -> &'static ThreadedRodeo {
    INTERNER.get_or_init(ThreadedRodeo::default)
}

/// Intern a string, returning a key. Safe to call from the reader's rayon
/// workers.
pub fn intern(s: &str) -> IStr {
    interner().get_or_intern(s)
}

/// Resolve an interned key back to a string.
pub fn resolve(key: IStr) -> &'static str {
    interner().resolve(&key)
}
