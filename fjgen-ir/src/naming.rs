//! Names that must be written fully qualified while rendering.
//!
//! Emitters format types into source text eagerly, so the decision of which
//! classes cannot be referred to by their simple name has to be in effect
//! while the text is produced. [`with_qualified_names`] installs that set for
//! the current thread for the duration of a closure, and [`Type`]'s
//! `Display` consults it.
//!
//! [`Type`]: crate::Type

use std::{cell::RefCell, collections::BTreeSet};

thread_local! {
    static QUALIFIED: RefCell<BTreeSet<String>> = const { RefCell::new(BTreeSet::new()) };
}

/// Restores the previous set on drop, including on unwind.
struct Restore(BTreeSet<String>);

impl Drop for Restore {
    fn drop(&mut self) {
        let previous = std::mem::take(&mut self.0);
        QUALIFIED.with(|cell| *cell.borrow_mut() = previous);
    }
}

/// Run `f` with every class in `names` (by import name) rendered fully
/// qualified. Scopes nest; the outer set is restored when `f` returns.
pub fn with_qualified_names<R>(names: &BTreeSet<String>, f: impl FnOnce() -> R) -> R {
    let previous = QUALIFIED.with(|cell| cell.replace(names.clone()));
    let _restore = Restore(previous);
    f()
}

/// Whether the class imported as `import_name` must be written in full.
pub(crate) fn is_qualified(import_name: &str) -> bool {
    QUALIFIED.with(|cell| cell.borrow().contains(import_name))
}
