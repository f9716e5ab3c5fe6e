use std::sync::OnceLock;

/// A single-slot, process-lifetime cache.
///
/// The first successful load populates the slot; every later call returns
/// the stored value without running the loader again. A failed load leaves
/// the slot empty and hands the error back to the caller.
///
/// The loader runs outside the lock. Callers that race on the first load may
/// each run it; one value is stored and the others are dropped, so every
/// caller still gets the same reference. The dashboard loads once from the
/// main thread before the window opens.
pub struct LoadOnce<T> {
    cell: OnceLock<T>,
}

impl<T> LoadOnce<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get_or_try_load<E>(&self, load: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        let value = load()?;
        // If another caller won the race its value is kept and ours dropped.
        Ok(self.cell.get_or_init(|| value))
    }
}

impl<T> Default for LoadOnce<T> {
    fn default() -> Self {
        Self::new()
    }
}
