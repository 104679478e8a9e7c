//! Ordered window storage. Insertion order is creation order; stacking uses `z_index`.

use crate::model::{WindowId, WindowInstance};

/// Plain storage for open windows.
///
/// The registry does not validate anything. Focus and z-order invariants are maintained by
/// [`crate::window_manager::WindowManager`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowRegistry {
    windows: Vec<WindowInstance>,
}

impl WindowRegistry {
    pub fn insert(&mut self, window: WindowInstance) {
        self.windows.push(window);
    }

    pub fn remove(&mut self, window_id: WindowId) -> Option<WindowInstance> {
        let index = self.windows.iter().position(|w| w.id == window_id)?;
        Some(self.windows.remove(index))
    }

    /// Replaces the stored instance with the same id. Returns `false` when no such window exists.
    pub fn replace(&mut self, window: WindowInstance) -> bool {
        match self.find_mut(window.id) {
            Some(slot) => {
                *slot = window;
                true
            }
            None => false,
        }
    }

    pub fn update<F>(&mut self, window_id: WindowId, f: F) -> bool
    where
        F: FnOnce(&mut WindowInstance),
    {
        match self.find_mut(window_id) {
            Some(window) => {
                f(window);
                true
            }
            None => false,
        }
    }

    pub fn update_all<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut WindowInstance),
    {
        for window in &mut self.windows {
            f(window);
        }
    }

    pub fn find(&self, window_id: WindowId) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn contains(&self, window_id: WindowId) -> bool {
        self.find(window_id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WindowInstance> {
        self.windows.iter()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn find_mut(&mut self, window_id: WindowId) -> Option<&mut WindowInstance> {
        self.windows.iter_mut().find(|w| w.id == window_id)
    }
}

impl<'a> IntoIterator for &'a WindowRegistry {
    type Item = &'a WindowInstance;
    type IntoIter = std::slice::Iter<'a, WindowInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.windows.iter()
    }
}
