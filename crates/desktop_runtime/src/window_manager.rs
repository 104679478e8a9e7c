//! Window lifecycle, focus and z-order arbitration.
//!
//! Every mutation of [`WindowInstance`] goes through [`WindowManager`]. Operations given an id or
//! kind that no longer exists are ignored: stale references are expected when a taskbar click
//! races a close.

use leptos::logging;

use crate::apps::{find_definition, ApplicationDefinition};
use crate::config::ShellConfig;
use crate::geometry::spawn_position;
use crate::model::{DesktopState, Position, Size, WindowId, WindowInstance};

/// Source of unit samples in `[0, 1)` used to scatter new windows.
pub trait SpawnJitter {
    fn sample(&mut self) -> f64;
}

/// `Math.random` in the browser; the region center elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserJitter;

impl SpawnJitter for BrowserJitter {
    fn sample(&mut self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Math::random()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            0.5
        }
    }
}

pub struct WindowManager<J = BrowserJitter> {
    catalog: &'static [ApplicationDefinition],
    config: ShellConfig,
    jitter: J,
}

impl WindowManager<BrowserJitter> {
    pub fn new(catalog: &'static [ApplicationDefinition], config: ShellConfig) -> Self {
        Self::with_jitter(catalog, config, BrowserJitter)
    }
}

impl<J: SpawnJitter> WindowManager<J> {
    pub fn with_jitter(
        catalog: &'static [ApplicationDefinition],
        config: ShellConfig,
        jitter: J,
    ) -> Self {
        Self {
            catalog,
            config,
            jitter,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'static [ApplicationDefinition] {
        self.catalog
    }

    /// Fresh desktop state whose z-order allocator starts at the configured base.
    pub fn initial_state(&self) -> DesktopState {
        DesktopState::new(self.config.first_z_index)
    }

    /// Opens a new focused, topmost window for `kind` and closes the start menu.
    ///
    /// Returns `None` when the kind is not in the catalog.
    pub fn open(&mut self, state: &mut DesktopState, kind: &str) -> Option<WindowId> {
        let Some(definition) = find_definition(self.catalog, kind) else {
            logging::debug_warn!("open ignored: unknown application kind `{kind}`");
            return None;
        };

        let unit_x = self.jitter.sample();
        let unit_y = self.jitter.sample();
        let position = spawn_position(self.config.spawn_region, unit_x, unit_y);

        let window_id = state.allocate_window_id();
        let z_index = state.allocate_z_index();
        state.windows.update_all(|w| w.is_focused = false);
        state.windows.insert(WindowInstance {
            id: window_id,
            app_kind: definition.app_kind(),
            title: definition.display_name.to_string(),
            icon_id: definition.icon_id.to_string(),
            position,
            size: definition.default_size,
            min_size: definition.min_size,
            is_minimized: false,
            is_maximized: false,
            z_index,
            is_focused: true,
            saved_position: None,
            saved_size: None,
        });
        state.start_menu_open = false;
        Some(window_id)
    }

    /// Removes the window. No other window receives focus as a consequence.
    pub fn close(&self, state: &mut DesktopState, window_id: WindowId) -> bool {
        let removed = state.windows.remove(window_id).is_some();
        if !removed {
            logging::debug_warn!("close ignored: unknown window {window_id}");
        }
        removed
    }

    /// Focuses, un-minimizes and raises the window above every other.
    pub fn focus(&self, state: &mut DesktopState, window_id: WindowId) -> bool {
        if !state.windows.contains(window_id) {
            logging::debug_warn!("focus ignored: unknown window {window_id}");
            return false;
        }
        let z_index = state.allocate_z_index();
        state.windows.update_all(|w| {
            if w.id == window_id {
                w.is_focused = true;
                w.is_minimized = false;
                w.z_index = z_index;
            } else {
                w.is_focused = false;
            }
        });
        true
    }

    /// Hides the window and drops its focus. Stacking and geometry are left alone.
    pub fn minimize(&self, state: &mut DesktopState, window_id: WindowId) -> bool {
        let found = state.windows.update(window_id, |w| {
            w.is_minimized = true;
            w.is_focused = false;
        });
        if !found {
            logging::debug_warn!("minimize ignored: unknown window {window_id}");
        }
        found
    }

    /// Maximizes a normal window or restores a maximized one to its saved geometry.
    pub fn toggle_maximize(&self, state: &mut DesktopState, window_id: WindowId) -> bool {
        let found = state.windows.update(window_id, |w| {
            if w.is_maximized {
                w.is_maximized = false;
                // Restore without a snapshot only happens when state was edited directly.
                w.position = w.saved_position.take().unwrap_or(w.position);
                w.size = w.saved_size.take().unwrap_or(w.size);
            } else {
                w.saved_position = Some(w.position);
                w.saved_size = Some(w.size);
                w.is_maximized = true;
            }
        });
        if !found {
            logging::debug_warn!("maximize ignored: unknown window {window_id}");
        }
        found
    }

    /// Stores `position` verbatim; callers clamp against the viewport first.
    pub fn move_to(
        &self,
        state: &mut DesktopState,
        window_id: WindowId,
        position: Position,
    ) -> bool {
        let found = state.windows.update(window_id, |w| w.position = position);
        if !found {
            logging::debug_warn!("move ignored: unknown window {window_id}");
        }
        found
    }

    /// Stores the new geometry with `size` floored at the window's minimum size.
    pub fn resize(
        &self,
        state: &mut DesktopState,
        window_id: WindowId,
        size: Size,
        position: Position,
    ) -> bool {
        let found = state.windows.update(window_id, |w| {
            w.size = size.at_least(w.min_size);
            w.position = position;
        });
        if !found {
            logging::debug_warn!("resize ignored: unknown window {window_id}");
        }
        found
    }

    /// Taskbar button policy: restore a minimized window, minimize the focused one, focus others.
    pub fn taskbar_activate(&self, state: &mut DesktopState, window_id: WindowId) -> bool {
        let Some(window) = state.windows.find(window_id) else {
            logging::debug_warn!("taskbar activation ignored: unknown window {window_id}");
            return false;
        };
        if window.is_minimized {
            self.focus(state, window_id)
        } else if window.is_focused {
            self.minimize(state, window_id)
        } else {
            self.focus(state, window_id)
        }
    }

    /// Clears focus on every window and closes the start menu.
    pub fn deselect_all(&self, state: &mut DesktopState) -> bool {
        let had_focus = state.focused_window_id().is_some();
        let had_menu = state.start_menu_open;
        state.windows.update_all(|w| w.is_focused = false);
        state.start_menu_open = false;
        had_focus || had_menu
    }

    pub fn toggle_start_menu(&self, state: &mut DesktopState) -> bool {
        state.start_menu_open = !state.start_menu_open;
        true
    }

    pub fn close_start_menu(&self, state: &mut DesktopState) -> bool {
        std::mem::replace(&mut state.start_menu_open, false)
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::testing::manager;
    use super::*;

    fn window(state: &DesktopState, window_id: WindowId) -> &WindowInstance {
        state.window(window_id).expect("window exists")
    }

    fn focused_ids(state: &DesktopState) -> Vec<WindowId> {
        state
            .windows
            .iter()
            .filter(|w| w.is_focused)
            .map(|w| w.id)
            .collect()
    }

    #[test]
    fn open_places_window_in_spawn_region_with_catalog_geometry() {
        let mut wm = manager(vec![0.25, 0.75]);
        let mut state = wm.initial_state();
        state.start_menu_open = true;

        let id = wm.open(&mut state, "notepad").expect("notepad opens");
        let win = window(&state, id);
        assert_eq!(win.position, Position::new(100, 125));
        assert_eq!(win.size, Size::new(500, 400));
        assert_eq!(win.min_size, Size::new(250, 200));
        assert_eq!(win.title, "Notepad");
        assert_eq!(win.z_index, 10);
        assert!(win.is_focused);
        assert!(!state.start_menu_open);
    }

    #[test]
    fn open_unknown_kind_is_noop() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        state.start_menu_open = true;
        let before = state.clone();

        assert_eq!(wm.open(&mut state, "paint"), None);
        assert_eq!(state, before);
    }

    #[test]
    fn repeated_opens_allocate_unique_ids_and_rising_z() {
        let mut wm = manager(vec![0.1, 0.9, 0.4]);
        let mut state = wm.initial_state();
        let mut last_z = None;
        let mut ids = Vec::new();
        for kind in ["notepad", "calculator", "browser", "gemini", "notepad", "notepad"] {
            let id = wm.open(&mut state, kind).expect("known kind");
            let z = window(&state, id).z_index;
            if let Some(prev) = last_z {
                assert!(z > prev);
            }
            last_z = Some(z);
            assert!(!ids.contains(&id));
            ids.push(id);
            assert_eq!(focused_ids(&state), vec![id]);
        }
    }

    #[test]
    fn ids_are_not_reused_after_close() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        let first = wm.open(&mut state, "notepad").unwrap();
        assert!(wm.close(&mut state, first));
        let second = wm.open(&mut state, "notepad").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn close_does_not_refocus_another_window() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        let _calc = wm.open(&mut state, "calculator").unwrap();
        let notes = wm.open(&mut state, "notepad").unwrap();

        assert!(wm.close(&mut state, notes));
        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.focused_window_id(), None);
        assert!(!wm.close(&mut state, notes));
    }

    #[test]
    fn focus_is_exclusive_and_raises() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        let a = wm.open(&mut state, "calculator").unwrap();
        let b = wm.open(&mut state, "notepad").unwrap();
        let c = wm.open(&mut state, "browser").unwrap();

        assert!(wm.focus(&mut state, a));
        assert_eq!(focused_ids(&state), vec![a]);
        let top = state.windows.iter().map(|w| w.z_index).max().unwrap();
        assert_eq!(window(&state, a).z_index, top);
        assert!(window(&state, a).z_index > window(&state, b).z_index);
        assert!(window(&state, a).z_index > window(&state, c).z_index);

        let before = state.clone();
        assert!(!wm.focus(&mut state, WindowId(999)));
        assert_eq!(state, before);
    }

    #[test]
    fn focus_unminimizes() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        let a = wm.open(&mut state, "calculator").unwrap();
        wm.minimize(&mut state, a);
        wm.focus(&mut state, a);
        assert!(!window(&state, a).is_minimized);
        assert!(window(&state, a).is_focused);
    }

    #[test]
    fn minimize_keeps_z_and_geometry_and_other_focus() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        let a = wm.open(&mut state, "calculator").unwrap();
        let b = wm.open(&mut state, "notepad").unwrap();
        let before = window(&state, a).clone();

        assert!(wm.minimize(&mut state, a));
        let after = window(&state, a);
        assert!(after.is_minimized);
        assert!(!after.is_focused);
        assert_eq!(after.z_index, before.z_index);
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
        assert!(window(&state, b).is_focused);
    }

    #[test]
    fn maximize_restore_round_trip() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        let id = wm.open(&mut state, "notepad").unwrap();
        wm.move_to(&mut state, id, Position::new(100, 100));

        assert!(wm.toggle_maximize(&mut state, id));
        let win = window(&state, id);
        assert!(win.is_maximized);
        assert_eq!(win.saved_position, Some(Position::new(100, 100)));
        assert_eq!(win.saved_size, Some(Size::new(500, 400)));

        assert!(wm.toggle_maximize(&mut state, id));
        let win = window(&state, id);
        assert!(!win.is_maximized);
        assert_eq!(win.position, Position::new(100, 100));
        assert_eq!(win.size, Size::new(500, 400));
        assert_eq!(win.saved_position, None);
        assert_eq!(win.saved_size, None);
    }

    #[test]
    fn restore_without_snapshot_keeps_current_geometry() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        let id = wm.open(&mut state, "browser").unwrap();
        let mut forced = window(&state, id).clone();
        forced.is_maximized = true;
        assert!(state.windows.replace(forced.clone()));

        wm.toggle_maximize(&mut state, id);
        let win = window(&state, id);
        assert!(!win.is_maximized);
        assert_eq!(win.position, forced.position);
        assert_eq!(win.size, forced.size);
    }

    #[test]
    fn minimizing_a_maximized_window_keeps_it_maximized() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        let id = wm.open(&mut state, "notepad").unwrap();
        wm.toggle_maximize(&mut state, id);
        wm.minimize(&mut state, id);
        let win = window(&state, id);
        assert!(win.is_minimized);
        assert!(win.is_maximized);
    }

    #[test]
    fn resize_floors_at_min_size() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        let id = wm.open(&mut state, "calculator").unwrap();

        assert!(wm.resize(&mut state, id, Size::new(10, 900), Position::new(5, 6)));
        let win = window(&state, id);
        assert_eq!(win.size, Size::new(250, 900));
        assert_eq!(win.position, Position::new(5, 6));
        assert!(!wm.resize(&mut state, WindowId(42), Size::new(1, 1), Position::new(0, 0)));
    }

    #[test]
    fn geometry_updates_for_closed_windows_change_nothing() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        let id = wm.open(&mut state, "notepad").unwrap();
        wm.close(&mut state, id);
        let before = state.clone();

        assert!(!wm.move_to(&mut state, id, Position::new(1, 2)));
        assert!(!wm.resize(&mut state, id, Size::new(600, 600), Position::new(3, 4)));
        assert_eq!(state, before);
    }

    #[test]
    fn taskbar_activate_follows_three_way_policy() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        let a = wm.open(&mut state, "calculator").unwrap();
        let b = wm.open(&mut state, "notepad").unwrap();

        // focused -> minimized
        wm.taskbar_activate(&mut state, b);
        assert!(window(&state, b).is_minimized);
        assert!(!window(&state, b).is_focused);

        // minimized -> restored, focused and topmost
        wm.taskbar_activate(&mut state, b);
        assert!(!window(&state, b).is_minimized);
        assert_eq!(focused_ids(&state), vec![b]);
        assert!(window(&state, b).z_index > window(&state, a).z_index);

        // unfocused -> focused
        wm.taskbar_activate(&mut state, a);
        assert_eq!(focused_ids(&state), vec![a]);
        assert!(!window(&state, a).is_minimized);

        assert!(!wm.taskbar_activate(&mut state, WindowId(77)));
    }

    #[test]
    fn deselect_all_clears_focus_and_menu() {
        let mut wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        wm.open(&mut state, "calculator").unwrap();
        wm.toggle_start_menu(&mut state);

        assert!(wm.deselect_all(&mut state));
        assert_eq!(state.focused_window_id(), None);
        assert!(!state.start_menu_open);
        assert!(!wm.deselect_all(&mut state));
    }

    #[test]
    fn start_menu_toggle_and_close() {
        let wm = manager(vec![0.5]);
        let mut state = wm.initial_state();
        wm.toggle_start_menu(&mut state);
        assert!(state.start_menu_open);
        assert!(wm.close_start_menu(&mut state));
        assert!(!state.start_menu_open);
        assert!(!wm.close_start_menu(&mut state));
    }
}
