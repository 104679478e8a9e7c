//! End-to-end window scenarios driven through `reduce_desktop`, the same path the UI uses.

use desktop_app_contract::AppKind;
use desktop_runtime::apps::catalog;
use desktop_runtime::shell::{pointer_down_action, taskbar_entries, window_frame};
use desktop_runtime::{
    reduce_desktop, DesktopAction, DesktopState, InteractionState, PointerPosition, Position,
    ResizeEdge, ShellConfig, Size, SpawnJitter, Viewport, WindowId, WindowManager,
};
use pretty_assertions::assert_eq;

struct FixedJitter(f64);

impl SpawnJitter for FixedJitter {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

struct Desk {
    wm: WindowManager<FixedJitter>,
    state: DesktopState,
    interaction: InteractionState,
}

impl Desk {
    fn new() -> Self {
        let wm = WindowManager::with_jitter(catalog(), ShellConfig::default(), FixedJitter(0.0));
        let state = wm.initial_state();
        Self {
            wm,
            state,
            interaction: InteractionState::default(),
        }
    }

    fn dispatch(&mut self, action: DesktopAction) -> bool {
        reduce_desktop(&mut self.wm, &mut self.state, &mut self.interaction, action)
    }

    fn open(&mut self, kind: &'static str) -> WindowId {
        assert!(self.dispatch(DesktopAction::OpenApp {
            kind: AppKind::from_static(kind)
        }));
        self.state.windows.iter().last().expect("opened window").id
    }

    /// Drags the window by its top-left corner so it lands at `to`.
    fn drag_to(&mut self, id: WindowId, to: Position) {
        let from = self.state.window(id).expect("window").position;
        self.dispatch(DesktopAction::BeginDrag {
            window_id: id,
            pointer: PointerPosition { x: from.x, y: from.y },
        });
        self.dispatch(DesktopAction::PointerMove {
            pointer: PointerPosition { x: to.x, y: to.y },
            viewport: VIEWPORT,
        });
        self.dispatch(DesktopAction::EndGesture);
    }

    /// What a press on any part of the frame does before the pressed control acts.
    fn press_frame(&mut self, id: WindowId) {
        let window = self.state.window(id).expect("window");
        if let Some(action) = pointer_down_action(window) {
            self.dispatch(action);
        }
    }

    fn z(&self, id: WindowId) -> u32 {
        self.state.window(id).expect("window").z_index
    }
}

const VIEWPORT: Viewport = Viewport::new(1024, 768);

#[test]
fn later_window_opens_on_top_with_focus() {
    let mut desk = Desk::new();
    let calculator = desk.open("calculator");
    let notepad = desk.open("notepad");

    assert_ne!(calculator, notepad);
    assert!(desk.z(notepad) > desk.z(calculator));
    assert_eq!(desk.state.focused_window_id(), Some(notepad));

    let calc = desk.state.window(calculator).expect("calculator");
    assert_eq!(calc.size, Size::new(300, 450));
    assert_eq!(calc.position, Position::new(50, 50));
    assert!(!calc.is_focused);
}

#[test]
fn z_indices_strictly_increase_across_opens() {
    let mut desk = Desk::new();
    let ids: Vec<WindowId> = ["notepad", "calculator", "browser", "gemini", "notepad"]
        .into_iter()
        .map(|kind| desk.open(kind))
        .collect();
    let zs: Vec<u32> = ids.iter().map(|id| desk.z(*id)).collect();
    assert!(zs.windows(2).all(|pair| pair[0] < pair[1]), "{zs:?}");
    assert_eq!(zs[0], ShellConfig::default().first_z_index);
}

#[test]
fn minimized_window_returns_on_top_from_taskbar() {
    let mut desk = Desk::new();
    let calculator = desk.open("calculator");
    let notepad = desk.open("notepad");

    desk.dispatch(DesktopAction::PointerDownWindow {
        window_id: calculator,
    });
    desk.dispatch(DesktopAction::MinimizeWindow {
        window_id: calculator,
    });
    assert_eq!(desk.state.focused_window_id(), None);

    desk.dispatch(DesktopAction::ActivateTaskbarWindow {
        window_id: calculator,
    });
    let calc = desk.state.window(calculator).expect("calculator");
    assert!(!calc.is_minimized);
    assert!(calc.is_focused);
    assert!(desk.z(calculator) > desk.z(notepad));
}

#[test]
fn taskbar_click_cycles_focus_minimize_restore() {
    let mut desk = Desk::new();
    let a = desk.open("notepad");
    let b = desk.open("browser");

    desk.dispatch(DesktopAction::ActivateTaskbarWindow { window_id: a });
    assert_eq!(desk.state.focused_window_id(), Some(a));

    desk.dispatch(DesktopAction::ActivateTaskbarWindow { window_id: a });
    assert!(desk.state.window(a).expect("a").is_minimized);
    assert!(!desk.state.window(b).expect("b").is_focused);

    desk.dispatch(DesktopAction::ActivateTaskbarWindow { window_id: a });
    assert!(!desk.state.window(a).expect("a").is_minimized);
    assert_eq!(desk.state.focused_window_id(), Some(a));

    let active: Vec<bool> = taskbar_entries(&desk.state).iter().map(|e| e.active).collect();
    assert_eq!(active, vec![true, false]);
}

#[test]
fn maximize_then_restore_round_trips_geometry() {
    let mut desk = Desk::new();
    let id = desk.open("notepad");
    desk.drag_to(id, Position::new(100, 100));

    desk.dispatch(DesktopAction::ToggleMaximize { window_id: id });
    let win = desk.state.window(id).expect("window");
    assert!(win.is_maximized);
    let frame = window_frame(win, VIEWPORT, 40);
    assert_eq!((frame.x, frame.y, frame.w, frame.h), (0, 0, 1024, 728));

    desk.dispatch(DesktopAction::ToggleMaximize { window_id: id });
    let win = desk.state.window(id).expect("window");
    assert!(!win.is_maximized);
    assert_eq!(win.position, Position::new(100, 100));
    assert_eq!(win.size, Size::new(500, 400));
}

#[test]
fn drag_past_bottom_left_is_clamped_above_taskbar() {
    let mut desk = Desk::new();
    let id = desk.open("notepad");
    desk.drag_to(id, Position::new(100, 100));
    assert_eq!(desk.state.window(id).expect("window").position, Position::new(100, 100));

    desk.dispatch(DesktopAction::BeginDrag {
        window_id: id,
        pointer: PointerPosition { x: 100, y: 100 },
    });
    desk.dispatch(DesktopAction::PointerMove {
        pointer: PointerPosition { x: -50, y: 900 },
        viewport: VIEWPORT,
    });
    desk.dispatch(DesktopAction::EndGesture);

    assert_eq!(desk.state.window(id).expect("window").position, Position::new(0, 328));
    assert_eq!(desk.interaction.gesture, None);
}

#[test]
fn title_bar_button_on_background_window_raises_it() {
    let mut desk = Desk::new();
    let back = desk.open("notepad");
    let front = desk.open("calculator");

    desk.press_frame(back);
    desk.dispatch(DesktopAction::ToggleMaximize { window_id: back });

    let win = desk.state.window(back).expect("window");
    assert!(win.is_maximized);
    assert!(win.is_focused);
    assert!(desk.z(back) > desk.z(front));
    assert_eq!(desk.state.focused_window_id(), Some(back));
}

#[test]
fn pressing_the_focused_window_keeps_its_stacking() {
    let mut desk = Desk::new();
    desk.open("notepad");
    let front = desk.open("calculator");
    let z = desk.z(front);

    desk.press_frame(front);
    assert_eq!(desk.z(front), z);
}

#[test]
fn drag_stays_inside_usable_area_for_any_pointer() {
    let mut desk = Desk::new();
    let id = desk.open("calculator");
    desk.dispatch(DesktopAction::BeginDrag {
        window_id: id,
        pointer: PointerPosition { x: 60, y: 60 },
    });

    for (x, y) in [(-400, -400), (2000, 50), (500, 2000), (1023, 767), (300, 200)] {
        desk.dispatch(DesktopAction::PointerMove {
            pointer: PointerPosition { x, y },
            viewport: VIEWPORT,
        });
        let win = desk.state.window(id).expect("window");
        assert!((0..=VIEWPORT.width - win.size.width).contains(&win.position.x));
        assert!((0..=VIEWPORT.height - win.size.height - 40).contains(&win.position.y));
    }
}

#[test]
fn resize_gesture_respects_minimum_size() {
    let mut desk = Desk::new();
    let id = desk.open("browser");
    desk.dispatch(DesktopAction::BeginResize {
        window_id: id,
        edge: ResizeEdge::NorthEast,
        pointer: PointerPosition { x: 850, y: 50 },
    });
    desk.dispatch(DesktopAction::PointerMove {
        pointer: PointerPosition { x: 0, y: 700 },
        viewport: VIEWPORT,
    });

    let win = desk.state.window(id).expect("window");
    assert_eq!(win.size, Size::new(400, 300));
    assert!(desk.interaction.is_resizing());
}

#[test]
fn start_menu_closes_on_launch_and_on_desktop_click() {
    let mut desk = Desk::new();
    desk.dispatch(DesktopAction::ToggleStartMenu);
    assert!(desk.state.start_menu_open);
    let id = desk.open("gemini");
    assert!(!desk.state.start_menu_open);

    desk.dispatch(DesktopAction::ToggleStartMenu);
    assert!(desk.dispatch(DesktopAction::DeselectAll));
    assert!(!desk.state.start_menu_open);
    assert!(!desk.state.window(id).expect("window").is_focused);
}

#[test]
fn closing_does_not_hand_focus_to_another_window() {
    let mut desk = Desk::new();
    let a = desk.open("notepad");
    let b = desk.open("calculator");

    assert!(desk.dispatch(DesktopAction::CloseWindow { window_id: b }));
    assert_eq!(desk.state.focused_window_id(), None);
    assert!(desk.state.window(a).is_some());
    assert!(!desk.dispatch(DesktopAction::CloseWindow { window_id: b }));
}
