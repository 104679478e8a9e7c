//! Calculator app panel hosted by the desktop window manager.

mod engine;

use leptos::ev::KeyboardEvent;
use leptos::*;

use crate::engine::{keyboard_action, BinaryOp, CalcAction, CalculatorState};

#[derive(Clone, Copy)]
struct CalcKeySpec {
    label: &'static str,
    class_name: &'static str,
    action: CalcAction,
}

const fn calc_key(label: &'static str, class_name: &'static str, action: CalcAction) -> CalcKeySpec {
    CalcKeySpec {
        label,
        class_name,
        action,
    }
}

const CALC_KEYS: [CalcKeySpec; 19] = [
    calc_key("C", "util", CalcAction::Clear),
    calc_key("+/-", "util", CalcAction::ToggleSign),
    calc_key("%", "util", CalcAction::Percent),
    calc_key("/", "operator", CalcAction::Binary(BinaryOp::Divide)),
    calc_key("7", "digit", CalcAction::Digit('7')),
    calc_key("8", "digit", CalcAction::Digit('8')),
    calc_key("9", "digit", CalcAction::Digit('9')),
    calc_key("*", "operator", CalcAction::Binary(BinaryOp::Multiply)),
    calc_key("4", "digit", CalcAction::Digit('4')),
    calc_key("5", "digit", CalcAction::Digit('5')),
    calc_key("6", "digit", CalcAction::Digit('6')),
    calc_key("-", "operator", CalcAction::Binary(BinaryOp::Subtract)),
    calc_key("1", "digit", CalcAction::Digit('1')),
    calc_key("2", "digit", CalcAction::Digit('2')),
    calc_key("3", "digit", CalcAction::Digit('3')),
    calc_key("+", "operator", CalcAction::Binary(BinaryOp::Add)),
    calc_key("0", "digit wide", CalcAction::Digit('0')),
    calc_key(".", "digit", CalcAction::Decimal),
    calc_key("=", "operator", CalcAction::Equals),
];

#[component]
pub fn CalculatorApp() -> impl IntoView {
    let calc = create_rw_signal(CalculatorState::default());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }

        if let Some(action) = keyboard_action(&ev.key()) {
            ev.prevent_default();
            calc.update(|state| state.apply(action));
        }
    };

    view! {
        <div class="app-shell app-calculator-shell" tabindex="0" on:keydown=on_keydown>
            <div class="calc-display-panel">
                <div class="calc-expression" aria-live="off">
                    {move || calc.with(|state| state.pending_operator().map(BinaryOp::symbol).unwrap_or(""))}
                </div>
                <div class="calc-display" role="status" aria-live="polite">
                    {move || calc.with(|state| state.display_text().to_string())}
                </div>
            </div>

            <div class="calc-keypad" role="group" aria-label="Calculator keys">
                <For each=move || CALC_KEYS.to_vec() key=|spec| spec.label let:spec>
                    <button
                        type="button"
                        class=format!("calc-key {}", spec.class_name)
                        on:click=move |_| calc.update(|state| state.apply(spec.action))
                    >
                        {spec.label}
                    </button>
                </For>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_labels_are_unique() {
        let mut labels: Vec<&str> = CALC_KEYS.iter().map(|spec| spec.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), CALC_KEYS.len());
    }
}
