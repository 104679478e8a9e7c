const MAX_ENTRY_DIGITS: usize = 16;
const ERROR_TEXT: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CalcAction {
    Digit(char),
    Decimal,
    Binary(BinaryOp),
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

/// Immediate-execution calculator: `2 + 3 * 4` evaluates left to right.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CalculatorState {
    display: String,
    first_operand: Option<f64>,
    operator: Option<BinaryOp>,
    waiting_for_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            first_operand: None,
            operator: None,
            waiting_for_operand: false,
        }
    }
}

impl CalculatorState {
    pub(crate) fn apply(&mut self, action: CalcAction) {
        match action {
            CalcAction::Digit(digit) => self.input_digit(digit),
            CalcAction::Decimal => self.input_decimal(),
            CalcAction::Binary(op) => self.set_operator(op),
            CalcAction::Equals => self.equals(),
            CalcAction::Clear => *self = Self::default(),
            CalcAction::ToggleSign => self.toggle_sign(),
            CalcAction::Percent => self.percent(),
        }
    }

    pub(crate) fn display_text(&self) -> &str {
        &self.display
    }

    pub(crate) fn pending_operator(&self) -> Option<BinaryOp> {
        self.operator
    }

    fn is_error(&self) -> bool {
        self.display == ERROR_TEXT
    }

    fn entry_value(&self) -> Option<f64> {
        self.display.parse::<f64>().ok()
    }

    fn input_digit(&mut self, digit: char) {
        if self.is_error() {
            *self = Self::default();
        }
        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
            return;
        }

        let digits = self.display.chars().filter(char::is_ascii_digit).count();
        if digits >= MAX_ENTRY_DIGITS {
            return;
        }
        match self.display.as_str() {
            "0" => self.display = digit.to_string(),
            "-0" => self.display = format!("-{digit}"),
            _ => self.display.push(digit),
        }
    }

    fn input_decimal(&mut self) {
        if self.is_error() {
            *self = Self::default();
        }
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
            return;
        }
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn set_operator(&mut self, next: BinaryOp) {
        let Some(input) = self.entry_value() else {
            return;
        };

        match (self.operator, self.first_operand) {
            (Some(pending), Some(first)) if !self.waiting_for_operand => {
                match evaluate(first, pending, input) {
                    Some(result) => {
                        self.display = format_number(result);
                        self.first_operand = Some(result);
                    }
                    None => {
                        self.fail();
                        return;
                    }
                }
            }
            // Operator pressed twice in a row replaces the pending one.
            (Some(_), Some(_)) => {}
            _ => self.first_operand = Some(input),
        }

        self.operator = Some(next);
        self.waiting_for_operand = true;
    }

    fn equals(&mut self) {
        let (Some(first), Some(op)) = (self.first_operand, self.operator) else {
            return;
        };
        let Some(input) = self.entry_value() else {
            return;
        };
        match evaluate(first, op, input) {
            Some(result) => {
                self.display = format_number(result);
                self.first_operand = None;
                self.operator = None;
                self.waiting_for_operand = false;
            }
            None => self.fail(),
        }
    }

    fn toggle_sign(&mut self) {
        if self.is_error() || self.waiting_for_operand {
            return;
        }
        if let Some(stripped) = self.display.strip_prefix('-') {
            self.display = stripped.to_string();
        } else if self.display != "0" {
            self.display.insert(0, '-');
        }
    }

    fn percent(&mut self) {
        if let Some(value) = self.entry_value() {
            self.display = format_number(value / 100.0);
            self.waiting_for_operand = false;
        }
    }

    fn fail(&mut self) {
        *self = Self {
            display: ERROR_TEXT.to_string(),
            ..Self::default()
        };
    }
}

pub(crate) fn keyboard_action(key: &str) -> Option<CalcAction> {
    match key {
        "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
            key.chars().next().map(CalcAction::Digit)
        }
        "." | "," => Some(CalcAction::Decimal),
        "+" => Some(CalcAction::Binary(BinaryOp::Add)),
        "-" => Some(CalcAction::Binary(BinaryOp::Subtract)),
        "*" | "x" | "X" => Some(CalcAction::Binary(BinaryOp::Multiply)),
        "/" => Some(CalcAction::Binary(BinaryOp::Divide)),
        "%" => Some(CalcAction::Percent),
        "=" | "Enter" => Some(CalcAction::Equals),
        "Escape" | "c" | "C" => Some(CalcAction::Clear),
        "F9" => Some(CalcAction::ToggleSign),
        _ => None,
    }
}

fn evaluate(lhs: f64, op: BinaryOp, rhs: f64) -> Option<f64> {
    let result = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => lhs / rhs,
    };
    result.is_finite().then_some(result)
}

pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }

    let mut text = format!("{value:.12}");
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
