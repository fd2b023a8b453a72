use crate::history::HistoryLedger;
use crate::input::InputEvent;
use crate::model::display::DisplayState;
use crate::model::history_entry::HistoryEntry;
use crate::model::operator::Operator;
use crate::number::{format_number, parse_operand};
use log::{debug, trace};

const INITIAL_OPERAND: &str = "0";

/// One calculator session: engine state plus the history it produces.
///
/// Instances are independent; the presentation layer owns one per display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    current: String,
    previous: String,
    pending: Option<Operator>,
    reset_on_input: bool,
    history: HistoryLedger,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            current: INITIAL_OPERAND.to_string(),
            previous: String::new(),
            pending: None,
            reset_on_input: false,
            history: HistoryLedger::new(),
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operand text currently on the main display.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Left operand of the pending operation, or empty.
    pub fn previous(&self) -> &str {
        &self.previous
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// Whether the next digit/decimal input starts a fresh operand.
    pub fn reset_on_input(&self) -> bool {
        self.reset_on_input
    }

    pub fn display(&self) -> DisplayState {
        DisplayState::new(&self.current, &self.previous, self.pending)
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    /// Dispatches one input event to the matching operation.
    pub fn apply(&mut self, event: InputEvent) {
        trace!("event=input module=engine kind={event:?}");
        match event {
            InputEvent::Digit(digit) => {
                let mut buffer = [0_u8; 4];
                self.append_digit(digit.encode_utf8(&mut buffer));
            }
            InputEvent::Decimal => self.append_decimal(),
            InputEvent::Operator(operator) => self.choose_operator(operator),
            InputEvent::Calculate => {
                self.calculate();
            }
            InputEvent::Clear => self.clear(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Percentage => self.percentage_immediate(),
        }
    }

    /// Appends digit text, replacing a lone `0` or a consumed operand.
    ///
    /// Caller guarantees `digits` contains only ASCII digits.
    pub fn append_digit(&mut self, digits: &str) {
        if self.current == INITIAL_OPERAND || self.reset_on_input {
            self.current = digits.to_string();
            self.reset_on_input = false;
        } else {
            self.current.push_str(digits);
        }
    }

    /// Starts or extends a decimal fraction.
    ///
    /// After an operator or result this starts a fresh `0.`; otherwise the
    /// point is added only if `current` has none.
    pub fn append_decimal(&mut self) {
        if self.reset_on_input {
            self.current = "0.".to_string();
            self.reset_on_input = false;
            return;
        }
        if !self.current.contains('.') {
            self.current.push('.');
        }
    }

    /// Sets the pending operator, folding any operation already pending.
    ///
    /// Evaluation is strictly left to right: `2 + 3 × 4` is `(2 + 3) × 4`.
    pub fn choose_operator(&mut self, operator: Operator) {
        if !self.previous.is_empty() {
            self.calculate();
        }
        self.pending = Some(operator);
        self.previous = self.current.clone();
        self.reset_on_input = true;
    }

    /// Evaluates the pending operation and records it in history.
    ///
    /// Returns the recorded entry, or `None` when there is no pending
    /// operator or no second operand has been entered yet.
    pub fn calculate(&mut self) -> Option<&HistoryEntry> {
        let Some(operator) = self.pending else {
            debug!("event=calculate module=engine status=skipped reason=no_pending_operator");
            return None;
        };
        if self.reset_on_input {
            debug!("event=calculate module=engine status=skipped reason=awaiting_operand");
            return None;
        }

        let value = operator.apply(parse_operand(&self.previous), parse_operand(&self.current));
        let result = format_number(value);
        debug!(
            "event=calculate module=engine status=ok op={} finite={}",
            operator.as_action(),
            value.is_finite()
        );

        self.history.record(HistoryEntry::from_operands(
            &self.previous,
            operator,
            &self.current,
            result.clone(),
        ));
        self.current = result;
        self.previous.clear();
        self.pending = None;
        self.reset_on_input = true;
        self.history.get(0)
    }

    /// Resets operands and the pending operator.
    ///
    /// Leaves `reset_on_input` and history untouched.
    pub fn clear(&mut self) {
        self.current = INITIAL_OPERAND.to_string();
        self.previous.clear();
        self.pending = None;
    }

    /// Removes the last character of `current`, falling back to `0`.
    ///
    /// A single digit or a negative single digit (`-5`) becomes `0`.
    pub fn backspace(&mut self) {
        let length = self.current.chars().count();
        if length <= 1 || (length == 2 && self.current.starts_with('-')) {
            self.current = INITIAL_OPERAND.to_string();
        } else {
            self.current.pop();
        }
    }

    /// Divides `current` by 100 in place, regardless of any pending operator.
    pub fn percentage_immediate(&mut self) {
        self.current = format_number(parse_operand(&self.current) / 100.0);
    }

    /// Replaces `current` with recalled text, typically a history result.
    pub fn load_operand(&mut self, value: impl Into<String>) {
        self.current = value.into();
    }

    /// Loads the result of history entry `index` (0 = newest) into `current`.
    ///
    /// Returns the recalled text, or `None` when the index is out of range.
    pub fn recall(&mut self, index: usize) -> Option<String> {
        let recalled = self.history.get(index).map(HistoryLedger::recall)?;
        self.load_operand(recalled.clone());
        Some(recalled)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
