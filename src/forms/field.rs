//! Editable text fields with keyboard focus.

/// Kind of content a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, e.g. an expression.
    Text,
    /// Number as typed: digits, sign, decimal point and exponent.
    Numeric,
}

impl FieldKind {
    /// Whether `c` may be typed into a field of this kind.
    pub fn accepts(self, c: char) -> bool {
        match self {
            FieldKind::Text => !c.is_control(),
            FieldKind::Numeric => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
        }
    }
}

/// A labelled input.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    /// Label shown next to the value.
    pub label: String,
    /// Current text.
    pub value: String,
    /// Accepted content.
    pub kind: FieldKind,
}

impl InputField {
    /// Create an empty numeric field.
    pub fn numeric(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            kind: FieldKind::Numeric,
        }
    }

    /// Create a text field with an initial value.
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind: FieldKind::Text,
        }
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Whether the field is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Ordered fields with one focused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldList {
    fields: Vec<InputField>,
    focus: usize,
}

impl FieldList {
    /// Create a list focused on the first field.
    pub fn new(fields: Vec<InputField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Replace all fields, keeping focus in bounds.
    pub fn replace(&mut self, fields: Vec<InputField>) {
        self.fields = fields;
        self.focus = self.focus.min(self.fields.len().saturating_sub(1));
    }

    /// All fields.
    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    /// Field at `index`.
    pub fn get(&self, index: usize) -> Option<&InputField> {
        self.fields.get(index)
    }

    /// Value of the field at `index`, empty if absent.
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// Overwrite the value at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// All values in order.
    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Focus a specific field.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Focus the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    /// Focus the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Type a character into the focused field. Returns whether it was accepted.
    pub fn input(&mut self, c: char) -> bool {
        match self.fields.get_mut(self.focus) {
            Some(field) if field.kind.accepts(c) => {
                field.value.push(c);
                true
            },
            _ => false,
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) -> bool {
        self.fields
            .get_mut(self.focus)
            .and_then(|field| field.value.pop())
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_reject_letters() {
        let mut list = FieldList::new(vec![InputField::numeric("a")]);
        assert!(list.input('-'));
        assert!(list.input('3'));
        assert!(!list.input('x'));
        assert_eq!(list.value(0), "-3");
    }

    #[test]
    fn focus_wraps() {
        let mut list = FieldList::new(vec![
            InputField::numeric("a"),
            InputField::text("expr", "x**2"),
        ]);
        list.focus_prev();
        assert_eq!(list.focus(), 1);
        assert!(list.input('*'));
        assert_eq!(list.value(1), "x**2*");
        assert!(list.backspace());
        list.focus_next();
        assert_eq!(list.focus(), 0);
    }
}
