// Optional named-argument list for grafonnet constructor calls
use serde::Deserialize;
use serde_json::Number;
use std::fmt;

/// How flag and number values are written into the script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralStyle {
    /// Every value is a quoted string literal: `hide='true',`
    #[default]
    Quoted,
    /// Flags and numbers are bare jsonnet literals: `hide=true,`
    Bare,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    /// Enumerated option such as a thresholds mode or a pie type.
    Keyword(&'a str),
    Flag(bool),
    Number(&'a Number),
}

impl FieldValue<'_> {
    /// Empty text and keywords count as absent.
    fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Keyword(s) => !s.is_empty(),
            FieldValue::Flag(_) | FieldValue::Number(_) => true,
        }
    }

    fn write_to(&self, out: &mut String, style: LiteralStyle) {
        match (self, style) {
            (FieldValue::Text(s) | FieldValue::Keyword(s), _) => quoted(out, s),
            (FieldValue::Flag(b), LiteralStyle::Quoted) => quoted(out, if *b { "true" } else { "false" }),
            (FieldValue::Flag(b), LiteralStyle::Bare) => out.push_str(if *b { "true" } else { "false" }),
            (FieldValue::Number(n), LiteralStyle::Quoted) => quoted(out, &n.to_string()),
            (FieldValue::Number(n), LiteralStyle::Bare) => out.push_str(&n.to_string()),
        }
    }
}

// Values go in verbatim, no escaping.
fn quoted(out: &mut String, s: &str) {
    out.push('\'');
    out.push_str(s);
    out.push('\'');
}

/// Ordered `name='value',` arguments. A field is appended only when its
/// value is present, and fields keep the order the caller pushes them in.
#[derive(Debug, Clone)]
pub struct FieldList {
    args: String,
    style: LiteralStyle,
}

impl FieldList {
    pub fn new(style: LiteralStyle) -> Self {
        Self {
            args: String::new(),
            style,
        }
    }

    pub fn push(mut self, name: &str, value: Option<FieldValue<'_>>) -> Self {
        if let Some(value) = value.filter(|v| v.is_present()) {
            self.args.push_str(name);
            self.args.push('=');
            value.write_to(&mut self.args, self.style);
            self.args.push(',');
        }
        self
    }

    pub fn text(self, name: &str, value: Option<&str>) -> Self {
        self.push(name, value.map(FieldValue::Text))
    }

    pub fn keyword(self, name: &str, value: Option<&str>) -> Self {
        self.push(name, value.map(FieldValue::Keyword))
    }

    pub fn flag(self, name: &str, value: Option<bool>) -> Self {
        self.push(name, value.map(FieldValue::Flag))
    }

    pub fn number(self, name: &str, value: Option<&Number>) -> Self {
        self.push(name, value.map(FieldValue::Number))
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Display for FieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args)
    }
}
