//! Typed value rendering.
//!
//! Two modes exist:
//! - value mode: text is escaped and single-quoted, numbers are bare, null is `NULL`
//! - identifier mode: text is escaped and wrapped in the configured identifier quote
//!
//! Rendering returns `Ok(None)` when the argument (or any collection member) is
//! [`Arg::Skip`], which marks the placeholder as skipped.

use crate::arg::{Arg, Key};
use crate::error::{TemplateError, TemplateResult};
use crate::escape::Escape;
use crate::template::PlaceholderKind;

pub(crate) struct Renderer<'a, E: ?Sized> {
    escaper: &'a E,
    quote: char,
}

/// The placeholder being rendered, for error reporting.
#[derive(Clone, Copy)]
pub(crate) struct Slot {
    /// 1-based position in the template.
    pub ordinal: usize,
    pub kind: PlaceholderKind,
}

impl Slot {
    fn unsupported(self, arg: &Arg) -> TemplateError {
        TemplateError::unsupported(self.ordinal, self.kind, arg.type_name())
    }

    fn non_finite(self, f: f64) -> TemplateError {
        TemplateError::unsupported(self.ordinal, self.kind, format!("non-finite float {f}"))
    }
}

impl<'a, E: Escape + ?Sized> Renderer<'a, E> {
    pub(crate) fn new(escaper: &'a E, quote: char) -> Self {
        Self { escaper, quote }
    }

    /// Render one argument for a placeholder.
    pub(crate) fn render(&self, slot: Slot, arg: &Arg) -> TemplateResult<Option<String>> {
        if arg.is_skip() {
            return Ok(None);
        }
        match slot.kind {
            PlaceholderKind::Auto => self.value(slot, arg).map(Some),
            PlaceholderKind::Int => int(slot, arg).map(Some),
            PlaceholderKind::Float => float(slot, arg).map(Some),
            PlaceholderKind::Ident => match arg {
                Arg::Collection(items) => self.ident_list(slot, items.values()),
                scalar => self.ident(slot, scalar).map(Some),
            },
            PlaceholderKind::Array => match arg {
                Arg::Collection(items) => self.assignment_list(slot, items.iter()),
                other => Err(slot.unsupported(other)),
            },
        }
    }

    fn quote_value(&self, raw: &str) -> String {
        let escaped = self.escaper.escape(raw);
        let mut out = String::with_capacity(escaped.len() + 2);
        out.push('\'');
        out.push_str(&escaped);
        out.push('\'');
        out
    }

    fn quote_ident(&self, raw: &str) -> String {
        let escaped = self.escaper.escape(raw);
        let mut out = String::with_capacity(escaped.len() + 2);
        out.push(self.quote);
        for ch in escaped.chars() {
            if ch == self.quote {
                out.push(ch);
            }
            out.push(ch);
        }
        out.push(self.quote);
        out
    }

    fn value(&self, slot: Slot, arg: &Arg) -> TemplateResult<String> {
        match arg {
            Arg::Text(s) => Ok(self.quote_value(s)),
            scalar => bare_scalar(slot, scalar),
        }
    }

    fn ident(&self, slot: Slot, arg: &Arg) -> TemplateResult<String> {
        match arg {
            Arg::Text(s) => Ok(self.quote_ident(s)),
            scalar => bare_scalar(slot, scalar),
        }
    }

    /// `?#` over a collection: values only, keys ignored.
    fn ident_list<'b>(
        &self,
        slot: Slot,
        values: impl Iterator<Item = &'b Arg>,
    ) -> TemplateResult<Option<String>> {
        let mut out = String::new();
        for (i, arg) in values.enumerate() {
            if arg.is_skip() {
                return Ok(None);
            }
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&self.ident(slot, arg)?);
        }
        Ok(Some(out))
    }

    /// `?a`: `value` for positional keys, `` `key` = value `` for named keys.
    fn assignment_list<'b>(
        &self,
        slot: Slot,
        entries: impl Iterator<Item = (&'b Key, &'b Arg)>,
    ) -> TemplateResult<Option<String>> {
        let mut out = String::new();
        for (i, (key, arg)) in entries.enumerate() {
            if arg.is_skip() {
                return Ok(None);
            }
            if i > 0 {
                out.push_str(", ");
            }
            if let Key::Name(name) = key
                && !key.is_positional()
            {
                out.push_str(&self.quote_ident(name));
                out.push_str(" = ");
            }
            out.push_str(&self.value(slot, arg)?);
        }
        Ok(Some(out))
    }
}

/// Null, bool and numbers render the same in value and identifier mode.
fn bare_scalar(slot: Slot, arg: &Arg) -> TemplateResult<String> {
    match arg {
        Arg::Null => Ok("NULL".to_string()),
        Arg::Bool(b) => Ok(if *b { "1" } else { "0" }.to_string()),
        Arg::Int(i) => Ok(i.to_string()),
        Arg::Float(f) => format_float(slot, *f),
        Arg::Text(_) | Arg::Collection(_) | Arg::Skip => Err(slot.unsupported(arg)),
    }
}

fn format_float(slot: Slot, f: f64) -> TemplateResult<String> {
    if !f.is_finite() {
        return Err(slot.non_finite(f));
    }
    Ok(f.to_string())
}

/// `?d`: coerce to integer.
fn int(slot: Slot, arg: &Arg) -> TemplateResult<String> {
    match arg {
        Arg::Null => Ok("NULL".to_string()),
        Arg::Bool(b) => Ok(i64::from(*b).to_string()),
        Arg::Int(i) => Ok(i.to_string()),
        Arg::Float(f) if f.is_finite() => Ok((f.trunc() as i64).to_string()),
        Arg::Float(f) => Err(slot.non_finite(*f)),
        Arg::Text(s) => Ok(leading_int(s).to_string()),
        Arg::Collection(_) | Arg::Skip => Err(slot.unsupported(arg)),
    }
}

/// `?f`: coerce to float.
fn float(slot: Slot, arg: &Arg) -> TemplateResult<String> {
    match arg {
        Arg::Null => Ok("NULL".to_string()),
        Arg::Bool(b) => format_float(slot, f64::from(u8::from(*b))),
        Arg::Int(i) => format_float(slot, *i as f64),
        Arg::Float(f) => format_float(slot, *f),
        Arg::Text(s) => format_float(slot, leading_float(s)),
        Arg::Collection(_) | Arg::Skip => Err(slot.unsupported(arg)),
    }
}

/// Parse the leading `[+-]digits` of a string; `0` if there is none.
/// Out-of-range values saturate.
pub(crate) fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return 0;
    }
    s[..end].parse::<i64>().unwrap_or(if bytes[0] == b'-' {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Parse the leading decimal float of a string; `0.0` if there is none.
pub(crate) fn leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    end = digits(end);
    let mut has_digits = end > int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return 0.0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}
