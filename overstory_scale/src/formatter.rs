// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning a resolved slot value into a final dimension string.

use alloc::format;
use alloc::string::{String, ToString};

use crate::coefficient::reduce_scale_coefficient;
use crate::value::ScaleValue;

/// A formatter for one slot, closed over the slot's resolved value, the raw
/// scale factor, and the unit.
///
/// Consumers invoke it with a base scale weight (`1.0` for simple slots,
/// larger for compound ones) and optionally a default value:
///
/// - resolved value absent: the default is emitted as a plain string if one
///   was given, otherwise `calc(<coefficient * base> * <unit>)`;
/// - resolved value non-numeric (`"auto"`, `"10vh"`): emitted verbatim,
///   bypassing scale and unit;
/// - resolved value numeric (including numeric strings and `0`):
///   `calc(<coefficient * base * value> * <unit>)`.
///
/// A base scale of `0.0` is indistinguishable from "not provided": both are
/// coerced to `1.0` with the default value falling back to `0`. Kept for
/// compatibility with existing consumers even though it swallows zero as a
/// legitimate weight; see the crate docs.
///
/// ```
/// use overstory_scale::SlotFormatter;
///
/// let pt = SlotFormatter::new(Some(2.into()), 1.0, "px");
/// assert_eq!(pt.format(1.0), "calc(2 * px)");
///
/// let width = SlotFormatter::new(Some("auto".into()), 1.0, "px");
/// assert_eq!(width.format(1.0), "auto");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SlotFormatter {
    value: Option<ScaleValue>,
    scale: f64,
    unit: String,
}

impl SlotFormatter {
    /// Create a formatter over a resolved value, scale factor, and unit.
    #[must_use]
    pub fn new(value: Option<ScaleValue>, scale: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            scale,
            unit: unit.into(),
        }
    }

    /// The resolved value this formatter is closed over, if any.
    #[must_use]
    pub fn value(&self) -> Option<&ScaleValue> {
        self.value.as_ref()
    }

    /// Format with no default value.
    #[must_use]
    pub fn format(&self, base_scale: f64) -> String {
        self.render(base_scale, None)
    }

    /// Format, substituting `default_value` when no value was resolved.
    #[must_use]
    pub fn format_with_default(
        &self,
        base_scale: f64,
        default_value: impl Into<ScaleValue>,
    ) -> String {
        self.render(base_scale, Some(default_value.into()))
    }

    fn render(&self, base_scale: f64, default_value: Option<ScaleValue>) -> String {
        let mut base_scale = base_scale;
        let mut default_value = default_value;
        if base_scale == 0.0 || base_scale.is_nan() {
            base_scale = 1.0;
            // Loose `default || 0`: an absent, zero, or empty default all
            // collapse to the number 0.
            default_value = match default_value {
                Some(value) if !value.is_falsy() => Some(value),
                _ => Some(ScaleValue::Number(0.0)),
            };
        }
        let stand = reduce_scale_coefficient(self.scale) * base_scale;
        let Some(value) = &self.value else {
            return match default_value {
                Some(default_value) => default_value.to_string(),
                None => format!("calc({stand} * {})", self.unit),
            };
        };
        match value.as_number() {
            Some(number) => format!("calc({} * {})", stand * number, self.unit),
            None => value.to_string(),
        }
    }
}
