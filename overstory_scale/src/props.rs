// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The raw scale prop set: every dimension prop a host can supply, the fixed
//! record holding them, and helpers for splitting them out of an untyped
//! attribute bag.

use alloc::string::{String, ToString};

use hashbrown::HashMap;

use crate::value::ScaleValue;

/// Default global scale factor.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Default CSS unit appended to computed `calc()` expressions.
pub const DEFAULT_UNIT: &str = "16px";

/// An untyped attribute bag, as handed over by a host framework.
///
/// [`extract_scale_props`] strips the scale-owned entries out of one of
/// these; whatever remains belongs to the wrapped component and is passed
/// through untouched.
pub type PropBag = HashMap<String, ScaleValue>;

/// Every dimension prop name the scale system owns.
///
/// Long-form names (`paddingTop`) and their short-form aliases (`pt`) are
/// distinct inputs: the precedence chains consult them separately, and a
/// long-form value always outranks its alias. The names returned by
/// [`ScaleProp::name`] are the wire names hosts use in attribute bags.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScaleProp {
    /// `width`
    Width,
    /// `w` (alias for `width`)
    W,
    /// `height`
    Height,
    /// `h` (alias for `height`)
    H,
    /// `font`
    Font,
    /// `margin` (shorthand for all four edges)
    Margin,
    /// `marginTop`
    MarginTop,
    /// `marginRight`
    MarginRight,
    /// `marginBottom`
    MarginBottom,
    /// `marginLeft`
    MarginLeft,
    /// `mt` (alias for `marginTop`)
    Mt,
    /// `mr` (alias for `marginRight`)
    Mr,
    /// `mb` (alias for `marginBottom`)
    Mb,
    /// `ml` (alias for `marginLeft`)
    Ml,
    /// `mx` (horizontal margin axis)
    Mx,
    /// `my` (vertical margin axis)
    My,
    /// `padding` (shorthand for all four edges)
    Padding,
    /// `paddingTop`
    PaddingTop,
    /// `paddingRight`
    PaddingRight,
    /// `paddingBottom`
    PaddingBottom,
    /// `paddingLeft`
    PaddingLeft,
    /// `pt` (alias for `paddingTop`)
    Pt,
    /// `pr` (alias for `paddingRight`)
    Pr,
    /// `pb` (alias for `paddingBottom`)
    Pb,
    /// `pl` (alias for `paddingLeft`)
    Pl,
    /// `px` (horizontal padding axis)
    Px,
    /// `py` (vertical padding axis)
    Py,
}

impl ScaleProp {
    /// All dimension props, in declaration order.
    pub const ALL: [Self; 27] = [
        Self::Width,
        Self::W,
        Self::Height,
        Self::H,
        Self::Font,
        Self::Margin,
        Self::MarginTop,
        Self::MarginRight,
        Self::MarginBottom,
        Self::MarginLeft,
        Self::Mt,
        Self::Mr,
        Self::Mb,
        Self::Ml,
        Self::Mx,
        Self::My,
        Self::Padding,
        Self::PaddingTop,
        Self::PaddingRight,
        Self::PaddingBottom,
        Self::PaddingLeft,
        Self::Pt,
        Self::Pr,
        Self::Pb,
        Self::Pl,
        Self::Px,
        Self::Py,
    ];

    /// The wire name of this prop.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::W => "w",
            Self::Height => "height",
            Self::H => "h",
            Self::Font => "font",
            Self::Margin => "margin",
            Self::MarginTop => "marginTop",
            Self::MarginRight => "marginRight",
            Self::MarginBottom => "marginBottom",
            Self::MarginLeft => "marginLeft",
            Self::Mt => "mt",
            Self::Mr => "mr",
            Self::Mb => "mb",
            Self::Ml => "ml",
            Self::Mx => "mx",
            Self::My => "my",
            Self::Padding => "padding",
            Self::PaddingTop => "paddingTop",
            Self::PaddingRight => "paddingRight",
            Self::PaddingBottom => "paddingBottom",
            Self::PaddingLeft => "paddingLeft",
            Self::Pt => "pt",
            Self::Pr => "pr",
            Self::Pb => "pb",
            Self::Pl => "pl",
            Self::Px => "px",
            Self::Py => "py",
        }
    }

    /// Parse a wire name back into a prop. Returns `None` for anything the
    /// scale system does not own (including `scale` and `unit`, which are
    /// typed fields on [`ScaleProps`] rather than dimension props).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|prop| prop.name() == name)
    }
}

/// The full set of inputs for one scale resolution.
///
/// A fixed record rather than a dynamic map, so the precedence chains get
/// compile-time exhaustiveness checking. Every dimension field is optional;
/// `None` means "not supplied", and `Some` with a zero or empty value still
/// counts as supplied.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleProps {
    /// Global scale factor, dampened via
    /// [`reduce_scale_coefficient`](crate::reduce_scale_coefficient) before
    /// use.
    pub scale: f64,
    /// CSS unit appended to computed `calc()` expressions.
    pub unit: String,
    /// `width`
    pub width: Option<ScaleValue>,
    /// `w`
    pub w: Option<ScaleValue>,
    /// `height`
    pub height: Option<ScaleValue>,
    /// `h`
    pub h: Option<ScaleValue>,
    /// `font`
    pub font: Option<ScaleValue>,
    /// `margin`
    pub margin: Option<ScaleValue>,
    /// `marginTop`
    pub margin_top: Option<ScaleValue>,
    /// `marginRight`
    pub margin_right: Option<ScaleValue>,
    /// `marginBottom`
    pub margin_bottom: Option<ScaleValue>,
    /// `marginLeft`
    pub margin_left: Option<ScaleValue>,
    /// `mt`
    pub mt: Option<ScaleValue>,
    /// `mr`
    pub mr: Option<ScaleValue>,
    /// `mb`
    pub mb: Option<ScaleValue>,
    /// `ml`
    pub ml: Option<ScaleValue>,
    /// `mx`
    pub mx: Option<ScaleValue>,
    /// `my`
    pub my: Option<ScaleValue>,
    /// `padding`
    pub padding: Option<ScaleValue>,
    /// `paddingTop`
    pub padding_top: Option<ScaleValue>,
    /// `paddingRight`
    pub padding_right: Option<ScaleValue>,
    /// `paddingBottom`
    pub padding_bottom: Option<ScaleValue>,
    /// `paddingLeft`
    pub padding_left: Option<ScaleValue>,
    /// `pt`
    pub pt: Option<ScaleValue>,
    /// `pr`
    pub pr: Option<ScaleValue>,
    /// `pb`
    pub pb: Option<ScaleValue>,
    /// `pl`
    pub pl: Option<ScaleValue>,
    /// `px`
    pub px: Option<ScaleValue>,
    /// `py`
    pub py: Option<ScaleValue>,
}

impl Default for ScaleProps {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            unit: DEFAULT_UNIT.to_string(),
            width: None,
            w: None,
            height: None,
            h: None,
            font: None,
            margin: None,
            margin_top: None,
            margin_right: None,
            margin_bottom: None,
            margin_left: None,
            mt: None,
            mr: None,
            mb: None,
            ml: None,
            mx: None,
            my: None,
            padding: None,
            padding_top: None,
            padding_right: None,
            padding_bottom: None,
            padding_left: None,
            pt: None,
            pr: None,
            pb: None,
            pl: None,
            px: None,
            py: None,
        }
    }
}

impl ScaleProps {
    /// The value supplied for a dimension prop, if any.
    #[must_use]
    pub fn get(&self, prop: ScaleProp) -> Option<&ScaleValue> {
        match prop {
            ScaleProp::Width => self.width.as_ref(),
            ScaleProp::W => self.w.as_ref(),
            ScaleProp::Height => self.height.as_ref(),
            ScaleProp::H => self.h.as_ref(),
            ScaleProp::Font => self.font.as_ref(),
            ScaleProp::Margin => self.margin.as_ref(),
            ScaleProp::MarginTop => self.margin_top.as_ref(),
            ScaleProp::MarginRight => self.margin_right.as_ref(),
            ScaleProp::MarginBottom => self.margin_bottom.as_ref(),
            ScaleProp::MarginLeft => self.margin_left.as_ref(),
            ScaleProp::Mt => self.mt.as_ref(),
            ScaleProp::Mr => self.mr.as_ref(),
            ScaleProp::Mb => self.mb.as_ref(),
            ScaleProp::Ml => self.ml.as_ref(),
            ScaleProp::Mx => self.mx.as_ref(),
            ScaleProp::My => self.my.as_ref(),
            ScaleProp::Padding => self.padding.as_ref(),
            ScaleProp::PaddingTop => self.padding_top.as_ref(),
            ScaleProp::PaddingRight => self.padding_right.as_ref(),
            ScaleProp::PaddingBottom => self.padding_bottom.as_ref(),
            ScaleProp::PaddingLeft => self.padding_left.as_ref(),
            ScaleProp::Pt => self.pt.as_ref(),
            ScaleProp::Pr => self.pr.as_ref(),
            ScaleProp::Pb => self.pb.as_ref(),
            ScaleProp::Pl => self.pl.as_ref(),
            ScaleProp::Px => self.px.as_ref(),
            ScaleProp::Py => self.py.as_ref(),
        }
    }

    /// Set or clear a dimension prop.
    pub fn set(&mut self, prop: ScaleProp, value: Option<ScaleValue>) {
        let field = match prop {
            ScaleProp::Width => &mut self.width,
            ScaleProp::W => &mut self.w,
            ScaleProp::Height => &mut self.height,
            ScaleProp::H => &mut self.h,
            ScaleProp::Font => &mut self.font,
            ScaleProp::Margin => &mut self.margin,
            ScaleProp::MarginTop => &mut self.margin_top,
            ScaleProp::MarginRight => &mut self.margin_right,
            ScaleProp::MarginBottom => &mut self.margin_bottom,
            ScaleProp::MarginLeft => &mut self.margin_left,
            ScaleProp::Mt => &mut self.mt,
            ScaleProp::Mr => &mut self.mr,
            ScaleProp::Mb => &mut self.mb,
            ScaleProp::Ml => &mut self.ml,
            ScaleProp::Mx => &mut self.mx,
            ScaleProp::My => &mut self.my,
            ScaleProp::Padding => &mut self.padding,
            ScaleProp::PaddingTop => &mut self.padding_top,
            ScaleProp::PaddingRight => &mut self.padding_right,
            ScaleProp::PaddingBottom => &mut self.padding_bottom,
            ScaleProp::PaddingLeft => &mut self.padding_left,
            ScaleProp::Pt => &mut self.pt,
            ScaleProp::Pr => &mut self.pr,
            ScaleProp::Pb => &mut self.pb,
            ScaleProp::Pl => &mut self.pl,
            ScaleProp::Px => &mut self.px,
            ScaleProp::Py => &mut self.py,
        };
        *field = value;
    }

    /// Walk a precedence chain left to right and return the first supplied
    /// value. Zero and empty-string values are supplied values and win.
    #[must_use]
    pub fn first_defined(&self, chain: &[ScaleProp]) -> Option<&ScaleValue> {
        chain.iter().find_map(|prop| self.get(*prop))
    }

    /// Scan candidates left to right, letting every supplied value overwrite
    /// the running result, and return the last one found.
    ///
    /// This is deliberately the opposite direction from [`first_defined`]:
    /// chain resolution takes the highest-priority name, the scaleable-props
    /// accessor takes the last-listed one.
    ///
    /// [`first_defined`]: Self::first_defined
    #[must_use]
    pub fn last_defined(&self, candidates: &[ScaleProp]) -> Option<&ScaleValue> {
        let mut value = None;
        for prop in candidates {
            if let Some(current) = self.get(*prop) {
                value = Some(current);
            }
        }
        value
    }
}

/// Strip every scale-owned entry out of an attribute bag and collect them
/// into a [`ScaleProps`].
///
/// `scale` (numeric) and `unit` entries feed the typed fields; dimension
/// entries land in their slots; everything else stays in the bag untouched
/// for the wrapped component.
///
/// ```
/// use overstory_scale::{PropBag, extract_scale_props};
///
/// let mut attrs = PropBag::new();
/// attrs.insert("paddingTop".into(), 2.into());
/// attrs.insert("class".into(), "card".into());
///
/// let props = extract_scale_props(&mut attrs);
/// assert_eq!(props.padding_top, Some(2.into()));
/// assert_eq!(attrs.len(), 1);
/// assert!(attrs.contains_key("class"));
/// ```
pub fn extract_scale_props(attrs: &mut PropBag) -> ScaleProps {
    let mut props = ScaleProps::default();
    for (name, value) in attrs.extract_if(|name, _| {
        name == "scale" || name == "unit" || ScaleProp::from_name(name).is_some()
    }) {
        match name.as_str() {
            "scale" => {
                if let Some(scale) = value.as_number() {
                    props.scale = scale;
                }
            }
            "unit" => props.unit = value.to_string(),
            _ => {
                if let Some(prop) = ScaleProp::from_name(&name) {
                    props.set(prop, Some(value));
                }
            }
        }
    }
    props
}
