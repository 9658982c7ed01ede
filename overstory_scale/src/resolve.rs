// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shorthand resolution: walking each slot's precedence chain and building
//! the full formatter map.

use crate::formatter::SlotFormatter;
use crate::props::{ScaleProp, ScaleProps};

/// A resolved dimension target.
///
/// Slots are the outputs of resolution: one per padding/margin edge and
/// axis, plus width, height, and font. The `padding`/`margin` shorthands are
/// inputs only — they feed chains but have no slot of their own.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Slot {
    /// Padding top edge.
    Pt,
    /// Padding right edge.
    Pr,
    /// Padding bottom edge.
    Pb,
    /// Padding left edge.
    Pl,
    /// Horizontal padding axis.
    Px,
    /// Vertical padding axis.
    Py,
    /// Margin top edge.
    Mt,
    /// Margin right edge.
    Mr,
    /// Margin bottom edge.
    Mb,
    /// Margin left edge.
    Ml,
    /// Horizontal margin axis.
    Mx,
    /// Vertical margin axis.
    My,
    /// Width.
    Width,
    /// Height.
    Height,
    /// Font size.
    Font,
}

impl Slot {
    /// All fifteen slots, in resolution order.
    pub const ALL: [Self; 15] = [
        Self::Pt,
        Self::Pr,
        Self::Pb,
        Self::Pl,
        Self::Px,
        Self::Py,
        Self::Mt,
        Self::Mr,
        Self::Mb,
        Self::Ml,
        Self::Mx,
        Self::My,
        Self::Width,
        Self::Height,
        Self::Font,
    ];

    /// This slot's name as consumers know it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::Pr => "pr",
            Self::Pb => "pb",
            Self::Pl => "pl",
            Self::Px => "px",
            Self::Py => "py",
            Self::Mt => "mt",
            Self::Mr => "mr",
            Self::Mb => "mb",
            Self::Ml => "ml",
            Self::Mx => "mx",
            Self::My => "my",
            Self::Width => "width",
            Self::Height => "height",
            Self::Font => "font",
        }
    }

    /// The precedence chain feeding this slot, highest priority first.
    ///
    /// Edges prefer their long-form name, then their alias, then their axis,
    /// then the all-edges shorthand. Axes prefer their own name, then the
    /// long-form edges they span, then the edge aliases, then the shorthand.
    /// The first supplied value along the chain wins.
    #[must_use]
    pub const fn chain(self) -> &'static [ScaleProp] {
        use ScaleProp::*;
        match self {
            Self::Pt => &[PaddingTop, Pt, Py, Padding],
            Self::Pr => &[PaddingRight, Pr, Px, Padding],
            Self::Pb => &[PaddingBottom, Pb, Py, Padding],
            Self::Pl => &[PaddingLeft, Pl, Px, Padding],
            Self::Px => &[Px, PaddingLeft, PaddingRight, Pl, Pr, Padding],
            Self::Py => &[Py, PaddingTop, PaddingBottom, Pt, Pb, Padding],
            Self::Mt => &[MarginTop, Mt, My, Margin],
            Self::Mr => &[MarginRight, Mr, Mx, Margin],
            Self::Mb => &[MarginBottom, Mb, My, Margin],
            Self::Ml => &[MarginLeft, Ml, Mx, Margin],
            Self::Mx => &[Mx, MarginLeft, MarginRight, Ml, Mr, Margin],
            Self::My => &[My, MarginTop, MarginBottom, Mt, Mb, Margin],
            Self::Width => &[Width, W],
            Self::Height => &[Height, H],
            Self::Font => &[Font],
        }
    }
}

/// The resolved formatter map: exactly one [`SlotFormatter`] per slot.
///
/// Built wholesale by [`resolve_scales`]; never patched incrementally. Direct
/// field access covers the common case (`scales.pt.format(1.0)`), and
/// [`Scales::get`] covers slot-driven lookups.
#[derive(Clone, Debug, PartialEq)]
pub struct Scales {
    /// Formatter for [`Slot::Pt`].
    pub pt: SlotFormatter,
    /// Formatter for [`Slot::Pr`].
    pub pr: SlotFormatter,
    /// Formatter for [`Slot::Pb`].
    pub pb: SlotFormatter,
    /// Formatter for [`Slot::Pl`].
    pub pl: SlotFormatter,
    /// Formatter for [`Slot::Px`].
    pub px: SlotFormatter,
    /// Formatter for [`Slot::Py`].
    pub py: SlotFormatter,
    /// Formatter for [`Slot::Mt`].
    pub mt: SlotFormatter,
    /// Formatter for [`Slot::Mr`].
    pub mr: SlotFormatter,
    /// Formatter for [`Slot::Mb`].
    pub mb: SlotFormatter,
    /// Formatter for [`Slot::Ml`].
    pub ml: SlotFormatter,
    /// Formatter for [`Slot::Mx`].
    pub mx: SlotFormatter,
    /// Formatter for [`Slot::My`].
    pub my: SlotFormatter,
    /// Formatter for [`Slot::Width`].
    pub width: SlotFormatter,
    /// Formatter for [`Slot::Height`].
    pub height: SlotFormatter,
    /// Formatter for [`Slot::Font`].
    pub font: SlotFormatter,
}

impl Scales {
    /// The formatter for a slot.
    #[must_use]
    pub fn get(&self, slot: Slot) -> &SlotFormatter {
        match slot {
            Slot::Pt => &self.pt,
            Slot::Pr => &self.pr,
            Slot::Pb => &self.pb,
            Slot::Pl => &self.pl,
            Slot::Px => &self.px,
            Slot::Py => &self.py,
            Slot::Mt => &self.mt,
            Slot::Mr => &self.mr,
            Slot::Mb => &self.mb,
            Slot::Ml => &self.ml,
            Slot::Mx => &self.mx,
            Slot::My => &self.my,
            Slot::Width => &self.width,
            Slot::Height => &self.height,
            Slot::Font => &self.font,
        }
    }
}

impl Default for Scales {
    /// The map a consumer sees with no provider in scope: every chain
    /// resolved against default props.
    fn default() -> Self {
        resolve_scales(&ScaleProps::default())
    }
}

/// Resolve every slot against the supplied props.
///
/// For each slot, the first supplied value along its chain (zero and empty
/// strings included) becomes the formatter's resolved value; chains with no
/// supplied value produce a formatter in its default-substitution mode. Pure
/// construction — call it again after any input change and replace the old
/// map wholesale.
#[must_use]
pub fn resolve_scales(props: &ScaleProps) -> Scales {
    let formatter = |slot: Slot| {
        SlotFormatter::new(
            props.first_defined(slot.chain()).cloned(),
            props.scale,
            props.unit.clone(),
        )
    };
    Scales {
        pt: formatter(Slot::Pt),
        pr: formatter(Slot::Pr),
        pb: formatter(Slot::Pb),
        pl: formatter(Slot::Pl),
        px: formatter(Slot::Px),
        py: formatter(Slot::Py),
        mt: formatter(Slot::Mt),
        mr: formatter(Slot::Mr),
        mb: formatter(Slot::Mb),
        ml: formatter(Slot::Ml),
        mx: formatter(Slot::Mx),
        my: formatter(Slot::My),
        width: formatter(Slot::Width),
        height: formatter(Slot::Height),
        font: formatter(Slot::Font),
    }
}

#[cfg(test)]
mod tests {
    use super::{Scales, Slot, resolve_scales};
    use crate::props::{ScaleProp, ScaleProps};

    fn px_props() -> ScaleProps {
        ScaleProps {
            unit: "px".into(),
            ..ScaleProps::default()
        }
    }

    #[test]
    fn every_chain_starts_with_its_own_long_form() {
        for slot in Slot::ALL {
            let chain = slot.chain();
            assert!(!chain.is_empty(), "slot {} has an empty chain", slot.name());
            // No chain consults a prop twice.
            for (i, prop) in chain.iter().enumerate() {
                assert!(
                    !chain[i + 1..].contains(prop),
                    "slot {} repeats {:?}",
                    slot.name(),
                    prop
                );
            }
        }
        assert_eq!(Slot::Pt.chain()[0], ScaleProp::PaddingTop);
        assert_eq!(Slot::Mx.chain()[0], ScaleProp::Mx);
        assert_eq!(Slot::Width.chain(), &[ScaleProp::Width, ScaleProp::W]);
    }

    #[test]
    fn highest_priority_wins() {
        let props = ScaleProps {
            padding_top: Some(5.into()),
            pt: Some(3.into()),
            py: Some(2.into()),
            padding: Some(1.into()),
            ..px_props()
        };
        let scales = resolve_scales(&props);
        assert_eq!(scales.pt.format(1.0), "calc(5 * px)");
    }

    #[test]
    fn lower_links_fill_in_when_higher_ones_are_absent() {
        let props = ScaleProps {
            py: Some(2.into()),
            padding: Some(1.into()),
            ..px_props()
        };
        let scales = resolve_scales(&props);
        assert_eq!(scales.pt.format(1.0), "calc(2 * px)");
        assert_eq!(scales.pb.format(1.0), "calc(2 * px)");
        // The horizontal edges skip `py` and land on the shorthand.
        assert_eq!(scales.pr.format(1.0), "calc(1 * px)");
        assert_eq!(scales.pl.format(1.0), "calc(1 * px)");
    }

    #[test]
    fn axes_prefer_their_own_name_over_edges() {
        let props = ScaleProps {
            px: Some(4.into()),
            padding_left: Some(9.into()),
            ..px_props()
        };
        let scales = resolve_scales(&props);
        assert_eq!(scales.px.format(1.0), "calc(4 * px)");
        // But the left edge itself still prefers its long form.
        assert_eq!(scales.pl.format(1.0), "calc(9 * px)");
    }

    #[test]
    fn axes_fall_back_through_edges_to_the_shorthand() {
        let props = ScaleProps {
            pr: Some(6.into()),
            padding: Some(1.into()),
            ..px_props()
        };
        let scales = resolve_scales(&props);
        // px: no `px`/`paddingLeft`/`paddingRight`/`pl`, so `pr` wins.
        assert_eq!(scales.px.format(1.0), "calc(6 * px)");
        // py: nothing vertical supplied, shorthand wins.
        assert_eq!(scales.py.format(1.0), "calc(1 * px)");
    }

    #[test]
    fn margins_mirror_paddings() {
        let props = ScaleProps {
            margin_top: Some(5.into()),
            mt: Some(3.into()),
            my: Some(2.into()),
            margin: Some(1.into()),
            ..px_props()
        };
        let scales = resolve_scales(&props);
        assert_eq!(scales.mt.format(1.0), "calc(5 * px)");
        assert_eq!(scales.mb.format(1.0), "calc(2 * px)");
        assert_eq!(scales.ml.format(1.0), "calc(1 * px)");
        assert_eq!(scales.my.format(1.0), "calc(2 * px)");
    }

    #[test]
    fn width_and_height_take_their_aliases() {
        let props = ScaleProps {
            w: Some(10.into()),
            height: Some(4.into()),
            h: Some(7.into()),
            ..px_props()
        };
        let scales = resolve_scales(&props);
        assert_eq!(scales.width.format(1.0), "calc(10 * px)");
        assert_eq!(scales.height.format(1.0), "calc(4 * px)");
    }

    #[test]
    fn zero_resolves_instead_of_falling_through() {
        let props = ScaleProps {
            padding_top: Some(0.into()),
            padding: Some(8.into()),
            ..px_props()
        };
        let scales = resolve_scales(&props);
        assert_eq!(scales.pt.format(1.0), "calc(0 * px)");
    }

    #[test]
    fn unresolved_slots_use_default_substitution() {
        let scales = resolve_scales(&px_props());
        assert_eq!(scales.font.format(1.0), "calc(1 * px)");
        assert_eq!(scales.font.format_with_default(1.0, "14px"), "14px");
    }

    #[test]
    fn resolution_is_idempotent() {
        let props = ScaleProps {
            scale: 2.0,
            padding: Some(3.into()),
            width: Some("auto".into()),
            ..px_props()
        };
        let first = resolve_scales(&props);
        let second = resolve_scales(&props);
        assert_eq!(first, second);
        for slot in Slot::ALL {
            assert_eq!(first.get(slot).format(1.0), second.get(slot).format(1.0));
        }
    }

    #[test]
    fn get_covers_every_slot() {
        let scales = Scales::default();
        for slot in Slot::ALL {
            // Default props resolve nothing, so every slot sits in
            // default-substitution mode.
            assert!(scales.get(slot).value().is_none());
        }
    }
}
