// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_scale --heading-base-level=0

//! Overstory Scale: responsive scale/spacing resolution for UI components.
//!
//! This crate is the computation core behind scaleable components: given a
//! set of shorthand dimension props (`padding`, `pt`, `mx`, `width`, …), a
//! global scale factor, and a CSS unit, it produces deterministic,
//! CSS-ready dimension strings. It is renderer-agnostic and does no I/O;
//! host frameworks own the widgets, the DOM, and the change notifications.
//!
//! The core concepts are:
//!
//! - [`ScaleValue`]: a raw prop value — a number, a numeric string (scaled
//!   like a number), or a literal string like `"auto"` that is passed
//!   through verbatim.
//! - [`ScaleProps`]: the fixed record of every dimension prop a host can
//!   supply, plus the scale factor and unit.
//! - [`reduce_scale_coefficient`]: dampens the raw factor by halving its
//!   distance from 1, so `scale = 2` adjusts dimensions by 1.5×, not 2×.
//! - [`resolve_scales`]: walks each slot's precedence chain (long-form edge
//!   → alias → axis → shorthand) and builds a [`Scales`] map of fifteen
//!   [`SlotFormatter`]s, one per [`Slot`].
//! - [`ScaleProvider`] / [`ScaleContext`] / [`use_scale`]: the single-writer
//!   publish path. Every prop change re-resolves the whole map and swaps an
//!   immutable [`Arc`](alloc::sync::Arc) snapshot; readers hold handles and
//!   never see a partial update.
//! - [`WithScale`] / [`ScaleConsumer`]: the component wrapper — it claims
//!   scale props out of an attribute bag, publishes the context, and hands
//!   the wrapped component everything else untouched.
//!
//! ## Minimal example
//!
//! Resolving a padding chain by hand:
//!
//! ```rust
//! use overstory_scale::{ScaleProps, resolve_scales};
//!
//! let props = ScaleProps {
//!     unit: "px".into(),
//!     padding_top: Some(2.into()),
//!     padding: Some(10.into()),
//!     ..ScaleProps::default()
//! };
//! let scales = resolve_scales(&props);
//!
//! // `paddingTop` outranks the `padding` shorthand for the top edge…
//! assert_eq!(scales.pt.format(1.0), "calc(2 * px)");
//! // …while the other edges fall through to it.
//! assert_eq!(scales.pl.format(1.0), "calc(10 * px)");
//! // Unresolved slots emit the bare coefficient.
//! assert_eq!(scales.width.format(1.0), "calc(1 * px)");
//! // Literals escape scaling entirely.
//! let auto = ScaleProps {
//!     width: Some("auto".into()),
//!     ..props
//! };
//! assert_eq!(resolve_scales(&auto).width.format(1.0), "auto");
//! ```
//!
//! ## Publishing to nested consumers
//!
//! ```rust
//! use overstory_scale::{ScaleProp, ScaleProps, ScaleProvider, use_scale};
//!
//! let mut provider = ScaleProvider::new(ScaleProps {
//!     unit: "px".into(),
//!     ..ScaleProps::default()
//! });
//! let stale = provider.context();
//!
//! provider.set(ScaleProp::Font, Some(2.into()));
//!
//! let fresh = use_scale(Some(&provider.context()));
//! assert_eq!(fresh.scales().font.format(1.0), "calc(2 * px)");
//! // Handles taken before the change still see the old map, whole.
//! assert_eq!(stale.scales().font.format(1.0), "calc(1 * px)");
//! // And with no provider in scope, consumers get a working default.
//! assert_eq!(use_scale(None).unit(), "16px");
//! ```
//!
//! ## Known quirk
//!
//! A formatter invoked with a base scale of `0.0` behaves exactly as if no
//! base scale was provided: the base is coerced to `1.0` and an absent (or
//! falsy) default value becomes `0`. Zero is therefore unusable as a
//! legitimate "no scaling" weight. Existing consumers rely on this, so it is
//! preserved rather than fixed; see [`SlotFormatter`] for details.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod coefficient;
mod context;
mod formatter;
mod props;
mod resolve;
mod value;

pub use coefficient::reduce_scale_coefficient;
pub use context::{ScaleConsumer, ScaleContext, ScaleProvider, WithScale, use_scale};
pub use formatter::SlotFormatter;
pub use props::{DEFAULT_SCALE, DEFAULT_UNIT, PropBag, ScaleProp, ScaleProps, extract_scale_props};
pub use resolve::{Scales, Slot, resolve_scales};
pub use value::ScaleValue;
