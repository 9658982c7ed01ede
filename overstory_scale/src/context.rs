// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Publishing resolved scales to consumers: the context snapshot, the
//! provider that owns and republishes it, and the component wrapper.
//!
//! Ambient injection is replaced by explicit handles: a provider republishes
//! an immutable [`Arc`] snapshot after every prop change, and consumers
//! either hold a snapshot handle or fall back to the detached context. An
//! old handle stays internally consistent across republishes — readers never
//! observe a partially updated map.

use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::sync::Arc;

use crate::props::{PropBag, ScaleProp, ScaleProps, extract_scale_props};
use crate::resolve::{Scales, resolve_scales};
use crate::value::ScaleValue;

/// An immutable snapshot of one provider's resolved scale state.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleContext {
    scales: Scales,
    unit: String,
    props: ScaleProps,
}

impl ScaleContext {
    /// Resolve a full context from the supplied props.
    #[must_use]
    pub fn new(props: ScaleProps) -> Self {
        Self {
            scales: resolve_scales(&props),
            unit: props.unit.clone(),
            props,
        }
    }

    /// The context a consumer sees with no provider in scope: default unit,
    /// a default-resolved map, and a scaleable-props accessor that always
    /// yields the empty string (default props supply no dimension values, so
    /// no candidate list can ever match).
    #[must_use]
    pub fn detached() -> Self {
        Self::new(ScaleProps::default())
    }

    /// The resolved formatter map.
    #[must_use]
    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    /// The CSS unit in effect.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The props this context was resolved from.
    #[must_use]
    pub fn props(&self) -> &ScaleProps {
        &self.props
    }

    /// Scan `candidates` in order and return the **last** supplied raw prop
    /// value, or the empty string if none is supplied.
    ///
    /// Note the direction: unlike chain resolution, where the first match
    /// wins, here every supplied value overwrites the running result. The
    /// two rules are distinct on purpose and must not be unified.
    ///
    /// ```
    /// use overstory_scale::{PropBag, ScaleContext, ScaleProp, extract_scale_props};
    ///
    /// let mut attrs = PropBag::new();
    /// attrs.insert("width".into(), 1.into());
    /// attrs.insert("height".into(), 3.into());
    /// let context = ScaleContext::new(extract_scale_props(&mut attrs));
    ///
    /// let candidates = [ScaleProp::Width, ScaleProp::Font, ScaleProp::Height];
    /// assert_eq!(context.get_scaleable_props(&candidates), 3.into());
    /// ```
    #[must_use]
    pub fn get_scaleable_props(&self, candidates: &[ScaleProp]) -> ScaleValue {
        self.props
            .last_defined(candidates)
            .cloned()
            .unwrap_or_else(|| ScaleValue::Literal(String::new()))
    }
}

impl Default for ScaleContext {
    fn default() -> Self {
        Self::detached()
    }
}

/// Read the nearest provider's context, or the detached fallback.
///
/// Consumers receive the handle explicitly rather than via ambient lookup;
/// passing `None` models "no ancestor published a context" and never fails.
#[must_use]
pub fn use_scale(context: Option<&Arc<ScaleContext>>) -> Arc<ScaleContext> {
    match context {
        Some(context) => Arc::clone(context),
        None => Arc::new(ScaleContext::detached()),
    }
}

/// The single writer of a scale context.
///
/// Owns the input props and the currently published snapshot. Every mutation
/// re-resolves all fifteen slots and swaps the snapshot wholesale, so any
/// number of readers can keep cheap [`Arc`] handles without ever seeing a
/// half-updated map.
///
/// ```
/// use overstory_scale::{ScaleProp, ScaleProps, ScaleProvider};
///
/// let mut provider = ScaleProvider::new(ScaleProps {
///     unit: "px".into(),
///     ..ScaleProps::default()
/// });
/// let before = provider.context();
///
/// provider.set(ScaleProp::PaddingTop, Some(2.into()));
/// let after = provider.context();
///
/// // The old snapshot is untouched; the new one sees the change.
/// assert_eq!(before.scales().pt.format(1.0), "calc(1 * px)");
/// assert_eq!(after.scales().pt.format(1.0), "calc(2 * px)");
/// ```
#[derive(Clone, Debug)]
pub struct ScaleProvider {
    props: ScaleProps,
    published: Arc<ScaleContext>,
}

impl ScaleProvider {
    /// Create a provider and publish its initial snapshot.
    #[must_use]
    pub fn new(props: ScaleProps) -> Self {
        let published = Arc::new(ScaleContext::new(props.clone()));
        Self { props, published }
    }

    /// A handle to the currently published snapshot.
    #[must_use]
    pub fn context(&self) -> Arc<ScaleContext> {
        Arc::clone(&self.published)
    }

    /// The current input props.
    #[must_use]
    pub fn props(&self) -> &ScaleProps {
        &self.props
    }

    /// Set or clear one dimension prop and republish.
    pub fn set(&mut self, prop: ScaleProp, value: Option<ScaleValue>) {
        self.props.set(prop, value);
        self.republish();
    }

    /// Change the scale factor and republish.
    pub fn set_scale(&mut self, scale: f64) {
        self.props.scale = scale;
        self.republish();
    }

    /// Change the unit and republish.
    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.props.unit = unit.into();
        self.republish();
    }

    /// Apply several prop changes at once, republishing once at the end.
    pub fn update(&mut self, f: impl FnOnce(&mut ScaleProps)) {
        f(&mut self.props);
        self.republish();
    }

    fn republish(&mut self) {
        self.published = Arc::new(ScaleContext::new(self.props.clone()));
    }
}

impl Default for ScaleProvider {
    fn default() -> Self {
        Self::new(ScaleProps::default())
    }
}

/// A host component that consumes resolved scale values.
///
/// The wrapper hands implementations the published context plus every
/// attribute the scale system did not claim.
pub trait ScaleConsumer {
    /// Whatever rendering produces for the host.
    type Output;

    /// Render against the current context and passthrough attributes.
    fn render(&mut self, context: &ScaleContext, attrs: &PropBag) -> Self::Output;
}

/// Wrap a component so it scales: split an attribute bag into scale props
/// and passthrough attrs, publish the context, and keep republishing as
/// attributes change.
///
/// ```
/// use overstory_scale::{PropBag, ScaleConsumer, ScaleContext, WithScale};
///
/// struct Badge;
///
/// impl ScaleConsumer for Badge {
///     type Output = String;
///     fn render(&mut self, context: &ScaleContext, attrs: &PropBag) -> String {
///         let class = attrs.get("class").map(|v| v.to_string()).unwrap_or_default();
///         format!("<i class=\"{class}\">{}</i>", context.scales().font.format(1.0))
///     }
/// }
///
/// let mut attrs = PropBag::new();
/// attrs.insert("unit".into(), "px".into());
/// attrs.insert("font".into(), 2.into());
/// attrs.insert("class".into(), "badge".into());
///
/// let mut badge = WithScale::new(Badge, attrs);
/// assert_eq!(badge.render(), "<i class=\"badge\">calc(2 * px)</i>");
///
/// badge.set_attr("font", 3.into());
/// assert_eq!(badge.render(), "<i class=\"badge\">calc(3 * px)</i>");
/// ```
#[derive(Clone, Debug)]
pub struct WithScale<C> {
    inner: C,
    attrs: PropBag,
    provider: ScaleProvider,
}

impl<C> WithScale<C> {
    /// Wrap `inner`, claiming every scale prop in `attrs` for the provider
    /// and keeping the rest for passthrough.
    #[must_use]
    pub fn new(inner: C, mut attrs: PropBag) -> Self {
        let props = extract_scale_props(&mut attrs);
        Self {
            inner,
            attrs,
            provider: ScaleProvider::new(props),
        }
    }

    /// A handle to the published context, for nesting further consumers.
    #[must_use]
    pub fn context(&self) -> Arc<ScaleContext> {
        self.provider.context()
    }

    /// The provider backing this wrapper.
    #[must_use]
    pub fn provider(&self) -> &ScaleProvider {
        &self.provider
    }

    /// The attributes left for the wrapped component.
    #[must_use]
    pub fn attrs(&self) -> &PropBag {
        &self.attrs
    }

    /// The wrapped component.
    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    /// Route an attribute change: scale-owned names go to the provider and
    /// trigger a republish, everything else lands in the passthrough bag.
    /// A non-numeric `scale` is dropped silently, like every other invalid
    /// input in this system.
    pub fn set_attr(&mut self, name: &str, value: ScaleValue) {
        match name {
            "scale" => {
                if let Some(scale) = value.as_number() {
                    self.provider.set_scale(scale);
                }
            }
            "unit" => self.provider.set_unit(value.to_string()),
            _ => match ScaleProp::from_name(name) {
                Some(prop) => self.provider.set(prop, Some(value)),
                None => {
                    self.attrs.insert(name.to_owned(), value);
                }
            },
        }
    }

    /// Remove an attribute, wherever it lives.
    pub fn remove_attr(&mut self, name: &str) {
        match ScaleProp::from_name(name) {
            Some(prop) => self.provider.set(prop, None),
            None => {
                self.attrs.remove(name);
            }
        }
    }
}

impl<C: ScaleConsumer> WithScale<C> {
    /// Render the wrapped component against the current snapshot.
    pub fn render(&mut self) -> C::Output {
        let context = self.provider.context();
        self.inner.render(&context, &self.attrs)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::{ScaleConsumer, ScaleContext, ScaleProvider, WithScale, use_scale};
    use crate::props::{DEFAULT_UNIT, PropBag, ScaleProp, ScaleProps};
    use crate::value::ScaleValue;

    #[test]
    fn detached_context_uses_defaults() {
        let context = use_scale(None);
        assert_eq!(context.unit(), DEFAULT_UNIT);
        assert_eq!(context.scales().pt.format(1.0), "calc(1 * 16px)");
        assert_eq!(
            context.get_scaleable_props(&[ScaleProp::Width, ScaleProp::Height]),
            "".into()
        );
    }

    #[test]
    fn use_scale_returns_the_published_snapshot() {
        let provider = ScaleProvider::new(ScaleProps {
            unit: "rem".into(),
            ..ScaleProps::default()
        });
        let handle = provider.context();
        let context = use_scale(Some(&handle));
        assert_eq!(context.unit(), "rem");
        assert!(alloc::sync::Arc::ptr_eq(&handle, &context));
    }

    #[test]
    fn scaleable_props_accessor_takes_the_last_supplied() {
        let context = ScaleContext::new(ScaleProps {
            width: Some(1.into()),
            height: Some(3.into()),
            ..ScaleProps::default()
        });
        assert_eq!(
            context.get_scaleable_props(&[
                ScaleProp::Width,
                ScaleProp::Font,
                ScaleProp::Height
            ]),
            3.into()
        );
        assert_eq!(
            context.get_scaleable_props(&[ScaleProp::Height, ScaleProp::Width]),
            1.into()
        );
        assert_eq!(context.get_scaleable_props(&[ScaleProp::Font]), "".into());
    }

    #[test]
    fn republish_swaps_the_snapshot_wholesale() {
        let mut provider = ScaleProvider::new(ScaleProps {
            unit: "px".into(),
            padding_top: Some(2.into()),
            ..ScaleProps::default()
        });
        let before = provider.context();

        provider.update(|props| {
            props.padding_top = Some(9.into());
            props.scale = 2.0;
        });
        let after = provider.context();

        // The old handle still resolves with the old inputs.
        assert_eq!(before.scales().pt.format(1.0), "calc(2 * px)");
        // The new one reflects both changes in a single swap.
        assert_eq!(after.scales().pt.format(1.0), "calc(13.5 * px)");
        assert!(!alloc::sync::Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn setters_republish_immediately() {
        let mut provider = ScaleProvider::default();
        provider.set_unit("px");
        provider.set(ScaleProp::Width, Some("auto".into()));
        let context = provider.context();
        assert_eq!(context.unit(), "px");
        assert_eq!(context.scales().width.format(1.0), "auto");

        provider.set(ScaleProp::Width, None);
        assert_eq!(provider.context().scales().width.format(1.0), "calc(1 * px)");
    }

    struct Probe;

    impl ScaleConsumer for Probe {
        type Output = (String, Vec<String>);

        fn render(&mut self, context: &ScaleContext, attrs: &PropBag) -> Self::Output {
            let mut names: Vec<String> = attrs.keys().cloned().collect();
            names.sort();
            (format!("pt:{}", context.scales().pt.format(1.0)), names)
        }
    }

    #[test]
    fn wrapper_splits_scale_props_from_passthrough_attrs() {
        let mut attrs = PropBag::new();
        attrs.insert("unit".into(), "px".into());
        attrs.insert("paddingTop".into(), 2.into());
        attrs.insert("padding".into(), 10.into());
        attrs.insert("class".into(), "drawer".into());
        attrs.insert("open".into(), "true".into());

        let mut wrapped = WithScale::new(Probe, attrs);
        let (pt, names) = wrapped.render();
        assert_eq!(pt, "pt:calc(2 * px)");
        assert_eq!(names, ["class".to_string(), "open".to_string()]);
    }

    #[test]
    fn attr_changes_route_to_the_right_side() {
        let mut wrapped = WithScale::new(Probe, PropBag::new());
        wrapped.set_attr("unit", "px".into());
        wrapped.set_attr("pt", 4.into());
        wrapped.set_attr("title", "hello".into());

        let (pt, names) = wrapped.render();
        assert_eq!(pt, "pt:calc(4 * px)");
        assert_eq!(names, ["title".to_string()]);

        // A non-numeric scale is dropped, not applied.
        wrapped.set_attr("scale", "big".into());
        assert_eq!(wrapped.provider().props().scale, 1.0);

        wrapped.remove_attr("pt");
        wrapped.remove_attr("title");
        let (pt, names) = wrapped.render();
        assert_eq!(pt, "pt:calc(1 * px)");
        assert!(names.is_empty());
    }

    #[test]
    fn nested_consumers_share_one_snapshot() {
        let mut attrs = PropBag::new();
        attrs.insert("unit".into(), "px".into());
        attrs.insert("font".into(), ScaleValue::Number(1.25));
        let wrapped = WithScale::new(Probe, attrs);

        let child = use_scale(Some(&wrapped.context()));
        let grandchild = use_scale(Some(&child));
        assert_eq!(grandchild.scales().font.format(1.0), "calc(1.25 * px)");
        assert!(alloc::sync::Arc::ptr_eq(&child, &grandchild));
    }
}
