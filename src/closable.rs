// SPDX-License-Identifier: MPL-2.0
//! Close-affordance configuration and its resolution.
//!
//! [`Closable`] is the caller-facing union: absent, enabled with the default
//! affordance, or customized through a [`CloseDescriptor`]. Resolving it
//! against the default icon yields a [`ResolvedClose`], the data the render
//! layer needs: which glyph to show and which accessibility attributes apply.

use std::collections::BTreeMap;

/// Bare attribute keys recognized by [`pick_accessibility`] in addition to
/// the `aria-` prefix.
const ALLOWED_BARE_KEYS: &[&str] = &["role"];

/// Accessible label of the close affordance when the descriptor does not
/// override it via `aria-label`.
pub const DEFAULT_CLOSE_LABEL: &str = "Close";

/// Close affordance configuration for a notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Closable {
    /// No close affordance is rendered.
    #[default]
    Disabled,
    /// Close affordance with the default icon.
    Enabled,
    /// Close affordance with a custom icon and/or accessibility attributes.
    Custom(CloseDescriptor),
}

/// Customization of the close affordance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloseDescriptor {
    /// Icon override. `None` renders an affordance with no glyph; the
    /// default icon does not apply to customized affordances.
    pub icon: Option<String>,
    /// Attribute bag. Only accessibility keys survive resolution; the rest
    /// are dropped silently.
    pub attrs: BTreeMap<String, String>,
}

impl CloseDescriptor {
    /// Creates an empty descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the icon override.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Adds an attribute to the bag.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// Outcome of resolving a [`Closable`] against the default icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClose {
    icon: Option<String>,
    attrs: BTreeMap<String, String>,
}

impl ResolvedClose {
    /// Glyph to render inside the affordance, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Accessibility attributes to apply to the affordance.
    #[must_use]
    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    /// Accessible label: the `aria-label` attribute when present, otherwise
    /// [`DEFAULT_CLOSE_LABEL`].
    #[must_use]
    pub fn label(&self) -> &str {
        self.attrs
            .get("aria-label")
            .map_or(DEFAULT_CLOSE_LABEL, String::as_str)
    }
}

impl Closable {
    /// Whether a close affordance is rendered at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Closable::Disabled)
    }

    /// Resolves the configuration to affordance data.
    ///
    /// A custom descriptor is used directly (its icon, its filtered
    /// attributes); `Enabled` synthesizes a descriptor carrying only the
    /// default icon; `Disabled` resolves to nothing.
    #[must_use]
    pub fn resolve(&self, default_icon: &str) -> Option<ResolvedClose> {
        match self {
            Closable::Custom(descriptor) => Some(ResolvedClose {
                icon: descriptor.icon.clone(),
                attrs: pick_accessibility(&descriptor.attrs),
            }),
            Closable::Enabled => Some(ResolvedClose {
                icon: Some(default_icon.to_owned()),
                attrs: BTreeMap::new(),
            }),
            Closable::Disabled => None,
        }
    }
}

/// Keeps only recognized accessibility attributes: keys starting with
/// `aria-` plus the allow-listed bare keys. Everything else is discarded.
#[must_use]
pub fn pick_accessibility(attrs: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    attrs
        .iter()
        .filter(|(key, _)| key.starts_with("aria-") || ALLOWED_BARE_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
