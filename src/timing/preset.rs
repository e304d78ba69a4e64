//! The five named timing functions supplied out of the box.

use std::fmt;
use std::str::FromStr;

use super::TimingCurve;

/// Error returned when a preset identifier is not one of the known names.
///
/// # Examples
///
/// ```
/// use easewright::{Preset, UnknownPresetError};
///
/// let err = "bogus".parse::<Preset>().unwrap_err();
/// assert_eq!(err, UnknownPresetError::new("bogus"));
/// assert_eq!(err.to_string(), "unknown timing preset: 'bogus'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPresetError {
    name: String,
}

impl UnknownPresetError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The rejected identifier.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownPresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown timing preset: '{}'", self.name)
    }
}

impl std::error::Error for UnknownPresetError {}

/// A named timing function.
///
/// Variants are listed in display order; [`Preset::index`] is the row a
/// preset occupies in a selection list.
///
/// # Examples
///
/// ```
/// use easewright::Preset;
///
/// let preset: Preset = "ease-out".parse().unwrap();
/// assert_eq!(preset, Preset::EaseOut);
/// assert_eq!(preset.display_name(), "Ease Out");
/// assert_eq!(Preset::from_index(preset.index()), Some(preset));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Constant rate, `cubic-bezier(0, 0, 1, 1)`
    Linear,
    /// Slow start, `cubic-bezier(0.42, 0, 1, 1)`
    EaseIn,
    /// Slow finish, `cubic-bezier(0, 0, 0.58, 1)`
    EaseOut,
    /// Slow start and finish, `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInEaseOut,
    /// The platform default, `cubic-bezier(0.25, 0.1, 0.25, 1)`
    Default,
}

impl Preset {
    /// All presets in display order.
    pub const ALL: [Preset; 5] = [
        Preset::Linear,
        Preset::EaseIn,
        Preset::EaseOut,
        Preset::EaseInEaseOut,
        Preset::Default,
    ];

    /// Looks up a preset by its identifier.
    ///
    /// Identifiers are matched exactly: `linear`, `ease-in`, `ease-out`,
    /// `ease-in-ease-out` and `default`.
    pub fn from_name(name: &str) -> Result<Self, UnknownPresetError> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.identifier() == name)
            .ok_or_else(|| {
                log::debug!("rejected timing preset '{name}'");
                UnknownPresetError::new(name)
            })
    }

    /// Returns the preset shown at `row` of the selection list.
    pub fn from_index(row: usize) -> Option<Self> {
        Self::ALL.get(row).copied()
    }

    /// Finds the preset whose control points exactly equal `curve`'s.
    ///
    /// # Examples
    ///
    /// ```
    /// use easewright::{Preset, TimingCurve};
    ///
    /// let curve = TimingCurve::new(0.42, 0.0, 0.58, 1.0);
    /// assert_eq!(Preset::matching(&curve), Some(Preset::EaseInEaseOut));
    ///
    /// let custom = TimingCurve::new(0.1, 0.7, 1.0, 0.1);
    /// assert_eq!(Preset::matching(&custom), None);
    /// ```
    pub fn matching(curve: &TimingCurve) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.curve() == *curve)
    }

    /// Row of this preset in display order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Machine-readable identifier.
    pub fn identifier(self) -> &'static str {
        match self {
            Preset::Linear => "linear",
            Preset::EaseIn => "ease-in",
            Preset::EaseOut => "ease-out",
            Preset::EaseInEaseOut => "ease-in-ease-out",
            Preset::Default => "default",
        }
    }

    /// Human-readable title for a selection list.
    pub fn display_name(self) -> &'static str {
        match self {
            Preset::Linear => "Linear",
            Preset::EaseIn => "Ease In",
            Preset::EaseOut => "Ease Out",
            Preset::EaseInEaseOut => "Ease In Out",
            Preset::Default => "Default",
        }
    }

    /// The timing curve this preset names.
    pub const fn curve(self) -> TimingCurve {
        match self {
            Preset::Linear => TimingCurve::new(0.0, 0.0, 1.0, 1.0),
            Preset::EaseIn => TimingCurve::new(0.42, 0.0, 1.0, 1.0),
            Preset::EaseOut => TimingCurve::new(0.0, 0.0, 0.58, 1.0),
            Preset::EaseInEaseOut => TimingCurve::new(0.42, 0.0, 0.58, 1.0),
            Preset::Default => TimingCurve::new(0.25, 0.1, 0.25, 1.0),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Preset {
    type Err = UnknownPresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl From<Preset> for TimingCurve {
    fn from(preset: Preset) -> Self {
        preset.curve()
    }
}

/// The preset table: `(display name, curve)` pairs in display order.
///
/// # Examples
///
/// ```
/// let titles: Vec<&str> = easewright::presets().map(|(name, _)| name).collect();
/// assert_eq!(titles, ["Linear", "Ease In", "Ease Out", "Ease In Out", "Default"]);
/// ```
pub fn presets() -> impl Iterator<Item = (&'static str, TimingCurve)> {
    Preset::ALL
        .into_iter()
        .map(|preset| (preset.display_name(), preset.curve()))
}
