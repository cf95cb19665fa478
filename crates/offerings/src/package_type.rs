//! Package type classification.
//!
//! Maps the canonical wire-format strings (`$rc_monthly`, ...) to a typed
//! [`PackageType`] and back. Classification is total: every input string,
//! including the empty string, lands on exactly one variant.
//!
//! | Canonical string  | Variant                  |
//! |-------------------|--------------------------|
//! | `$rc_lifetime`    | [`PackageType::Lifetime`]   |
//! | `$rc_annual`      | [`PackageType::Annual`]     |
//! | `$rc_six_month`   | [`PackageType::SixMonth`]   |
//! | `$rc_three_month` | [`PackageType::ThreeMonth`] |
//! | `$rc_two_month`   | [`PackageType::TwoMonth`]   |
//! | `$rc_monthly`     | [`PackageType::Monthly`]    |
//! | `$rc_weekly`      | [`PackageType::Weekly`]     |
//!
//! Anything else that starts with [`RESERVED_PREFIX`] is [`PackageType::Unknown`];
//! everything remaining is [`PackageType::Custom`].

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Leading token reserved for predefined package types.
pub const RESERVED_PREFIX: &str = "$rc_";

pub const LIFETIME: &str = "$rc_lifetime";
pub const ANNUAL: &str = "$rc_annual";
pub const SIX_MONTH: &str = "$rc_six_month";
pub const THREE_MONTH: &str = "$rc_three_month";
pub const TWO_MONTH: &str = "$rc_two_month";
pub const MONTHLY: &str = "$rc_monthly";
pub const WEEKLY: &str = "$rc_weekly";

/// Classification of a package.
///
/// `Unknown` and `Custom` are ordinary outcomes, not failures:
/// - `Unknown` means the identifier uses the reserved namespace but names a
///   type this build does not know (most likely one added after this release).
///   Treat it as a forward-compatibility signal.
/// - `Custom` means the identifier is caller-defined.
///
/// Serializes as the snake_case variant name (`"six_month"`); that is a
/// reporting shape, not the canonical wire string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    Unknown,
    Custom,
    Lifetime,
    Annual,
    SixMonth,
    ThreeMonth,
    TwoMonth,
    Monthly,
    Weekly,
}

impl PackageType {
    /// The seven predefined variants, in canonical order.
    pub const PREDEFINED: [PackageType; 7] = [
        PackageType::Lifetime,
        PackageType::Annual,
        PackageType::SixMonth,
        PackageType::ThreeMonth,
        PackageType::TwoMonth,
        PackageType::Monthly,
        PackageType::Weekly,
    ];

    /// Canonical wire string, `None` for `Unknown` and `Custom`.
    pub fn canonical_string(self) -> Option<&'static str> {
        PackageTypeRegistry::canonical_string(self)
    }

    /// Whether this variant has a canonical string.
    pub fn is_predefined(self) -> bool {
        self.canonical_string().is_some()
    }
}

impl From<&str> for PackageType {
    fn from(value: &str) -> Self {
        PackageTypeRegistry::classify(value)
    }
}

impl core::fmt::Display for PackageType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.canonical_string() {
            Some(s) => f.write_str(s),
            None if *self == PackageType::Unknown => f.write_str("unknown"),
            None => f.write_str("custom"),
        }
    }
}

static CANONICAL_TABLE: LazyLock<HashMap<&'static str, PackageType>> = LazyLock::new(|| {
    PackageType::PREDEFINED
        .iter()
        .filter_map(|ty| ty.canonical_string().map(|s| (s, *ty)))
        .collect()
});

/// Stateless registry for the canonical string <-> [`PackageType`] mapping.
///
/// Safe to call from any thread: the lookup table is built once and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageTypeRegistry;

impl PackageTypeRegistry {
    /// Render a type back to its canonical string.
    pub fn canonical_string(package_type: PackageType) -> Option<&'static str> {
        match package_type {
            PackageType::Lifetime => Some(LIFETIME),
            PackageType::Annual => Some(ANNUAL),
            PackageType::SixMonth => Some(SIX_MONTH),
            PackageType::ThreeMonth => Some(THREE_MONTH),
            PackageType::TwoMonth => Some(TWO_MONTH),
            PackageType::Monthly => Some(MONTHLY),
            PackageType::Weekly => Some(WEEKLY),
            PackageType::Unknown | PackageType::Custom => None,
        }
    }

    /// Classify an arbitrary string.
    ///
    /// Exact, case-sensitive table match wins over the prefix test, so
    /// `"$rc_monthly"` is `Monthly` even though it also carries the reserved
    /// prefix. No trimming or case folding is applied.
    pub fn classify(value: &str) -> PackageType {
        if let Some(ty) = CANONICAL_TABLE.get(value) {
            return *ty;
        }
        if value.starts_with(RESERVED_PREFIX) {
            PackageType::Unknown
        } else {
            PackageType::Custom
        }
    }
}
