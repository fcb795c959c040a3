//! Name-based conversion between unrelated enumerations.
//!
//! Two layers often declare "the same" closed set of values independently,
//! e.g. a settings-file enum and the enum a component consumes. Variants are
//! matched by name, ignoring case, never by discriminant.

use crate::utils::error::{Result, UtilsError};

/// A closed enumeration whose variants can be listed in declaration order
/// and rendered by their canonical name.
///
/// Implement it with [`named_variants!`](crate::named_variants) for
/// unit-variant enums.
pub trait NamedVariants: Copy + 'static {
    /// All variants, in declaration order.
    fn variants() -> &'static [Self];

    /// Canonical name of this variant.
    fn variant_name(&self) -> &'static str;
}

/// Implements [`NamedVariants`] for a unit-variant enum.
///
/// ```
/// use switcher_utils::named_variants;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Channel { Stable, Beta }
///
/// named_variants!(Channel { Stable, Beta });
/// ```
#[macro_export]
macro_rules! named_variants {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::utils::enums::NamedVariants for $ty {
            fn variants() -> &'static [Self] {
                &[$($ty::$variant),+]
            }

            fn variant_name(&self) -> &'static str {
                match self {
                    $($ty::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

/// Converts `value` to the variant of `D` with the same name.
///
/// `D`'s variants are scanned in declaration order and the first one whose
/// name equals `value`'s name ignoring case is returned.
pub fn convert_enum<S, D>(value: S) -> Result<D>
where
    S: NamedVariants,
    D: NamedVariants,
{
    let name = value.variant_name();

    D::variants()
        .iter()
        .copied()
        .find(|candidate| names_match(candidate.variant_name(), name))
        .ok_or_else(|| conversion_failed::<S, D>(name))
}

/// Converts `value` through an explicit `(source, destination)` table.
///
/// Prefer this over [`convert_enum`] when the two enumerations do not share
/// names; the first matching row wins.
pub fn convert_enum_with<S, D>(value: S, table: &[(S, D)]) -> Result<D>
where
    S: NamedVariants + PartialEq,
    D: NamedVariants,
{
    table
        .iter()
        .find(|(source, _)| *source == value)
        .map(|(_, dest)| *dest)
        .ok_or_else(|| conversion_failed::<S, D>(value.variant_name()))
}

/// Case-insensitive, locale-independent comparison of variant names.
fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}

fn conversion_failed<S, D>(name: &str) -> UtilsError {
    UtilsError::EnumConversionFailed {
        value: name.to_string(),
        source_type: std::any::type_name::<S>(),
        dest_type: std::any::type_name::<D>(),
    }
}
