//! Discrete failure codes for the three-parameter outcome family.

use std::borrow::Cow;
use std::fmt;

/// A type usable as the discrete failure code of a [`CResult`](crate::CResult).
///
/// Enumerations derive this trait with `#[derive(DiscreteCode)]`, which lists
/// every unit variant as a member. Non-enumerated types also implement it
/// (with no members) so that a declaration naming, say, `i32` as its code type
/// still compiles; the declaration validator reports the mistake and every
/// coded failure for that declaration is rejected.
pub trait DiscreteCode: fmt::Debug + Clone + PartialEq + Send + Sync + 'static {
    /// Name of the code type as written in declarations.
    const TYPE_NAME: &'static str;

    /// Declared members, or `None` when the type is not a closed enumeration.
    fn members() -> Option<&'static [Self]>;

    /// Symbolic name of this code, used when rendering outcomes.
    fn name(&self) -> Cow<'static, str>;

    /// Returns `true` when `self` is one of the declared members.
    fn is_member(&self) -> bool {
        Self::members().is_some_and(|members| members.contains(self))
    }
}

/// Code type bound when a declaration's code parameter cannot be resolved.
///
/// `Unbound` has no values, so coded failures cannot be built for such a
/// declaration; success values remain available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unbound {}

impl DiscreteCode for Unbound {
    const TYPE_NAME: &'static str = "Unbound";

    fn members() -> Option<&'static [Self]> {
        None
    }

    fn name(&self) -> Cow<'static, str> {
        match *self {}
    }
}

macro_rules! open_code {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DiscreteCode for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn members() -> Option<&'static [Self]> {
                    None
                }

                fn name(&self) -> Cow<'static, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

open_code!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String,
    &'static str,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiscreteCode;
    use rstest::rstest;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, DiscreteCode)]
    enum Probe {
        Ready,
        Stalled,
    }

    #[rstest]
    fn derived_codes_list_every_variant() {
        assert_eq!(Probe::members(), Some(&[Probe::Ready, Probe::Stalled][..]));
        assert_eq!(Probe::TYPE_NAME, "Probe");
        assert_eq!(Probe::Stalled.name(), "Stalled");
        assert!(Probe::Ready.is_member());
    }

    #[rstest]
    #[case::integer(<i32 as DiscreteCode>::members().is_none())]
    #[case::text(<String as DiscreteCode>::members().is_none())]
    #[case::unbound(<Unbound as DiscreteCode>::members().is_none())]
    fn open_types_have_no_members(#[case] open: bool) {
        assert!(open);
    }

    #[rstest]
    fn open_codes_are_never_members() {
        assert!(!7_i32.is_member());
        assert_eq!(7_i32.name(), "7");
    }
}
