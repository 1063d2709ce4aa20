/// An enumerated protocol field, sent on the wire as a [string] holding its name.
///
/// Names are the upper-snake-case spelling used by the protocol (`NEW_NODE`, `SCHEMA_CHANGE`).
/// `from_name` is the inverse of `name` and returns `None` for anything else, which lets the
/// reader reject unknown names before any caller has to match on them.
pub trait EnumValue: Sized + 'static {
    /// All values, in declaration order.
    const VALUES: &'static [Self];

    /// Returns the wire name of the value.
    fn name(&self) -> &'static str;

    /// Looks up a value by its wire name.
    fn from_name(name: &str) -> Option<Self>;
}

/// Implements `EnumValue` for a fieldless enum from a `Variant => "NAME"` table.
macro_rules! enum_value {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $crate::protocol::protocol_notations::enum_value::EnumValue for $ty {
            const VALUES: &'static [Self] = &[$($ty::$variant),+];

            fn name(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some($ty::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use $crate::protocol::protocol_notations::enum_value::EnumValue;
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use enum_value;
