/// Conversion from the lexical form of an attribute to its typed value.
///
/// `convert` returns `None` if the lexical form is not valid for the type; the caller turns that
/// into a structural error naming the offending element and attribute.
pub trait AttributeValue: Sized {
    /// Human readable name of the expected value space, used in error messages.
    const EXPECTED: &'static str;

    fn convert(src: &str) -> Option<Self>;
}

impl AttributeValue for String {
    const EXPECTED: &'static str = "string";

    fn convert(src: &str) -> Option<Self> {
        Some(src.to_string())
    }
}

/// Attribute flags follow the DoxBool convention: `yes` (in any case) is true, every other value
/// is false. This is deliberately not a general boolean parser.
impl AttributeValue for bool {
    const EXPECTED: &'static str = "yes/no flag";

    fn convert(src: &str) -> Option<Self> {
        Some(src.eq_ignore_ascii_case("yes"))
    }
}

impl AttributeValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn convert(src: &str) -> Option<Self> {
        src.trim().parse().ok()
    }
}

impl AttributeValue for u32 {
    const EXPECTED: &'static str = "non-negative integer";

    fn convert(src: &str) -> Option<Self> {
        src.trim().parse().ok()
    }
}

/// Boolean element content: `true` (in any case) is true, empty content is false, anything else
/// is invalid.
pub fn content_bool(src: &str) -> Option<bool> {
    let src = src.trim();
    if src.is_empty() {
        Some(false)
    } else if src.eq_ignore_ascii_case("true") {
        Some(true)
    } else {
        None
    }
}

/// Boolean settings in the configuration dump are written `YES`/`NO`. The `true`/empty form of
/// [`content_bool`] is accepted too.
pub fn setting_bool(src: &str) -> Option<bool> {
    content_bool(src).or_else(|| {
        let src = src.trim();
        if src.eq_ignore_ascii_case("yes") {
            Some(true)
        } else if src.eq_ignore_ascii_case("no") {
            Some(false)
        } else {
            None
        }
    })
}

/// Numeric element content. Empty content is "not a number" (`Some(None)`), which is legitimate
/// for optional integer settings; non-numeric text is invalid (`None`).
pub fn content_number(src: &str) -> Option<Option<i64>> {
    let src = src.trim();
    if src.is_empty() {
        Some(None)
    } else {
        src.parse().ok().map(Some)
    }
}

/// Declares a closed enumeration of string tokens together with its [`AttributeValue`]
/// conversion.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($expected:literal) {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl $crate::values::AttributeValue for $name {
            const EXPECTED: &'static str = $expected;

            fn convert(src: &str) -> Option<Self> {
                match src {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use string_enum;
