//! Tagged values.
//!
//! Every value handed to the formatter or scanner carries an explicit
//! [`Kind`] chosen where the value is built. `%T` renders that tag; the
//! scanner uses it to decide how to convert input text.

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// The closed set of value kinds.
///
/// `Int`/`Uint` are the 64-bit machine-word kinds, distinct from the
/// explicitly sized `Int64`/`Uint64` only in their type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    Bool,
}

impl Kind {
    pub const ALL: [Kind; 14] = [
        Kind::Int,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::Uint,
        Kind::Uint8,
        Kind::Uint16,
        Kind::Uint32,
        Kind::Uint64,
        Kind::Float32,
        Kind::Float64,
        Kind::String,
        Kind::Bool,
    ];

    /// Type name rendered by `%T`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::String => "string",
            Kind::Bool => "bool",
        }
    }

    /// Inverse of [`Kind::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.int_bits().is_some()
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Kind::Float32 | Kind::Float64)
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Kind::Int | Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64
        ) || self.is_float()
    }

    /// Bit width of integer kinds, `None` otherwise.
    #[must_use]
    pub const fn int_bits(self) -> Option<u32> {
        match self {
            Kind::Int8 | Kind::Uint8 => Some(8),
            Kind::Int16 | Kind::Uint16 => Some(16),
            Kind::Int32 | Kind::Uint32 => Some(32),
            Kind::Int | Kind::Int64 | Kind::Uint | Kind::Uint64 => Some(64),
            _ => None,
        }
    }

    /// The zero value of this kind.
    #[must_use]
    pub fn zero(self) -> Value {
        match self {
            Kind::Int => Value::Int(0),
            Kind::Int8 => Value::Int8(0),
            Kind::Int16 => Value::Int16(0),
            Kind::Int32 => Value::Int32(0),
            Kind::Int64 => Value::Int64(0),
            Kind::Uint => Value::Uint(0),
            Kind::Uint8 => Value::Uint8(0),
            Kind::Uint16 => Value::Uint16(0),
            Kind::Uint32 => Value::Uint32(0),
            Kind::Uint64 => Value::Uint64(0),
            Kind::Float32 => Value::Float32(0.0),
            Kind::Float64 => Value::Float64(0.0),
            Kind::String => Value::String(String::new()),
            Kind::Bool => Value::Bool(false),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// A value tagged with its [`Kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(u64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
    Bool(bool),
}

impl Value {
    /// A machine-word signed integer (`int`).
    #[must_use]
    pub const fn int(v: i64) -> Self {
        Value::Int(v)
    }

    /// A machine-word unsigned integer (`uint`).
    #[must_use]
    pub const fn uint(v: u64) -> Self {
        Value::Uint(v)
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Int8(_) => Kind::Int8,
            Value::Int16(_) => Kind::Int16,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::Uint(_) => Kind::Uint,
            Value::Uint8(_) => Kind::Uint8,
            Value::Uint16(_) => Kind::Uint16,
            Value::Uint32(_) => Kind::Uint32,
            Value::Uint64(_) => Kind::Uint64,
            Value::Float32(_) => Kind::Float32,
            Value::Float64(_) => Kind::Float64,
            Value::String(_) => Kind::String,
            Value::Bool(_) => Kind::Bool,
        }
    }

    /// Integer payload widened to `i128`: sign-extended for signed kinds,
    /// zero-extended for unsigned ones. `None` for non-integers.
    #[must_use]
    pub fn integer_bits(&self) -> Option<i128> {
        match *self {
            Value::Int(v) | Value::Int64(v) => Some(i128::from(v)),
            Value::Int8(v) => Some(i128::from(v)),
            Value::Int16(v) => Some(i128::from(v)),
            Value::Int32(v) => Some(i128::from(v)),
            Value::Uint(v) | Value::Uint64(v) => Some(i128::from(v)),
            Value::Uint8(v) => Some(i128::from(v)),
            Value::Uint16(v) => Some(i128::from(v)),
            Value::Uint32(v) => Some(i128::from(v)),
            _ => None,
        }
    }

    /// Float payload widened to `f64`. `None` for non-floats.
    #[must_use]
    pub fn float_value(&self) -> Option<f64> {
        match *self {
            Value::Float32(v) => Some(f64::from(v)),
            Value::Float64(v) => Some(v),
            _ => None,
        }
    }

    /// String payload. `None` for other kinds.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Bool payload. `None` for other kinds.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

/// Default (`%v`) rendering.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::format::format_value(self))
    }
}

macro_rules! impl_from_native {
    ($($native:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$native> for Value {
                fn from(v: $native) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_native! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
    String => String,
    bool => Bool,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.zero().kind(), kind);
        }
        assert_eq!(Kind::from_name("complex128"), None);
    }

    #[test]
    fn tag_comes_from_construction_site() {
        assert_eq!(Value::from(5i32).kind(), Kind::Int32);
        assert_eq!(Value::int(5).kind(), Kind::Int);
        assert_eq!(Value::from(5i64).kind(), Kind::Int64);
        assert_eq!(Value::uint(5).kind(), Kind::Uint);
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::from(1.5f32).kind(), Kind::Float32);
    }

    #[test]
    fn integer_bits_extends_by_signedness() {
        assert_eq!(Value::Int8(-1).integer_bits(), Some(-1));
        assert_eq!(Value::Uint8(255).integer_bits(), Some(255));
        assert_eq!(Value::Uint64(u64::MAX).integer_bits(), Some(i128::from(u64::MAX)));
        assert_eq!(Value::Float64(1.0).integer_bits(), None);
    }

    #[test]
    fn payload_accessors_match_kind() {
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert_eq!(Value::int(1).as_str(), None);
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::from("true").as_bool(), None);
        assert_eq!(Value::Float32(0.5).float_value(), Some(0.5));
    }

    #[test]
    fn kind_classification() {
        assert!(Kind::Uint16.is_integer());
        assert!(!Kind::Uint16.is_signed());
        assert!(Kind::Float32.is_float());
        assert!(Kind::Float32.is_numeric());
        assert!(!Kind::String.is_numeric());
        assert_eq!(Kind::Int.int_bits(), Some(64));
        assert_eq!(Kind::Bool.int_bits(), None);
    }
}
