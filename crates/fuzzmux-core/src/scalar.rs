//! The closed set of scalar kinds a selector byte can pick from.
//!
//! The original idea — "pick one of N types known at build time" —
//! becomes a runtime tag ([`ScalarKind`]) plus a tagged value
//! ([`ScalarValue`]) dispatched by a match. The [`Scalar`] trait holds
//! the per-primitive decode functions so the remainder extractor can
//! stay generic over element type.

/// A primitive that can be materialized from raw bytes.
///
/// Multi-byte values are read little-endian — a fixed, documented
/// order so a corpus entry decodes to the same value on every
/// platform. Decoding is a raw bit-pattern copy: no construction
/// logic, no validation. `bool` is the one exception, decoded from
/// the low bit of its first byte because not every bit pattern is a
/// valid `bool`.
pub trait Scalar: Copy {
    /// Encoded width in bytes. At most [`SLOT_WIDTH`](crate::SLOT_WIDTH).
    const WIDTH: usize;

    /// Decode a value from the first `WIDTH` bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() < WIDTH`. Callers (the slot decoder,
    /// the remainder extractor) guarantee the length.
    fn decode(bytes: &[u8]) -> Self;
}

macro_rules! impl_scalar_le {
    ($($ty:ty),* $(,)?) => {$(
        impl Scalar for $ty {
            const WIDTH: usize = size_of::<$ty>();

            fn decode(bytes: &[u8]) -> Self {
                let mut raw = [0u8; size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..size_of::<$ty>()]);
                Self::from_le_bytes(raw)
            }
        }
    )*};
}

impl_scalar_le!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, f32, f64);

impl Scalar for bool {
    const WIDTH: usize = 1;

    fn decode(bytes: &[u8]) -> Self {
        // Truthiness comes from the low bit only, not "any nonzero
        // byte" — an explicit decode rule, not a raw copy.
        bytes[0] & 1 != 0
    }
}

/// Runtime tag for one candidate scalar kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    U128,
    I128,
    F32,
    F64,
}

impl ScalarKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Bool,
        Self::U8,
        Self::I8,
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::U64,
        Self::I64,
        Self::U128,
        Self::I128,
        Self::F32,
        Self::F64,
    ];

    /// Encoded width of this kind in bytes.
    #[must_use]
    pub fn width(self) -> usize {
        match self {
            Self::Bool => <bool as Scalar>::WIDTH,
            Self::U8 => <u8 as Scalar>::WIDTH,
            Self::I8 => <i8 as Scalar>::WIDTH,
            Self::U16 => <u16 as Scalar>::WIDTH,
            Self::I16 => <i16 as Scalar>::WIDTH,
            Self::U32 => <u32 as Scalar>::WIDTH,
            Self::I32 => <i32 as Scalar>::WIDTH,
            Self::U64 => <u64 as Scalar>::WIDTH,
            Self::I64 => <i64 as Scalar>::WIDTH,
            Self::U128 => <u128 as Scalar>::WIDTH,
            Self::I128 => <i128 as Scalar>::WIDTH,
            Self::F32 => <f32 as Scalar>::WIDTH,
            Self::F64 => <f64 as Scalar>::WIDTH,
        }
    }

    /// Decode a value of this kind from the first `width()` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() < self.width()`.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> ScalarValue {
        match self {
            Self::Bool => ScalarValue::Bool(bool::decode(bytes)),
            Self::U8 => ScalarValue::U8(u8::decode(bytes)),
            Self::I8 => ScalarValue::I8(i8::decode(bytes)),
            Self::U16 => ScalarValue::U16(u16::decode(bytes)),
            Self::I16 => ScalarValue::I16(i16::decode(bytes)),
            Self::U32 => ScalarValue::U32(u32::decode(bytes)),
            Self::I32 => ScalarValue::I32(i32::decode(bytes)),
            Self::U64 => ScalarValue::U64(u64::decode(bytes)),
            Self::I64 => ScalarValue::I64(i64::decode(bytes)),
            Self::U128 => ScalarValue::U128(u128::decode(bytes)),
            Self::I128 => ScalarValue::I128(i128::decode(bytes)),
            Self::F32 => ScalarValue::F32(f32::decode(bytes)),
            Self::F64 => ScalarValue::F64(f64::decode(bytes)),
        }
    }
}

/// A decoded scalar, tagged with its kind.
///
/// Values have no lifecycle of their own: each is materialized on
/// demand and handed to the combinator callback exactly once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalarValue {
    Bool(bool),
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    U128(u128),
    I128(i128),
    F32(f32),
    F64(f64),
}

impl ScalarValue {
    /// The kind this value was decoded as.
    #[must_use]
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::U8(_) => ScalarKind::U8,
            Self::I8(_) => ScalarKind::I8,
            Self::U16(_) => ScalarKind::U16,
            Self::I16(_) => ScalarKind::I16,
            Self::U32(_) => ScalarKind::U32,
            Self::I32(_) => ScalarKind::I32,
            Self::U64(_) => ScalarKind::U64,
            Self::I64(_) => ScalarKind::I64,
            Self::U128(_) => ScalarKind::U128,
            Self::I128(_) => ScalarKind::I128,
            Self::F32(_) => ScalarKind::F32,
            Self::F64(_) => ScalarKind::F64,
        }
    }
}
