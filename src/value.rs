use std::fmt;

/// Primitive kinds the tree printer knows a sentinel for.
#[derive(Debug, Hash, Eq, PartialEq, Copy, Clone)]
pub enum ScalarKind {
    Bool = 0,
    SInt8 = 1,
    SInt16 = 2,
    SInt32 = 3,
    SInt64 = 4,
    UInt8 = 5,
    UInt16 = 6,
    UInt32 = 7,
    UInt64 = 8,
    Float32 = 9,
    Float64 = 10,
    String = 11,
}

/// Value reserved by the FIT format to mean "field not present".
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Sentinel {
    False,
    Bits(u64),
    Empty,
}

/// Indexed by `ScalarKind as usize`.
const SENTINELS: [Sentinel; 12] = [
    Sentinel::False,
    Sentinel::Bits(0x7F),
    Sentinel::Bits(0x7FFF),
    Sentinel::Bits(0x7FFF_FFFF),
    Sentinel::Bits(0x7FFF_FFFF_FFFF_FFFF),
    Sentinel::Bits(0xFF),
    Sentinel::Bits(0xFFFF),
    Sentinel::Bits(0xFFFF_FFFF),
    Sentinel::Bits(0xFFFF_FFFF_FFFF_FFFF),
    Sentinel::Bits(0xFFFF_FFFF),
    Sentinel::Bits(0xFFFF_FFFF_FFFF_FFFF),
    Sentinel::Empty,
];

impl ScalarKind {
    pub fn sentinel(&self) -> Sentinel {
        SENTINELS[*self as usize]
    }
}

/// A borrowed primitive leaf of an inspected value.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub enum Scalar<'a> {
    Bool(bool),
    SInt8(i8),
    SInt16(i16),
    SInt32(i32),
    SInt64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(&'a str),
}

impl Scalar<'_> {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::SInt8(_) => ScalarKind::SInt8,
            Scalar::SInt16(_) => ScalarKind::SInt16,
            Scalar::SInt32(_) => ScalarKind::SInt32,
            Scalar::SInt64(_) => ScalarKind::SInt64,
            Scalar::UInt8(_) => ScalarKind::UInt8,
            Scalar::UInt16(_) => ScalarKind::UInt16,
            Scalar::UInt32(_) => ScalarKind::UInt32,
            Scalar::UInt64(_) => ScalarKind::UInt64,
            Scalar::Float32(_) => ScalarKind::Float32,
            Scalar::Float64(_) => ScalarKind::Float64,
            Scalar::String(_) => ScalarKind::String,
        }
    }

    /// Raw bit pattern of numeric values, zero-extended to 64 bits.
    fn bits(&self) -> Option<u64> {
        match self {
            Scalar::SInt8(val) => Some(*val as u8 as u64),
            Scalar::SInt16(val) => Some(*val as u16 as u64),
            Scalar::SInt32(val) => Some(*val as u32 as u64),
            Scalar::SInt64(val) => Some(*val as u64),
            Scalar::UInt8(val) => Some(*val as u64),
            Scalar::UInt16(val) => Some(*val as u64),
            Scalar::UInt32(val) => Some(*val as u64),
            Scalar::UInt64(val) => Some(*val),
            Scalar::Float32(val) => Some(val.to_bits() as u64),
            Scalar::Float64(val) => Some(val.to_bits()),
            Scalar::Bool(_) | Scalar::String(_) => None,
        }
    }

    /// Whether the value is its kind's "not present" marker.
    ///
    /// Floats are compared by bit pattern, so the all-ones NaN matches while
    /// any other NaN does not.
    pub fn is_invalid(&self) -> bool {
        match self.kind().sentinel() {
            Sentinel::False => matches!(self, Scalar::Bool(false)),
            Sentinel::Bits(invalid) => self.bits() == Some(invalid),
            Sentinel::Empty => matches!(self, Scalar::String(val) if val.is_empty()),
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(val) => write!(f, "{}", val),
            Scalar::SInt8(val) => write!(f, "{}", val),
            Scalar::SInt16(val) => write!(f, "{}", val),
            Scalar::SInt32(val) => write!(f, "{}", val),
            Scalar::SInt64(val) => write!(f, "{}", val),
            Scalar::UInt8(val) => write!(f, "{}", val),
            Scalar::UInt16(val) => write!(f, "{}", val),
            Scalar::UInt32(val) => write!(f, "{}", val),
            Scalar::UInt64(val) => write!(f, "{}", val),
            Scalar::Float32(val) => write!(f, "{}", val),
            Scalar::Float64(val) => write!(f, "{}", val),
            Scalar::String(val) => f.write_str(val),
        }
    }
}

impl fmt::Debug for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(val) => write!(f, "Bool({:?})", val),
            Scalar::SInt8(val) => write!(f, "SInt8({:?})", val),
            Scalar::SInt16(val) => write!(f, "SInt16({:?})", val),
            Scalar::SInt32(val) => write!(f, "SInt32({:?})", val),
            Scalar::SInt64(val) => write!(f, "SInt64({:?})", val),
            Scalar::UInt8(val) => write!(f, "UInt8({:?})", val),
            Scalar::UInt16(val) => write!(f, "UInt16({:?})", val),
            Scalar::UInt32(val) => write!(f, "UInt32({:?})", val),
            Scalar::UInt64(val) => write!(f, "UInt64({:?})", val),
            Scalar::Float32(val) => write!(f, "Float32({:?})", val),
            Scalar::Float64(val) => write!(f, "Float64({:?})", val),
            Scalar::String(val) => write!(f, "String({:?})", val),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_invalid() {
        let sentinels = [
            Scalar::Bool(false),
            Scalar::SInt8(0x7F),
            Scalar::SInt16(0x7FFF),
            Scalar::SInt32(0x7FFF_FFFF),
            Scalar::SInt64(0x7FFF_FFFF_FFFF_FFFF),
            Scalar::UInt8(0xFF),
            Scalar::UInt16(0xFFFF),
            Scalar::UInt32(0xFFFF_FFFF),
            Scalar::UInt64(0xFFFF_FFFF_FFFF_FFFF),
            Scalar::Float32(f32::from_bits(0xFFFF_FFFF)),
            Scalar::Float64(f64::from_bits(0xFFFF_FFFF_FFFF_FFFF)),
            Scalar::String(""),
        ];
        for scalar in sentinels {
            assert!(scalar.is_invalid(), "{:?} should be invalid", scalar);
        }
    }

    #[test]
    fn one_bit_off_is_valid() {
        let neighbours = [
            Scalar::Bool(true),
            Scalar::SInt8(0x7E),
            Scalar::SInt8(-1),
            Scalar::SInt16(0x7FFE),
            Scalar::SInt32(0x7FFF_FFFE),
            Scalar::SInt64(0x7FFF_FFFF_FFFF_FFFE),
            Scalar::UInt8(0xFE),
            Scalar::UInt16(0xFFFE),
            Scalar::UInt32(0xFFFF_FFFE),
            Scalar::UInt64(0xFFFF_FFFF_FFFF_FFFE),
            Scalar::Float32(f32::from_bits(0xFFFF_FFFE)),
            Scalar::Float64(f64::from_bits(0xFFFF_FFFF_FFFF_FFFE)),
            Scalar::String(" "),
        ];
        for scalar in neighbours {
            assert!(!scalar.is_invalid(), "{:?} should be valid", scalar);
        }
    }

    #[test]
    fn sentinel_depends_on_kind() {
        // 0xFF is a valid sint16 even though it is the uint8 sentinel
        assert!(!Scalar::SInt16(0xFF).is_invalid());
        assert!(!Scalar::UInt16(0x7FFF).is_invalid());
        assert!(!Scalar::Float32(f32::NAN).is_invalid());
        assert_eq!(ScalarKind::Float32.sentinel(), Sentinel::Bits(0xFFFF_FFFF));
    }

    #[test]
    fn display_literal_values() {
        assert_eq!(Scalar::SInt8(-3).to_string(), "-3");
        assert_eq!(Scalar::UInt32(4_294_967_294).to_string(), "4294967294");
        assert_eq!(Scalar::Float64(1.5).to_string(), "1.5");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
        assert_eq!(Scalar::String("edge 530").to_string(), "edge 530");
    }
}
