use crate::inspect::{Inspect, Member, Node};
use crate::value::Scalar;
use chrono::{DateTime, Utc};
use std::fmt;

/// One decoded data message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    /// Profile name of the message, e.g. `record`.
    pub kind: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Display name in PascalCase, e.g. `PositionLat`.
    pub name: String,
    pub number: u8,
    pub value: FieldValue,
}

#[derive(Clone, PartialEq)]
pub enum FieldValue {
    SInt8(i8),
    UInt8(u8),
    SInt16(i16),
    UInt16(u16),
    SInt32(i32),
    UInt32(u32),
    SInt64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
    // Supplementary values with their own renderers
    Enum(RawEnum),
    DateTime(DateTime<Utc>),
    Coordinate(Coordinate),
    Array(Vec<Self>),
}

/// Enum value the profile has no name for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEnum(pub u8);

/// Latitude or longitude in semicircles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate(pub i32);

impl Coordinate {
    pub fn degrees(&self) -> f64 {
        self.0 as f64 * (180.0 / 2f64.powi(31))
    }
}

impl FieldValue {
    /// Integer variants widened to `i128`.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            FieldValue::SInt8(val) => Some(*val as i128),
            FieldValue::UInt8(val) => Some(*val as i128),
            FieldValue::SInt16(val) => Some(*val as i128),
            FieldValue::UInt16(val) => Some(*val as i128),
            FieldValue::SInt32(val) => Some(*val as i128),
            FieldValue::UInt32(val) => Some(*val as i128),
            FieldValue::SInt64(val) => Some(*val as i128),
            FieldValue::UInt64(val) => Some(*val as i128),
            _ => None,
        }
    }
}

impl Message {
    pub fn new(kind: impl Into<String>) -> Self {
        Message {
            kind: kind.into(),
            fields: Vec::new(),
        }
    }
    pub fn with_field(mut self, name: impl Into<String>, number: u8, value: FieldValue) -> Self {
        self.fields.push(Field {
            name: name.into(),
            number,
            value,
        });
        self
    }
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|it| it.name == name)
            .map(|it| &it.value)
    }
}

impl Inspect for Message {
    fn to_node(&self) -> Node<'_> {
        Node::Struct(
            self.fields
                .iter()
                .map(|field| Member::new(&field.name, field.value.to_node()))
                .collect(),
        )
    }
}

impl Inspect for FieldValue {
    fn to_node(&self) -> Node<'_> {
        match self {
            FieldValue::SInt8(val) => Node::Scalar(Scalar::SInt8(*val)),
            FieldValue::UInt8(val) => Node::Scalar(Scalar::UInt8(*val)),
            FieldValue::SInt16(val) => Node::Scalar(Scalar::SInt16(*val)),
            FieldValue::UInt16(val) => Node::Scalar(Scalar::UInt16(*val)),
            FieldValue::SInt32(val) => Node::Scalar(Scalar::SInt32(*val)),
            FieldValue::UInt32(val) => Node::Scalar(Scalar::UInt32(*val)),
            FieldValue::SInt64(val) => Node::Scalar(Scalar::SInt64(*val)),
            FieldValue::UInt64(val) => Node::Scalar(Scalar::UInt64(*val)),
            FieldValue::Float32(val) => Node::Scalar(Scalar::Float32(*val)),
            FieldValue::Float64(val) => Node::Scalar(Scalar::Float64(*val)),
            FieldValue::String(val) => Node::Scalar(Scalar::String(val)),
            FieldValue::Enum(val) => Node::text(val),
            FieldValue::DateTime(val) => val.to_node(),
            FieldValue::Coordinate(val) => Node::text(val),
            FieldValue::Array(vals) => vals.to_node(),
        }
    }
}

impl fmt::Display for RawEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0xFF {
            f.write_str("EnumInvalid")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0x7FFF_FFFF {
            f.write_str("Invalid")
        } else {
            write!(f, "{:.6}", self.degrees())
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::SInt8(val) => write!(f, "SInt8({:?})", val),
            FieldValue::UInt8(val) => write!(f, "UInt8({:?})", val),
            FieldValue::SInt16(val) => write!(f, "SInt16({:?})", val),
            FieldValue::UInt16(val) => write!(f, "UInt16({:?})", val),
            FieldValue::SInt32(val) => write!(f, "SInt32({:?})", val),
            FieldValue::UInt32(val) => write!(f, "UInt32({:?})", val),
            FieldValue::SInt64(val) => write!(f, "SInt64({:?})", val),
            FieldValue::UInt64(val) => write!(f, "UInt64({:?})", val),
            FieldValue::Float32(val) => write!(f, "Float32({:?})", val),
            FieldValue::Float64(val) => write!(f, "Float64({:?})", val),
            FieldValue::String(val) => write!(f, "String({:?})", val),
            FieldValue::Enum(val) => write!(f, "Enum({:?})", val.0),
            FieldValue::DateTime(val) => write!(f, "DateTime({:?})", val),
            FieldValue::Coordinate(val) => write!(f, "Coordinate({:?})", val.0),
            FieldValue::Array(vals) => write!(
                f,
                "Array([{}])",
                vals.iter()
                    .map(|it| format!("{:?}", it))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}
