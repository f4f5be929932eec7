use super::DecodeError;
use crate::byte_reader::ByteReader;
use crate::inspect::{Inspect, Member, Node};
use std::fmt;

const CRC_SIZE: usize = 2;
const DATA_TYPE: &str = ".FIT";

/// FIT file header.
///
/// ## Structure
///
/// ```text
/// ----------------------------------------------------------------------------------------
/// | Size | Protocol Ver. | Profile Ver. (u16) | Data Size (u32) | ".FIT" | CRC (u16, 14 only) |
/// ----------------------------------------------------------------------------------------
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub size: u8,
    pub protocol_version: ProtocolVersion,
    pub profile_version: ProfileVersion,
    pub data_size: u32,
    pub data_type: String,
    /// Present only in 14 byte headers.
    pub crc: Option<Crc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolVersion(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileVersion(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc(pub u16);

impl Header {
    /// Check the header to determine whether it is a FIT file
    pub fn is_fit(bytes: &[u8]) -> bool {
        if bytes.is_empty() {
            return false;
        }
        if bytes[0] != 0x0E && bytes[0] != 0x0C {
            return false;
        }
        if bytes.len() < bytes[0] as usize + CRC_SIZE {
            return false;
        }
        String::from_utf8_lossy(&bytes[8..12]) == DATA_TYPE
    }

    /// Reads the header of the first FIT file in `bytes` together with the
    /// CRC trailing its data records.
    pub(crate) fn read(bytes: &[u8]) -> Result<(Header, Crc), DecodeError> {
        if !Header::is_fit(bytes) {
            return Err(DecodeError::NotFit);
        }
        let mut reader = ByteReader::new(bytes);
        let size = reader.read_next_u8()?;
        let protocol_version = ProtocolVersion(reader.read_next_u8()?);
        let profile_version = ProfileVersion(reader.read_next_u16(false)?);
        let data_size = reader.read_next_u32(false)?;
        let data_type = reader.read_next_utf8_string(4)?;
        let crc = if size == 0x0E {
            Some(Crc(reader.read_next_u16(false)?))
        } else {
            None
        };
        let header = Header {
            size,
            protocol_version,
            profile_version,
            data_size,
            data_type,
            crc,
        };

        let crc_offset = size as usize + data_size as usize;
        if crc_offset + CRC_SIZE > reader.len() {
            return Err(DecodeError::Truncated {
                offset: crc_offset,
                needed: CRC_SIZE,
            });
        }
        reader.seek(crc_offset);
        let file_crc = Crc(reader.read_next_u16(false)?);
        Ok((header, file_crc))
    }
}

impl Inspect for Header {
    fn to_node(&self) -> Node<'_> {
        Node::Struct(vec![
            Member::new("Size", self.size.to_node()),
            Member::new("ProtocolVersion", self.protocol_version.to_node()),
            Member::new("ProfileVersion", self.profile_version.to_node()),
            Member::new("DataSize", self.data_size.to_node()),
            Member::new("DataType", self.data_type.to_node()),
            Member::new("CRC", self.crc.to_node()),
        ])
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 >> 4, self.0 & 0x0F)
    }
}

impl fmt::Display for ProfileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl fmt::Display for Crc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

macro_rules! inspect_display {
    ($($type:ty),*) => {
        $(impl Inspect for $type {
            fn to_node(&self) -> Node<'_> {
                Node::text(self)
            }
        })*
    };
}

inspect_display!(ProtocolVersion, ProfileVersion, Crc);
