#![allow(dead_code)]
//! Synthesised FIT files for the integration tests.

const CRC_TABLE: [u16; 16] = [
    0x0000, 0xCC01, 0xD801, 0x1400, 0xF001, 0x3C00, 0x2800, 0xE401, 0xA001, 0x6C00, 0x7800,
    0xB401, 0x5000, 0x9C01, 0x8801, 0x4400,
];

/// Seconds since the FIT epoch (1989-12-31T00:00:00Z).
pub const TIMESTAMP: u32 = 1_000_000_000;

pub mod base_type {
    pub const ENUM: u8 = 0x00;
    pub const UINT8: u8 = 0x02;
    pub const UINT16: u8 = 0x84;
    pub const UINT32: u8 = 0x86;
    pub const UINT32Z: u8 = 0x8C;
}

pub fn crc_16(bytes: &[u8]) -> u16 {
    let mut crc = 0u16;
    for byte in bytes {
        let mut tmp = CRC_TABLE[(crc & 0xF) as usize];
        crc = (crc >> 4) & 0x0FFF;
        crc = crc ^ tmp ^ CRC_TABLE[(byte & 0xF) as usize];
        tmp = CRC_TABLE[(crc & 0xF) as usize];
        crc = (crc >> 4) & 0x0FFF;
        crc = crc ^ tmp ^ CRC_TABLE[((byte >> 4) & 0xF) as usize];
    }
    crc
}

/// Little-endian field values of one data message.
#[derive(Default)]
pub struct Values(Vec<u8>);

impl Values {
    pub fn u8(mut self, value: u8) -> Self {
        self.0.push(value);
        self
    }
    pub fn u16(mut self, value: u16) -> Self {
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }
    pub fn u32(mut self, value: u32) -> Self {
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }
}

#[derive(Default)]
pub struct FitBuilder {
    records: Vec<u8>,
}

impl FitBuilder {
    /// `fields` are `(field definition number, size, base type)`.
    pub fn definition(mut self, local: u8, global: u16, fields: &[(u8, u8, u8)]) -> Self {
        self.records.push(0x40 | local);
        // reserved, little endian
        self.records.extend_from_slice(&[0x00, 0x00]);
        self.records.extend_from_slice(&global.to_le_bytes());
        self.records.push(fields.len() as u8);
        for (number, size, base_type) in fields {
            self.records.extend_from_slice(&[*number, *size, *base_type]);
        }
        self
    }

    pub fn data(mut self, local: u8, values: Values) -> Self {
        self.records.push(local);
        self.records.extend_from_slice(&values.0);
        self
    }

    /// 14 byte header, records, then the file CRC.
    pub fn build(self) -> Vec<u8> {
        let mut bytes = vec![0x0E, 0x20];
        bytes.extend_from_slice(&2132u16.to_le_bytes());
        bytes.extend_from_slice(&(self.records.len() as u32).to_le_bytes());
        bytes.extend_from_slice(b".FIT");
        let header_crc = crc_16(&bytes);
        bytes.extend_from_slice(&header_crc.to_le_bytes());
        bytes.extend_from_slice(&self.records);
        let file_crc = crc_16(&bytes);
        bytes.extend_from_slice(&file_crc.to_le_bytes());
        bytes
    }
}

/// A file holding only a `file_id` message of the given `file` type.
pub fn with_file_id(file_type: u8) -> FitBuilder {
    use base_type::*;
    FitBuilder::default()
        .definition(
            0,
            0,
            &[(0, 1, ENUM), (1, 2, UINT16), (2, 2, UINT16), (3, 4, UINT32Z), (4, 4, UINT32)],
        )
        .data(
            0,
            Values::default()
                .u8(file_type)
                .u16(1)
                .u16(1)
                .u32(12345)
                .u32(TIMESTAMP),
        )
}

/// Activity file with an `activity` message and a single `record` whose
/// cadence holds the uint8 sentinel.
pub fn activity_file() -> Vec<u8> {
    use base_type::*;
    with_file_id(4)
        .definition(
            1,
            34,
            &[
                (253, 4, UINT32),
                (0, 4, UINT32),
                (1, 2, UINT16),
                (2, 1, ENUM),
                (3, 1, ENUM),
                (4, 1, ENUM),
            ],
        )
        .data(
            1,
            Values::default()
                .u32(TIMESTAMP + 3600)
                .u32(3_600_000)
                .u16(1)
                .u8(0)
                .u8(26)
                .u8(1),
        )
        .definition(2, 20, &[(253, 4, UINT32), (3, 1, UINT8), (4, 1, UINT8)])
        .data(2, Values::default().u32(TIMESTAMP + 60).u8(142).u8(0xFF))
        .build()
}

/// A file whose `file_id` declares the `exd_configuration` type (40).
pub fn exd_configuration_file() -> Vec<u8> {
    with_file_id(40).build()
}
