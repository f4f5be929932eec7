use crate::fit::DecodeError;

pub(crate) struct ByteReader<'input> {
    offset: usize,
    bytes: &'input [u8],
}

macro_rules! convert_impl {
    ($func_name:ident, $type:ty, $size:expr) => {
        /// Read specified size bytes and converts it to the target type
        pub(crate) fn $func_name(&mut self, is_big_endian: bool) -> Result<$type, DecodeError> {
            let bytes = self.read_bytes($size)?;
            let bytes = bytes
                .try_into()
                .map_err(|_| DecodeError::Truncated { offset: self.offset, needed: $size })?;
            Ok(if is_big_endian {
                <$type>::from_be_bytes(bytes)
            } else {
                <$type>::from_le_bytes(bytes)
            })
        }
    };
}

impl<'input> ByteReader<'input> {
    pub(crate) fn new(bytes: &'input [u8]) -> Self {
        Self { bytes, offset: 0 }
    }
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }
    pub(crate) fn seek(&mut self, offset: usize) {
        self.offset = offset
    }
    pub(crate) fn read_bytes(&mut self, len: usize) -> Result<&'input [u8], DecodeError> {
        if self.offset + len > self.bytes.len() {
            return Err(DecodeError::Truncated {
                offset: self.offset,
                needed: len,
            });
        }
        let bytes = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }
    pub(crate) fn read_next_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_bytes(1)?[0])
    }

    convert_impl!(read_next_u16, u16, 2);
    convert_impl!(read_next_u32, u32, 4);

    pub(crate) fn read_next_utf8_string(&mut self, len: usize) -> Result<String, DecodeError> {
        Ok(String::from_utf8_lossy(self.read_bytes(len)?).to_string())
    }
}
