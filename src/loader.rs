use crate::error::{DumpError, DumpResult};
use crate::fit::{DecodeOptions, Decoder};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Opens `path` and decodes it, retaining unknown messages and fields.
///
/// The file is closed as soon as decoding returns.
pub fn load<D: Decoder>(decoder: &D, path: &Path) -> DumpResult<D::File> {
    debug!(path = %path.display(), "loading FIT file");
    let file = File::open(path).map_err(|source| DumpError::Io {
        path: path.to_owned(),
        source,
    })?;
    let options = DecodeOptions::default().with_unknown_messages();
    Ok(decoder.decode(file, &options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::{DecodeError, FitDecoder};
    use std::io::{Read, Write};

    struct Rejecting;

    impl Decoder for Rejecting {
        type File = crate::fit::FitFile;

        fn decode<R: Read>(
            &self,
            mut reader: R,
            options: &DecodeOptions,
        ) -> Result<Self::File, DecodeError> {
            assert!(options.unknown_messages);
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes)?;
            Err(DecodeError::Malformed(format!("{} bytes", bytes.len())))
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.fit");
        let err = load(&FitDecoder, &path).unwrap_err();
        assert!(matches!(err, DumpError::Io { .. }));
        assert!(err.to_string().starts_with("open "));
    }

    #[test]
    fn passes_stream_and_options() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 7]).unwrap();
        let err = load(&Rejecting, file.path()).unwrap_err();
        assert!(matches!(err, DumpError::Decode(DecodeError::Malformed(ref it)) if it == "7 bytes"));
    }
}
