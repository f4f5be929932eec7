use super::file::FitFile;
use super::header::{Crc, Header};
use super::message::{Coordinate, Field, FieldValue, Message, RawEnum};
use super::{DecodeError, DecodeOptions, Decoder};
use chrono::Utc;
use fitparser::de::{from_reader_with_options, DecodeOption};
use fitparser::profile::MesgNum;
use fitparser::{FitDataRecord, Value};
use std::collections::HashSet;
use std::io::Read;
use tracing::debug;

const UNKNOWN_FIELD_PREFIX: &str = "unknown_field_";
const SEMICIRCLES: &str = "semicircles";

/// Decodes FIT files with the `fitparser` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitDecoder;

impl Decoder for FitDecoder {
    type File = FitFile;

    fn decode<R: Read>(
        &self,
        mut reader: R,
        options: &DecodeOptions,
    ) -> Result<FitFile, DecodeError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let (header, crc) = Header::read(&bytes)?;

        let mut decode_options = HashSet::new();
        if !options.unknown_messages {
            decode_options.insert(DecodeOption::DropUnknownMessages);
            decode_options.insert(DecodeOption::DropUnknownFields);
        }
        let mut source = bytes.as_slice();
        let records = from_reader_with_options(&mut source, &decode_options)
            .map_err(|err| DecodeError::Malformed(err.to_string()))?;
        debug!(records = records.len(), "decoded FIT records");

        build_file(header, crc, records)
    }
}

fn build_file(
    header: Header,
    crc: Crc,
    records: Vec<FitDataRecord>,
) -> Result<FitFile, DecodeError> {
    let mut file_id = None;
    let mut file_creator = None;
    let mut timestamp_correlation = None;
    let mut unknown_messages = Vec::new();
    let mut unknown_fields = Vec::new();
    let mut messages = Vec::new();

    for record in records {
        if let MesgNum::Value(mesg_num) = record.kind() {
            unknown_messages.push(mesg_num);
            continue;
        }
        let mut message = Message::new(record.kind().to_string());
        for field in record.into_vec() {
            if field.name().starts_with(UNKNOWN_FIELD_PREFIX) {
                unknown_fields.push((message.kind.clone(), field.number()));
            }
            let Some(value) = convert_value(field.value(), field.units()) else {
                continue;
            };
            message.fields.push(Field {
                name: pascal_case(field.name()),
                number: field.number(),
                value,
            });
        }
        match message.kind.as_str() {
            "file_id" if file_id.is_none() => file_id = Some(message),
            "file_creator" if file_creator.is_none() => file_creator = Some(message),
            "timestamp_correlation" if timestamp_correlation.is_none() => {
                timestamp_correlation = Some(message)
            }
            _ => messages.push(message),
        }
    }

    let mut file = FitFile::new(header, crc, file_id.ok_or(DecodeError::MissingFileId)?);
    file.file_creator = file_creator;
    file.timestamp_correlation = timestamp_correlation;
    for mesg_num in unknown_messages {
        file.count_unknown_message(mesg_num);
    }
    for (mesg, field_num) in unknown_fields {
        file.count_unknown_field(&mesg, field_num);
    }
    if !file.unknown_messages.is_empty() || !file.unknown_fields.is_empty() {
        debug!(
            messages = file.unknown_messages.len(),
            fields = file.unknown_fields.len(),
            "retained unknown messages and fields"
        );
    }
    for message in messages {
        file.push_message(message);
    }
    Ok(file)
}

/// Maps a `fitparser` value onto the dump model.
///
/// The `z` base types are folded into the plain unsigned variants, so their
/// zero sentinel is not recognised when printing.
fn convert_value(value: &Value, units: &str) -> Option<FieldValue> {
    Some(match value {
        Value::Timestamp(val) => FieldValue::DateTime(val.with_timezone(&Utc)),
        Value::Byte(val) | Value::UInt8(val) | Value::UInt8z(val) => FieldValue::UInt8(*val),
        Value::Enum(val) => FieldValue::Enum(RawEnum(*val)),
        Value::SInt8(val) => FieldValue::SInt8(*val),
        Value::SInt16(val) => FieldValue::SInt16(*val),
        Value::UInt16(val) | Value::UInt16z(val) => FieldValue::UInt16(*val),
        Value::SInt32(val) if units == SEMICIRCLES => FieldValue::Coordinate(Coordinate(*val)),
        Value::SInt32(val) => FieldValue::SInt32(*val),
        Value::UInt32(val) | Value::UInt32z(val) => FieldValue::UInt32(*val),
        Value::SInt64(val) => FieldValue::SInt64(*val),
        Value::UInt64(val) | Value::UInt64z(val) => FieldValue::UInt64(*val),
        Value::Float32(val) => FieldValue::Float32(*val),
        Value::Float64(val) => FieldValue::Float64(*val),
        Value::String(val) => FieldValue::String(val.clone()),
        Value::Array(vals) => FieldValue::Array(
            vals.iter()
                .filter_map(|it| convert_value(it, units))
                .collect(),
        ),
        #[allow(unreachable_patterns)]
        _ => return None,
    })
}

/// `position_lat` -> `PositionLat`
fn pascal_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
