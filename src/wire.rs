use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::Range;
use crate::field::Field;

/// Wire type tag of a 32-bit signed integer field.
pub const TYPE_I32: u8 = 8;
/// Marks the end of the encoded field list.
pub const TYPE_STOP: u8 = 0;

impl Range {
    /// Encodes the record as a field-id-keyed binary payload: per field a
    /// wire type byte, the field id as big-endian i16 and the value as
    /// big-endian i32, terminated by a stop byte.
    pub fn encode(&self) -> anyhow::Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(Field::DECLARED.len() * 7 + 1);
        for field in Field::DECLARED {
            let value = match field {
                Field::Min => self.min(),
                Field::Max => self.max(),
            };
            buffer.write_u8(TYPE_I32)?;
            buffer.write_i16::<BigEndian>(field.id())?;
            buffer.write_i32::<BigEndian>(value)?;
        }
        buffer.write_u8(TYPE_STOP)?;
        Ok(buffer)
    }

    /// Decodes a binary payload, keyed by field id regardless of field
    /// order. Unknown ids of i32 wire type are skipped. Fails if either
    /// required field is absent, on a wrong wire type for a known id and
    /// on truncated input.
    pub fn decode(bytes: &[u8]) -> anyhow::Result<Range> {
        let mut reader = bytes;
        let mut min = None;
        let mut max = None;

        loop {
            let kind = reader
                .read_u8()
                .map_err(|_| anyhow::anyhow!("Truncated payload, missing stop byte."))?;
            if kind == TYPE_STOP {
                break;
            }
            let id = reader.read_i16::<BigEndian>().map_err(|_| {
                anyhow::anyhow!("Truncated payload while reading a field id.")
            })?;
            if kind != TYPE_I32 {
                return Err(match Field::from_id(id) {
                    Some(field) => anyhow::anyhow!(format!(
                        "Field '{}' (id {}) has wire type {}, expected i32.",
                        field.name(),
                        id,
                        kind
                    )),
                    None => anyhow::anyhow!(format!(
                        "Unsupported wire type {} for field id {}.",
                        kind, id
                    )),
                });
            }
            let value = reader.read_i32::<BigEndian>().map_err(|_| {
                anyhow::anyhow!(format!("Truncated payload while reading field id {}.", id))
            })?;
            match Field::from_id(id) {
                Some(Field::Min) => min = Some(value),
                Some(Field::Max) => max = Some(value),
                // Unknown field of known width, skipped for compatibility.
                None => {}
            }
        }

        match (min, max) {
            (Some(min), Some(max)) => Ok(Range::new(min, max)),
            (None, _) => Err(anyhow::anyhow!(format!(
                "Required field '{}' (id {}) missing from payload.",
                Field::Min.name(),
                Field::Min.id()
            ))),
            (_, None) => Err(anyhow::anyhow!(format!(
                "Required field '{}' (id {}) missing from payload.",
                Field::Max.name(),
                Field::Max.id()
            ))),
        }
    }
}
