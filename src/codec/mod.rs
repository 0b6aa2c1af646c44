//! Frame codec: structured records ⇄ wire bytes
//!
//! Encoding resolves a message name and declared payload length against the
//! registry, serializes the record fields little-endian in declared order,
//! and wraps them in sync bytes, header and checksum. Decoding is the
//! inverse over a payload whose framing the stream synchronizer has already
//! validated.
//!
//! Both directions are pure transforms: delivery to the transport and the
//! treatment of decode failures (log and drop) belong to the caller.

mod record;

pub use record::{Record, Value};

use crate::checksum::checksum;
use crate::constants::{FRAME_OVERHEAD, SYNC1, SYNC2};
use crate::error::{Result, UbxError};
use crate::registry::{Field, FieldType, Registry};

/// A decoded frame: message name plus its record sequence
///
/// `records[0]` is the sole record for fixed layouts or the header record
/// for variable layouts; any further elements are repeated blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedMessage {
    pub name: &'static str,
    pub records: Vec<Record>,
}

// =============================================================================
// Encode
// =============================================================================

/// Encode a named message into wire bytes
///
/// `records[0]` supplies the fixed-layout fields (or the variable-layout
/// header); `records[1..]` supply repeated blocks. A declared length of
/// zero produces a header-only poll frame and consults no layout.
///
/// # Errors
///
/// - `UnknownMessageName` - name has no registry entry
/// - `NoLayoutForLength` - no fixed or variable layout fits `length`
/// - `InvalidVariableLength` - `length` incompatible with the block size,
///   or `records` does not supply exactly one record per block
/// - `MissingField` / `ValueOutOfRange` / `WrongValueKind` - payload does
///   not satisfy the layout's field schema
pub fn encode_frame(
    registry: &Registry,
    name: &str,
    length: u16,
    records: &[Record],
) -> Result<Vec<u8>> {
    let entry = registry.lookup_by_name(name)?;

    let mut frame = Vec::with_capacity(FRAME_OVERHEAD + length as usize);
    frame.push(SYNC1);
    frame.push(SYNC2);
    frame.push(entry.class);
    frame.push(entry.id);
    frame.extend_from_slice(&length.to_le_bytes());

    if length > 0 {
        let empty = Record::new();
        let head = records.first().unwrap_or(&empty);

        if let Some(layout) = entry.fixed_layout(length) {
            write_fields(&mut frame, entry.name, layout.fields, head)?;
        } else if let Some(var) = entry.variable_layout() {
            let body = (length as usize)
                .checked_sub(var.header_len as usize)
                .filter(|rest| rest % var.block_len as usize == 0)
                .ok_or(UbxError::InvalidVariableLength {
                    name: entry.name,
                    length,
                })?;
            let block_count = body / var.block_len as usize;
            if records.len() != block_count + 1 {
                return Err(UbxError::InvalidVariableLength {
                    name: entry.name,
                    length,
                });
            }
            write_fields(&mut frame, entry.name, var.header, head)?;
            for block in &records[1..] {
                write_fields(&mut frame, entry.name, var.block, block)?;
            }
        } else {
            return Err(UbxError::NoLayoutForLength {
                name: entry.name,
                length,
            });
        }
    }

    let (ck_a, ck_b) = checksum(&frame[2..]);
    frame.push(ck_a);
    frame.push(ck_b);
    Ok(frame)
}

fn write_fields(
    out: &mut Vec<u8>,
    message: &'static str,
    fields: &[Field],
    record: &Record,
) -> Result<()> {
    for field in fields {
        if let FieldType::Pad(n) = field.ty {
            out.extend(std::iter::repeat(0u8).take(n as usize));
            continue;
        }

        let value = record.get(field.name).ok_or(UbxError::MissingField {
            name: message,
            field: field.name,
        })?;

        match field.ty {
            FieldType::U1 => out.push(int_value(field, value, 0, u8::MAX as i64)? as u8),
            FieldType::I1 => {
                out.push(int_value(field, value, i8::MIN as i64, i8::MAX as i64)? as u8)
            }
            FieldType::U2 => {
                let v = int_value(field, value, 0, u16::MAX as i64)? as u16;
                out.extend_from_slice(&v.to_le_bytes());
            }
            FieldType::I2 => {
                let v = int_value(field, value, i16::MIN as i64, i16::MAX as i64)? as i16;
                out.extend_from_slice(&v.to_le_bytes());
            }
            FieldType::U4 => {
                let v = int_value(field, value, 0, u32::MAX as i64)? as u32;
                out.extend_from_slice(&v.to_le_bytes());
            }
            FieldType::I4 => {
                let v = int_value(field, value, i32::MIN as i64, i32::MAX as i64)? as i32;
                out.extend_from_slice(&v.to_le_bytes());
            }
            FieldType::R4 => {
                let v = float_value(field, value)? as f32;
                out.extend_from_slice(&v.to_le_bytes());
            }
            FieldType::R8 => {
                let v = float_value(field, value)?;
                out.extend_from_slice(&v.to_le_bytes());
            }
            FieldType::Bytes(n) => {
                let Value::Bytes(data) = value else {
                    return Err(UbxError::WrongValueKind { field: field.name });
                };
                // Short byte strings are zero padded, long ones truncated
                let n = n as usize;
                let take = data.len().min(n);
                out.extend_from_slice(&data[..take]);
                out.extend(std::iter::repeat(0u8).take(n - take));
            }
            FieldType::Pad(_) => unreachable!(),
        }
    }
    Ok(())
}

fn int_value(field: &Field, value: &Value, min: i64, max: i64) -> Result<i64> {
    let Value::Int(v) = value else {
        return Err(UbxError::WrongValueKind { field: field.name });
    };
    if *v < min || *v > max {
        return Err(UbxError::ValueOutOfRange {
            field: field.name,
            value: *v,
        });
    }
    Ok(*v)
}

fn float_value(field: &Field, value: &Value) -> Result<f64> {
    match value {
        Value::Float(v) => Ok(*v),
        // Integers are accepted where the wire wants a float
        Value::Int(v) => Ok(*v as f64),
        Value::Bytes(_) => Err(UbxError::WrongValueKind { field: field.name }),
    }
}

// =============================================================================
// Decode
// =============================================================================

/// Decode a validated payload into a record sequence
///
/// The payload must already be length-checked against the frame header;
/// the stream synchronizer guarantees this before dispatching here.
///
/// # Errors
///
/// - `UnknownMessageCode` - no registry entry; expected for firmware
///   message types not modeled, callers log and skip
/// - `NoLayoutForLength` - identity known, no layout fits the length
/// - `InvalidVariableLength` - variable remainder not divisible by the
///   block size (payload corruption or registry mismatch)
pub fn decode_frame(
    registry: &Registry,
    class: u8,
    id: u8,
    payload: &[u8],
) -> Result<DecodedMessage> {
    let entry = registry.lookup_by_codes(class, id)?;
    let length = payload.len() as u16;

    if let Some(layout) = entry.fixed_layout(length) {
        return Ok(DecodedMessage {
            name: entry.name,
            records: vec![read_fields(payload, layout.fields)],
        });
    }

    let Some(var) = entry.variable_layout() else {
        return Err(UbxError::NoLayoutForLength {
            name: entry.name,
            length,
        });
    };

    let body = payload
        .len()
        .checked_sub(var.header_len as usize)
        .filter(|rest| rest % var.block_len as usize == 0)
        .ok_or(UbxError::InvalidVariableLength {
            name: entry.name,
            length,
        })?;

    let block_count = body / var.block_len as usize;
    let mut records = Vec::with_capacity(1 + block_count);
    records.push(read_fields(&payload[..var.header_len as usize], var.header));
    for i in 0..block_count {
        let start = var.header_len as usize + i * var.block_len as usize;
        let block = &payload[start..start + var.block_len as usize];
        records.push(read_fields(block, var.block));
    }

    Ok(DecodedMessage {
        name: entry.name,
        records,
    })
}

fn read_fields(data: &[u8], fields: &[Field]) -> Record {
    let mut record = Record::new();
    let mut offset = 0;

    for field in fields {
        let size = field.ty.size();
        let raw = &data[offset..offset + size];
        offset += size;

        match field.ty {
            FieldType::Pad(_) => {}
            FieldType::U1 => record.set(field.name, raw[0]),
            FieldType::I1 => record.set(field.name, raw[0] as i8),
            FieldType::U2 => record.set(field.name, u16::from_le_bytes([raw[0], raw[1]])),
            FieldType::I2 => record.set(field.name, i16::from_le_bytes([raw[0], raw[1]])),
            FieldType::U4 => {
                record.set(field.name, u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
            }
            FieldType::I4 => {
                record.set(field.name, i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
            }
            FieldType::R4 => {
                record.set(field.name, f32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
            }
            FieldType::R8 => {
                let mut b = [0u8; 8];
                b.copy_from_slice(raw);
                record.set(field.name, f64::from_le_bytes(b));
            }
            FieldType::Bytes(_) => record.set(field.name, raw),
        }
    }

    record
}
