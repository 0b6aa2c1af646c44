//! Message registry
//!
//! Static mapping from a message identity (class code, message code, name)
//! to its binary layouts. Bidirectional: name → entry for encoding,
//! (class, id) → entry for decoding.
//!
//! The catalog itself lives in `catalog.rs` as static data; this module
//! builds the lookup maps once and validates the catalog on construction.
//! A message may carry several fixed layouts overloaded by payload length
//! (e.g. a one-byte query form and a full response form) and at most one
//! variable layout (header block plus repeated blocks).

mod catalog;

pub use catalog::CATALOG;

use crate::error::{Result, UbxError};
use std::collections::HashMap;
use std::sync::OnceLock;

// =============================================================================
// Field and layout definitions
// =============================================================================

/// Primitive field type, little-endian on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Unsigned 8-bit
    U1,
    /// Signed 8-bit
    I1,
    /// Unsigned 16-bit
    U2,
    /// Signed 16-bit
    I2,
    /// Unsigned 32-bit
    U4,
    /// Signed 32-bit
    I4,
    /// IEEE 754 single
    R4,
    /// IEEE 754 double
    R8,
    /// Fixed-size byte array
    Bytes(u16),
    /// Reserved bytes, skipped on decode and zero-filled on encode
    Pad(u16),
}

impl FieldType {
    /// Wire size of this field in bytes
    pub fn size(self) -> usize {
        match self {
            Self::U1 | Self::I1 => 1,
            Self::U2 | Self::I2 => 2,
            Self::U4 | Self::I4 | Self::R4 => 4,
            Self::R8 => 8,
            Self::Bytes(n) | Self::Pad(n) => n as usize,
        }
    }
}

/// A named field inside a layout (padding fields carry an empty name)
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
}

/// Fixed layout: a byte-exact field schema for one (identity, length) pair
#[derive(Debug, Clone, Copy)]
pub struct FixedLayout {
    pub len: u16,
    pub fields: &'static [Field],
}

/// Variable layout: a header schema plus a repeating block schema
#[derive(Debug, Clone, Copy)]
pub struct VariableLayout {
    pub header_len: u16,
    pub header: &'static [Field],
    pub block_len: u16,
    pub block: &'static [Field],
}

/// Layout variants a catalog entry may declare
#[derive(Debug, Clone, Copy)]
pub enum LayoutDef {
    Fixed(FixedLayout),
    Variable(VariableLayout),
}

// Field constructors keep the catalog close to the receiver protocol
// documentation: one short call per field.

pub(crate) const fn u1(name: &'static str) -> Field {
    Field { name, ty: FieldType::U1 }
}

pub(crate) const fn i1(name: &'static str) -> Field {
    Field { name, ty: FieldType::I1 }
}

pub(crate) const fn u2(name: &'static str) -> Field {
    Field { name, ty: FieldType::U2 }
}

pub(crate) const fn i2(name: &'static str) -> Field {
    Field { name, ty: FieldType::I2 }
}

pub(crate) const fn u4(name: &'static str) -> Field {
    Field { name, ty: FieldType::U4 }
}

pub(crate) const fn i4(name: &'static str) -> Field {
    Field { name, ty: FieldType::I4 }
}

pub(crate) const fn r4(name: &'static str) -> Field {
    Field { name, ty: FieldType::R4 }
}

pub(crate) const fn r8(name: &'static str) -> Field {
    Field { name, ty: FieldType::R8 }
}

pub(crate) const fn bytes(name: &'static str, n: u16) -> Field {
    Field { name, ty: FieldType::Bytes(n) }
}

pub(crate) const fn pad(n: u16) -> Field {
    Field { name: "", ty: FieldType::Pad(n) }
}

pub(crate) const fn fixed(len: u16, fields: &'static [Field]) -> LayoutDef {
    LayoutDef::Fixed(FixedLayout { len, fields })
}

pub(crate) const fn variable(
    header_len: u16,
    header: &'static [Field],
    block_len: u16,
    block: &'static [Field],
) -> LayoutDef {
    LayoutDef::Variable(VariableLayout {
        header_len,
        header,
        block_len,
        block,
    })
}

// =============================================================================
// Catalog entries
// =============================================================================

/// One message identity with its declared layouts
#[derive(Debug)]
pub struct Entry {
    pub name: &'static str,
    pub class: u8,
    pub id: u8,
    pub layouts: &'static [LayoutDef],
}

impl Entry {
    /// Fixed layout matching the given payload length, if declared
    pub fn fixed_layout(&self, length: u16) -> Option<&'static FixedLayout> {
        self.layouts.iter().find_map(|layout| match layout {
            LayoutDef::Fixed(f) if f.len == length => Some(f),
            _ => None,
        })
    }

    /// The variable layout, if declared
    pub fn variable_layout(&self) -> Option<&'static VariableLayout> {
        self.layouts.iter().find_map(|layout| match layout {
            LayoutDef::Variable(v) => Some(v),
            _ => None,
        })
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Lookup maps over the static catalog, built once per process
pub struct Registry {
    by_name: HashMap<&'static str, &'static Entry>,
    by_codes: HashMap<(u8, u8), &'static Entry>,
}

impl Registry {
    /// Build the registry from the static catalog
    ///
    /// Validates catalog invariants: unique names, unique (class, id) pairs,
    /// at most one variable layout per entry, and field sizes summing to the
    /// declared layout lengths. A violation is a catalog transcription bug,
    /// so construction panics rather than limping along with bad data.
    pub fn new() -> Self {
        let mut by_name = HashMap::with_capacity(CATALOG.len());
        let mut by_codes = HashMap::with_capacity(CATALOG.len());

        for entry in CATALOG {
            validate_entry(entry);
            let prev = by_name.insert(entry.name, entry);
            assert!(prev.is_none(), "duplicate message name {}", entry.name);
            let prev = by_codes.insert((entry.class, entry.id), entry);
            assert!(
                prev.is_none(),
                "duplicate message codes ({:#04x}, {:#04x})",
                entry.class,
                entry.id
            );
        }

        Self { by_name, by_codes }
    }

    /// Shared process-wide registry
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::new)
    }

    /// Resolve an identity by message name
    ///
    /// # Errors
    ///
    /// `UnknownMessageName` if no catalog entry carries this name.
    pub fn lookup_by_name(&self, name: &str) -> Result<&'static Entry> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| UbxError::UnknownMessageName { name: name.to_string() })
    }

    /// Resolve an identity by (class, id) codes
    ///
    /// # Errors
    ///
    /// `UnknownMessageCode` if the pair is not in the catalog. Callers on
    /// the decode path treat this as ignore-and-log.
    pub fn lookup_by_codes(&self, class: u8, id: u8) -> Result<&'static Entry> {
        self.by_codes
            .get(&(class, id))
            .copied()
            .ok_or(UbxError::UnknownMessageCode { class, id })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_entry(entry: &Entry) {
    let mut variable_count = 0;
    for layout in entry.layouts {
        match layout {
            LayoutDef::Fixed(f) => {
                let size: usize = f.fields.iter().map(|field| field.ty.size()).sum();
                assert_eq!(
                    size, f.len as usize,
                    "{}: fixed layout fields sum to {} but declare {}",
                    entry.name, size, f.len
                );
            }
            LayoutDef::Variable(v) => {
                variable_count += 1;
                let header: usize = v.header.iter().map(|field| field.ty.size()).sum();
                assert_eq!(
                    header, v.header_len as usize,
                    "{}: header fields sum to {} but declare {}",
                    entry.name, header, v.header_len
                );
                let block: usize = v.block.iter().map(|field| field.ty.size()).sum();
                assert_eq!(
                    block, v.block_len as usize,
                    "{}: block fields sum to {} but declare {}",
                    entry.name, block, v.block_len
                );
                assert!(v.block_len > 0, "{}: zero-size repeat block", entry.name);
            }
        }
    }
    assert!(
        variable_count <= 1,
        "{}: more than one variable layout",
        entry.name
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_validates() {
        // Registry::new runs all catalog invariant checks
        let registry = Registry::new();
        assert!(registry.by_name.len() > 70);
        assert_eq!(registry.by_name.len(), registry.by_codes.len());
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = Registry::new();
        let entry = registry.lookup_by_name("CFG-RATE").unwrap();
        assert_eq!((entry.class, entry.id), (0x06, 0x08));
    }

    #[test]
    fn test_lookup_by_codes() {
        let registry = Registry::new();
        let entry = registry.lookup_by_codes(0x01, 0x3b).unwrap();
        assert_eq!(entry.name, "NAV-SVIN");
    }

    #[test]
    fn test_lookup_unknown_name() {
        let registry = Registry::new();
        assert!(matches!(
            registry.lookup_by_name("NAV-NOPE"),
            Err(UbxError::UnknownMessageName { .. })
        ));
    }

    #[test]
    fn test_lookup_unknown_codes() {
        let registry = Registry::new();
        assert!(matches!(
            registry.lookup_by_codes(0x99, 0x99),
            Err(UbxError::UnknownMessageCode { .. })
        ));
    }

    #[test]
    fn test_length_overloaded_layouts() {
        let registry = Registry::new();
        let entry = registry.lookup_by_name("RXM-ALM").unwrap();
        assert!(entry.fixed_layout(1).is_some());
        assert!(entry.fixed_layout(8).is_some());
        assert!(entry.fixed_layout(40).is_some());
        assert!(entry.fixed_layout(2).is_none());
        assert!(entry.variable_layout().is_none());
    }

    #[test]
    fn test_query_and_variable_forms_coexist() {
        let registry = Registry::new();
        let entry = registry.lookup_by_name("CFG-PRT").unwrap();
        assert!(entry.fixed_layout(1).is_some());
        let var = entry.variable_layout().unwrap();
        assert_eq!(var.header_len, 0);
        assert_eq!(var.block_len, 20);
    }

    #[test]
    fn test_identity_without_layouts() {
        let registry = Registry::new();
        let entry = registry.lookup_by_name("AID-REQ").unwrap();
        assert!(entry.layouts.is_empty());
    }

    #[test]
    fn test_global_is_shared() {
        let a = Registry::global() as *const Registry;
        let b = Registry::global() as *const Registry;
        assert_eq!(a, b);
    }
}
