//! Record descriptors
//!
//! A [`Record`] is a decode target. Its [`Descriptor`] enumerates the
//! record's fields in declaration order: each field pairs a name with a
//! typed setter, so all type direction happens through the descriptor
//! instead of runtime reflection.
//!
//! ```rust
//! use sheetcast_core::{Descriptor, Record};
//!
//! #[derive(Debug, Default)]
//! struct Part {
//!     id: u64,
//!     name: String,
//! }
//!
//! impl Record for Part {
//!     fn descriptor() -> Descriptor<Self> {
//!         Descriptor::<Self>::new()
//!             .uint_field("Id", |part, v| part.id = v)
//!             .string_field("Name", |part, v| part.name = v)
//!     }
//! }
//! ```

use std::fmt;

use crate::convert;
use crate::decompose::{ListDecoder, ListField};
use crate::error::{DecodeError, DecodeResult};

/// A decode target
///
/// Fields are addressed by the names declared in the descriptor, which must
/// match the resolved (unqualified) column names of the sheet. Field order
/// matters for list decomposition: capture group i of a column pattern maps
/// onto field i of the sub-record descriptor.
pub trait Record: Default + 'static {
    /// The field descriptor for this record type
    fn descriptor() -> Descriptor<Self>;
}

/// Kind of a described field, used in error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Uint,
    Float,
    String,
    List,
}

impl FieldKind {
    /// Kind name as used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Int => "int",
            FieldKind::Uint => "uint",
            FieldKind::Float => "float",
            FieldKind::String => "string",
            FieldKind::List => "list",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Typed setter for one field of `T`
pub(crate) enum Binding<T> {
    Bool(fn(&mut T, bool)),
    Int(fn(&mut T, i64)),
    Uint(fn(&mut T, u64)),
    Float(fn(&mut T, f64)),
    String(fn(&mut T, String)),
    List(Box<dyn ListDecoder<T>>),
}

/// Outcome of a scalar assignment attempt
#[derive(Debug)]
pub(crate) enum Applied {
    Assigned,
    /// The binding is not a scalar kind; the caller logs and skips
    Unsupported,
}

impl<T> Binding<T> {
    pub(crate) fn kind(&self) -> FieldKind {
        match self {
            Binding::Bool(_) => FieldKind::Bool,
            Binding::Int(_) => FieldKind::Int,
            Binding::Uint(_) => FieldKind::Uint,
            Binding::Float(_) => FieldKind::Float,
            Binding::String(_) => FieldKind::String,
            Binding::List(_) => FieldKind::List,
        }
    }

    /// Convert `raw` to this binding's scalar kind and assign it.
    ///
    /// Conversion failures abort the row; a list binding reached through
    /// scalar assignment reports [`Applied::Unsupported`] instead.
    pub(crate) fn apply_scalar(
        &self,
        target: &mut T,
        raw: &str,
        column: &str,
        row: u32,
    ) -> DecodeResult<Applied> {
        match self {
            Binding::Bool(set) => set(target, convert::parse_bool(raw)),
            Binding::Int(set) => {
                let value = convert::parse_int(raw)
                    .map_err(|e| DecodeError::scalar(column, row, raw, FieldKind::Int, e))?;
                set(target, value);
            }
            Binding::Uint(set) => {
                let value = convert::parse_uint(raw)
                    .map_err(|e| DecodeError::scalar(column, row, raw, FieldKind::Uint, e))?;
                set(target, value);
            }
            Binding::Float(set) => {
                let value = convert::parse_float(raw)
                    .map_err(|e| DecodeError::scalar(column, row, raw, FieldKind::Float, e))?;
                set(target, value);
            }
            Binding::String(set) => set(target, raw.to_string()),
            Binding::List(_) => return Ok(Applied::Unsupported),
        }

        Ok(Applied::Assigned)
    }
}

/// One described field: a name and its typed setter
pub struct Field<T> {
    name: &'static str,
    binding: Binding<T>,
}

impl<T> Field<T> {
    /// Field name, matched against resolved column names
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field's kind
    pub fn kind(&self) -> FieldKind {
        self.binding.kind()
    }

    pub(crate) fn binding(&self) -> &Binding<T> {
        &self.binding
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Ordered field descriptor for a record type
///
/// Built once per record type through [`Record::descriptor`]; the builder
/// methods take plain `fn` pointers so descriptors stay `Send + Sync`.
pub struct Descriptor<T> {
    fields: Vec<Field<T>>,
}

impl<T: 'static> Descriptor<T> {
    /// Create an empty descriptor
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Describe a boolean field
    pub fn bool_field(self, name: &'static str, set: fn(&mut T, bool)) -> Self {
        self.push(name, Binding::Bool(set))
    }

    /// Describe a signed integer field
    pub fn int_field(self, name: &'static str, set: fn(&mut T, i64)) -> Self {
        self.push(name, Binding::Int(set))
    }

    /// Describe an unsigned integer field
    pub fn uint_field(self, name: &'static str, set: fn(&mut T, u64)) -> Self {
        self.push(name, Binding::Uint(set))
    }

    /// Describe a floating point field
    pub fn float_field(self, name: &'static str, set: fn(&mut T, f64)) -> Self {
        self.push(name, Binding::Float(set))
    }

    /// Describe a string field
    pub fn string_field(self, name: &'static str, set: fn(&mut T, String)) -> Self {
        self.push(name, Binding::String(set))
    }

    /// Describe a list field populated by pattern decomposition
    ///
    /// The cell is split on the decoder's split delimiter and every sub-token
    /// is matched against the column's registered pattern; each match builds
    /// one `S` which `append` adds to the target list.
    pub fn list_field<S: Record>(self, name: &'static str, append: fn(&mut T, S)) -> Self {
        self.push(name, Binding::List(Box::new(ListField::new(append))))
    }

    fn push(mut self, name: &'static str, binding: Binding<T>) -> Self {
        self.fields.push(Field { name, binding });
        self
    }

    /// Number of described fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the descriptor describes no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field<T>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a field by declaration position
    pub fn field_at(&self, index: usize) -> Option<&Field<T>> {
        self.fields.get(index)
    }
}

impl<T: 'static> Default for Descriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("fields", &self.fields)
            .finish()
    }
}
