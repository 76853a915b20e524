//! Row decoding
//!
//! The [`Decoder`] pairs a [`RowSource`] with the read-only lookup tables
//! (rename table, custom decoder registry, pattern table) and produces one
//! [`RowDecoder`] per data row. A `RowDecoder` orchestrates column
//! resolution, custom decoders, scalar conversion and list decomposition
//! across the cells of its row.

use std::any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::{DecodeError, DecodeResult};
use crate::key;
use crate::options::{DecodeOptions, UnknownColumns};
use crate::record::{Applied, Binding, Record};
use crate::registry::{CustomFailure, DecoderRegistry};
use crate::source::RowSource;

/// Shared lookup tables, constructed once and never mutated afterwards
pub(crate) struct DecodeTables {
    rename: HashMap<String, String>,
    patterns: HashMap<String, Regex>,
    decoders: DecoderRegistry,
    split: String,
    unknown_columns: UnknownColumns,
}

/// Decodes a [`RowSource`]'s sheets into typed records
pub struct Decoder<S> {
    source: S,
    tables: DecodeTables,
}

impl<S: RowSource> Decoder<S> {
    /// Create a decoder with default options
    pub fn new(source: S) -> Self {
        Self::with_options(source, DecodeOptions::default())
    }

    /// Create a decoder with the given tables and split delimiter
    pub fn with_options(source: S, options: DecodeOptions) -> Self {
        Self {
            source,
            tables: DecodeTables {
                rename: options.rename,
                patterns: options.patterns,
                decoders: options.decoders,
                split: options.split,
                unknown_columns: options.unknown_columns,
            },
        }
    }

    /// Names of the source's sheets
    pub fn sheet_names(&self) -> Vec<String> {
        self.source.sheet_names()
    }

    /// The underlying row source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// One [`RowDecoder`] per data row of the named sheet, row ids counted
    /// from zero.
    ///
    /// An unknown sheet, or a sheet without a header row and at least one
    /// data row, produces no decoders.
    pub fn for_sheet(&self, name: &str) -> Vec<RowDecoder<'_>> {
        let Some(rows) = self.source.rows(name) else {
            return Vec::new();
        };
        if rows.len() < 2 {
            return Vec::new();
        }

        let sheet: Arc<str> = Arc::from(name);
        let mut rows = rows.into_iter();
        let header: Arc<[String]> = match rows.next() {
            Some(cells) => cells.into(),
            None => return Vec::new(),
        };

        rows.enumerate()
            .map(|(id, cells)| RowDecoder {
                tables: &self.tables,
                sheet: sheet.clone(),
                header: header.clone(),
                cells,
                id: id as u32,
            })
            .collect()
    }
}

impl<S> fmt::Debug for Decoder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder").finish_non_exhaustive()
    }
}

/// Decodes one data row into a caller-supplied record
///
/// Cells pair positionally with the header: cell i is described by header
/// cell i. Cells beyond the header's length carry no column name and are
/// ignored.
pub struct RowDecoder<'d> {
    tables: &'d DecodeTables,
    sheet: Arc<str>,
    header: Arc<[String]>,
    cells: Vec<String>,
    id: u32,
}

impl RowDecoder<'_> {
    /// The sheet this row belongs to
    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// Zero-based data-row index
    pub fn row_id(&self) -> u32 {
        self.id
    }

    /// The row's raw cell texts
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Decode this row into `target`.
    ///
    /// Any error aborts the remainder of the row; fields assigned before the
    /// failing cell remain set on the target.
    pub fn decode<T: Record>(&self, target: &mut T) -> DecodeResult<()> {
        let descriptor = T::descriptor();

        for (raw_header, cell) in self.header.iter().zip(&self.cells) {
            let column = key::resolve(&self.tables.rename, &self.sheet, raw_header);

            if let Some(custom) = self.tables.decoders.get(column.qualified()) {
                custom(target, cell).map_err(|failure| match failure {
                    CustomFailure::Target { expected } => DecodeError::InvalidTarget {
                        column: column.qualified().to_string(),
                        expected,
                        found: any::type_name::<T>(),
                    },
                    CustomFailure::Decoder(source) => DecodeError::Custom {
                        column: column.qualified().to_string(),
                        row: self.id,
                        value: cell.clone(),
                        source,
                    },
                })?;
                continue;
            }

            let Some(field) = descriptor.field(column.field()) else {
                match self.tables.unknown_columns {
                    UnknownColumns::Warn => {
                        log::warn!(
                            "no record field matches column {column} (row {}), skipping cell",
                            self.id
                        );
                        continue;
                    }
                    UnknownColumns::Deny => {
                        return Err(DecodeError::UnknownColumn {
                            column: column.qualified().to_string(),
                            row: self.id,
                        });
                    }
                }
            };

            if let Binding::List(list) = field.binding() {
                let pattern =
                    self.tables.patterns.get(column.qualified()).ok_or_else(|| {
                        DecodeError::MissingPattern {
                            column: column.qualified().to_string(),
                            row: self.id,
                        }
                    })?;

                list.decompose(
                    target,
                    cell,
                    pattern,
                    &self.tables.split,
                    column.qualified(),
                    self.id,
                )?;
                continue;
            }

            match field
                .binding()
                .apply_scalar(target, cell, column.qualified(), self.id)?
            {
                Applied::Assigned => {}
                Applied::Unsupported => {
                    log::warn!(
                        "field for column {column} has an unsupported kind, skipping cell (row {})",
                        self.id
                    );
                }
            }
        }

        Ok(())
    }

    /// Decode into an optional record, initializing it in place when empty
    pub fn decode_opt<T: Record>(&self, target: &mut Option<T>) -> DecodeResult<()> {
        let record = target.get_or_insert_with(T::default);
        self.decode(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Descriptor;
    use crate::source::MemorySource;

    #[derive(Debug, Default, PartialEq)]
    struct Tag {
        id: u64,
        label: String,
    }

    impl Record for Tag {
        fn descriptor() -> Descriptor<Self> {
            Descriptor::<Self>::new()
                .uint_field("Id", |r, v| r.id = v)
                .string_field("Label", |r, v| r.label = v)
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Item {
        id: u64,
        name: String,
        price: f64,
        active: bool,
        tags: Vec<Tag>,
    }

    impl Record for Item {
        fn descriptor() -> Descriptor<Self> {
            Descriptor::<Self>::new()
                .uint_field("Id", |r, v| r.id = v)
                .string_field("Name", |r, v| r.name = v)
                .float_field("Price", |r, v| r.price = v)
                .bool_field("Active", |r, v| r.active = v)
                .list_field::<Tag>("Tags", |r, v| r.tags.push(v))
        }
    }

    fn item_source() -> MemorySource {
        MemorySource::new().with_sheet(
            "Items",
            [
                ["Id", "Name", "Price", "Active", "Tags"],
                ["1", "bolt", "0.25", "true", "1:small,2:steel"],
                ["2", "nut", "0.10", "0", ""],
            ],
        )
    }

    fn item_options() -> DecodeOptions {
        let mut options = DecodeOptions::default();
        options.patterns.insert(
            "Items.Tags".to_string(),
            Regex::new(r"^(\d+):(\w+)$").unwrap(),
        );
        options
    }

    #[test]
    fn test_decode_full_row() {
        let decoder = Decoder::with_options(item_source(), item_options());
        let rows = decoder.for_sheet("Items");
        assert_eq!(rows.len(), 2);

        let mut item = Item::default();
        rows[0].decode(&mut item).unwrap();

        assert_eq!(
            item,
            Item {
                id: 1,
                name: "bolt".to_string(),
                price: 0.25,
                active: true,
                tags: vec![
                    Tag { id: 1, label: "small".to_string() },
                    Tag { id: 2, label: "steel".to_string() },
                ],
            }
        );
    }

    #[test]
    fn test_decode_is_deterministic() {
        let decoder = Decoder::with_options(item_source(), item_options());
        let rows = decoder.for_sheet("Items");

        let mut first = Item::default();
        let mut second = Item::default();
        rows[0].decode(&mut first).unwrap();
        rows[0].decode(&mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_list_cell_decodes_empty() {
        let decoder = Decoder::with_options(item_source(), item_options());
        let rows = decoder.for_sheet("Items");

        let mut item = Item::default();
        rows[1].decode(&mut item).unwrap();

        assert_eq!(item.id, 2);
        assert!(!item.active);
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_row_ids_are_zero_based() {
        let decoder = Decoder::with_options(item_source(), item_options());
        let rows = decoder.for_sheet("Items");

        assert_eq!(rows[0].row_id(), 0);
        assert_eq!(rows[1].row_id(), 1);
        assert_eq!(rows[0].sheet(), "Items");
    }

    #[test]
    fn test_scalar_failure_aborts_row_keeps_earlier_fields() {
        let source = MemorySource::new().with_sheet(
            "Items",
            [
                ["Id", "Name", "Price"],
                ["1", "bolt", "abc"],
            ],
        );
        let decoder = Decoder::new(source);

        let mut item = Item::default();
        let err = decoder.for_sheet("Items")[0].decode(&mut item).unwrap_err();

        match err {
            DecodeError::Scalar { column, row, value, .. } => {
                assert_eq!(column, "Items.Price");
                assert_eq!(row, 0);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // No rollback: cells before the failure stay assigned
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "bolt");
        assert_eq!(item.price, 0.0);
    }

    #[test]
    fn test_unsigned_rejects_negative() {
        let source = MemorySource::new().with_sheet("Items", [["Id"], ["-1"]]);
        let decoder = Decoder::new(source);

        let mut item = Item::default();
        let err = decoder.for_sheet("Items")[0].decode(&mut item).unwrap_err();
        assert!(matches!(err, DecodeError::Scalar { .. }));
    }

    #[test]
    fn test_missing_pattern_is_fatal() {
        let decoder = Decoder::new(item_source());

        let mut item = Item::default();
        let err = decoder.for_sheet("Items")[0].decode(&mut item).unwrap_err();

        match err {
            DecodeError::MissingPattern { column, row } => {
                assert_eq!(column, "Items.Tags");
                assert_eq!(row, 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // Fields before the list column remain set, the list stays empty
        assert_eq!(item.name, "bolt");
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_unknown_column_warns_by_default() {
        let source = MemorySource::new().with_sheet(
            "Items",
            [["Id", "Comment"], ["1", "left over"]],
        );
        let decoder = Decoder::new(source);

        let mut item = Item::default();
        decoder.for_sheet("Items")[0].decode(&mut item).unwrap();

        assert_eq!(item.id, 1);
    }

    #[test]
    fn test_unknown_column_deny() {
        let source = MemorySource::new().with_sheet(
            "Items",
            [["Id", "Comment"], ["1", "left over"]],
        );
        let options = DecodeOptions {
            unknown_columns: UnknownColumns::Deny,
            ..Default::default()
        };
        let decoder = Decoder::with_options(source, options);

        let mut item = Item::default();
        let err = decoder.for_sheet("Items")[0].decode(&mut item).unwrap_err();

        match err {
            DecodeError::UnknownColumn { column, row } => {
                assert_eq!(column, "Items.Comment");
                assert_eq!(row, 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rename_table_resolves_columns() {
        let source = MemorySource::new().with_sheet(
            "Items",
            [["ItemID", "Name"], ["5", "washer"]],
        );
        let mut options = DecodeOptions::default();
        options
            .rename
            .insert("Items.ItemID".to_string(), "Id".to_string());
        let decoder = Decoder::with_options(source, options);

        let mut item = Item::default();
        decoder.for_sheet("Items")[0].decode(&mut item).unwrap();

        assert_eq!(item.id, 5);
        assert_eq!(item.name, "washer");
    }

    #[test]
    fn test_custom_decoder_takes_precedence() {
        let source = MemorySource::new().with_sheet("Items", [["Id"], ["not-a-number"]]);
        let mut options = DecodeOptions::default();
        options.decoders.register::<Item, _>("Items.Id", |item, _raw| {
            item.id = 99;
            Ok(())
        });
        let decoder = Decoder::with_options(source, options);

        // Built-in uint conversion would fail on "not-a-number"; the custom
        // decoder bypasses it.
        let mut item = Item::default();
        decoder.for_sheet("Items")[0].decode(&mut item).unwrap();
        assert_eq!(item.id, 99);
    }

    #[test]
    fn test_custom_decoder_failure_carries_context() {
        let source = MemorySource::new().with_sheet("Items", [["Id"], ["7"]]);
        let mut options = DecodeOptions::default();
        options.decoders.register::<Item, _>("Items.Id", |_, raw| {
            Err(format!("rejected '{raw}'").into())
        });
        let decoder = Decoder::with_options(source, options);

        let mut item = Item::default();
        let err = decoder.for_sheet("Items")[0].decode(&mut item).unwrap_err();

        match err {
            DecodeError::Custom { column, row, value, .. } => {
                assert_eq!(column, "Items.Id");
                assert_eq!(row, 0);
                assert_eq!(value, "7");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_decoder_type_mismatch() {
        let source = MemorySource::new().with_sheet("Items", [["Id"], ["7"]]);
        let mut options = DecodeOptions::default();
        options.decoders.register::<Tag, _>("Items.Id", |tag, raw| {
            tag.id = raw.parse()?;
            Ok(())
        });
        let decoder = Decoder::with_options(source, options);

        // Registered for Tag, invoked with Item: the downcast mismatch is
        // reported, not propagated as a fault.
        let mut item = Item::default();
        let err = decoder.for_sheet("Items")[0].decode(&mut item).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidTarget { .. }));
    }

    #[test]
    fn test_header_only_sheet_yields_no_rows() {
        let source = MemorySource::new().with_sheet("Items", [["Id", "Name"]]);
        let decoder = Decoder::new(source);

        assert!(decoder.for_sheet("Items").is_empty());
    }

    #[test]
    fn test_unknown_sheet_yields_no_rows() {
        let decoder = Decoder::new(MemorySource::new());
        assert!(decoder.for_sheet("Missing").is_empty());
    }

    #[test]
    fn test_short_row_leaves_trailing_fields_default() {
        let source = MemorySource::new().with_sheet(
            "Items",
            vec![
                vec!["Id", "Name", "Price"],
                vec!["3", "screw"],
            ],
        );
        let decoder = Decoder::new(source);

        let mut item = Item::default();
        decoder.for_sheet("Items")[0].decode(&mut item).unwrap();

        assert_eq!(item.id, 3);
        assert_eq!(item.name, "screw");
        assert_eq!(item.price, 0.0);
    }

    #[test]
    fn test_decode_opt_initializes_in_place() {
        let decoder = Decoder::with_options(item_source(), item_options());
        let rows = decoder.for_sheet("Items");

        let mut item: Option<Item> = None;
        rows[0].decode_opt(&mut item).unwrap();

        let item = item.unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.tags.len(), 2);
    }

    #[test]
    fn test_custom_split_delimiter() {
        let source = MemorySource::new().with_sheet(
            "Items",
            [["Id", "Tags"], ["1", "1:a;2:b"]],
        );
        let mut options = item_options();
        options.split = ";".to_string();
        let decoder = Decoder::with_options(source, options);

        let mut item = Item::default();
        decoder.for_sheet("Items")[0].decode(&mut item).unwrap();

        assert_eq!(item.tags.len(), 2);
    }
}
