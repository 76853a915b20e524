//! Pattern decomposition of compound list cells
//!
//! A list cell encodes repeated sub-records inline as delimited text, e.g.
//! `"1:bolt,2:nut"` with pattern `^(\d+):(\w+)$`. The cell is split on the
//! decoder's delimiter and every non-empty sub-token must match the column's
//! registered pattern; its capture groups map positionally onto the
//! sub-record descriptor's fields.

use regex::Regex;

use crate::error::{DecodeError, DecodeResult};
use crate::record::{Applied, Record};

/// Type-erased decomposition of a delimited cell into one record's list field
pub(crate) trait ListDecoder<T>: Send + Sync {
    fn decompose(
        &self,
        target: &mut T,
        raw: &str,
        pattern: &Regex,
        split: &str,
        column: &str,
        row: u32,
    ) -> DecodeResult<()>;
}

/// List binding for a field holding sub-records of type `S`
pub(crate) struct ListField<T, S: Record> {
    append: fn(&mut T, S),
}

impl<T, S: Record> ListField<T, S> {
    pub(crate) fn new(append: fn(&mut T, S)) -> Self {
        Self { append }
    }
}

impl<T, S: Record> ListDecoder<T> for ListField<T, S> {
    fn decompose(
        &self,
        target: &mut T,
        raw: &str,
        pattern: &Regex,
        split: &str,
        column: &str,
        row: u32,
    ) -> DecodeResult<()> {
        let descriptor = S::descriptor();

        // Sub-records are buffered so a failure later in the cell leaves the
        // target list untouched.
        let mut items: Vec<S> = Vec::new();

        for token in raw.split(split) {
            let Some(captures) = pattern.captures(token) else {
                // Empty sub-tokens (e.g. a trailing delimiter) contribute nothing
                if token.is_empty() {
                    continue;
                }

                return Err(DecodeError::PatternMismatch {
                    column: column.to_string(),
                    row,
                    value: raw.to_string(),
                });
            };

            let mut item = S::default();

            for (index, group) in captures.iter().skip(1).enumerate() {
                let Some(matched) = group else { continue };
                if matched.as_str().is_empty() {
                    continue;
                }

                let field = descriptor.field_at(index).ok_or_else(|| DecodeError::Descriptor {
                    column: column.to_string(),
                    row,
                    detail: format!(
                        "pattern captures {} groups but the sub-record describes {} fields",
                        captures.len() - 1,
                        descriptor.len()
                    ),
                })?;

                let key = format!("{column}.{}", field.name());

                match field
                    .binding()
                    .apply_scalar(&mut item, matched.as_str(), &key, row)?
                {
                    Applied::Assigned => {}
                    Applied::Unsupported => {
                        log::warn!("cannot assign capture group into non-scalar field {key}, skipping");
                    }
                }
            }

            items.push(item);
        }

        for item in items {
            (self.append)(target, item);
        }

        Ok(())
    }
}
