//! Column visibility bitmask encoding.
//!
//! The URL carries visible columns as one decimal integer: bit `i` set means
//! column `i` is shown. Only the first 64 columns are addressable; any column
//! past that is always shown and never encoded.

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

use crate::state::search::Column;

/// Number of columns a mask can address.
pub const MAX_MASK_COLUMNS: usize = 64;

/// Expand `mask` into one visibility flag per column.
///
/// `None` means no selection was ever recorded, so every column is visible.
pub fn visible_columns_array(mask: Option<u64>, len: usize) -> Vec<bool> {
    (0..len)
        .map(|i| match mask {
            Some(bits) if i < MAX_MASK_COLUMNS => bits & (1 << i) != 0,
            _ => true,
        })
        .collect()
}

/// Collapse column visibility back into a bitmask.
pub fn visible_columns_mask(columns: &[Column]) -> u64 {
    columns
        .iter()
        .take(MAX_MASK_COLUMNS)
        .enumerate()
        .filter(|(_, c)| c.is_visible)
        .fold(0, |mask, (i, _)| mask | (1 << i))
}

/// Pair field names with their decoded visibility.
pub fn columns_from_fields(fields: Vec<String>, mask: Option<u64>) -> Vec<Column> {
    let visible = visible_columns_array(mask, fields.len());
    fields
        .into_iter()
        .zip(visible)
        .map(|(name, is_visible)| Column { name, is_visible })
        .collect()
}
