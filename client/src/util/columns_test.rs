use super::*;

fn column(name: &str, is_visible: bool) -> Column {
    Column { name: name.to_owned(), is_visible }
}

#[test]
fn missing_mask_shows_every_column() {
    assert_eq!(visible_columns_array(None, 3), vec![true, true, true]);
}

#[test]
fn mask_bits_map_to_column_indexes() {
    // 0b101: first and third column.
    assert_eq!(visible_columns_array(Some(5), 4), vec![true, false, true, false]);
}

#[test]
fn zero_mask_hides_everything() {
    assert_eq!(visible_columns_array(Some(0), 2), vec![false, false]);
}

#[test]
fn columns_past_mask_width_stay_visible() {
    let flags = visible_columns_array(Some(0), MAX_MASK_COLUMNS + 2);
    assert!(!flags[MAX_MASK_COLUMNS - 1]);
    assert!(flags[MAX_MASK_COLUMNS]);
    assert!(flags[MAX_MASK_COLUMNS + 1]);
}

#[test]
fn mask_from_columns_sets_visible_bits() {
    let columns = [column("id", true), column("name", false), column("city", true)];
    assert_eq!(visible_columns_mask(&columns), 5);
}

#[test]
fn mask_ignores_columns_past_width() {
    let columns: Vec<Column> = (0..MAX_MASK_COLUMNS + 1).map(|i| column(&i.to_string(), i == MAX_MASK_COLUMNS)).collect();
    assert_eq!(visible_columns_mask(&columns), 0);
}

#[test]
fn highest_addressable_bit_survives() {
    let mut columns: Vec<Column> = (0..MAX_MASK_COLUMNS).map(|i| column(&i.to_string(), false)).collect();
    columns[MAX_MASK_COLUMNS - 1].is_visible = true;
    let mask = visible_columns_mask(&columns);
    assert_eq!(mask, 1 << 63);
    assert!(visible_columns_array(Some(mask), MAX_MASK_COLUMNS)[MAX_MASK_COLUMNS - 1]);
}

#[test]
fn columns_from_fields_pairs_names_with_flags() {
    let columns = columns_from_fields(vec!["id".to_owned(), "name".to_owned()], Some(2));
    assert_eq!(columns, vec![column("id", false), column("name", true)]);
}
