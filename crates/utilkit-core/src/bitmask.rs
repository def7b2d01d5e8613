//! Flag-enum values <-> per-item selection masks
//!
//! A multi-select widget for a flags enum works on a selection mask where bit
//! `i` means "item `i` is checked". The enum value itself is the OR of the
//! checked items' values. A zero-valued item (usually `None`) is checked
//! exactly when the value is zero, and checking it clears the value.

/// Build the selection mask for `value` given each item's flag value.
pub fn selection_from_flags(value: i32, item_values: &[i32]) -> u32 {
    let mut selection = 0u32;
    for (i, &item) in item_values.iter().enumerate().take(32) {
        let checked = if item != 0 {
            value & item == item
        } else {
            value == 0
        };
        if checked {
            selection |= 1 << i;
        }
    }
    selection
}

/// Apply the difference between `old_selection` and `new_selection` to `value`.
pub fn apply_selection(
    value: i32,
    item_values: &[i32],
    old_selection: u32,
    new_selection: u32,
) -> i32 {
    let changes = old_selection ^ new_selection;
    let mut value = value;

    for (i, &item) in item_values.iter().enumerate().take(32) {
        let bit = 1u32 << i;
        if changes & bit == 0 {
            continue;
        }
        if new_selection & bit != 0 {
            if item == 0 {
                return 0;
            }
            value |= item;
        } else {
            value &= !item;
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    // None = 0, Ground = 1, Water = 2, Air = 4, Any = 7
    const ITEMS: [i32; 5] = [0, 1, 2, 4, 7];

    #[test]
    fn zero_value_selects_only_none() {
        assert_eq!(selection_from_flags(0, &ITEMS), 0b00001);
    }

    #[test]
    fn composite_item_checked_when_all_bits_set() {
        assert_eq!(selection_from_flags(3, &ITEMS), 0b00110);
        assert_eq!(selection_from_flags(7, &ITEMS), 0b11110);
    }

    #[test]
    fn checking_an_item_sets_its_bits() {
        let old = selection_from_flags(1, &ITEMS);
        let value = apply_selection(1, &ITEMS, old, old | 0b01000);
        assert_eq!(value, 5);
    }

    #[test]
    fn unchecking_an_item_clears_its_bits() {
        let old = selection_from_flags(7, &ITEMS);
        let value = apply_selection(7, &ITEMS, old, old & !0b00100);
        assert_eq!(value, 5);
    }

    #[test]
    fn checking_none_clears_everything() {
        let old = selection_from_flags(6, &ITEMS);
        let value = apply_selection(6, &ITEMS, old, old | 0b00001);
        assert_eq!(value, 0);
    }

    #[test]
    fn no_change_keeps_value() {
        let old = selection_from_flags(2, &ITEMS);
        assert_eq!(apply_selection(2, &ITEMS, old, old), 2);
    }
}
