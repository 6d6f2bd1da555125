/// Convert a 1-based page index into the zero-based row offset used by the
/// data layer. Indices below 1 clamp to the first row.
pub fn calculate_row_index(page_index: i64, page_size: i64) -> i64 {
    if page_index > 0 {
        (page_index - 1) * page_size
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_row_zero() {
        assert_eq!(calculate_row_index(1, 10), 0);
    }

    #[test]
    fn later_pages_offset_by_full_pages() {
        assert_eq!(calculate_row_index(2, 10), 10);
        assert_eq!(calculate_row_index(3, 5), 10);
        assert_eq!(calculate_row_index(7, 4), 24);
    }

    #[test]
    fn indices_below_one_clamp_to_zero() {
        assert_eq!(calculate_row_index(0, 10), 0);
        assert_eq!(calculate_row_index(-3, 10), 0);
    }
}
