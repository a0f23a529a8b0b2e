#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    debug_assert!(addend <= capacity);
    (index + addend) & (capacity - 1)
}

/// Distance from `read` to `write`. Equal cursors give zero, so callers
/// must consult the full flag to tell a full queue from an empty one.
#[inline]
pub fn count(read: usize, write: usize, capacity: usize) -> usize {
    debug_assert!(write < capacity);
    debug_assert!(read < capacity);
    if write >= read {
        write - read
    } else {
        capacity + write - read
    }
}

#[cfg(test)]
mod tests {
    use super::{count, wrap_add};

    #[test]
    fn wraps_silently() {
        assert_eq!(wrap_add(3, 1, 4), 0);
        assert_eq!(wrap_add(0, 1, 1), 0);
        assert_eq!(wrap_add(5, 3, 8), 0);
        assert_eq!(wrap_add(2, 1, 8), 3);
    }

    #[test]
    fn count_across_wrap() {
        assert_eq!(count(0, 0, 4), 0);
        assert_eq!(count(1, 3, 4), 2);
        assert_eq!(count(3, 1, 4), 2);
        assert_eq!(count(3, 2, 4), 3);
    }
}
