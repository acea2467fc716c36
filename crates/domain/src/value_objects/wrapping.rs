//! Wrap-around index arithmetic shared by the slide rotator and the playlist.

/// Index after `index` in a collection of `len`, wrapping to `0` at the end.
///
/// An empty collection always yields `0`.
///
/// ```
/// use keepsake_domain::value_objects::wrap_next;
///
/// assert_eq!(wrap_next(4, 5), 0);
/// assert_eq!(wrap_next(1, 5), 2);
/// ```
#[inline]
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index % len + 1) % len
}

/// Index before `index` in a collection of `len`, wrapping to the end at `0`.
///
/// ```
/// use keepsake_domain::value_objects::wrap_prev;
///
/// assert_eq!(wrap_prev(0, 4), 3);
/// assert_eq!(wrap_prev(2, 4), 1);
/// ```
#[inline]
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index % len + len - 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_stays_at_zero() {
        assert_eq!(wrap_next(0, 0), 0);
        assert_eq!(wrap_prev(0, 0), 0);
    }

    #[test]
    fn single_item_always_wraps_to_itself() {
        assert_eq!(wrap_next(0, 1), 0);
        assert_eq!(wrap_prev(0, 1), 0);
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        fn arb_position() -> impl Strategy<Value = (usize, usize)> {
            (1usize..64).prop_flat_map(|len| (0..len, Just(len)))
        }

        proptest! {
            #[test]
            fn prev_undoes_next((index, len) in arb_position()) {
                prop_assert_eq!(wrap_prev(wrap_next(index, len), len), index);
            }

            #[test]
            fn next_undoes_prev((index, len) in arb_position()) {
                prop_assert_eq!(wrap_next(wrap_prev(index, len), len), index);
            }

            #[test]
            fn stays_in_range_after_any_walk(
                (start, len) in arb_position(),
                steps in proptest::collection::vec(any::<bool>(), 0..200),
            ) {
                let mut index = start;
                for forward in steps {
                    index = if forward { wrap_next(index, len) } else { wrap_prev(index, len) };
                    prop_assert!(index < len);
                }
            }
        }
    }
}
