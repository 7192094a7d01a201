use crate::Counters;

/// Top-down merge sort, ping-ponging between `data` and `scratch`.
///
/// Only comparisons are counted; elements are moved, never swapped.
pub fn merge_sort<T: Ord + Copy>(data: &mut [T], scratch: &mut Vec<T>, counters: &mut Counters) {
    let len = data.len();
    if len < 2 {
        return;
    }

    scratch.clear();
    scratch.extend_from_slice(data);
    merge_sort_recursive(scratch, data, 0, len, counters);
}

// On entry `src[left..right]` and `dst[left..right]` hold the same elements;
// on exit `dst[left..right]` is sorted.
fn merge_sort_recursive<T: Ord + Copy>(
    src: &mut [T],
    dst: &mut [T],
    left: usize,
    right: usize,
    counters: &mut Counters,
) {
    let len = right - left;
    if len < 2 {
        return;
    }

    let mid = left + (len >> 1);

    merge_sort_recursive(dst, src, left, mid, counters);
    merge_sort_recursive(dst, src, mid, right, counters);

    merge_ranges(src, dst, left, mid, right, counters);
}

fn merge_ranges<T: Ord + Copy>(
    src: &[T],
    dst: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    counters: &mut Counters,
) {
    let mut i = left;
    let mut j = mid;
    let mut k = left;

    while i < mid && j < right {
        counters.comparisons += 1;
        if src[i] <= src[j] {
            dst[k] = src[i];
            i += 1;
        } else {
            dst[k] = src[j];
            j += 1;
        }
        k += 1;
    }

    if i < mid {
        dst[k..k + (mid - i)].copy_from_slice(&src[i..mid]);
    } else if j < right {
        dst[k..k + (right - j)].copy_from_slice(&src[j..right]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_reuses_scratch() {
        let mut scratch = Vec::new();
        let cases = [
            vec![],
            vec![5],
            vec![3, 1, 2],
            vec![8, 8, 1, 8, 0, -4],
            (0..100).rev().collect::<Vec<i64>>(),
        ];

        for case in cases {
            let mut actual = case.clone();
            merge_sort(&mut actual, &mut scratch, &mut Counters::default());
            let mut expected = case;
            expected.sort();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn is_stable() {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        struct Keyed(u8, u8);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut data = [Keyed(2, 0), Keyed(1, 1), Keyed(2, 2), Keyed(1, 3)];
        merge_sort(&mut data, &mut Vec::new(), &mut Counters::default());
        assert_eq!(data, [Keyed(1, 1), Keyed(1, 3), Keyed(2, 0), Keyed(2, 2)]);
    }

    #[test]
    fn counts_comparisons_without_swaps() {
        // Two single-comparison merges, then [3, 4] + [1, 2] drains the right
        // run after two comparisons.
        let mut data = [4, 3, 2, 1];
        let mut counters = Counters::default();
        merge_sort(&mut data, &mut Vec::new(), &mut counters);

        assert_eq!(data, [1, 2, 3, 4]);
        assert_eq!(
            counters,
            Counters {
                comparisons: 4,
                swaps: 0
            }
        );
    }
}
