use crate::Counters;

pub fn heap_sort<T: Ord>(data: &mut [T], counters: &mut Counters) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut start = (len - 2) / 2;
    loop {
        sift_down(data, start, len, counters);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        counters.swaps += 1;
        sift_down(data, 0, end, counters);
        end -= 1;
    }
}

#[inline]
fn sift_down<T: Ord>(data: &mut [T], mut root: usize, end: usize, counters: &mut Counters) {
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap_idx = child;
        if child + 1 < end {
            counters.comparisons += 1;
            if data[child] < data[child + 1] {
                swap_idx = child + 1;
            }
        }

        counters.comparisons += 1;
        if data[root] >= data[swap_idx] {
            break;
        }

        data.swap(root, swap_idx);
        counters.swaps += 1;
        root = swap_idx;
    }
}
