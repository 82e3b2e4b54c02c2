use std::cmp::Ordering;

sort_impl!("rust_selection_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Returns the position of the first minimal element, `None` if `v` is empty.
pub fn min_element_position<T, F>(v: &[T], is_less: &mut F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.is_empty() {
        return None;
    }

    let mut smallest = 0;
    for current in 1..v.len() {
        if is_less(&v[current], &v[smallest]) {
            smallest = current;
        }
    }

    Some(smallest)
}

/// Sorts `v` by repeatedly swapping the minimum of the unsorted tail into place.
///
/// Not stable. Only uses swaps, so a panic in `is_less` leaves a permutation of the input.
pub fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for current in 0..(len - 1) {
        let Some(offset) = min_element_position(&v[(current + 1)..], is_less) else {
            break;
        };

        let min = current + 1 + offset;
        if is_less(&v[min], &v[current]) {
            v.swap(min, current);
        }
    }
}
