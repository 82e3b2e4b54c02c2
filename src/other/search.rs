//! Binary search over slices partitioned with respect to the searched value.

/// Returns the index of the first element that is not less than `value`, `v.len()` if there is
/// none.
pub fn lower_bound<T, F>(v: &[T], value: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut first = 0;
    let mut last = v.len();

    while first != last {
        let middle = first + (last - first) / 2;
        if is_less(&v[middle], value) {
            first = middle + 1;
        } else {
            last = middle;
        }
    }

    first
}

/// Returns the index of the first element that is greater than `value`, `v.len()` if there is
/// none.
pub fn upper_bound<T, F>(v: &[T], value: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    lower_bound(v, value, |elem, value| !is_less(value, elem))
}

/// Returns the index of an element equivalent to `value`, `None` if there is none.
///
/// If several elements are equivalent any of them may be returned.
pub fn binary_search<T, F>(v: &[T], value: &T, mut is_less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut first = 0;
    let mut last = v.len();

    while first != last {
        let middle = first + (last - first) / 2;
        if is_less(&v[middle], value) {
            first = middle + 1;
        } else if is_less(value, &v[middle]) {
            last = middle;
        } else {
            return Some(middle);
        }
    }

    None
}
