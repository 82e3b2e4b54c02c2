/// Rotates `v` so that `v[mid..]` comes first, followed by `v[..mid]`.
///
/// Both groups keep their internal order. Only swaps are used, `O(len)` in total, and nothing is
/// allocated. Returns the new position of the boundary between the two groups, `v.len() - mid`.
///
/// Panics if `mid > v.len()`.
pub fn rotate<T>(v: &mut [T], mid: usize) -> usize {
    let len = v.len();
    assert!(mid <= len, "mid {mid} out of bounds for slice of length {len}");

    if mid == 0 {
        return len;
    }
    if mid == len {
        return 0;
    }

    let mut first = 0;
    let mut middle = mid;

    // Each pass swaps `v[middle..]` into place starting at `first`. If the front group runs out
    // before the back one, `next_read` tracks where the still misplaced front group now starts.
    // What is left over is again a rotation, of `v[write..]` at `next_read`.
    loop {
        let mut read = middle;
        let mut next_read = middle;
        let mut write = first;

        while read != len {
            if write == next_read {
                next_read = read;
            }

            v.swap(write, read);
            write += 1;
            read += 1;
        }

        if write == next_read || next_read == len {
            break;
        }

        first = write;
        middle = next_read;
    }

    len - mid
}
