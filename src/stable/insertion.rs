use std::cmp::Ordering;
use std::mem;
use std::ptr;

sort_impl!("rust_insertion_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts `v` in place, stable. Quadratic, meant for short windows.
///
/// If `is_less` panics every original element is still in `v` exactly once, in unspecified order.
pub fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // Grow the sorted prefix `v[..i]` one element at a time.
    for i in 1..len {
        // SAFETY: `v[..=i]` is at least 2 long.
        unsafe {
            insert_tail(&mut v[..=i], is_less);
        }
    }
}

/// When dropped, copies from `src` into `dest`.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points to the element taken out of the slice, `dest` to the one slot that
        // no longer holds a live element.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}

/// Inserts `v[v.len() - 1]` into the sorted prefix `v[..v.len() - 1]` so that all of `v` is sorted.
unsafe fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 2);

    let arr_ptr = v.as_mut_ptr();
    let i = v.len() - 1;

    // SAFETY: caller must ensure v is at least len 2.
    unsafe {
        let i_ptr = arr_ptr.add(i);

        // Compare the value in place. If it already sits right, nothing was copied and any
        // modification `is_less` made through interior mutability stays where it is.
        if !is_less(&*i_ptr, &*i_ptr.sub(1)) {
            return;
        }

        // From here on only `tmp` is compared, it is the value that will be written back.
        let tmp = mem::ManuallyDrop::new(ptr::read(i_ptr));

        // If `is_less` panics, `hole` gets dropped and writes `tmp` into the open slot, so `v`
        // still holds every element exactly once.
        let mut hole = InsertionHole {
            src: &*tmp,
            dest: i_ptr.sub(1),
        };
        ptr::copy_nonoverlapping(hole.dest, i_ptr, 1);

        for j in (0..(i - 1)).rev() {
            let j_ptr = arr_ptr.add(j);
            if !is_less(&*tmp, &*j_ptr) {
                break;
            }

            ptr::copy_nonoverlapping(j_ptr, hole.dest, 1);
            hole.dest = j_ptr;
        }
        // `hole` gets dropped and thus copies `tmp` into the remaining slot.
    }
}
