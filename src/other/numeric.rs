//! Folds and prefix scans.

/// Folds pairs of elements, `reduce(acc, zip(a_i, b_i))`, stopping at the end of the shorter
/// input.
pub fn zip_reduce<A, B, Z, T, ZipF, ReduceF>(
    a: impl IntoIterator<Item = A>,
    b: impl IntoIterator<Item = B>,
    init: T,
    mut zip: ZipF,
    mut reduce: ReduceF,
) -> T
where
    ZipF: FnMut(A, B) -> Z,
    ReduceF: FnMut(T, Z) -> T,
{
    a.into_iter()
        .zip(b)
        .fold(init, |acc, (a, b)| reduce(acc, zip(a, b)))
}

/// Folds `reduce(acc, f(elem))` over `iter`.
pub fn transform_reduce<I, U, T, TransformF, ReduceF>(
    iter: I,
    init: T,
    mut f: TransformF,
    mut reduce: ReduceF,
) -> T
where
    I: IntoIterator,
    TransformF: FnMut(I::Item) -> U,
    ReduceF: FnMut(T, U) -> T,
{
    iter.into_iter().fold(init, |acc, elem| reduce(acc, f(elem)))
}

/// Writes the running fold of `input` into `output`, the i-th output includes the i-th input.
///
/// Returns the number of values written, `input.len()`. Panics if `output` is shorter than
/// `input`.
pub fn inclusive_scan<T, F>(input: &[T], output: &mut [T], mut op: F) -> usize
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    assert!(output.len() >= input.len());

    let Some((head, tail)) = input.split_first() else {
        return 0;
    };

    let mut acc = head.clone();
    output[0] = acc.clone();

    for (elem, dest) in tail.iter().zip(&mut output[1..]) {
        acc = op(acc, elem);
        *dest = acc.clone();
    }

    input.len()
}

/// Writes the running fold of `input` into `output` starting from `init`, the i-th output
/// excludes the i-th input.
///
/// Returns the number of values written, `input.len()`. Panics if `output` is shorter than
/// `input`.
pub fn exclusive_scan<T, F>(input: &[T], output: &mut [T], init: T, mut op: F) -> usize
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    assert!(output.len() >= input.len());

    let len = input.len();
    if len == 0 {
        return 0;
    }

    let mut acc = init;
    output[0] = acc.clone();

    // The last input contributes to no output.
    for (elem, dest) in input[..len - 1].iter().zip(&mut output[1..]) {
        acc = op(acc, elem);
        *dest = acc.clone();
    }

    len
}
