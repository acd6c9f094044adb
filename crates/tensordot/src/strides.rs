//! Stride computation utilities.
//!
//! Tensors are stored in row-major (C) order: the last axis is contiguous.

/// Compute row-major strides from shape.
///
/// For shape [d0, d1, d2], returns strides [d1*d2, d2, 1]. Strides saturate
/// instead of overflowing; a shape that large can only be allocated when some
/// axis is zero, and then no stride is ever used to address an element.
///
/// # Examples
///
/// ```
/// use tensordot::strides::compute_strides;
///
/// assert_eq!(compute_strides(&[3, 4, 5]), vec![20, 5, 1]);
/// assert_eq!(compute_strides(&[2, 3]), vec![3, 1]);
/// assert_eq!(compute_strides(&[5]), vec![1]);
/// assert_eq!(compute_strides(&[]), vec![]);
/// ```
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    let mut stride: usize = 1;

    for (s, &dim) in strides.iter_mut().zip(shape.iter()).rev() {
        *s = stride;
        stride = stride.saturating_mul(dim);
    }

    strides
}

/// Number of elements implied by a shape. A rank-0 shape holds one element.
///
/// Any zero-length axis makes the count zero regardless of the other axes;
/// otherwise the product saturates at `usize::MAX`.
#[inline]
pub fn num_elements(shape: &[usize]) -> usize {
    if shape.contains(&0) {
        return 0;
    }
    shape.iter().fold(1usize, |n, &dim| n.saturating_mul(dim))
}

/// Convert cartesian indices to a linear offset.
#[inline]
pub fn cartesian_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides.iter())
        .map(|(&idx, &stride)| idx * stride)
        .sum()
}

/// Convert a linear index to cartesian indices using row-major order.
pub fn linear_to_cartesian(mut linear: usize, shape: &[usize]) -> Vec<usize> {
    let mut indices = vec![0; shape.len()];

    for (idx, &dim) in indices.iter_mut().zip(shape.iter()).rev() {
        *idx = linear % dim;
        linear /= dim;
    }

    indices
}

/// Offsets into a buffer for every multi-index over a subset of its axes.
///
/// `axes` selects which axes of a tensor with `shape`/`strides` are walked;
/// the returned table is in row-major order over those axes (the first listed
/// axis varies slowest). Entry `i` is the buffer offset contributed by the
/// `i`-th combination.
///
/// # Examples
///
/// ```
/// use tensordot::strides::{compute_strides, offset_table};
///
/// let shape = [2, 3];
/// let strides = compute_strides(&shape);
/// // Walking axis 1 only: columns of a row.
/// assert_eq!(offset_table(&[1], &shape, &strides), vec![0, 1, 2]);
/// // Walking axis 1 then axis 0: transposed order.
/// assert_eq!(offset_table(&[1, 0], &shape, &strides), vec![0, 3, 1, 4, 2, 5]);
/// // No axes: a single zero offset.
/// assert_eq!(offset_table(&[], &shape, &strides), vec![0]);
/// ```
pub fn offset_table(axes: &[usize], shape: &[usize], strides: &[usize]) -> Vec<usize> {
    let mut table = vec![0];

    // Expand one axis at a time; appending the fastest axis last keeps
    // row-major order over `axes`.
    for &ax in axes {
        let dim = shape[ax];
        let stride = strides[ax];
        table = table
            .iter()
            .flat_map(|&base| (0..dim).map(move |i| base + i * stride))
            .collect();
    }

    table
}
