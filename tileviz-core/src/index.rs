use log::trace;

use crate::error::{check_positive, check_rank};
use crate::shape::contiguous_strides;
use crate::Result;

/// Row-major (last dimension fastest) offset of `index` within `dims`.
///
/// Computes `Σ index[i] * Π_{j>i} dims[j]`. Components are not checked
/// against their extents.
pub fn linear_index(index: &[usize], dims: &[usize]) -> Result<usize> {
    check_rank("linear_index", dims.len(), index.len())?;
    Ok(index
        .iter()
        .zip(contiguous_strides(dims))
        .map(|(&e, stride)| e * stride)
        .sum())
}

/// Offset of `index` within the logical shape `dims` stored under `tiling`.
///
/// The index is split into tile coordinates `e / t` and intra-tile offsets
/// `e % t`, and the concatenation is addressed row-major within the
/// extended shape `(ceil(d / t)..., t...)`. Every tile is therefore
/// contiguous, tiles follow each other in row-major order, and a partial
/// trailing tile is padded up to a full one.
pub fn linear_index_tiled(index: &[usize], dims: &[usize], tiling: &[usize]) -> Result<usize> {
    check_rank("linear_index_tiled", dims.len(), index.len())?;
    check_rank("linear_index_tiled", dims.len(), tiling.len())?;
    check_positive("linear_index_tiled", tiling)?;

    let rank = index.len();
    let mut ext_index = Vec::with_capacity(2 * rank);
    let mut ext_dims = Vec::with_capacity(2 * rank);
    ext_index.extend(index.iter().zip(tiling).map(|(&e, &t)| e / t));
    ext_index.extend(index.iter().zip(tiling).map(|(&e, &t)| e % t));
    ext_dims.extend(dims.iter().zip(tiling).map(|(&d, &t)| d.div_ceil(t)));
    ext_dims.extend_from_slice(tiling);

    let offset = linear_index(&ext_index, &ext_dims)?;
    trace!("{index:?} in {dims:?} tiled by {tiling:?} -> {offset}");
    Ok(offset)
}

/// Odometer over every index of a shape in row-major order.
///
/// Yields nothing if any extent is zero, and a single empty index for a
/// rank-0 shape.
#[derive(Debug, Clone)]
pub struct RowMajorIndices {
    dims: Vec<usize>,
    next: Option<Vec<usize>>,
}

impl RowMajorIndices {
    pub fn new(dims: &[usize]) -> Self {
        let next = if dims.contains(&0) {
            None
        } else {
            Some(vec![0; dims.len()])
        };
        Self {
            dims: dims.to_vec(),
            next,
        }
    }
}

impl Iterator for RowMajorIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut advanced = current.clone();
        for axis in (0..self.dims.len()).rev() {
            advanced[axis] += 1;
            if advanced[axis] < self.dims[axis] {
                self.next = Some(advanced);
                break;
            }
            // Carry into the next slower axis.
            advanced[axis] = 0;
        }
        Some(current)
    }
}
