use log::debug;
use rayon::prelude::*;

use crate::{
    error::{check_positive, check_rank},
    index::{linear_index_tiled, RowMajorIndices},
    shape::physical_shape,
    ElementType, Error, Result, Shape, Tiling,
};

/// Marks a physical slot that no logical element maps to.
pub const PAD: i64 = -1;

/// A `(shape, tiling)` pair to lay out, as produced by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderRequest {
    pub shape: Shape,
    pub tiling: Tiling,
}

impl RenderRequest {
    pub fn new(shape: impl Into<Shape>, tiling: impl Into<Tiling>) -> Self {
        Self {
            shape: shape.into(),
            tiling: tiling.into(),
        }
    }

    pub fn generate(&self) -> Result<GeneratedLayout> {
        generate(&self.shape, &self.tiling)
    }
}

/// Every view of a rank-2 tiled buffer. Entries are element numbers in
/// row-major logical order, or [`PAD`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneratedLayout {
    physical_shape: Shape,
    physical: Vec<i64>,
    logical: Vec<Vec<i64>>,
    physical_grid: Vec<Vec<i64>>,
}

impl GeneratedLayout {
    /// The tile-rounded shape all three views are sized to.
    pub fn physical_shape(&self) -> &Shape {
        &self.physical_shape
    }

    /// The backing memory, index 0 being the first word.
    pub fn physical(&self) -> &[i64] {
        &self.physical
    }

    /// Element numbers at their logical `(row, col)`, padded to the physical shape.
    pub fn logical(&self) -> &[Vec<i64>] {
        &self.logical
    }

    /// The backing memory reshaped row-major into the physical shape,
    /// ignoring the tiling.
    pub fn physical_grid(&self) -> &[Vec<i64>] {
        &self.physical_grid
    }

    pub fn padding_count(&self) -> usize {
        self.physical.iter().filter(|&&v| v == PAD).count()
    }

    /// Size in bytes of the padded buffer holding elements of `dtype`.
    pub fn footprint_bytes(&self, dtype: ElementType) -> usize {
        dtype.bytes_for(self.physical.len())
    }

    pub fn into_parts(self) -> (Vec<i64>, Vec<Vec<i64>>, Vec<Vec<i64>>) {
        (self.physical, self.logical, self.physical_grid)
    }
}

/// Materialize the padded physical buffer for a shape of any rank.
///
/// Logical elements are numbered in row-major order and stored at their
/// tiled offset; every other slot holds [`PAD`].
pub fn physical_buffer(shape: &Shape, tiling: &Tiling) -> Result<Vec<i64>> {
    check_rank("physical_buffer", shape.rank(), tiling.rank())?;
    check_positive("physical_buffer", shape.dims())?;
    let phys = physical_shape(shape, tiling)?;

    let mut buffer = vec![PAD; phys.size()];
    for (counter, index) in RowMajorIndices::new(shape.dims()).enumerate() {
        let offset = linear_index_tiled(&index, shape.dims(), tiling.dims())?;
        buffer[offset] = counter as i64;
    }
    Ok(buffer)
}

/// Lay out a rank-2 `shape` under `tiling` and return all of its views.
pub fn generate(shape: &Shape, tiling: &Tiling) -> Result<GeneratedLayout> {
    check_rank("generate", shape.rank(), tiling.rank())?;
    if shape.rank() != 2 {
        return Err(Error::UnsupportedRank {
            what: "logical",
            rank: shape.rank(),
        });
    }

    let physical = physical_buffer(shape, tiling)?;
    let physical_shape = physical_shape(shape, tiling)?;
    let (rows, cols) = (physical_shape[0], physical_shape[1]);
    debug!(
        "Generating {shape} tiled by {tiling}: physical {physical_shape}, {} padding slots",
        physical_shape.size() - shape.size()
    );

    let mut logical = vec![vec![PAD; cols]; rows];
    for (counter, index) in RowMajorIndices::new(shape.dims()).enumerate() {
        logical[index[0]][index[1]] = counter as i64;
    }

    // Plain reshape; the tiling is not reapplied.
    let physical_grid = physical.chunks(cols).map(<[i64]>::to_vec).collect();

    Ok(GeneratedLayout {
        physical_shape,
        physical,
        logical,
        physical_grid,
    })
}

/// Generate many independent layouts in parallel. Results keep the order of `requests`.
pub fn generate_batch(requests: &[RenderRequest]) -> Vec<Result<GeneratedLayout>> {
    debug!("Generating {} layouts", requests.len());
    requests.par_iter().map(RenderRequest::generate).collect()
}
