use std::fmt;

use crate::error::{check_positive, check_rank};
use crate::{Error, Result};

macro_rules! extents {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub struct $name(Vec<usize>);

        impl $name {
            pub fn new(dims: Vec<usize>) -> Self {
                Self(dims)
            }

            pub fn dims(&self) -> &[usize] {
                &self.0
            }

            pub fn rank(&self) -> usize {
                self.0.len()
            }
        }

        impl<const N: usize> From<[usize; N]> for $name {
            fn from(value: [usize; N]) -> Self {
                Self(value.to_vec())
            }
        }

        impl From<Vec<usize>> for $name {
            fn from(value: Vec<usize>) -> Self {
                Self(value)
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = usize;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:?}", self.0)
            }
        }
    };
}

extents!(
    /// Extents of a tensor, one per dimension. Either the logical shape
    /// or the tile-rounded physical shape.
    Shape
);

extents!(
    /// Extents of the rectangular tile stored contiguously in memory.
    Tiling
);

impl Shape {
    /// Number of elements.
    pub fn size(&self) -> usize {
        product(&self.0)
    }
}

/// `ceil(n / m) * m`.
pub fn round_up_to_multiple(n: usize, m: usize) -> usize {
    n.div_ceil(m) * m
}

/// Multiplicative reduction over `dims`, 1 when empty.
pub fn product(dims: &[usize]) -> usize {
    dims.iter().product()
}

/// Pads every logical extent up to the next multiple of its tile extent.
///
/// Fails with [`Error::SizeOverflow`] if a padded extent, or the number of
/// elements of the padded shape, does not fit in a `usize`.
pub fn physical_shape(shape: &Shape, tiling: &Tiling) -> Result<Shape> {
    check_rank("physical_shape", shape.rank(), tiling.rank())?;
    check_positive("physical_shape", tiling.dims())?;

    let overflow = |axis| Error::SizeOverflow {
        op: "physical_shape",
        axis,
    };
    let mut size = 1usize;
    let mut dims = Vec::with_capacity(shape.rank());
    for (axis, (&d, &t)) in shape.dims().iter().zip(tiling.dims()).enumerate() {
        let padded = d.div_ceil(t).checked_mul(t).ok_or_else(|| overflow(axis))?;
        size = size.checked_mul(padded).ok_or_else(|| overflow(axis))?;
        dims.push(padded);
    }
    Ok(Shape(dims))
}

/// Row-major strides over `dims`: the last axis has stride 1 and each
/// earlier axis steps over the product of the extents after it.
pub fn contiguous_strides(dims: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; dims.len()];
    for axis in (1..dims.len()).rev() {
        strides[axis - 1] = strides[axis] * dims[axis];
    }
    strides
}
