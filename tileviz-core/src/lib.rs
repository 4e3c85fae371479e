//! Address translation for tiled tensor layouts.
//!
//! Given a logical shape and a tiling, this crate computes where every
//! logical element lands in the padded linear buffer that backs it, and
//! materializes the buffer together with its 2-D views so they can be
//! rendered.
//!
//! ```
//! use tileviz_core::{generate, Shape, Tiling, PAD};
//!
//! let layout = generate(&Shape::from([3, 3]), &Tiling::from([2, 2])).unwrap();
//! assert_eq!(layout.physical_shape().dims(), &[4, 4]);
//! assert_eq!(&layout.physical()[..4], &[0, 1, 3, 4]);
//! assert_eq!(layout.logical()[3], vec![PAD; 4]);
//! ```

mod buffer;
pub mod descriptor;
pub mod dtype;
mod error;
mod index;
pub mod render;
mod shape;

pub use buffer::{generate, generate_batch, physical_buffer, GeneratedLayout, RenderRequest, PAD};
pub use descriptor::ShapeDescriptor;
pub use dtype::ElementType;
pub use error::{Error, Result};
pub use index::{linear_index, linear_index_tiled, RowMajorIndices};
pub use shape::{contiguous_strides, physical_shape, product, round_up_to_multiple, Shape, Tiling};
