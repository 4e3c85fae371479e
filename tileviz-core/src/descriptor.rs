//! Parsing of shape descriptors such as `f32[8,128]{1,0:t(8,128)}`.
//!
//! A descriptor names the element type and bit width, the logical
//! dimensions, the minor-to-major layout permutation and the tile
//! extents. The datatype and the layout permutation are kept for display
//! only; rank-2 generation always uses the identity ordering.

use std::{fmt, str::FromStr, sync::LazyLock};

use log::debug;
use regex::Regex;

use crate::{
    error::check_positive, physical_shape, ElementType, Error, RenderRequest, Result, Shape,
    Tiling,
};

static DESCRIPTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+\d+)\[([\d,]+)\]\{([\d,]+):t\(([\d,]+)\)\}$")
        .expect("descriptor pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShapeDescriptor {
    /// The datatype token as written, lowercased.
    pub dtype: String,
    /// `None` for tokens with no known bit width, e.g. `u2`.
    pub element_type: Option<ElementType>,
    pub dims: Shape,
    pub layout: Vec<usize>,
    pub tiling: Tiling,
}

impl ShapeDescriptor {
    /// Parse a descriptor. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self> {
        let lowered = text.trim().to_lowercase();
        let caps = DESCRIPTOR_RE
            .captures(&lowered)
            .ok_or_else(|| Error::InvalidDescriptor(text.to_string()))?;

        let descriptor = Self {
            dtype: caps[1].to_string(),
            element_type: caps[1].parse().ok(),
            dims: Shape::new(parse_list(&caps[2], text)?),
            layout: parse_list(&caps[3], text)?,
            tiling: Tiling::new(parse_list(&caps[4], text)?),
        };
        debug!("Parsed descriptor {descriptor:?}");
        Ok(descriptor)
    }

    /// Convert into a rank-2 request for [`crate::generate`]. Fails with
    /// [`Error::SizeOverflow`] if the padded buffer could not be addressed.
    pub fn to_request(&self) -> Result<RenderRequest> {
        if self.dims.rank() != 2 {
            return Err(Error::UnsupportedRank {
                what: "logical",
                rank: self.dims.rank(),
            });
        }
        if self.tiling.rank() != 2 {
            return Err(Error::UnsupportedRank {
                what: "tiling",
                rank: self.tiling.rank(),
            });
        }
        check_positive("to_request", self.dims.dims())?;
        physical_shape(&self.dims, &self.tiling)?;
        Ok(RenderRequest {
            shape: self.dims.clone(),
            tiling: self.tiling.clone(),
        })
    }
}

fn parse_list(list: &str, text: &str) -> Result<Vec<usize>> {
    list.split(',')
        .map(|item| {
            item.parse::<usize>()
                .map_err(|err| Error::InvalidDescriptor(format!("{text}: `{item}`: {err}")))
        })
        .collect()
}

fn join(values: &[usize]) -> String {
    values
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl FromStr for ShapeDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]{{{}:t({})}}",
            self.dtype,
            join(self.dims.dims()),
            join(&self.layout),
            join(self.tiling.dims())
        )
    }
}
