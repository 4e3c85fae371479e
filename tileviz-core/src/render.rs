//! Plain-text tables for the generated views.

use std::fmt::Write;

use crate::{GeneratedLayout, ShapeDescriptor, PAD};

/// How a padding slot is drawn.
pub const PAD_CELL: &str = "·";

fn cell(value: i64) -> String {
    if value == PAD {
        PAD_CELL.to_string()
    } else {
        value.to_string()
    }
}

fn width<'a>(values: impl IntoIterator<Item = &'a i64>) -> usize {
    values
        .into_iter()
        .map(|&v| cell(v).chars().count())
        .max()
        .unwrap_or(0)
}

fn row(values: &[i64], width: usize) -> String {
    values
        .iter()
        .map(|&v| format!("{:>width$}", cell(v)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single row holding every entry.
pub fn table_1d(values: &[i64]) -> String {
    row(values, width(values))
}

/// One line per row, columns right-aligned to the widest entry.
pub fn table_2d(rows: &[Vec<i64>]) -> String {
    let w = width(rows.iter().flatten());
    rows.iter()
        .map(|r| row(r, w))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header fields followed by the logical view, the physical buffer and
/// the physical buffer reshaped as 2-D.
pub fn report(descriptor: &ShapeDescriptor, layout: &GeneratedLayout) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "shape:              {descriptor}");
    let _ = writeln!(out, "datatype:           {}", descriptor.dtype);
    let _ = writeln!(out, "logical dimensions: {}", descriptor.dims);
    let _ = writeln!(out, "layout:             {:?}", descriptor.layout);
    let _ = writeln!(out, "tiling:             {}", descriptor.tiling);
    let _ = writeln!(out, "physical shape:     {}", layout.physical_shape());
    let _ = writeln!(out, "padding slots:      {}", layout.padding_count());
    if let Some(dtype) = descriptor.element_type {
        let _ = writeln!(
            out,
            "footprint:          {} bytes",
            layout.footprint_bytes(dtype)
        );
    }
    let _ = writeln!(out, "\nlogical view\n{}", table_2d(layout.logical()));
    let _ = writeln!(out, "\nphysical view\n{}", table_1d(layout.physical()));
    let _ = write!(
        out,
        "\nphysical view reshaped as 2-D\n{}",
        table_2d(layout.physical_grid())
    );
    out
}
