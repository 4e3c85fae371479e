use tileviz_core::{
    contiguous_strides, generate, generate_batch, linear_index, linear_index_tiled,
    physical_buffer, physical_shape, product, round_up_to_multiple, Error, RenderRequest,
    RowMajorIndices, Shape, Tiling, PAD,
};

const P: i64 = PAD;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn round_up_and_product() {
    assert_eq!(round_up_to_multiple(3, 2), 4);
    assert_eq!(round_up_to_multiple(4, 2), 4);
    assert_eq!(round_up_to_multiple(1, 8), 8);
    assert_eq!(product(&[]), 1);
    assert_eq!(product(&[3, 4, 5]), 60);
    assert_eq!(contiguous_strides(&[2, 3, 4]), vec![12, 4, 1]);
    assert_eq!(contiguous_strides(&[5]), vec![1]);
    assert!(contiguous_strides(&[]).is_empty());
    // The outermost extent never enters a stride.
    assert_eq!(contiguous_strides(&[usize::MAX, 2]), vec![2, 1]);
}

#[test]
fn physical_shape_rounds_each_dim() {
    let phys = physical_shape(&Shape::from([3, 9]), &Tiling::from([2, 4])).unwrap();
    assert_eq!(phys, Shape::from([4, 12]));

    let err = physical_shape(&Shape::from([3, 9]), &Tiling::from([2])).unwrap_err();
    assert!(matches!(err, Error::RankMismatch { .. }));
}

#[test]
fn oversized_shapes_fail_instead_of_overflowing() {
    assert_eq!(
        generate(&Shape::from([usize::MAX / 2, 3]), &Tiling::from([1, 1])).unwrap_err(),
        Error::SizeOverflow {
            op: "physical_shape",
            axis: 1
        }
    );
    // Rounding the extent itself up to the tile overflows.
    assert_eq!(
        physical_shape(&Shape::from([usize::MAX]), &Tiling::from([2])).unwrap_err(),
        Error::SizeOverflow {
            op: "physical_shape",
            axis: 0
        }
    );
}

#[test]
fn linear_index_is_row_major() {
    assert_eq!(linear_index(&[0, 0], &[3, 4]).unwrap(), 0);
    assert_eq!(linear_index(&[1, 2], &[3, 4]).unwrap(), 6);
    assert_eq!(linear_index(&[1, 2, 3], &[2, 3, 4]).unwrap(), 23);
    assert_eq!(
        linear_index(&[1], &[3, 4]).unwrap_err(),
        Error::RankMismatch {
            op: "linear_index",
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn tiled_index_keeps_tiles_contiguous() {
    let d = [4, 4];
    let t = [2, 2];
    let expected = [
        ([0, 0], 0),
        ([0, 1], 1),
        ([1, 0], 2),
        ([1, 1], 3),
        ([0, 2], 4),
        ([0, 3], 5),
        ([1, 2], 6),
        ([1, 3], 7),
        ([2, 0], 8),
        ([3, 3], 15),
    ];
    for (e, offset) in expected {
        assert_eq!(linear_index_tiled(&e, &d, &t).unwrap(), offset, "{e:?}");
    }
}

#[test]
fn tiled_index_rank_mismatch() {
    assert_eq!(
        linear_index_tiled(&[0, 0], &[4, 4], &[2]).unwrap_err(),
        Error::RankMismatch {
            op: "linear_index_tiled",
            expected: 2,
            found: 1
        }
    );
    assert!(matches!(
        linear_index_tiled(&[0], &[4, 4], &[2, 2]),
        Err(Error::RankMismatch { .. })
    ));
}

#[test]
fn zero_tile_extent_is_rejected() {
    assert_eq!(
        linear_index_tiled(&[0, 0], &[4, 4], &[2, 0]).unwrap_err(),
        Error::InvalidDimension {
            op: "linear_index_tiled",
            axis: 1
        }
    );
    assert!(matches!(
        generate(&Shape::from([0, 4]), &Tiling::from([1, 1])),
        Err(Error::InvalidDimension { axis: 0, .. })
    ));
}

#[test]
fn unit_tiling_matches_row_major() {
    for index in RowMajorIndices::new(&[2, 2]) {
        assert_eq!(
            linear_index_tiled(&index, &[2, 2], &[1, 1]).unwrap(),
            linear_index(&index, &[2, 2]).unwrap()
        );
    }
    let layout = generate(&Shape::from([2, 2]), &Tiling::from([1, 1])).unwrap();
    assert_eq!(layout.physical(), &[0, 1, 2, 3]);
    assert_eq!(layout.padding_count(), 0);
}

#[test]
fn generate_evenly_tiled() {
    init();
    let layout = generate(&Shape::from([4, 4]), &Tiling::from([2, 2])).unwrap();
    assert_eq!(layout.physical_shape(), &Shape::from([4, 4]));
    // Element numbers of the first tile: (0,0), (0,1), (1,0), (1,1).
    assert_eq!(
        layout.physical(),
        &[0, 1, 4, 5, 2, 3, 6, 7, 8, 9, 12, 13, 10, 11, 14, 15]
    );
    assert_eq!(layout.logical()[1], vec![4, 5, 6, 7]);
    assert_eq!(layout.padding_count(), 0);
}

#[test]
fn generate_pads_partial_tiles() {
    init();
    let layout = generate(&Shape::from([3, 3]), &Tiling::from([2, 2])).unwrap();
    assert_eq!(layout.physical_shape(), &Shape::from([4, 4]));
    assert_eq!(layout.physical().len(), 16);
    assert_eq!(layout.padding_count(), 7);
    assert_eq!(
        layout.physical(),
        &[0, 1, 3, 4, 2, P, 5, P, 6, 7, P, P, 8, P, P, P]
    );
    assert_eq!(
        layout.logical(),
        &[
            vec![0, 1, 2, P],
            vec![3, 4, 5, P],
            vec![6, 7, 8, P],
            vec![P, P, P, P],
        ]
    );
    assert_eq!(
        layout.physical_grid(),
        &[
            vec![0, 1, 3, 4],
            vec![2, P, 5, P],
            vec![6, 7, P, P],
            vec![8, P, P, P],
        ]
    );
}

#[test]
fn tile_larger_than_shape_is_a_single_tile() {
    let layout = generate(&Shape::from([3, 5]), &Tiling::from([4, 8])).unwrap();
    assert_eq!(layout.physical_shape(), &Shape::from([4, 8]));
    for i in 0..3 {
        for j in 0..5 {
            assert_eq!(layout.physical()[i * 8 + j], (i * 5 + j) as i64);
        }
    }
    assert_eq!(layout.padding_count(), 32 - 15);
}

#[test]
fn generate_rejects_bad_ranks() {
    assert_eq!(
        generate(&Shape::from([4, 4]), &Tiling::from([2])).unwrap_err(),
        Error::RankMismatch {
            op: "generate",
            expected: 2,
            found: 1
        }
    );
    assert_eq!(
        generate(&Shape::from([2, 2, 2]), &Tiling::from([1, 1, 1])).unwrap_err(),
        Error::UnsupportedRank {
            what: "logical",
            rank: 3
        }
    );
}

#[test]
fn physical_buffer_rank_three() {
    let shape = Shape::from([3, 2, 5]);
    let tiling = Tiling::from([2, 1, 4]);
    let buffer = physical_buffer(&shape, &tiling).unwrap();
    assert_eq!(buffer.len(), 4 * 2 * 8);

    let mut numbers: Vec<i64> = buffer.iter().copied().filter(|&v| v != PAD).collect();
    assert_eq!(buffer.len() - numbers.len(), 64 - 30);
    numbers.sort_unstable();
    assert_eq!(numbers, (0..30).collect::<Vec<i64>>());
}

#[test]
fn physical_buffer_agrees_with_generate() {
    let shape = Shape::from([5, 7]);
    let tiling = Tiling::from([2, 3]);
    let layout = generate(&shape, &tiling).unwrap();
    assert_eq!(physical_buffer(&shape, &tiling).unwrap(), layout.physical());
}

#[test]
fn batch_matches_sequential() {
    init();
    let requests = vec![
        RenderRequest::new([3, 3], [2, 2]),
        RenderRequest::new([8, 5], [8, 128]),
        RenderRequest::new([4, 4], [2]),
        RenderRequest::new([1, 1], [1, 1]),
    ];
    let batch = generate_batch(&requests);
    assert_eq!(batch.len(), requests.len());
    for (request, result) in requests.iter().zip(batch) {
        assert_eq!(result, request.generate());
    }
}

#[test]
fn row_major_indices() {
    let all: Vec<Vec<usize>> = RowMajorIndices::new(&[2, 3]).collect();
    assert_eq!(
        all,
        vec![
            vec![0, 0],
            vec![0, 1],
            vec![0, 2],
            vec![1, 0],
            vec![1, 1],
            vec![1, 2],
        ]
    );
    assert_eq!(RowMajorIndices::new(&[0, 3]).count(), 0);
    assert_eq!(RowMajorIndices::new(&[]).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
}

#[test]
fn footprint_counts_padding() {
    let layout = generate(&Shape::from([3, 3]), &Tiling::from([2, 2])).unwrap();
    assert_eq!(layout.footprint_bytes(tileviz_core::ElementType::F32), 64);
    assert_eq!(layout.footprint_bytes(tileviz_core::ElementType::S4), 8);
}
