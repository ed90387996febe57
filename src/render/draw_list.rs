use super::depth_order::Quad;

/// Rebuild a flat index list from a (sorted) quad sequence.
///
/// Clears `out` and appends each quad's 4 corner indices in sequence
/// order, producing the list an indexed quad draw call consumes. Called
/// once per frame after [`sort_back_to_front`](super::sort_back_to_front),
/// reusing the allocation.
pub fn rebuild_index_list(out: &mut Vec<u32>, quads: &[Quad]) {
    out.clear();
    for q in quads {
        out.extend_from_slice(&q.corners);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_in_sequence_order() {
        let quads = [
            Quad::new([4, 5, 6, 7], 1, 0.0),
            Quad::new([0, 1, 3, 2], 0, 0.0),
        ];
        let mut out = vec![9, 9];
        rebuild_index_list(&mut out, &quads);
        assert_eq!(out, vec![4, 5, 6, 7, 0, 1, 3, 2]);
    }

    #[test]
    fn empty_sequence_clears() {
        let mut out = vec![1, 2, 3];
        rebuild_index_list(&mut out, &[]);
        assert!(out.is_empty());
    }
}
