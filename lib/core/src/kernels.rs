// Dense kernels for the feature vectors produced by the encoder.
// Widths are small (one coordinate per known categorical value plus the
// numeric block), so a two-accumulator scalar loop is all we need.

/// Dot product of two equally sized slices.
///
/// Returns 0.0 when the lengths differ; callers that care about the width
/// check it before getting here.
#[inline]
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut sum0 = 0.0f32;
    let mut sum1 = 0.0f32;

    let chunks = a.chunks_exact(4);
    let remainder = chunks.remainder();
    let b_chunks = b.chunks_exact(4);

    for (a_chunk, b_chunk) in chunks.zip(b_chunks) {
        sum0 += a_chunk[0] * b_chunk[0] + a_chunk[1] * b_chunk[1];
        sum1 += a_chunk[2] * b_chunk[2] + a_chunk[3] * b_chunk[3];
    }

    let tail = a.len() - remainder.len();
    for (x, y) in remainder.iter().zip(&b[tail..]) {
        sum0 += x * y;
    }

    sum0 + sum1
}

/// Squared Euclidean length
#[inline]
pub fn norm_squared(v: &[f32]) -> f32 {
    dot_product(v, v)
}

/// Euclidean length
#[inline]
pub fn norm(v: &[f32]) -> f32 {
    norm_squared(v).sqrt()
}

/// Cosine similarity, i.e. `1 - cosine_distance`, with both norms supplied
/// by the caller.
///
/// Defined as 0.0 when either side has a zero or non-finite norm. The result
/// is not clamped: rounding can push it marginally outside [-1, 1].
#[inline]
pub fn cosine_with_norms(a: &[f32], b: &[f32], norm_a: f32, norm_b: f32) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 || !norm_a.is_finite() || !norm_b.is_finite() {
        return 0.0;
    }

    dot_product(a, b) / (norm_a * norm_b)
}
