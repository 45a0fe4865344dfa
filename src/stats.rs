//! Shannon entropy over a byte histogram, used only for reporting. The
//! encoders never consult it.

/// Computes the Shannon entropy of `input` in bits per byte.
///
/// Returns 0.0 for empty input.
pub fn shannon_entropy(input: &[u8]) -> f64 {
    if input.is_empty() {
        return 0.0;
    }
    let mut counts = [0u64; 256];
    for &b in input {
        counts[b as usize] += 1;
    }
    let total = input.len() as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}
