//! Silence trimming
//!
//! Strips the leading and trailing runs of exact-zero samples from a
//! quantized sequence. Only values strictly equal to zero are removed; the
//! scan stops at the first nonzero sample from each end.

/// Trim leading and trailing zero samples.
///
/// An all-zero (or empty) input yields an empty slice; the scan is bounded
/// and never reads past the buffer. Trimming an already-trimmed sequence is
/// a no-op.
pub fn trim_silence(samples: &[i64]) -> &[i64] {
    let Some(start) = samples.iter().position(|&s| s != 0) else {
        return &samples[..0];
    };
    let end = samples.iter().rposition(|&s| s != 0).unwrap_or(start);
    &samples[start..=end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_both_ends() {
        let samples = vec![0, 0, 7, -4, 0];
        assert_eq!(trim_silence(&samples), &[7, -4]);
    }

    #[test]
    fn test_trim_keeps_interior_zeros() {
        let samples = vec![0, 3, 0, 0, -2, 0, 0];
        assert_eq!(trim_silence(&samples), &[3, 0, 0, -2]);
    }

    #[test]
    fn test_trim_no_zeros_is_noop() {
        let samples = vec![1, 2, 3];
        assert_eq!(trim_silence(&samples), &[1, 2, 3]);
    }

    #[test]
    fn test_trim_idempotent() {
        let samples = vec![0, 5, -1, 0, 0];
        let once = trim_silence(&samples).to_vec();
        let twice = trim_silence(&once).to_vec();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_trim_all_zeros_yields_empty() {
        let samples = vec![0i64; 1000];
        assert!(trim_silence(&samples).is_empty());
    }

    #[test]
    fn test_trim_empty() {
        assert!(trim_silence(&[]).is_empty());
    }

    #[test]
    fn test_trim_single_nonzero() {
        let samples = vec![0, 0, 9, 0];
        assert_eq!(trim_silence(&samples), &[9]);
    }
}
