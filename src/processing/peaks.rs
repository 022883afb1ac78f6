/// Indices of strict local maxima: `values[i]` greater than both neighbours.
///
/// The first and last samples never qualify, and a flat top (plateau) yields
/// no candidate because its edges are not strictly greater than both sides.
pub fn local_maxima(values: &[f64]) -> Vec<usize> {
    if values.len() < 3 {
        return Vec::new();
    }
    (1..values.len() - 1)
        .filter(|&i| values[i] > values[i - 1] && values[i] > values[i + 1])
        .collect()
}

/// Local peaks at least `distance` row positions apart.
///
/// Candidates from [`local_maxima`] are scanned left to right and accepted
/// greedily: a candidate is kept when it lies at least `distance` rows after
/// the last accepted peak. Row 0 acts as the first anchor, so a candidate
/// closer than `distance` rows to the start of the series is rejected too.
/// The distance is measured in rows, not time.
pub fn find_peaks(values: &[f64], distance: usize) -> Vec<usize> {
    let mut peaks = Vec::new();
    let mut anchor = 0usize;
    for idx in local_maxima(values) {
        if idx - anchor >= distance {
            peaks.push(idx);
            anchor = idx;
        }
    }
    peaks
}

pub fn count_peaks(values: &[f64], distance: usize) -> usize {
    find_peaks(values, distance).len()
}
