//! Boyer–Moore majority vote.

/// Value occurring strictly more than `values.len() / 2` times, if any.
pub fn majority_element(values: &[i64]) -> Option<i64> {
    let mut candidate = None;
    let mut votes = 0usize;
    for &value in values {
        if votes == 0 {
            candidate = Some(value);
            votes = 1;
        } else if candidate == Some(value) {
            votes += 1;
        } else {
            votes -= 1;
        }
    }
    // the vote only proves majority when one exists
    let candidate = candidate?;
    let count = values.iter().filter(|&&value| value == candidate).count();
    (count > values.len() / 2).then_some(candidate)
}
