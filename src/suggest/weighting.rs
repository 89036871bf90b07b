/// Per-sample training weights compensating for label imbalance.
///
/// Every true label gets `(total - num_true) / num_true`, every false label
/// gets `1.0`. Returns `None` when no label is true, since the true weight
/// is undefined.
pub fn class_balance_weights(labels: &[bool]) -> Option<Vec<f64>> {
    let num_true = labels.iter().filter(|&&label| label).count();
    if num_true == 0 {
        return None;
    }
    let true_weight = (labels.len() - num_true) as f64 / num_true as f64;
    Some(
        labels
            .iter()
            .map(|&label| if label { true_weight } else { 1.0 })
            .collect(),
    )
}
