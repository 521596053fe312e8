//! X-axis label regeneration.

use super::surface::{AxisContainer, LabelNode};
use super::types::{LABEL_X, LABEL_Y};
use crate::models::LabelSet;

/// Replace every label in `container` with one node per entry of `labels`.
pub fn relabel(container: &mut AxisContainer, labels: &LabelSet) {
    container.clear();
    for (text, x) in labels.labels().iter().zip(LABEL_X) {
        container.append(LabelNode {
            x,
            y: LABEL_Y,
            text: text.clone(),
        });
    }
}
