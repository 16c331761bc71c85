//! Active-section selection over one batch of visibility samples

use super::geometry::{Bounds, ScrollMetrics, Window};

/// One section's state as seen by the selector, in layout order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSample<'a> {
    pub id: &'a str,
    pub ratio: f64,
    pub bounds: Bounds,
}

/// Pick the index of the active section.
///
/// 1. The strictly greatest visibility ratio wins; ties go to the earliest.
/// 2. If every ratio is zero, the first section overlapping the window at
///    all wins, else the first section.
/// 3. At the bottom of a scrollable page the last section wins outright.
///
/// Returns `None` only when there are no samples.
pub fn select_active(
    samples: &[SectionSample<'_>],
    window: Window,
    scroll: ScrollMetrics,
) -> Option<usize> {
    if samples.is_empty() {
        return None;
    }
    if scroll.at_bottom() {
        return Some(samples.len() - 1);
    }

    let mut best: Option<(usize, f64)> = None;
    for (index, sample) in samples.iter().enumerate() {
        let leads = match best {
            Some((_, ratio)) => sample.ratio > ratio,
            None => sample.ratio > 0.0,
        };
        if leads {
            best = Some((index, sample.ratio));
        }
    }
    if let Some((index, _)) = best {
        return Some(index);
    }

    Some(
        samples
            .iter()
            .position(|s| s.bounds.overlaps(window))
            .unwrap_or(0),
    )
}
