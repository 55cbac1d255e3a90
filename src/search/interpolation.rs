use crate::trace::Tracer;
use crate::{MoveKind, RunStats, SearchOutcome};

search_impl!("Interpolation Search", requires_sorted: true, moves: MoveKind::None);

/// Estimates the position of `target` from its value relative to the range bounds.
///
/// *O*(log(log(*n*))) on uniformly distributed input, *O*(*n*) on skewed input. The search stops
/// as soon as `target` falls outside `[v[low], v[high]]`, because sorted input can't contain it
/// there.
pub fn search(v: &[i32], target: i32, tracer: &mut Tracer<'_>) -> SearchOutcome {
    let mut stats = RunStats::default();
    let mut index = None;

    if v.is_empty() {
        return SearchOutcome { index, stats };
    }

    let mut low = 0;
    let mut high = v.len() - 1;

    while low <= high && target >= v[low] && target <= v[high] {
        // A single slot, or a range whose bounds hold the same value. The estimate would divide by
        // zero for the latter, and both bounds already equal `target` here.
        if low == high || v[low] == v[high] {
            stats.comparisons += 1;
            if v[low] == target {
                index = Some(low);
            }
            break;
        }

        let pos = estimate(v, low, high, target);

        tracer.note(format_args!(
            "range [{low}..{high}] values [{}..{}], estimated position {pos}",
            v[low], v[high]
        ));
        tracer.step(v, format_args!("probing position {pos}"), &[pos]);
        tracer.wait_for_ack();

        stats.comparisons += 1;
        if v[pos] == target {
            index = Some(pos);
            break;
        }

        if v[pos] < target {
            low = pos + 1;
            tracer.note(format_args!(
                "{} < {target}, searching right in [{low}..{high}]",
                v[pos]
            ));
        } else {
            // `pos == 0` means `v[0] > target`, which the loop condition already excludes.
            let Some(new_high) = pos.checked_sub(1) else {
                break;
            };
            high = new_high;
            tracer.note(format_args!(
                "{} > {target}, searching left in [{low}..{high}]",
                v[pos]
            ));
        }
    }

    SearchOutcome { index, stats }
}

/// Linear estimate of the position of `target` in `v[low..=high]`, clamped into that range.
///
/// Requires `v[low] != v[high]`. Widened to `i128` so neither the value span nor the product can
/// overflow.
fn estimate(v: &[i32], low: usize, high: usize, target: i32) -> usize {
    let value_span = i128::from(v[high]) - i128::from(v[low]);
    let offset = (i128::from(target) - i128::from(v[low])) * (high - low) as i128 / value_span;

    let pos = low as i128 + offset;
    pos.clamp(low as i128, high as i128) as usize
}
