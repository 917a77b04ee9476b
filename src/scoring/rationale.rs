//! Rationale synthesis for the overall winner.
//!
//! Derives a human-readable justification from the per-metric bests the
//! scoring engine already computed. Pure function of its inputs: a fixed
//! phrase for the winner's metric coverage, plus one contextual sentence
//! chosen from a fixed menu by a deterministic decision table. No free
//! text generation.

use crate::models::{ComparisonSet, Metric, TieBreak};

use super::engine::Ranking;

/// Synthesizes the rationale for a ranking's winner.
///
/// `set` must be the comparison set the ranking was computed from.
pub fn synthesize(ranking: &Ranking, set: &ComparisonSet) -> String {
    let held: Vec<Metric> = Metric::ALL
        .into_iter()
        .filter(|&metric| ranking.winner_holds(metric))
        .collect();

    let winner = ranking.winner.display_name();
    let lead = match held.len() {
        0 => format!("{winner} achieves the best overall balance across all five metrics."),
        1 | 2 => format!(
            "{winner} excels in {}, while maintaining strong performance across other metrics.",
            metric_list(&held)
        ),
        _ => format!("{winner} dominates with the best {}.", metric_list(&held)),
    };

    format!("{lead} {}", context_sentence(ranking, set))
}

/// Joins metric display names with commas and a final "and".
fn metric_list(metrics: &[Metric]) -> String {
    let names: Vec<&str> = metrics.iter().map(|m| m.display_name()).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [rest @ .., last] => format!("{} and {last}", rest.join(", ")),
    }
}

/// Decision table for the appended contextual sentence.
///
/// A fired tie-break takes precedence; otherwise the framing follows
/// which metric bests the winner holds.
fn context_sentence(ranking: &Ranking, set: &ComparisonSet) -> String {
    if let Some(rule) = ranking.tie_break {
        let reason = match rule {
            TieBreak::Energy => "its lower raw energy consumption",
            TieBreak::ContextSwitches => "its lower context-switch count",
            TieBreak::Simplicity => "its simpler scheduling policy",
            TieBreak::InsertionOrder => "its earlier position in the comparison order",
        };
        return format!(
            "The composite scores were effectively tied; the decision came down to {reason}."
        );
    }

    let energy_first = ranking.winner_holds(Metric::TotalEnergy)
        && ranking.winner_holds(Metric::ContextSwitches);
    if energy_first {
        return "Its combination of low energy draw and few context switches makes it \
                well suited to battery-powered and embedded deployments."
            .to_string();
    }

    let throughput_first =
        ranking.winner_holds(Metric::AvgTurnaround) || ranking.winner_holds(Metric::AvgWaiting);
    if throughput_first {
        return "Its short turnaround and waiting times favor throughput-oriented workloads."
            .to_string();
    }

    format!(
        "It is a sound general-purpose choice among the {} candidates evaluated.",
        set.valid().count()
    )
}
