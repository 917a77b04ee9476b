//! Batch text ingestion.
//!
//! Parses a line-oriented workload description into an ordered list of
//! named scenarios. The format is deliberately forgiving — classroom
//! input is sloppy — so malformed rows are dropped rather than rejected:
//!
//! ```text
//! # Light load
//! pid,arrival,burst,priority
//! 1,0,5,2
//! 2,1,3,1
//! // Heavy load
//! 1,0,12
//! 2,2,8
//! ```
//!
//! Rules:
//! - Blank lines are discarded.
//! - A `#` or `//` line closes the current scenario and opens a new one
//!   named by the remainder (auto-named "Scenario N" when empty).
//! - Header rows (containing both "pid" and "arrival", case-insensitive)
//!   are skipped.
//! - Data rows are comma-separated `pid,arrival,burst[,priority]` with a
//!   minimum of 3 fields; missing or non-numeric fields take defaults.
//! - Rows whose resolved burst is ≤ 0 are dropped.
//!
//! Ingestion fails only when no scenario yields a single valid process.

use thiserror::Error;
use tracing::debug;

use crate::models::{ProcessSpec, Scenario};

/// Ingestion failure: the input produced no usable scenario.
///
/// This is the only fatal condition; individual malformed rows and
/// process-less scenarios are dropped silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// No line of the input survived parsing as a process.
    #[error("no valid processes found")]
    NoValidProcesses,
}

/// Accumulates rows for the scenario currently being parsed.
struct PendingScenario {
    name: Option<String>,
    processes: Vec<ProcessSpec>,
}

impl PendingScenario {
    fn unnamed() -> Self {
        Self {
            name: None,
            processes: Vec::new(),
        }
    }

    fn named(name: String) -> Self {
        Self {
            name: Some(name),
            processes: Vec::new(),
        }
    }

    /// Appends to `scenarios` if at least one process accumulated.
    ///
    /// Auto-names are assigned here, from the output position, so
    /// dropped-empty scenarios never consume an ordinal.
    fn finish(self, scenarios: &mut Vec<Scenario>) {
        if self.processes.is_empty() {
            if let Some(name) = self.name {
                debug!(scenario = %name, "dropping scenario with no valid processes");
            }
            return;
        }
        let name = self
            .name
            .unwrap_or_else(|| format!("Scenario {}", scenarios.len() + 1));
        scenarios.push(Scenario::new(name, self.processes));
    }
}

/// Parses batch text into an ordered list of scenarios.
///
/// # Errors
/// [`IngestError::NoValidProcesses`] when the whole input yields zero
/// scenarios. Callers must surface this before any scheduling calls.
pub fn parse_batch(input: &str) -> Result<Vec<Scenario>, IngestError> {
    let mut scenarios: Vec<Scenario> = Vec::new();
    let mut current = PendingScenario::unnamed();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = marker_name(line) {
            current.finish(&mut scenarios);
            current = match name {
                "" => PendingScenario::unnamed(),
                n => PendingScenario::named(n.to_string()),
            };
            continue;
        }

        if is_header(line) {
            continue;
        }

        match parse_row(line, current.processes.len()) {
            Some(process) => current.processes.push(process),
            None => debug!(row = line, "dropping unparseable or zero-burst row"),
        }
    }
    current.finish(&mut scenarios);

    if scenarios.is_empty() {
        return Err(IngestError::NoValidProcesses);
    }
    Ok(scenarios)
}

/// Returns the trimmed marker remainder when the line starts a scenario.
fn marker_name(line: &str) -> Option<&str> {
    line.strip_prefix('#')
        .or_else(|| line.strip_prefix("//"))
        .map(str::trim)
}

/// Header rows carry both a "pid" and an "arrival" token.
fn is_header(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    lower.contains("pid") && lower.contains("arrival")
}

/// Parses one data row; `None` drops the row.
fn parse_row(line: &str, accumulated: usize) -> Option<ProcessSpec> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return None;
    }

    let pid = fields[0]
        .parse::<u32>()
        .unwrap_or(accumulated as u32 + 1);
    let arrival = fields[1].parse::<u32>().unwrap_or(0);
    let burst = fields[2].parse::<i64>().unwrap_or(1);
    if burst <= 0 {
        return None;
    }
    let burst = u32::try_from(burst).ok()?;
    let priority = fields
        .get(3)
        .and_then(|f| f.parse::<i32>().ok())
        .unwrap_or(ProcessSpec::DEFAULT_PRIORITY);

    Some(ProcessSpec::new(pid, arrival, burst).with_priority(priority))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let scenarios =
            parse_batch("# S1\npid,arrival,burst,priority\n1,0,5,2\n2,1,3,1").unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].name, "S1");
        assert_eq!(
            scenarios[0].processes,
            vec![
                ProcessSpec::new(1, 0, 5).with_priority(2),
                ProcessSpec::new(2, 1, 3).with_priority(1),
            ]
        );
    }

    #[test]
    fn test_multiple_scenarios_with_slash_marker() {
        let scenarios = parse_batch("# A\n1,0,5\n// B\n1,0,7\n2,3,2").unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name, "A");
        assert_eq!(scenarios[1].name, "B");
        assert_eq!(scenarios[1].process_count(), 2);
    }

    #[test]
    fn test_auto_naming_by_output_position() {
        // Unnamed leading rows and an empty marker both auto-name.
        let scenarios = parse_batch("1,0,5\n#\n2,0,3").unwrap();
        assert_eq!(scenarios[0].name, "Scenario 1");
        assert_eq!(scenarios[1].name, "Scenario 2");
    }

    #[test]
    fn test_empty_scenario_does_not_consume_ordinal() {
        // "Empty" accumulates nothing, so the trailing scenario is number 2.
        let scenarios = parse_batch("1,0,5\n# Empty\nbad row\n#\n2,0,3").unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[1].name, "Scenario 2");
    }

    #[test]
    fn test_header_detection_case_insensitive() {
        let scenarios = parse_batch("PID, Arrival, Burst\n1,0,5").unwrap();
        assert_eq!(scenarios[0].process_count(), 1);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        // Non-numeric pid → accumulated+1; non-numeric arrival → 0;
        // non-numeric burst → 1; absent priority → 3.
        let scenarios = parse_batch("x,y,z").unwrap();
        let process = scenarios[0].processes[0];
        assert_eq!(process.pid, 1);
        assert_eq!(process.arrival, 0);
        assert_eq!(process.burst, 1);
        assert_eq!(process.priority, 3);
    }

    #[test]
    fn test_zero_burst_row_dropped() {
        let scenarios = parse_batch("1,0,0\n2,0,-3\n3,0,4").unwrap();
        assert_eq!(scenarios[0].process_count(), 1);
        assert_eq!(scenarios[0].processes[0].pid, 3);
    }

    #[test]
    fn test_short_row_dropped() {
        let scenarios = parse_batch("1,0\n1,0,5").unwrap();
        assert_eq!(scenarios[0].process_count(), 1);
    }

    #[test]
    fn test_blank_lines_discarded() {
        let scenarios = parse_batch("\n\n# S\n\n1,0,5\n\n").unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].process_count(), 1);
    }

    #[test]
    fn test_no_valid_processes() {
        assert_eq!(parse_batch(""), Err(IngestError::NoValidProcesses));
        assert_eq!(
            parse_batch("# only markers\n// and headers\npid,arrival,burst"),
            Err(IngestError::NoValidProcesses)
        );
        assert_eq!(parse_batch("1,0,0"), Err(IngestError::NoValidProcesses));
    }

    #[test]
    fn test_error_message() {
        let err = parse_batch("").unwrap_err();
        assert_eq!(err.to_string(), "no valid processes found");
    }

    #[test]
    fn test_defaulted_pid_counts_accumulated_rows() {
        // Second row has a bad pid; default is count+1 = 2.
        let scenarios = parse_batch("7,0,5\nabc,1,3").unwrap();
        assert_eq!(scenarios[0].processes[1].pid, 2);
    }
}
