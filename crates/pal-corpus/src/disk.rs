//! SCAN ("elevator") ordering of pending disk requests.

use pal_core::errors::{ErrorInfo, PalError};
use serde::{Deserialize, Serialize};

/// Direction of head travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Towards higher cylinder numbers.
    Up,
    /// Towards cylinder `0`.
    Down,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Service order produced by [`schedule_scan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Requests in the order they are served.
    pub order: Vec<u64>,
    /// Head position after the last request (unchanged when idle).
    pub head: u64,
    /// Direction of travel when the last request was served.
    pub direction: Direction,
    /// Total cylinders travelled, including the sweep to the disk edge.
    pub distance: u64,
}

/// Orders `requests` for a disk of `bound` cylinders (`0..bound`).
///
/// Requests ahead of the head are served first. If any remain behind it, the
/// head sweeps to the edge of the disk, reverses and serves them on the way
/// back. Requests at the head position count as ahead.
pub fn schedule_scan(
    head: u64,
    direction: Direction,
    bound: u64,
    requests: &[u64],
) -> Result<Schedule, PalError> {
    if bound == 0 {
        return Err(PalError::Corpus(ErrorInfo::new(
            "empty-disk",
            "disk bound must be at least one cylinder",
        )));
    }
    if head >= bound {
        return Err(PalError::Corpus(out_of_range("head", head, bound)));
    }
    if let Some((idx, request)) = requests
        .iter()
        .enumerate()
        .find(|(_, request)| **request >= bound)
    {
        return Err(PalError::Corpus(
            out_of_range("request", *request, bound).with_context("index", idx.to_string()),
        ));
    }

    let (mut ahead, mut behind): (Vec<u64>, Vec<u64>) =
        requests.iter().partition(|&&request| match direction {
            Direction::Up => request >= head,
            Direction::Down => request <= head,
        });
    match direction {
        Direction::Up => {
            ahead.sort_unstable();
            behind.sort_unstable_by(|a, b| b.cmp(a));
        }
        Direction::Down => {
            ahead.sort_unstable_by(|a, b| b.cmp(a));
            behind.sort_unstable();
        }
    }

    let mut position = head;
    let mut distance = 0;
    let mut current = direction;
    for &request in &ahead {
        distance += position.abs_diff(request);
        position = request;
    }
    if !behind.is_empty() {
        let edge = match direction {
            Direction::Up => bound - 1,
            Direction::Down => 0,
        };
        distance += position.abs_diff(edge);
        position = edge;
        current = direction.reversed();
        for &request in &behind {
            distance += position.abs_diff(request);
            position = request;
        }
    }

    ahead.extend(behind);
    Ok(Schedule {
        order: ahead,
        head: position,
        direction: current,
        distance,
    })
}

fn out_of_range(what: &str, value: u64, bound: u64) -> ErrorInfo {
    ErrorInfo::new("request-out-of-range", format!("{what} lies outside the disk"))
        .with_context(what, value.to_string())
        .with_context("bound", bound.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_scan_up() {
        let schedule =
            schedule_scan(50, Direction::Up, 200, &[176, 79, 34, 60, 92, 11, 41, 114]).unwrap();
        assert_eq!(schedule.order, vec![60, 79, 92, 114, 176, 41, 34, 11]);
        assert_eq!(schedule.distance, 337);
        assert_eq!(schedule.head, 11);
        assert_eq!(schedule.direction, Direction::Down);
    }

    #[test]
    fn scan_down_without_reversal() {
        let schedule = schedule_scan(53, Direction::Down, 200, &[14, 37, 53]).unwrap();
        assert_eq!(schedule.order, vec![53, 37, 14]);
        assert_eq!(schedule.distance, 39);
        assert_eq!(schedule.head, 14);
        assert_eq!(schedule.direction, Direction::Down);
    }

    #[test]
    fn scan_down_reverses_at_zero() {
        let schedule = schedule_scan(10, Direction::Down, 100, &[5, 20, 15]).unwrap();
        assert_eq!(schedule.order, vec![5, 15, 20]);
        assert_eq!(schedule.distance, 10 + 20);
        assert_eq!(schedule.direction, Direction::Up);
    }

    #[test]
    fn idle_disk_keeps_head() {
        let schedule = schedule_scan(7, Direction::Up, 8, &[]).unwrap();
        assert_eq!(schedule.order, Vec::<u64>::new());
        assert_eq!(schedule.head, 7);
        assert_eq!(schedule.distance, 0);
    }

    #[test]
    fn rejects_out_of_range_positions() {
        let err = schedule_scan(0, Direction::Up, 10, &[3, 10]).unwrap_err();
        assert_eq!(err.info().code, "request-out-of-range");
        assert_eq!(err.info().context.get("index").map(String::as_str), Some("1"));
        assert!(schedule_scan(10, Direction::Up, 10, &[]).is_err());
        assert_eq!(
            schedule_scan(0, Direction::Up, 0, &[]).unwrap_err().info().code,
            "empty-disk"
        );
    }
}
