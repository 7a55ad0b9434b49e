//! Built-in priority rules.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::RuleScore;
use crate::error::BalanceError;
use crate::models::Task;

/// Priority rule applied when several candidates fit the current station.
///
/// Wire names follow the request contract: `RPW` (alias `DEFAULT`), `SPT`,
/// `MAX_SUCC_TIME`, `MIN_SUCC_TIME`, `RANDOM`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityRule {
    /// Ranked Positional Weight: duration + transitive successor time,
    /// descending. Favors tasks that are both large and unlock large
    /// downstream work.
    #[default]
    #[serde(alias = "DEFAULT")]
    Rpw,
    /// Shortest Processing Time: duration ascending. Favors quick wins;
    /// tends to produce more, more evenly idle stations.
    Spt,
    /// Transitive successor time, descending: unblock the most future work
    /// regardless of own size.
    MaxSuccTime,
    /// Transitive successor time, ascending: least downstream impact first.
    /// Used for comparative study.
    MinSuccTime,
    /// Uniform random pick among candidates. Baseline for variance study;
    /// reproducible under a fixed seed.
    Random,
}

impl PriorityRule {
    /// Wire name of the rule.
    pub fn name(&self) -> &'static str {
        match self {
            PriorityRule::Rpw => "RPW",
            PriorityRule::Spt => "SPT",
            PriorityRule::MaxSuccTime => "MAX_SUCC_TIME",
            PriorityRule::MinSuccTime => "MIN_SUCC_TIME",
            PriorityRule::Random => "RANDOM",
        }
    }

    /// Score for a deterministic rule; lower = higher priority.
    fn score(&self, task: &Task) -> RuleScore {
        match self {
            PriorityRule::Rpw => -task.positional_weight(),
            PriorityRule::Spt => task.duration,
            PriorityRule::MaxSuccTime => -task.successor_time_sum,
            PriorityRule::MinSuccTime => task.successor_time_sum,
            // Random never ranks by score; see `rank`.
            PriorityRule::Random => 0,
        }
    }

    /// Orders candidates from most to least preferred.
    ///
    /// Returns indices into `candidates`; the first index is the one to
    /// select. Deterministic rules sort stably, so candidates that tie on
    /// the rule's metric keep their input order. `Random` moves one
    /// uniformly chosen candidate to the front and leaves the rest in
    /// input order, consuming the caller's generator state.
    pub fn rank<R: Rng>(&self, candidates: &[&Task], rng: &mut R) -> Vec<usize> {
        let mut order: Vec<usize> = (0..candidates.len()).collect();
        match self {
            PriorityRule::Random => {
                if !order.is_empty() {
                    let pick = rng.random_range(0..order.len());
                    let winner = order.remove(pick);
                    order.insert(0, winner);
                }
            }
            _ => order.sort_by_key(|&i| self.score(candidates[i])),
        }
        order
    }
}

impl FromStr for PriorityRule {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RPW" | "DEFAULT" => Ok(PriorityRule::Rpw),
            "SPT" => Ok(PriorityRule::Spt),
            "MAX_SUCC_TIME" => Ok(PriorityRule::MaxSuccTime),
            "MIN_SUCC_TIME" => Ok(PriorityRule::MinSuccTime),
            "RANDOM" => Ok(PriorityRule::Random),
            _ => Err(BalanceError::UnknownRule(s.trim().to_string())),
        }
    }
}

impl fmt::Display for PriorityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn task(id: &str, duration: i64, successor_time_sum: i64) -> Task {
        Task {
            id: id.into(),
            duration,
            predecessors: vec![],
            direct_successors: vec![],
            successor_count: 0,
            successor_time_sum,
        }
    }

    fn first_id<'a>(rule: PriorityRule, candidates: &[&'a Task]) -> &'a str {
        let mut rng = SmallRng::seed_from_u64(0);
        let order = rule.rank(candidates, &mut rng);
        candidates[order[0]].id.as_str()
    }

    #[test]
    fn test_parse_all_rules() {
        assert_eq!("RPW".parse::<PriorityRule>().unwrap(), PriorityRule::Rpw);
        assert_eq!("DEFAULT".parse::<PriorityRule>().unwrap(), PriorityRule::Rpw);
        assert_eq!("spt".parse::<PriorityRule>().unwrap(), PriorityRule::Spt);
        assert_eq!(
            "MAX_SUCC_TIME".parse::<PriorityRule>().unwrap(),
            PriorityRule::MaxSuccTime
        );
        assert_eq!(
            "MIN_SUCC_TIME".parse::<PriorityRule>().unwrap(),
            PriorityRule::MinSuccTime
        );
        assert_eq!(
            " random ".parse::<PriorityRule>().unwrap(),
            PriorityRule::Random
        );
    }

    #[test]
    fn test_unknown_rule_fails() {
        let err = "LPT".parse::<PriorityRule>().unwrap_err();
        assert_eq!(err, BalanceError::UnknownRule("LPT".into()));
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&PriorityRule::MaxSuccTime).unwrap(),
            "\"MAX_SUCC_TIME\""
        );
        let rule: PriorityRule = serde_json::from_str("\"DEFAULT\"").unwrap();
        assert_eq!(rule, PriorityRule::Rpw);
    }

    #[test]
    fn test_rpw_prefers_heaviest_positional_weight() {
        let a = task("A", 20, 203); // weight 223
        let b = task("B", 55, 104); // weight 159
        assert_eq!(first_id(PriorityRule::Rpw, &[&b, &a]), "A");
    }

    #[test]
    fn test_spt_prefers_shortest() {
        let long = task("LONG", 50, 0);
        let short = task("SHORT", 10, 0);
        assert_eq!(first_id(PriorityRule::Spt, &[&long, &short]), "SHORT");
    }

    #[test]
    fn test_successor_time_rules() {
        let rich = task("RICH", 10, 90);
        let poor = task("POOR", 10, 5);
        assert_eq!(first_id(PriorityRule::MaxSuccTime, &[&poor, &rich]), "RICH");
        assert_eq!(first_id(PriorityRule::MinSuccTime, &[&rich, &poor]), "POOR");
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Equal durations under SPT: the earlier candidate wins.
        let x = task("X", 15, 40);
        let y = task("Y", 15, 90);
        let mut rng = SmallRng::seed_from_u64(0);
        let order = PriorityRule::Spt.rank(&[&x, &y], &mut rng);
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_full_ranking_order() {
        let a = task("A", 20, 203);
        let c = task("C", 18, 82);
        let d = task("D", 45, 80);
        let mut rng = SmallRng::seed_from_u64(0);
        let order = PriorityRule::Rpw.rank(&[&c, &d, &a], &mut rng);
        // Weights: A 223, D 125, C 100.
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_random_is_member_and_seed_deterministic() {
        let tasks: Vec<Task> = (0..6).map(|i| task(&format!("T{i}"), 10, 0)).collect();
        let refs: Vec<&Task> = tasks.iter().collect();

        let mut rng_a = SmallRng::seed_from_u64(7);
        let mut rng_b = SmallRng::seed_from_u64(7);
        let order_a = PriorityRule::Random.rank(&refs, &mut rng_a);
        let order_b = PriorityRule::Random.rank(&refs, &mut rng_b);
        assert_eq!(order_a, order_b);
        assert!(order_a[0] < refs.len());

        // Every candidate appears exactly once.
        let mut seen = order_a.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..refs.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_random_rest_keeps_input_order() {
        let tasks: Vec<Task> = (0..5).map(|i| task(&format!("T{i}"), 10, 0)).collect();
        let refs: Vec<&Task> = tasks.iter().collect();
        let mut rng = SmallRng::seed_from_u64(3);
        let order = PriorityRule::Random.rank(&refs, &mut rng);
        let rest: Vec<usize> = order[1..].to_vec();
        let mut sorted = rest.clone();
        sorted.sort_unstable();
        assert_eq!(rest, sorted);
    }
}
