//! Unit tests for colony-core primitives.

#[cfg(test)]
mod ids {
    use std::collections::BTreeSet;

    use crate::AgentId;

    #[test]
    fn ordering_is_lexicographic() {
        assert!(AgentId::from("agent0") < AgentId::from("agent00"));
        assert!(AgentId::from("agent00") < AgentId::from("agent1"));
    }

    #[test]
    fn set_probe_by_str() {
        let set: BTreeSet<AgentId> =
            ["agent0", "agent1"].into_iter().map(AgentId::from).collect();
        assert!(set.contains("agent0"));
        assert!(!set.contains("agent2"));
    }

    #[test]
    fn display_is_verbatim() {
        assert_eq!(AgentId::from("agent01").to_string(), "agent01");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimTime, TimeWindow};

    #[test]
    fn total_order() {
        assert!(SimTime(0.0) < SimTime(10.0));
        assert_eq!(SimTime(5.0), SimTime(5.0));
        // NaN sorts after all real values instead of breaking comparisons.
        assert!(SimTime(f64::NAN) > SimTime(f64::MAX));
    }

    #[test]
    fn window_bounds_scale_with_max_time() {
        let w = TimeWindow::new(0.5, 1.0).unwrap();
        let (lo, hi) = w.bounds(SimTime(200.0));
        assert_eq!(lo, SimTime(100.0));
        assert_eq!(hi, SimTime(200.0));
    }

    #[test]
    fn window_bounds_inclusive() {
        let w = TimeWindow::new(0.5, 1.0).unwrap();
        let max = SimTime(200.0);
        assert!(w.contains(SimTime(100.0), max));
        assert!(w.contains(SimTime(200.0), max));
        assert!(!w.contains(SimTime(99.9), max));
    }

    #[test]
    fn full_window_contains_zero() {
        assert!(TimeWindow::FULL.contains(SimTime::ZERO, SimTime(100.0)));
    }

    #[test]
    fn window_rejects_out_of_range_fractions() {
        assert!(TimeWindow::new(-0.1, 1.0).is_err());
        assert!(TimeWindow::new(0.0, 1.5).is_err());
    }

    #[test]
    fn window_rejects_inverted_bounds() {
        assert!(TimeWindow::new(0.8, 0.2).is_err());
    }
}
