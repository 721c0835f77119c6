#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use shiftwatch::libs::active_break::ActiveBreakState;
    use shiftwatch::libs::breaks::BreakKey;
    use shiftwatch::libs::config::{BreakSlotConfig, BreaksConfig, Config, NotifyConfig, ShiftConfig};
    use shiftwatch::libs::countdown::evaluate;
    use shiftwatch::libs::notify::{Alert, AlertTracker};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    /// 09:00-18:00 shift with a single 14:00 break.
    fn config() -> Config {
        Config {
            shift: Some(ShiftConfig {
                start: Some("09:00".to_string()),
                end: Some("18:00".to_string()),
            }),
            breaks: Some(BreaksConfig {
                break1: BreakSlotConfig {
                    time: Some("14:00".to_string()),
                    duration_secs: 15 * 60,
                },
                break2: BreakSlotConfig { time: None, duration_secs: 30 * 60 },
                break3: BreakSlotConfig { time: None, duration_secs: 15 * 60 },
            }),
            notify: None,
        }
    }

    #[test]
    fn test_break_alert_fires_at_threshold() {
        let thresholds = NotifyConfig::default();
        let mut tracker = AlertTracker::new();

        // 10 whole minutes before the 14:00 break.
        let countdown = evaluate(&config(), None, at(2025, 3, 10, 13, 50));
        assert_eq!(
            tracker.check(&thresholds, &countdown),
            Some(Alert::BreakSoon { minutes: 10 })
        );
    }

    #[test]
    fn test_alert_does_not_fire_off_threshold() {
        let thresholds = NotifyConfig::default();
        let mut tracker = AlertTracker::new();

        let countdown = evaluate(&config(), None, at(2025, 3, 10, 13, 53));
        assert_eq!(tracker.check(&thresholds, &countdown), None);
    }

    #[test]
    fn test_alert_fires_once_per_threshold() {
        let thresholds = NotifyConfig::default();
        let mut tracker = AlertTracker::new();

        // Ticks one second apart inside the same threshold minute: both are
        // 10 whole minutes out (10:30 and 10:29 remaining).
        let first = evaluate(&config(), None, at(2025, 3, 10, 13, 49) + Duration::seconds(30));
        let second = evaluate(&config(), None, at(2025, 3, 10, 13, 49) + Duration::seconds(31));

        assert!(tracker.check(&thresholds, &first).is_some());
        assert_eq!(tracker.check(&thresholds, &second), None);
    }

    #[test]
    fn test_each_threshold_fires_independently() {
        let thresholds = NotifyConfig::default();
        let mut tracker = AlertTracker::new();

        let ten = evaluate(&config(), None, at(2025, 3, 10, 13, 50));
        let five = evaluate(&config(), None, at(2025, 3, 10, 13, 55));

        assert_eq!(tracker.check(&thresholds, &ten), Some(Alert::BreakSoon { minutes: 10 }));
        assert_eq!(tracker.check(&thresholds, &five), Some(Alert::BreakSoon { minutes: 5 }));
    }

    #[test]
    fn test_tracker_rearms_for_the_next_occurrence() {
        let thresholds = NotifyConfig::default();
        let mut tracker = AlertTracker::new();

        let today = evaluate(&config(), None, at(2025, 3, 10, 13, 50));
        assert!(tracker.check(&thresholds, &today).is_some());

        // Same wall-clock offset a day later targets a new occurrence.
        let tomorrow = evaluate(&config(), None, at(2025, 3, 11, 13, 50));
        assert!(tracker.check(&thresholds, &tomorrow).is_some());
    }

    #[test]
    fn test_shift_end_alert_uses_its_own_thresholds() {
        let thresholds = NotifyConfig::default();
        let mut tracker = AlertTracker::new();

        // Past the last break, five whole minutes before the 18:00 end.
        let countdown = evaluate(&config(), None, at(2025, 3, 10, 17, 55));
        assert_eq!(
            tracker.check(&thresholds, &countdown),
            Some(Alert::ShiftEndSoon { minutes: 5 })
        );

        // Ten minutes out is a break threshold, not a shift-end one.
        let mut fresh = AlertTracker::new();
        let countdown = evaluate(&config(), None, at(2025, 3, 10, 17, 50));
        assert_eq!(fresh.check(&thresholds, &countdown), None);
    }

    #[test]
    fn test_no_alerts_outside_break_and_shift_end_phases() {
        let thresholds = NotifyConfig::default();
        let mut tracker = AlertTracker::new();

        // Pre-shift countdown five minutes before start: NextShift phase.
        let countdown = evaluate(&config(), None, at(2025, 3, 10, 8, 55));
        assert_eq!(tracker.check(&thresholds, &countdown), None);

        // An active break display never alerts either.
        let active = ActiveBreakState {
            key: BreakKey::Break1,
            started_at: at(2025, 3, 10, 14, 0),
        };
        let countdown = evaluate(&config(), Some(&active), at(2025, 3, 10, 14, 5));
        assert_eq!(tracker.check(&thresholds, &countdown), None);
    }

    #[test]
    fn test_custom_thresholds_are_honoured() {
        let thresholds = NotifyConfig {
            break_warn_minutes: vec![3],
            shift_end_warn_minutes: vec![],
        };
        let mut tracker = AlertTracker::new();

        let countdown = evaluate(&config(), None, at(2025, 3, 10, 13, 57));
        assert_eq!(tracker.check(&thresholds, &countdown), Some(Alert::BreakSoon { minutes: 3 }));

        let countdown = evaluate(&config(), None, at(2025, 3, 10, 13, 50));
        assert_eq!(tracker.check(&thresholds, &countdown), None);
    }
}
