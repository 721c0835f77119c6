#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use shiftwatch::libs::active_break::ActiveBreakState;
    use shiftwatch::libs::breaks::BreakKey;
    use shiftwatch::libs::config::{BreakSlotConfig, BreaksConfig, Config, ShiftConfig};
    use shiftwatch::libs::countdown::{evaluate, Phase};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn slot(time: Option<&str>, minutes: u64) -> BreakSlotConfig {
        BreakSlotConfig {
            time: time.map(String::from),
            duration_secs: minutes * 60,
        }
    }

    /// The reference setup: 09:00-18:00 shift with breaks at 11:00, 14:00
    /// and 17:00.
    fn reference_config() -> Config {
        Config {
            shift: Some(ShiftConfig {
                start: Some("09:00".to_string()),
                end: Some("18:00".to_string()),
            }),
            breaks: Some(BreaksConfig {
                break1: slot(Some("11:00"), 15),
                break2: slot(Some("14:00"), 30),
                break3: slot(Some("17:00"), 15),
            }),
            notify: None,
        }
    }

    #[test]
    fn test_next_break_countdown_within_shift() {
        let countdown = evaluate(&reference_config(), None, at(2025, 3, 10, 10, 0));

        assert_eq!(countdown.text, "Next break in 01:00:00");
        assert_eq!(countdown.phase, Phase::NextBreak(BreakKey::Break1));
        assert_eq!(countdown.remaining_secs, 3600);
    }

    #[test]
    fn test_next_shift_countdown_after_hours() {
        let countdown = evaluate(&reference_config(), None, at(2025, 3, 10, 19, 0));

        // The resolver hands out tomorrow's occurrence at 09:00.
        assert_eq!(countdown.text, "Next shift in 14:00:00");
        assert_eq!(countdown.phase, Phase::NextShift);
    }

    #[test]
    fn test_next_shift_countdown_before_hours() {
        let countdown = evaluate(&reference_config(), None, at(2025, 3, 10, 7, 30));

        assert_eq!(countdown.text, "Next shift in 01:30:00");
        assert_eq!(countdown.phase, Phase::NextShift);
    }

    #[test]
    fn test_shift_end_countdown_when_no_breaks_remain() {
        // 17:00 is the last break; at 17:30 only the shift end is left.
        let countdown = evaluate(&reference_config(), None, at(2025, 3, 10, 17, 30));

        assert_eq!(countdown.text, "Shift ends in 00:30:00");
        assert_eq!(countdown.phase, Phase::ShiftEnd);
    }

    #[test]
    fn test_raw_break_fallback_without_shift() {
        let config = Config {
            shift: None,
            breaks: Some(BreaksConfig {
                break1: slot(Some("09:00"), 15),
                break2: slot(None, 30),
                break3: slot(None, 15),
            }),
            notify: None,
        };
        let countdown = evaluate(&config, None, at(2025, 3, 10, 23, 0));

        // Nearest raw break time is tomorrow 09:00, shift containment ignored.
        assert_eq!(countdown.text, "Next break in 10:00:00");
        assert_eq!(countdown.phase, Phase::NextBreak(BreakKey::Break1));
    }

    #[test]
    fn test_raw_break_fallback_is_strictly_upcoming() {
        let config = Config {
            shift: None,
            breaks: Some(BreaksConfig {
                break1: slot(Some("09:00"), 15),
                break2: slot(None, 30),
                break3: slot(None, 15),
            }),
            notify: None,
        };
        // Exactly at the break time the next one is a day away.
        let countdown = evaluate(&config, None, at(2025, 3, 10, 9, 0));

        assert_eq!(countdown.text, "Next break in 24:00:00");
    }

    #[test]
    fn test_idle_when_nothing_is_configured() {
        let countdown = evaluate(&Config::default(), None, at(2025, 3, 10, 12, 0));

        assert_eq!(countdown.phase, Phase::Idle);
        assert_eq!(countdown.text, "");
        assert_eq!(countdown.target, None);
    }

    #[test]
    fn test_active_break_overrides_schedule_display() {
        let started_at = at(2025, 3, 10, 11, 0);
        let active = ActiveBreakState {
            key: BreakKey::Break1,
            started_at,
        };

        // One second before the 15-minute duration runs out.
        let countdown = evaluate(&reference_config(), Some(&active), started_at + Duration::seconds(899));
        assert_eq!(countdown.text, "Break left 00:00:01");
        assert_eq!(countdown.phase, Phase::OnBreak(BreakKey::Break1));
        assert_eq!(countdown.expired_break, None);
    }

    #[test]
    fn test_expired_break_falls_through_to_schedule() {
        let started_at = at(2025, 3, 10, 11, 0);
        let active = ActiveBreakState {
            key: BreakKey::Break1,
            started_at,
        };

        // Exactly at the duration the break is over; the display moves on
        // and the expiry is reported for the owning surface to clear.
        let countdown = evaluate(&reference_config(), Some(&active), started_at + Duration::seconds(900));
        assert_eq!(countdown.phase, Phase::NextBreak(BreakKey::Break2));
        assert_eq!(countdown.expired_break, Some(BreakKey::Break1));
        assert!(countdown.text.starts_with("Next break in"));
    }

    #[test]
    fn test_remaining_minutes_floors_whole_minutes() {
        let countdown = evaluate(&reference_config(), None, at(2025, 3, 10, 10, 0));
        assert_eq!(countdown.remaining_minutes(), 60);

        let countdown = evaluate(&reference_config(), None, at(2025, 3, 10, 10, 50));
        assert_eq!(countdown.remaining_minutes(), 10);
    }

    #[test]
    fn test_evaluation_is_pure() {
        let config = reference_config();
        let now = at(2025, 3, 10, 10, 0);

        assert_eq!(evaluate(&config, None, now), evaluate(&config, None, now));
    }

    #[test]
    fn test_overnight_shift_countdown_past_midnight() {
        let config = Config {
            shift: Some(ShiftConfig {
                start: Some("22:00".to_string()),
                end: Some("06:00".to_string()),
            }),
            breaks: Some(BreaksConfig {
                break1: slot(Some("02:00"), 15),
                break2: slot(None, 30),
                break3: slot(None, 15),
            }),
            notify: None,
        };

        // Half past midnight, still inside yesterday's occurrence; the 02:00
        // break belongs to this morning.
        let countdown = evaluate(&config, None, at(2025, 3, 11, 0, 30));
        assert_eq!(countdown.text, "Next break in 01:30:00");
        assert_eq!(countdown.phase, Phase::NextBreak(BreakKey::Break1));
    }
}
