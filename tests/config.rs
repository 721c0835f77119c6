#[cfg(test)]
mod tests {
    use shiftwatch::libs::config::{BreakSlotConfig, BreaksConfig, Config, NotifyConfig, ShiftConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_file_returns_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();

        assert!(config.shift.is_none());
        assert!(config.breaks.is_none());
        assert!(config.notify.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            shift: Some(ShiftConfig {
                start: Some("09:00".to_string()),
                end: Some("18:00".to_string()),
            }),
            breaks: Some(BreaksConfig {
                break1: BreakSlotConfig {
                    time: Some("11:00".to_string()),
                    duration_secs: 900,
                },
                break2: BreakSlotConfig {
                    time: Some("14:00".to_string()),
                    duration_secs: 1800,
                },
                break3: BreakSlotConfig { time: None, duration_secs: 900 },
            }),
            notify: Some(NotifyConfig {
                break_warn_minutes: vec![10, 5],
                shift_end_warn_minutes: vec![5],
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.shift, config.shift);
        assert_eq!(loaded.breaks, config.breaks);
        assert_eq!(loaded.notify, config.notify);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_removes_the_file(_ctx: &mut ConfigTestContext) {
        let config = Config {
            shift: Some(ShiftConfig {
                start: Some("08:00".to_string()),
                end: None,
            }),
            breaks: None,
            notify: None,
        };
        config.save().unwrap();
        assert!(Config::read().unwrap().shift.is_some());

        Config::delete().unwrap();
        assert!(Config::read().unwrap().shift.is_none());

        // Deleting an absent file is not an error.
        Config::delete().unwrap();
    }

    #[test]
    fn test_break_slot_defaults() {
        let breaks = BreaksConfig::default();

        assert_eq!(breaks.break1.duration_secs, 15 * 60);
        assert_eq!(breaks.break2.duration_secs, 30 * 60);
        assert_eq!(breaks.break3.duration_secs, 15 * 60);
        assert!(breaks.break1.time.is_none());
        assert!(breaks.break2.time.is_none());
        assert!(breaks.break3.time.is_none());
    }

    #[test]
    fn test_notify_defaults() {
        let notify = NotifyConfig::default();

        assert_eq!(notify.break_warn_minutes, vec![10, 5]);
        assert_eq!(notify.shift_end_warn_minutes, vec![5]);
    }
}
