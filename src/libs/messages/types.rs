#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleShift,
    ConfigModuleBreaks,
    ConfigModuleNotify,
    PromptSelectModules,
    PromptShiftStart,
    PromptShiftEnd,
    PromptBreakTime(String),     // slot name
    PromptBreakDuration(String), // slot name
    PromptBreakWarnMinutes,
    PromptShiftEndWarnMinutes,
    InvalidTimeOfDay,

    // === SCHEDULE MESSAGES ===
    ShiftNotConfigured,
    NothingScheduled,
    ShiftWindowHeader(String, String), // start, end
    NoBreaksInShift,

    // === BREAK CONTROL MESSAGES ===
    BreakStarted(String, u64),         // slot, duration in minutes
    BreakAlreadyActive(String, String), // slot, remaining
    BreakStopped(String, String),      // slot, elapsed
    BreakExpired(String),              // slot
    BreakStatusLine(String, String, String), // slot, elapsed, remaining
    NoActiveBreak,

    // === ALERT MESSAGES ===
    BreakStartingSoon(i64),   // minutes
    ShiftEndingSoon(i64),     // minutes

    // === WATCHER MESSAGES ===
    WatcherStarted(u32),
    WatcherStopped(u32),
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    WatcherStoppingExisting(String),
    WatcherFailedToStopExisting(String),
    WatcherFailedToStop(u32),
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherSignalHandlingNotSupported,
    WatchShuttingDown,
    WatchExitedNormally,

    // === PROCESS MESSAGES ===
    InvalidPidFileContent,
    FailedToGetCurrentExecutable,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
    DaemonModeNotSupported,
    ProcessTerminationNotSupported,
    FailedToOpenProcess(u32),
    FailedToTerminateProcess(u32),
}
