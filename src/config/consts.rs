// src/config/consts.rs

// Net config
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const DISCOVERY_TIMEOUT_SECS: u64 = 15;

// Sheet discovery
pub const PORTAL_URL: &str = "https://ucam.uiu.ac.bd/Student/ExamRoutineViewer.aspx";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const TIMESTAMP_FMT: &str = "%Y%m%d_%H%M%S";
pub const COURSE_SEP: &str = " | ";

// Report
pub const FINAL_ONLY_MARKER: &str = "Only Final Exam";
pub const EXPECTED_DAYS: usize = 7;
pub const SLOTS_PER_DAY: usize = 3;
