//! Constants used throughout the application
//!
//! This module centralizes UI text, default seed data, and other constant
//! values to improve maintainability and consistency.

// UI Text
pub const VIEW_TITLE: &str = "Tasks";
pub const VIEW_FOOTER: &str = "Press q to quit";
pub const INPUT_PROMPT: &str = "> ";
pub const CURSOR_MARKER: &str = ">";
pub const UNCHECKED_MARKER: &str = " ";
pub const LEGEND_SEPARATOR: &str = "|";

// Error Messages
pub const ERROR_RUNTIME_PREFIX: &str = "Alas, there's been an error";

// Config Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const CONFIG_FILE_NAME: &str = "bucketlist.toml";
pub const APP_DIR_NAME: &str = "bucketlist";
pub const LOG_FILE_NAME: &str = "bucketlist.log";

// Text input defaults
pub const DEFAULT_INPUT_PLACEHOLDER: &str = "Do something...";
pub const DEFAULT_INPUT_WIDTH: u16 = 14;
pub const DEFAULT_INPUT_COLOR: &str = "#5533ff";
/// Maximum configurable width of the insert input, in columns
pub const INPUT_MAX_WIDTH: u16 = 200;

/// Keys the navigation mode already binds; buckets may not claim them
pub const RESERVED_KEYS: [char; 5] = ['q', 'n', 'j', 'k', ' '];

// Default seed buckets
pub const DEFAULT_BUCKET: &str = "work";
const SEED_WORK_TASKS: &[&str] = &["Buy carrots", "Buy celery", "Buy kohlrabi"];
const SEED_ACADEMIC_TASKS: &[&str] = &["Buy carrots"];
const SEED_PERSONAL_TASKS: &[&str] = &["Buy kohlrabi"];

/// Name, selection key, color and tasks of the buckets available on startup
pub const SEED_BUCKETS: [(&str, char, &str, &[&str]); 3] = [
    ("work", 'w', "#0000ff", SEED_WORK_TASKS),
    ("academic", 'e', "#00ff00", SEED_ACADEMIC_TASKS),
    ("personal", 'r', "#ff9900", SEED_PERSONAL_TASKS),
];
