// src/config/consts.rs

// Net config
pub const LISTING_URL: &str = "https://www.worldcubeassociation.org/results/misc/export.html";
pub const DOWNLOAD_BASE: &str = "https://www.worldcubeassociation.org/results/misc/";
pub const NET_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = "sum_of_ranks/0.3";

// Export archive
pub const EXPORT_NAME_PATTERN: &str = r"WCA_export\d+_\d+\.tsv\.zip";
pub const TABLE_FILE_PREFIX: &str = "WCA_export_";
pub const TABLE_FILE_EXT: &str = ".tsv";
pub const TABLE_EVENTS: &str = "Events";
pub const TABLE_PERSONS: &str = "Persons";
pub const TABLE_RANKS_SINGLE: &str = "RanksSingle";
pub const TABLE_RANKS_AVERAGE: &str = "RanksAverage";
pub const REQUIRED_TABLES: [&str; 4] = [
    TABLE_EVENTS,
    TABLE_PERSONS,
    TABLE_RANKS_SINGLE,
    TABLE_RANKS_AVERAGE,
];

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const MAX_EXPORT_AGE_SECS: u64 = 10 * 60;

// Ranking
pub const TOP_N: u32 = 100;
pub const AVERAGE_SUFFIX: &str = "A";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "sum_of_ranks";
