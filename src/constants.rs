// Game rules (fixed, not configurable)
pub const SECRET_LEN: usize = 4;
pub const MAX_ATTEMPTS: usize = 10;
pub const DIGITS: [u8; 10] = *b"0123456789";

// UI timing
pub const UI_POLL_MS: u64 = 50;

// Decorative feeds
pub const FEED_TIMEOUT_SECONDS: u64 = 5;
pub const WEATHER_CITY: &str = "Recife";
pub const WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast?latitude=-8.0476&longitude=-34.8770&current_weather=true";
pub const QUOTE_URL: &str = "https://api.quotable.io/random?tags=motivational";
pub const USER_AGENT: &str = "portfolio-feeds";

// Logging
pub const LOG_DIR_NAME: &str = ".portfolio";
pub const LOG_FILE_NAME: &str = "portfolio.log";
