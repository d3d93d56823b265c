//! File logging demo
//!
//! Logs to the console and to `./demo-logs/demo_YYYYMMDD.log`.
//!
//! Run with: cargo run --example file_logging

use visiondesk_logger::prelude::*;

fn main() {
    configure(
        LoggingOptions::new()
            .with_default_level("INFO")
            .with_log_dir("demo-logs")
            .with_log_file_prefix("demo"),
    );

    let logger = get_logger("demo");

    log_init(&logger, "VisionDesk demo starting");
    log_config(&logger, "Loaded settings from ~/.visiondesk/config.json");

    log_step_start(&logger, "Capturing screen region");
    logger.debug("Region: x=120 y=80 w=640 h=480 (file only)");
    log_screenshot(&logger, "Captured 640x480 region");
    log_step_complete(&logger, "Capture finished");

    log_network(&logger, "POST https://api.openai.com/v1/chat/completions");
    log_ai(&logger, "Vision model returned 3 findings");
    logger.warning("Response took longer than 5s");
    log_phase_complete(&logger, "Analysis phase complete");

    flush();

    if let Some(path) = global().log_file() {
        println!("Full DEBUG-level record written to {}", path.display());
    }
}
