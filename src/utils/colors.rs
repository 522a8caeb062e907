/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Duration color:
/// \>0 → reset
/// \<0 → red (edited entry ends before it starts)
/// 0 → grey
pub fn color_for_minutes(value: i64) -> &'static str {
    if value > 0 {
        RESET
    } else if value < 0 {
        RED
    } else {
        GREY
    }
}

/// Punch-in values in green, punch-out in red, missing values in grey.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--:--:--" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_punch_out_is_grey() {
        assert_eq!(colorize_in_out("--:--:--", false), format!("{GREY}--:--:--{RESET}"));
        assert_eq!(colorize_in_out("09:00:00", true), format!("{GREEN}09:00:00{RESET}"));
    }
}
