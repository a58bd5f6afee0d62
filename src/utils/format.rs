//! Formatting and MIME classification helpers for file display.

const KILOBYTE: u64 = 1024;
const MEGABYTE: u64 = KILOBYTE * KILOBYTE;

/// Format a byte count as a human-readable size using binary (1024) scaling.
///
/// Picks the largest unit where the value stays >= 1, e.g. "2.9 MB",
/// "976.6 KB", "500 bytes". Whole values drop the decimal ("1 MB").
pub fn convert_bytes_to_mbs_or_kbs(bytes: u64) -> String {
    if bytes >= MEGABYTE {
        scaled(bytes, MEGABYTE, "MB")
    } else if bytes >= KILOBYTE {
        scaled(bytes, KILOBYTE, "KB")
    } else {
        format!("{} bytes", bytes)
    }
}

fn scaled(bytes: u64, unit: u64, suffix: &str) -> String {
    let value = bytes as f64 / unit as f64;
    if value.fract() == 0.0 {
        format!("{value:.0} {suffix}")
    } else {
        format!("{value:.1} {suffix}")
    }
}

/// Whether a MIME type can be rendered as an inline `<img>` preview.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_below_one_kilobyte() {
        assert_eq!(convert_bytes_to_mbs_or_kbs(0), "0 bytes");
        assert_eq!(convert_bytes_to_mbs_or_kbs(500), "500 bytes");
        assert_eq!(convert_bytes_to_mbs_or_kbs(1023), "1023 bytes");
    }

    #[test]
    fn test_kilobyte_range() {
        assert_eq!(convert_bytes_to_mbs_or_kbs(1024), "1 KB");
        assert_eq!(convert_bytes_to_mbs_or_kbs(2048), "2 KB");
        // Binary scaling: a decimal megabyte is still below 1024^2.
        assert_eq!(convert_bytes_to_mbs_or_kbs(1_000_000), "976.6 KB");
    }

    #[test]
    fn test_megabyte_range() {
        assert_eq!(convert_bytes_to_mbs_or_kbs(1_048_576), "1 MB");
        assert_eq!(convert_bytes_to_mbs_or_kbs(3_000_000), "2.9 MB");
    }

    #[test]
    fn test_is_image() {
        assert!(is_image("image/png"));
        assert!(is_image("image/svg+xml"));
        assert!(!is_image("application/pdf"));
        assert!(!is_image(""));
    }
}
