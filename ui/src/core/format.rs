//! Formatting helpers for image metadata.

pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    let value = bytes as f64;
    if value >= MIB {
        format!("{:.1} MB", value / MIB)
    } else if value >= KIB {
        format!("{:.0} KB", value / KIB)
    } else {
        format!("{bytes} B")
    }
}

pub fn format_dimensions(width: u32, height: u32) -> Option<String> {
    (width > 0 && height > 0).then(|| format!("{width} × {height}"))
}

pub fn format_percent(value: u32) -> String {
    format!("{value}%")
}
