//! Inline style fragments shared by the view.

pub const SECTION: &str = "margin-bottom: 18px; padding: 12px; border: 1px solid #ddd; border-radius: 6px;";

pub const FIELD_ROW: &str = "display: flex; flex-direction: column; margin-bottom: 8px; max-width: 420px;";

pub const STATUS_PENDING: &str = "color: #888; font-size: 12px;";
pub const STATUS_RESOLVED: &str = "color: #2e7d32; font-size: 12px;";
pub const STATUS_NOT_FOUND: &str = "color: #c62828; font-size: 12px;";

pub const BANNER_UNAVAILABLE: &str =
    "background: #fff3e0; border: 1px solid #ef6c00; color: #ef6c00; padding: 8px 12px; border-radius: 4px; margin-bottom: 12px;";
