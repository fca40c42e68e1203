pub fn default_theme_json() -> String {
    serde_json::json!({
        "primary_color": "#1f2937",
        "accent_color": "#f59e0b",
        "background_color": "#ffffff",
        "font_family": "Inter",
        "show_prices": true,
        "show_allergens": true,
    })
    .to_string()
}

pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_CURRENCY: &str = "$";
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
