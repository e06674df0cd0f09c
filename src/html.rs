//! HTML content helpers for the colorweb responses.
//!
//! Keeps the greeting markup here so the server module stays free of
//! string templates.
//!
/// Render the greeting fragment for the configured color.
///
/// The color is substituted verbatim, matching the original behavior:
/// whatever string was configured ends up in the markup unescaped.
pub fn greeting_page(color: &str) -> String {
    format!(r#"<h1 style="text-align:center;">Hello from {color} version!</h1>"#)
}
