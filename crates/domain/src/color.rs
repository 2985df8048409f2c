//! CIE 1931 chromaticity → sRGB conversion.
//!
//! Color-capable devices report their state as (x, y) chromaticity
//! coordinates plus a brightness level on the protocol's 0–254 scale.
//! Consumers want an RGB hex string. The conversion goes through XYZ
//! tristimulus values, the Wide-Gamut D65 matrix, a hue-preserving gamut
//! clip and sRGB gamma encoding.
//!
//! Conversion is best-effort decoration: degenerate inputs (y = 0 divides
//! by zero) must never fail, they collapse to black channels instead.

use serde_json::Value;

use crate::payload::Payload;

/// Maximum value of the protocol's brightness scale.
const BRIGHTNESS_MAX: f64 = 254.0;

/// Convert (x, y) chromaticity and an optional brightness to sRGB.
///
/// Brightness defaults to [`BRIGHTNESS_MAX`] when absent. Channels that
/// come out non-finite (division by zero on y = 0, gamma of a negative
/// out-of-gamut value) are coerced to 0.
#[must_use]
pub fn xy_to_rgb(x: f64, y: f64, brightness: Option<f64>) -> (u8, u8, u8) {
    let big_y = brightness.unwrap_or(BRIGHTNESS_MAX) / BRIGHTNESS_MAX;
    let z = 1.0 - x - y;
    let big_x = (big_y / y) * x;
    let big_z = (big_y / y) * z;

    let mut r = big_x * 1.656_492 - big_y * 0.354_851 - big_z * 0.255_038;
    let mut g = -big_x * 0.707_196 + big_y * 1.655_397 + big_z * 0.036_152;
    let mut b = big_x * 0.051_713 - big_y * 0.121_364 + big_z * 1.011_530;

    // Out-of-gamut: rescale by the largest channel, keeping hue at the
    // cost of saturation.
    if r > g && r > b && r > 1.0 {
        g /= r;
        b /= r;
        r = 1.0;
    } else if g > r && g > b && g > 1.0 {
        r /= g;
        b /= g;
        g = 1.0;
    } else if b > r && b > g && b > 1.0 {
        r /= b;
        g /= b;
        b = 1.0;
    }

    (channel(gamma(r)), channel(gamma(g)), channel(gamma(b)))
}

/// Convert (x, y) chromaticity and an optional brightness to a lowercase
/// `#rrggbb` string.
#[must_use]
pub fn xy_to_hex(x: f64, y: f64, brightness: Option<f64>) -> String {
    let (r, g, b) = xy_to_rgb(x, y, brightness);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// sRGB gamma encoding of one linear channel.
fn gamma(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Scale an encoded channel to 0–255, absorbing NaN/infinite values.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(c: f64) -> u8 {
    let scaled = (c * 255.0).round();
    if scaled.is_finite() {
        scaled.clamp(0.0, 255.0) as u8
    } else {
        0
    }
}

/// Attach a `hex` attribute to a payload's `color` object when it carries
/// both chromaticity coordinates, using the payload's `brightness` when
/// present.
pub fn enrich(payload: &mut Payload) {
    let Some(Value::Object(color)) = payload.get("color") else {
        return;
    };
    let (Some(x), Some(y)) = (
        color.get("x").and_then(Value::as_f64),
        color.get("y").and_then(Value::as_f64),
    ) else {
        return;
    };
    let brightness = payload.get("brightness").and_then(Value::as_f64);
    let hex = xy_to_hex(x, y, brightness);

    if let Some(Value::Object(color)) = payload.get_mut("color") {
        color.insert("hex".to_owned(), Value::String(hex));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Reference values computed once from the documented algorithm.

    #[test]
    fn should_convert_neutral_chromaticity_with_brightness() {
        assert_eq!(xy_to_rgb(0.3, 0.3, Some(200.0)), (225, 228, 255));
        assert_eq!(xy_to_hex(0.3, 0.3, Some(200.0)), "#e1e4ff");
    }

    #[test]
    fn should_default_brightness_to_full_scale() {
        assert_eq!(xy_to_rgb(0.5, 0.4, None), (255, 183, 97));
        assert_eq!(xy_to_hex(0.5, 0.4, None), "#ffb761");
    }

    #[test]
    fn should_convert_d65_whitepoint() {
        assert_eq!(xy_to_hex(0.3127, 0.329, Some(254.0)), "#f5feff");
    }

    #[test]
    fn should_convert_dim_brightness() {
        assert_eq!(xy_to_hex(0.3, 0.3, Some(10.0)), "#37383f");
    }

    #[test]
    fn should_convert_mid_brightness_green_yellow() {
        assert_eq!(xy_to_hex(0.4, 0.45, Some(127.0)), "#bebf65");
    }

    #[test]
    fn should_clamp_negative_channels_on_saturated_red() {
        let (r, g, b) = xy_to_rgb(0.7, 0.26, Some(254.0));
        assert_eq!(r, 255);
        assert_eq!(g, 0);
        assert_eq!(b, 58);
    }

    #[test]
    fn should_collapse_to_black_when_y_is_zero() {
        assert_eq!(xy_to_rgb(0.3, 0.0, Some(200.0)), (0, 0, 0));
        assert_eq!(xy_to_rgb(0.0, 0.0, None), (0, 0, 0));
    }

    #[test]
    fn should_keep_channels_in_range_across_the_diagram() {
        // Sweep a grid of chromaticities; every channel must stay a byte
        // and the function must never panic.
        for xi in 0..=10 {
            for yi in 1..=10 {
                let x = f64::from(xi) / 10.0;
                let y = f64::from(yi) / 10.0;
                let _ = xy_to_rgb(x, y, Some(254.0));
                let _ = xy_to_rgb(x, y, Some(1.0));
            }
        }
    }

    #[test]
    fn should_be_deterministic() {
        assert_eq!(
            xy_to_rgb(0.42, 0.37, Some(180.0)),
            xy_to_rgb(0.42, 0.37, Some(180.0))
        );
    }

    // ── Payload enrichment ──────────────────────────────────────────────

    #[test]
    fn should_enrich_color_object_with_hex() {
        let mut payload =
            Payload::try_from(json!({"color": {"x": 0.3, "y": 0.3}, "brightness": 200}))
                .unwrap();
        enrich(&mut payload);
        assert_eq!(
            payload.get("color"),
            Some(&json!({"x": 0.3, "y": 0.3, "hex": "#e1e4ff"}))
        );
    }

    #[test]
    fn should_enrich_without_brightness_using_full_scale() {
        let mut payload = Payload::try_from(json!({"color": {"x": 0.5, "y": 0.4}})).unwrap();
        enrich(&mut payload);
        assert_eq!(payload.get("color").unwrap()["hex"], json!("#ffb761"));
    }

    #[test]
    fn should_not_enrich_when_coordinates_incomplete() {
        let mut payload = Payload::try_from(json!({"color": {"x": 0.3}})).unwrap();
        enrich(&mut payload);
        assert_eq!(payload.get("color"), Some(&json!({"x": 0.3})));
    }

    #[test]
    fn should_not_enrich_when_color_missing_or_not_object() {
        let mut payload = Payload::try_from(json!({"state": "ON"})).unwrap();
        enrich(&mut payload);
        assert!(!payload.contains_key("color"));

        let mut payload = Payload::try_from(json!({"color": "red"})).unwrap();
        enrich(&mut payload);
        assert_eq!(payload.get("color"), Some(&json!("red")));
    }
}
