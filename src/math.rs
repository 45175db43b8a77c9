//! HSB <-> RGB conversion on normalized f64 tuples.
//! All inputs and outputs are in 0.0–1.0.

/// HSB/HSV → RGB. Hue wraps, so 1.0 is the same as 0.0.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).rem_euclid(6.0);
    let f = sector - sector.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector.floor() as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSB/HSV. Achromatic input reports hue 0.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (if h >= 1.0 { 0.0 } else { h }, s, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {a} ~= {b}");
    }

    #[test]
    fn primaries_convert_both_ways() {
        let cases = [
            (0.0, (1.0, 0.0, 0.0)),
            (1.0 / 3.0, (0.0, 1.0, 0.0)),
            (2.0 / 3.0, (0.0, 0.0, 1.0)),
        ];
        for (hue, (r, g, b)) in cases {
            let (cr, cg, cb) = hsb_to_rgb(hue, 1.0, 1.0);
            approx_eq(cr, r);
            approx_eq(cg, g);
            approx_eq(cb, b);

            let (h, s, v) = rgb_to_hsb(r, g, b);
            approx_eq(h, hue);
            approx_eq(s, 1.0);
            approx_eq(v, 1.0);
        }
    }

    #[test]
    fn hue_of_one_wraps_to_red() {
        let (r, g, b) = hsb_to_rgb(1.0, 1.0, 1.0);
        approx_eq(r, 1.0);
        approx_eq(g, 0.0);
        approx_eq(b, 0.0);
    }

    #[test]
    fn zero_saturation_is_gray_at_brightness() {
        assert_eq!(hsb_to_rgb(0.42, 0.0, 0.3), (0.3, 0.3, 0.3));
        let (h, s, v) = rgb_to_hsb(0.3, 0.3, 0.3);
        assert_eq!((h, s), (0.0, 0.0));
        approx_eq(v, 0.3);
    }

    #[test]
    fn black_has_zero_saturation() {
        assert_eq!(rgb_to_hsb(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    }
}
