//! Kinematic helper functions.

/// Källén triangle function λ(a, b, c).
pub fn lambda(a: f64, b: f64, c: f64) -> f64 {
    a * a + b * b + c * c - 2.0 * (a * b + b * c + c * a)
}

/// x^2
#[inline]
pub fn pow2(x: f64) -> f64 {
    x * x
}

/// x^3
#[inline]
pub fn pow3(x: f64) -> f64 {
    x * x * x
}

/// x^4
#[inline]
pub fn pow4(x: f64) -> f64 {
    pow2(pow2(x))
}

/// x^5
#[inline]
pub fn pow5(x: f64) -> f64 {
    pow4(x) * x
}

/// x^N for a compile-time exponent.
#[inline]
pub fn power_of<const N: i32>(x: f64) -> f64 {
    x.powi(N)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kallen_closed_form() {
        // λ(a, b, c) = (a - b - c)^2 - 4 b c
        let (a, b, c) = (27.8, 3.1, 0.25);
        let expected = pow2(a - b - c) - 4.0 * b * c;
        assert!((lambda(a, b, c) - expected).abs() < 1e-12);
        assert_eq!(lambda(1.0, 1.0, 1.0), -3.0);
        assert_eq!(lambda(4.0, 1.0, 1.0), 4.0 + 1.0 + 1.0 - 2.0 * (4.0 + 1.0 + 4.0));
    }

    #[test]
    fn fixed_powers() {
        assert_eq!(pow2(-3.0), 9.0);
        assert_eq!(pow3(-3.0), -27.0);
        assert_eq!(pow4(2.0), 16.0);
        assert_eq!(pow5(2.0), 32.0);
        assert_eq!(power_of::<7>(2.0), 128.0);
    }
}
