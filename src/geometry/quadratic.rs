use arrayvec::ArrayVec;

use super::FloatType;

/// Real roots of `a * x^2 + b * x + c = 0`, in ascending order.
///
/// A double root is reported once. With `a == 0` the equation degrades to linear and has
/// at most one root (none at all if `b == 0` too).
pub fn quadratic_roots(a: FloatType, b: FloatType, c: FloatType) -> ArrayVec<FloatType, 2> {
    let mut roots = ArrayVec::new();

    if a == 0.0 {
        if b != 0.0 {
            roots.push(-c / b);
        }
        return roots;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 || discriminant.is_nan() {
        return roots;
    }
    if discriminant == 0.0 {
        roots.push(-b / (2.0 * a));
        return roots;
    }

    // Avoids cancellation between -b and the square root.
    // signum is never zero, so neither is q.
    let q = -0.5 * (b + b.signum() * discriminant.sqrt());
    let (r1, r2) = (q / a, c / q);

    roots.push(r1.min(r2));
    roots.push(r1.max(r2));
    roots
}

#[cfg(test)]
mod test {
    use super::*;
    use assert2::assert;
    use test_case::test_case;

    #[test_case(1.0, -3.0, 2.0, &[1.0, 2.0] ; "two_roots")]
    #[test_case(1.0, 0.0, -4.0, &[-2.0, 2.0] ; "symmetric")]
    #[test_case(1.0, -2.0, 1.0, &[1.0] ; "double_root")]
    #[test_case(1.0, 0.0, 1.0, &[] ; "complex")]
    #[test_case(0.0, 2.0, -4.0, &[2.0] ; "linear")]
    #[test_case(0.0, 0.0, 1.0, &[] ; "constant")]
    #[test_case(-2.0, 0.0, 8.0, &[-2.0, 2.0] ; "negative_leading")]
    fn roots(a: FloatType, b: FloatType, c: FloatType, expected: &[FloatType]) {
        let roots = quadratic_roots(a, b, c);
        assert!(roots.len() == expected.len());
        for (root, expected) in roots.iter().zip(expected) {
            assert!((root - expected).abs() < 1e-12, "{root} != {expected}");
        }
    }

    #[test]
    fn tiny_root_is_accurate() {
        // Naive formula loses all digits of the small root here.
        let roots = quadratic_roots(1.0, 1e8, 1.0);
        assert!(roots.len() == 2);
        assert!((roots[1] + 1e-8).abs() < 1e-20);
    }
}
