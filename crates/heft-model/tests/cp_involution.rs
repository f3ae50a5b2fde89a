use num_complex::Complex64;
use proptest::prelude::*;

use heft_model::{BToS, WilsonCoefficients};

proptest! {
    #[test]
    fn cp_conjugation_is_an_involution(
        seeds in proptest::collection::vec((-5.0f64..5.0, -5.0f64..5.0), 36)
    ) {
        let mut wc = WilsonCoefficients::<BToS>::default();
        for (idx, (re, im)) in seeds.iter().take(15).enumerate() {
            wc.sm_like[idx] = Complex64::new(*re, *im);
        }
        for (idx, (re, im)) in seeds.iter().skip(15).take(15).enumerate() {
            wc.primed[idx] = Complex64::new(*re, *im);
        }
        for (idx, (re, im)) in seeds.iter().skip(30).take(6).enumerate() {
            wc.scalar_tensor[idx] = Complex64::new(*re, *im);
        }
        wc.alpha_s = 0.22;

        let twice = wc.cp_conjugate().cp_conjugate();
        prop_assert_eq!(&twice, &wc);

        // single conjugation flips every imaginary part
        let once = wc.cp_conjugate();
        for idx in 0..15 {
            prop_assert_eq!(once.sm_like[idx], wc.sm_like[idx].conj());
            prop_assert_eq!(once.primed[idx], wc.primed[idx].conj());
        }
        for idx in 0..6 {
            prop_assert_eq!(once.scalar_tensor[idx], wc.scalar_tensor[idx].conj());
        }
    }
}
