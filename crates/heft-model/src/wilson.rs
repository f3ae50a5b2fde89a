//! Typed Wilson-coefficient containers.

use std::marker::PhantomData;

use num_complex::Complex64;

use crate::transition::{ChargedCurrent, Transition};

/// Number of slots in the SM-like and primed arrays: c1..c10 plus five
/// auxiliary slots reserved for effective/CPS combinations.
pub const SM_LIKE_SLOTS: usize = 15;

/// Indices into the scalar-tensor auxiliary array.
pub mod st {
    /// cS
    pub const S: usize = 0;
    /// cS'
    pub const S_PRIME: usize = 1;
    /// cP
    pub const P: usize = 2;
    /// cP'
    pub const P_PRIME: usize = 3;
    /// cT
    pub const T: usize = 4;
    /// cT5
    pub const T5: usize = 5;
}

/// Wilson coefficients of one transition at a fixed scale.
///
/// CP conjugation acts element-wise as complex conjugation on all three
/// arrays; `cp_conjugate` is an involution.
#[derive(Debug, Clone, PartialEq)]
pub struct WilsonCoefficients<T: Transition> {
    /// Ordered SM-like coefficients (c1..c10 at indices 0..=9).
    pub sm_like: [Complex64; SM_LIKE_SLOTS],
    /// Chirality-flipped (primed) partners, parallel to `sm_like`.
    pub primed: [Complex64; SM_LIKE_SLOTS],
    /// Scalar and tensor auxiliary coefficients (cS, cS', cP, cP', cT, cT5).
    pub scalar_tensor: [Complex64; 6],
    /// Strong coupling at the coefficient scale.
    pub alpha_s: f64,
    _transition: PhantomData<T>,
}

impl<T: Transition> Default for WilsonCoefficients<T> {
    fn default() -> Self {
        Self {
            sm_like: [Complex64::new(0.0, 0.0); SM_LIKE_SLOTS],
            primed: [Complex64::new(0.0, 0.0); SM_LIKE_SLOTS],
            scalar_tensor: [Complex64::new(0.0, 0.0); 6],
            alpha_s: 0.0,
            _transition: PhantomData,
        }
    }
}

impl<T: Transition> WilsonCoefficients<T> {
    /// Returns the sector name of the transition.
    pub fn sector() -> &'static str {
        T::NAME
    }

    /// c_i for i in 1..=10.
    pub fn c(&self, i: usize) -> Complex64 {
        debug_assert!((1..=10).contains(&i));
        self.sm_like[i - 1]
    }

    /// Primed partner of c_i.
    pub fn c_prime(&self, i: usize) -> Complex64 {
        debug_assert!((1..=10).contains(&i));
        self.primed[i - 1]
    }

    /// cS
    pub fn c_s(&self) -> Complex64 {
        self.scalar_tensor[st::S]
    }

    /// cS'
    pub fn c_s_prime(&self) -> Complex64 {
        self.scalar_tensor[st::S_PRIME]
    }

    /// cP
    pub fn c_p(&self) -> Complex64 {
        self.scalar_tensor[st::P]
    }

    /// cP'
    pub fn c_p_prime(&self) -> Complex64 {
        self.scalar_tensor[st::P_PRIME]
    }

    /// cT
    pub fn c_t(&self) -> Complex64 {
        self.scalar_tensor[st::T]
    }

    /// cT5
    pub fn c_t5(&self) -> Complex64 {
        self.scalar_tensor[st::T5]
    }

    /// Element-wise complex conjugation of all coefficient arrays.
    pub fn cp_conjugate(&self) -> Self {
        let mut out = self.clone();
        for value in out.sm_like.iter_mut() {
            *value = value.conj();
        }
        for value in out.primed.iter_mut() {
            *value = value.conj();
        }
        for value in out.scalar_tensor.iter_mut() {
            *value = value.conj();
        }
        out
    }
}

impl WilsonCoefficients<ChargedCurrent> {
    /// Left-handed vector coupling cVL.
    pub fn c_v_l(&self) -> Complex64 {
        self.sm_like[0]
    }

    /// Right-handed vector coupling cVR.
    pub fn c_v_r(&self) -> Complex64 {
        self.primed[0]
    }

    /// Left scalar coupling cSL.
    pub fn c_s_l(&self) -> Complex64 {
        self.scalar_tensor[st::S]
    }

    /// Right scalar coupling cSR.
    pub fn c_s_r(&self) -> Complex64 {
        self.scalar_tensor[st::S_PRIME]
    }
}
