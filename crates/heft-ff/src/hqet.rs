//! Heavy-to-heavy form factors from the HQET expansion.
//!
//! Form factors are built from a tower of Isgur-Wise functions - the leading
//! xi(w), the subleading chi_2(w), chi_3(w), eta(w), and sub-subleading
//! ell_i(w) - each a low-order polynomial in the scaled conformal variable
//! z*(w), multiplied by perturbative matching coefficients C_Gamma(w, z)
//! that involve logarithms and the dilogarithmic function Omega(w, z).
//! Omega and r(w) have removable singularities at zero recoil; the regular
//! expansion takes over for |w - 1| < 1e-5.

use heft_core::{ErrorInfo, HeftError, Options, ParameterId, ParameterUser, Parameters, UsedParameter};
use heft_num::{dilog, lambda, pow2};

use crate::traits::{PToPFormFactors, PToVFormFactors};

const W_REGULAR: f64 = 1e-5;
const MAX_ORDER: usize = 4;

type Poly = [f64; MAX_ORDER + 1];

fn poly_mul(a: &Poly, b: &Poly, order: usize) -> Poly {
    let mut out = [0.0; MAX_ORDER + 1];
    for i in 0..=order {
        for j in 0..=(order - i) {
            out[i + j] += a[i] * b[j];
        }
    }
    out
}

fn poly_axpy(target: &mut Poly, scale: f64, term: &Poly, order: usize) {
    for k in 0..=order {
        target[k] += scale * term[k];
    }
}

fn poly_eval(p: &Poly, x: f64, order: usize) -> f64 {
    let mut value = 0.0;
    for k in (0..=order).rev() {
        value = value * x + p[k];
    }
    value
}

fn order_option(options: &Options, key: &str, default: u32, max: u32) -> Result<usize, HeftError> {
    let value = options.integer(key, default)?;
    if value > max {
        return Err(HeftError::Options(
            ErrorInfo::new(
                "invalid-option-value",
                format!("invalid value '{value}' for option '{key}'"),
            )
            .with_context("permitted", format!("0..={max}")),
        ));
    }
    Ok(value as usize)
}

/// Shared Isgur-Wise tower and matching-coefficient machinery.
#[derive(Debug)]
struct HqetCore {
    user: ParameterUser,
    xi_p: UsedParameter,
    xi_pp: UsedParameter,
    xi_ppp: UsedParameter,
    chi2_one: UsedParameter,
    chi2_p: UsedParameter,
    chi2_pp: UsedParameter,
    chi3_p: UsedParameter,
    chi3_pp: UsedParameter,
    eta_one: UsedParameter,
    eta_p: UsedParameter,
    eta_pp: UsedParameter,
    l_one: [UsedParameter; 6],
    l_p: [UsedParameter; 6],
    a: UsedParameter,
    lambda_bar: UsedParameter,
    m_b_pole: UsedParameter,
    m_c_pole: UsedParameter,
    alpha_s: UsedParameter,
    order_lp: usize,
    order_slp: usize,
    order_sslp: usize,
}

impl HqetCore {
    fn new(parameters: &Parameters, options: &Options) -> Result<Self, HeftError> {
        let user = ParameterUser::new();
        let l_one = [
            user.bind(parameters, "B(*)->D(*)::l_1(1)@HQET")?,
            user.bind(parameters, "B(*)->D(*)::l_2(1)@HQET")?,
            user.bind(parameters, "B(*)->D(*)::l_3(1)@HQET")?,
            user.bind(parameters, "B(*)->D(*)::l_4(1)@HQET")?,
            user.bind(parameters, "B(*)->D(*)::l_5(1)@HQET")?,
            user.bind(parameters, "B(*)->D(*)::l_6(1)@HQET")?,
        ];
        let l_p = [
            user.bind_or_declare(parameters, "B(*)->D(*)::l_1'(1)@HQET", 0.0),
            user.bind_or_declare(parameters, "B(*)->D(*)::l_2'(1)@HQET", 0.0),
            user.bind_or_declare(parameters, "B(*)->D(*)::l_3'(1)@HQET", 0.0),
            user.bind_or_declare(parameters, "B(*)->D(*)::l_4'(1)@HQET", 0.0),
            user.bind_or_declare(parameters, "B(*)->D(*)::l_5'(1)@HQET", 0.0),
            user.bind_or_declare(parameters, "B(*)->D(*)::l_6'(1)@HQET", 0.0),
        ];
        Ok(Self {
            xi_p: user.bind(parameters, "B(*)->D(*)::xi'(1)@HQET")?,
            xi_pp: user.bind(parameters, "B(*)->D(*)::xi''(1)@HQET")?,
            xi_ppp: user.bind(parameters, "B(*)->D(*)::xi'''(1)@HQET")?,
            chi2_one: user.bind(parameters, "B(*)->D(*)::chi_2(1)@HQET")?,
            chi2_p: user.bind(parameters, "B(*)->D(*)::chi_2'(1)@HQET")?,
            chi2_pp: user.bind_or_declare(parameters, "B(*)->D(*)::chi_2''(1)@HQET", 0.0),
            chi3_p: user.bind(parameters, "B(*)->D(*)::chi_3'(1)@HQET")?,
            chi3_pp: user.bind_or_declare(parameters, "B(*)->D(*)::chi_3''(1)@HQET", 0.0),
            eta_one: user.bind(parameters, "B(*)->D(*)::eta(1)@HQET")?,
            eta_p: user.bind(parameters, "B(*)->D(*)::eta'(1)@HQET")?,
            eta_pp: user.bind_or_declare(parameters, "B(*)->D(*)::eta''(1)@HQET", 0.0),
            l_one,
            l_p,
            a: user.bind(parameters, "B(*)->D(*)::a@HQET")?,
            lambda_bar: user.bind_or_declare(parameters, "HQET::lambda_bar", 0.50),
            m_b_pole: user.bind_or_declare(parameters, "HQET::m_b_pole", 4.71),
            m_c_pole: user.bind_or_declare(parameters, "HQET::m_c_pole", 1.35),
            alpha_s: user.bind_or_declare(parameters, "HQET::alpha_s(matching)", 0.26),
            order_lp: order_option(options, "z-order-lp", 3, 4)?,
            order_slp: order_option(options, "z-order-slp", 1, 2)?,
            order_sslp: order_option(options, "z-order-sslp", 1, 1)?,
            user,
        })
    }

    fn eps_c(&self) -> f64 {
        self.lambda_bar.value() / (2.0 * self.m_c_pole.value())
    }

    fn eps_b(&self) -> f64 {
        self.lambda_bar.value() / (2.0 * self.m_b_pole.value())
    }

    fn z_mass_ratio(&self) -> f64 {
        self.m_c_pole.value() / self.m_b_pole.value()
    }

    /// Scaled conformal variable z*(w).
    fn zs(&self, w: f64) -> f64 {
        let a = self.a.value();
        let s = (w + 1.0).sqrt();
        let sa = std::f64::consts::SQRT_2 * a;
        (s - sa) / (s + sa)
    }

    /// Expansion variable x = z*(w) - z*(1).
    fn x_of(&self, w: f64) -> f64 {
        let a = self.a.value();
        self.zs(w) - (1.0 - a) / (1.0 + a)
    }

    /// Series coefficients of (w - 1) in powers of x.
    fn w_minus_one_series(&self) -> Poly {
        let a = self.a.value();
        let ap1 = 1.0 + a;
        [
            0.0,
            2.0 * pow2(ap1) / a,
            pow2(ap1) * ap1 * (3.0 + a) / (2.0 * pow2(a)),
            pow2(pow2(ap1)) * (2.0 + a) / (2.0 * pow2(a) * a),
            pow2(pow2(ap1)) * ap1 * (3.0 * a + 5.0) / (8.0 * pow2(pow2(a))),
        ]
    }

    /// Builds the truncated series of c0 + c1 (w-1) + c2 (w-1)^2/2 + c3 (w-1)^3/6.
    fn taylor_in_x(&self, c: [f64; 4], order: usize) -> Poly {
        let w1 = self.w_minus_one_series();
        let mut out = [0.0; MAX_ORDER + 1];
        out[0] = c[0];
        poly_axpy(&mut out, c[1], &w1, order);
        if order >= 2 {
            let w2 = poly_mul(&w1, &w1, order);
            poly_axpy(&mut out, c[2] / 2.0, &w2, order);
            if order >= 3 {
                let w3 = poly_mul(&w2, &w1, order);
                poly_axpy(&mut out, c[3] / 6.0, &w3, order);
            }
        }
        out
    }

    /// Leading Isgur-Wise function xi(w), unit normalized at zero recoil.
    fn xi(&self, w: f64) -> f64 {
        let p = self.taylor_in_x(
            [1.0, self.xi_p.value(), self.xi_pp.value(), self.xi_ppp.value()],
            self.order_lp,
        );
        poly_eval(&p, self.x_of(w), self.order_lp)
    }

    fn chi2(&self, w: f64) -> f64 {
        let p = self.taylor_in_x(
            [self.chi2_one.value(), self.chi2_p.value(), self.chi2_pp.value(), 0.0],
            self.order_slp,
        );
        poly_eval(&p, self.x_of(w), self.order_slp)
    }

    /// chi_3(w); chi_3(1) = 0 is enforced by the parameterization.
    fn chi3(&self, w: f64) -> f64 {
        let p = self.taylor_in_x(
            [0.0, self.chi3_p.value(), self.chi3_pp.value(), 0.0],
            self.order_slp,
        );
        poly_eval(&p, self.x_of(w), self.order_slp)
    }

    fn eta(&self, w: f64) -> f64 {
        let p = self.taylor_in_x(
            [self.eta_one.value(), self.eta_p.value(), self.eta_pp.value(), 0.0],
            self.order_slp,
        );
        poly_eval(&p, self.x_of(w), self.order_slp)
    }

    fn l_i(&self, i: usize, w: f64) -> f64 {
        let p = self.taylor_in_x(
            [self.l_one[i].value(), self.l_p[i].value(), 0.0, 0.0],
            self.order_sslp,
        );
        poly_eval(&p, self.x_of(w), self.order_sslp)
    }

    // subleading combinations of Isgur-Wise functions
    fn l1(&self, w: f64) -> f64 {
        -4.0 * (w - 1.0) * self.chi2(w) + 12.0 * self.chi3(w)
    }

    fn l2(&self, w: f64) -> f64 {
        -4.0 * self.chi3(w)
    }

    fn l3(&self, w: f64) -> f64 {
        4.0 * self.chi2(w)
    }

    fn l4(&self, w: f64) -> f64 {
        2.0 * self.eta(w) - 1.0
    }

    fn l5(&self, _w: f64) -> f64 {
        -1.0
    }

    fn l6(&self, w: f64) -> f64 {
        -2.0 * (1.0 + self.eta(w)) / (w + 1.0)
    }

    /// r(w) = ln(w + sqrt(w^2 - 1)) / sqrt(w^2 - 1), regular at w = 1.
    fn r(&self, w: f64) -> f64 {
        let eps = w - 1.0;
        if eps.abs() < W_REGULAR {
            return 1.0 - eps / 3.0 + 2.0 * pow2(eps) / 15.0;
        }
        let sq = (pow2(w) - 1.0).sqrt();
        (w + sq).ln() / sq
    }

    /// Omega(w, z) built from dilogarithms, regular at w = 1.
    fn omega(&self, w: f64) -> f64 {
        let z = self.z_mass_ratio();
        if (w - 1.0).abs() < W_REGULAR {
            return (z + 1.0) / (z - 1.0) * z.ln() - 1.0;
        }
        let sq = (pow2(w) - 1.0).sqrt();
        let wp = w + sq;
        let wm = w - sq;
        let bracket = 2.0 * dilog(1.0 - wm * z) - 2.0 * dilog(1.0 - wp * z)
            + dilog(1.0 - pow2(wp))
            - dilog(1.0 - pow2(wm));
        w / (2.0 * sq) * bracket - w * self.r(w) * z.ln() + 1.0
    }

    // matching coefficients; a_s = alpha_s / pi at the matching scale
    fn a_s(&self) -> f64 {
        self.alpha_s.value() / std::f64::consts::PI
    }

    fn c_v1(&self, w: f64) -> f64 {
        1.0 + self.a_s() * (self.omega(w) - 1.0 - 4.0 / 3.0 * (w * self.r(w) - 1.0))
    }

    fn c_v2(&self, w: f64) -> f64 {
        let z = self.z_mass_ratio();
        -2.0 / 3.0 * self.a_s() * z * (1.0 - self.r(w)) / (1.0 - z)
    }

    fn c_v3(&self, w: f64) -> f64 {
        let z = self.z_mass_ratio();
        2.0 / 3.0 * self.a_s() * pow2(z) * (1.0 - self.r(w)) / (1.0 - z)
    }

    fn c_a1(&self, w: f64) -> f64 {
        1.0 + self.a_s()
            * (self.omega(w) - 5.0 / 3.0
                - 4.0 / 3.0 * (w * self.r(w) - 1.0) * (w - 1.0) / (w + 1.0))
    }

    fn c_a2(&self, w: f64) -> f64 {
        self.c_v2(w)
    }

    fn c_a3(&self, w: f64) -> f64 {
        self.c_v3(w)
    }

    fn c_t1(&self, w: f64) -> f64 {
        1.0 + self.a_s() * (self.omega(w) - 3.0 - 4.0 / 3.0 * (w * self.r(w) - 1.0))
    }

    // next-to-leading power amplitudes

    fn h_p(&self, w: f64) -> f64 {
        self.xi(w)
            * (self.c_v1(w)
                + (w + 1.0) / 2.0 * (self.c_v2(w) + self.c_v3(w))
                + (self.eps_c() + self.eps_b()) * self.l1(w)
                + pow2(self.eps_c()) * self.l_i(0, w))
    }

    fn h_m(&self, w: f64) -> f64 {
        self.xi(w)
            * ((w + 1.0) / 2.0 * (self.c_v2(w) - self.c_v3(w))
                + (self.eps_c() - self.eps_b()) * self.l4(w)
                + pow2(self.eps_c()) * self.l_i(3, w))
    }

    fn h_t(&self, w: f64) -> f64 {
        self.xi(w)
            * (self.c_t1(w)
                + (self.eps_c() + self.eps_b()) * self.l1(w)
                + pow2(self.eps_c()) * self.l_i(0, w))
    }

    fn h_v(&self, w: f64) -> f64 {
        self.xi(w)
            * (self.c_v1(w)
                + self.eps_c() * (self.l2(w) - self.l5(w))
                + self.eps_b() * (self.l1(w) - self.l4(w))
                + pow2(self.eps_c()) * (self.l_i(1, w) - self.l_i(4, w)))
    }

    fn h_a1(&self, w: f64) -> f64 {
        let ratio = (w - 1.0) / (w + 1.0);
        self.xi(w)
            * (self.c_a1(w)
                + self.eps_c() * (self.l2(w) - self.l5(w) * ratio)
                + self.eps_b() * (self.l1(w) - self.l4(w) * ratio)
                + pow2(self.eps_c()) * self.l_i(1, w))
    }

    fn h_a2(&self, w: f64) -> f64 {
        self.xi(w)
            * (self.c_a2(w)
                + self.eps_c() * (self.l3(w) + self.l6(w))
                + pow2(self.eps_c()) * self.l_i(2, w))
    }

    fn h_a3(&self, w: f64) -> f64 {
        self.xi(w)
            * (self.c_a1(w) + self.c_a3(w)
                + self.eps_c() * (self.l2(w) - self.l3(w) + self.l6(w) - self.l5(w))
                + self.eps_b() * (self.l1(w) - self.l4(w))
                + pow2(self.eps_c()) * (self.l_i(1, w) - self.l_i(2, w)))
    }

    fn h_t1(&self, w: f64) -> f64 {
        self.xi(w)
            * (self.c_t1(w)
                + self.eps_c() * self.l2(w)
                + self.eps_b() * self.l1(w)
                + pow2(self.eps_c()) * self.l_i(1, w))
    }
}

/// HQET form factors for B -> D.
#[derive(Debug)]
pub struct HqetBToD {
    core: HqetCore,
    m_b: UsedParameter,
    m_d: UsedParameter,
}

impl HqetBToD {
    /// Binds the parameterization to a parameter set.
    pub fn new(parameters: &Parameters, options: &Options) -> Result<Self, HeftError> {
        let core = HqetCore::new(parameters, options)?;
        Ok(Self {
            m_b: core.user.bind(parameters, "mass::B_d")?,
            m_d: core.user.bind(parameters, "mass::D^+")?,
            core,
        })
    }

    /// Recoil variable w(q^2).
    pub fn w_of(&self, q2: f64) -> f64 {
        let m_b = self.m_b.value();
        let m_d = self.m_d.value();
        (pow2(m_b) + pow2(m_d) - q2) / (2.0 * m_b * m_d)
    }

    /// h_+(w)
    pub fn h_p(&self, w: f64) -> f64 {
        self.core.h_p(w)
    }

    /// h_-(w)
    pub fn h_m(&self, w: f64) -> f64 {
        self.core.h_m(w)
    }
}

impl PToPFormFactors for HqetBToD {
    fn f_p(&self, q2: f64) -> f64 {
        let w = self.w_of(q2);
        let r = self.m_d.value() / self.m_b.value();
        ((1.0 + r) * self.core.h_p(w) - (1.0 - r) * self.core.h_m(w)) / (2.0 * r.sqrt())
    }

    fn f_0(&self, q2: f64) -> f64 {
        let w = self.w_of(q2);
        let r = self.m_d.value() / self.m_b.value();
        r.sqrt()
            * ((w + 1.0) / (1.0 + r) * self.core.h_p(w)
                - (w - 1.0) / (1.0 - r) * self.core.h_m(w))
    }

    fn f_t(&self, q2: f64) -> f64 {
        let w = self.w_of(q2);
        let r = self.m_d.value() / self.m_b.value();
        (1.0 + r) / (2.0 * r.sqrt()) * self.core.h_t(w)
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.core.user.used_ids()
    }
}

/// HQET form factors for B -> D^*.
#[derive(Debug)]
pub struct HqetBToDstar {
    core: HqetCore,
    m_b: UsedParameter,
    m_dstar: UsedParameter,
}

impl HqetBToDstar {
    /// Binds the parameterization to a parameter set.
    pub fn new(parameters: &Parameters, options: &Options) -> Result<Self, HeftError> {
        let core = HqetCore::new(parameters, options)?;
        Ok(Self {
            m_b: core.user.bind(parameters, "mass::B_d")?,
            m_dstar: core.user.bind(parameters, "mass::D_d^*")?,
            core,
        })
    }

    /// Recoil variable w(q^2).
    pub fn w_of(&self, q2: f64) -> f64 {
        let m_b = self.m_b.value();
        let m_v = self.m_dstar.value();
        (pow2(m_b) + pow2(m_v) - q2) / (2.0 * m_b * m_v)
    }

    /// h_A1(w)
    pub fn h_a1(&self, w: f64) -> f64 {
        self.core.h_a1(w)
    }

    /// h_V(w)
    pub fn h_v(&self, w: f64) -> f64 {
        self.core.h_v(w)
    }

    /// h_A2(w)
    pub fn h_a2(&self, w: f64) -> f64 {
        self.core.h_a2(w)
    }

    /// h_A3(w)
    pub fn h_a3(&self, w: f64) -> f64 {
        self.core.h_a3(w)
    }

    fn masses(&self) -> (f64, f64) {
        (self.m_b.value(), self.m_dstar.value())
    }
}

impl PToVFormFactors for HqetBToDstar {
    fn v(&self, q2: f64) -> f64 {
        let (m_b, m_v) = self.masses();
        let w = self.w_of(q2);
        (m_b + m_v) / (2.0 * (m_b * m_v).sqrt()) * self.core.h_v(w)
    }

    fn a_0(&self, q2: f64) -> f64 {
        let (m_b, m_v) = self.masses();
        let w = self.w_of(q2);
        let a_3 = ((m_b + m_v) * self.a_1(q2) - (m_b - m_v) * self.a_2(q2)) / (2.0 * m_v);
        let s = (m_b * m_v).sqrt();
        a_3 - q2 * s / (4.0 * m_v)
            * (self.core.h_a2(w) / pow2(m_b) - self.core.h_a3(w) / (m_b * m_v))
    }

    fn a_1(&self, q2: f64) -> f64 {
        let (m_b, m_v) = self.masses();
        let w = self.w_of(q2);
        (m_b * m_v).sqrt() * (w + 1.0) / (m_b + m_v) * self.core.h_a1(w)
    }

    fn a_2(&self, q2: f64) -> f64 {
        let (m_b, m_v) = self.masses();
        let w = self.w_of(q2);
        let s = (m_b * m_v).sqrt();
        (m_b + m_v) * s / 2.0
            * (self.core.h_a2(w) / pow2(m_b) + self.core.h_a3(w) / (m_b * m_v))
    }

    fn a_12(&self, q2: f64) -> f64 {
        let (m_b, m_v) = self.masses();
        let lam = lambda(pow2(m_b), pow2(m_v), q2);
        (pow2(m_b + m_v) * (pow2(m_b) - pow2(m_v) - q2) * self.a_1(q2) - lam * self.a_2(q2))
            / (16.0 * m_b * pow2(m_v) * (m_b + m_v))
    }

    fn t_1(&self, q2: f64) -> f64 {
        let (m_b, m_v) = self.masses();
        let w = self.w_of(q2);
        (m_b + m_v) / (2.0 * (m_b * m_v).sqrt()) * self.core.h_t1(w)
    }

    fn t_2(&self, q2: f64) -> f64 {
        let (m_b, m_v) = self.masses();
        let w = self.w_of(q2);
        (m_b * m_v).sqrt() * (w + 1.0) / (m_b + m_v) * self.core.h_t1(w)
    }

    fn t_3(&self, _q2: f64) -> f64 {
        0.0
    }

    fn t_23(&self, q2: f64) -> f64 {
        let (m_b, m_v) = self.masses();
        (pow2(m_b) - pow2(m_v)) * (pow2(m_b) + 3.0 * pow2(m_v) - q2) * self.t_2(q2)
            / (8.0 * m_b * pow2(m_v) * (m_b - m_v))
    }

    fn used_parameter_ids(&self) -> Vec<ParameterId> {
        self.core.user.used_ids()
    }
}
