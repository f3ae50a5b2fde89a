//! QCD running of the strong coupling and quark masses.
//!
//! The coupling obeys the four-loop MSbar renormalization group equation;
//! masses run at two loops. Evolution uses fixed-step RK4 in t = ln mu^2,
//! which is deterministic for identical inputs.

use heft_num::pow2;

const ZETA3: f64 = 1.202_056_903_159_594_3;

/// Four-loop MSbar beta-function coefficients for `nf` active flavors.
pub fn beta_coefficients(nf: u32) -> [f64; 4] {
    let nf = nf as f64;
    let beta0 = 11.0 - 2.0 / 3.0 * nf;
    let beta1 = 102.0 - 38.0 / 3.0 * nf;
    let beta2 = 2857.0 / 2.0 - 5033.0 / 18.0 * nf + 325.0 / 54.0 * nf * nf;
    let beta3 = (149753.0 / 6.0 + 3564.0 * ZETA3)
        - (1078361.0 / 162.0 + 6508.0 / 27.0 * ZETA3) * nf
        + (50065.0 / 162.0 + 6472.0 / 81.0 * ZETA3) * nf * nf
        + 1093.0 / 729.0 * nf * nf * nf;
    [beta0, beta1, beta2, beta3]
}

/// Two-loop mass anomalous-dimension coefficients for `nf` active flavors.
pub fn gamma_m_coefficients(nf: u32) -> [f64; 2] {
    let nf = nf as f64;
    [8.0, 404.0 / 3.0 - 40.0 / 9.0 * nf]
}

fn alpha_s_derivative(alpha: f64, beta: &[f64; 4]) -> f64 {
    let a = alpha / (4.0 * std::f64::consts::PI);
    -alpha * a * (beta[0] + a * (beta[1] + a * (beta[2] + a * beta[3])))
}

fn mass_log_derivative(alpha: f64, gamma: &[f64; 2]) -> f64 {
    let a = alpha / (4.0 * std::f64::consts::PI);
    -0.5 * a * (gamma[0] + a * gamma[1])
}

const EVOLUTION_STEPS: usize = 256;

/// Evolves alpha_s from `mu_0` to `mu` at fixed `nf`.
pub fn alpha_s_evolve(alpha_0: f64, mu_0: f64, mu: f64, nf: u32) -> f64 {
    let beta = beta_coefficients(nf);
    let t0 = pow2(mu_0).ln();
    let t1 = pow2(mu).ln();
    let h = (t1 - t0) / EVOLUTION_STEPS as f64;
    let mut alpha = alpha_0;
    for _ in 0..EVOLUTION_STEPS {
        let k1 = alpha_s_derivative(alpha, &beta);
        let k2 = alpha_s_derivative(alpha + 0.5 * h * k1, &beta);
        let k3 = alpha_s_derivative(alpha + 0.5 * h * k2, &beta);
        let k4 = alpha_s_derivative(alpha + h * k3, &beta);
        alpha += h / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4);
    }
    alpha
}

/// Evolves an MSbar mass alongside the coupling from `mu_0` to `mu` at fixed `nf`.
pub fn msbar_mass_evolve(m_0: f64, alpha_0: f64, mu_0: f64, mu: f64, nf: u32) -> f64 {
    let beta = beta_coefficients(nf);
    let gamma = gamma_m_coefficients(nf);
    let t0 = pow2(mu_0).ln();
    let t1 = pow2(mu).ln();
    let h = (t1 - t0) / EVOLUTION_STEPS as f64;
    let mut alpha = alpha_0;
    let mut log_m = m_0.ln();
    for _ in 0..EVOLUTION_STEPS {
        // coupled RK4 for (alpha, ln m)
        let ka1 = alpha_s_derivative(alpha, &beta);
        let km1 = mass_log_derivative(alpha, &gamma);
        let ka2 = alpha_s_derivative(alpha + 0.5 * h * ka1, &beta);
        let km2 = mass_log_derivative(alpha + 0.5 * h * ka1, &gamma);
        let ka3 = alpha_s_derivative(alpha + 0.5 * h * ka2, &beta);
        let km3 = mass_log_derivative(alpha + 0.5 * h * ka2, &gamma);
        let ka4 = alpha_s_derivative(alpha + h * ka3, &beta);
        let km4 = mass_log_derivative(alpha + h * ka3, &gamma);
        alpha += h / 6.0 * (ka1 + 2.0 * ka2 + 2.0 * ka3 + ka4);
        log_m += h / 6.0 * (km1 + 2.0 * km2 + 2.0 * km3 + km4);
    }
    log_m.exp()
}

/// One-loop MSbar-to-pole conversion.
pub fn pole_from_msbar(m_msbar: f64, alpha_at_m: f64) -> f64 {
    m_msbar * (1.0 + 4.0 / 3.0 * alpha_at_m / std::f64::consts::PI)
}
