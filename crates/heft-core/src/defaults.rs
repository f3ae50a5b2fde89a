//! Built-in default parameter table.
//!
//! Values follow PDG conventions: masses in GeV, q^2 in GeV^2, lifetimes in
//! seconds. Wilson coefficient defaults are quoted at mu_b = 4.2 GeV.

/// (qualified name, LaTeX label, default, min, max)
pub(crate) const TABLE: &[(&str, &str, f64, f64, f64)] = &[
    // fundamental couplings and conversion constants
    ("QCD::alpha_s(MZ)", r"\alpha_s(M_Z)", 0.1176, 0.1, 0.13),
    ("QCD::mu_b", r"\mu_b", 4.2, 2.4, 9.6),
    ("QED::alpha_e(m_b)", r"\alpha_e(m_b)", 0.0075187970, 0.0070, 0.0080),
    ("WET::G_Fermi", "G_F", 1.1663787e-5, 1.16e-5, 1.17e-5),
    ("QM::hbar", r"\hbar", 6.58211928e-25, 6.58e-25, 6.59e-25),
    // CKM Wolfenstein parameters
    ("CKM::lambda", r"\lambda", 0.22535, 0.22, 0.23),
    ("CKM::A", "A", 0.807, 0.75, 0.85),
    ("CKM::rhobar", r"\bar\rho", 0.132, 0.0, 0.3),
    ("CKM::etabar", r"\bar\eta", 0.340, 0.2, 0.5),
    // lepton masses
    ("mass::e", "m_e", 5.10999e-4, 5.1e-4, 5.2e-4),
    ("mass::mu", r"m_\mu", 0.1056584, 0.105, 0.106),
    ("mass::tau", r"m_\tau", 1.77682, 1.776, 1.777),
    // quark masses
    ("mass::c", r"m_c(m_c)", 1.275, 1.18, 1.34),
    ("mass::b(MSbar)", r"m_b(m_b)", 4.18, 4.0, 4.4),
    ("mass::t(pole)", "m_t", 173.3, 168.0, 178.0),
    ("mass::Z", "M_Z", 91.1876, 91.18, 91.20),
    // meson and baryon masses
    ("mass::pi^+", r"m_{\pi^+}", 0.13957, 0.1395, 0.1396),
    ("mass::pi^0", r"m_{\pi^0}", 0.1349768, 0.1349, 0.1350),
    ("mass::K_d", "m_{K^0}", 0.497614, 0.4975, 0.4977),
    ("mass::K_u", "m_{K^+}", 0.493677, 0.4936, 0.4938),
    ("mass::K^*_d", "m_{K^{*0}}", 0.89594, 0.895, 0.897),
    ("mass::K^*_u", "m_{K^{*+}}", 0.89166, 0.891, 0.892),
    ("mass::phi", r"m_\phi", 1.019461, 1.0193, 1.0196),
    ("mass::D^0", "m_{D^0}", 1.86484, 1.8646, 1.8650),
    ("mass::D^+", "m_{D^+}", 1.86965, 1.8694, 1.8699),
    ("mass::D_u^*", "m_{D^{*0}}", 2.00685, 2.0066, 2.0071),
    ("mass::D_d^*", "m_{D^{*+}}", 2.01026, 2.0100, 2.0105),
    ("mass::B_d", "m_{B_d}", 5.27958, 5.2790, 5.2801),
    ("mass::B_u", "m_{B_u}", 5.27925, 5.2787, 5.2798),
    ("mass::B_s", "m_{B_s}", 5.36677, 5.3663, 5.3672),
    ("mass::B_d^*", "m_{B^*}", 5.32465, 5.3240, 5.3253),
    ("mass::J/psi", r"m_{J/\psi}", 3.096900, 3.0967, 3.0971),
    ("mass::psi(2S)", r"m_{\psi(2S)}", 3.686097, 3.6859, 3.6863),
    ("mass::Lambda_b", r"m_{\Lambda_b}", 5.61960, 5.6185, 5.6207),
    ("mass::Lambda", r"m_\Lambda", 1.115683, 1.1156, 1.1158),
    // lifetimes
    ("life_time::B_d", r"\tau_{B_d}", 1.519e-12, 1.50e-12, 1.53e-12),
    ("life_time::B_u", r"\tau_{B_u}", 1.638e-12, 1.62e-12, 1.66e-12),
    ("life_time::B_s", r"\tau_{B_s}", 1.516e-12, 1.49e-12, 1.54e-12),
    ("life_time::Lambda_b", r"\tau_{\Lambda_b}", 1.471e-12, 1.45e-12, 1.49e-12),
    // decay constants
    ("decay-constant::B_d", "f_{B_d}", 0.1905, 0.17, 0.21),
    ("decay-constant::B_s", "f_{B_s}", 0.2277, 0.21, 0.25),
    ("decay-constant::K_d", "f_K", 0.1561, 0.15, 0.16),
    ("decay-constant::pi", "f_\\pi", 0.1302, 0.129, 0.131),
    // b->s Wilson coefficients at mu_b (SM-like sector)
    ("b->s::c1", "c_1", -0.29063621, -1.0, 1.0),
    ("b->s::c2", "c_2", 1.01029623, 0.0, 2.0),
    ("b->s::c3", "c_3", -0.00616220, -0.1, 0.1),
    ("b->s::c4", "c_4", -0.08730376, -0.5, 0.5),
    ("b->s::c5", "c_5", 0.00042854, -0.1, 0.1),
    ("b->s::c6", "c_6", 0.00115807, -0.1, 0.1),
    ("b->s::Re{c7}", r"{\rm Re}\,c_7", -0.33726473, -1.0, 1.0),
    ("b->s::Im{c7}", r"{\rm Im}\,c_7", 0.0, -1.0, 1.0),
    ("b->s::c8", "c_8", -0.18288898, -1.0, 1.0),
    ("b->s::Re{c9}", r"{\rm Re}\,c_9", 4.27342842, -15.0, 15.0),
    ("b->s::Im{c9}", r"{\rm Im}\,c_9", 0.0, -15.0, 15.0),
    ("b->s::Re{c10}", r"{\rm Re}\,c_{10}", -4.16611761, -15.0, 15.0),
    ("b->s::Im{c10}", r"{\rm Im}\,c_{10}", 0.0, -15.0, 15.0),
    // chirality-flipped sector
    ("b->s::Re{c7'}", r"{\rm Re}\,c_7'", 0.0, -1.0, 1.0),
    ("b->s::Im{c7'}", r"{\rm Im}\,c_7'", 0.0, -1.0, 1.0),
    ("b->s::Re{c9'}", r"{\rm Re}\,c_9'", 0.0, -15.0, 15.0),
    ("b->s::Im{c9'}", r"{\rm Im}\,c_9'", 0.0, -15.0, 15.0),
    ("b->s::Re{c10'}", r"{\rm Re}\,c_{10}'", 0.0, -15.0, 15.0),
    ("b->s::Im{c10'}", r"{\rm Im}\,c_{10}'", 0.0, -15.0, 15.0),
    // scalar and tensor sector
    ("b->s::Re{cS}", r"{\rm Re}\,c_S", 0.0, -5.0, 5.0),
    ("b->s::Im{cS}", r"{\rm Im}\,c_S", 0.0, -5.0, 5.0),
    ("b->s::Re{cS'}", r"{\rm Re}\,c_S'", 0.0, -5.0, 5.0),
    ("b->s::Im{cS'}", r"{\rm Im}\,c_S'", 0.0, -5.0, 5.0),
    ("b->s::Re{cP}", r"{\rm Re}\,c_P", 0.0, -5.0, 5.0),
    ("b->s::Im{cP}", r"{\rm Im}\,c_P", 0.0, -5.0, 5.0),
    ("b->s::Re{cP'}", r"{\rm Re}\,c_P'", 0.0, -5.0, 5.0),
    ("b->s::Im{cP'}", r"{\rm Im}\,c_P'", 0.0, -5.0, 5.0),
    ("b->s::Re{cT}", r"{\rm Re}\,c_T", 0.0, -5.0, 5.0),
    ("b->s::Im{cT}", r"{\rm Im}\,c_T", 0.0, -5.0, 5.0),
    ("b->s::Re{cT5}", r"{\rm Re}\,c_{T5}", 0.0, -5.0, 5.0),
    ("b->s::Im{cT5}", r"{\rm Im}\,c_{T5}", 0.0, -5.0, 5.0),
    // b->c l nu charged-current coefficients
    ("b->clnu::Re{cVL}", r"{\rm Re}\,c_{V_L}", 1.0, -5.0, 5.0),
    ("b->clnu::Im{cVL}", r"{\rm Im}\,c_{V_L}", 0.0, -5.0, 5.0),
    ("b->clnu::Re{cVR}", r"{\rm Re}\,c_{V_R}", 0.0, -5.0, 5.0),
    ("b->clnu::Im{cVR}", r"{\rm Im}\,c_{V_R}", 0.0, -5.0, 5.0),
    ("b->clnu::Re{cSL}", r"{\rm Re}\,c_{S_L}", 0.0, -5.0, 5.0),
    ("b->clnu::Im{cSL}", r"{\rm Im}\,c_{S_L}", 0.0, -5.0, 5.0),
    ("b->clnu::Re{cSR}", r"{\rm Re}\,c_{S_R}", 0.0, -5.0, 5.0),
    ("b->clnu::Im{cSR}", r"{\rm Im}\,c_{S_R}", 0.0, -5.0, 5.0),
    ("b->clnu::Re{cT}", r"{\rm Re}\,c_T", 0.0, -5.0, 5.0),
    ("b->clnu::Im{cT}", r"{\rm Im}\,c_T", 0.0, -5.0, 5.0),
    // B->K form factors, BZ2004v2 parameterization
    ("B->K::r1_p@BZ2004v2", "r_1^+", 0.162, 0.0, 0.5),
    ("B->K::r2_p@BZ2004v2", "r_2^+", 0.173, 0.0, 0.5),
    ("B->K::m_fit^2@BZ2004v2", "m_{fit}^2", 31.575, 20.0, 50.0),
    ("B->K::r2_0@BZ2004v2", "r_2^0", 0.330, 0.0, 0.5),
    ("B->K::m_fit^2_0@BZ2004v2", "m_{fit,0}^2", 37.46, 20.0, 60.0),
    ("B->K::r1_t@BZ2004v2", "r_1^T", 0.161, 0.0, 0.5),
    ("B->K::r2_t@BZ2004v2", "r_2^T", 0.198, 0.0, 0.5),
    ("B->K::m_fit^2_t@BZ2004v2", "m_{fit,T}^2", 31.82, 20.0, 50.0),
    // B->K^* form factors, BSZ2015 parameterization
    ("B->K^*::alpha^A0_0@BSZ2015", r"\alpha_0^{A_0}", 0.356, 0.0, 1.0),
    ("B->K^*::alpha^A0_1@BSZ2015", r"\alpha_1^{A_0}", -1.04, -10.0, 10.0),
    ("B->K^*::alpha^A0_2@BSZ2015", r"\alpha_2^{A_0}", 1.12, -10.0, 10.0),
    ("B->K^*::alpha^A1_0@BSZ2015", r"\alpha_0^{A_1}", 0.269, 0.0, 1.0),
    ("B->K^*::alpha^A1_1@BSZ2015", r"\alpha_1^{A_1}", 0.30, -10.0, 10.0),
    ("B->K^*::alpha^A1_2@BSZ2015", r"\alpha_2^{A_1}", 0.11, -10.0, 10.0),
    ("B->K^*::alpha^A12_1@BSZ2015", r"\alpha_1^{A_{12}}", 0.57, -10.0, 10.0),
    ("B->K^*::alpha^A12_2@BSZ2015", r"\alpha_2^{A_{12}}", 0.13, -10.0, 10.0),
    ("B->K^*::alpha^V_0@BSZ2015", r"\alpha_0^{V}", 0.341, 0.0, 1.0),
    ("B->K^*::alpha^V_1@BSZ2015", r"\alpha_1^{V}", -1.04, -10.0, 10.0),
    ("B->K^*::alpha^V_2@BSZ2015", r"\alpha_2^{V}", 2.37, -10.0, 10.0),
    ("B->K^*::alpha^T1_0@BSZ2015", r"\alpha_0^{T_1}", 0.282, 0.0, 1.0),
    ("B->K^*::alpha^T1_1@BSZ2015", r"\alpha_1^{T_1}", -0.89, -10.0, 10.0),
    ("B->K^*::alpha^T1_2@BSZ2015", r"\alpha_2^{T_1}", 1.46, -10.0, 10.0),
    ("B->K^*::alpha^T2_1@BSZ2015", r"\alpha_1^{T_2}", 0.39, -10.0, 10.0),
    ("B->K^*::alpha^T2_2@BSZ2015", r"\alpha_2^{T_2}", 0.82, -10.0, 10.0),
    ("B->K^*::alpha^T23_0@BSZ2015", r"\alpha_0^{T_{23}}", 0.668, 0.0, 2.0),
    ("B->K^*::alpha^T23_1@BSZ2015", r"\alpha_1^{T_{23}}", 1.48, -10.0, 10.0),
    ("B->K^*::alpha^T23_2@BSZ2015", r"\alpha_2^{T_{23}}", 1.92, -10.0, 10.0),
    // B_s->phi form factors, BSZ2015 parameterization
    ("B_s->phi::alpha^A0_0@BSZ2015", r"\alpha_0^{A_0}", 0.389, 0.0, 1.0),
    ("B_s->phi::alpha^A0_1@BSZ2015", r"\alpha_1^{A_0}", -0.86, -10.0, 10.0),
    ("B_s->phi::alpha^A0_2@BSZ2015", r"\alpha_2^{A_0}", 1.32, -10.0, 10.0),
    ("B_s->phi::alpha^A1_0@BSZ2015", r"\alpha_0^{A_1}", 0.231, 0.0, 1.0),
    ("B_s->phi::alpha^A1_1@BSZ2015", r"\alpha_1^{A_1}", 0.79, -10.0, 10.0),
    ("B_s->phi::alpha^A1_2@BSZ2015", r"\alpha_2^{A_1}", 1.05, -10.0, 10.0),
    ("B_s->phi::alpha^A12_1@BSZ2015", r"\alpha_1^{A_{12}}", 0.97, -10.0, 10.0),
    ("B_s->phi::alpha^A12_2@BSZ2015", r"\alpha_2^{A_{12}}", 1.61, -10.0, 10.0),
    ("B_s->phi::alpha^V_0@BSZ2015", r"\alpha_0^{V}", 0.387, 0.0, 1.0),
    ("B_s->phi::alpha^V_1@BSZ2015", r"\alpha_1^{V}", -0.73, -10.0, 10.0),
    ("B_s->phi::alpha^V_2@BSZ2015", r"\alpha_2^{V}", 2.70, -10.0, 10.0),
    ("B_s->phi::alpha^T1_0@BSZ2015", r"\alpha_0^{T_1}", 0.309, 0.0, 1.0),
    ("B_s->phi::alpha^T1_1@BSZ2015", r"\alpha_1^{T_1}", -0.74, -10.0, 10.0),
    ("B_s->phi::alpha^T1_2@BSZ2015", r"\alpha_2^{T_1}", 1.43, -10.0, 10.0),
    ("B_s->phi::alpha^T2_1@BSZ2015", r"\alpha_1^{T_2}", 0.56, -10.0, 10.0),
    ("B_s->phi::alpha^T2_2@BSZ2015", r"\alpha_2^{T_2}", 1.29, -10.0, 10.0),
    ("B_s->phi::alpha^T23_0@BSZ2015", r"\alpha_0^{T_{23}}", 0.676, 0.0, 2.0),
    ("B_s->phi::alpha^T23_1@BSZ2015", r"\alpha_1^{T_{23}}", 1.54, -10.0, 10.0),
    ("B_s->phi::alpha^T23_2@BSZ2015", r"\alpha_2^{T_{23}}", 2.22, -10.0, 10.0),
    // B(*)->D(*) HQET Isgur-Wise parameters
    ("B(*)->D(*)::xi'(1)@HQET", r"\xi'(1)", -1.5, -5.0, 0.0),
    ("B(*)->D(*)::xi''(1)@HQET", r"\xi''(1)", 3.0, -10.0, 10.0),
    ("B(*)->D(*)::xi'''(1)@HQET", r"\xi'''(1)", 0.0, -30.0, 30.0),
    ("B(*)->D(*)::chi_2(1)@HQET", r"\chi_2(1)", 0.5, -1.0, 1.0),
    ("B(*)->D(*)::chi_2'(1)@HQET", r"\chi_2'(1)", 0.0, -2.0, 2.0),
    ("B(*)->D(*)::chi_3'(1)@HQET", r"\chi_3'(1)", 0.0, -2.0, 2.0),
    ("B(*)->D(*)::eta(1)@HQET", r"\eta(1)", 0.25, -1.0, 1.0),
    ("B(*)->D(*)::eta'(1)@HQET", r"\eta'(1)", 0.0, -2.0, 2.0),
    ("B(*)->D(*)::l_1(1)@HQET", r"\ell_1(1)", 0.0, -2.0, 2.0),
    ("B(*)->D(*)::l_2(1)@HQET", r"\ell_2(1)", -1.8813, -4.0, 2.0),
    ("B(*)->D(*)::l_3(1)@HQET", r"\ell_3(1)", 0.0, -2.0, 2.0),
    ("B(*)->D(*)::l_4(1)@HQET", r"\ell_4(1)", 0.0, -2.0, 2.0),
    ("B(*)->D(*)::l_5(1)@HQET", r"\ell_5(1)", -1.4066, -4.0, 2.0),
    ("B(*)->D(*)::l_6(1)@HQET", r"\ell_6(1)", 0.0, -2.0, 2.0),
    ("B(*)->D(*)::a@HQET", "a", 1.0, 0.5, 1.5),
    // Lambda_b->Lambda form factors, DM2016 parameterization
    ("Lambda_b->Lambda::a_0_time^V@DM2016", "a_0^{f_t^V}", 0.354, 0.0, 1.0),
    ("Lambda_b->Lambda::a_1_time^V@DM2016", "a_1^{f_t^V}", -1.12, -10.0, 10.0),
    ("Lambda_b->Lambda::a_0_long^V@DM2016", "a_0^{f_0^V}", 0.422, 0.0, 1.0),
    ("Lambda_b->Lambda::a_1_long^V@DM2016", "a_1^{f_0^V}", -1.14, -10.0, 10.0),
    ("Lambda_b->Lambda::a_0_perp^V@DM2016", "a_0^{f_\\perp^V}", 0.518, 0.0, 1.0),
    ("Lambda_b->Lambda::a_1_perp^V@DM2016", "a_1^{f_\\perp^V}", -1.35, -10.0, 10.0),
    ("Lambda_b->Lambda::a_0_time^A@DM2016", "a_0^{f_t^A}", 0.403, 0.0, 1.0),
    ("Lambda_b->Lambda::a_1_time^A@DM2016", "a_1^{f_t^A}", -1.07, -10.0, 10.0),
    ("Lambda_b->Lambda::a_0_long^A@DM2016", "a_0^{f_0^A}", 0.356, 0.0, 1.0),
    ("Lambda_b->Lambda::a_1_long^A@DM2016", "a_1^{f_0^A}", -1.06, -10.0, 10.0),
    ("Lambda_b->Lambda::a_0_perp^A@DM2016", "a_0^{f_\\perp^A}", 0.356, 0.0, 1.0),
    ("Lambda_b->Lambda::a_1_perp^A@DM2016", "a_1^{f_\\perp^A}", -1.11, -10.0, 10.0),
    // non-local b->s ccbar amplitudes, GvDV2020 / GRvDV2021 parameterizations
    ("B->K^*ccbar::Re{alpha_0^perp}", r"{\rm Re}\,\alpha_0^\perp", 1.0, -10.0, 10.0),
    ("B->K^*ccbar::Im{alpha_0^perp}", r"{\rm Im}\,\alpha_0^\perp", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Re{alpha_1^perp}", r"{\rm Re}\,\alpha_1^\perp", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Im{alpha_1^perp}", r"{\rm Im}\,\alpha_1^\perp", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Re{alpha_2^perp}", r"{\rm Re}\,\alpha_2^\perp", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Im{alpha_2^perp}", r"{\rm Im}\,\alpha_2^\perp", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Re{alpha_0^para}", r"{\rm Re}\,\alpha_0^\|", 1.0, -10.0, 10.0),
    ("B->K^*ccbar::Im{alpha_0^para}", r"{\rm Im}\,\alpha_0^\|", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Re{alpha_1^para}", r"{\rm Re}\,\alpha_1^\|", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Im{alpha_1^para}", r"{\rm Im}\,\alpha_1^\|", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Re{alpha_2^para}", r"{\rm Re}\,\alpha_2^\|", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Im{alpha_2^para}", r"{\rm Im}\,\alpha_2^\|", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Re{alpha_0^long}", r"{\rm Re}\,\alpha_0^0", 1.0, -10.0, 10.0),
    ("B->K^*ccbar::Im{alpha_0^long}", r"{\rm Im}\,\alpha_0^0", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Re{alpha_1^long}", r"{\rm Re}\,\alpha_1^0", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Im{alpha_1^long}", r"{\rm Im}\,\alpha_1^0", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Re{alpha_2^long}", r"{\rm Re}\,\alpha_2^0", 0.0, -10.0, 10.0),
    ("B->K^*ccbar::Im{alpha_2^long}", r"{\rm Im}\,\alpha_2^0", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Re{alpha_0^perp}", r"{\rm Re}\,\alpha_0^\perp", 1.0, -10.0, 10.0),
    ("B_s->phiccbar::Im{alpha_0^perp}", r"{\rm Im}\,\alpha_0^\perp", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Re{alpha_1^perp}", r"{\rm Re}\,\alpha_1^\perp", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Im{alpha_1^perp}", r"{\rm Im}\,\alpha_1^\perp", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Re{alpha_2^perp}", r"{\rm Re}\,\alpha_2^\perp", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Im{alpha_2^perp}", r"{\rm Im}\,\alpha_2^\perp", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Re{alpha_0^para}", r"{\rm Re}\,\alpha_0^\|", 1.0, -10.0, 10.0),
    ("B_s->phiccbar::Im{alpha_0^para}", r"{\rm Im}\,\alpha_0^\|", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Re{alpha_1^para}", r"{\rm Re}\,\alpha_1^\|", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Im{alpha_1^para}", r"{\rm Im}\,\alpha_1^\|", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Re{alpha_2^para}", r"{\rm Re}\,\alpha_2^\|", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Im{alpha_2^para}", r"{\rm Im}\,\alpha_2^\|", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Re{alpha_0^long}", r"{\rm Re}\,\alpha_0^0", 1.0, -10.0, 10.0),
    ("B_s->phiccbar::Im{alpha_0^long}", r"{\rm Im}\,\alpha_0^0", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Re{alpha_1^long}", r"{\rm Re}\,\alpha_1^0", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Im{alpha_1^long}", r"{\rm Im}\,\alpha_1^0", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Re{alpha_2^long}", r"{\rm Re}\,\alpha_2^0", 0.0, -10.0, 10.0),
    ("B_s->phiccbar::Im{alpha_2^long}", r"{\rm Im}\,\alpha_2^0", 0.0, -10.0, 10.0),
    // non-local Lambda_b->Lambda ccbar amplitudes, BRvD2021 parameterization
    ("Lambda_b->Lambdaccbar::t_0", "t_0", 9.0, 0.0, 13.0),
    ("Lambda_b->Lambdaccbar::Re{alpha_0^V_perp}", r"{\rm Re}\,\alpha_0^{V\perp}", 1.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Im{alpha_0^V_perp}", r"{\rm Im}\,\alpha_0^{V\perp}", 0.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Re{alpha_1^V_perp}", r"{\rm Re}\,\alpha_1^{V\perp}", 0.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Im{alpha_1^V_perp}", r"{\rm Im}\,\alpha_1^{V\perp}", 0.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Re{alpha_0^V_long}", r"{\rm Re}\,\alpha_0^{V0}", 1.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Im{alpha_0^V_long}", r"{\rm Im}\,\alpha_0^{V0}", 0.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Re{alpha_1^V_long}", r"{\rm Re}\,\alpha_1^{V0}", 0.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Im{alpha_1^V_long}", r"{\rm Im}\,\alpha_1^{V0}", 0.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Re{alpha_0^A_perp}", r"{\rm Re}\,\alpha_0^{A\perp}", 1.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Im{alpha_0^A_perp}", r"{\rm Im}\,\alpha_0^{A\perp}", 0.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Re{alpha_1^A_perp}", r"{\rm Re}\,\alpha_1^{A\perp}", 0.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Im{alpha_1^A_perp}", r"{\rm Im}\,\alpha_1^{A\perp}", 0.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Re{alpha_0^A_long}", r"{\rm Re}\,\alpha_0^{A0}", 1.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Im{alpha_0^A_long}", r"{\rm Im}\,\alpha_0^{A0}", 0.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Re{alpha_1^A_long}", r"{\rm Re}\,\alpha_1^{A0}", 0.0, -10.0, 10.0),
    ("Lambda_b->Lambdaccbar::Im{alpha_1^A_long}", r"{\rm Im}\,\alpha_1^{A0}", 0.0, -10.0, 10.0),
    // pion vector form factor, KKRvD2024 parameterization
    ("pi->pi::b_1@KKRvD2024", "b_1", -0.17, -2.0, 2.0),
    ("pi->pi::b_2@KKRvD2024", "b_2", -0.12, -2.0, 2.0),
    ("pi->pi::b_3@KKRvD2024", "b_3", -0.05, -2.0, 2.0),
    ("pi->pi::b_4@KKRvD2024", "b_4", 0.0, -2.0, 2.0),
    ("pi->pi::M@KKRvD2024", "M_\\rho", 0.7736, 0.7, 0.85),
    ("pi->pi::Gamma@KKRvD2024", "\\Gamma_\\rho", 0.1465, 0.1, 0.2),
];
