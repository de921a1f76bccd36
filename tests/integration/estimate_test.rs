//! Integration tests for strength and brute-force estimation.

mod helpers;

use passforge::{
    AppConfig, CharClass, EntropyReport, HashAlgorithmSpec, PasswordPolicy, StrengthClass,
};

#[test]
fn test_alphanumeric_twelve_is_strong() {
    let forge = helpers::seeded_forge(1);
    let password = forge.generate(&helpers::alphanumeric_policy(12)).unwrap();

    let report = forge.estimate_strength(&password).unwrap();
    let expected = 12.0 * 62f64.log2();
    assert!((report.bits_of_entropy - expected).abs() < 1e-9);
    assert!((report.bits_of_entropy - 71.45).abs() < 0.01);
    assert_eq!(report.classification, StrengthClass::Strong);
}

#[test]
fn test_strength_monotonic_in_length() {
    let forge = helpers::seeded_forge(2);
    let mut previous = 0.0;
    for length in 4..=64 {
        let password = forge.generate(&helpers::full_policy(length)).unwrap();
        let bits = forge.estimate_strength(&password).unwrap().bits_of_entropy;
        assert!(bits >= previous, "length {length}: {bits} < {previous}");
        previous = bits;
    }
}

#[test]
fn test_strength_monotonic_in_alphabet() {
    let forge = helpers::seeded_forge(3);
    let widening = [
        PasswordPolicy::new(16).require(CharClass::Digit),
        PasswordPolicy::new(16)
            .require(CharClass::Digit)
            .require(CharClass::Lower)
            .exclude_ambiguous(),
        PasswordPolicy::new(16)
            .require(CharClass::Digit)
            .require(CharClass::Lower),
        PasswordPolicy::new(16)
            .require(CharClass::Digit)
            .require(CharClass::Lower)
            .require(CharClass::Upper),
        helpers::full_policy(16),
    ];

    let mut previous = 0.0;
    for policy in &widening {
        let password = forge.generate(policy).unwrap();
        let bits = forge.estimate_strength(&password).unwrap().bits_of_entropy;
        assert!(bits >= previous, "{policy:?}: {bits} < {previous}");
        previous = bits;
    }
}

#[test]
fn test_strength_under_mismatched_policy_is_inconsistent() {
    let forge = helpers::seeded_forge(4);
    let password = forge.generate(&helpers::full_policy(10)).unwrap();
    let other = forge.validate(&helpers::full_policy(11)).unwrap();

    let err = forge.estimate_strength_under(&password, &other).unwrap_err();
    assert_eq!(err.kind, passforge::ErrorKind::InconsistentInput);
}

#[test]
fn test_classification_thresholds() {
    let forge = helpers::seeded_forge(5);
    let cases = [
        (PasswordPolicy::new(8).require(CharClass::Digit), StrengthClass::Weak),
        (PasswordPolicy::new(10).require(CharClass::Lower), StrengthClass::Fair),
        (helpers::full_policy(12), StrengthClass::Strong),
        (helpers::full_policy(20), StrengthClass::VeryStrong),
    ];
    for (policy, expected) in cases {
        let password = forge.generate(&policy).unwrap();
        let report = forge.estimate_strength(&password).unwrap();
        assert_eq!(report.classification, expected, "{policy:?}");
    }
}

#[test]
fn test_assessed_dictionary_secret_is_weak() {
    let forge = helpers::seeded_forge(6);
    let weak = forge.assess_secret("password");
    assert_eq!(weak.classification, StrengthClass::Weak);

    let generated = forge.generate(&helpers::full_policy(24)).unwrap();
    let strong = forge.assess_secret(&generated.expose());
    assert!(strong.bits_of_entropy > weak.bits_of_entropy);

    assert_eq!(forge.assess_secret("").bits_of_entropy, 0.0);
}

#[test]
fn test_brute_force_cost_scales_with_algorithm() {
    let forge = helpers::seeded_forge(7);
    let report = EntropyReport::from_bits(48.0);

    let fast = forge.estimate_brute_force_cost(&report, &HashAlgorithmSpec::sha256(1));
    let iterated = forge.estimate_brute_force_cost(&report, &HashAlgorithmSpec::sha256(10_000));
    let kdf = forge.estimate_brute_force_cost(&report, &HashAlgorithmSpec::default());

    assert_eq!(fast.estimated_attempts, 2f64.powi(47));
    assert_eq!(fast.estimated_attempts, kdf.estimated_attempts);
    assert!(iterated.per_guess_cost > fast.per_guess_cost);
    assert!(kdf.per_guess_cost > iterated.per_guess_cost);

    let rate = 1e10;
    assert!(kdf.wall_clock_seconds_at_rate(rate) > fast.wall_clock_seconds_at_rate(rate));
    assert!(fast.wall_clock_seconds_at_rate(0.0).is_infinite());
}

#[test]
fn test_cost_model_from_config() {
    let forge = helpers::forge_from_toml(
        r#"
        [cost_model]
        sha256_weight = 2.5
        "#,
        8,
    );
    let report = EntropyReport::from_bits(20.0);
    let estimate = forge.estimate_brute_force_cost(&report, &HashAlgorithmSpec::sha256(4));
    assert_eq!(estimate.per_guess_cost, 10.0);
}

#[test]
fn test_generated_to_attack_cost_pipeline() {
    let forge = helpers::seeded_forge(9);
    let password = forge.generate(&helpers::alphanumeric_policy(12)).unwrap();
    let report = forge.estimate_strength(&password).unwrap();
    let estimate = forge.estimate_brute_force_cost(&report, &HashAlgorithmSpec::default());

    // 62^12 / 2 guesses.
    let expected = 62f64.powi(12) / 2.0;
    assert!((estimate.estimated_attempts / expected - 1.0).abs() < 1e-9);
}

#[test]
fn test_calibration_through_facade() {
    let forge = helpers::os_forge();
    let ratio = forge
        .calibrate(&HashAlgorithmSpec::argon2id(1, 128, 1), 2)
        .unwrap();
    assert!(ratio >= 1.0);
}

#[test]
fn test_default_config_file_matches_defaults() {
    let config = AppConfig::load("config/default.toml").unwrap();
    let defaults = AppConfig::default();

    assert_eq!(config.generator.default_length, defaults.generator.default_length);
    assert_eq!(config.generator.batch_max, defaults.generator.batch_max);
    assert_eq!(config.hashing.default_algorithm, defaults.hashing.default_algorithm);
    assert_eq!(config.cost_model.sha512_weight, defaults.cost_model.sha512_weight);
    assert_eq!(config.logging.format, defaults.logging.format);
}

#[test]
fn test_longest_policy_keeps_finite_log2_cost() {
    let forge = helpers::seeded_forge(10);
    let password = forge.generate(&helpers::full_policy(1024)).unwrap();
    let report = forge.estimate_strength(&password).unwrap();
    let estimate = forge.estimate_brute_force_cost(&report, &HashAlgorithmSpec::default());

    assert!(report.bits_of_entropy > 6_700.0);
    assert!(estimate.estimated_attempts.is_infinite());
    assert!((estimate.log2_attempts - (report.bits_of_entropy - 1.0)).abs() < 1e-9);
    assert!(estimate.log2_wall_clock_seconds_at_rate(1e12).is_finite());

    let json = serde_json::to_value(estimate).unwrap();
    assert!(json["log2_attempts"].as_f64().unwrap() > 6_699.0);
}
