//! Integration tests for password generation.

mod helpers;

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;

use passforge::{
    AppConfig, BatchRequest, CharClass, Complexity, ErrorKind, ForgeError, ForgeResult, PassForge,
    PasswordPolicy, RandomSource,
};

#[test]
fn test_generate_alphanumeric_scenario() {
    let forge = helpers::seeded_forge(1);
    let policy = helpers::alphanumeric_policy(12);

    for _ in 0..100 {
        let password = forge.generate(&policy).unwrap();
        let text = password.expose();
        assert_eq!(text.chars().count(), 12);
        assert!(helpers::count_class(&text, CharClass::Lower) >= 1);
        assert!(helpers::count_class(&text, CharClass::Upper) >= 1);
        assert!(helpers::count_class(&text, CharClass::Digit) >= 1);
        assert!(text.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn test_generate_length_four_all_classes() {
    let forge = helpers::os_forge();
    let policy = helpers::full_policy(4);

    for _ in 0..200 {
        let password = forge.generate(&policy).unwrap();
        let text = password.expose();
        for class in CharClass::ALL {
            assert_eq!(helpers::count_class(&text, class), 1, "{class} in a length-4 password");
        }
    }
}

#[test]
fn test_exclusion_covering_class_is_invalid_policy() {
    let forge = helpers::seeded_forge(2);
    let policy = PasswordPolicy::new(10)
        .require(CharClass::Lower)
        .require_at_least(CharClass::Digit, 1)
        .exclude('0'..='9');

    let err = forge.generate(&policy).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidPolicy);
}

#[test]
fn test_invalid_policies_rejected() {
    let forge = helpers::seeded_forge(3);

    let too_short = helpers::alphanumeric_policy(3);
    assert_eq!(forge.generate(&too_short).unwrap_err().kind, ErrorKind::InvalidPolicy);

    let no_classes = PasswordPolicy::new(12);
    assert_eq!(forge.generate(&no_classes).unwrap_err().kind, ErrorKind::InvalidPolicy);

    let overfull = PasswordPolicy::new(6)
        .require_at_least(CharClass::Upper, 4)
        .require_at_least(CharClass::Digit, 4);
    assert_eq!(forge.generate(&overfull).unwrap_err().kind, ErrorKind::InvalidPolicy);

    let too_long = helpers::alphanumeric_policy(1025);
    assert_eq!(forge.generate(&too_long).unwrap_err().kind, ErrorKind::InvalidPolicy);
}

#[test]
fn test_ambiguous_characters_excluded() {
    let forge = helpers::seeded_forge(4);
    let policy = helpers::full_policy(64).exclude_ambiguous();

    for _ in 0..50 {
        let password = forge.generate(&policy).unwrap();
        assert!(password.expose().chars().all(|c| !"Il1O0o".contains(c)));
    }
}

#[test]
fn test_complexity_presets_generate() {
    let forge = helpers::seeded_forge(5);
    for complexity in [Complexity::Low, Complexity::Balanced, Complexity::High] {
        let policy = PasswordPolicy::from_complexity(20, complexity);
        let password = forge.generate(&policy).unwrap();
        let composition = forge.analyze_composition(&password);
        assert_eq!(composition.total_length, 20);
        for (class, min) in &policy.min_per_class {
            let actual = match class {
                CharClass::Lower => composition.lower,
                CharClass::Upper => composition.upper,
                CharClass::Digit => composition.digit,
                CharClass::Symbol => composition.symbol,
            };
            assert!(actual >= *min, "{complexity:?}: {class} {actual} < {min}");
        }
    }
}

#[test]
fn test_default_policy_from_config() {
    let forge = helpers::seeded_forge(6);
    let password = forge.generate_default().unwrap();
    assert_eq!(password.len(), 16);
    let composition = forge.analyze_composition(&password);
    assert!(composition.lower >= 1);
    assert!(composition.upper >= 1);
    assert!(composition.digit >= 1);
    assert!(composition.symbol >= 1);
    assert_eq!(composition.other, 0);
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let policy = helpers::full_policy(24);
    let a = helpers::seeded_forge(42).generate(&policy).unwrap();
    let b = helpers::seeded_forge(42).generate(&policy).unwrap();
    let c = helpers::seeded_forge(43).generate(&policy).unwrap();
    assert_eq!(a.chars(), b.chars());
    assert_ne!(a.chars(), c.chars());
}

/// Every position of a lower+digit password with no minimums is a uniform
/// draw from 36 symbols. Pearson's statistic over 160 000 draws with 35
/// degrees of freedom stays well below 90 (p < 1e-5) for a fair source.
#[test]
fn test_character_distribution_is_uniform() {
    let forge = helpers::seeded_forge(7);
    let policy = PasswordPolicy::new(8)
        .require(CharClass::Lower)
        .require(CharClass::Digit);

    let mut counts: BTreeMap<char, u64> = BTreeMap::new();
    let trials = 20_000;
    for _ in 0..trials {
        let password = forge.generate(&policy).unwrap();
        for c in password.chars() {
            *counts.entry(*c).or_default() += 1;
        }
    }

    assert_eq!(counts.len(), 36);
    let expected = (trials * 8) as f64 / 36.0;
    let chi_square: f64 = counts
        .values()
        .map(|observed| {
            let diff = *observed as f64 - expected;
            diff * diff / expected
        })
        .sum();
    assert!(chi_square < 90.0, "chi-square {chi_square:.2} over 35 degrees of freedom");
}

/// Pearson's statistic of `observed` against `expected` counts.
fn chi_square(observed: &[u64], expected: &[f64]) -> f64 {
    observed
        .iter()
        .zip(expected)
        .map(|(o, e)| {
            let diff = *o as f64 - e;
            diff * diff / e
        })
        .sum()
}

/// With one character of each class in a length-4 password, every
/// position holds each class with probability 1/4. The 0.01% critical
/// value for 3 degrees of freedom is 21.1.
#[test]
fn test_class_per_position_is_uniform() {
    let forge = helpers::seeded_forge(11);
    let policy = helpers::full_policy(4);
    let trials = 8_000u64;
    let mut counts = [[0u64; 4]; 4];

    for _ in 0..trials {
        let password = forge.generate(&policy).unwrap();
        for (position, c) in password.chars().iter().enumerate() {
            let class = CharClass::of(*c).unwrap();
            let index = CharClass::ALL.iter().position(|k| *k == class).unwrap();
            counts[position][index] += 1;
        }
    }

    let expected = [trials as f64 / 4.0; 4];
    for (position, observed) in counts.iter().enumerate() {
        let statistic = chi_square(observed, &expected);
        assert!(statistic < 21.1, "position {position}: chi-square {statistic:.2}");
    }
}

/// Three digits are placed first and then shuffled with five draws from
/// the 36-symbol union, so each position holds a given digit with
/// probability 3/80 + 5/288 and a given letter with probability 5/288.
/// The 0.001% critical value for 35 degrees of freedom is about 83.
#[test]
fn test_character_per_position_is_uniform_with_minimums() {
    let forge = helpers::seeded_forge(12);
    let policy = PasswordPolicy::new(8)
        .require_at_least(CharClass::Digit, 3)
        .require(CharClass::Lower);
    let trials = 20_000u64;

    let alphabet: Vec<char> = ('0'..='9').chain('a'..='z').collect();
    let mut counts = vec![vec![0u64; alphabet.len()]; 8];
    for _ in 0..trials {
        let password = forge.generate(&policy).unwrap();
        for (position, c) in password.chars().iter().enumerate() {
            let index = alphabet.iter().position(|a| a == c).unwrap();
            counts[position][index] += 1;
        }
    }

    let digit_p = 3.0 / 80.0 + 5.0 / 288.0;
    let letter_p = 5.0 / 288.0;
    let expected: Vec<f64> = alphabet
        .iter()
        .map(|c| trials as f64 * if c.is_ascii_digit() { digit_p } else { letter_p })
        .collect();
    for (position, observed) in counts.iter().enumerate() {
        let statistic = chi_square(observed, &expected);
        assert!(statistic < 83.0, "position {position}: chi-square {statistic:.2}");
    }
}

/// Per-position coverage: the shuffle must not pin required classes to
/// fixed positions.
#[test]
fn test_each_position_sees_every_class() {
    let forge = helpers::seeded_forge(8);
    let policy = helpers::full_policy(4);
    let mut seen = [[false; 4]; 4];

    for _ in 0..500 {
        let password = forge.generate(&policy).unwrap();
        for (position, c) in password.chars().iter().enumerate() {
            let class = CharClass::of(*c).unwrap();
            let index = CharClass::ALL.iter().position(|k| *k == class).unwrap();
            seen[position][index] = true;
        }
    }

    assert!(seen.iter().flatten().all(|s| *s));
}

#[test]
fn test_batch_generation() {
    let forge = helpers::seeded_forge(9);
    let request = BatchRequest::new(25, 8, 16, helpers::full_policy(0));
    let passwords = forge.generate_batch(&request).unwrap();

    assert_eq!(passwords.len(), 25);
    for password in &passwords {
        assert!((8..=16).contains(&password.len()));
        assert_eq!(password.policy().length(), password.len());
        let text = password.expose();
        for class in CharClass::ALL {
            assert!(helpers::count_class(&text, class) >= 1);
        }
    }
    let distinct_lengths: std::collections::BTreeSet<_> =
        passwords.iter().map(|p| p.len()).collect();
    assert!(distinct_lengths.len() > 1);
}

#[test]
fn test_complexity_batch_recomputes_minimums() {
    let forge = helpers::seeded_forge(13);
    for complexity in [Complexity::Low, Complexity::Balanced, Complexity::High] {
        let request =
            BatchRequest::with_complexity(40, 12, 24, complexity).excluding("Il1O0o".chars());
        let passwords = forge.generate_batch(&request).unwrap();
        assert_eq!(passwords.len(), 40);

        for password in &passwords {
            let length = password.len();
            assert!((12..=24).contains(&length));
            let text = password.expose();
            assert!(text.chars().all(|c| !"Il1O0o".contains(c)));
            for class in CharClass::ALL {
                let floor = length * complexity.percent(class) / 100;
                assert!(
                    helpers::count_class(&text, class) >= floor,
                    "{complexity:?} length {length}: {class} below {floor}"
                );
            }
        }
    }
}

#[test]
fn test_balanced_batch_always_contains_symbols() {
    let forge = helpers::seeded_forge(14);
    let request = BatchRequest::with_complexity(100, 12, 24, Complexity::Balanced);
    for password in forge.generate_batch(&request).unwrap() {
        assert!(helpers::count_class(&password.expose(), CharClass::Symbol) >= 3);
    }
}

#[test]
fn test_batch_limits() {
    let forge = helpers::seeded_forge(10);
    let template = helpers::alphanumeric_policy(0);

    let empty = BatchRequest::new(0, 8, 8, template.clone());
    assert_eq!(forge.generate_batch(&empty).unwrap_err().kind, ErrorKind::InvalidPolicy);

    let too_many = BatchRequest::new(101, 8, 8, template.clone());
    assert_eq!(forge.generate_batch(&too_many).unwrap_err().kind, ErrorKind::InvalidPolicy);

    let inverted = BatchRequest::new(5, 16, 8, template.clone());
    assert_eq!(forge.generate_batch(&inverted).unwrap_err().kind, ErrorKind::InvalidPolicy);

    let below_minimum = BatchRequest::new(5, 2, 3, template);
    assert_eq!(
        forge.generate_batch(&below_minimum).unwrap_err().kind,
        ErrorKind::InvalidPolicy
    );
}

struct UnreadableSource;

impl RandomSource for UnreadableSource {
    fn fill_bytes(&self, _buf: &mut [u8]) -> ForgeResult<()> {
        Err(ForgeError::entropy_unavailable("entropy device unreadable"))
    }
}

#[test]
fn test_generate_surfaces_entropy_failure() {
    let forge = PassForge::with_random_source(&AppConfig::default(), Arc::new(UnreadableSource));

    let err = forge.generate(&helpers::full_policy(12)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::EntropyUnavailable);

    let err = forge
        .generate_batch(&BatchRequest::new(3, 8, 12, helpers::full_policy(0)))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::EntropyUnavailable);

    // Validation runs before any draw.
    let err = forge.generate(&PasswordPolicy::new(12)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidPolicy);
}

#[test]
fn test_concurrent_generation() {
    let forge = helpers::os_forge();
    let policy = helpers::full_policy(32);

    let passwords: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    (0..25)
                        .map(|_| forge.generate(&policy).unwrap().expose().to_string())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(passwords.len(), 200);
    let distinct: std::collections::BTreeSet<_> = passwords.iter().collect();
    assert_eq!(distinct.len(), 200);
}

fn arb_policy() -> impl Strategy<Value = PasswordPolicy> {
    (
        4usize..48,
        proptest::sample::subsequence(CharClass::ALL.to_vec(), 1..=4),
        proptest::collection::vec(0usize..3, 4),
        proptest::collection::btree_set(proptest::char::range('!', '~'), 0..24),
    )
        .prop_map(|(length, classes, mins, excluded)| {
            let mut policy = PasswordPolicy::new(length);
            for (class, min) in classes.into_iter().zip(mins) {
                policy = policy.require_at_least(class, min);
            }
            policy.exclude(excluded)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_generate_honors_policy_or_rejects_it(policy in arb_policy(), seed in any::<u64>()) {
        let forge = helpers::seeded_forge(seed);
        match forge.generate(&policy) {
            Ok(password) => {
                let text = password.expose();
                prop_assert_eq!(text.chars().count(), policy.length);
                for c in text.chars() {
                    prop_assert!(!policy.excluded_characters.contains(&c));
                    prop_assert!(policy.required_classes.contains(&CharClass::of(c).unwrap()));
                }
                for (class, min) in &policy.min_per_class {
                    prop_assert!(helpers::count_class(&text, *class) >= *min);
                }
            }
            Err(err) => prop_assert_eq!(err.kind, ErrorKind::InvalidPolicy),
        }
    }
}
