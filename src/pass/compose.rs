//! Password composition: proportional fill over the selected pools, then a
//! shuffle so pool order leaks nothing about character positions.

use thiserror::Error;

use super::pool::PoolSelection;
use crate::rand::RandomSource;

/// Typed failures of [`compose`]. No retries apply; a failure means no
/// password was produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("no usable pool: every selected character pool is empty")]
    NoUsablePool,
    #[error("invalid password length {0}: must be at least 1")]
    InvalidLength(usize),
}

/// Compose one password of exactly `length` characters from the selection.
///
/// Every non-empty pool gets one mandatory seed draw, then up to
/// `length / k - 1` further draws (`k` counts disabled pools too). Whatever
/// is still missing is topped up one character at a time over the non-empty
/// pools in selection order, and the result is shuffled before it is joined.
/// All draws are uniform with replacement within a pool.
pub fn compose<R: RandomSource>(
    length: usize,
    pools: &PoolSelection,
    rng: &mut R,
) -> Result<String, ComposeError> {
    if length == 0 {
        return Err(ComposeError::InvalidLength(length));
    }
    if pools.all_empty() {
        return Err(ComposeError::NoUsablePool);
    }

    let base = length / pools.len();
    let mut out: Vec<char> = Vec::with_capacity(length);

    for pool in pools.iter() {
        if out.len() == length {
            break;
        }
        if pool.is_empty() {
            continue;
        }
        out.push(pool.draw(rng));
        if out.len() < length {
            // base of 0 leaves nothing beyond the seed draw
            for _ in 1..base {
                out.push(pool.draw(rng));
            }
        }
    }

    // Top up the remainder in selection order, stopping mid-pass on target.
    while out.len() < length {
        let before = out.len();
        for pool in pools.iter() {
            if pool.is_empty() {
                continue;
            }
            out.push(pool.draw(rng));
            if out.len() == length {
                break;
            }
        }
        if out.len() == before {
            // a full pass added nothing; nothing left to draw from
            return Err(ComposeError::NoUsablePool);
        }
    }

    shuffle(&mut out, rng);
    Ok(out.into_iter().collect())
}

/// Fisher-Yates over the accumulated characters.
fn shuffle<R: RandomSource>(chars: &mut [char], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.pick(i + 1);
        chars.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::pool::Pool;
    use crate::rand::SplitMix64;

    fn selection(entries: &[(&str, &str)]) -> PoolSelection {
        let mut sel = PoolSelection::new();
        for (name, chars) in entries {
            sel.push(Pool::new(*name, chars.chars()));
        }
        sel
    }

    fn count_of(password: &str, c: char) -> usize {
        password.chars().filter(|&x| x == c).count()
    }

    #[test]
    fn output_length_is_exact_across_a_range() {
        let sel = selection(&[("upper", "ABC"), ("lower", "abc"), ("digits", "012")]);
        for length in 1..=20 {
            let mut rng = SplitMix64::seeded(length as u64);
            let pw = compose(length, &sel, &mut rng).unwrap();
            assert_eq!(pw.chars().count(), length, "length {length}");
        }
    }

    #[test]
    fn every_character_comes_from_a_supplied_pool() {
        let sel = selection(&[("upper", "XYZ"), ("symbols", "!?"), ("disabled", "")]);
        let mut rng = SplitMix64::seeded(17);
        let pw = compose(40, &sel, &mut rng).unwrap();
        for c in pw.chars() {
            assert!(sel.contains_char(c), "unexpected char {c:?}");
        }
    }

    #[test]
    fn all_empty_selection_is_rejected() {
        let sel = selection(&[("upper", ""), ("lower", ""), ("symbols", "")]);
        let mut rng = SplitMix64::seeded(0);
        assert_eq!(compose(12, &sel, &mut rng), Err(ComposeError::NoUsablePool));
    }

    #[test]
    fn zero_length_is_rejected_fast() {
        let sel = selection(&[("upper", "A")]);
        let mut rng = SplitMix64::seeded(0);
        assert_eq!(
            compose(0, &sel, &mut rng),
            Err(ComposeError::InvalidLength(0))
        );
    }

    #[test]
    fn fixed_seed_makes_composition_deterministic() {
        let sel = selection(&[("upper", "ABCDEF"), ("lower", "abcdef"), ("digits", "0123")]);
        let first = compose(24, &sel, &mut SplitMix64::seeded(7)).unwrap();
        let second = compose(24, &sel, &mut SplitMix64::seeded(7)).unwrap();
        assert_eq!(first, second);

        let other = compose(24, &sel, &mut SplitMix64::seeded(8)).unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn even_split_gives_each_pool_its_quota() {
        // single-char pools make the per-pool counts observable
        let sel = selection(&[
            ("upper", "A"),
            ("lower", "a"),
            ("symbols", "!"),
            ("chinese", "中"),
            ("tibetan", "ཀ"),
        ]);
        let mut rng = SplitMix64::seeded(11);
        let pw = compose(100, &sel, &mut rng).unwrap();
        for c in ['A', 'a', '!', '中', 'ཀ'] {
            assert_eq!(count_of(&pw, c), 20);
        }
    }

    #[test]
    fn remainder_lands_on_leading_pools() {
        let sel = selection(&[
            ("upper", "A"),
            ("lower", "a"),
            ("symbols", "!"),
            ("chinese", "中"),
            ("tibetan", "ཀ"),
        ]);
        let mut rng = SplitMix64::seeded(5);
        let pw = compose(101, &sel, &mut rng).unwrap();
        assert_eq!(count_of(&pw, 'A'), 21);
        for c in ['a', '!', '中', 'ཀ'] {
            assert_eq!(count_of(&pw, c), 20);
        }
    }

    #[test]
    fn disabled_entry_still_counts_toward_the_quota_divisor() {
        // k = 3 with one usable pool: base is length / 3, top-up covers the rest
        let sel = selection(&[("upper", "A"), ("lower", ""), ("symbols", "")]);
        let mut rng = SplitMix64::seeded(2);
        let pw = compose(6, &sel, &mut rng).unwrap();
        assert_eq!(pw, "AAAAAA");
    }

    #[test]
    fn scenario_three_single_char_pools() {
        let sel = selection(&[("upper", "A"), ("lower", "a"), ("symbols", "!")]);
        let mut rng = SplitMix64::seeded(29);
        let pw = compose(6, &sel, &mut rng).unwrap();
        assert_eq!(pw.chars().count(), 6);
        // each pool contributes its mandatory seed draw
        for c in ['A', 'a', '!'] {
            assert!(count_of(&pw, c) >= 1);
        }
    }

    #[test]
    fn scenario_single_pool_length_one() {
        let sel = selection(&[("upper", "AB")]);
        let mut rng = SplitMix64::seeded(13);
        let pw = compose(1, &sel, &mut rng).unwrap();
        assert_eq!(pw.chars().count(), 1);
        assert!(pw == "A" || pw == "B");
    }

    #[test]
    fn length_below_pool_count_stays_exact() {
        // base quota degenerates to zero extra draws; only the first seed
        // draw fits
        let first = ("upper", "QRS");
        let sel = selection(&[first, ("lower", "qrs")]);
        for seed in 0..32 {
            let mut rng = SplitMix64::seeded(seed);
            let pw = compose(1, &sel, &mut rng).unwrap();
            assert_eq!(pw.chars().count(), 1);
            let c = pw.chars().next().unwrap();
            assert!(first.1.contains(c));
        }
    }
}
