//! Template key rules: `name|min-max`, `name|count`, `name|min-max.dmin-dmax`,
//! `name|+step`.

use rand::Rng;

/// A rule parsed from a template key, before any randomness is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleSpec {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub dmin: Option<u32>,
    pub dmax: Option<u32>,
    pub step: Option<i64>,
}

/// A rule with its counts drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rule {
    pub spec: RuleSpec,
    /// `min`, or a value drawn from `min..=max`.
    pub count: Option<i64>,
    /// `dmin`, or a value drawn from `dmin..=dmax`.
    pub dcount: Option<u32>,
}

impl RuleSpec {
    /// Draw the counts.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Rule {
        let count = self.min.map(|min| match self.max {
            Some(max) if max >= min => rng.gen_range(min..=max),
            Some(max) => rng.gen_range(max..=min),
            None => min,
        });
        let dcount = self.dmin.map(|dmin| match self.dmax {
            Some(dmax) if dmax >= dmin => rng.gen_range(dmin..=dmax),
            Some(dmax) => rng.gen_range(dmax..=dmin),
            None => dmin,
        });
        Rule {
            spec: *self,
            count,
            dcount,
        }
    }
}

/// Split a template key into its name and rule. Keys without `|` have no rule.
pub fn parse_key(key: &str) -> (&str, RuleSpec) {
    match key.rfind('|') {
        Some(pos) if pos > 0 => (&key[..pos], parse_rule(&key[pos + 1..])),
        _ => (key, RuleSpec::default()),
    }
}

/// Parse the text after `|`. Text that is not a rule yields an empty rule.
pub fn parse_rule(rule: &str) -> RuleSpec {
    let rule = rule.trim();
    let mut spec = RuleSpec::default();

    if let Some(step) = rule.strip_prefix('+') {
        if let Ok(step) = step.parse::<i64>() {
            spec.step = Some(step);
            return spec;
        }
    }

    let (int_part, dec_part) = match rule.find('.') {
        Some(pos) => (&rule[..pos], Some(&rule[pos + 1..])),
        None => (rule, None),
    };

    if let Some((min, max)) = parse_int_range(int_part) {
        spec.min = Some(min);
        spec.max = max;
    }

    if let Some((dmin, dmax)) = dec_part.and_then(parse_decimal_range) {
        spec.dmin = Some(dmin);
        spec.dmax = dmax;
    }

    spec
}

/// `5`, `1-10`, `-5--1`, `+3`.
fn parse_int_range(text: &str) -> Option<(i64, Option<i64>)> {
    let (min, rest) = take_signed(text)?;
    if rest.is_empty() {
        return Some((min, None));
    }
    let rest = rest.strip_prefix('-')?;
    if rest.is_empty() {
        return Some((min, None));
    }
    let (max, rest) = take_signed(rest)?;
    rest.is_empty().then_some((min, Some(max)))
}

/// `2`, `1-3`.
fn parse_decimal_range(text: &str) -> Option<(u32, Option<u32>)> {
    match text.split_once('-') {
        Some((dmin, "")) => Some((dmin.parse().ok()?, None)),
        Some((dmin, dmax)) => Some((dmin.parse().ok()?, Some(dmax.parse().ok()?))),
        None => Some((text.parse().ok()?, None)),
    }
}

fn take_signed(text: &str) -> Option<(i64, &str)> {
    let sign_len = usize::from(text.starts_with('+') || text.starts_with('-'));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    let end = sign_len + digits;
    let value = text[..end].trim_start_matches('+').parse().ok()?;
    Some((value, &text[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_key_without_rule() {
        assert_eq!(parse_key("name"), ("name", RuleSpec::default()));
        assert_eq!(parse_key("|odd"), ("|odd", RuleSpec::default()));
    }

    #[test]
    fn test_parse_range_and_count() {
        let (name, spec) = parse_key("age|18-60");
        assert_eq!(name, "age");
        assert_eq!((spec.min, spec.max), (Some(18), Some(60)));

        let (_, spec) = parse_key("list|5");
        assert_eq!((spec.min, spec.max), (Some(5), None));

        let (_, spec) = parse_key("t|-5--1");
        assert_eq!((spec.min, spec.max), (Some(-5), Some(-1)));
    }

    #[test]
    fn test_parse_decimal() {
        let (_, spec) = parse_key("price|1-100.1-3");
        assert_eq!((spec.min, spec.max), (Some(1), Some(100)));
        assert_eq!((spec.dmin, spec.dmax), (Some(1), Some(3)));

        let (_, spec) = parse_key("ratio|1.2");
        assert_eq!((spec.dmin, spec.dmax), (Some(2), None));
    }

    #[test]
    fn test_parse_step() {
        let (name, spec) = parse_key("id|+1");
        assert_eq!(name, "id");
        assert_eq!(spec.step, Some(1));
        assert_eq!(spec.min, None);
    }

    #[test]
    fn test_garbage_rule_is_empty() {
        let (name, spec) = parse_key("a|b|xyz");
        assert_eq!(name, "a|b");
        assert_eq!(spec, RuleSpec::default());
    }

    #[test]
    fn test_resolve_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let spec = parse_rule("3-6.1-2");
        for _ in 0..100 {
            let rule = spec.resolve(&mut rng);
            assert!((3..=6).contains(&rule.count.unwrap()));
            assert!((1..=2).contains(&rule.dcount.unwrap()));
        }
    }
}
