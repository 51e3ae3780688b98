//! Random value generators behind the `@placeholder` names.
//!
//! Every generator takes the caller's RNG so tests can seed it.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Timelike, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Builder;

use crate::mock::dict;

/// Largest integer that round-trips through a JSON number unchanged.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Upper bound on any generated length or repeat count.
pub const MAX_REPEAT: usize = 10_000;

static INCREMENT: AtomicU64 = AtomicU64::new(0);

// ---- basic ---------------------------------------------------------------

/// `true` with probability `min / (min + max)`, otherwise `!current`.
pub fn boolean<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32, current: bool) -> bool {
    let min = min as f64;
    let max = max as f64;
    if min + max <= 0.0 {
        return current;
    }
    if rng.gen::<f64>() < min / (min + max) {
        current
    } else {
        !current
    }
}

pub fn integer<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    if min <= max {
        rng.gen_range(min..=max)
    } else {
        rng.gen_range(max..=min)
    }
}

pub fn natural<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    integer(rng, min.max(0), max.max(0))
}

/// A length in `min..=max`, clamped to `0..=MAX_REPEAT`.
pub fn length<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> usize {
    natural(rng, min, max).min(MAX_REPEAT as i64) as usize
}

/// A float whose integer part lies in `min..=max` with `dmin..=dmax` decimals.
///
/// The last decimal digit is never zero, so the decimal count survives
/// serialization.
pub fn float<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64, dmin: u32, dmax: u32) -> f64 {
    let whole = integer(rng, min, max);
    let decimals = integer(rng, dmin.min(17) as i64, dmax.min(17) as i64) as usize;
    with_decimals(rng, whole, decimals)
}

/// Append `decimals` random digits to `whole`.
pub fn with_decimals<R: Rng + ?Sized>(rng: &mut R, whole: i64, decimals: usize) -> f64 {
    if decimals == 0 {
        return whole as f64;
    }
    let mut digits = String::with_capacity(decimals);
    for i in 0..decimals {
        let digit = if i + 1 == decimals {
            rng.gen_range(1..=9)
        } else {
            rng.gen_range(0..=9)
        };
        digits.push(char::from(b'0' + digit as u8));
    }
    let sign = if whole < 0 { "-" } else { "" };
    format!("{}{}.{}", sign, whole.unsigned_abs(), digits)
        .parse()
        .unwrap_or(whole as f64)
}

/// One character from a named pool (`lower`, `upper`, `number`, `symbol`,
/// `alpha`) or from the given characters.
pub fn character<R: Rng + ?Sized>(rng: &mut R, pool: Option<&str>) -> char {
    let pool = match pool.map(str::to_lowercase).as_deref() {
        Some("lower") => dict::LOWER.to_string(),
        Some("upper") => dict::UPPER.to_string(),
        Some("number") => dict::NUMBER.to_string(),
        Some("symbol") => dict::SYMBOL.to_string(),
        Some("alpha") => format!("{}{}", dict::LOWER, dict::UPPER),
        Some(custom) if !custom.is_empty() => pool.unwrap_or_default().to_string(),
        _ => format!("{}{}{}{}", dict::LOWER, dict::UPPER, dict::NUMBER, dict::SYMBOL),
    };
    let chars: Vec<char> = pool.chars().collect();
    chars.choose(rng).copied().unwrap_or('a')
}

pub fn string<R: Rng + ?Sized>(rng: &mut R, pool: Option<&str>, min: i64, max: i64) -> String {
    let len = length(rng, min, max);
    (0..len).map(|_| character(rng, pool)).collect()
}

/// `start..stop` by `step`, like Python's `range`, at most `MAX_REPEAT` items.
pub fn range(start: i64, stop: i64, step: i64) -> Vec<i64> {
    if step == 0 {
        return Vec::new();
    }
    let mut values = Vec::new();
    let mut current = start;
    while values.len() < MAX_REPEAT && ((step > 0 && current < stop) || (step < 0 && current > stop))
    {
        values.push(current);
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    values
}

// ---- date ----------------------------------------------------------------

/// Format tokens, longest first: `yyyy yy y MM M dd d HH H hh h mm m ss s SS S A a T`.
const DATE_TOKENS: &[&str] = &[
    "yyyy", "yy", "y", "MM", "M", "dd", "d", "HH", "H", "hh", "h", "mm", "m", "ss", "s", "SS",
    "S", "A", "a", "T",
];

/// Format `moment` with date tokens; any other text is copied through.
pub fn format_moment(moment: &NaiveDateTime, pattern: &str) -> String {
    let mut out = String::new();
    let mut rest = pattern;
    'outer: while !rest.is_empty() {
        for token in DATE_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                let piece = match *token {
                    "yyyy" | "y" => moment.format("%Y").to_string(),
                    "yy" => moment.format("%y").to_string(),
                    "MM" => moment.format("%m").to_string(),
                    "M" => moment.format("%-m").to_string(),
                    "dd" => moment.format("%d").to_string(),
                    "d" => moment.format("%-d").to_string(),
                    "HH" => moment.format("%H").to_string(),
                    "H" => moment.format("%-H").to_string(),
                    "hh" => moment.format("%I").to_string(),
                    "h" => moment.format("%-I").to_string(),
                    "mm" => moment.format("%M").to_string(),
                    "m" => moment.format("%-M").to_string(),
                    "ss" => moment.format("%S").to_string(),
                    "s" => moment.format("%-S").to_string(),
                    "SS" => moment.format("%3f").to_string(),
                    "S" => moment.and_utc().timestamp_subsec_millis().to_string(),
                    "A" => moment.format("%p").to_string(),
                    "a" => moment.format("%P").to_string(),
                    _ => moment.and_utc().timestamp_millis().to_string(),
                };
                out.push_str(&piece);
                rest = tail;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}

/// A random moment between the epoch and now, UTC.
pub fn moment<R: Rng + ?Sized>(rng: &mut R) -> NaiveDateTime {
    let now = Utc::now().timestamp_millis().max(1);
    DateTime::from_timestamp_millis(rng.gen_range(0..=now))
        .map(|moment| moment.naive_utc())
        .unwrap_or_default()
}

pub fn date<R: Rng + ?Sized>(rng: &mut R, format: Option<&str>) -> String {
    format_moment(&moment(rng), format.unwrap_or("yyyy-MM-dd"))
}

pub fn time<R: Rng + ?Sized>(rng: &mut R, format: Option<&str>) -> String {
    format_moment(&moment(rng), format.unwrap_or("HH:mm:ss"))
}

pub fn datetime<R: Rng + ?Sized>(rng: &mut R, format: Option<&str>) -> String {
    format_moment(&moment(rng), format.unwrap_or("yyyy-MM-dd HH:mm:ss"))
}

/// Truncate `moment` to the start of `unit` (year, month, week, day, hour,
/// minute, second). Unknown units leave it unchanged.
pub fn truncate_moment(moment: NaiveDateTime, unit: &str) -> NaiveDateTime {
    let day = moment.date();
    let truncated = match unit {
        "year" => NaiveDate::from_ymd_opt(day.year(), 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0)),
        "month" => {
            NaiveDate::from_ymd_opt(day.year(), day.month(), 1).and_then(|d| d.and_hms_opt(0, 0, 0))
        }
        "week" => (day - Days::new(u64::from(day.weekday().num_days_from_sunday())))
            .and_hms_opt(0, 0, 0),
        "day" => day.and_hms_opt(0, 0, 0),
        "hour" => day.and_hms_opt(moment.hour(), 0, 0),
        "minute" => day.and_hms_opt(moment.hour(), moment.minute(), 0),
        "second" => day.and_hms_opt(moment.hour(), moment.minute(), moment.second()),
        _ => None,
    };
    truncated.unwrap_or(moment)
}

/// The current time, optionally truncated to `unit`.
pub fn now(unit: Option<&str>, format: Option<&str>) -> String {
    let moment = truncate_moment(Utc::now().naive_utc(), unit.unwrap_or(""));
    format_moment(&moment, format.unwrap_or("yyyy-MM-dd HH:mm:ss"))
}

// ---- helpers ---------------------------------------------------------------

pub fn guid<R: Rng + ?Sized>(rng: &mut R) -> String {
    Builder::from_random_bytes(rng.gen()).into_uuid().to_string()
}

/// An 18 digit resident identity number with a valid check digit.
pub fn id<R: Rng + ?Sized>(rng: &mut R) -> String {
    const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
    const CHECK: &[u8; 11] = b"10X98765432";

    let region = rng.gen_range(110_000..=659_999);
    let birth = format_moment(&moment(rng), "yyyyMMdd");
    let serial = rng.gen_range(0..1000);
    let body = format!("{:06}{}{:03}", region, birth, serial);

    let sum: u32 = body
        .bytes()
        .zip(WEIGHTS.iter())
        .map(|(b, w)| u32::from(b - b'0') * w)
        .sum();
    format!("{}{}", body, char::from(CHECK[(sum % 11) as usize]))
}

/// A process-wide counter, advanced by `step` on each call.
pub fn increment(step: u64) -> u64 {
    INCREMENT.fetch_add(step, Ordering::Relaxed).wrapping_add(step)
}

// ---- text ------------------------------------------------------------------

pub fn word<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> String {
    string(rng, Some("lower"), min, max)
}

pub fn sentence<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> String {
    let count = length(rng, min, max).max(1);
    let words: Vec<String> = (0..count).map(|_| word(rng, 3, 10)).collect();
    format!("{}.", capitalize(&words.join(" ")))
}

pub fn paragraph<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> String {
    let count = length(rng, min, max).max(1);
    (0..count)
        .map(|_| sentence(rng, 12, 18))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn title<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> String {
    let count = length(rng, min, max).max(1);
    (0..count)
        .map(|_| capitalize(&word(rng, 3, 10)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn cword<R: Rng + ?Sized>(rng: &mut R, pool: Option<&str>, min: i64, max: i64) -> String {
    let chars: Vec<char> = pool.unwrap_or(dict::CHINESE_CHARS).chars().collect();
    let len = length(rng, min, max);
    (0..len).filter_map(|_| chars.choose(rng).copied()).collect()
}

pub fn csentence<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> String {
    format!("{}。", cword(rng, None, min, max))
}

pub fn cparagraph<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> String {
    let count = length(rng, min, max).max(1);
    (0..count).map(|_| csentence(rng, 12, 18)).collect()
}

pub fn ctitle<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> String {
    cword(rng, None, min, max)
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---- names -----------------------------------------------------------------

fn pick_str<R: Rng + ?Sized>(rng: &mut R, items: &[&str]) -> String {
    items.choose(rng).copied().unwrap_or_default().to_string()
}

pub fn first<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick_str(rng, dict::FIRST_NAMES)
}

pub fn last<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick_str(rng, dict::LAST_NAMES)
}

pub fn name<R: Rng + ?Sized>(rng: &mut R, middle: bool) -> String {
    if middle {
        format!("{} {} {}", first(rng), first(rng), last(rng))
    } else {
        format!("{} {}", first(rng), last(rng))
    }
}

pub fn cfirst<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick_str(rng, dict::CHINESE_LAST_NAMES)
}

pub fn clast<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick_str(rng, dict::CHINESE_FIRST_NAMES)
}

pub fn cname<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", cfirst(rng), clast(rng))
}

// ---- web -------------------------------------------------------------------

pub fn tld<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick_str(rng, dict::TLDS)
}

pub fn protocol<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick_str(rng, dict::PROTOCOLS)
}

pub fn domain<R: Rng + ?Sized>(rng: &mut R, tld_name: Option<&str>) -> String {
    let tld_name = tld_name.map(str::to_string).unwrap_or_else(|| tld(rng));
    format!("{}.{}", word(rng, 3, 10), tld_name)
}

pub fn url<R: Rng + ?Sized>(rng: &mut R, protocol_name: Option<&str>, host: Option<&str>) -> String {
    let protocol_name = protocol_name
        .map(str::to_string)
        .unwrap_or_else(|| protocol(rng));
    let host = host.map(str::to_string).unwrap_or_else(|| domain(rng, None));
    format!("{}://{}/{}", protocol_name, host, word(rng, 3, 10))
}

pub fn email<R: Rng + ?Sized>(rng: &mut R, domain_name: Option<&str>) -> String {
    let domain_name = domain_name
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}.{}", word(rng, 3, 10), tld(rng)));
    format!("{}{}@{}", character(rng, Some("lower")), word(rng, 2, 6), domain_name)
}

pub fn ip<R: Rng + ?Sized>(rng: &mut R) -> String {
    let octets: Vec<String> = (0..4).map(|_| rng.gen_range(0..=255u8).to_string()).collect();
    octets.join(".")
}

// ---- color -----------------------------------------------------------------

pub fn hex<R: Rng + ?Sized>(rng: &mut R) -> String {
    let (r, g, b): (u8, u8, u8) = rng.gen();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

pub fn rgb<R: Rng + ?Sized>(rng: &mut R) -> String {
    let (r, g, b): (u8, u8, u8) = rng.gen();
    format!("rgb({}, {}, {})", r, g, b)
}

pub fn rgba<R: Rng + ?Sized>(rng: &mut R) -> String {
    let (r, g, b): (u8, u8, u8) = rng.gen();
    let alpha = with_decimals(rng, 0, 2);
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

pub fn hsl<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "hsl({}, {}, {})",
        rng.gen_range(0..360),
        rng.gen_range(0..=100),
        rng.gen_range(0..=100)
    )
}

// ---- address ---------------------------------------------------------------

pub fn region<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick_str(rng, dict::REGIONS)
}

pub fn province<R: Rng + ?Sized>(rng: &mut R) -> String {
    dict::PROVINCES
        .choose(rng)
        .map(|(province, _)| province.to_string())
        .unwrap_or_default()
}

pub fn city<R: Rng + ?Sized>(rng: &mut R, prefix: bool) -> String {
    let Some((province, cities)) = dict::PROVINCES.choose(rng) else {
        return String::new();
    };
    let city = cities.choose(rng).copied().unwrap_or(*province);
    if prefix {
        format!("{} {}", province, city)
    } else {
        city.to_string()
    }
}

pub fn county<R: Rng + ?Sized>(rng: &mut R, prefix: bool) -> String {
    let county = pick_str(rng, dict::COUNTIES);
    if prefix {
        format!("{} {}", city(rng, true), county)
    } else {
        county
    }
}

pub fn zip<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..=9u8)))
        .collect()
}

// ---- image -----------------------------------------------------------------

pub fn image<R: Rng + ?Sized>(
    rng: &mut R,
    size: Option<&str>,
    background: Option<&str>,
    text: Option<&str>,
) -> String {
    const SIZES: &[&str] = &["300x250", "250x250", "240x400", "336x280", "180x150", "720x300"];
    let size = size.map(str::to_string).unwrap_or_else(|| pick_str(rng, SIZES));
    let mut url = format!("http://dummyimage.com/{}", size);
    if let Some(background) = background {
        url.push('/');
        url.push_str(background.trim_start_matches('#'));
    }
    if let Some(text) = text {
        url.push_str("&text=");
        url.push_str(text);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_integer_bounds_either_order() {
        let mut rng = rng();
        for _ in 0..200 {
            assert!((18..=60).contains(&integer(&mut rng, 18, 60)));
            assert!((18..=60).contains(&integer(&mut rng, 60, 18)));
        }
    }

    #[test]
    fn test_float_keeps_decimal_count() {
        let mut rng = rng();
        for _ in 0..50 {
            let value = float(&mut rng, 1, 10, 2, 2);
            let text = value.to_string();
            let decimals = text.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 2, "{text}");
            assert!((1.0..11.0).contains(&value));
        }
    }

    fn at_millis(ms: i64) -> NaiveDateTime {
        DateTime::from_timestamp_millis(ms).unwrap().naive_utc()
    }

    #[test]
    fn test_date_formatting() {
        // 2021-03-04 05:06:07.089 UTC
        let moment = at_millis(1_614_834_367_089);
        assert_eq!(format_moment(&moment, "yyyy-MM-dd HH:mm:ss"), "2021-03-04 05:06:07");
        assert_eq!(format_moment(&moment, "yy/M/d h:m A SS"), "21/3/4 5:6 AM 089");
        assert_eq!(format_moment(&moment, "T"), "1614834367089");
        assert_eq!(format_moment(&at_millis(0), "yyyy-MM-dd"), "1970-01-01");
        assert_eq!(format_moment(&at_millis(0), "100% d"), "100% 1");
    }

    #[test]
    fn test_generated_dates_parse_in_default_formats() {
        let mut rng = rng();
        for _ in 0..20 {
            NaiveDate::parse_from_str(&date(&mut rng, None), "%Y-%m-%d").unwrap();
            chrono::NaiveTime::parse_from_str(&time(&mut rng, None), "%H:%M:%S").unwrap();
            NaiveDateTime::parse_from_str(&datetime(&mut rng, None), "%Y-%m-%d %H:%M:%S").unwrap();
        }
        let today = NaiveDateTime::parse_from_str(&now(Some("day"), None), "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!((today.hour(), today.minute(), today.second()), (0, 0, 0));
    }

    #[test]
    fn test_truncate_moment() {
        let moment = at_millis(1_614_834_367_089);
        assert_eq!(
            format_moment(&truncate_moment(moment, "month"), "yyyy-MM-dd HH:mm:ss"),
            "2021-03-01 00:00:00"
        );
        // 2021-03-04 was a Thursday.
        assert_eq!(
            format_moment(&truncate_moment(moment, "week"), "yyyy-MM-dd"),
            "2021-02-28"
        );
        assert_eq!(truncate_moment(moment, "fortnight"), moment);
    }

    #[test]
    fn test_guid_is_v4_uuid() {
        let value = guid(&mut rng());
        let parsed = uuid::Uuid::parse_str(&value).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(value.len(), 36);
    }

    #[test]
    fn test_id_check_digit() {
        let value = id(&mut rng());
        assert_eq!(value.len(), 18);
        assert!(value[..17].bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_cname_is_chinese() {
        let value = cname(&mut rng());
        assert!(value.chars().count() >= 2);
        assert!(value.chars().all(|c| !c.is_ascii()));
    }

    #[test]
    fn test_range_steps() {
        assert_eq!(range(0, 5, 2), vec![0, 2, 4]);
        assert_eq!(range(5, 0, -2), vec![5, 3, 1]);
        assert!(range(0, 5, 0).is_empty());
    }

    #[test]
    fn test_range_is_bounded() {
        assert_eq!(range(i64::MAX - 1, i64::MAX, 5), vec![i64::MAX - 1]);
        assert_eq!(range(i64::MIN + 1, i64::MIN, -5), vec![i64::MIN + 1]);
        assert_eq!(range(0, 9_000_000_000_000_000, 1).len(), MAX_REPEAT);
    }

    #[test]
    fn test_lengths_are_bounded() {
        let mut rng = rng();
        assert_eq!(string(&mut rng, Some("lower"), 1_000_000_000, 1_000_000_000).len(), MAX_REPEAT);
        assert_eq!(cword(&mut rng, None, i64::MAX, i64::MAX).chars().count(), MAX_REPEAT);
    }

    #[test]
    fn test_email_shape() {
        let value = email(&mut rng(), Some("example.com"));
        assert!(value.ends_with("@example.com"), "{value}");
    }

    #[test]
    fn test_increment_advances() {
        let a = increment(1);
        let b = increment(1);
        assert!(b > a);
    }
}
