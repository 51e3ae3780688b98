//! `@placeholder` expansion inside template strings.
//!
//! A placeholder is `@name` or `@name(args)`. Arguments are read as a JSON
//! array, with single quotes accepted as string delimiters. Names are
//! case-insensitive. `\@` escapes a literal `@`.

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};

use crate::mock::random::{self, MAX_SAFE_INTEGER};

/// One placeholder occurrence found in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte range of the whole placeholder (including `@` and arguments).
    pub start: usize,
    pub end: usize,
    pub name: &'a str,
    pub args: Option<&'a str>,
}

/// Piece of a template string: literal text or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(String),
    Placeholder(Placeholder<'a>),
}

/// Split `text` into literal and placeholder segments.
pub fn scan(text: &str) -> Vec<Segment<'_>> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut i = 0;
    let mut literal_start = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'@') => {
                literal.push_str(&text[literal_start..i]);
                literal.push('@');
                i += 2;
                literal_start = i;
            }
            b'@' => {
                let name_start = i + 1;
                let name_len = text[name_start..]
                    .bytes()
                    .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
                    .count();
                if name_len == 0 {
                    i += 1;
                    continue;
                }
                let name_end = name_start + name_len;
                let (args, end) = match bytes.get(name_end) {
                    Some(b'(') => match text[name_end..].find(')') {
                        Some(close) => (
                            Some(&text[name_end + 1..name_end + close]),
                            name_end + close + 1,
                        ),
                        None => (None, name_end),
                    },
                    _ => (None, name_end),
                };

                literal.push_str(&text[literal_start..i]);
                if !literal.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(Placeholder {
                    start: i,
                    end,
                    name: &text[name_start..name_end],
                    args,
                }));
                i = end;
                literal_start = i;
            }
            _ => i += 1,
        }
    }

    literal.push_str(&text[literal_start..]);
    if !literal.is_empty() {
        segments.push(Segment::Text(literal));
    }
    segments
}

/// Parse a placeholder argument list.
pub fn parse_args(args: Option<&str>) -> Vec<Value> {
    let Some(args) = args.map(str::trim).filter(|args| !args.is_empty()) else {
        return Vec::new();
    };

    if let Ok(Value::Array(values)) = serde_json::from_str(&format!("[{}]", args)) {
        return values;
    }
    if let Ok(Value::Array(values)) = serde_json::from_str(&format!("[{}]", args.replace('\'', "\""))) {
        return values;
    }

    args.split(',')
        .map(|arg| {
            let arg = arg.trim().trim_matches(|c| c == '"' || c == '\'');
            serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
        })
        .collect()
}

struct Args(Vec<Value>);

impl Args {
    fn int(&self, index: usize) -> Option<i64> {
        match self.0.get(index)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn str(&self, index: usize) -> Option<&str> {
        self.0.get(index)?.as_str()
    }

    fn bool(&self, index: usize) -> Option<bool> {
        match self.0.get(index)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Evaluate a placeholder. Unknown names return `None`.
pub fn evaluate<R: Rng + ?Sized>(rng: &mut R, name: &str, args: Option<&str>) -> Option<Value> {
    let args = Args(parse_args(args));
    let name = name.to_lowercase();

    let value = match name.as_str() {
        "boolean" | "bool" => {
            let min = args.int(0).unwrap_or(1).max(0) as u32;
            let max = args.int(1).unwrap_or(1).max(0) as u32;
            let current = args.bool(2).unwrap_or(true);
            if args.len() >= 3 {
                json!(random::boolean(rng, min, max, current))
            } else {
                json!(rng.gen_bool(0.5))
            }
        }
        "natural" => json!(random::natural(
            rng,
            args.int(0).unwrap_or(0),
            args.int(1).unwrap_or(MAX_SAFE_INTEGER)
        )),
        "integer" | "int" => json!(random::integer(
            rng,
            args.int(0).unwrap_or(-MAX_SAFE_INTEGER),
            args.int(1).unwrap_or(MAX_SAFE_INTEGER)
        )),
        "float" => {
            let dmin = args.int(2).unwrap_or(0).clamp(0, 17) as u32;
            let dmax = args.int(3).unwrap_or(17).clamp(0, 17) as u32;
            json!(random::float(
                rng,
                args.int(0).unwrap_or(-MAX_SAFE_INTEGER),
                args.int(1).unwrap_or(MAX_SAFE_INTEGER),
                dmin,
                dmax.max(dmin)
            ))
        }
        "character" | "char" => json!(random::character(rng, args.str(0)).to_string()),
        "string" | "str" => {
            let (pool, numbers) = match args.str(0) {
                Some(pool) if args.int(0).is_none() => (Some(pool), 1),
                _ => (None, 0),
            };
            let (min, max) = match (args.int(numbers), args.int(numbers + 1)) {
                (Some(min), Some(max)) => (min, max),
                (Some(len), None) => (len, len),
                _ => (3, 7),
            };
            json!(random::string(rng, pool, min, max))
        }
        "range" => {
            let values = match (args.int(0), args.int(1), args.int(2)) {
                (Some(stop), None, _) => random::range(0, stop, 1),
                (Some(start), Some(stop), step) => random::range(start, stop, step.unwrap_or(1)),
                _ => Vec::new(),
            };
            json!(values)
        }
        "date" => json!(random::date(rng, args.str(0))),
        "time" => json!(random::time(rng, args.str(0))),
        "datetime" => json!(random::datetime(rng, args.str(0))),
        "now" => {
            const UNITS: &[&str] = &["year", "month", "day", "hour", "minute", "second"];
            let (unit, format) = match args.str(0) {
                Some(unit) if UNITS.contains(&unit) => (Some(unit), args.str(1)),
                other => (None, other),
            };
            json!(random::now(unit, format))
        }
        "guid" | "uuid" => json!(random::guid(rng)),
        "id" => json!(random::id(rng)),
        "increment" => json!(random::increment(args.int(0).unwrap_or(1).max(1) as u64)),
        "word" => {
            let (min, max) = bounds(&args, 3, 10);
            json!(random::word(rng, min, max))
        }
        "sentence" => {
            let (min, max) = bounds(&args, 12, 18);
            json!(random::sentence(rng, min, max))
        }
        "paragraph" => {
            let (min, max) = bounds(&args, 3, 7);
            json!(random::paragraph(rng, min, max))
        }
        "title" => {
            let (min, max) = bounds(&args, 3, 7);
            json!(random::title(rng, min, max))
        }
        "cword" => {
            let (pool, offset) = match args.str(0) {
                Some(pool) if args.int(0).is_none() => (Some(pool), 1),
                _ => (None, 0),
            };
            let (min, max) = match (args.int(offset), args.int(offset + 1)) {
                (Some(min), Some(max)) => (min, max),
                (Some(len), None) => (len, len),
                _ => (1, 1),
            };
            json!(random::cword(rng, pool, min, max))
        }
        "csentence" => {
            let (min, max) = bounds(&args, 12, 18);
            json!(random::csentence(rng, min, max))
        }
        "cparagraph" => {
            let (min, max) = bounds(&args, 3, 7);
            json!(random::cparagraph(rng, min, max))
        }
        "ctitle" => {
            let (min, max) = bounds(&args, 3, 7);
            json!(random::ctitle(rng, min, max))
        }
        "first" => json!(random::first(rng)),
        "last" => json!(random::last(rng)),
        "name" => json!(random::name(rng, args.bool(0).unwrap_or(false))),
        "cfirst" => json!(random::cfirst(rng)),
        "clast" => json!(random::clast(rng)),
        "cname" => json!(random::cname(rng)),
        "url" => json!(random::url(rng, args.str(0), args.str(1))),
        "protocol" => json!(random::protocol(rng)),
        "domain" => json!(random::domain(rng, args.str(0))),
        "tld" => json!(random::tld(rng)),
        "email" => json!(random::email(rng, args.str(0))),
        "ip" => json!(random::ip(rng)),
        "color" | "hex" => json!(random::hex(rng)),
        "rgb" => json!(random::rgb(rng)),
        "rgba" => json!(random::rgba(rng)),
        "hsl" => json!(random::hsl(rng)),
        "region" => json!(random::region(rng)),
        "province" => json!(random::province(rng)),
        "city" => json!(random::city(rng, args.bool(0).unwrap_or(false))),
        "county" => json!(random::county(rng, args.bool(0).unwrap_or(false))),
        "zip" => json!(random::zip(rng, args.int(0).unwrap_or(6).clamp(1, 32) as usize)),
        "image" | "img" => json!(random::image(rng, args.str(0), args.str(1), args.str(2))),
        "pick" => {
            let pool: Vec<Value> = match args.0.first() {
                Some(Value::Array(items)) => items.clone(),
                _ => args.0.clone(),
            };
            pool.choose(rng).cloned().unwrap_or(Value::Null)
        }
        "shuffle" => {
            let mut items = match args.0.first() {
                Some(Value::Array(items)) => items.clone(),
                _ => args.0.clone(),
            };
            items.shuffle(rng);
            Value::Array(items)
        }
        "upper" => json!(args.str(0).unwrap_or_default().to_uppercase()),
        "lower" => json!(args.str(0).unwrap_or_default().to_lowercase()),
        "capitalize" => json!(random::capitalize(args.str(0).unwrap_or_default())),
        _ => return None,
    };

    Some(value)
}

fn bounds(args: &Args, default_min: i64, default_max: i64) -> (i64, i64) {
    match (args.int(0), args.int(1)) {
        (Some(min), Some(max)) => (min, max),
        (Some(len), None) => (len, len),
        _ => (default_min, default_max),
    }
}

/// Render a placeholder value for string interpolation.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
