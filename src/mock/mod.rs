//! Mock data generation from JSON templates.
//!
//! # Data Flow
//! ```text
//! template (serde_json::Value)
//!     → rule.rs (parse `name|rule` keys)
//!     → Generator (walk the template, apply rules per value type)
//!     → placeholder.rs (expand `@name(args)` inside strings)
//!     → random.rs (value generators)
//!     → concrete serde_json::Value
//! ```
//!
//! # Template Rules
//! ```text
//! "name|min-max": "str"      repeat the string min..=max times
//! "name|count": "str"        repeat the string count times
//! "name|min-max": 1          integer in min..=max
//! "name|min-max.dmin-dmax"   float, integer part in range, dmin..=dmax decimals
//! "name|+step": 1            1, 1+step, 1+2*step ... within one generation
//! "name|1": true             50/50 true or false
//! "name|min-max": true       keeps the value with probability min/(min+max)
//! "name|count": {..}         count random properties
//! "name|1": [..]             one random element
//! "name|+1": [..]            elements in order, one per generation of the key
//! "name|min-max": [..]       the array contents repeated min..=max times
//! ```
//!
//! # Design Decisions
//! - Templates are never mutated; `+step` counters live for one generation,
//!   so concurrent requests share no state
//! - Unknown placeholders are left in the output verbatim
//! - Repeat counts and generated lengths are capped at `random::MAX_REPEAT`

mod dict;
pub mod placeholder;
pub mod random;
pub mod rule;

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{Map, Number, Value};

use crate::mock::placeholder::{evaluate, scan, to_text, Segment};
use crate::mock::random::MAX_REPEAT;
use crate::mock::rule::{parse_key, Rule, RuleSpec};

/// Generate one concrete value from `template` using the thread RNG.
pub fn generate(template: &Value) -> Value {
    Generator::new(rand::thread_rng()).generate(template)
}

/// Walks a template and produces concrete values.
pub struct Generator<R> {
    rng: R,
    /// `+step` counters, keyed by the address of the template value.
    steps: HashMap<usize, i64>,
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            steps: HashMap::new(),
        }
    }

    pub fn generate(&mut self, template: &Value) -> Value {
        self.steps.clear();
        self.value(template, RuleSpec::default())
    }

    fn value(&mut self, template: &Value, spec: RuleSpec) -> Value {
        let rule = spec.resolve(&mut self.rng);
        match template {
            Value::Null => Value::Null,
            Value::Bool(current) => Value::Bool(self.boolean(*current, &rule)),
            Value::Number(number) => self.number(template, number, &rule),
            Value::String(text) => self.string(text, &rule),
            Value::Array(items) => self.array(template, items, &rule),
            Value::Object(map) => self.object(map, &rule),
        }
    }

    /// Next `+step` index for `template`, starting at zero.
    fn next_step(&mut self, template: &Value) -> i64 {
        let counter = self.steps.entry(template as *const Value as usize).or_insert(0);
        let current = *counter;
        *counter += 1;
        current
    }

    fn boolean(&mut self, current: bool, rule: &Rule) -> bool {
        match rule.spec.min {
            Some(min) => {
                let max = rule.spec.max.unwrap_or(1);
                random::boolean(&mut self.rng, min.max(0) as u32, max.max(0) as u32, current)
            }
            None => current,
        }
    }

    fn number(&mut self, template: &Value, number: &Number, rule: &Rule) -> Value {
        if let Some(decimals) = rule.dcount {
            let whole = rule
                .count
                .unwrap_or_else(|| number.as_f64().unwrap_or(0.0).trunc() as i64);
            let value = random::with_decimals(&mut self.rng, whole, decimals.min(17) as usize);
            return Number::from_f64(value).map_or(Value::Null, Value::Number);
        }

        if let Some(step) = rule.spec.step {
            let k = self.next_step(template);
            return match number.as_i64() {
                Some(base) => Value::from(base.saturating_add(step.saturating_mul(k))),
                None => {
                    let base = number.as_f64().unwrap_or(0.0);
                    Number::from_f64(base + (step * k) as f64).map_or(Value::Null, Value::Number)
                }
            };
        }

        match rule.count {
            Some(count) => Value::from(count),
            None => Value::Number(number.clone()),
        }
    }

    fn string(&mut self, text: &str, rule: &Rule) -> Value {
        let source = match rule.count {
            Some(count) => text.repeat(count.clamp(0, MAX_REPEAT as i64) as usize),
            None => text.to_string(),
        };
        let segments = scan(&source);

        // A lone placeholder keeps the type of its value.
        if let [Segment::Placeholder(p)] = segments.as_slice() {
            if rule.count.is_none() {
                return evaluate(&mut self.rng, p.name, p.args)
                    .unwrap_or_else(|| Value::String(source[p.start..p.end].to_string()));
            }
        }

        let mut out = String::with_capacity(source.len());
        for segment in &segments {
            match segment {
                Segment::Text(literal) => out.push_str(literal),
                Segment::Placeholder(p) => match evaluate(&mut self.rng, p.name, p.args) {
                    Some(value) => out.push_str(&to_text(&value)),
                    None => out.push_str(&source[p.start..p.end]),
                },
            }
        }
        Value::String(out)
    }

    fn array(&mut self, template: &Value, items: &[Value], rule: &Rule) -> Value {
        if items.is_empty() {
            return Value::Array(Vec::new());
        }

        if let Some(step) = rule.spec.step {
            let k = self.next_step(template);
            let index = step.saturating_mul(k).rem_euclid(items.len() as i64) as usize;
            return self.value(&items[index], RuleSpec::default());
        }

        match (rule.spec.min, rule.spec.max) {
            (None, _) => Value::Array(
                items
                    .iter()
                    .map(|item| self.value(item, RuleSpec::default()))
                    .collect(),
            ),
            (Some(1), None) => {
                let index = self.rng.gen_range(0..items.len());
                self.value(&items[index], RuleSpec::default())
            }
            _ => {
                let count = rule.count.unwrap_or(0).clamp(0, MAX_REPEAT as i64) as usize;
                let mut out = Vec::with_capacity(count.saturating_mul(items.len()).min(MAX_REPEAT));
                for _ in 0..count {
                    for item in items {
                        out.push(self.value(item, RuleSpec::default()));
                    }
                }
                Value::Array(out)
            }
        }
    }

    fn object(&mut self, map: &Map<String, Value>, rule: &Rule) -> Value {
        let mut entries: Vec<(&String, &Value)> = map.iter().collect();
        if let Some(count) = rule.count {
            entries.shuffle(&mut self.rng);
            entries.truncate(count.clamp(0, entries.len() as i64) as usize);
        }

        let mut out = Map::with_capacity(entries.len());
        for (key, template) in entries {
            let (name, spec) = parse_key(key);
            let value = self.value(template, spec);
            out.insert(name.to_string(), value);
        }
        Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn generator() -> Generator<StdRng> {
        Generator::new(StdRng::seed_from_u64(2024))
    }

    #[test]
    fn test_user_template() {
        let template = json!({"name": "@cname", "age|18-60": 1});
        let mut gen = generator();
        for _ in 0..50 {
            let value = gen.generate(&template);
            assert!(value["name"].is_string());
            let age = value["age"].as_i64().unwrap();
            assert!((18..=60).contains(&age), "{age}");
            assert!(value.get("age|18-60").is_none());
        }
    }

    #[test]
    fn test_plain_values_pass_through() {
        let template = json!({"ok": true, "n": 3.5, "s": "hello", "none": null});
        assert_eq!(generator().generate(&template), template);
    }

    #[test]
    fn test_string_repeat() {
        let value = generator().generate(&json!({"stars|3": "★"}));
        assert_eq!(value["stars"], json!("★★★"));

        let value = generator().generate(&json!({"s|1-3": "ab"}));
        let len = value["s"].as_str().unwrap().len();
        assert!(len == 2 || len == 4 || len == 6);
    }

    #[test]
    fn test_lone_placeholder_keeps_type() {
        let value = generator().generate(&json!({
            "n": "@integer(1, 5)",
            "b": "@boolean",
            "text": "n=@integer(1, 5)",
            "unknown": "@nothing_here",
            "mixed": "id @nothing_here"
        }));
        assert!(value["n"].is_i64());
        assert!(value["b"].is_boolean());
        assert!(value["text"].as_str().unwrap().starts_with("n="));
        assert_eq!(value["unknown"], json!("@nothing_here"));
        assert_eq!(value["mixed"], json!("id @nothing_here"));
    }

    #[test]
    fn test_top_level_string_template() {
        let value = generator().generate(&json!("@cname"));
        assert!(value.is_string());
        assert!(!value.as_str().unwrap().starts_with('@'));
    }

    #[test]
    fn test_array_repeat_with_step() {
        let value = generator().generate(&json!({
            "list|4": [{"id|+1": 1, "tag": "x"}]
        }));
        let list = value["list"].as_array().unwrap();
        let ids: Vec<i64> = list.iter().map(|item| item["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_step_resets_between_generations() {
        let template = json!({"list|2": [{"id|+10": 100}]});
        let mut gen = generator();
        let first = gen.generate(&template);
        let second = gen.generate(&template);
        assert_eq!(first, second);
        assert_eq!(first["list"][1]["id"], json!(110));
    }

    #[test]
    fn test_array_pick_one() {
        let value = generator().generate(&json!({"color|1": ["red", "green", "blue"]}));
        let color = value["color"].as_str().unwrap();
        assert!(["red", "green", "blue"].contains(&color));
    }

    #[test]
    fn test_array_sequential_pick() {
        let value = generator().generate(&json!({
            "rows|3": [{"day|+1": ["mon", "tue"]}]
        }));
        let days: Vec<&str> = value["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["day"].as_str().unwrap())
            .collect();
        assert_eq!(days, vec!["mon", "tue", "mon"]);
    }

    #[test]
    fn test_array_range_repeat() {
        let value = generator().generate(&json!({"items|2-4": ["a", "b"]}));
        let len = value["items"].as_array().unwrap().len();
        assert!(len == 4 || len == 6 || len == 8);
    }

    #[test]
    fn test_object_pick_properties() {
        let value = generator().generate(&json!({
            "city|2": {"a": 1, "b": 2, "c": 3, "d": 4}
        }));
        assert_eq!(value["city"].as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_decimal_number() {
        let mut gen = generator();
        for _ in 0..20 {
            let value = gen.generate(&json!({"price|1-100.2": 1}));
            let price = value["price"].as_f64().unwrap();
            assert!((1.0..101.0).contains(&price));
            let text = price.to_string();
            assert_eq!(text.split('.').nth(1).map(str::len), Some(2), "{text}");
        }
    }

    #[test]
    fn test_boolean_probability_extremes() {
        let mut gen = generator();
        for _ in 0..20 {
            let value = gen.generate(&json!({"always|1-0": true}));
            assert_eq!(value["always"], json!(true));
        }
    }

    #[test]
    fn test_nested_templates() {
        let value = generator().generate(&json!({
            "data": {
                "total|10-20": 0,
                "users|2": [{"email": "@email", "tags|1-2": ["@word"]}]
            }
        }));
        let users = value["data"]["users"].as_array().unwrap();
        assert_eq!(users.len(), 2);
        for user in users {
            assert!(user["email"].as_str().unwrap().contains('@'));
            assert!(!user["tags"].as_array().unwrap().is_empty());
        }
    }

    #[test]
    fn test_repeat_counts_are_capped() {
        let value = generator().generate(&json!({
            "s|1000000000000": "ab",
            "items|1000000000000": ["a", "b"],
            "r": "@range(0, 9000000000000000)"
        }));
        assert_eq!(value["s"].as_str().unwrap().len(), 2 * MAX_REPEAT);
        assert_eq!(value["items"].as_array().unwrap().len(), 2 * MAX_REPEAT);
        assert_eq!(value["r"].as_array().unwrap().len(), MAX_REPEAT);
    }

    #[test]
    fn test_keys_keep_template_order() {
        let value = generator().generate(&json!({
            "name": "x",
            "age|1-1": 1,
            "zeta": 0,
            "alpha": "@word"
        }));
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "age", "zeta", "alpha"]);
    }

    #[test]
    fn test_thread_rng_entry_point() {
        let value = generate(&json!({"age|18-60": 1}));
        assert!((18..=60).contains(&value["age"].as_i64().unwrap()));
    }
}
