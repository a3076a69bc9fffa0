// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group};

// local imports
use super::ND;
use dotstar::{Frontier, Matcher};

criterion_group!(benches, bench);

const GROUP: &str = "matching";

const VARIANTS: [(&str, &str, &str, bool); 6] = [
    ("short", "_*", "_TEST", true),
    ("short", "_*", "TEST", false),
    ("long", "_*", "_TEST_SOME_VERY_VERY_LONG_NAME", true),
    ("long", "SOME_VERY_VERY_LONG_PREFIX_*", "SOME_VERY_VERY_LONG_PREFIX_AND_SOMEWHAT", true),
    ("long", "SOME_VERY_VERY_LONG_PREFIX_*", "TEST_SOME_VERY_VERY_LONG_NAME", false),
    ("stars", "*a*b*c*d*", "xxaxxbxxcxxdxxxxxxxxxxxxxxxxxxxxxxxxxx", true),
];

fn bench(c: &mut Criterion) {
    bench_with::<Matcher>(c, "dotstar");
    bench_with::<Reused>(c, "dotstar-reused");
    bench_with::<wildmatch::WildMatch>(c, "wildmatch");
    bench_with::<regex::Regex>(c, "regex");
}

fn bench_with<P: Pattern>(c: &mut Criterion, title: &str) {
    let mut c = c.benchmark_group(GROUP);
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    for (name, pattern, input, expected) in VARIANTS {
        let function = format!("{}{}{}", title, ND, "matches");
        let param = format!(
            "{}{}{}{}{}",
            name,
            ND,
            if expected { "pos" } else { "neg" },
            ND,
            input.len(),
        );
        let mut pattern = P::new(pattern);
        assert_eq!(pattern.matches(input), expected);

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new(function, param), |b| {
            b.iter_batched_ref(
                || String::from(input),
                |input| black_box(&mut pattern).matches(input),
                BatchSize::SmallInput,
            );
        });
    }
}

// ---

trait Pattern {
    fn new(pattern: &str) -> Self;
    fn matches(&mut self, input: &str) -> bool;
}

impl Pattern for Matcher {
    fn new(pattern: &str) -> Self {
        Matcher::new(pattern)
    }

    #[inline(always)]
    fn matches(&mut self, input: &str) -> bool {
        Matcher::matches(self, input)
    }
}

struct Reused(Matcher, Frontier);

impl Pattern for Reused {
    fn new(pattern: &str) -> Self {
        Self(Matcher::new(pattern), Frontier::new())
    }

    #[inline(always)]
    fn matches(&mut self, input: &str) -> bool {
        self.0.matches_with(&mut self.1, input)
    }
}

impl Pattern for wildmatch::WildMatch {
    fn new(pattern: &str) -> Self {
        Self::new(&pattern.replace('.', "?"))
    }

    #[inline(always)]
    fn matches(&mut self, input: &str) -> bool {
        wildmatch::WildMatch::matches(self, input)
    }
}

impl Pattern for regex::Regex {
    fn new(pattern: &str) -> Self {
        let mut re = String::from("^(?s:");
        for ch in pattern.chars() {
            match ch {
                '.' => re.push('.'),
                '*' => re.push_str(".*"),
                _ => re.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4]))),
            }
        }
        re.push_str(")$");
        regex::Regex::new(&re).unwrap()
    }

    #[inline(always)]
    fn matches(&mut self, input: &str) -> bool {
        self.is_match(input)
    }
}
