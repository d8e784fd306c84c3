//! Performance benchmarks for number resolution.
//!
//! These benchmarks measure how long it takes to turn chat input into a
//! validation outcome:
//! - E.164 input (direct parse)
//! - Local format with a country hint
//! - Free text that needs a scan
//! - Rendering a full lookup reply

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;
use twilio_lookup_bot::phone::{Leniency, NumberMatcher, NumberResolver};
use twilio_lookup_bot::render::{render_lookup, LookupResult};
use twilio_lookup_bot::{Carrier, CarrierInfo};

const INPUTS: &[(&str, &str)] = &[
    ("e164", "+15108675309"),
    ("local", "(510) 867-5309"),
    ("country_hint", "UK 020 8366 1177"),
    ("free_text", "Hey there - can you look up (510) 8675309?"),
    ("invalid", "+15556667777"),
    ("no_digits", "nothing to see here"),
];

fn bench_sanitize(c: &mut Criterion) {
    let resolver = NumberResolver::default();
    let mut group = c.benchmark_group("sanitize");

    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| resolver.sanitize(black_box(input)));
        });
    }

    group.finish();
}

fn bench_free_text_scan(c: &mut Criterion) {
    let long_message = "Meeting moved to 3pm, room 204. Call me at 510-867-5309 or my \
                        office on +44 20 8366 1177 if anything changes before 12/10.";
    let mut group = c.benchmark_group("free_text_scan");

    for leniency in [Leniency::Possible, Leniency::Valid] {
        let matcher = NumberMatcher::new(phonenumber::country::Id::US).with_leniency(leniency);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", leniency)),
            &long_message,
            |b, text| b.iter(|| matcher.find_all(black_box(text)).count()),
        );
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let result = LookupResult::Found(CarrierInfo {
        country_code: "US".to_string(),
        phone_number: "+15108675309".to_string(),
        national_format: "(510) 867-5309".to_string(),
        carrier: Some(Carrier {
            name: Some("Twilio".to_string()),
            carrier_type: Some("voip".to_string()),
            ..Carrier::default()
        }),
        ..CarrierInfo::default()
    });

    c.bench_function("render_lookup", |b| {
        b.iter(|| render_lookup(black_box("+15108675309"), black_box(&result)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_sanitize, bench_free_text_scan, bench_render
}

criterion_main!(benches);
