#![no_main]
use libfuzzer_sys::fuzz_target;
use tierlog::fmt::{Arg, MAX_MESSAGE_LEN, Template};

fuzz_target!(|data: &str| {
    // Must not panic on any template string
    let template = Template::parse(data);

    let args = [
        Arg::from(-1),
        Arg::from(u64::MAX),
        Arg::from(f64::NAN),
        Arg::from('\u{10FFFF}'),
        Arg::from(data),
    ];
    for n in 0..=args.len() {
        let out = template.render(&args[..n]);
        assert!(out.len() <= MAX_MESSAGE_LEN);
    }
});
