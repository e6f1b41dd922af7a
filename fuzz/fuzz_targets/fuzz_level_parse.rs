#![no_main]
use libfuzzer_sys::fuzz_target;
use tierlog::Level;

fuzz_target!(|data: &str| {
    if let Ok(level) = data.parse::<Level>() {
        // Every accepted name round-trips through its canonical form
        assert_eq!(level.as_str().parse::<Level>(), Ok(level));
    }
});
