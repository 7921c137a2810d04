#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, u8)| {
    let (text, m) = input;
    let m = usize::from(m % 8);

    // Gram count and width must hold for any text, including multi-byte characters
    let canonical = gramrank::utils::normalize(text, m);
    let len = canonical.chars().count();
    let grams: Vec<_> = gramrank::utils::mgrams(&canonical, m).collect();
    if m == 0 || len < m {
        assert!(grams.is_empty());
    } else {
        assert_eq!(grams.len(), len - m + 1);
        assert!(grams.iter().all(|(_, g)| g.chars().count() == m));
    }
});
