#![no_main]

use libfuzzer_sys::fuzz_target;

use smoothsort_comp::unstable::rust_smoothsort as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    test_sort::sort(&mut v);
    assert!(v.windows(2).all(|w| w[0] <= w[1]));

    fuzz_util::check_sort(data, |v, compare| test_sort::sort_by(v, compare));
});
