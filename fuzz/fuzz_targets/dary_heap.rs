#![no_main]

use libfuzzer_sys::fuzz_target;

use adaptive_sorts::dary_heap;
use adaptive_sorts_fuzz::check_against_std;

fuzz_target!(|data: &[u8]| {
    check_against_std(data, dary_heap::sort::<2, _>, dary_heap::sort::<2, _>);
    check_against_std(data, dary_heap::sort::<3, _>, dary_heap::sort::<5, _>);
});
