#![no_main]

use libfuzzer_sys::fuzz_target;

use adaptive_sorts::drop_merge;
use adaptive_sorts_fuzz::check_against_std;

fuzz_target!(|data: &[u8]| {
    check_against_std(data, drop_merge::sort, drop_merge::sort);
});
