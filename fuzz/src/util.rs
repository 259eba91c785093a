/// Reinterprets the fuzzer input as little endian `i32` values, trailing bytes are ignored.
pub fn bytes_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Sorts `data` and checks the result against the standard library, once as
/// bytes and once as `i32` values built from the same input.
pub fn check_against_std(
    data: &[u8],
    mut sort_u8: impl FnMut(&mut [u8]),
    mut sort_i32: impl FnMut(&mut [i32]),
) {
    let mut v = data.to_vec();
    let mut expected = v.clone();
    expected.sort();
    sort_u8(&mut v);
    assert_eq!(v, expected);

    let mut v = bytes_as_i32(data);
    let mut expected = v.clone();
    expected.sort();
    sort_i32(&mut v);
    assert_eq!(v, expected);
}
