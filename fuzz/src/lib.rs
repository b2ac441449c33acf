use std::cmp::Ordering;

/// Reinterprets the input as little endian `i32`s, dropping a trailing partial value.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Sorts `data` both as bytes and as `i32`s and checks the result against the standard library.
///
/// A leading byte with the low bit set switches to a comparison function that flips every 7th
/// result. The output is unspecified then, but it must still hold exactly the input elements.
pub fn check_sort(data: &[u8], sort_by: fn(&mut [i32], &mut dyn FnMut(&i32, &i32) -> Ordering)) {
    let Some((&mode, rest)) = data.split_first() else {
        return;
    };

    let mut v = u8_as_i32(rest);
    let mut expected = v.clone();
    expected.sort_unstable();

    if mode & 1 == 0 {
        sort_by(&mut v, &mut |a, b| a.cmp(b));
        assert_eq!(v, expected);
    } else {
        let mut comp_count = 0usize;
        sort_by(&mut v, &mut |a, b| {
            comp_count += 1;
            if comp_count % 7 == 0 {
                b.cmp(a)
            } else {
                a.cmp(b)
            }
        });

        v.sort_unstable();
        assert_eq!(v, expected);
    }
}
