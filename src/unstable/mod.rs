// Smoothsort, one module per stretch size sequence.
pub mod rust_smoothsort;
pub mod rust_smoothsort_fib;
pub mod rust_smoothsort_pow2;

// Binary heap sorts, the reference point the smoothsort family is measured against.
pub mod rust_heapsort;
pub mod rust_heapsort_floyd;

pub mod rust_std;
