macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, L>(arr: &mut [T], compare: L)
            where
                L: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

// The shared heapify/extract machinery, instantiated per stretch size sequence by the
// rust_smoothsort* modules.
pub mod smoothsort;

pub mod unstable;

pub use sort_test_tools::Sort;
