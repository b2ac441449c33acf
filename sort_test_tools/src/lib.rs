pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, L>(arr: &mut [T], compare: L)
    where
        L: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
pub mod value_types;
