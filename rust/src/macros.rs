//! Constructor generation for naturally ordered element types.

/// Generates `<orientation>_heap` and `<orientation>_heap_from` constructors
/// that use `Ord::cmp` as the comparator.
macro_rules! natural_order_constructors {
    ($($orientation:ident => $variant:ident),* $(,)?) => {
        paste::paste! {
            impl<T: Ord> $crate::types::PriorityQueue<T, $crate::types::NaturalOrder<T>> {
                $(
                    #[doc = "Create an empty " $orientation "-heap ordered by `Ord::cmp`."]
                    pub fn [<$orientation _heap>](
                        capacity: usize,
                        mode: $crate::types::ConstructionMode,
                    ) -> $crate::error::InitResult<Self> {
                        Self::new(
                            capacity,
                            $crate::types::Orientation::$variant,
                            mode,
                            <T as Ord>::cmp as $crate::types::NaturalOrder<T>,
                        )
                    }

                    #[doc = "Create a " $orientation "-heap ordered by `Ord::cmp`, bulk-loaded from `items`."]
                    pub fn [<$orientation _heap_from>](
                        capacity: usize,
                        items: Vec<T>,
                        mode: $crate::types::ConstructionMode,
                    ) -> $crate::error::InitResult<Self> {
                        Self::from_items(
                            capacity,
                            items,
                            $crate::types::Orientation::$variant,
                            mode,
                            <T as Ord>::cmp as $crate::types::NaturalOrder<T>,
                        )
                    }
                )*
            }
        }
    };
}

natural_order_constructors! {
    min => Min,
    max => Max,
}
