//! Strategy: `Sorter` delegates to whichever sorting algorithm is plugged in.
//! Both strategies sort in place into ascending order.

use itertools::Itertools;

use crate::console::Console;

pub trait SortStrategy {
    fn name(&self) -> &'static str;
    fn sort(&self, data: &mut [i32]);
}

/// Adjacent-swap passes. Stable, O(n^2).
#[derive(Debug, Default)]
pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn sort(&self, data: &mut [i32]) {
        let len = data.len();
        for pass in 0..len {
            let mut swapped = false;
            for j in 0..len - pass - 1 {
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }
}

/// Hoare-style partition around the middle element. Not stable.
#[derive(Debug, Default)]
pub struct QuickSort;

impl QuickSort {
    fn quick_sort(data: &mut [i32]) {
        if data.len() <= 1 {
            return;
        }

        let pivot = data[(data.len() - 1) / 2];
        let mut i = 0;
        let mut j = data.len() - 1;
        loop {
            while data[i] < pivot {
                i += 1;
            }
            while data[j] > pivot {
                j -= 1;
            }
            if i >= j {
                break;
            }
            data.swap(i, j);
            i += 1;
            j -= 1;
        }

        // `j` is the last index of the left part; the pivot value bounds both scans.
        let (left, right) = data.split_at_mut(j + 1);
        Self::quick_sort(left);
        Self::quick_sort(right);
    }
}

impl SortStrategy for QuickSort {
    fn name(&self) -> &'static str {
        "quicksort"
    }

    fn sort(&self, data: &mut [i32]) {
        Self::quick_sort(data);
    }
}

/// The context. With no strategy set, `sort` leaves the data alone.
#[derive(Default)]
pub struct Sorter {
    strategy: Option<Box<dyn SortStrategy>>,
}

impl Sorter {
    pub fn new(strategy: Box<dyn SortStrategy>) -> Self {
        Sorter {
            strategy: Some(strategy),
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn sort(&self, data: &mut [i32], out: &dyn Console) {
        out.line("Before sorting:");
        out.line(&data.iter().join(" "));

        match &self.strategy {
            Some(strategy) => {
                tracing::debug!(strategy = strategy.name(), len = data.len(), "sorting");
                strategy.sort(data);
            }
            None => tracing::debug!("no sort strategy set, leaving data untouched"),
        }

        out.line("After sorting:");
        out.line(&data.iter().join(" "));
    }
}

pub fn demo(out: &dyn Console) {
    let mut sorter = Sorter::new(Box::new(BubbleSort));
    let mut data = vec![5, 3, 8, 1, 2];
    sorter.sort(&mut data, out);

    sorter.set_strategy(Box::new(QuickSort));
    let mut data = vec![9, -4, 7, 7, 0, 3, 12, 1];
    sorter.sort(&mut data, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use proptest::prelude::*;

    fn sorted_with(strategy: &dyn SortStrategy, mut data: Vec<i32>) -> Vec<i32> {
        strategy.sort(&mut data);
        data
    }

    #[test]
    fn test_known_input_both_strategies() {
        assert_eq!(sorted_with(&BubbleSort, vec![5, 3, 8, 1, 2]), vec![1, 2, 3, 5, 8]);
        assert_eq!(sorted_with(&QuickSort, vec![5, 3, 8, 1, 2]), vec![1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        for strategy in [&BubbleSort as &dyn SortStrategy, &QuickSort] {
            assert_eq!(sorted_with(strategy, vec![]), Vec::<i32>::new());
            assert_eq!(sorted_with(strategy, vec![42]), vec![42]);
        }
    }

    #[test]
    fn test_duplicates_and_extremes() {
        let input = vec![i32::MAX, 0, i32::MIN, 0, -1, i32::MAX];
        let expected = vec![i32::MIN, -1, 0, 0, i32::MAX, i32::MAX];
        assert_eq!(sorted_with(&BubbleSort, input.clone()), expected);
        assert_eq!(sorted_with(&QuickSort, input), expected);
    }

    #[test]
    fn test_sorter_prints_before_and_after() {
        let out = MemoryConsole::new();
        let sorter = Sorter::new(Box::new(QuickSort));
        let mut data = vec![3, 1, 2];
        sorter.sort(&mut data, &out);

        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(
            out.lines(),
            vec!["Before sorting:", "3 1 2", "After sorting:", "1 2 3"]
        );
    }

    #[test]
    fn test_sorter_without_strategy_leaves_data() {
        let out = MemoryConsole::new();
        let mut data = vec![2, 1];
        Sorter::default().sort(&mut data, &out);
        assert_eq!(data, vec![2, 1]);
        assert_eq!(out.lines()[3], "2 1");
    }

    proptest! {
        #[test]
        fn prop_strategies_agree_with_std_sort(data in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut expected = data.clone();
            expected.sort();

            prop_assert_eq!(sorted_with(&BubbleSort, data.clone()), expected.clone());
            prop_assert_eq!(sorted_with(&QuickSort, data), expected);
        }

        #[test]
        fn prop_small_domain_many_duplicates(data in prop::collection::vec(0i32..4, 0..64)) {
            let bubble = sorted_with(&BubbleSort, data.clone());
            let quick = sorted_with(&QuickSort, data);
            prop_assert_eq!(bubble, quick);
        }
    }
}
