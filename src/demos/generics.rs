use crate::core::container::Container;
use crate::demos::collections::bracketed;
use crate::utils::section;

/// Exchanges `items[i]` and `items[j]`.
///
/// Out-of-range indices leave the slice untouched and return `false`; this is
/// not treated as an error.
pub fn swap<T>(items: &mut [T], i: usize, j: usize) -> bool {
    if i >= items.len() || j >= items.len() {
        return false;
    }
    items.swap(i, j);
    true
}

pub fn run() {
    section("🔧 Generics");

    let text = Container::new(String::from("Hello, Generics!"));
    let number = Container::new(42);
    println!("Text container: {}", text.value());
    println!("Number container: {}", number.value());
    println!("Described: {text} / {number}");

    let mut names = ["Alice", "Bob", "Carol"];
    let mut numbers = [1, 2, 3, 4, 5];

    println!("Names before swap: {}", bracketed(&names));
    swap(&mut names, 0, 2);
    println!("Names after swap: {}", bracketed(&names));

    println!("Numbers before swap: {}", bracketed(&numbers));
    swap(&mut numbers, 1, 3);
    println!("Numbers after swap: {}", bracketed(&numbers));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_first_and_last() {
        let mut items = ["a", "b", "c"];
        assert!(swap(&mut items, 0, 2));
        assert_eq!(items, ["c", "b", "a"]);
    }

    #[test]
    fn out_of_range_is_a_no_op() {
        let mut items = ["a", "b", "c"];
        assert!(!swap(&mut items, 0, 5));
        assert!(!swap(&mut items, 5, 1));
        assert_eq!(items, ["a", "b", "c"]);
    }

    #[test]
    fn same_index_keeps_the_slice() {
        let mut items = vec![1, 2, 3];
        assert!(swap(&mut items, 1, 1));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn empty_slice_never_swaps() {
        let mut items: [u8; 0] = [];
        assert!(!swap(&mut items, 0, 0));
    }
}
