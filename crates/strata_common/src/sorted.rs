//! Binary-search utilities over sorted slices.

/// Iterates the entries of `sorted` whose key starts with `prefix`, excluding
/// an entry whose key equals `prefix` exactly.
///
/// `sorted` must be sorted ascending by `key`. The prefix is binary-searched,
/// resolving to either the exact index or the insertion point; scanning then
/// proceeds forward while keys keep the prefix. Cost is O(log n + m) for m
/// matches.
///
/// When several entries share the exact key, only the one the binary search
/// lands on is excluded; the caller is responsible for key uniqueness if that
/// distinction matters.
pub fn strict_prefix_range<'a, T, K>(
    sorted: &'a [T],
    prefix: &'a str,
    key: K,
) -> impl Iterator<Item = &'a T>
where
    K: Fn(&'a T) -> &'a str + 'a,
{
    let start = match sorted.binary_search_by(|entry| key(entry).cmp(prefix)) {
        // The exact match sorts equal to the prefix, not after it; skip it.
        Ok(exact) => exact + 1,
        Err(insertion) => insertion,
    };
    sorted[start..]
        .iter()
        .take_while(move |&entry| key(entry).starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[&str], prefix: &str) -> Vec<String> {
        strict_prefix_range(entries, prefix, |e| e)
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn exact_match_is_excluded() {
        let sorted = ["Foo$bar", "Foo$bar$1", "Foo$bar$2"];
        assert_eq!(names(&sorted, "Foo$bar"), vec!["Foo$bar$1", "Foo$bar$2"]);
    }

    #[test]
    fn insertion_point_without_exact_match() {
        let sorted = ["Foo$bar$1", "Foo$bar$2", "Foo$baz"];
        assert_eq!(names(&sorted, "Foo$bar"), vec!["Foo$bar$1", "Foo$bar$2"]);
    }

    #[test]
    fn no_matching_entries() {
        let sorted = ["Alpha", "Beta", "Gamma"];
        assert!(names(&sorted, "Delta").is_empty());
    }

    #[test]
    fn empty_slice() {
        let sorted: [&str; 0] = [];
        assert!(names(&sorted, "anything").is_empty());
    }

    #[test]
    fn prefix_past_all_entries() {
        let sorted = ["a", "b", "c"];
        assert!(names(&sorted, "z").is_empty());
    }

    #[test]
    fn prefix_before_all_entries() {
        let sorted = ["b1", "b2"];
        assert!(names(&sorted, "a").is_empty());
    }

    #[test]
    fn all_entries_match() {
        let sorted = ["p$1", "p$2", "p$3"];
        assert_eq!(names(&sorted, "p"), vec!["p$1", "p$2", "p$3"]);
    }

    #[test]
    fn scan_stops_at_first_non_match() {
        let sorted = ["p$1", "p$2", "q$1"];
        assert_eq!(names(&sorted, "p"), vec!["p$1", "p$2"]);
    }

    #[test]
    fn works_with_keyed_tuples() {
        let sorted = [("a$1", 1), ("a$2", 2), ("b$1", 3)];
        let sum: i32 = strict_prefix_range(&sorted, "a", |(k, _)| k)
            .map(|(_, v)| v)
            .sum();
        assert_eq!(sum, 3);
    }
}
