#[cfg(test)]
mod tests {
    use crate::util::{
        DuplicateKey, UniqueMapExt, as_set, bytes_to_hex, display_or_null, format_placeholders,
        frozen_list, frozen_map, frozen_set, generate_string, generate_string_with,
        hex_to_bytes, merge_unique, quote_str, union,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{BTreeMap, HashMap, HashSet};
    use std::sync::Arc;

    // ========================================================================
    // Text
    // ========================================================================

    #[test]
    fn test_format_placeholders_in_order() {
        let out = format_placeholders("{} of {} files", &[&3, &"ten"]);
        assert_eq!(out, "3 of ten files");
    }

    #[test]
    fn test_format_placeholders_surplus_placeholders_kept() {
        let out = format_placeholders("a={} b={}", &[&1]);
        assert_eq!(out, "a=1 b={}");
    }

    #[test]
    fn test_format_placeholders_surplus_args_ignored() {
        let out = format_placeholders("only {}", &[&"one", &"two"]);
        assert_eq!(out, "only one");
    }

    #[test]
    fn test_format_placeholders_without_args() {
        assert_eq!(format_placeholders("no {} here", &[]), "no {} here");
        assert_eq!(format_placeholders("", &[&1]), "");
    }

    #[test]
    fn test_quote_and_null() {
        assert_eq!(quote_str("abc"), "\"abc\"");
        assert_eq!(display_or_null(Some(42)), "42");
        assert_eq!(display_or_null::<&str>(None), "null");
    }

    #[test]
    fn test_generate_string_length_and_charset() {
        for length in [0, 1, 17, 64] {
            let value = generate_string(length);
            assert_eq!(value.len(), length);
            assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_string_is_seeded() {
        let a = generate_string_with(&mut StdRng::seed_from_u64(7), 12);
        let b = generate_string_with(&mut StdRng::seed_from_u64(7), 12);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_string_rarely_repeats() {
        let mut rng = StdRng::seed_from_u64(42);
        let generated: HashSet<String> = (0..10_000)
            .map(|_| generate_string_with(&mut rng, 10))
            .collect();
        assert_eq!(generated.len(), 10_000);
    }

    // ========================================================================
    // Collections
    // ========================================================================

    #[test]
    fn test_frozen_set_does_not_rewrap() {
        let frozen: Arc<HashSet<String>> = frozen_set(as_set(["a".to_string(), "b".to_string()]));
        let again: Arc<HashSet<String>> = frozen_set(Arc::clone(&frozen));
        assert!(Arc::ptr_eq(&frozen, &again));
        assert_eq!(frozen.len(), 2);
    }

    #[test]
    fn test_frozen_map_and_list() {
        let map: HashMap<&str, i32> = [("a", 1)].into();
        let frozen: Arc<HashMap<&str, i32>> = frozen_map(map);
        let again: Arc<HashMap<&str, i32>> = frozen_map(Arc::clone(&frozen));
        assert!(Arc::ptr_eq(&frozen, &again));

        let list: Arc<[i32]> = frozen_list(vec![1, 2, 3]);
        let same: Arc<[i32]> = frozen_list(Arc::clone(&list));
        assert!(Arc::ptr_eq(&list, &same));
        assert_eq!(&*list, &[1, 2, 3]);
    }

    #[test]
    fn test_union_reuses_only_non_empty_input() {
        let empty = Arc::new(HashSet::new());
        let full = Arc::new(as_set([1, 2]));

        assert!(Arc::ptr_eq(&union(&full, &empty, &[]), &full));
        assert!(Arc::ptr_eq(&union(&empty, &full, &[]), &full));
        assert!(Arc::ptr_eq(
            &union(&empty, &empty, &[Arc::clone(&empty), Arc::clone(&full)]),
            &full
        ));
    }

    #[test]
    fn test_union_merges_into_new_set() {
        let a = Arc::new(as_set([1, 2]));
        let b = Arc::new(as_set([2, 3]));
        let c = Arc::new(as_set([4]));

        let merged = union(&a, &b, &[c]);
        assert_eq!(*merged, as_set([1, 2, 3, 4]));
        assert!(!Arc::ptr_eq(&merged, &a));
        assert_eq!(a.len(), 2);
    }

    // ========================================================================
    // Hex
    // ========================================================================

    #[test]
    fn test_bytes_to_hex_uppercase() {
        assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xab, 0xff]), "000FABFF");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn test_hex_to_bytes_any_case() {
        assert_eq!(hex_to_bytes("000FABff").unwrap(), vec![0x00, 0x0f, 0xab, 0xff]);
    }

    #[test]
    fn test_hex_to_bytes_rejects_garbage() {
        assert!(hex_to_bytes("ABC").is_err());
        let err = hex_to_bytes("zz").unwrap_err();
        assert!(err.to_string().contains("Invalid hex string"));
    }

    // ========================================================================
    // Unique-key collection
    // ========================================================================

    #[test]
    fn test_collect_unique_hash_map() {
        let map: HashMap<&str, i32> = vec![("a", 1), ("b", 2)]
            .into_iter()
            .try_collect_unique()
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["b"], 2);
    }

    #[test]
    fn test_collect_unique_rejects_duplicate() {
        let result: Result<BTreeMap<&str, i32>, _> = vec![("a", 1), ("b", 2), ("a", 3)]
            .into_iter()
            .try_collect_unique();

        let err = result.unwrap_err();
        assert_eq!(
            err,
            DuplicateKey {
                key: "a",
                existing: 1,
                incoming: 3,
            }
        );
        assert_eq!(
            err.to_string(),
            "Duplicate key \"a\" (attempted merging values 1 and 3)"
        );
    }

    #[test]
    fn test_merge_unique() {
        let left: HashMap<&str, i32> = [("a", 1)].into();
        let right: HashMap<&str, i32> = [("b", 2)].into();
        let merged = merge_unique(left, right).unwrap();
        assert_eq!(merged.len(), 2);

        let left: HashMap<&str, i32> = [("a", 1)].into();
        let clash: HashMap<&str, i32> = [("a", 9)].into();
        assert!(merge_unique(left, clash).is_err());
    }
}
