#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use crate::image_pipeline::color::{ColorIndex, ColorKey};

    #[test]
    fn test_key_format() {
        assert_eq!(ColorKey::from_rgb(255, 0, 0).as_str(), "#FF0000");
        assert_eq!(ColorKey::from_rgb(0, 10, 171).as_str(), "#000AAB");
        assert_eq!(ColorKey::from_rgb(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn test_key_shape_and_determinism() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (18, 52, 86), (171, 205, 239)] {
            let key = ColorKey::from_rgb(r, g, b);
            assert_eq!(key.as_str().len(), 7);
            assert!(key.as_str().starts_with('#'));
            assert_eq!(key, ColorKey::from_rgb(r, g, b));
            assert_eq!(key.rgb(), (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b));
        }
    }

    #[test]
    fn test_resolve_is_first_seen_order() {
        let index = ColorIndex::new();
        let red = ColorKey::from_rgb(255, 0, 0);
        let blue = ColorKey::from_rgb(0, 0, 255);

        assert_eq!(index.resolve(&red), 1);
        assert_eq!(index.resolve(&blue), 2);
        assert_eq!(index.resolve(&red), 1);
        assert_eq!(index.resolve(&blue), 2);
        assert_eq!(index.color_count(), 2);
    }

    #[test]
    fn test_concurrent_resolve_is_contiguous() {
        let index = Arc::new(ColorIndex::new());
        let keys: Vec<ColorKey> = (0..50u8).map(|i| ColorKey::from_rgb(i, i, i)).collect();

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let index = Arc::clone(&index);
                let keys = keys.clone();
                thread::spawn(move || {
                    let mut seen = Vec::new();
                    for round in 0..4 {
                        for offset in 0..keys.len() {
                            let key = &keys[(offset + worker * 7 + round) % keys.len()];
                            seen.push((key.clone(), index.resolve(key)));
                        }
                    }
                    seen
                })
            })
            .collect();

        let mut observed = Vec::new();
        for handle in handles {
            observed.extend(handle.join().unwrap());
        }

        let table = index.table();
        assert_eq!(table.len(), 50);
        let ids: HashSet<u32> = table.entries().iter().map(|(_, id)| *id).collect();
        assert_eq!(ids, (1..=50).collect::<HashSet<u32>>());
        for (key, id) in observed {
            assert_eq!(table.id_of(&key), Some(id));
        }
    }

    #[test]
    fn test_table_lines() {
        let index = ColorIndex::new();
        index.resolve(&ColorKey::from_rgb(0, 0, 0));
        index.resolve(&ColorKey::from_rgb(255, 255, 255));

        let table = index.table();
        let lines: Vec<String> = table.lines().collect();
        assert_eq!(lines, vec!["#000000:1", "#FFFFFF:2"]);
        assert_eq!(table.to_string(), "#000000:1\n#FFFFFF:2\n");
    }
}
