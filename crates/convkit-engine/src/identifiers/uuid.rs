use crate::util::RandomSource;

/// Generates a random (version 4, RFC 4122 variant) UUID in lowercase hyphenated form.
pub fn generate_uuid(source: &mut RandomSource) -> String {
    let bytes = source.random_bytes::<16>();
    ::uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}

/// The registered `encode` operation. The input is ignored.
pub fn encode(_input: &str) -> String {
    generate_uuid(&mut RandomSource::System)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_v4(id: &str) {
        assert_eq!(id.len(), 36, "{id}");
        let groups: Vec<&str> = id.split('-').collect();
        assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12],
            "{id}"
        );
        assert!(id.chars().all(|c| c == '-' || matches!(c, '0'..='9' | 'a'..='f')), "{id}");
        assert!(groups[2].starts_with('4'), "{id}");
        assert!(matches!(groups[3].chars().next(), Some('8' | '9' | 'a' | 'b')), "{id}");
    }

    #[test]
    fn system_uuids_are_v4() {
        for _ in 0..100 {
            assert_v4(&encode("ignored"));
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let a = generate_uuid(&mut RandomSource::new_seeded(7));
        let b = generate_uuid(&mut RandomSource::new_seeded(7));
        assert_eq!(a, b);
        assert_v4(&a);
    }

    #[test]
    fn version_and_variant_bits_are_forced() {
        let all_ones = generate_uuid(&mut RandomSource::new_fixed(&[0xff]));
        assert_eq!(all_ones, "ffffffff-ffff-4fff-bfff-ffffffffffff");

        let all_zeros = generate_uuid(&mut RandomSource::new_fixed(&[0x00]));
        assert_eq!(all_zeros, "00000000-0000-4000-8000-000000000000");
    }

    #[test]
    fn consecutive_values_differ() {
        let mut source = RandomSource::new_seeded(1);
        let ids: HashSet<String> = (0..500).map(|_| generate_uuid(&mut source)).collect();
        assert_eq!(ids.len(), 500);
    }
}
