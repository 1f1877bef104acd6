//! Pure derivations over follower records. Handlers load the store, run one
//! of these, and serialize the result; nothing here is persisted.

use serde::Serialize;

use crate::model::FollowerRecord;

/// Splits the free-text tag field on whitespace. Order and duplicates are
/// kept as typed; no case folding.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_owned).collect()
}

/// Records that carry a location and can be placed on the map.
pub fn located(records: &[FollowerRecord]) -> Vec<FollowerRecord> {
    records
        .iter()
        .filter(|record| record.has_location())
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityGroup {
    pub city: String,
    pub followers: Vec<FollowerRecord>,
}

/// Groups located records by exact location string. Cities appear in
/// first-seen order and followers keep their store order within each group;
/// records without a location are left out entirely.
pub fn group_by_city(records: &[FollowerRecord]) -> Vec<CityGroup> {
    let mut groups: Vec<CityGroup> = Vec::new();

    for record in records {
        if !record.has_location() {
            continue;
        }

        match groups
            .iter_mut()
            .find(|group| group.city == record.location)
        {
            Some(group) => group.followers.push(record.clone()),
            None => groups.push(CityGroup {
                city: record.location.clone(),
                followers: vec![record.clone()],
            }),
        }
    }

    groups
}

/// Exact string-equality filter, no normalization.
pub fn in_city(records: &[FollowerRecord], city: &str) -> Vec<FollowerRecord> {
    records
        .iter()
        .filter(|record| record.location == city)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{group_by_city, in_city, located, parse_tags};
    use crate::model::FollowerRecord;

    fn follower(username: &str, location: &str) -> FollowerRecord {
        let mut record = FollowerRecord::new(username, None);
        record.location = location.to_string();
        record
    }

    #[test]
    fn test_tag_parsing_trims_and_drops_empty_tokens() {
        assert_eq!(parse_tags("  travel  foodie "), vec!["travel", "foodie"]);
        assert_eq!(parse_tags(""), Vec::<String>::new());
        assert_eq!(parse_tags("   "), Vec::<String>::new());
    }

    #[test]
    fn test_tag_parsing_keeps_order_duplicates_and_case() {
        assert_eq!(parse_tags("VIP vip VIP"), vec!["VIP", "vip", "VIP"]);
    }

    #[test]
    fn test_located_drops_unannotated_records() {
        let records = vec![
            follower("alice", "Paris"),
            follower("bob", ""),
            follower("carol", "Osaka"),
        ];

        let placed = located(&records);
        let usernames: Vec<&str> = placed.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(usernames, vec!["alice", "carol"]);
    }

    #[test]
    fn test_group_by_city_preserves_first_seen_order() {
        let records = vec![
            follower("alice", "Paris"),
            follower("bob", "Osaka"),
            follower("carol", "Paris"),
        ];

        let groups = group_by_city(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].city, "Paris");
        assert_eq!(groups[1].city, "Osaka");

        let paris: Vec<&str> = groups[0]
            .followers
            .iter()
            .map(|r| r.username.as_str())
            .collect();
        assert_eq!(paris, vec!["alice", "carol"]);
    }

    #[test]
    fn test_groups_union_recovers_located_records_exactly() {
        let records = vec![
            follower("alice", "Paris"),
            follower("bob", ""),
            follower("carol", "Osaka"),
            follower("dan", "Paris"),
        ];

        let groups = group_by_city(&records);
        let mut regrouped: Vec<FollowerRecord> = groups
            .into_iter()
            .flat_map(|group| group.followers)
            .collect();
        let mut expected = located(&records);

        regrouped.sort_by(|a, b| a.username.cmp(&b.username));
        expected.sort_by(|a, b| a.username.cmp(&b.username));
        assert_eq!(regrouped, expected);
    }

    #[test]
    fn test_in_city_matches_exactly() {
        let records = vec![
            follower("alice", "Paris"),
            follower("bob", "paris"),
            follower("carol", "Paris "),
        ];

        let matched = in_city(&records, "Paris");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].username, "alice");
    }
}
