mod common;

#[cfg(test)]
pub mod list_ops_tests {
    use super::common::*;

    use folio::models::*;

    #[test]
    fn append_keeps_existing_entries_and_order() {
        let mut heroes = vec![get_seed_hero_0(), get_seed_hero_1()];

        append(&mut heroes, get_seed_hero_2());

        assert_eq!(heroes.len(), 3);
        assert_eq!(heroes[0].uuid, get_seed_hero_0().uuid);
        assert_eq!(heroes[1].uuid, get_seed_hero_1().uuid);
        assert_eq!(heroes[2].uuid, get_seed_hero_2().uuid);
    }

    #[test]
    fn merge_replaces_only_the_matching_entry() {
        let mut heroes = vec![get_seed_hero_0(), get_seed_hero_1()];

        let mut updated = get_seed_hero_1();
        updated.title = "Renamed".to_string();
        merge_by_uuid(&mut heroes, updated);

        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[0].title, get_seed_hero_0().title);
        assert_eq!(heroes[1].title, "Renamed");
    }

    #[test]
    fn merge_with_unknown_uuid_changes_nothing() {
        let mut heroes = vec![get_seed_hero_0(), get_seed_hero_1()];

        let mut stranger = get_seed_hero_2();
        stranger.title = "Ghost".to_string();
        merge_by_uuid(&mut heroes, stranger);

        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[0].title, get_seed_hero_0().title);
        assert_eq!(heroes[1].title, get_seed_hero_1().title);
    }

    #[test]
    fn remove_drops_exactly_one_entry() {
        let mut heroes = vec![get_seed_hero_0(), get_seed_hero_1(), get_seed_hero_2()];

        let removed = remove_by_uuid(&mut heroes, get_seed_hero_1().uuid);

        assert!(removed);
        assert_eq!(heroes.len(), 2);
        assert!(heroes.iter().all(|h| h.uuid != get_seed_hero_1().uuid));
    }

    #[test]
    fn remove_with_unknown_uuid_is_a_no_op() {
        let mut skills = vec![get_seed_skill_0()];

        let removed = remove_by_uuid(&mut skills, get_seed_skill_1().uuid);

        assert!(!removed);
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn mark_active_leaves_a_single_winner() {
        let mut heroes = vec![get_seed_hero_0(), get_seed_hero_1(), get_seed_hero_2()];
        assert!(heroes[0].is_active);

        mark_active_only(&mut heroes, get_seed_hero_2().uuid);

        let active: Vec<_> = heroes.iter().filter(|h| h.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].uuid, get_seed_hero_2().uuid);
    }

    #[test]
    fn mark_active_is_idempotent_for_the_current_winner() {
        let mut heroes = vec![get_seed_hero_0(), get_seed_hero_1()];

        mark_active_only(&mut heroes, get_seed_hero_0().uuid);
        mark_active_only(&mut heroes, get_seed_hero_0().uuid);

        assert!(heroes[0].is_active);
        assert!(!heroes[1].is_active);
    }
}
