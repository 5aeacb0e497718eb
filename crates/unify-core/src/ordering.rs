//! Display ordering for shows, seasons, and episodes
//!
//! The API returns collections in unspecified order; these functions
//! produce the display order. Comparators are explicit three-way
//! comparisons with a documented sentinel for absent numbers: an
//! unnumbered (special) season or episode sorts after every numbered one.
//! All sorts are stable, so equal keys keep their arrival order.

use std::cmp::Ordering;

use crate::types::{Episode, Season, Show};

/// Sort key for an optional season/episode number.
///
/// `None` maps past every representable number, so specials land at the
/// end of the list.
fn number_key(num: Option<u32>) -> u64 {
    match num {
        Some(num) => u64::from(num),
        None => u64::MAX,
    }
}

/// Three-way comparison of optional numbers under the sentinel key.
pub fn cmp_number(a: Option<u32>, b: Option<u32>) -> Ordering {
    number_key(a).cmp(&number_key(b))
}

/// Sort shows by name, ascending.
pub fn sort_shows(shows: &mut [Show]) {
    shows.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Sort seasons by number, ascending, specials last.
pub fn sort_seasons(seasons: &mut [Season]) {
    seasons.sort_by(|a, b| cmp_number(a.num, b.num));
}

/// Sort episodes by number, ascending, specials last.
pub fn sort_episodes(episodes: &mut [Episode]) {
    episodes.sort_by(|a, b| cmp_number(a.num, b.num));
}

/// Put a fetched show into display order: seasons ascending, and each
/// season's episodes ascending. A show without season data is left as is.
pub fn sort_show_contents(show: &mut Show) {
    if let Some(seasons) = show.seasons.as_mut() {
        sort_seasons(seasons);
        for season in seasons.iter_mut() {
            sort_episodes(&mut season.episodes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn show(id: u32, name: &str) -> Show {
        Show {
            id,
            name: name.to_string(),
            summary: None,
            cover_img: None,
            provider: None,
            provider_id: None,
            provider_url: None,
            seasons: None,
        }
    }

    fn episode(id: u32, num: Option<u32>) -> Episode {
        Episode {
            id,
            num,
            season_num: None,
            name: format!("ep-{id}"),
            summary: None,
            runtime: None,
        }
    }

    fn season(id: u32, num: Option<u32>, episodes: Vec<Episode>) -> Season {
        Season {
            id,
            num,
            name: None,
            summary: None,
            cover_img: None,
            episodes,
        }
    }

    #[test]
    fn test_cmp_number_numbered() {
        assert_eq!(cmp_number(Some(1), Some(2)), Ordering::Less);
        assert_eq!(cmp_number(Some(5), Some(5)), Ordering::Equal);
        assert_eq!(cmp_number(Some(10), Some(2)), Ordering::Greater);
    }

    #[test]
    fn test_cmp_number_specials_sort_last() {
        assert_eq!(cmp_number(None, Some(u32::MAX)), Ordering::Greater);
        assert_eq!(cmp_number(Some(0), None), Ordering::Less);
        assert_eq!(cmp_number(None, None), Ordering::Equal);
    }

    #[test]
    fn test_sort_shows_by_name() {
        let mut shows = vec![show(1, "Severance"), show(2, "Dark"), show(3, "Mad Men")];
        sort_shows(&mut shows);
        let names: Vec<&str> = shows.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Dark", "Mad Men", "Severance"]);
    }

    #[test]
    fn test_sort_shows_stable_on_equal_names() {
        let mut shows = vec![show(1, "Dark"), show(2, "Dark"), show(3, "Archer")];
        sort_shows(&mut shows);
        assert_eq!(
            shows.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn test_sort_episodes_specials_last() {
        let mut eps = vec![
            episode(1, None),
            episode(2, Some(3)),
            episode(3, Some(1)),
            episode(4, None),
            episode(5, Some(2)),
        ];
        sort_episodes(&mut eps);
        assert_eq!(
            eps.iter().map(|e| e.num).collect::<Vec<_>>(),
            vec![Some(1), Some(2), Some(3), None, None]
        );
        // Stable: the two specials keep their arrival order
        assert_eq!(eps[3].id, 1);
        assert_eq!(eps[4].id, 4);
    }

    #[test]
    fn test_sort_show_contents() {
        let mut s = show(1, "Test");
        s.seasons = Some(vec![
            season(20, Some(2), vec![episode(201, Some(2)), episode(200, Some(1))]),
            season(30, None, vec![]),
            season(10, Some(1), vec![episode(101, None), episode(100, Some(1))]),
        ]);

        sort_show_contents(&mut s);

        let seasons = s.seasons.unwrap();
        assert_eq!(
            seasons.iter().map(|s| s.num).collect::<Vec<_>>(),
            vec![Some(1), Some(2), None]
        );
        assert_eq!(
            seasons[0].episodes.iter().map(|e| e.num).collect::<Vec<_>>(),
            vec![Some(1), None]
        );
        assert_eq!(
            seasons[1].episodes.iter().map(|e| e.num).collect::<Vec<_>>(),
            vec![Some(1), Some(2)]
        );
    }

    proptest! {
        #[test]
        fn prop_sorted_names_non_decreasing(names in proptest::collection::vec(".*", 0..32)) {
            let mut shows: Vec<Show> = names
                .iter()
                .enumerate()
                .map(|(i, n)| show(i as u32, n))
                .collect();
            sort_shows(&mut shows);

            for pair in shows.windows(2) {
                prop_assert!(pair[0].name <= pair[1].name);
            }
        }

        #[test]
        fn prop_sorted_numbers_partitioned(nums in proptest::collection::vec(proptest::option::of(0u32..500), 0..64)) {
            let mut eps: Vec<Episode> = nums
                .iter()
                .enumerate()
                .map(|(i, n)| episode(i as u32, *n))
                .collect();
            sort_episodes(&mut eps);

            // Numbered items form an ascending prefix, specials the suffix
            let first_special = eps
                .iter()
                .position(|e| e.num.is_none())
                .unwrap_or(eps.len());
            for e in &eps[first_special..] {
                prop_assert!(e.num.is_none());
            }
            for pair in eps[..first_special].windows(2) {
                prop_assert!(pair[0].num.unwrap() <= pair[1].num.unwrap());
            }
        }
    }
}
