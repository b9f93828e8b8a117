//! Press year → election year resolution and slider snapping.

/// A calendar year. Press and election years share the type.
pub type Year = i32;

/// General election years covered by the election dataset, ascending.
pub const ELECTION_YEARS: [Year; 17] = [
    1847, 1852, 1857, 1859, 1865, 1868, 1874, 1880, 1885, 1886, 1892, 1895, 1900, 1906, 1910,
    1918, 1922,
];

/// The first general election held in or after `press_year`.
///
/// Returns `None` when `press_year` is later than the last election on record.
pub fn election_year_for(press_year: Year) -> Option<Year> {
    next_year_at_or_after(&ELECTION_YEARS, press_year)
}

/// Smallest element of the ascending slice `years` that is `>= target`.
pub fn next_year_at_or_after(years: &[Year], target: Year) -> Option<Year> {
    let idx = years.partition_point(|&y| y < target);
    years.get(idx).copied()
}

/// The element of `valid_years` closest to `candidate`.
///
/// Ties go to the element seen first, so with an ascending slice the earlier
/// year wins. Candidates outside the range snap to the nearest end. Returns
/// `None` only for an empty slice.
pub fn snap_to_nearest_year(candidate: Year, valid_years: &[Year]) -> Option<Year> {
    let mut best: Option<Year> = None;
    for &year in valid_years {
        match best {
            Some(current) if year.abs_diff(candidate) >= current.abs_diff(candidate) => {}
            _ => best = Some(year),
        }
    }
    best
}

/// Text shown under the slider describing the current year pairing.
pub fn year_caption(press_year: Year, election_year: Option<Year>) -> String {
    match election_year {
        Some(election) => format!(
            "You picked {}, the closest election was in {}",
            press_year, election
        ),
        None => format!(
            "You picked {}, there is no later election on record",
            press_year
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn election_year_before_first_election() {
        assert_eq!(election_year_for(1846), Some(1847));
        assert_eq!(election_year_for(1800), Some(1847));
    }

    #[test]
    fn election_year_on_an_election() {
        assert_eq!(election_year_for(1922), Some(1922));
        assert_eq!(election_year_for(1885), Some(1885));
    }

    #[test]
    fn election_year_between_elections() {
        assert_eq!(election_year_for(1850), Some(1852));
        assert_eq!(election_year_for(1886), Some(1886));
        assert_eq!(election_year_for(1887), Some(1892));
    }

    #[test]
    fn election_year_after_last_election() {
        assert_eq!(election_year_for(1923), None);
    }

    #[test]
    fn binary_search_matches_linear_scan() {
        for year in 1800..1950 {
            let linear = ELECTION_YEARS.iter().copied().find(|&e| e >= year);
            assert_eq!(election_year_for(year), linear, "press year {}", year);
        }
    }

    #[test]
    fn snap_exact_match() {
        let years = [1846, 1851, 1856, 1860];
        assert_eq!(snap_to_nearest_year(1851, &years), Some(1851));
    }

    #[test]
    fn snap_to_closest() {
        let years = [1846, 1851, 1856, 1860];
        assert_eq!(snap_to_nearest_year(1849, &years), Some(1851));
        assert_eq!(snap_to_nearest_year(1859, &years), Some(1860));
    }

    #[test]
    fn snap_tie_prefers_earlier_year() {
        let years = [1846, 1850, 1860];
        assert_eq!(snap_to_nearest_year(1848, &years), Some(1846));
        assert_eq!(snap_to_nearest_year(1855, &years), Some(1850));
    }

    #[test]
    fn snap_outside_range() {
        let years = [1846, 1850, 1860];
        assert_eq!(snap_to_nearest_year(1700, &years), Some(1846));
        assert_eq!(snap_to_nearest_year(2000, &years), Some(1860));
    }

    #[test]
    fn snap_extreme_candidates() {
        let years = [1846, 1850];
        assert_eq!(snap_to_nearest_year(Year::MIN, &years), Some(1846));
        assert_eq!(snap_to_nearest_year(Year::MAX, &years), Some(1850));
    }

    #[test]
    fn snap_empty_list() {
        assert_eq!(snap_to_nearest_year(1850, &[]), None);
    }

    #[test]
    fn caption_text() {
        assert_eq!(
            year_caption(1850, Some(1852)),
            "You picked 1850, the closest election was in 1852"
        );
        assert_eq!(
            year_caption(1930, None),
            "You picked 1930, there is no later election on record"
        );
    }
}
