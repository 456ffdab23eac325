// src/stats.rs
//
// Read-only summaries over an assembled dataset (CLI report, GUI charts).

use std::collections::{BTreeMap, HashSet};

use crate::dataset::Dataset;
use crate::site::Category;

/// Regions by site count, highest first. Ties keep first-appearance order.
pub fn region_counts(ds: &Dataset, top: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for r in ds {
        match counts.iter_mut().find(|(name, _)| *name == r.region) {
            Some((_, n)) => *n += 1,
            None => counts.push((r.region.clone(), 1)),
        }
    }
    // Stable sort: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top);
    counts
}

/// Inscriptions per decade, ascending. Records without a year are left out.
pub fn decade_counts(ds: &Dataset) -> Vec<(i32, usize)> {
    let mut by_decade: BTreeMap<i32, usize> = BTreeMap::new();
    for d in ds.iter().filter_map(|r| r.decade()) {
        *by_decade.entry(d).or_default() += 1;
    }
    by_decade.into_iter().collect()
}

/// Count per category, always all three in `Category::ALL` order.
pub fn category_counts(ds: &Dataset) -> [(Category, usize); 3] {
    Category::ALL.map(|c| (c, ds.iter().filter(|r| r.category == c).count()))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub sites: usize,
    /// Records carrying a point, parsed or imputed.
    pub geolocated: usize,
    pub regions: usize,
    pub categories: usize,
}

pub fn summary(ds: &Dataset) -> Summary {
    let regions: HashSet<&str> = ds.iter().map(|r| r.region.as_str()).collect();
    let categories: HashSet<Category> = ds.iter().map(|r| r.category).collect();
    Summary {
        sites: ds.len(),
        geolocated: ds.iter().filter(|r| r.point().is_some()).count(),
        regions: regions.len(),
        categories: categories.len(),
    }
}

/// Plain-text report, as the CLI prints it.
pub fn render_report(ds: &Dataset, top: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Top {top} regions:\n"));
    for (region, n) in region_counts(ds, top) {
        out.push_str(&format!("  {region:<40} {n:>3}\n"));
    }

    out.push_str("Inscriptions per decade:\n");
    for (decade, n) in decade_counts(ds) {
        out.push_str(&format!("  {decade}s {n:>3}\n"));
    }

    out.push_str("Sites per type:\n");
    for (cat, n) in category_counts(ds) {
        out.push_str(&format!("  {:<10} {n:>3}\n", cat.label()));
    }

    let sum = summary(ds);
    let asm = ds.summary();
    out.push_str(&format!(
        "Total: {} sites, {} geolocated ({} imputed), {} regions, {} types\n",
        sum.sites, sum.geolocated, asm.imputed, sum.regions, sum.categories
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::AssembleOptions;
    use crate::dataset::assemble;
    use crate::site::SiteRecord;

    fn rec(region: &str, year: Option<i32>, cat: Category, coords: &str) -> SiteRecord {
        SiteRecord::new(s!("site"), s!(region), year, cat, s!(coords))
    }

    fn sample() -> Dataset {
        assemble(
            vec![
                rec("Occitanie", Some(1985), Category::Cultural, "43.6, 1.4"),
                rec("Corse", Some(1983), Category::Natural, "42.3, 8.7"),
                rec("Occitanie", Some(1997), Category::Mixed, "Site en série"),
                rec("Bretagne", None, Category::Cultural, "48.1, -1.7"),
                rec("Corse", Some(2008), Category::Cultural, ""),
            ],
            &AssembleOptions::default(),
        )
    }

    #[test]
    fn regions_desc_ties_first_seen() {
        let ds = sample();
        let top = region_counts(&ds, 10);
        assert_eq!(top, vec![(s!("Occitanie"), 2), (s!("Corse"), 2), (s!("Bretagne"), 1)]);
        assert_eq!(region_counts(&ds, 1).len(), 1);
    }

    #[test]
    fn decades_ascending_without_unknown_years() {
        assert_eq!(decade_counts(&sample()), vec![(1980, 2), (1990, 1), (2000, 1)]);
    }

    #[test]
    fn categories_and_summary() {
        let ds = sample();
        assert_eq!(
            category_counts(&ds),
            [(Category::Cultural, 3), (Category::Natural, 1), (Category::Mixed, 1)]
        );
        let sum = summary(&ds);
        assert_eq!(sum, Summary { sites: 5, geolocated: 5, regions: 3, categories: 3 });
    }

    #[test]
    fn report_mentions_totals() {
        let text = render_report(&sample(), 10);
        assert!(text.contains("Total: 5 sites, 5 geolocated (2 imputed), 3 regions, 3 types"));
        assert!(text.contains("1990s"));
    }
}
