use crate::domain::model::{Amount, Feature, PageCount, Quote, Selection};

/// Derive the cost breakdown for a selection. Pure: same selection, same quote.
pub fn derive_quote(selection: &Selection) -> Quote {
    let base = selection.site_type.base_price();
    let pages_cost = pages_cost(selection.page_count);
    let design_cost = selection.design_level.surcharge();
    let features_cost = features_cost(selection.selected_features.iter().map(String::as_str));
    let content_cost = selection.content_level.surcharge();

    let monthly_maintenance = selection.maintenance_plan.monthly_rate();

    Quote {
        base,
        pages_cost,
        design_cost,
        features_cost,
        content_cost,
        one_time_total: base + pages_cost + design_cost + features_cost + content_cost,
        monthly_maintenance,
        yearly_maintenance: monthly_maintenance * 12,
    }
}

pub fn pages_cost(pages: PageCount) -> Amount {
    Amount::from(pages.extra_pages()) * PageCount::EXTRA_PAGE_RATE
}

/// Sum of catalog prices. Identifiers outside the catalog contribute nothing.
pub fn features_cost<'a>(ids: impl IntoIterator<Item = &'a str>) -> Amount {
    ids.into_iter()
        .filter_map(|id| {
            let feature = Feature::from_id(id);
            if feature.is_none() {
                tracing::debug!("Ignoring unknown feature '{}'", id);
            }
            feature
        })
        .map(Feature::price)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ContentLevel, DesignLevel, MaintenancePlan, SiteType};

    fn selection(
        site_type: SiteType,
        pages: i64,
        design_level: DesignLevel,
        features: &[&str],
        content_level: ContentLevel,
    ) -> Selection {
        let mut selection = Selection {
            site_type,
            design_level,
            content_level,
            ..Selection::default()
        };
        selection.set_page_count(pages);
        for id in features {
            selection.toggle_feature(id);
        }
        selection
    }

    #[test]
    fn test_business_scenario() {
        let s = selection(
            SiteType::Business,
            5,
            DesignLevel::Custom,
            &["contactForm", "analytics"],
            ContentLevel::Assist,
        );

        let quote = derive_quote(&s);

        assert_eq!(quote.base, 12_000);
        assert_eq!(quote.pages_cost, 1_600);
        assert_eq!(quote.design_cost, 4_000);
        assert_eq!(quote.features_cost, 2_500);
        assert_eq!(quote.content_cost, 3_000);
        assert_eq!(quote.one_time_total, 23_100);
    }

    #[test]
    fn test_minimal_landing_scenario() {
        let s = selection(SiteType::Landing, 1, DesignLevel::Basic, &[], ContentLevel::None);

        let quote = derive_quote(&s);

        assert_eq!(quote.one_time_total, 5_000);
        assert_eq!(quote.pages_cost, 0);
        assert_eq!(quote.features_cost, 0);
    }

    #[test]
    fn test_pro_maintenance_yearly() {
        let s = Selection {
            maintenance_plan: MaintenancePlan::Pro,
            ..Selection::default()
        };

        let quote = derive_quote(&s);

        assert_eq!(quote.monthly_maintenance, 1_500);
        assert_eq!(quote.yearly_maintenance, 18_000);
    }

    #[test]
    fn test_yearly_is_twelve_months_for_every_plan() {
        for plan in MaintenancePlan::ALL {
            let s = Selection {
                maintenance_plan: plan,
                ..Selection::default()
            };
            let quote = derive_quote(&s);
            assert_eq!(quote.yearly_maintenance, quote.monthly_maintenance * 12);
        }
    }

    #[test]
    fn test_pages_cost_included_then_linear() {
        for pages in 1..=3 {
            assert_eq!(pages_cost(PageCount::clamped(pages)), 0);
        }
        for pages in 4..=99i64 {
            let expected = (pages as Amount - 3) * 800;
            assert_eq!(pages_cost(PageCount::clamped(pages)), expected);
        }
    }

    #[test]
    fn test_out_of_range_pages_are_clamped() {
        let low = selection(SiteType::Landing, 0, DesignLevel::Basic, &[], ContentLevel::None);
        let negative = selection(SiteType::Landing, -3, DesignLevel::Basic, &[], ContentLevel::None);
        let high = selection(SiteType::Landing, 150, DesignLevel::Basic, &[], ContentLevel::None);

        assert_eq!(low.page_count.get(), 1);
        assert_eq!(negative.page_count.get(), 1);
        assert_eq!(high.page_count.get(), 99);
        assert_eq!(derive_quote(&high).pages_cost, 96 * 800);
    }

    #[test]
    fn test_features_cost_ignores_unknown_and_duplicates() {
        assert_eq!(features_cost(["cms", "chatbot", ""]), 4_000);

        let mut s = Selection::default();
        s.selected_features.insert("blog".to_string());
        s.selected_features.insert("blog".to_string());
        s.selected_features.insert("teleport".to_string());
        assert_eq!(derive_quote(&s).features_cost, 2_000);
    }

    #[test]
    fn test_full_catalog_sum() {
        let ids: Vec<&str> = Feature::CATALOG.iter().map(|f| f.id()).collect();
        assert_eq!(features_cost(ids), 24_000);
    }

    #[test]
    fn test_total_never_below_base() {
        for site_type in SiteType::ALL {
            for design_level in DesignLevel::ALL {
                for content_level in ContentLevel::ALL {
                    for pages in [1, 3, 4, 20, 99] {
                        let s = selection(site_type, pages, design_level, &["booking"], content_level);
                        let quote = derive_quote(&s);
                        assert!(quote.one_time_total >= site_type.base_price());
                        assert_eq!(
                            quote.one_time_total,
                            quote.base
                                + quote.pages_cost
                                + quote.design_cost
                                + quote.features_cost
                                + quote.content_cost
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let s = selection(
            SiteType::Ecommerce,
            12,
            DesignLevel::Premium,
            &["ecommerce", "multilang"],
            ContentLevel::Full,
        );
        assert_eq!(derive_quote(&s), derive_quote(&s));
    }
}
