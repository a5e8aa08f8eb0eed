use crate::domain::model::{Amount, Quote, Selection};

const NBSP: char = '\u{a0}';

/// Formats an amount the Norwegian way: `23 100 kr`, no decimals, non-breaking spaces.
pub fn format_nok(amount: Amount) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(c);
    }

    grouped.push(NBSP);
    grouped.push_str("kr");
    grouped
}

fn amount_or(amount: Amount, fallback: &str) -> String {
    if amount > 0 {
        format_nok(amount)
    } else {
        fallback.to_string()
    }
}

/// A label/value pair of the estimate breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

impl SummaryLine {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

pub fn summary_lines(selection: &Selection, quote: &Quote) -> Vec<SummaryLine> {
    let mut lines = vec![
        SummaryLine::new("Grunnpris", format_nok(quote.base)),
        SummaryLine::new(
            format!("Sider ({} stk, 3 inkludert)", selection.page_count),
            amount_or(quote.pages_cost, "Inkludert"),
        ),
        SummaryLine::new("Designnivå", amount_or(quote.design_cost, "Inkludert")),
        SummaryLine::new(
            format!(
                "Funksjonalitet ({} valgt)",
                selection.selected_features.len()
            ),
            amount_or(quote.features_cost, "Ingen"),
        ),
        SummaryLine::new("Innhold", amount_or(quote.content_cost, "Kunde leverer")),
        SummaryLine::new("Éngangskostnad (prosjekt)", format_nok(quote.one_time_total)),
        SummaryLine::new(
            "Vedlikehold (mnd)",
            amount_or(quote.monthly_maintenance, "Ingen avtale"),
        ),
    ];

    if quote.monthly_maintenance > 0 {
        lines.push(SummaryLine::new(
            "Vedlikehold (år)",
            format_nok(quote.yearly_maintenance),
        ));
    }

    lines
}

/// Renders the breakdown as aligned plain-text rows.
pub fn render_summary(lines: &[SummaryLine]) -> String {
    let width = lines
        .iter()
        .map(|line| line.label.chars().count())
        .max()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            let pad = width - line.label.chars().count();
            format!("{}{}  {}", line.label, " ".repeat(pad), line.value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pricing::derive_quote;
    use crate::domain::model::{ContentLevel, DesignLevel, MaintenancePlan, SiteType};

    #[test]
    fn test_format_nok() {
        assert_eq!(format_nok(0), "0\u{a0}kr");
        assert_eq!(format_nok(800), "800\u{a0}kr");
        assert_eq!(format_nok(5_000), "5\u{a0}000\u{a0}kr");
        assert_eq!(format_nok(23_100), "23\u{a0}100\u{a0}kr");
        assert_eq!(format_nok(1_234_567), "1\u{a0}234\u{a0}567\u{a0}kr");
    }

    #[test]
    fn test_summary_with_zero_components() {
        let selection = Selection {
            site_type: SiteType::Landing,
            design_level: DesignLevel::Basic,
            content_level: ContentLevel::None,
            maintenance_plan: MaintenancePlan::None,
            page_count: crate::domain::model::PageCount::clamped(2),
            ..Selection::default()
        };
        let quote = derive_quote(&selection);

        let lines = summary_lines(&selection, &quote);

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1].value, "Inkludert");
        assert_eq!(lines[2].value, "Inkludert");
        assert_eq!(lines[3].value, "Ingen");
        assert_eq!(lines[4].value, "Kunde leverer");
        assert_eq!(lines[6].value, "Ingen avtale");
    }

    #[test]
    fn test_summary_includes_yearly_maintenance() {
        let mut selection = Selection {
            maintenance_plan: MaintenancePlan::Pro,
            ..Selection::default()
        };
        selection.toggle_feature("contactForm");
        let quote = derive_quote(&selection);

        let lines = summary_lines(&selection, &quote);

        assert_eq!(lines[1].label, "Sider (5 stk, 3 inkludert)");
        assert_eq!(lines[3].label, "Funksjonalitet (1 valgt)");
        let yearly = lines.last().unwrap();
        assert_eq!(yearly.label, "Vedlikehold (år)");
        assert_eq!(yearly.value, "18\u{a0}000\u{a0}kr");
    }

    #[test]
    fn test_render_summary_aligns_values() {
        let lines = vec![
            SummaryLine::new("Grunnpris", "5 000 kr"),
            SummaryLine::new("Innhold", "Kunde leverer"),
        ];
        assert_eq!(
            render_summary(&lines),
            "Grunnpris  5 000 kr\nInnhold    Kunde leverer"
        );
    }
}
