use crate::utils::error::{OfferError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Whole currency units (NOK, ex. VAT).
pub type Amount = u64;

fn parse_option<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    id: impl Fn(T) -> &'static str,
) -> Result<T> {
    all.iter()
        .copied()
        .find(|candidate| id(*candidate).eq_ignore_ascii_case(value.trim()))
        .ok_or_else(|| OfferError::UnknownOption {
            kind,
            value: value.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteType {
    Landing,
    Business,
    Ecommerce,
    Webapp,
}

impl SiteType {
    pub const ALL: [SiteType; 4] = [
        SiteType::Landing,
        SiteType::Business,
        SiteType::Ecommerce,
        SiteType::Webapp,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SiteType::Landing => "landing",
            SiteType::Business => "business",
            SiteType::Ecommerce => "ecommerce",
            SiteType::Webapp => "webapp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SiteType::Landing => "Enkel landingsside",
            SiteType::Business => "Bedriftsnettside (flere sider)",
            SiteType::Ecommerce => "Nettbutikk",
            SiteType::Webapp => "Webapp / skreddersydd løsning",
        }
    }

    pub fn base_price(self) -> Amount {
        match self {
            SiteType::Landing => 5_000,
            SiteType::Business => 12_000,
            SiteType::Ecommerce => 20_000,
            SiteType::Webapp => 30_000,
        }
    }
}

impl FromStr for SiteType {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self> {
        parse_option("site type", s, &Self::ALL, Self::id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignLevel {
    Basic,
    Custom,
    Premium,
}

impl DesignLevel {
    pub const ALL: [DesignLevel; 3] = [DesignLevel::Basic, DesignLevel::Custom, DesignLevel::Premium];

    pub fn id(self) -> &'static str {
        match self {
            DesignLevel::Basic => "basic",
            DesignLevel::Custom => "custom",
            DesignLevel::Premium => "premium",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DesignLevel::Basic => "Enkel / template-basert",
            DesignLevel::Custom => "Tilpasset design",
            DesignLevel::Premium => "Premium design (UI/UX, animasjoner)",
        }
    }

    pub fn surcharge(self) -> Amount {
        match self {
            DesignLevel::Basic => 0,
            DesignLevel::Custom => 4_000,
            DesignLevel::Premium => 8_000,
        }
    }
}

impl FromStr for DesignLevel {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self> {
        parse_option("design level", s, &Self::ALL, Self::id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentLevel {
    None,
    Assist,
    Full,
}

impl ContentLevel {
    pub const ALL: [ContentLevel; 3] = [ContentLevel::None, ContentLevel::Assist, ContentLevel::Full];

    pub fn id(self) -> &'static str {
        match self {
            ContentLevel::None => "none",
            ContentLevel::Assist => "assist",
            ContentLevel::Full => "full",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentLevel::None => "Kunden leverer alt innhold",
            ContentLevel::Assist => "Hjelp med tekst og bilder",
            ContentLevel::Full => "Full innholdsproduksjon (tekst, bilder, struktur)",
        }
    }

    pub fn surcharge(self) -> Amount {
        match self {
            ContentLevel::None => 0,
            ContentLevel::Assist => 3_000,
            ContentLevel::Full => 7_000,
        }
    }
}

impl FromStr for ContentLevel {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self> {
        parse_option("content level", s, &Self::ALL, Self::id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenancePlan {
    None,
    Basic,
    Pro,
}

impl MaintenancePlan {
    pub const ALL: [MaintenancePlan; 3] = [
        MaintenancePlan::None,
        MaintenancePlan::Basic,
        MaintenancePlan::Pro,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MaintenancePlan::None => "none",
            MaintenancePlan::Basic => "basic",
            MaintenancePlan::Pro => "pro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaintenancePlan::None => "Ingen vedlikeholdsavtale",
            MaintenancePlan::Basic => "Basispakke (oppdateringer, enkel support)",
            MaintenancePlan::Pro => "Pro-pakke (løpende support og optimalisering)",
        }
    }

    pub fn monthly_rate(self) -> Amount {
        match self {
            MaintenancePlan::None => 0,
            MaintenancePlan::Basic => 500,
            MaintenancePlan::Pro => 1_500,
        }
    }
}

impl FromStr for MaintenancePlan {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self> {
        parse_option("maintenance plan", s, &Self::ALL, Self::id)
    }
}

/// Add-on features. Identifiers are the camelCase keys stored in `selectedFeatures`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    ContactForm,
    Cms,
    Blog,
    Newsletter,
    Ecommerce,
    Booking,
    Multilang,
    Analytics,
}

impl Feature {
    pub const CATALOG: [Feature; 8] = [
        Feature::ContactForm,
        Feature::Cms,
        Feature::Blog,
        Feature::Newsletter,
        Feature::Ecommerce,
        Feature::Booking,
        Feature::Multilang,
        Feature::Analytics,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Feature::ContactForm => "contactForm",
            Feature::Cms => "cms",
            Feature::Blog => "blog",
            Feature::Newsletter => "newsletter",
            Feature::Ecommerce => "ecommerce",
            Feature::Booking => "booking",
            Feature::Multilang => "multilang",
            Feature::Analytics => "analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Feature::ContactForm => "Kontaktskjema",
            Feature::Cms => "CMS (f.eks. Decap / WordPress)",
            Feature::Blog => "Bloggfunksjon",
            Feature::Newsletter => "Nyhetsbrev-integrasjon",
            Feature::Ecommerce => "Nettbutikk-funksjonalitet",
            Feature::Booking => "Booking-system",
            Feature::Multilang => "Flerspråklig løsning",
            Feature::Analytics => "Google Analytics / tracking",
        }
    }

    pub fn price(self) -> Amount {
        match self {
            Feature::ContactForm => 1_500,
            Feature::Cms => 4_000,
            Feature::Blog => 2_000,
            Feature::Newsletter => 1_500,
            Feature::Ecommerce => 6_000,
            Feature::Booking => 5_000,
            Feature::Multilang => 3_000,
            Feature::Analytics => 1_000,
        }
    }

    /// Exact, case-sensitive lookup; identifiers outside the catalog yield `None`.
    pub fn from_id(id: &str) -> Option<Feature> {
        Self::CATALOG.iter().copied().find(|f| f.id() == id)
    }
}

/// Number of pages, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct PageCount(u32);

impl PageCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 99;
    pub const INCLUDED: u32 = 3;
    pub const EXTRA_PAGE_RATE: Amount = 800;

    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn extra_pages(self) -> u32 {
        self.0.saturating_sub(Self::INCLUDED)
    }
}

impl From<i64> for PageCount {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<PageCount> for u32 {
    fn from(value: PageCount) -> Self {
        value.0
    }
}

impl Default for PageCount {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user's current pricing choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub site_type: SiteType,
    pub page_count: PageCount,
    pub design_level: DesignLevel,
    pub selected_features: BTreeSet<String>,
    pub content_level: ContentLevel,
    pub maintenance_plan: MaintenancePlan,
    pub notes: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            site_type: SiteType::Business,
            page_count: PageCount::default(),
            design_level: DesignLevel::Custom,
            selected_features: BTreeSet::new(),
            content_level: ContentLevel::Assist,
            maintenance_plan: MaintenancePlan::Basic,
            notes: String::new(),
        }
    }
}

impl Selection {
    pub fn set_page_count(&mut self, pages: i64) {
        self.page_count = PageCount::clamped(pages);
    }

    /// Adds the feature when absent, removes it when present. Returns whether it is now selected.
    pub fn toggle_feature(&mut self, id: &str) -> bool {
        if self.selected_features.remove(id) {
            false
        } else {
            self.selected_features.insert(id.to_string());
            true
        }
    }

    pub fn has_feature(&self, id: &str) -> bool {
        self.selected_features.contains(id)
    }

    pub fn into_new_offer(self, one_time_total: Amount) -> NewOffer {
        NewOffer {
            site_type: self.site_type,
            page_count: self.page_count,
            design_level: self.design_level,
            selected_features: self.selected_features.into_iter().collect(),
            maintenance_plan: self.maintenance_plan,
            content_level: self.content_level,
            notes: self.notes,
            one_time_total,
        }
    }
}

/// Cost breakdown derived from a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub base: Amount,
    pub pages_cost: Amount,
    pub design_cost: Amount,
    pub features_cost: Amount,
    pub content_cost: Amount,
    pub one_time_total: Amount,
    pub monthly_maintenance: Amount,
    pub yearly_maintenance: Amount,
}

/// Row payload for the offers table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOffer {
    pub site_type: SiteType,
    #[serde(rename = "pages")]
    pub page_count: PageCount,
    pub design_level: DesignLevel,
    #[serde(default)]
    pub selected_features: Vec<String>,
    pub maintenance_plan: MaintenancePlan,
    pub content_level: ContentLevel,
    #[serde(default)]
    pub notes: String,
    pub one_time_total: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// A persisted offer as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferRecord {
    pub id: RecordId,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub offer: NewOffer,
}
