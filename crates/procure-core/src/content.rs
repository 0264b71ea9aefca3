//! Page content configuration
//!
//! Every list the page renders (problem bullets, feature cards, roadmap
//! phases, footer links, ...) is data loaded from `content/site.json`, which
//! is embedded at compile time so the server render and the browser
//! hydration always agree.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::{CoreError, CoreResult};

const EMBEDDED_CONTENT: &str = include_str!("../content/site.json");

static SHARED: OnceLock<SiteContent> = OnceLock::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    AlertCircle,
    ArrowRight,
    BarChart,
    Bot,
    Calendar,
    #[default]
    Check,
    Clock,
    Cpu,
    Factory,
    Globe,
    Layers,
    Mail,
    MapPin,
    Search,
    ShieldCheck,
    TrendingUp,
    Truck,
    Zap,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::AlertCircle => "⚠️",
            Icon::ArrowRight => "→",
            Icon::BarChart => "📊",
            Icon::Bot => "🤖",
            Icon::Calendar => "📅",
            Icon::Check => "✓",
            Icon::Clock => "🕐",
            Icon::Cpu => "🔌",
            Icon::Factory => "🏭",
            Icon::Globe => "🌐",
            Icon::Layers => "🗂️",
            Icon::Mail => "📧",
            Icon::MapPin => "📍",
            Icon::Search => "🔍",
            Icon::ShieldCheck => "🛡️",
            Icon::TrendingUp => "📈",
            Icon::Truck => "🚚",
            Icon::Zap => "⚡",
        }
    }
}

/// Colour accent for dashboard figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Blue,
    Cyan,
    Green,
}

impl Tone {
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Blue => "text-blue-400",
            Tone::Cyan => "text-cyan-400",
            Tone::Green => "text-green-400",
        }
    }
}

/// Lifecycle of a roadmap or rollout phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    Completed,
    Active,
    Next,
    Upcoming,
    #[default]
    Future,
}

impl PhaseStatus {
    pub fn is_active(self) -> bool {
        self == PhaseStatus::Active
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    pub highlight: String,
    pub lede: String,
}

/// Titled entry with an icon (problem bullets, feature cards)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudiencePitch {
    pub heading: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub pitch: String,
    pub benefits: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audiences {
    pub manufacturers: AudiencePitch,
    pub suppliers: AudiencePitch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PilotPhase {
    pub title: String,
    pub status: PhaseStatus,
    pub status_label: String,
    pub locations: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub year: String,
    pub title: String,
    pub description: String,
    pub status: PhaseStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub heading: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub tagline: String,
    pub company: String,
    /// Fixed in the document so the server render and hydration agree
    pub copyright_year: u16,
    pub columns: Vec<FooterColumn>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub label: String,
    pub value: String,
    pub tone: Tone,
    pub icon: Icon,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRow {
    pub item: String,
    pub id: String,
    pub status: String,
    pub age: String,
}

impl RequirementRow {
    pub fn badge_classes(&self) -> &'static str {
        match self.status.as_str() {
            "Analyzing" => "border-yellow-500/20 bg-yellow-500/10 text-yellow-500",
            "Pending" => "border-slate-500/20 bg-slate-500/10 text-slate-500",
            _ => "border-blue-500/20 bg-blue-500/10 text-blue-400",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardContent {
    pub platform_items: Vec<String>,
    pub workflow_items: Vec<String>,
    pub stats: Vec<DashboardStat>,
    pub requirements: Vec<RequirementRow>,
    pub insight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub problems: Vec<ContentItem>,
    pub features: Vec<ContentItem>,
    pub audiences: Audiences,
    pub pilot_phases: Vec<PilotPhase>,
    pub roadmap: Vec<RoadmapPhase>,
    pub registration_perks: Vec<String>,
    pub footer: FooterContent,
    pub dashboard: DashboardContent,
}

impl SiteContent {
    /// Parse and validate a content document
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// The content document compiled into the binary
    pub fn embedded() -> CoreResult<Self> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Process-wide embedded content, parsed on first use.
    ///
    /// A malformed document is logged and replaced by empty content; the
    /// server checks `embedded()` at startup so this only matters in the
    /// browser.
    pub fn shared() -> &'static SiteContent {
        SHARED.get_or_init(|| {
            Self::embedded().unwrap_or_else(|err| {
                tracing::error!(error = %err, "embedded site content is invalid");
                SiteContent::default()
            })
        })
    }

    pub fn validate(&self) -> CoreResult<()> {
        require_text("hero.headline", &self.hero.headline)?;
        require_text("hero.highlight", &self.hero.highlight)?;
        require_text("hero.lede", &self.hero.lede)?;

        require_items("problems", &self.problems)?;
        require_items("features", &self.features)?;
        require_items("pilot_phases", &self.pilot_phases)?;
        require_items("roadmap", &self.roadmap)?;
        require_items("registration_perks", &self.registration_perks)?;
        require_items("footer.columns", &self.footer.columns)?;
        for column in &self.footer.columns {
            require_items("footer.columns.links", &column.links)?;
        }
        if self.footer.copyright_year == 0 {
            return Err(CoreError::InvalidContent(
                "footer.copyright_year must be set".to_string(),
            ));
        }

        require_items("dashboard.platform_items", &self.dashboard.platform_items)?;
        require_items("dashboard.workflow_items", &self.dashboard.workflow_items)?;
        require_items("dashboard.stats", &self.dashboard.stats)?;
        require_items("dashboard.requirements", &self.dashboard.requirements)?;

        for (name, pitch) in [
            ("audiences.manufacturers", &self.audiences.manufacturers),
            ("audiences.suppliers", &self.audiences.suppliers),
        ] {
            require_text(name, &pitch.heading)?;
            require_text(name, &pitch.pitch)?;
            require_text(name, &pitch.cta)?;
            require_items(name, &pitch.benefits)?;
        }

        let titles = self
            .problems
            .iter()
            .chain(&self.features)
            .map(|item| item.title.as_str())
            .chain(self.pilot_phases.iter().map(|phase| phase.title.as_str()))
            .chain(self.roadmap.iter().map(|phase| phase.title.as_str()))
            .chain(self.footer.columns.iter().map(|column| column.heading.as_str()))
            .chain(self.dashboard.stats.iter().map(|stat| stat.label.as_str()))
            .chain(self.dashboard.requirements.iter().map(|row| row.item.as_str()));
        for title in titles {
            require_text("title", title)?;
        }

        Ok(())
    }
}

fn require_items<T>(name: &str, items: &[T]) -> CoreResult<()> {
    if items.is_empty() {
        return Err(CoreError::InvalidContent(format!("{} must not be empty", name)));
    }
    Ok(())
}

fn require_text(name: &str, text: &str) -> CoreResult<()> {
    if text.trim().is_empty() {
        return Err(CoreError::InvalidContent(format!("{} must not be blank", name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_is_valid() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.problems.len(), 3);
        assert_eq!(content.features.len(), 6);
        assert_eq!(content.pilot_phases.len(), 2);
        assert_eq!(content.registration_perks.len(), 3);
        assert_eq!(content.audiences.manufacturers.benefits.len(), 4);
        assert_eq!(content.audiences.suppliers.benefits.len(), 4);
    }

    #[test]
    fn test_roadmap_has_four_phases_in_order() {
        let content = SiteContent::embedded().unwrap();
        let years: Vec<_> = content.roadmap.iter().map(|p| p.year.as_str()).collect();
        assert_eq!(years, vec!["2025", "Q1 2026", "Q2 2026", "2027"]);
        let active: Vec<_> = content.roadmap.iter().filter(|p| p.status.is_active()).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "MVP & Pilot");
    }

    #[test]
    fn test_footer_columns() {
        let content = SiteContent::embedded().unwrap();
        let headings: Vec<_> = content.footer.columns.iter().map(|c| c.heading.as_str()).collect();
        assert_eq!(headings, vec!["Platform", "Company", "Legal"]);
        assert_eq!(content.footer.columns[2].links.len(), 3);
    }

    #[test]
    fn test_shared_matches_embedded() {
        assert_eq!(SiteContent::shared(), &SiteContent::embedded().unwrap());
    }

    #[test]
    fn test_malformed_json_is_a_content_error() {
        let err = SiteContent::from_json("{ \"problems\": ").unwrap_err();
        assert!(matches!(err, CoreError::Content(_)));
    }

    #[test]
    fn test_empty_roadmap_is_rejected() {
        let mut content = SiteContent::embedded().unwrap();
        content.roadmap.clear();
        let json = serde_json::to_string(&content).unwrap();
        let err = SiteContent::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("roadmap"));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut content = SiteContent::embedded().unwrap();
        content.features[2].title = "  ".to_string();
        assert!(matches!(content.validate(), Err(CoreError::InvalidContent(_))));
    }

    #[test]
    fn test_empty_dashboard_stats_is_rejected() {
        let mut content = SiteContent::embedded().unwrap();
        content.dashboard.stats.clear();
        let json = serde_json::to_string(&content).unwrap();
        let err = SiteContent::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("dashboard.stats"));
    }

    #[test]
    fn test_every_rendered_list_is_required() {
        let clears: [fn(&mut SiteContent); 6] = [
            |c| c.dashboard.platform_items.clear(),
            |c| c.dashboard.workflow_items.clear(),
            |c| c.dashboard.requirements.clear(),
            |c| c.footer.columns[0].links.clear(),
            |c| c.audiences.suppliers.benefits.clear(),
            |c| c.registration_perks.clear(),
        ];
        for clear in clears {
            let mut content = SiteContent::embedded().unwrap();
            clear(&mut content);
            assert!(matches!(content.validate(), Err(CoreError::InvalidContent(_))));
        }
    }

    #[test]
    fn test_blank_hero_and_pitch_text_is_rejected() {
        let blanks: [fn(&mut SiteContent); 4] = [
            |c| c.hero.headline = "   ".to_string(),
            |c| c.hero.lede = String::new(),
            |c| c.audiences.manufacturers.pitch = " ".to_string(),
            |c| c.audiences.suppliers.cta = String::new(),
        ];
        for blank in blanks {
            let mut content = SiteContent::embedded().unwrap();
            blank(&mut content);
            assert!(matches!(content.validate(), Err(CoreError::InvalidContent(_))));
        }
    }

    #[test]
    fn test_missing_copyright_year_is_rejected() {
        let mut content = SiteContent::embedded().unwrap();
        assert_eq!(content.footer.copyright_year, 2025);
        content.footer.copyright_year = 0;
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_unknown_status_fails_to_parse() {
        let json = r#"{ "year": "2030", "title": "Mars", "description": "", "status": "someday" }"#;
        assert!(serde_json::from_str::<RoadmapPhase>(json).is_err());
    }

    #[test]
    fn test_requirement_badges() {
        let row = |status: &str| RequirementRow {
            status: status.to_string(),
            ..RequirementRow::default()
        };
        assert!(row("Analyzing").badge_classes().contains("yellow"));
        assert!(row("Pending").badge_classes().contains("slate"));
        assert!(row("Matched").badge_classes().contains("blue"));
    }
}
