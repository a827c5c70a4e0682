use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::MalformedDeckError;

/// A ten-section pitch deck plus presentation metadata.
///
/// Sections are stored as named fields in presentation order. Use
/// [`Deck::sections`] to walk them together with their slot metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Deck {
    pub title_section: NarrativeSection,
    pub problem_section: NarrativeSection,
    pub solution_section: NarrativeSection,
    pub market_section: MarketSection,
    pub business_model_section: BusinessModelSection,
    pub differentiation_section: NarrativeSection,
    pub roadmap_section: RoadmapSection,
    pub team_section: NarrativeSection,
    pub financials_section: NarrativeSection,
    pub call_to_action_section: NarrativeSection,

    pub target_audience: String,
    pub presentation_duration: String,
    #[serde(default)]
    pub presentation_tips: Vec<String>,
}

/// Free-form slide: used by seven of the ten sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NarrativeSection {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    pub suggested_visual: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MarketSection {
    pub market_size: String,
    pub market_growth: String,
    #[serde(default)]
    pub target_segments: Vec<String>,
    #[serde(default)]
    pub trends: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BusinessModelSection {
    #[serde(default)]
    pub monetization_strategies: Vec<String>,
    #[serde(default)]
    pub revenue_sources: Vec<String>,
    #[serde(default)]
    pub estimated_costs: Vec<String>,
    pub revenue_projection: String,
    pub break_even: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoadmapSection {
    #[serde(default)]
    pub phases: Vec<String>,
    pub timeline: String,
    #[serde(default)]
    pub key_milestones: Vec<String>,
    #[serde(default)]
    pub resources_needed: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
}

// ── Section slots ────────────────────────────────────────────────────────────

/// The four section shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionVariant {
    Narrative,
    Market,
    BusinessModel,
    Roadmap,
}

/// Static metadata for one of the ten deck positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSlot {
    /// 1-based position in the deck.
    pub ordinal: usize,
    /// JSON key of the section in the deck object.
    pub key: &'static str,
    /// Human-readable name used on the section banner.
    pub name: &'static str,
    pub variant: SectionVariant,
}

pub const SECTION_COUNT: usize = 10;

pub static SECTION_SLOTS: [SectionSlot; SECTION_COUNT] = [
    slot(1, "title_section", "Title & Introduction", SectionVariant::Narrative),
    slot(2, "problem_section", "Problem / Opportunity", SectionVariant::Narrative),
    slot(3, "solution_section", "Solution / Game Concept", SectionVariant::Narrative),
    slot(4, "market_section", "Market Analysis", SectionVariant::Market),
    slot(5, "business_model_section", "Business Model", SectionVariant::BusinessModel),
    slot(6, "differentiation_section", "Differentiation / Competition", SectionVariant::Narrative),
    slot(7, "roadmap_section", "Development Roadmap", SectionVariant::Roadmap),
    slot(8, "team_section", "Team / Resources", SectionVariant::Narrative),
    slot(9, "financials_section", "Financial Projections", SectionVariant::Narrative),
    slot(10, "call_to_action_section", "Call to Action", SectionVariant::Narrative),
];

const fn slot(
    ordinal: usize,
    key: &'static str,
    name: &'static str,
    variant: SectionVariant,
) -> SectionSlot {
    SectionSlot {
        ordinal,
        key,
        name,
        variant,
    }
}

/// A borrowed view of one section, tagged by shape.
#[derive(Debug, Clone, Copy)]
pub enum SectionRef<'a> {
    Narrative(&'a NarrativeSection),
    Market(&'a MarketSection),
    BusinessModel(&'a BusinessModelSection),
    Roadmap(&'a RoadmapSection),
}

impl SectionRef<'_> {
    pub fn variant(&self) -> SectionVariant {
        match self {
            SectionRef::Narrative(_) => SectionVariant::Narrative,
            SectionRef::Market(_) => SectionVariant::Market,
            SectionRef::BusinessModel(_) => SectionVariant::BusinessModel,
            SectionRef::Roadmap(_) => SectionVariant::Roadmap,
        }
    }
}

impl Deck {
    /// Walk the ten sections in presentation order.
    pub fn sections(&self) -> impl Iterator<Item = (&'static SectionSlot, SectionRef<'_>)> {
        let refs = [
            SectionRef::Narrative(&self.title_section),
            SectionRef::Narrative(&self.problem_section),
            SectionRef::Narrative(&self.solution_section),
            SectionRef::Market(&self.market_section),
            SectionRef::BusinessModel(&self.business_model_section),
            SectionRef::Narrative(&self.differentiation_section),
            SectionRef::Roadmap(&self.roadmap_section),
            SectionRef::Narrative(&self.team_section),
            SectionRef::Narrative(&self.financials_section),
            SectionRef::Narrative(&self.call_to_action_section),
        ];
        SECTION_SLOTS.iter().zip(refs)
    }

    /// Validate a JSON value produced by the content generator and build a
    /// deck from it.
    ///
    /// Scalar text fields are required. List fields may be absent or `null`
    /// (both read as empty) but must be arrays of strings when present.
    pub fn from_value(value: &Value) -> Result<Self, MalformedDeckError> {
        let root = as_object(value, "deck")?;

        Ok(Deck {
            title_section: narrative(root, "title_section")?,
            problem_section: narrative(root, "problem_section")?,
            solution_section: narrative(root, "solution_section")?,
            market_section: market(root, "market_section")?,
            business_model_section: business_model(root, "business_model_section")?,
            differentiation_section: narrative(root, "differentiation_section")?,
            roadmap_section: roadmap(root, "roadmap_section")?,
            team_section: narrative(root, "team_section")?,
            financials_section: narrative(root, "financials_section")?,
            call_to_action_section: narrative(root, "call_to_action_section")?,
            target_audience: required_str(root, "", "target_audience")?,
            presentation_duration: required_str(root, "", "presentation_duration")?,
            presentation_tips: optional_list(root, "", "presentation_tips")?,
        })
    }

    /// Parse and validate a deck from raw JSON text.
    pub fn from_json(text: &str) -> Result<Self, MalformedDeckError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| MalformedDeckError::new("deck", format!("invalid JSON: {e}")))?;
        Self::from_value(&value)
    }
}

// ── Validation helpers ───────────────────────────────────────────────────────

fn narrative(root: &Map<String, Value>, key: &str) -> Result<NarrativeSection, MalformedDeckError> {
    let obj = section_object(root, key)?;
    Ok(NarrativeSection {
        title: required_str(obj, key, "title")?,
        body: required_str(obj, key, "body")?,
        key_points: optional_list(obj, key, "key_points")?,
        suggested_visual: required_str(obj, key, "suggested_visual")?,
    })
}

fn market(root: &Map<String, Value>, key: &str) -> Result<MarketSection, MalformedDeckError> {
    let obj = section_object(root, key)?;
    Ok(MarketSection {
        market_size: required_str(obj, key, "market_size")?,
        market_growth: required_str(obj, key, "market_growth")?,
        target_segments: optional_list(obj, key, "target_segments")?,
        trends: optional_list(obj, key, "trends")?,
        opportunities: optional_list(obj, key, "opportunities")?,
    })
}

fn business_model(
    root: &Map<String, Value>,
    key: &str,
) -> Result<BusinessModelSection, MalformedDeckError> {
    let obj = section_object(root, key)?;
    Ok(BusinessModelSection {
        monetization_strategies: optional_list(obj, key, "monetization_strategies")?,
        revenue_sources: optional_list(obj, key, "revenue_sources")?,
        estimated_costs: optional_list(obj, key, "estimated_costs")?,
        revenue_projection: required_str(obj, key, "revenue_projection")?,
        break_even: required_str(obj, key, "break_even")?,
    })
}

fn roadmap(root: &Map<String, Value>, key: &str) -> Result<RoadmapSection, MalformedDeckError> {
    let obj = section_object(root, key)?;
    Ok(RoadmapSection {
        phases: optional_list(obj, key, "phases")?,
        timeline: required_str(obj, key, "timeline")?,
        key_milestones: optional_list(obj, key, "key_milestones")?,
        resources_needed: optional_list(obj, key, "resources_needed")?,
        risks: optional_list(obj, key, "risks")?,
    })
}

fn section_object<'a>(
    root: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Map<String, Value>, MalformedDeckError> {
    match root.get(key) {
        Some(value) => as_object(value, key),
        None => Err(MalformedDeckError::new(key, "missing required section")),
    }
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, MalformedDeckError> {
    value.as_object().ok_or_else(|| {
        MalformedDeckError::new(path, format!("expected an object, found {}", json_type(value)))
    })
}

fn required_str(
    obj: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<String, MalformedDeckError> {
    let path = field_path(parent, key);
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(MalformedDeckError::new(
            path,
            format!("expected a string, found {}", json_type(other)),
        )),
        None => Err(MalformedDeckError::new(path, "missing required field")),
    }
}

fn optional_list(
    obj: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<Vec<String>, MalformedDeckError> {
    let path = field_path(parent, key);
    match obj.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(MalformedDeckError::new(
                    format!("{path}[{i}]"),
                    format!("expected a string, found {}", json_type(other)),
                )),
            })
            .collect(),
        Some(other) => Err(MalformedDeckError::new(
            path,
            format!("expected a list, found {}", json_type(other)),
        )),
    }
}

fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
