//! The generator capability interface and the deterministic rule table.

use serde::Serialize;

use landshift_core::constants::MAX_RECOMMENDATIONS;
use landshift_core::errors::AnalysisError;
use landshift_core::types::forecast::FutureTrendForecast;
use landshift_core::types::impact::ImpactType;
use landshift_core::types::snapshot::LandClass;
use landshift_core::FxHashSet;

/// Confidence above which forecast risk feeds extra recommendations.
const FORECAST_CONFIDENCE_GATE: f64 = 0.5;

/// Structured input contract shared by all generators.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRequest {
    pub before_class: LandClass,
    pub after_class: LandClass,
    pub impact_type: ImpactType,
    pub change_magnitude: f64,
    pub forecast: FutureTrendForecast,
}

/// A source of short, urgency-marked recommendation strings.
///
/// Implementations must be safe to call concurrently. Callers only ever
/// see this interface; failures of one implementation are recovered by
/// falling back to another, never surfaced as a core failure.
pub trait RecommendationGenerator: Send + Sync {
    fn generate(&self, request: &RecommendationRequest) -> Result<Vec<String>, AnalysisError>;
}

/// Deterministic rule-based generator. No I/O; independently testable
/// without network access.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedGenerator;

impl RuleBasedGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl RecommendationGenerator for RuleBasedGenerator {
    fn generate(&self, request: &RecommendationRequest) -> Result<Vec<String>, AnalysisError> {
        let mut items: Vec<&str> = Vec::new();

        match request.impact_type {
            ImpactType::SevereDegradation => items.extend([
                "🚨 URGENT: Implement immediate conservation measures",
                "🏛️ Establish legal protection for remaining natural areas",
                "💰 Secure emergency funding for restoration projects",
                "👥 Engage local communities in conservation efforts",
            ]),
            ImpactType::ModerateDegradation => items.extend([
                "⚠️ Monitor area closely for further changes",
                "🌱 Implement sustainable land use practices",
                "📋 Conduct environmental impact assessments",
                "🔬 Set up long-term monitoring systems",
            ]),
            ImpactType::Improvement => items.extend([
                "✅ Continue current conservation practices",
                "📈 Share success strategies with similar areas",
                "🔍 Monitor to ensure sustained improvement",
                "💡 Expand successful interventions to nearby areas",
            ]),
            ImpactType::NoteworthyChange => items.extend([
                "🛡️ Monitor this land use transition for environmental impacts",
                "📋 Assess the sustainability of current land use practices",
                "💡 Implement appropriate management strategies for new land use",
                "🔍 Track changes to ensure they align with conservation goals",
            ]),
            ImpactType::Neutral => {}
        }

        if request.forecast.confidence > FORECAST_CONFIDENCE_GATE
            && request.forecast.has_degrading_prediction()
        {
            items.extend([
                "🔮 Develop proactive strategies for predicted changes",
                "📊 Invest in early warning systems",
                "🎯 Target interventions in high-risk areas",
                "🤝 Build partnerships for long-term conservation",
            ]);
        }

        if request.before_class == LandClass::Forest && request.after_class != LandClass::Forest {
            items.extend([
                "🌲 Prioritize reforestation in suitable areas",
                "🚫 Strengthen anti-deforestation enforcement",
                "💼 Develop sustainable forestry alternatives",
                "🌍 Support carbon offset programs",
            ]);
        }

        if matches!(
            request.after_class,
            LandClass::Industrial | LandClass::Highway
        ) {
            items.extend([
                "♻️ Enforce strict environmental standards",
                "🏭 Promote green industrial technologies",
                "💨 Implement emission monitoring systems",
                "🌿 Require environmental restoration bonds",
            ]);
        }

        Ok(dedup_and_cap(items.into_iter().map(String::from)))
    }
}

/// Drop duplicates preserving first occurrence, then cap the list.
pub(crate) fn dedup_and_cap(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
            if out.len() == MAX_RECOMMENDATIONS {
                break;
            }
        }
    }
    out
}
