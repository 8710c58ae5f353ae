use super::dates::format_date;
use super::domain::Cycle;
use serde::{Deserialize, Serialize};

/// Separator between per-cycle renderings in the detailed template.
pub const PERIOD_SEPARATOR: &str = " | ";

/// Named conclusion templates. The caller decides which one a document needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryTemplate {
    /// One entry per cycle with its owed days.
    Detailed,
    /// Only the person and the aggregate owed total.
    Compact,
}

impl SummaryTemplate {
    pub const fn ordered() -> [Self; 2] {
        [Self::Detailed, Self::Compact]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::Compact => "compact",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "detailed" | "full" => Some(Self::Detailed),
            "compact" | "short" => Some(Self::Compact),
            _ => None,
        }
    }
}

/// Render the conclusion text for `person_name`. Cycles are narrated in the
/// order given.
pub fn summarize(person_name: &str, cycles: &[Cycle], template: SummaryTemplate) -> String {
    if cycles.is_empty() {
        return format!(
            "Conclui-se que o(a) ex-estagiário(a) {person_name} \
             não possui períodos de recesso registrados."
        );
    }

    match template {
        SummaryTemplate::Detailed => {
            let body = cycles
                .iter()
                .map(render_period)
                .collect::<Vec<_>>()
                .join(PERIOD_SEPARATOR);
            format!(
                "Conclui-se que o(a) ex-estagiário(a) {person_name} faz jus ao recebimento \
                 dos dias de recesso não gozados referentes aos períodos: {body}."
            )
        }
        SummaryTemplate::Compact => {
            let total: u32 = cycles.iter().map(Cycle::owed_or_entitlement).sum();
            format!(
                "Conclui-se que o(a) ex-estagiário(a) {person_name} faz jus ao recebimento \
                 de {total} dias de recesso não gozados."
            )
        }
    }
}

fn render_period(cycle: &Cycle) -> String {
    format!(
        "{} a {} – {} dias",
        format_date(cycle.start_date),
        format_date(cycle.end_date),
        cycle.owed_or_entitlement()
    )
}
