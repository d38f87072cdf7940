//! Static sections: succession guidance and the action plan
//!
//! Both are emitted unconditionally from the guidance library.

use crate::guidance::{ActionTemplate, GuidanceLibrary};

use super::types::{ActionHorizon, ActionItem, ActionPlan, SuccessionGuidance};

pub fn succession(guidance: &GuidanceLibrary) -> SuccessionGuidance {
    SuccessionGuidance {
        guidelines: guidance.succession_guidelines.clone(),
        required_documents: guidance.succession_documents.clone(),
        strategies: guidance.succession_strategies.clone(),
    }
}

fn items(templates: &[ActionTemplate]) -> Vec<ActionItem> {
    templates
        .iter()
        .map(|t| ActionItem {
            description: t.description.clone(),
            deadline_days: t.deadline_days,
        })
        .collect()
}

pub fn action_plan(guidance: &GuidanceLibrary) -> ActionPlan {
    let templates = &guidance.actions;
    ActionPlan {
        immediate: items(templates.for_horizon(ActionHorizon::Immediate)),
        short_term: items(templates.for_horizon(ActionHorizon::ShortTerm)),
        medium_term: items(templates.for_horizon(ActionHorizon::MediumTerm)),
        long_term: items(templates.for_horizon(ActionHorizon::LongTerm)),
    }
}
