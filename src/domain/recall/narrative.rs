//! Narrative generation for decision recall.
//!
//! Everything here is a pure function of `(decision, now)`. Given the same
//! inputs the composed report is byte-identical, which is what makes the
//! golden-output tests below possible.

use crate::domain::decision::Decision;
use crate::domain::foundation::Timestamp;

use super::{calendar_days_between, AgeBand};

/// Human-friendly phrase for how long ago a day count was.
///
/// Floor division throughout, no plural special-casing ("1 weeks ago" is
/// intentional and matches the upstream output).
pub fn relative_time_phrase(days: i64) -> String {
    if days == 0 {
        return "today".to_string();
    }
    if days == 1 {
        return "yesterday".to_string();
    }
    if days < 7 {
        return format!("{} days ago", days);
    }
    if days < 30 {
        return format!("{} weeks ago", days / 7);
    }
    if days < 365 {
        return format!("{} months ago", days / 30);
    }
    format!("{} years ago", days / 365)
}

/// The fixed, ordered reflection-question triple for an age band.
pub fn reflection_questions(band: AgeBand) -> [&'static str; 3] {
    match band {
        AgeBand::Recent => [
            "Does this decision still feel aligned with your current situation?",
            "Have any small details or assumptions changed since you made this choice?",
            "Would you make the same decision today without hesitation?",
        ],
        AgeBand::Medium => [
            "Do the same constraints still apply today?",
            "Has your priority or situation changed since this decision was made?",
            "Would you approach this decision differently now?",
        ],
        AgeBand::Old => [
            "What has changed in your life since this decision was made?",
            "Are the original reasons behind this choice still relevant today?",
            "If you were deciding from scratch now, would this still be your choice?",
        ],
    }
}

/// The suggestion paragraph for an age band.
pub fn suggestion_for_band(band: AgeBand) -> &'static str {
    match band {
        AgeBand::Recent => {
            "Since this decision was made recently, it likely still fits your current situation. \
             You may just want to confirm that the original reasoning still feels right."
        }
        AgeBand::Medium => {
            "As some time has passed, it could be helpful to reflect on whether your priorities \
             or constraints have shifted since this decision."
        }
        AgeBand::Old => {
            "Because this decision was made quite some time ago, you might want to revisit it \
             thoughtfully to see if it still aligns with your present goals and circumstances."
        }
    }
}

/// Composes the full recall report for a decision as of `now`.
///
/// Section order: recalled context block, reflection paragraph (relative
/// time + original reasoning), the three reflection questions, the
/// suggestion, and the closing disclaimer.
pub fn compose_report(decision: &Decision, now: &Timestamp) -> String {
    let days = calendar_days_between(now, decision.created_at());
    let band = AgeBand::classify(days);
    let relative_time = relative_time_phrase(days);
    let questions = reflection_questions(band);
    let suggestion = suggestion_for_band(band);

    format!(
        "\nRecalled Decision Context:\n\
         • Decision: {title}\n\
         • Original intent: {intent}\n\
         • Constraints considered: {constraints}\n\
         • Alternatives explored: {alternatives}\n\
         • Final choice: {final_choice}\n\
         \n\
         Reflection:\n\
         You made this decision {relative_time} based on the above context.\n\
         At that time, the choice was made because {reasoning}.\n\
         \n\
         Reflection Questions:\n\
         - {q0}\n\
         - {q1}\n\
         - {q2}\n\
         \n\
         Suggestion:\n\
         {suggestion}\n\
         \n\
         Note:\n\
         This information is recalled from your past decision to help you reflect — the final judgment remains yours.\n",
        title = decision.title(),
        intent = decision.intent(),
        constraints = decision.constraints().join(", "),
        alternatives = decision.alternatives().join(", "),
        final_choice = decision.final_choice(),
        relative_time = relative_time,
        reasoning = decision.reasoning(),
        q0 = questions[0],
        q1 = questions[1],
        q2 = questions[2],
        suggestion = suggestion,
    )
}
