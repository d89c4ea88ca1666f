//! Ordered response rules. The first rule whose condition holds answers the
//! query; later rules are not consulted.

use crate::classifier;
use crate::config::ResponseConfig;
use crate::models::SearchResult;
use crate::suggester;
use crate::templates::{self, SummaryKind, Template};
use serde::Serialize;

const SUMMARY_LINES: usize = 5;
const EXCERPT_LINES: usize = 6;

const HEALTH_INSURANCE: &[&str] = &[
    "health insurance",
    "medical insurance",
    "health coverage",
    "medical coverage",
    "insurance coverage",
];
const LEAVE_QUANTITY: &[&str] = &[
    "how many leave",
    "how much leave",
    "number of leave",
    "leave entitlement",
    "total leave",
];
const QUANTITY: &[&str] = &["how many", "how much", "number of", "total"];
const ANNUAL: &[&str] = &["annual", "vacation", "yearly"];
const BENEFIT_MENTION: &[&str] = &["benefit", "perks"];
const SPECIFIC_BENEFIT: &[&str] = &["health", "insurance", "pf", "bonus", "esop"];
const WORK_FROM_HOME: &[&str] = &[
    "work from home",
    "wfh",
    "remote work",
    "work remotely",
    "home office",
];
const RESIGNATION: &[&str] = &["resign", "resignation", "notice period", "quit", "leaving"];
const MATERNITY: &[&str] = &["maternity", "pregnancy", "pregnant", "maternal"];
const PERMISSION: &[&str] = &["allowed", "able to"];
const CARRY_FORWARD: &[&str] = &["carry forward", "carryover"];

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Lowercased query contains any of the phrases.
    Contains(&'static [&'static str]),
    StartsWith(&'static str),
    /// Best search score is strictly greater than the value.
    ScoreAbove(u32),
    All(Vec<Condition>),
    Any(Vec<Condition>),
    Not(Box<Condition>),
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Action {
    Template(Template),
    Summary(SummaryKind),
    Excerpt,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub condition: Condition,
    pub action: Action,
}

impl Rule {
    fn new(name: &'static str, condition: Condition, action: Action) -> Self {
        Self {
            name,
            condition,
            action,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    /// Query as typed; suggestions are keyed on it.
    pub query: &'a str,
    pub lowered: &'a str,
    pub result: &'a SearchResult,
    pub header_marker: &'a str,
}

pub fn matches(condition: &Condition, ctx: &RuleContext<'_>) -> bool {
    match condition {
        Condition::Contains(phrases) => phrases.iter().any(|p| ctx.lowered.contains(p)),
        Condition::StartsWith(prefix) => ctx.lowered.starts_with(prefix),
        Condition::ScoreAbove(threshold) => ctx.result.score > *threshold,
        Condition::All(all) => all.iter().all(|c| matches(c, ctx)),
        Condition::Any(any) => any.iter().any(|c| matches(c, ctx)),
        Condition::Not(inner) => !matches(inner, ctx),
        Condition::Always => true,
    }
}

/// First rule whose condition holds.
/// Rule answering when nothing else in a rule list matches.
pub static CATCH_ALL: Rule = Rule {
    name: "fallback",
    condition: Condition::Always,
    action: Action::Fallback,
};

/// First matching rule, or [`CATCH_ALL`] when none does.
pub fn evaluate<'r>(rules: &'r [Rule], ctx: &RuleContext<'_>) -> &'r Rule {
    rules
        .iter()
        .find(|r| matches(&r.condition, ctx))
        .unwrap_or(&CATCH_ALL)
}

pub fn render(action: Action, ctx: &RuleContext<'_>) -> String {
    match action {
        Action::Template(template) => template.text().to_string(),
        Action::Summary(kind) => {
            let lines = templates::body_lines(&ctx.result.text, ctx.header_marker, SUMMARY_LINES);
            templates::summary(kind, &lines, &ctx.result.source)
        }
        Action::Excerpt => {
            let lines = templates::body_lines(&ctx.result.text, ctx.header_marker, EXCERPT_LINES);
            let intent = classifier::classify_intent(ctx.query);
            let suggestions = suggester::suggestions(ctx.query, intent);
            templates::excerpt(&lines, &ctx.result.source, &suggestions)
        }
        Action::Fallback => {
            let intent = classifier::classify_intent(ctx.query);
            templates::fallback(&suggester::suggestions(ctx.query, intent))
        }
    }
}

/// The full cascade, highest priority first. Always ends with a catch-all
/// fallback rule.
pub fn cascade(config: &ResponseConfig) -> Vec<Rule> {
    use Condition::*;

    let leave_quantity = || {
        Any(vec![
            Contains(LEAVE_QUANTITY),
            All(vec![Contains(QUANTITY), Contains(&["leave"])]),
        ])
    };
    let permission = || Any(vec![StartsWith("can i"), Contains(PERMISSION)]);

    vec![
        Rule::new(
            "health_insurance",
            Contains(HEALTH_INSURANCE),
            Action::Template(Template::HealthInsurance),
        ),
        Rule::new(
            "annual_leave",
            All(vec![leave_quantity(), Contains(ANNUAL)]),
            Action::Template(Template::AnnualLeave),
        ),
        Rule::new(
            "sick_leave",
            All(vec![leave_quantity(), Contains(&["sick"])]),
            Action::Template(Template::SickLeave),
        ),
        Rule::new(
            "leave_breakdown",
            leave_quantity(),
            Action::Template(Template::LeaveBreakdown),
        ),
        Rule::new(
            "benefits_package",
            All(vec![
                Contains(BENEFIT_MENTION),
                Not(Box::new(Contains(SPECIFIC_BENEFIT))),
            ]),
            Action::Template(Template::BenefitsPackage),
        ),
        Rule::new(
            "work_from_home",
            Contains(WORK_FROM_HOME),
            Action::Template(Template::WorkFromHome),
        ),
        Rule::new(
            "resignation",
            Contains(RESIGNATION),
            Action::Template(Template::Resignation),
        ),
        Rule::new(
            "maternity",
            Contains(MATERNITY),
            Action::Template(Template::Maternity),
        ),
        Rule::new(
            "probation",
            Contains(&["probation"]),
            Action::Template(Template::Probation),
        ),
        Rule::new(
            "quantity_summary",
            All(vec![
                Contains(QUANTITY),
                ScoreAbove(config.summary_threshold),
            ]),
            Action::Summary(SummaryKind::Quantity),
        ),
        Rule::new(
            "carry_forward",
            All(vec![permission(), Contains(CARRY_FORWARD)]),
            Action::Template(Template::CarryForward),
        ),
        Rule::new(
            "permission_summary",
            All(vec![permission(), ScoreAbove(config.summary_threshold)]),
            Action::Summary(SummaryKind::Permission),
        ),
        Rule::new(
            "policy_excerpt",
            ScoreAbove(config.excerpt_threshold),
            Action::Excerpt,
        ),
        CATCH_ALL.clone(),
    ]
}
