use crate::models::Intent;

/// Three follow-up questions for a query, keyed on intent and a few surface
/// keywords. Deterministic.
pub fn suggestions(query: &str, intent: Intent) -> [&'static str; 3] {
    let query = query.to_lowercase();
    match intent {
        Intent::Leave if query.contains("annual") => [
            "How do I apply for annual leave?",
            "Can I carry forward annual leave?",
            "What if I need emergency leave?",
        ],
        Intent::Leave if query.contains("sick") => [
            "Do I need a medical certificate?",
            "How much notice for sick leave?",
            "What about chronic illness?",
        ],
        Intent::Leave => [
            "Tell me about maternity leave",
            "Can I combine different leave types?",
            "What's the leave approval process?",
        ],
        Intent::Benefits => [
            "What are the insurance coverage details?",
            "Tell me about performance bonuses",
            "How does the ESOP program work?",
        ],
        Intent::Policy if query.contains("wfh") || query.contains("remote") => [
            "What equipment is provided for WFH?",
            "Can I request full-time remote work?",
            "What's the attendance policy?",
        ],
        Intent::Policy => [
            "What's the probation period?",
            "Tell me about the notice period",
            "What are the working hours?",
        ],
        Intent::Other => [
            "How many leaves do I get?",
            "What are the employee benefits?",
            "Can I work from home?",
        ],
    }
}
