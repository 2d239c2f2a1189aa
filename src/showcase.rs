//! Before/after example prompts

use serde::Serialize;

/// A weak prompt, a rewritten version and what the rewrite changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    pub category: &'static str,
    pub before: &'static str,
    pub after: &'static str,
    pub improvements: &'static [&'static str],
}

static EXAMPLES: [Example; 3] = [
    Example {
        category: "Creative Writing",
        before: "Write a story.",
        after: "Write a 500-word short story about a time traveler who accidentally changes a minor historical event. Use third-person narrative, include dialogue, and end with an unexpected twist.",
        improvements: &[
            "Added specific length requirement",
            "Specified narrative style",
            "Included clear plot elements",
            "Defined story structure",
        ],
    },
    Example {
        category: "Technical Explanation",
        before: "Explain AI.",
        after: "Explain artificial intelligence to a high school student with no technical background. Cover the basic definition, how it works in simple terms, provide 3 real-world examples, and explain both benefits and concerns. Keep the explanation under 300 words.",
        improvements: &[
            "Defined target audience",
            "Specified complexity level",
            "Added structure requirements",
            "Set word limit",
        ],
    },
    Example {
        category: "Data Analysis",
        before: "Analyze this data.",
        after: "Analyze the sales data for trends and patterns. Provide: 1) Summary statistics, 2) Identify top 3 trends, 3) Compare year-over-year growth, 4) Recommend actionable next steps. Present findings in a structured report format.",
        improvements: &[
            "Specified analysis type",
            "Listed required outputs",
            "Added comparison request",
            "Defined format",
        ],
    },
];

/// The fixed example catalogue
pub fn examples() -> &'static [Example] {
    &EXAMPLES
}
